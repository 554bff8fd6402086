//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Interactive password form

use std::fmt;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

use crate::configtool::AppConfig;
use crate::error::FormError;
use crate::passgen::{
    Generator, MemorablePasswordGenerator, PasswordGenerator, PinCodeGenerator,
    RandomPasswordGenerator,
};
use crate::vocabulary::Vocabulary;

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=32;
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 4..=10;
pub const OUTPUT_LABEL: &str = "Your password is:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordKind {
    Random,
    Memorable,
    Pin,
}

impl PasswordKind {
    pub const ALL: [PasswordKind; 3] = [PasswordKind::Random, PasswordKind::Memorable, PasswordKind::Pin];

    pub fn label(&self) -> &'static str {
        match self {
            PasswordKind::Random => "Random Password",
            PasswordKind::Memorable => "Memorable Password",
            PasswordKind::Pin => "Pin Code",
        }
    }
}

impl fmt::Display for PasswordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 接受菜单序号、完整名称或简称
impl FromStr for PasswordKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let kind = match s.to_lowercase().as_str() {
            "1" | "random" | "random password" => PasswordKind::Random,
            "2" | "memorable" | "memorable password" => PasswordKind::Memorable,
            "3" | "pin" | "pin code" => PasswordKind::Pin,
            _ => return Err(FormError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// 表单收集到的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRequest {
    Random {
        length: usize,
        include_numbers: bool,
        include_symbols: bool,
    },
    Memorable {
        number_of_words: usize,
        separator: String,
        capitalize: bool,
    },
    Pin {
        length: usize,
    },
}

impl FormRequest {
    pub fn kind(&self) -> PasswordKind {
        match self {
            FormRequest::Random { .. } => PasswordKind::Random,
            FormRequest::Memorable { .. } => PasswordKind::Memorable,
            FormRequest::Pin { .. } => PasswordKind::Pin,
        }
    }

    /// 使用配置中的默认值
    pub fn from_defaults(kind: PasswordKind, config: &AppConfig) -> Self {
        match kind {
            PasswordKind::Random => FormRequest::Random {
                length: config.random.length,
                include_numbers: config.random.include_numbers,
                include_symbols: config.random.include_symbols,
            },
            PasswordKind::Memorable => FormRequest::Memorable {
                number_of_words: config.memorable.number_of_words,
                separator: config.memorable.separator.clone(),
                capitalize: config.memorable.capitalize,
            },
            PasswordKind::Pin => FormRequest::Pin {
                length: config.pin.length,
            },
        }
    }
}

pub fn check_range(field: &'static str, value: usize, range: &RangeInclusive<usize>) -> Result<usize, FormError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FormError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// 校验范围后构造生成器；`vocabulary` 只用于记忆密码
pub fn build_generator(request: &FormRequest, vocabulary: Option<Vocabulary>) -> Result<Generator, FormError> {
    let generator: Generator = match request {
        FormRequest::Random { length, include_numbers, include_symbols } => {
            let length = check_range("length", *length, &LENGTH_RANGE)?;
            RandomPasswordGenerator::new(length, *include_numbers, *include_symbols)?.into()
        }
        FormRequest::Memorable { number_of_words, separator, capitalize } => {
            let number_of_words = check_range("number of words", *number_of_words, &WORD_COUNT_RANGE)?;
            MemorablePasswordGenerator::new(number_of_words, separator.as_str(), *capitalize, vocabulary)?.into()
        }
        FormRequest::Pin { length } => {
            let length = check_range("length", *length, &LENGTH_RANGE)?;
            PinCodeGenerator::new(length)?.into()
        }
    };
    debug!(kind = %request.kind(), "generator built from form");
    Ok(generator)
}

pub fn render_password(password: &str) -> String {
    format!("{}\n```\n{}\n```", OUTPUT_LABEL, password)
}

/// 交互式表单：选择类型、收集参数、生成一次并输出
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &AppConfig,
    vocabulary: Option<Vocabulary>,
) -> Result<String, FormError> {
    writeln!(output, "Select a password type")?;
    for (i, kind) in PasswordKind::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, kind)?;
    }
    let kind = loop {
        let answer = prompt(input, output, "> ")?;
        if answer.trim().is_empty() {
            break PasswordKind::Random;
        }
        match answer.parse::<PasswordKind>() {
            Ok(kind) => break kind,
            Err(e) => writeln!(output, "{}", e)?,
        }
    };

    let request = match FormRequest::from_defaults(kind, config) {
        FormRequest::Pin { length } => FormRequest::Pin {
            length: prompt_number(input, output, "Select the length of your pin code", "length", length, &LENGTH_RANGE)?,
        },
        FormRequest::Random { length, include_numbers, include_symbols } => FormRequest::Random {
            length: prompt_number(input, output, "Select the length of your random password", "length", length, &LENGTH_RANGE)?,
            include_numbers: prompt_toggle(input, output, "Do you want your password to include numbers?", include_numbers)?,
            include_symbols: prompt_toggle(input, output, "Do you want your password to include symbols?", include_symbols)?,
        },
        FormRequest::Memorable { number_of_words, separator, capitalize } => FormRequest::Memorable {
            number_of_words: prompt_number(input, output, "Select the number of words in your password", "number of words", number_of_words, &WORD_COUNT_RANGE)?,
            separator: prompt_separator(input, output, &separator)?,
            capitalize: prompt_toggle(input, output, "Capitalization?", capitalize)?,
        },
    };

    let generator = build_generator(&request, vocabulary)?;
    let password = generator.generate();
    writeln!(output, "{}", render_password(&password))?;
    Ok(password)
}

// 读取一行，去掉行尾换行；输入结束视为错误
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String, FormError> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    field: &'static str,
    default: usize,
    range: &RangeInclusive<usize>,
) -> Result<usize, FormError> {
    let text = format!("{} ({}-{}) [{}]: ", question, range.start(), range.end(), default);
    loop {
        let answer = prompt(input, output, &text)?;
        let answer = answer.trim();
        let value = if answer.is_empty() {
            default
        } else {
            match answer.parse::<usize>() {
                Ok(v) => v,
                Err(_) => {
                    writeln!(output, "Please enter a whole number.")?;
                    continue;
                }
            }
        };
        match check_range(field, value, range) {
            Ok(v) => return Ok(v),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

fn prompt_toggle<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool, FormError> {
    let text = format!("{} {}: ", question, if default { "[Y/n]" } else { "[y/N]" });
    loop {
        let answer = prompt(input, output, &text)?;
        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

// 分隔符保留空格，只有空输入才取默认值
fn prompt_separator<R: BufRead, W: Write>(input: &mut R, output: &mut W, default: &str) -> Result<String, FormError> {
    let answer = prompt(input, output, &format!("Separator [{}]: ", default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}
