//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::PassGenError;
use crate::vocabulary::Vocabulary;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// 所有密码生成器的共同接口
///
/// 配置在构造时固定，`generate` 不会失败，也不保存生成过的密码。
pub trait PasswordGenerator {
    /// 使用给定的随机源生成一个密码
    fn generate_with(&self, rng: &mut dyn RngCore) -> String;

    /// 使用系统随机源生成一个密码
    fn generate(&self) -> String {
        self.generate_with(&mut OsRng)
    }
}

// 随机字符密码
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPasswordGenerator {
    length: usize,
    universe: Vec<char>,
}

impl RandomPasswordGenerator {
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Result<Self, PassGenError> {
        if length == 0 {
            return Err(PassGenError::InvalidConfiguration(
                "Password length must be at least 1".to_string(),
            ));
        }

        let mut char_pool = LETTERS.to_string();
        if include_numbers { char_pool.push_str(DIGITS); }
        if include_symbols { char_pool.push_str(SYMBOLS); }
        let universe: Vec<char> = char_pool.chars().collect();

        if universe.is_empty() {
            return Err(PassGenError::InvalidConfiguration(
                "Character universe is empty".to_string(),
            ));
        }

        debug!(length, include_numbers, include_symbols, universe = universe.len(), "random password generator ready");
        Ok(Self { length, universe })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn universe(&self) -> &[char] {
        &self.universe
    }
}

impl Default for RandomPasswordGenerator {
    fn default() -> Self {
        Self {
            length: 8,
            universe: LETTERS.chars().chain(DIGITS.chars()).chain(SYMBOLS.chars()).collect(),
        }
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let mut password = String::with_capacity(self.length);
        for _ in 0..self.length {
            if let Some(c) = self.universe.choose(rng) {
                password.push(*c);
            }
        }
        password
    }
}

/// 记忆密码（基于单词列表）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorablePasswordGenerator {
    number_of_words: usize,
    separator: String,
    capitalize: bool,
    vocabulary: Vocabulary,
}

impl MemorablePasswordGenerator {
    /// `vocabulary` 为 `None` 时使用内置英文单词表
    pub fn new(
        number_of_words: usize,
        separator: impl Into<String>,
        capitalize: bool,
        vocabulary: Option<Vocabulary>,
    ) -> Result<Self, PassGenError> {
        if number_of_words == 0 {
            return Err(PassGenError::InvalidConfiguration(
                "Word count must be at least 1".to_string(),
            ));
        }
        let vocabulary = vocabulary.unwrap_or_else(Vocabulary::english);
        if vocabulary.is_empty() {
            return Err(PassGenError::EmptyVocabulary);
        }

        let separator = separator.into();
        debug!(number_of_words, capitalize, vocabulary = vocabulary.len(), "memorable password generator ready");
        Ok(Self {
            number_of_words,
            separator,
            capitalize,
            vocabulary,
        })
    }

    pub fn number_of_words(&self) -> usize {
        self.number_of_words
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn capitalize(&self) -> bool {
        self.capitalize
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Default for MemorablePasswordGenerator {
    fn default() -> Self {
        Self {
            number_of_words: 4,
            separator: "-".to_string(),
            capitalize: false,
            vocabulary: Vocabulary::english(),
        }
    }
}

impl PasswordGenerator for MemorablePasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let mut words = Vec::with_capacity(self.number_of_words);
        for _ in 0..self.number_of_words {
            let Some(word) = self.vocabulary.words().choose(rng) else {
                continue;
            };
            // 大写或小写各一半概率
            let word = if !self.capitalize {
                word.clone()
            } else if rng.gen_bool(0.5) {
                capitalize_word(word)
            } else {
                word.to_lowercase()
            };
            words.push(word);
        }
        words.join(&self.separator)
    }
}

/// 首字母大写，其余小写
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

// 数字 PIN 码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinCodeGenerator {
    length: usize,
}

impl PinCodeGenerator {
    pub fn new(length: usize) -> Result<Self, PassGenError> {
        if length == 0 {
            return Err(PassGenError::InvalidConfiguration(
                "Pin code length must be at least 1".to_string(),
            ));
        }
        debug!(length, "pin code generator ready");
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for PinCodeGenerator {
    fn default() -> Self {
        Self { length: 8 }
    }
}

impl PasswordGenerator for PinCodeGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let digits = DIGITS.as_bytes();
        (0..self.length)
            .map(|_| digits[rng.gen_range(0..digits.len())] as char)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Random,
    Memorable,
    Pin,
}

/// 三种生成器之一
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Random(RandomPasswordGenerator),
    Memorable(MemorablePasswordGenerator),
    Pin(PinCodeGenerator),
}

impl Generator {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Random(_) => GeneratorKind::Random,
            Generator::Memorable(_) => GeneratorKind::Memorable,
            Generator::Pin(_) => GeneratorKind::Pin,
        }
    }
}

impl PasswordGenerator for Generator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        match self {
            Generator::Random(g) => g.generate_with(rng),
            Generator::Memorable(g) => g.generate_with(rng),
            Generator::Pin(g) => g.generate_with(rng),
        }
    }
}

impl From<RandomPasswordGenerator> for Generator {
    fn from(g: RandomPasswordGenerator) -> Self {
        Generator::Random(g)
    }
}

impl From<MemorablePasswordGenerator> for Generator {
    fn from(g: MemorablePasswordGenerator) -> Self {
        Generator::Memorable(g)
    }
}

impl From<PinCodeGenerator> for Generator {
    fn from(g: PinCodeGenerator) -> Self {
        Generator::Pin(g)
    }
}
