//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Word lists for memorable passwords

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use crate::error::VocabularyError;

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

static ENGLISH: OnceLock<Vocabulary> = OnceLock::new();

/// 只读单词表，克隆时共享同一份数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// 内置英文单词表，首次调用时构建，之后复用
    pub fn english() -> Self {
        ENGLISH
            .get_or_init(|| {
                debug!(words = WORDS.len(), "building default vocabulary");
                Vocabulary::new(WORDS.iter().copied())
            })
            .clone()
    }

    /// 每行一个单词；`<编号>\t<单词>` 格式取单词列
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = parse_line(&line) {
                words.push(word.to_string());
            }
        }
        Ok(Self::new(words))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let read_error = |source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = fs::File::open(path).map_err(read_error)?;
        let vocabulary = Self::from_reader(BufReader::new(file)).map_err(read_error)?;
        debug!(path = %path.display(), words = vocabulary.len(), "loaded word list");
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// 两个句柄是否共享同一份数据
    pub fn shares_storage(&self, other: &Vocabulary) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }
}

fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.split_once('\t') {
        Some((index, word)) if index.chars().all(|c| c.is_ascii_digit()) => {
            let word = word.trim();
            (!word.is_empty()).then_some(word)
        }
        _ => Some(line),
    }
}
