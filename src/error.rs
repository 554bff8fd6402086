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
// Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 生成器构造失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassGenError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Vocabulary is empty")]
    EmptyVocabulary,
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Unknown password type: {0}")]
    UnknownKind(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Generator(#[from] PassGenError),
}
