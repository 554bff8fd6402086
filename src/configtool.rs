//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-30
// Version : 0.1.8
// License : Mulan PSL v2
//
// Config Tools

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use dirs::config_dir;
use tracing::debug;

use crate::error::ConfigError;

pub const APP_DIR: &str = "rpawogen";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomDefaults {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for RandomDefaults {
    fn default() -> Self {
        Self {
            length: 8,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorableDefaults {
    pub number_of_words: usize,
    pub separator: String,
    pub capitalize: bool,
    /// 自定义单词表路径，未设置时使用内置单词表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<PathBuf>,
}

impl Default for MemorableDefaults {
    fn default() -> Self {
        Self {
            number_of_words: 4,
            separator: "-".to_string(),
            capitalize: false,
            wordlist: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinDefaults {
    pub length: usize,
}

impl Default for PinDefaults {
    fn default() -> Self {
        Self { length: 8 }
    }
}

/// 表单和命令行使用的默认值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub random: RandomDefaults,
    pub memorable: MemorableDefaults,
    pub pin: PinDefaults,
}

impl AppConfig {
    /// 读取配置文件，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&config_data)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_config(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, self)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(dir) => Ok(dir.join(APP_DIR)),
        None => Err(ConfigError::ConfigDirError(
            "Failed to determine config directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// 命令行指定路径优先，否则使用默认路径
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}
