pub mod config;
pub mod interactive;
pub mod password_gen;

use anyhow::{Context, Result};
use std::path::Path;
use rpawogen::configtool::AppConfig;
use rpawogen::Vocabulary;

/// 命令行路径优先于配置文件；都未设置时返回 None（使用内置单词表）
pub fn load_vocabulary(wordlist: Option<&Path>, config: &AppConfig) -> Result<Option<Vocabulary>> {
    let Some(path) = wordlist.or(config.memorable.wordlist.as_deref()) else {
        return Ok(None);
    };
    let vocabulary = Vocabulary::from_file(path)
        .with_context(|| format!("Failed to load word list from {}", path.display()))?;
    Ok(Some(vocabulary))
}
