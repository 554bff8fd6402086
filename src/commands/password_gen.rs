use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use rpawogen::configtool::AppConfig;
use rpawogen::form::{self, FormRequest};
use rpawogen::PasswordGenerator;

use super::load_vocabulary;

pub fn generate_random(
    config: &AppConfig,
    length: Option<usize>,
    include_numbers: Option<bool>,
    include_symbols: Option<bool>,
) -> Result<()> {
    let request = FormRequest::Random {
        length: length.unwrap_or(config.random.length),
        include_numbers: include_numbers.unwrap_or(config.random.include_numbers),
        include_symbols: include_symbols.unwrap_or(config.random.include_symbols),
    };
    emit(&request, None)
}

pub fn generate_memorable(
    config: &AppConfig,
    words: Option<usize>,
    separator: Option<String>,
    capitalize: Option<bool>,
    wordlist: Option<&Path>,
) -> Result<()> {
    let vocabulary = load_vocabulary(wordlist, config)?;
    let request = FormRequest::Memorable {
        number_of_words: words.unwrap_or(config.memorable.number_of_words),
        separator: separator.unwrap_or_else(|| config.memorable.separator.clone()),
        capitalize: capitalize.unwrap_or(config.memorable.capitalize),
    };
    emit(&request, vocabulary)
}

pub fn generate_pin(config: &AppConfig, length: Option<usize>) -> Result<()> {
    let request = FormRequest::Pin {
        length: length.unwrap_or(config.pin.length),
    };
    emit(&request, None)
}

fn emit(request: &FormRequest, vocabulary: Option<rpawogen::Vocabulary>) -> Result<()> {
    let kind = request.kind();
    let generator = form::build_generator(request, vocabulary)
        .with_context(|| format!("Failed to generate {}", kind.label().to_lowercase()))?;
    let password = generator.generate();
    info!(kind = %kind, "password generated");
    println!("{}", form::render_password(&password));
    Ok(())
}
