use anyhow::{Context, Result};
use std::io;
use rpawogen::configtool::AppConfig;
use rpawogen::form;

use super::load_vocabulary;

pub fn run(config: &AppConfig) -> Result<()> {
    let vocabulary = load_vocabulary(None, config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    form::run_interactive(&mut input, &mut output, config, vocabulary)
        .context("Interactive form failed")?;
    Ok(())
}
