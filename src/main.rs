use std::env;

use anyhow::{Context, Result};
use chomsky::{Config, Error};
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    let config = match Config::from_args(env::args_os()) {
        Ok(config) => config,
        // prints usage, or help and version with exit code 0
        Err(Error::Cli(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };
    chomsky::run(&config).with_context(|| {
        format!("failed to convert `{}`", config.input.display())
    })?;
    Ok(())
}
