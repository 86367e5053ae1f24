use crate::args;

use xtk::Result;

use std::path::PathBuf;

use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
}

/// Installs the logger (warnings to stderr, `RUST_LOG` overrides) and reads the input path
pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    return Ok(AppConfig { input_path });
}
