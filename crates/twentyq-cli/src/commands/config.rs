use std::path::PathBuf;

use anyhow::Result;
use twentyq_infrastructure::ConfigService;

/// Resolves which config file is in use. Nothing is read from disk here.
pub fn service(explicit: Option<PathBuf>) -> Result<ConfigService> {
    match explicit {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => Ok(ConfigService::new()?),
    }
}

pub fn print_path(service: &ConfigService) {
    println!("{}", service.path().display());
}
