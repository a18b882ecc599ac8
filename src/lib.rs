pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::BrasilApiClient;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::lookup::{LookupService, Screen};
pub use domain::model::{Cnpj, CompanyRecord};
pub use utils::error::{CnpjError, Result};
