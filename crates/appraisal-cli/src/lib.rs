#![warn(unused_crate_dependencies)]

pub mod cli;
mod commands;
mod configuration;
pub mod logging;

pub use commands::run;
pub use configuration::{
    get_configuration, get_configuration_from, ApiSettings, Configuration, Environment,
    LoggingSettings, StorageSettings,
};
