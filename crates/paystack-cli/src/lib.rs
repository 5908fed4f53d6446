/*
[INPUT]:  CLI modules
[OUTPUT]: Public paystack-cli crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod cli;
pub mod config;

pub use cli::{run, AccountsCommand, Cli, Command};
pub use config::{default_config_path, CliConfig, SECRET_KEY_ENV};
