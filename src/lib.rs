pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geodesy;
pub mod output;
