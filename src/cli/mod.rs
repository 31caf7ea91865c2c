//! Command-line interface module.

mod args;
pub mod build;
mod common;
pub mod query;

pub use args::{Cli, Commands, QueryArgs};
pub use common::Session;
