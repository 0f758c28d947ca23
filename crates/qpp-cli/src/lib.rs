//! Library side of the document validator CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
