#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod commands;
pub mod parser;
pub mod seed;

pub use commands::{AppArg, Commands};
pub use parser::Cli;
