#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

pub mod logging;
pub mod parser;

pub use parser::Cli;
