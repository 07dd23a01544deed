#![warn(unused_crate_dependencies)]

// Only used in binary and triggers unused warning
use tokio as _;

mod app;
pub mod cli;
pub mod configuration;
pub mod tracing;

pub use app::App;
