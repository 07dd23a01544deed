//! Data model and constants shared by the Beer Scanner clients

#![warn(unused_crate_dependencies)]


pub mod const_config;
pub mod errors;
pub mod id;
mod macros;
pub mod model;
pub mod req_args;
pub mod token;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
