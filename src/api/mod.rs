//! HTTP API
//!
//! Client for the remote digit prediction service.

pub mod client;

pub use client::{classify_digit, get_api_base, set_api_base, PredictError};
