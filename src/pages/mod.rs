//! Pages
//!
//! Top-level page components.

pub mod classifier;

pub use classifier::Classifier;
