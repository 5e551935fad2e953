//! DigitLens
//!
//! Handwritten digit recognition frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Upload a digit image and preview it in place
//! - One-click classification against a configurable prediction service
//! - Animated boot screen shown while the interface warms up
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the prediction service over plain HTTP; the
//! service itself (model, serving) lives elsewhere.

use leptos::*;

mod api;
mod app;
mod components;
mod data_uri;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
