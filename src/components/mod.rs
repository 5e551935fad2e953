//! UI Components
//!
//! Reusable Leptos components for the classifier.

pub mod backdrop;
pub mod loading_screen;
pub mod toast;

pub use backdrop::DigitBackdrop;
pub use loading_screen::LoadingScreen;
pub use toast::Toast;
