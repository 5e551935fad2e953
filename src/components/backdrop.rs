//! Decorative Digit Backdrop
//!
//! Faded digits scattered across the viewport, purely cosmetic.

use leptos::*;

/// Scatter `count` pseudo-random digits behind the foreground content
#[component]
pub fn DigitBackdrop(
    /// How many digits to scatter
    #[prop(default = 20)]
    count: usize,
    /// Extra classes controlling tone and size
    #[prop(default = "text-white/20 text-xl")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none overflow-hidden">
            {(0..count)
                .map(|_| {
                    view! {
                        <div
                            class=format!("absolute animate-pulse {}", tone)
                            style=scatter_style()
                        >
                            {random_digit()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// A digit in 0..=9, from the browser's RNG
pub fn random_digit() -> u8 {
    (js_sys::Math::random() * 10.0) as u8
}

fn scatter_style() -> String {
    format!(
        "top: {:.0}%; left: {:.0}%; animation-delay: {:.1}s; animation-duration: {:.1}s",
        js_sys::Math::random() * 100.0,
        js_sys::Math::random() * 100.0,
        js_sys::Math::random() * 3.0,
        3.0 + js_sys::Math::random() * 2.0,
    )
}
