//! App Root Component
//!
//! Sequences the two top-level views and installs global providers.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{LoadingScreen, Toast};
use crate::pages::Classifier;
use crate::state::global::provide_global_state;

/// How long the decorative boot screen stays up before the classifier mounts
const BOOT_SCREEN_MS: u32 = 4_000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let (booting, set_booting) = create_signal(true);

    // One-shot transition to the classifier, never reversed. Cancelled if
    // the app unmounts first.
    let boot_timer = Timeout::new(BOOT_SCREEN_MS, move || set_booting.set(false));
    on_cleanup(move || {
        boot_timer.cancel();
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-900 via-blue-900 to-indigo-900">
            {move || {
                if booting.get() {
                    view! { <LoadingScreen /> }.into_view()
                } else {
                    view! { <Classifier /> }.into_view()
                }
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}
