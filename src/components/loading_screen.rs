//! Loading Screen Component
//!
//! Decorative boot view shown before the classifier mounts: a cycling digit
//! and a progress bar, both driven by owned interval timers.

use gloo_timers::callback::Interval;
use leptos::*;

use super::backdrop::{random_digit, DigitBackdrop};

/// How often the showcased digit changes
const DIGIT_CYCLE_MS: u32 = 200;

/// How often the progress bar advances
const PROGRESS_TICK_MS: u32 = 80;

/// Full-screen boot view
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (digit, set_digit) = create_signal(random_digit());
    let (progress, set_progress) = create_signal(0u32);

    let digit_timer = Interval::new(DIGIT_CYCLE_MS, move || {
        set_digit.set(random_digit());
    });
    let progress_timer = Interval::new(PROGRESS_TICK_MS, move || {
        set_progress.update(|p| *p = advance_progress(*p));
    });

    // Both timers die with the view, whether the boot phase ran to
    // completion or the app unmounted early.
    on_cleanup(move || {
        digit_timer.cancel();
        progress_timer.cancel();
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center relative overflow-hidden">
            <DigitBackdrop count=50 tone="text-white/10 text-2xl" />

            <div class="text-center z-10">
                <h1 class="text-6xl font-bold text-white mb-8 animate-fade-in">
                    "MNIST Digit Classifier"
                </h1>

                <div class="relative mb-8">
                    <div class="text-9xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-pink-400 via-purple-400 to-blue-400 animate-scale-in">
                        {move || digit.get()}
                    </div>
                    <div class="absolute inset-0 text-9xl font-bold text-white opacity-20 blur-lg">
                        {move || digit.get()}
                    </div>
                </div>

                <div class="w-64 h-2 bg-gray-700 rounded-full mx-auto mb-4">
                    <div
                        class="h-full bg-gradient-to-r from-pink-500 via-purple-500 to-blue-500 rounded-full transition-all duration-300 ease-out"
                        style=move || format!("width: {}%", progress.get())
                    />
                </div>

                <p class="text-white text-xl opacity-80">
                    {move || format!("Loading AI Model... {}%", progress.get())}
                </p>
            </div>
        </div>
    }
}

/// Advance the progress indicator, saturating at 100
fn advance_progress(progress: u32) -> u32 {
    (progress + 2).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_advances_in_even_steps() {
        assert_eq!(advance_progress(0), 2);
        assert_eq!(advance_progress(50), 52);
    }

    #[test]
    fn progress_saturates_at_one_hundred() {
        assert_eq!(advance_progress(98), 100);
        assert_eq!(advance_progress(99), 100);
        assert_eq!(advance_progress(100), 100);
    }
}
