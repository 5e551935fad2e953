//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Data URI of the currently staged upload
    pub selected_image: RwSignal<Option<String>>,
    /// Result of the last successful classification
    pub prediction: RwSignal<Option<Prediction>>,
    /// True while a classification request is in flight
    pub analyzing: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Informational message (for toasts)
    pub info: RwSignal<Option<String>>,
}

/// A classification returned by the prediction service
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Prediction {
    /// Predicted digit, 0 through 9
    pub digit: u8,
    /// Confidence as a percentage, 0 through 100
    pub confidence: f64,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            selected_image: create_rw_signal(None),
            prediction: create_rw_signal(None),
            analyzing: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            info: create_rw_signal(None),
        }
    }

    /// Stage a freshly uploaded image. A new image invalidates any prior
    /// result.
    pub fn stage_image(&self, data_uri: String) {
        self.selected_image.set(Some(data_uri));
        self.prediction.set(None);
    }

    /// Record a completed classification
    pub fn store_prediction(&self, prediction: Prediction) {
        self.prediction.set(Some(prediction));
    }

    /// Return the workflow to its initial state
    pub fn reset(&self) {
        self.selected_image.set(None);
        self.prediction.set(None);
        self.analyzing.set(false);
    }

    /// Whether there is anything for Reset to clear
    pub fn has_work(&self) -> bool {
        self.selected_image.get().is_some() || self.prediction.get().is_some()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show an informational message (auto-clears after timeout)
    pub fn show_info(&self, message: &str) {
        self.info.set(Some(message.to_string()));

        let info_signal = self.info;
        gloo_timers::callback::Timeout::new(3000, move || {
            info_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(test: impl FnOnce()) {
        let runtime = create_runtime();
        test();
        runtime.dispose();
    }

    #[test]
    fn staging_an_image_drops_the_previous_result() {
        with_runtime(|| {
            let state = GlobalState::new();
            state.store_prediction(Prediction {
                digit: 3,
                confidence: 88.0,
            });

            state.stage_image("data:image/png;base64,TWFu".to_string());

            assert!(state.prediction.get_untracked().is_none());
            assert_eq!(
                state.selected_image.get_untracked().as_deref(),
                Some("data:image/png;base64,TWFu")
            );
        });
    }

    #[test]
    fn storing_a_prediction_exposes_it() {
        with_runtime(|| {
            let state = GlobalState::new();
            state.store_prediction(Prediction {
                digit: 7,
                confidence: 93.2,
            });

            let stored = state.prediction.get_untracked().unwrap();
            assert_eq!(stored.digit, 7);
            assert_eq!(stored.confidence, 93.2);
        });
    }

    #[test]
    fn reset_clears_image_result_and_flag() {
        with_runtime(|| {
            let state = GlobalState::new();
            state.stage_image("data:image/png;base64,TWFu".to_string());
            state.store_prediction(Prediction {
                digit: 1,
                confidence: 51.0,
            });
            state.analyzing.set(true);

            state.reset();

            assert!(state.selected_image.get_untracked().is_none());
            assert!(state.prediction.get_untracked().is_none());
            assert!(!state.analyzing.get_untracked());
        });
    }

    #[test]
    fn fresh_state_has_nothing_to_reset() {
        with_runtime(|| {
            let state = GlobalState::new();
            assert!(!state.has_work());

            state.stage_image("data:image/png;base64,TWFu".to_string());
            assert!(state.has_work());
        });
    }
}
