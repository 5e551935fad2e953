//! Classifier Page
//!
//! The main screen: upload a handwritten digit image, send it to the
//! prediction service, show the returned digit and confidence.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::PredictError;
use crate::components::DigitBackdrop;
use crate::data_uri;
use crate::state::global::GlobalState;

/// Classifier page component
#[component]
pub fn Classifier() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected_image = state.selected_image;
    let prediction = state.prediction;
    let analyzing = state.analyzing;

    let file_input = create_node_ref::<html::Input>();

    // Image intake: validate the declared media type, then read the file
    // into a data URI off the UI thread.
    let state_for_upload = state.clone();
    let on_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        let mime = file.type_();
        if !is_image_mime(&mime) {
            state_for_upload.show_error("Please upload a valid image file");
            return;
        }

        let state_clone = state_for_upload.clone();
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                web_sys::console::error_1(&format!("FileReader unavailable: {:?}", e).into());
                return;
            }
        };

        let onload = {
            let reader = reader.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(result) = reader.result() {
                    if let Some(buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                        let bytes = js_sys::Uint8Array::new(buffer).to_vec();

                        state_clone.stage_image(data_uri::encode(&mime, &bytes));
                        state_clone.show_success("Image uploaded successfully!");
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = reader.read_as_array_buffer(&file);
    };

    // Prediction workflow: one multipart POST, result or toast, and the
    // analyzing flag always dropped once the attempt settles.
    let state_for_predict = state.clone();
    let on_predict = move |_| {
        let staged = match state_for_predict.selected_image.get() {
            Some(staged) => staged,
            None => {
                state_for_predict.show_error("Please upload an image first!");
                return;
            }
        };

        state_for_predict.analyzing.set(true);
        state_for_predict.prediction.set(None);

        let state_done = state_for_predict.clone();
        spawn_local(async move {
            let outcome = match data_uri::decode(&staged) {
                Ok((_mime, bytes)) => api::classify_digit(&bytes).await,
                Err(e) => Err(PredictError::Transport(format!("staged image unreadable: {}", e))),
            };

            match outcome {
                Ok(result) => {
                    state_done.show_success(&format!("Prediction complete! Digit: {}", result.digit));
                    state_done.store_prediction(result);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("prediction failed: {}", e).into());
                    state_done.show_error(&e.user_message());
                }
            }

            // Cleared on every path, success or failure.
            state_done.analyzing.set(false);
        });
    };

    let state_for_reset = state.clone();
    let on_reset = move |_| {
        state_for_reset.reset();

        // Clear the control so the same file can be picked again.
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }

        state_for_reset.show_info("Classifier reset!");
    };

    let state_for_reset_row = state.clone();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-8 animate-fade-in relative">
            // Page header
            <div class="text-center mb-12 z-10">
                <h1 class="text-5xl font-bold mb-4 bg-gradient-to-r from-pink-400 via-purple-400 to-blue-400 bg-clip-text text-transparent">
                    "MNIST Digit Classifier"
                </h1>
                <p class="text-xl text-gray-300">
                    "Upload a handwritten digit image and let AI predict the number!"
                </p>
            </div>

            <div class="w-full max-w-md bg-white/10 backdrop-blur-lg border border-white/20 rounded-xl shadow-2xl p-8 z-10">
                // Image upload area
                <div class="mb-8">
                    <input
                        node_ref=file_input
                        id="image-upload"
                        type="file"
                        accept="image/*"
                        class="hidden"
                        on:change=on_upload
                    />

                    <label
                        for="image-upload"
                        class="block w-full h-48 border-2 border-dashed border-white/30 rounded-lg cursor-pointer hover:border-white/50 transition-all duration-300"
                    >
                        <div class="flex flex-col items-center justify-center h-full">
                            {move || {
                                if let Some(src) = selected_image.get() {
                                    view! {
                                        <img
                                            src=src
                                            alt="Uploaded digit"
                                            class="max-w-full max-h-full object-contain rounded-lg"
                                        />
                                    }.into_view()
                                } else {
                                    view! {
                                        <span class="text-4xl text-white/60 mb-4">"⬆"</span>
                                        <p class="text-white/60">"Click to upload digit image"</p>
                                    }.into_view()
                                }
                            }}
                        </div>
                    </label>
                </div>

                // Prediction result
                {move || {
                    if analyzing.get() {
                        view! {
                            <div class="mb-8 text-center">
                                <ResultFrame>
                                    <div class="flex flex-col items-center">
                                        <div class="text-6xl mb-4 animate-pulse">"🤖"</div>
                                        <p class="text-white text-lg">"Analyzing digit..."</p>
                                    </div>
                                </ResultFrame>
                            </div>
                        }.into_view()
                    } else if let Some(result) = prediction.get() {
                        view! {
                            <div class="mb-8 text-center">
                                <ResultFrame>
                                    <div class="space-y-4">
                                        <p class="text-white/80 text-lg">"Predicted Digit:"</p>
                                        <div class="text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-pink-400 via-purple-400 to-blue-400 animate-scale-in">
                                            {result.digit}
                                        </div>
                                        <p class="text-white/70">
                                            {format!("Confidence: {:.1}%", result.confidence)}
                                        </p>
                                    </div>
                                </ResultFrame>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                // Action buttons
                <div class="space-y-4">
                    <button
                        on:click=on_predict
                        disabled=move || selected_image.get().is_none() || analyzing.get()
                        class="w-full bg-gradient-to-r from-pink-500 via-purple-500 to-blue-500 hover:from-pink-600 hover:via-purple-600 hover:to-blue-600 text-white font-semibold py-3 rounded-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || if analyzing.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <span class="loading-spinner w-5 h-5 mr-2" />
                                    "Predicting..."
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center justify-center">
                                    <span class="mr-2">"⚡"</span>
                                    "Predict Digit"
                                </span>
                            }.into_view()
                        }}
                    </button>

                    {move || {
                        if state_for_reset_row.has_work() {
                            let on_reset = on_reset.clone();
                            view! {
                                <button
                                    on:click=on_reset
                                    class="w-full border border-white/30 text-white hover:bg-white/10 py-3 rounded-lg transition-all duration-300 flex items-center justify-center"
                                >
                                    <span class="mr-2">"↺"</span>
                                    "Reset"
                                </button>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            </div>

            <EndpointSettings />

            <DigitBackdrop count=20 tone="text-white/20 text-xl" />
        </div>
    }
}

/// Shared frame around the analyzing and result panels
#[component]
fn ResultFrame(children: Children) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-pink-500/20 via-purple-500/20 to-blue-500/20 rounded-lg p-6 border border-white/20">
            {children()}
        </div>
    }
}

/// Prediction service endpoint settings
#[component]
fn EndpointSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (endpoint, set_endpoint) = create_signal(api::get_api_base());

    let save = move |_| {
        api::set_api_base(&endpoint.get());
        state.show_success("Endpoint saved");
    };

    view! {
        <div class="w-full max-w-md mt-6 z-10 text-sm">
            <label class="block text-gray-400 mb-2">"Prediction service endpoint"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || endpoint.get()
                    on:input=move |ev| set_endpoint.set(event_target_value(&ev))
                    class="flex-1 bg-white/10 rounded-lg px-3 py-2 text-white border border-white/20 focus:border-purple-400 focus:outline-none"
                />
                <button
                    on:click=save
                    class="px-4 py-2 bg-purple-600 hover:bg-purple-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

/// Gate uploads on the file's declared media type
fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_media_types() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/svg+xml"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("imagepng"));
        assert!(!is_image_mime(""));
    }
}
