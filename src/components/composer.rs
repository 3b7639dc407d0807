//! Message Composer
//!
//! Chat input row with image attach. The owning page holds the text and
//! attachment signals so it can derive the chat phase from them; this
//! component is the view plus the file-reading plumbing.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::{can_submit, ChatPhase};

/// Read a picked file into a data URL and hand it to `on_ready`
pub fn read_file_to_data_url(file: &web_sys::File, on_ready: impl Fn(String) + 'static) {
    let file_reader = web_sys::FileReader::new().unwrap();

    let onload = {
        let file_reader = file_reader.clone();
        wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = file_reader.result() {
                if let Some(data_url) = result.as_string() {
                    on_ready(data_url);
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = file_reader.read_as_data_url(file);
}

/// Chat input with attach/preview/send
#[component]
pub fn Composer(
    input: RwSignal<String>,
    /// Attached image as a data URL, if any
    image: RwSignal<Option<String>>,
    #[prop(into)]
    phase: Signal<ChatPhase>,
    #[prop(into)]
    on_send: Callback<()>,
    #[prop(default = "Type your message...")]
    placeholder: &'static str,
) -> impl IntoView {
    let sendable = create_memo(move |_| {
        input.with(|text| can_submit(phase.get(), text, image.with(|i| i.is_some())))
    });

    // Read the picked image into a data URL for preview and sending
    let handle_file = move |ev: web_sys::Event| {
        let input_el: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(file) = input_el.files().and_then(|files| files.get(0)) {
            read_file_to_data_url(&file, move |data_url| image.set(Some(data_url)));
        }

        // Allow re-picking the same file later
        input_el.set_value("");
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sendable.get() {
            on_send.call(());
        }
    };

    view! {
        <form on:submit=submit class="border-t border-gray-700 p-4 space-y-3">
            // Attachment preview
            {move || {
                image.get().map(|data_url| view! {
                    <div class="relative w-fit">
                        <img src=data_url class="h-24 rounded-lg border border-gray-600" />
                        <button
                            type="button"
                            class="absolute -top-2 -right-2 w-6 h-6 bg-gray-900 border border-gray-600
                                   rounded-full text-gray-300 hover:text-white text-sm"
                            on:click=move |_| image.set(None)
                        >
                            "✕"
                        </button>
                    </div>
                })
            }}

            <div class="flex items-center space-x-2">
                <label class="px-3 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg cursor-pointer transition-colors">
                    "📎"
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        on:change=handle_file
                    />
                </label>

                <input
                    type="text"
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                           focus:border-blue-500 focus:outline-none placeholder-gray-500"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />

                <button
                    type="submit"
                    disabled=move || !sendable.get()
                    class="px-5 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-700
                           disabled:text-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Send"
                </button>
            </div>
        </form>
    }
}
