//! New Chat Page
//!
//! Standalone composer for starting a conversation. The send is simulated:
//! after a short delay the chat is created in the store with the opening
//! message and the scripted reply, then the view moves to it.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::components::read_file_to_data_url;
use crate::state::{
    apply_theme, derive_title, load_theme, GlobalState, Role, Theme, SCRIPTED_REPLY,
};
use crate::task::{sleep_ms, CancelToken};

const MAX_CHARS: usize = 1000;
const SEND_DELAY_MS: u32 = 1500;

/// Composer page at `/new-chat`
#[component]
pub fn NewChat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (message, set_message) = create_signal(String::new());
    let (image, set_image) = create_signal(None::<String>);
    let (sending, set_sending) = create_signal(false);
    let (theme, set_theme) = create_signal(load_theme());

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        apply_theme(next);
        set_theme.set(next);
    };

    let chars_used = create_memo(move |_| message.with(|m| m.chars().count()));

    let handle_file = move |ev: web_sys::Event| {
        let input_el: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(file) = input_el.files().and_then(|files| files.get(0)) {
            read_file_to_data_url(&file, move |data_url| set_image.set(Some(data_url)));
        }
        // Allow re-picking the same file later
        input_el.set_value("");
    };

    let chats = state.chats;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = message.get_untracked().trim().to_string();
        let attachment = image.get_untracked();
        if (text.is_empty() && attachment.is_none()) || sending.get_untracked() {
            return;
        }

        set_sending.set(true);

        let token = cancel.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            sleep_ms(SEND_DELAY_MS).await;
            if token.is_cancelled() {
                return;
            }

            let mut new_id = String::new();
            chats.update(|list| {
                new_id = list.create_chat(derive_title(&text));
                list.append_message(&new_id, Role::User, text.clone(), attachment.clone());
                list.append_message(&new_id, Role::Assistant, SCRIPTED_REPLY.to_string(), None);
            });

            set_sending.set(false);
            set_message.set(String::new());
            set_image.set(None);
            navigate(&format!("/c/{}", new_id), Default::default());
        });
    };

    view! {
        <div class="container mx-auto px-4 py-16 max-w-2xl">
            <div class="flex items-center justify-between mb-10">
                <h1 class="text-3xl font-bold">"Start a new chat"</h1>
                <button
                    on:click=toggle_theme
                    class="px-3 py-2 bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                    title="Toggle theme"
                >
                    {move || if theme.get() == Theme::Dark { "🌙" } else { "☀️" }}
                </button>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <textarea
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                           focus:border-blue-500 focus:outline-none placeholder-gray-500
                           resize-none h-32"
                    placeholder="Describe the imagery or ask a question..."
                    maxlength=MAX_CHARS.to_string()
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                />

                <div class="flex items-center justify-between mt-4">
                    <div class="flex items-center space-x-3">
                        <label
                            class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                   cursor-pointer transition-colors"
                            title="Attach an image"
                        >
                            "📎"
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden"
                                on:change=handle_file
                            />
                        </label>
                        <span class=move || {
                            if chars_used.get() >= MAX_CHARS {
                                "text-sm text-red-400"
                            } else {
                                "text-sm text-gray-500"
                            }
                        }>
                            {move || format!("{}/{}", chars_used.get(), MAX_CHARS)}
                        </span>
                    </div>

                    <button
                        type="submit"
                        disabled=move || {
                            sending.get()
                                || (message.with(|m| m.trim().is_empty())
                                    && image.with(|i| i.is_none()))
                        }
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-700
                               disabled:text-gray-500 rounded-lg font-medium transition-colors"
                    >
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>

                // Attachment preview
                {move || {
                    image.get().map(|data_url| view! {
                        <div class="relative w-fit mt-4">
                            <img src=data_url class="max-h-48 rounded-lg border border-gray-600" />
                            <button
                                type="button"
                                class="absolute -top-2 -right-2 w-6 h-6 bg-gray-900 border
                                       border-gray-600 rounded-full text-gray-300 hover:text-white
                                       text-sm"
                                on:click=move |_| set_image.set(None)
                            >
                                "✕"
                            </button>
                        </div>
                    })
                }}
            </form>
        </div>
    }
}
