//! Chat Page
//!
//! The `/c/:id` conversation view. Sending appends the user message
//! immediately; the assistant reply arrives after a simulated delay and the
//! composer stays disabled until it lands. Replies in flight are cancelled
//! if the view is torn down.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::components::{ChatSidebar, Composer, TypingIndicator};
use crate::state::{ChatPhase, GlobalState, Message, Role, SCRIPTED_REPLY};
use crate::task::{sleep_ms, CancelToken};

const REPLY_DELAY_MS: u32 = 2000;

/// Chat view at `/c/:id`
#[component]
pub fn ChatView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let chat_id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let input = create_rw_signal(String::new());
    let image = create_rw_signal(None::<String>);
    let phase = create_rw_signal(ChatPhase::Idle);
    let (menu_open, set_menu_open) = create_signal(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Entering another chat drops the draft and re-enables the composer
    create_effect(move |_| {
        let _id = chat_id.get();
        input.set(String::new());
        image.set(None);
        phase.set(ChatPhase::Idle);
    });

    // Track the composing state off the draft content
    create_effect(move |_| {
        let has_draft = !input.with(|t| t.trim().is_empty()) || image.with(|i| i.is_some());
        phase.update(|p| {
            *p = match (*p, has_draft) {
                (ChatPhase::Idle, true) => ChatPhase::Composing,
                (ChatPhase::Composing, false) => ChatPhase::Idle,
                (current, _) => current,
            };
        });
    });

    let chats = state.chats;
    let send = {
        let cancel = cancel.clone();
        move |_: ()| {
            let id = chat_id.get_untracked();
            let text = input.get_untracked().trim().to_string();
            let attachment = image.get_untracked();

            phase.set(ChatPhase::Sending);
            chats.update(|list| {
                list.append_message(&id, Role::User, text, attachment);
            });
            input.set(String::new());
            image.set(None);
            phase.set(ChatPhase::AwaitingReply);

            let token = cancel.clone();
            spawn_local(async move {
                sleep_ms(REPLY_DELAY_MS).await;
                if token.is_cancelled() {
                    return;
                }
                chats.update(|list| {
                    list.append_message(&id, Role::Assistant, SCRIPTED_REPLY.to_string(), None);
                });
                // Replies landing in a chat the user has since left must not
                // touch the composer of the one on screen.
                if chat_id.get_untracked() == id {
                    phase.set(ChatPhase::Idle);
                }
            });
        }
    };

    let state_for_export = state.clone();
    let export_chat = move |_| {
        let id = chat_id.get_untracked();
        let payload = state_for_export.chats.with_untracked(|list| {
            list.find(&id)
                .map(|chat| serde_json::to_string_pretty(chat).unwrap_or_default())
        });
        if let Some(payload) = payload {
            download_json(&format!("argus-chat-{}.json", id), &payload);
            state_for_export.show_success("Chat exported");
        }
        set_menu_open.set(false);
    };

    let state_for_clear = state.clone();
    let clear_chat = move |_| {
        let id = chat_id.get_untracked();
        state_for_clear.chats.update(|list| list.clear_messages(&id));
        state_for_clear.show_success("Chat cleared");
        set_menu_open.set(false);
    };

    view! {
        <div class="flex h-[calc(100vh-4rem)]">
            <ChatSidebar active_id=chat_id />

            <div class="flex flex-col flex-1 min-w-0">
                // Header with chat title and actions menu
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-700">
                    <div>
                        <h1 class="font-semibold text-lg">
                            {move || {
                                let id = chat_id.get();
                                chats.with(|list| {
                                    list.find(&id)
                                        .map(|c| c.title.clone())
                                        .unwrap_or_else(|| "Unknown chat".to_string())
                                })
                            }}
                        </h1>
                        <p class="text-xs text-gray-500">
                            {move || {
                                let id = chat_id.get();
                                let count = chats.with(|list| {
                                    list.find(&id).map(|c| c.messages.len()).unwrap_or(0)
                                });
                                format!("{} messages", count)
                            }}
                        </p>
                    </div>

                    <div class="relative">
                        <button
                            class="px-3 py-2 text-gray-400 hover:text-white hover:bg-gray-700
                                   rounded-lg transition-colors"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "⋮"
                        </button>
                        {move || {
                            menu_open.get().then(|| view! {
                                <div class="absolute right-0 mt-2 w-44 bg-gray-800 border border-gray-700
                                            rounded-lg shadow-lg z-10 overflow-hidden">
                                    <button
                                        class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-700"
                                        on:click=export_chat.clone()
                                    >
                                        "Export chat"
                                    </button>
                                    <button
                                        class="block w-full text-left px-4 py-2 text-sm text-red-400
                                               hover:bg-gray-700"
                                        on:click=clear_chat.clone()
                                    >
                                        "Clear chat"
                                    </button>
                                </div>
                            })
                        }}
                    </div>
                </div>

                // Message history
                <div class="flex-1 overflow-y-auto custom-scrollbar px-6 py-4 space-y-4">
                    {move || {
                        let id = chat_id.get();
                        let messages = chats.with(|list| list.find(&id).map(|c| c.messages.clone()));
                        match messages {
                            Some(messages) if messages.is_empty() => view! {
                                <p class="text-center text-gray-500 py-12">
                                    "No messages yet. Say something below."
                                </p>
                            }.into_view(),
                            Some(messages) => messages
                                .into_iter()
                                .map(|message| view! { <MessageBubble message=message /> })
                                .collect_view(),
                            None => view! {
                                <p class="text-center text-gray-500 py-12">
                                    "This chat does not exist."
                                </p>
                            }.into_view(),
                        }
                    }}

                    {move || {
                        (phase.get() == ChatPhase::AwaitingReply).then(|| view! {
                            <TypingIndicator />
                        })
                    }}
                </div>

                <Composer
                    input=input
                    image=image
                    phase=phase
                    on_send=send
                />
            </div>
        </div>
    }
}

/// One message in the history
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;

    let (row_class, bubble_class) = if is_user {
        (
            "flex justify-end",
            "bg-blue-600 text-white rounded-2xl rounded-br-sm",
        )
    } else {
        (
            "flex justify-start",
            "bg-gray-700 text-gray-100 rounded-2xl rounded-bl-sm",
        )
    };

    view! {
        <div class=row_class>
            <div class=format!("max-w-[75%] px-4 py-3 {}", bubble_class)>
                {message.image.map(|data_url| view! {
                    <img src=data_url class="rounded-lg mb-2 max-h-64" />
                })}
                <p class="whitespace-pre-wrap break-words">{message.content}</p>
            </div>
        </div>
    }
}

/// Trigger a client-side download of a JSON payload
fn download_json(filename: &str, payload: &str) {
    if let Some(window) = web_sys::window() {
        let blob = web_sys::Blob::new_with_str_sequence(&js_sys::Array::of1(&payload.into())).ok();

        if let Some(blob) = blob {
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
                if let Some(document) = window.document() {
                    if let Ok(anchor) = document.create_element("a") {
                        let _ = anchor.set_attribute("href", &url);
                        let _ = anchor.set_attribute("download", filename);
                        if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                            el.click();
                        }
                    }
                }
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        } else {
            web_sys::console::error_1(&"Failed to build export blob".into());
        }
    }
}
