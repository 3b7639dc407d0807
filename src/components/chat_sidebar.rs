//! Chat Sidebar
//!
//! Collapsible list of chat sessions with a title search, shown next to
//! the chat view.

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Sidebar listing all chats from the store
#[component]
pub fn ChatSidebar(
    #[prop(into)]
    active_id: Signal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (collapsed, set_collapsed) = create_signal(false);
    let (query, set_query) = create_signal(String::new());

    let chats = state.chats;
    let filtered = create_memo(move |_| chats.with(|list| list.search(&query.get())));

    view! {
        <aside class=move || {
            let base = "bg-gray-800 border-r border-gray-700 flex flex-col transition-all duration-300";
            if collapsed.get() {
                format!("{} w-20", base)
            } else {
                format!("{} w-80", base)
            }
        }>
            <div class="flex items-center justify-between p-4 border-b border-gray-700">
                {move || {
                    if collapsed.get() {
                        view! { <span class="text-xl mx-auto">"💬"</span> }.into_view()
                    } else {
                        let total = chats.with(|list| list.all().len());
                        view! {
                            <span class="font-semibold text-white">
                                {format!("Chats ({})", total)}
                            </span>
                        }.into_view()
                    }
                }}
                <button
                    class="text-gray-400 hover:text-white transition-colors"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            {move || {
                if collapsed.get() {
                    view! {
                        <div class="flex-1 overflow-y-auto custom-scrollbar py-3 space-y-2">
                            {filtered.get().into_iter().map(|chat| {
                                let href = format!("/c/{}", chat.id);
                                let initial = chat.title.chars().next().unwrap_or('#').to_string();
                                view! {
                                    <A href=href class="block mx-auto w-10 h-10 bg-gray-700 hover:bg-gray-600
                                                        rounded-full text-center leading-10 text-gray-200">
                                        {initial}
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-col flex-1 min-h-0">
                            <div class="p-3">
                                <input
                                    type="text"
                                    class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600
                                           focus:border-blue-500 focus:outline-none placeholder-gray-500"
                                    placeholder="Search chats..."
                                    prop:value=move || query.get()
                                    on:input=move |ev| set_query.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="flex-1 overflow-y-auto custom-scrollbar px-3 pb-3 space-y-1">
                                {move || {
                                    let items = filtered.get();
                                    if items.is_empty() {
                                        view! {
                                            <p class="text-sm text-gray-500 text-center py-6">"No chats found"</p>
                                        }.into_view()
                                    } else {
                                        items.into_iter().map(|chat| {
                                            let href = format!("/c/{}", chat.id);
                                            let id = chat.id.clone();
                                            let preview = chat
                                                .last_message()
                                                .map(|m| m.content.clone())
                                                .unwrap_or_else(|| "No messages yet".to_string());
                                            view! {
                                                <A
                                                    href=href
                                                    class=move || {
                                                        let base = "block px-3 py-2 rounded-lg transition-colors";
                                                        if active_id.get() == id {
                                                            format!("{} bg-gray-700", base)
                                                        } else {
                                                            format!("{} hover:bg-gray-700/60", base)
                                                        }
                                                    }
                                                >
                                                    <div class="text-sm font-medium text-gray-200 truncate">
                                                        {chat.title.clone()}
                                                    </div>
                                                    <div class="text-xs text-gray-500 truncate">{preview}</div>
                                                </A>
                                            }
                                        }).collect_view()
                                    }
                                }}
                            </div>

                            <div class="p-3 border-t border-gray-700">
                                <A
                                    href="/new-chat"
                                    class="block w-full text-center px-3 py-2 bg-blue-600 hover:bg-blue-700
                                           rounded-lg text-sm font-medium transition-colors"
                                >
                                    "+ New chat"
                                </A>
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </aside>
    }
}
