//! Dashboard Page
//!
//! Analysis launcher: a headline composer that opens an analysis context on
//! the backend, plus a hover-revealed rail of recent analyses. Submitting
//! needs a session token and either text or an attached image.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::InlineLoading;
use crate::state::GlobalState;

/// Fixture entries for the recent-analyses rail
const RECENT_ANALYSES: [(&str, &str); 3] = [
    ("12", "Harbor sweep #12"),
    ("7", "Night patrol #7"),
    ("3", "Perimeter scan #3"),
];

/// Dashboard at `/dashboard`
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (message, set_message) = create_signal(String::new());
    // Attached file plus its preview object URL
    let attached = create_rw_signal(None::<(web_sys::File, String)>);
    let (submitting, set_submitting) = create_signal(false);

    on_cleanup(move || {
        if let Some((_, url)) = attached.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    });

    let handle_file = move |ev: web_sys::Event| {
        let input_el: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(file) = input_el.files().and_then(|files| files.get(0)) {
            if let Some((_, old_url)) = attached.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&old_url);
            }
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                attached.set(Some((file, url)));
            }
        }
        input_el.set_value("");
    };

    let remove_attachment = move |_| {
        if let Some((_, url)) = attached.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        attached.set(None);
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let text = message.get_untracked().trim().to_string();
        let file = attached.get_untracked().map(|(file, _)| file);

        if text.is_empty() && file.is_none() {
            state_for_submit.show_error("Add a message or attach an image first");
            return;
        }
        let Some(token) = state_for_submit.token.get_untracked() else {
            state_for_submit.show_error("Please sign in to start an analysis");
            return;
        };

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::start_analysis(&text, file.as_ref(), &token).await {
                Ok(started) => {
                    state_clone.show_success("Analysis started");
                    set_submitting.set(false);
                    navigate(&format!("/dashboard/{}", started.id), Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    let reset_form = move |_| {
        set_message.set(String::new());
        if let Some((_, url)) = attached.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        attached.set(None);
    };

    view! {
        <div class="flex h-[calc(100vh-4rem)]">
            <DashboardSidebar on_new_analysis=reset_form />

            <div class="flex-1 overflow-y-auto custom-scrollbar">
                <div class="container mx-auto px-4 py-12 max-w-3xl">
                    <div class="flex items-center justify-between mb-10">
                        <h1 class="text-3xl font-bold">"Vision Intelligence"</h1>
                        <span class="flex items-center space-x-2 px-3 py-1 bg-green-900/40
                                     border border-green-700 rounded-full text-sm text-green-400">
                            <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                            <span>"All Detection Models Active"</span>
                        </span>
                    </div>

                    <form
                        on:submit=on_submit
                        class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4"
                    >
                        <textarea
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                                   focus:border-blue-500 focus:outline-none placeholder-gray-500
                                   resize-none h-28"
                            placeholder="Describe what to look for, or just attach imagery..."
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        />

                        {move || {
                            attached.get().map(|(file, url)| view! {
                                <div class="flex items-center space-x-3">
                                    <img src=url class="h-20 rounded-lg border border-gray-600" />
                                    <div class="text-sm text-gray-400">{file.name()}</div>
                                    <button
                                        type="button"
                                        class="text-gray-500 hover:text-white"
                                        on:click=remove_attachment
                                    >
                                        "✕ Remove"
                                    </button>
                                </div>
                            })
                        }}

                        <div class="flex items-center justify-between">
                            <label class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                          cursor-pointer transition-colors text-sm">
                                "📎 Attach image"
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="hidden"
                                    on:change=handle_file
                                />
                            </label>

                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="flex items-center space-x-2 px-6 py-3 bg-blue-600
                                       hover:bg-blue-700 disabled:bg-gray-600 rounded-lg
                                       font-medium transition-colors"
                            >
                                {move || {
                                    if submitting.get() {
                                        view! {
                                            <InlineLoading />
                                            <span>"Starting..."</span>
                                        }.into_view()
                                    } else {
                                        view! { <span>"Analyze"</span> }.into_view()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

/// Left rail that expands on hover
#[component]
fn DashboardSidebar<F>(on_new_analysis: F) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (expanded, set_expanded) = create_signal(false);

    let state_for_signout = state.clone();
    let sign_out = move |_| {
        state_for_signout.sign_out();
        state_for_signout.show_success("Signed out");
        navigate("/auth", Default::default());
    };

    view! {
        <aside
            on:mouseenter=move |_| set_expanded.set(true)
            on:mouseleave=move |_| set_expanded.set(false)
            class=move || {
                let base = "bg-gray-800 border-r border-gray-700 flex flex-col \
                            transition-all duration-300 overflow-hidden";
                if expanded.get() {
                    format!("{} w-64", base)
                } else {
                    format!("{} w-16", base)
                }
            }
        >
            <div class="p-4 space-y-2">
                <button
                    on:click=on_new_analysis
                    class="flex items-center space-x-3 w-full px-2 py-2 rounded-lg
                           hover:bg-gray-700 transition-colors text-left"
                >
                    <span class="text-xl shrink-0">"✚"</span>
                    {move || expanded.get().then(|| view! {
                        <span class="text-sm whitespace-nowrap">"New analysis"</span>
                    })}
                </button>
            </div>

            <div class="flex-1 px-4 py-2">
                {move || expanded.get().then(|| view! {
                    <p class="text-xs uppercase tracking-wider text-gray-500 mb-2">
                        "Recent analyses"
                    </p>
                })}
                <div class="space-y-1">
                    {RECENT_ANALYSES
                        .into_iter()
                        .map(|(id, label)| {
                            let href = format!("/dashboard/{}", id);
                            view! {
                                <A
                                    href=href
                                    class="flex items-center space-x-3 px-2 py-2 rounded-lg
                                           hover:bg-gray-700 transition-colors"
                                >
                                    <span class="text-xl shrink-0">"🛰"</span>
                                    {move || expanded.get().then(|| view! {
                                        <span class="text-sm text-gray-300 whitespace-nowrap truncate">
                                            {label}
                                        </span>
                                    })}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="p-4 border-t border-gray-700">
                {move || {
                    if state.is_signed_in() {
                        view! {
                            <button
                                on:click=sign_out.clone()
                                class="flex items-center space-x-3 w-full px-2 py-2 rounded-lg
                                       hover:bg-gray-700 transition-colors text-left text-red-400"
                            >
                                <span class="text-xl shrink-0">"⏻"</span>
                                {move || expanded.get().then(|| view! {
                                    <span class="text-sm whitespace-nowrap">"Sign out"</span>
                                })}
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <A
                                href="/auth"
                                class="flex items-center space-x-3 px-2 py-2 rounded-lg
                                       hover:bg-gray-700 transition-colors"
                            >
                                <span class="text-xl shrink-0">"🔑"</span>
                                {move || expanded.get().then(|| view! {
                                    <span class="text-sm whitespace-nowrap">"Sign in"</span>
                                })}
                            </A>
                        }.into_view()
                    }
                }}
            </div>
        </aside>
    }
}
