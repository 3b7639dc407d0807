//! Navigation Component
//!
//! Header navigation bar with the Argus brand and section links.

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"👁"</span>
                        <span class="text-xl font-bold text-white tracking-wide">"ARGUS"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/new-chat" label="Chatbot" />
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/training" label="Training" />
                        <NavLink href="/about" label="About" />
                        <a
                            href="https://github.com/argus-vision"
                            target="_blank"
                            rel="noreferrer"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "GitHub"
                        </a>
                        {move || {
                            if state.is_signed_in() {
                                view! {
                                    <span class="px-4 py-2 text-sm text-green-400">"● Signed in"</span>
                                }.into_view()
                            } else {
                                view! { <NavLink href="/auth" label="Sign in" /> }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
