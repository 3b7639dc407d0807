//! Loading Components
//!
//! Spinners and the chat typing indicator.

use leptos::*;

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Three-dot indicator shown while the assistant "thinks"
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-1 px-4 py-3 bg-gray-700 rounded-2xl w-fit">
            <span class="typing-dot" />
            <span class="typing-dot" style="animation-delay: 150ms" />
            <span class="typing-dot" style="animation-delay: 300ms" />
        </div>
    }
}
