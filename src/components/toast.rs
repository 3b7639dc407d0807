//! Toast Notification Component
//!
//! Success and error messages raised through the global store. Each toast
//! auto-clears on the store's timer and can be dismissed early.

use leptos::*;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                let success_signal = state.success;
                state.success.get().map(|msg| view! {
                    <ToastMessage
                        title="Success"
                        message=msg
                        variant=ToastVariant::Success
                        on_dismiss=move || success_signal.set(None)
                    />
                })
            }}

            // Error toast
            {move || {
                let error_signal = state.error;
                state.error.get().map(|msg| view! {
                    <ToastMessage
                        title="Error"
                        message=msg
                        variant=ToastVariant::Error
                        on_dismiss=move || error_signal.set(None)
                    />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn bg_class(self) -> &'static str {
        match self {
            ToastVariant::Success => "bg-green-600",
            ToastVariant::Error => "bg-red-600",
        }
    }
}

#[component]
fn ToastMessage<F>(
    title: &'static str,
    #[prop(into)]
    message: String,
    variant: ToastVariant,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             w-80 transform transition-all duration-300 ease-out animate-slide-in",
            variant.bg_class()
        )>
            <div class="flex-1">
                <div class="text-sm font-semibold">{title}</div>
                <div class="text-sm">{message}</div>
            </div>
            <button
                class="text-white/70 hover:text-white text-lg leading-none"
                on:click=move |_| on_dismiss()
            >
                "×"
            </button>
        </div>
    }
}
