//! Landing Page
//!
//! Marketing hero plus entry points into the app surfaces. Static content;
//! the only live element is the call-to-action into the auth flow.

use leptos::*;
use leptos_router::*;

/// Landing page at `/`
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4">
            // Hero
            <section class="text-center py-24">
                <p class="text-sm uppercase tracking-[0.3em] text-blue-400 mb-4">"Argus Vision Console"</p>
                <h1 class="text-5xl font-bold mb-6">"Vision Intelligence System"</h1>
                <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-10">
                    "Analyze aerial imagery in a chat, watch detections land on the dashboard, \
                     and retrain the models behind it all from one console."
                </p>
                <A
                    href="/auth"
                    class="inline-block px-8 py-4 bg-blue-600 hover:bg-blue-700 rounded-lg
                           text-lg font-semibold transition-colors"
                >
                    "Get started with Argus"
                </A>
            </section>

            // Surface overview
            <section class="grid grid-cols-1 md:grid-cols-3 gap-6 pb-24">
                <SurfaceCard
                    icon="💬"
                    title="Chatbot"
                    description="Ask questions about a scene, attach imagery and get detection summaries back."
                    href="/new-chat"
                />
                <SurfaceCard
                    icon="🛰"
                    title="Dashboard"
                    description="Launch analyses and review detected objects, confidence scores and trends."
                    href="/dashboard"
                />
                <SurfaceCard
                    icon="⚙"
                    title="Training"
                    description="Upload datasets, tune hyperparameters and manage released model versions."
                    href="/training"
                />
            </section>
        </div>
    }
}

#[component]
fn SurfaceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-blue-500
                   transition-colors"
        >
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-sm text-gray-400">{description}</p>
        </A>
    }
}
