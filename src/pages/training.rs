//! Training Section
//!
//! Shell for the `/training` routes: a section sidebar around an `<Outlet/>`,
//! plus the overview page summarising the model registry.

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Layout wrapper for the training section
#[component]
pub fn TrainingLayout() -> impl IntoView {
    view! {
        <div class="flex h-[calc(100vh-4rem)]">
            <aside class="w-56 bg-gray-800 border-r border-gray-700 p-4 shrink-0">
                <h2 class="text-xs uppercase tracking-wider text-gray-500 px-3 mb-3">
                    "Training"
                </h2>
                <nav class="space-y-1">
                    <A
                        href="/training"
                        exact=true
                        class="block px-3 py-2 rounded-lg text-sm text-gray-300
                               hover:bg-gray-700 hover:text-white transition-colors"
                        active_class="bg-gray-700 text-white"
                    >
                        "Overview"
                    </A>
                    <A
                        href="/training/train"
                        class="block px-3 py-2 rounded-lg text-sm text-gray-300
                               hover:bg-gray-700 hover:text-white transition-colors"
                        active_class="bg-gray-700 text-white"
                    >
                        "Train Model"
                    </A>
                    <A
                        href="/training/versions"
                        class="block px-3 py-2 rounded-lg text-sm text-gray-300
                               hover:bg-gray-700 hover:text-white transition-colors"
                        active_class="bg-gray-700 text-white"
                    >
                        "Manage Versions"
                    </A>
                </nav>
            </aside>

            <main class="flex-1 overflow-y-auto custom-scrollbar">
                <Outlet />
            </main>
        </div>
    }
}

/// Training overview at `/training`
#[component]
pub fn TrainingOverview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let versions = state.versions;

    let active_model = move || {
        versions
            .with(|set| set.active().map(|v| v.name.clone()))
            .unwrap_or_else(|| "None".to_string())
    };
    let total_models = move || versions.with(|set| set.all().len());
    let latest_version = move || {
        versions
            .with(|set| set.all().last().map(|v| v.name.clone()))
            .unwrap_or_else(|| "None".to_string())
    };

    view! {
        <div class="p-8 max-w-5xl mx-auto">
            <h1 class="text-2xl font-bold mb-2">"Model Training"</h1>
            <p class="text-gray-400 mb-8">
                "Upload datasets, run training sessions and manage deployed model versions."
            </p>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-10">
                <OverviewCard label="Active Model" value=Signal::derive(active_model) />
                <OverviewCard
                    label="Model Versions"
                    value=Signal::derive(move || total_models().to_string())
                />
                <OverviewCard label="Latest Version" value=Signal::derive(latest_version) />
                <OverviewCard
                    label="Training Sessions"
                    value=Signal::derive(|| "12".to_string())
                />
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <A
                    href="/training/train"
                    class="block bg-gray-800 hover:bg-gray-700/40 border border-gray-700
                           hover:border-blue-500 rounded-xl p-6 transition-colors"
                >
                    <div class="text-3xl mb-3">"🛠"</div>
                    <h3 class="font-semibold text-lg mb-1">"Train a new model"</h3>
                    <p class="text-sm text-gray-400">
                        "Upload an image archive with annotations and start a training run."
                    </p>
                </A>
                <A
                    href="/training/versions"
                    class="block bg-gray-800 hover:bg-gray-700/40 border border-gray-700
                           hover:border-blue-500 rounded-xl p-6 transition-colors"
                >
                    <div class="text-3xl mb-3">"🗂"</div>
                    <h3 class="font-semibold text-lg mb-1">"Manage versions"</h3>
                    <p class="text-sm text-gray-400">
                        "Review accuracy, switch the active model or retire old versions."
                    </p>
                </A>
            </div>
        </div>
    }
}

#[component]
fn OverviewCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-xl p-5">
            <div class="text-xs uppercase tracking-wider text-gray-500 mb-2">{label}</div>
            <div class="text-xl font-semibold truncate">{move || value.get()}</div>
        </div>
    }
}
