//! Model Versions Page
//!
//! Registry table at `/training/versions`. Activating a version demotes
//! whichever one was active before; the active version cannot be deleted,
//! so there is always a deployed model.

use leptos::*;

use crate::state::{GlobalState, ModelVersion};

/// Version management table at `/training/versions`
#[component]
pub fn Versions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let versions = state.versions;

    let selected = create_rw_signal(None::<ModelVersion>);

    let state_rows = state.clone();

    view! {
        <div class="p-8 max-w-5xl mx-auto">
            <h1 class="text-2xl font-bold mb-2">"Manage Versions"</h1>
            <p class="text-gray-400 mb-8">
                "Every trained model is versioned. Exactly one version serves detections at a time."
            </p>

            // Summary card for whichever version currently serves
            {move || {
                versions.with(|set| set.active().cloned()).map(|active| view! {
                    <div class="bg-gray-800 border border-gray-700 rounded-xl p-6 mb-8">
                        <h2 class="font-semibold mb-4">
                            {format!("Active Version: {}", active.name)}
                        </h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <StatCell
                                label="Accuracy"
                                value=format!("{:.0}%", active.accuracy * 100.0)
                            />
                            <StatCell label="Created" value=active.created_at.clone() />
                            <StatCell
                                label="Precision"
                                value=format!("{:.2}", active.performance.precision)
                            />
                            <StatCell
                                label="Recall"
                                value=format!("{:.2}", active.performance.recall)
                            />
                        </div>
                    </div>
                })
            }}

            <div class="bg-gray-800 border border-gray-700 rounded-xl overflow-hidden">
                <table class="w-full text-left text-sm">
                    <thead class="text-xs uppercase tracking-wider text-gray-500
                                  border-b border-gray-700">
                        <tr>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Created"</th>
                            <th class="px-4 py-3">"Accuracy"</th>
                            <th class="px-4 py-3">"Status"</th>
                            <th class="px-4 py-3 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-700/60">
                        {move || {
                            let state = state_rows.clone();
                            versions
                                .with(|set| set.all().to_vec())
                                .into_iter()
                                .map(|version| {
                                    let details = version.clone();
                                    let activate_id = version.id.clone();
                                    let activate_name = version.name.clone();
                                    let delete_id = version.id.clone();
                                    let delete_name = version.name.clone();
                                    let state_activate = state.clone();
                                    let state_delete = state.clone();
                                    let deletable = !version.is_active;

                                    view! {
                                        <tr class="hover:bg-gray-700/30">
                                            <td class="px-4 py-3 font-medium">{version.name.clone()}</td>
                                            <td class="px-4 py-3 text-gray-400">{version.created_at.clone()}</td>
                                            <td class="px-4 py-3">
                                                {format!("{:.0}%", version.accuracy * 100.0)}
                                            </td>
                                            <td class="px-4 py-3">
                                                {if version.is_active {
                                                    view! {
                                                        <span class="px-2 py-1 rounded-full text-xs
                                                                     bg-green-500/20 text-green-400">
                                                            "Active"
                                                        </span>
                                                    }
                                                } else {
                                                    view! {
                                                        <span class="px-2 py-1 rounded-full text-xs
                                                                     bg-gray-700 text-gray-400">
                                                            "Inactive"
                                                        </span>
                                                    }
                                                }}
                                            </td>
                                            <td class="px-4 py-3 text-right space-x-2 whitespace-nowrap">
                                                <button
                                                    class="px-3 py-1 rounded-lg text-gray-300
                                                           hover:bg-gray-700 transition-colors"
                                                    on:click=move |_| selected.set(Some(details.clone()))
                                                >
                                                    "Details"
                                                </button>
                                                <button
                                                    class="px-3 py-1 rounded-lg bg-blue-600 hover:bg-blue-700
                                                           disabled:bg-gray-700 disabled:text-gray-500
                                                           transition-colors"
                                                    disabled=version.is_active
                                                    on:click=move |_| {
                                                        versions.update(|set| set.activate(&activate_id));
                                                        state_activate.show_success(
                                                            &format!("{} is now the active model", activate_name),
                                                        );
                                                    }
                                                >
                                                    "Activate"
                                                </button>
                                                <button
                                                    class="px-3 py-1 rounded-lg text-red-400 hover:bg-red-500/10
                                                           disabled:text-gray-600 disabled:hover:bg-transparent
                                                           transition-colors"
                                                    disabled=!deletable
                                                    on:click=move |_| {
                                                        let mut removed = false;
                                                        versions.update(|set| removed = set.delete(&delete_id));
                                                        if removed {
                                                            state_delete.show_success(
                                                                &format!("{} deleted", delete_name),
                                                            );
                                                        } else {
                                                            state_delete.show_error(
                                                                "The active version cannot be deleted",
                                                            );
                                                        }
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            // Details dialog
            {move || {
                selected.get().map(|version| view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
                        <div class="bg-gray-800 rounded-xl border border-gray-700 max-w-md w-full p-6">
                            <div class="flex items-center justify-between mb-6">
                                <h2 class="text-xl font-semibold">{version.name.clone()}</h2>
                                <button
                                    class="text-gray-400 hover:text-white text-xl"
                                    on:click=move |_| selected.set(None)
                                >
                                    "✕"
                                </button>
                            </div>

                            <dl class="space-y-3 text-sm">
                                <DetailRow label="Created" value=version.created_at.clone() />
                                <DetailRow
                                    label="Status"
                                    value=if version.is_active { "Active" } else { "Inactive" }.to_string()
                                />
                                <DetailRow
                                    label="Accuracy"
                                    value=format!("{:.0}%", version.accuracy * 100.0)
                                />
                                <DetailRow
                                    label="Precision"
                                    value=format!("{:.2}", version.performance.precision)
                                />
                                <DetailRow
                                    label="Recall"
                                    value=format!("{:.2}", version.performance.recall)
                                />
                                <DetailRow
                                    label="F1 score"
                                    value=format!("{:.2}", version.performance.f1_score)
                                />
                            </dl>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn StatCell(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm text-gray-500">{label}</div>
            <div class="text-2xl font-bold text-gray-100">{value}</div>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between">
            <dt class="text-gray-500">{label}</dt>
            <dd class="text-gray-200 font-medium">{value}</dd>
        </div>
    }
}
