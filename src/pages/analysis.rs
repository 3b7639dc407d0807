//! Analysis Page
//!
//! The `/dashboard/:id` view: a conversation panel scoped to one analysis
//! next to the detection breakdown. The detection figures and chart series
//! are fixtures; the assistant reply echoes the question after a simulated
//! delay.

use leptos::*;
use leptos_router::*;

use crate::components::{DonutChart, LabelledPoint, LineChart, Slice, TypingIndicator};
use crate::state::{can_submit, ChatPhase, Message, Role};
use crate::task::{sleep_ms, CancelToken};

const REPLY_DELAY_MS: u32 = 2000;

/// Detected objects: name, count, confidence percent
const DETECTED_OBJECTS: [(&str, u32, u32); 3] = [
    ("Armored vehicles", 2, 98),
    ("Personnel", 4, 95),
    ("Structures", 1, 92),
];

const DETECTION_TIMELINE: [LabelledPoint; 6] = [
    LabelledPoint { label: "Jan", value: 65.0 },
    LabelledPoint { label: "Feb", value: 80.0 },
    LabelledPoint { label: "Mar", value: 95.0 },
    LabelledPoint { label: "Apr", value: 75.0 },
    LabelledPoint { label: "May", value: 85.0 },
    LabelledPoint { label: "Jun", value: 90.0 },
];

const CATEGORY_SPLIT: [Slice; 3] = [
    Slice { name: "Vehicles", value: 40.0 },
    Slice { name: "Personnel", value: 35.0 },
    Slice { name: "Structures", value: 25.0 },
];

const ACCURACY_HISTORY: [LabelledPoint; 6] = [
    LabelledPoint { label: "Jan", value: 70.0 },
    LabelledPoint { label: "Feb", value: 74.0 },
    LabelledPoint { label: "Mar", value: 78.0 },
    LabelledPoint { label: "Apr", value: 81.0 },
    LabelledPoint { label: "May", value: 85.0 },
    LabelledPoint { label: "Jun", value: 88.0 },
];

const ENVIRONMENT: [(&str, &str); 4] = [
    ("Visibility", "Good"),
    ("Weather", "Clear"),
    ("Time of day", "Day"),
    ("Terrain", "Urban"),
];

fn seed_messages() -> Vec<Message> {
    let now = chrono::Utc::now().timestamp_millis();
    vec![
        Message {
            id: 1,
            content: "Imagery received. Detection pass complete.".to_string(),
            role: Role::Assistant,
            image: None,
            timestamp: now,
        },
        Message {
            id: 2,
            content: "Three object classes flagged in the current frame. Ask about any of them."
                .to_string(),
            role: Role::Assistant,
            image: None,
            timestamp: now,
        },
    ]
}

fn next_id(messages: &[Message]) -> u32 {
    messages.iter().map(|m| m.id).max().map_or(1, |id| id + 1)
}

/// Analysis view at `/dashboard/:id`
#[component]
pub fn Analysis() -> impl IntoView {
    let params = use_params_map();

    let analysis_id =
        create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let messages = create_rw_signal(seed_messages());
    let (input, set_input) = create_signal(String::new());
    let phase = create_rw_signal(ChatPhase::Idle);
    let (panel_open, set_panel_open) = create_signal(true);
    let (show_analytics, set_show_analytics) = create_signal(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Landing on another analysis starts its transcript fresh
    create_effect(move |_| {
        let _id = analysis_id.get();
        messages.set(seed_messages());
        set_input.set(String::new());
        phase.set(ChatPhase::Idle);
    });

    let send = {
        let cancel = cancel.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();

            let text = input.get_untracked();
            if !can_submit(phase.get_untracked(), &text, false) {
                return;
            }
            let question = text.trim().to_string();

            phase.set(ChatPhase::Sending);
            messages.update(|list| {
                let id = next_id(list);
                list.push(Message {
                    id,
                    content: question.clone(),
                    role: Role::User,
                    image: None,
                    timestamp: chrono::Utc::now().timestamp_millis(),
                });
            });
            set_input.set(String::new());
            phase.set(ChatPhase::AwaitingReply);

            let token = cancel.clone();
            let sent_for = analysis_id.get_untracked();
            spawn_local(async move {
                sleep_ms(REPLY_DELAY_MS).await;
                // Replies for an analysis the user has since left are dropped.
                if token.is_cancelled() || analysis_id.get_untracked() != sent_for {
                    return;
                }
                messages.update(|list| {
                    let id = next_id(list);
                    list.push(Message {
                        id,
                        content: format!("AI response: {}", question),
                        role: Role::Assistant,
                        image: None,
                        timestamp: chrono::Utc::now().timestamp_millis(),
                    });
                });
                phase.set(ChatPhase::Idle);
            });
        }
    };

    view! {
        <div class="flex h-[calc(100vh-4rem)]">
            // Conversation panel
            <div class="flex flex-col flex-1 min-w-0">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-700">
                    <div class="flex items-center space-x-4">
                        <A href="/dashboard" class="text-gray-400 hover:text-white">"←"</A>
                        <h1 class="font-semibold text-lg">
                            {move || format!("Analysis #{}", analysis_id.get())}
                        </h1>
                    </div>
                    <div class="flex items-center space-x-2">
                        <button
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm
                                   font-medium transition-colors"
                            on:click=move |_| set_show_analytics.set(true)
                        >
                            "Full Analytics"
                        </button>
                        <button
                            class="px-3 py-2 text-gray-400 hover:text-white hover:bg-gray-700
                                   rounded-lg transition-colors"
                            on:click=move |_| set_panel_open.update(|open| *open = !*open)
                        >
                            {move || if panel_open.get() { "Hide detections" } else { "Show detections" }}
                        </button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto custom-scrollbar px-6 py-4 space-y-4">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|message| {
                                let is_user = message.role == Role::User;
                                let (row, bubble) = if is_user {
                                    ("flex justify-end", "bg-blue-600 rounded-2xl rounded-br-sm")
                                } else {
                                    ("flex justify-start", "bg-gray-700 rounded-2xl rounded-bl-sm")
                                };
                                view! {
                                    <div class=row>
                                        <div class=format!("max-w-[75%] px-4 py-3 {}", bubble)>
                                            <p class="whitespace-pre-wrap break-words">{message.content}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}

                    {move || {
                        (phase.get() == ChatPhase::AwaitingReply).then(|| view! {
                            <TypingIndicator />
                        })
                    }}
                </div>

                <form on:submit=send class="border-t border-gray-700 p-4 flex items-center space-x-2">
                    <input
                        type="text"
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                               focus:border-blue-500 focus:outline-none placeholder-gray-500"
                        placeholder="Ask about the detections..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || {
                            !input.with(|text| can_submit(phase.get(), text, false))
                        }
                        class="px-5 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-700
                               disabled:text-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </div>

            // Detection breakdown panel
            {move || {
                panel_open.get().then(|| view! {
                    <aside class="w-96 bg-gray-800 border-l border-gray-700 overflow-y-auto
                                  custom-scrollbar p-6 space-y-8 shrink-0">
                        <section>
                            <h2 class="text-sm uppercase tracking-wider text-gray-500 mb-4">
                                "Detected objects"
                            </h2>
                            <div class="space-y-4">
                                {DETECTED_OBJECTS
                                    .into_iter()
                                    .map(|(name, count, confidence)| view! {
                                        <div>
                                            <div class="flex justify-between text-sm mb-1">
                                                <span class="text-gray-300">
                                                    {format!("{} × {}", name, count)}
                                                </span>
                                                <span class="text-gray-400">
                                                    {format!("{}%", confidence)}
                                                </span>
                                            </div>
                                            <div class="w-full bg-gray-700 rounded-full h-2">
                                                <div
                                                    class="bg-blue-500 h-2 rounded-full"
                                                    style=format!("width: {}%", confidence)
                                                />
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </section>

                        <section>
                            <h2 class="text-sm uppercase tracking-wider text-gray-500 mb-4">
                                "Detection timeline"
                            </h2>
                            <LineChart points=DETECTION_TIMELINE.to_vec() class="w-full h-40 rounded-lg" />
                        </section>

                        <section>
                            <h2 class="text-sm uppercase tracking-wider text-gray-500 mb-4">
                                "Environment"
                            </h2>
                            <div class="grid grid-cols-2 gap-3">
                                {ENVIRONMENT
                                    .into_iter()
                                    .map(|(label, value)| view! {
                                        <div class="bg-gray-700/60 rounded-lg p-3">
                                            <div class="text-xs text-gray-500">{label}</div>
                                            <div class="text-sm font-medium text-gray-200">{value}</div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    </aside>
                })
            }}

            // Full analytics dialog
            {move || {
                show_analytics.get().then(|| view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
                        <div class="bg-gray-800 rounded-xl border border-gray-700 max-w-3xl w-full
                                    max-h-[85vh] overflow-y-auto custom-scrollbar p-6">
                            <div class="flex items-center justify-between mb-6">
                                <h2 class="text-xl font-semibold">"Advanced Analytics"</h2>
                                <button
                                    class="text-gray-400 hover:text-white text-xl"
                                    on:click=move |_| set_show_analytics.set(false)
                                >
                                    "✕"
                                </button>
                            </div>

                            <div class="space-y-8">
                                <section>
                                    <h3 class="text-sm uppercase tracking-wider text-gray-500 mb-3">
                                        "Detections per month"
                                    </h3>
                                    <LineChart points=DETECTION_TIMELINE.to_vec() />
                                </section>

                                <section>
                                    <h3 class="text-sm uppercase tracking-wider text-gray-500 mb-3">
                                        "Category split"
                                    </h3>
                                    <DonutChart slices=CATEGORY_SPLIT.to_vec() />
                                </section>

                                <section>
                                    <h3 class="text-sm uppercase tracking-wider text-gray-500 mb-3">
                                        "Model accuracy history"
                                    </h3>
                                    <LineChart
                                        points=ACCURACY_HISTORY.to_vec()
                                        color="#22C55E"
                                    />
                                </section>
                            </div>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_discards_prior_transcript() {
        let mut transcript = seed_messages();
        transcript.push(Message {
            id: next_id(&transcript),
            content: "How many vehicles?".to_string(),
            role: Role::User,
            image: None,
            timestamp: 0,
        });
        assert_eq!(transcript.len(), 3);

        let fresh = seed_messages();
        assert_eq!(fresh.len(), 2);
        assert!(fresh.iter().all(|m| m.role == Role::Assistant));
        assert_eq!(next_id(&fresh), 3);
    }

    #[test]
    fn test_next_id_continues_from_highest() {
        assert_eq!(next_id(&[]), 1);

        let seeded = seed_messages();
        assert_eq!(next_id(&seeded), 3);
    }
}
