//! Train Model Page
//!
//! Dataset uploads and training runs at `/training/train`. Uploads advance
//! one chunk per tick and hand the file to the API once they reach 100%;
//! the run itself is simulated, one epoch per second, and checks for a stop
//! request between epochs.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::TrainingChart;
use crate::state::{
    epoch_log_line, epoch_step, model_for_uploads, start_log_line, ComputeDevice, EpochStat,
    GlobalState, Optimizer, TrainingParams, UploadKind, UploadTracker, COMPLETE_LOG_LINE,
    STOP_LOG_LINE,
};
use crate::task::{sleep_ms, CancelToken};

const UPLOAD_TICK_MS: u32 = 100;
const EPOCH_MS: u32 = 1000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum RunTab {
    Graph,
    Shell,
}

/// Training run console at `/training/train`
#[component]
pub fn TrainModel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Accepted file name and in-flight percentage per artifact kind
    let images_name = create_rw_signal(None::<String>);
    let images_progress = create_rw_signal(None::<u32>);
    let annotations_name = create_rw_signal(None::<String>);
    let annotations_progress = create_rw_signal(None::<u32>);

    let params = create_rw_signal(TrainingParams::default());
    let running = create_rw_signal(false);
    let run_stats = create_rw_signal(Vec::<EpochStat>::new());
    let shell_log = create_rw_signal(Vec::<String>::new());
    let (active_tab, set_active_tab) = create_signal(RunTab::Graph);

    // Uploads share one token for the page; each run gets its own so the
    // stop button only cancels the run.
    let page_token = CancelToken::new();
    let run_token: Rc<RefCell<Option<CancelToken>>> = Rc::new(RefCell::new(None));

    on_cleanup({
        let page_token = page_token.clone();
        let run_token = Rc::clone(&run_token);
        move || {
            page_token.cancel();
            if let Some(token) = run_token.borrow_mut().take() {
                token.cancel();
            }
        }
    });

    let target_model = create_memo(move |_| {
        model_for_uploads(
            images_name.with(|n| n.is_some()),
            annotations_name.with(|n| n.is_some()),
        )
    });

    let begin_upload = {
        let page_token = page_token.clone();
        let state = state.clone();
        move |kind: UploadKind, file: web_sys::File| {
            let (name_signal, progress_signal) = match kind {
                UploadKind::ImagesZip => (images_name, images_progress),
                UploadKind::AnnotationsJson => (annotations_name, annotations_progress),
            };

            let file_name = file.name();
            let size = file.size() as u64;
            name_signal.set(None);
            progress_signal.set(Some(0));

            let token = page_token.clone();
            let state = state.clone();
            spawn_local(async move {
                let mut tracker = UploadTracker::new(size);
                while !tracker.is_done() {
                    sleep_ms(UPLOAD_TICK_MS).await;
                    if token.is_cancelled() {
                        return;
                    }
                    progress_signal.set(Some(tracker.advance()));
                }

                let auth = state.token.get_untracked();
                let outcome = api::upload_training_file(kind, &file, auth.as_deref()).await;
                if token.is_cancelled() {
                    return;
                }
                progress_signal.set(None);
                match outcome {
                    Ok(ack) => {
                        name_signal.set(Some(file_name));
                        state.show_success(&format!("{} upload {}", kind.label(), ack.status));
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    let on_images = {
        let begin_upload = begin_upload.clone();
        Callback::new(move |file| begin_upload(UploadKind::ImagesZip, file))
    };
    let on_annotations = Callback::new(move |file| begin_upload(UploadKind::AnnotationsJson, file));

    let start_run = {
        let run_token = Rc::clone(&run_token);
        let state = state.clone();
        move |_: ev::MouseEvent| {
            if running.get_untracked() {
                return;
            }
            let Some(model) = target_model.get_untracked() else {
                state.show_error("Upload a dataset before starting a training run");
                return;
            };

            let config = params.get_untracked();
            running.set(true);
            run_stats.set(Vec::new());
            shell_log.set(vec![start_log_line(model)]);

            let token = CancelToken::new();
            *run_token.borrow_mut() = Some(token.clone());

            let state = state.clone();
            spawn_local(async move {
                for epoch in 1..=config.epochs {
                    sleep_ms(EPOCH_MS).await;
                    let Some(stat) = epoch_step(
                        token.is_cancelled(),
                        epoch,
                        js_sys::Math::random(),
                        js_sys::Math::random(),
                    ) else {
                        return;
                    };
                    run_stats.update(|stats| stats.push(stat));
                    shell_log.update(|log| log.push(epoch_log_line(&stat, config.epochs)));
                }
                if token.is_cancelled() {
                    return;
                }
                shell_log.update(|log| log.push(COMPLETE_LOG_LINE.to_string()));
                running.set(false);
                state.show_success("Training run complete");
            });
        }
    };

    let stop_run = {
        let run_token = Rc::clone(&run_token);
        move |_: ev::MouseEvent| {
            if !running.get_untracked() {
                return;
            }
            if let Some(token) = run_token.borrow_mut().take() {
                token.cancel();
            }
            running.set(false);
            shell_log.update(|log| log.push(STOP_LOG_LINE.to_string()));
        }
    };

    let tab_class = move |tab: RunTab| {
        if active_tab.get() == tab {
            "px-4 py-2 text-sm font-medium border-b-2 border-blue-500 text-white"
        } else {
            "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-400 hover:text-white"
        }
    };

    view! {
        <div class="p-8 max-w-5xl mx-auto space-y-8">
            <div>
                <h1 class="text-2xl font-bold mb-2">"Train Model"</h1>
                <p class="text-gray-400">
                    {move || match target_model.get() {
                        Some(model) => format!("Target model: {}", model),
                        None => "Upload a dataset to select a target model.".to_string(),
                    }}
                </p>
            </div>

            // Dataset uploads
            <div class="grid md:grid-cols-2 gap-4">
                <UploadCard
                    kind=UploadKind::ImagesZip
                    name=images_name
                    progress=images_progress
                    disabled=Signal::derive(move || running.get())
                    on_file=on_images
                />
                <UploadCard
                    kind=UploadKind::AnnotationsJson
                    name=annotations_name
                    progress=annotations_progress
                    disabled=Signal::derive(move || running.get())
                    on_file=on_annotations
                />
            </div>

            // Hyperparameters
            <div class="bg-gray-800 border border-gray-700 rounded-xl p-6">
                <h2 class="font-semibold mb-4">"Hyperparameters"</h2>
                <div class="grid md:grid-cols-2 gap-x-8 gap-y-5">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">
                            {move || format!("Learning rate: {}", params.with(|p| p.learning_rate))}
                        </label>
                        <input
                            type="range"
                            min="0.0001"
                            max="0.1"
                            step="0.0001"
                            class="w-full accent-blue-500"
                            prop:value=move || params.with(|p| p.learning_rate).to_string()
                            disabled=move || running.get()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    params.update(|p| p.learning_rate = value);
                                }
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Batch size"</label>
                        <input
                            type="number"
                            min="1"
                            max="128"
                            class="w-full bg-gray-700 rounded-lg px-3 py-2 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            prop:value=move || params.with(|p| p.batch_size).to_string()
                            disabled=move || running.get()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    params.update(|p| p.set_batch_size(value));
                                }
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Epochs"</label>
                        <input
                            type="number"
                            min="1"
                            max="100"
                            class="w-full bg-gray-700 rounded-lg px-3 py-2 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            prop:value=move || params.with(|p| p.epochs).to_string()
                            disabled=move || running.get()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    params.update(|p| p.set_epochs(value));
                                }
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Optimizer"</label>
                        <select
                            class="w-full bg-gray-700 rounded-lg px-3 py-2 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            disabled=move || running.get()
                            on:change=move |ev| {
                                params.update(|p| {
                                    p.optimizer = Optimizer::from_value(&event_target_value(&ev));
                                });
                            }
                        >
                            {Optimizer::ALL
                                .into_iter()
                                .map(|option| view! {
                                    <option
                                        value=option.as_value()
                                        selected=move || params.with(|p| p.optimizer == option)
                                    >
                                        {option.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Compute device"</label>
                        <select
                            class="w-full bg-gray-700 rounded-lg px-3 py-2 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            disabled=move || running.get()
                            on:change=move |ev| {
                                params.update(|p| {
                                    p.device = ComputeDevice::from_value(&event_target_value(&ev));
                                });
                            }
                        >
                            {ComputeDevice::ALL
                                .into_iter()
                                .map(|option| view! {
                                    <option
                                        value=option.as_value()
                                        selected=move || params.with(|p| p.device == option)
                                    >
                                        {option.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            // Run controls
            <div class="flex items-center space-x-4">
                {move || if running.get() {
                    view! {
                        <button
                            class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium
                                   transition-colors"
                            on:click=stop_run.clone()
                        >
                            "Stop Training"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <button
                            class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-700
                                   disabled:text-gray-500 rounded-lg font-medium transition-colors"
                            disabled=move || target_model.get().is_none()
                            on:click=start_run.clone()
                        >
                            "Start Training"
                        </button>
                    }
                    .into_view()
                }}

                {move || running.get().then(|| view! {
                    <span class="text-sm text-gray-400">
                        {move || format!(
                            "Epoch {}/{}",
                            run_stats.with(|stats| stats.len()),
                            params.with(|p| p.epochs),
                        )}
                    </span>
                })}
            </div>

            // Run output
            <div>
                <div class="flex space-x-1 border-b border-gray-700 mb-4">
                    <button
                        class=move || tab_class(RunTab::Graph)
                        on:click=move |_| set_active_tab.set(RunTab::Graph)
                    >
                        "Graph"
                    </button>
                    <button
                        class=move || tab_class(RunTab::Shell)
                        on:click=move |_| set_active_tab.set(RunTab::Shell)
                    >
                        "Shell"
                    </button>
                </div>

                {move || match active_tab.get() {
                    RunTab::Graph => view! {
                        <TrainingChart
                            stats=run_stats
                            total_epochs=Signal::derive(move || params.with(|p| p.epochs))
                        />
                    }
                    .into_view(),
                    RunTab::Shell => view! {
                        <div class="bg-gray-900 rounded-lg p-4 font-mono text-sm h-64
                                    overflow-y-auto custom-scrollbar space-y-1">
                            {move || {
                                let lines = shell_log.get();
                                if lines.is_empty() {
                                    view! {
                                        <p class="text-gray-600">
                                            "No output yet. Start a run to see logs."
                                        </p>
                                    }
                                    .into_view()
                                } else {
                                    lines
                                        .into_iter()
                                        .map(|line| view! {
                                            <p class="text-green-400">{line}</p>
                                        })
                                        .collect_view()
                                }
                            }}
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn UploadCard(
    kind: UploadKind,
    /// Name of the accepted file, once the upload has finished
    name: RwSignal<Option<String>>,
    /// Simulated progress while an upload is in flight
    progress: RwSignal<Option<u32>>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    on_file: Callback<web_sys::File>,
) -> impl IntoView {
    let pick = move |ev: web_sys::Event| {
        let input_el: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(file) = input_el.files().and_then(|files| files.get(0)) {
            on_file.call(file);
        }
        // Allow re-picking the same file later
        input_el.set_value("");
    };

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-xl p-5">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-medium">{kind.label()}</h3>
                {move || name.get().map(|file_name| view! {
                    <span class="text-sm text-green-400 truncate max-w-[50%]">
                        {format!("✓ {}", file_name)}
                    </span>
                })}
            </div>

            {move || match progress.get() {
                Some(pct) => view! {
                    <div>
                        <div class="w-full bg-gray-700 rounded-full h-2 mb-2">
                            <div
                                class="bg-blue-500 h-2 rounded-full transition-all"
                                style=format!("width: {}%", pct)
                            />
                        </div>
                        <div class="text-sm text-gray-400">{format!("Uploading... {}%", pct)}</div>
                    </div>
                }
                .into_view(),
                None => view! {
                    <label
                        class="inline-block px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               cursor-pointer text-sm transition-colors"
                        class=("opacity-50", move || disabled.get())
                    >
                        {move || if name.get().is_some() { "Replace file" } else { "Choose file" }}
                        <input
                            type="file"
                            accept=kind.accept()
                            class="hidden"
                            disabled=move || disabled.get()
                            on:change=pick
                        />
                    </label>
                }
                .into_view(),
            }}
        </div>
    }
}
