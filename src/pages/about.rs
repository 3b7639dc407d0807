//! About Pages
//!
//! Hub page with links to the project overview and the team carousel.
//! All content is static fixture copy.

use leptos::*;
use leptos_router::*;

struct TeamMember {
    name: &'static str,
    contribution: &'static str,
    quote: &'static str,
}

const TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Priya Nair",
        contribution: "Detection models and training pipeline",
        quote: "A model is only as honest as its validation set.",
    },
    TeamMember {
        name: "Marcus Webb",
        contribution: "Console frontend and chat experience",
        quote: "If the analyst has to think about the tool, the tool failed.",
    },
    TeamMember {
        name: "Elif Demir",
        contribution: "Imagery ingestion and annotation tooling",
        quote: "Good labels beat clever architectures.",
    },
    TeamMember {
        name: "Jonah Petros",
        contribution: "Backend services and deployment",
        quote: "Boring infrastructure is a feature.",
    },
    TeamMember {
        name: "Sofia Andersson",
        contribution: "Evaluation, metrics and release gating",
        quote: "Ship the version you can explain.",
    },
];

/// About hub at `/about`
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16">
            <h1 class="text-4xl font-bold text-center mb-4">"About Argus"</h1>
            <p class="text-gray-400 text-center max-w-xl mx-auto mb-12">
                "What this console is, and the people who built it."
            </p>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-3xl mx-auto">
                <A
                    href="/about/project"
                    class="block bg-gray-800 rounded-xl p-8 border border-gray-700 hover:border-blue-500
                           transition-colors text-center"
                >
                    <div class="text-4xl mb-4">"📡"</div>
                    <h2 class="text-xl font-semibold mb-2">"The Project"</h2>
                    <p class="text-sm text-gray-400">"Why Argus exists and what it does."</p>
                </A>
                <A
                    href="/about/team"
                    class="block bg-gray-800 rounded-xl p-8 border border-gray-700 hover:border-blue-500
                           transition-colors text-center"
                >
                    <div class="text-4xl mb-4">"👥"</div>
                    <h2 class="text-xl font-semibold mb-2">"The Team"</h2>
                    <p class="text-sm text-gray-400">"Five people, one all-seeing console."</p>
                </A>
            </div>
        </div>
    }
}

/// Project overview at `/about/project`
#[component]
pub fn AboutProject() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 max-w-3xl">
            <h1 class="text-3xl font-bold mb-8">"The Project"</h1>

            <div class="space-y-6 text-gray-300 leading-relaxed">
                <p>
                    "Argus is a console for image intelligence work: analysts converse with an \
                     assistant about uploaded imagery, review detections with per-object \
                     confidence, and manage the model versions that produce them."
                </p>
                <p>
                    "The frontend you are using keeps every interaction responsive by simulating \
                     long-running work client-side while the heavy lifting happens on dedicated \
                     backends. Uploads, training epochs and assistant replies all report their \
                     progress live."
                </p>
                <p>
                    "Three model families power the system: Panoptes for combined imagery and \
                     annotation training, Iris for pure imagery, and Hermes for annotation-only \
                     refinement."
                </p>
            </div>

            <A href="/about" class="inline-block mt-10 text-blue-400 hover:text-blue-300">
                "← Back to About"
            </A>
        </div>
    }
}

/// Team carousel at `/about/team`
#[component]
pub fn AboutTeam() -> impl IntoView {
    let (index, set_index) = create_signal(0usize);

    let prev = move |_| set_index.update(|i| *i = (*i + TEAM.len() - 1) % TEAM.len());
    let next = move |_| set_index.update(|i| *i = (*i + 1) % TEAM.len());

    view! {
        <div class="container mx-auto px-4 py-16 max-w-2xl text-center">
            <h1 class="text-3xl font-bold mb-10">"The Team"</h1>

            <div class="bg-gray-800 rounded-xl p-10 border border-gray-700">
                {move || {
                    let member = &TEAM[index.get() % TEAM.len()];
                    view! {
                        <div>
                            <div class="w-20 h-20 mx-auto bg-gray-700 rounded-full flex items-center
                                        justify-center text-3xl mb-4">
                                {member.name.chars().next().unwrap_or('?').to_string()}
                            </div>
                            <h2 class="text-xl font-semibold">{member.name}</h2>
                            <p class="text-sm text-blue-400 mb-4">{member.contribution}</p>
                            <blockquote class="text-gray-400 italic">
                                {format!("\u{201c}{}\u{201d}", member.quote)}
                            </blockquote>
                        </div>
                    }
                }}
            </div>

            <div class="flex items-center justify-center space-x-6 mt-6">
                <button
                    on:click=prev
                    class="px-4 py-2 bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                >
                    "← Previous"
                </button>
                <span class="text-sm text-gray-500">
                    {move || format!("{} / {}", index.get() % TEAM.len() + 1, TEAM.len())}
                </span>
                <button
                    on:click=next
                    class="px-4 py-2 bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                >
                    "Next →"
                </button>
            </div>

            <A href="/about" class="inline-block mt-10 text-blue-400 hover:text-blue-300">
                "← Back to About"
            </A>
        </div>
    }
}
