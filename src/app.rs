//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    About, AboutProject, AboutTeam, Analysis, Auth, ChatView, Dashboard, Home, NewChat,
    TrainModel, TrainingLayout, TrainingOverview, Versions,
};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area; pages manage their own width and scrolling
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/about" view=About />
                        <Route path="/about/project" view=AboutProject />
                        <Route path="/about/team" view=AboutTeam />
                        <Route path="/auth" view=Auth />
                        <Route path="/new-chat" view=NewChat />
                        <Route path="/c/:id" view=ChatView />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/dashboard/:id" view=Analysis />
                        <Route path="/training" view=TrainingLayout>
                            <Route path="" view=TrainingOverview />
                            <Route path="train" view=TrainModel />
                            <Route path="versions" view=Versions />
                        </Route>
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🛰"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
