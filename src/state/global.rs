//! Global Application State
//!
//! Reactive state management using Leptos signals. The store is provided
//! once at the root and handed to views through context, so every mutation
//! of chats, versions or toasts goes through an explicit handle.

use leptos::*;

use super::chats::ChatList;
use super::session;
use super::training::VersionSet;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// All chat sessions, seeded from fixture data
    pub chats: RwSignal<ChatList>,
    /// Known model versions for the training console
    pub versions: RwSignal<VersionSet>,
    /// Bearer token of the signed-in session, mirrored from the cookie
    pub token: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        chats: create_rw_signal(ChatList::seeded()),
        versions: create_rw_signal(VersionSet::seeded()),
        token: create_rw_signal(session::auth_token()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record a fresh session token in both the cookie and the store
    pub fn sign_in(&self, token: &str) {
        session::store_token(token);
        self.token.set(Some(token.to_string()));
    }

    /// Forget the session token
    pub fn sign_out(&self) {
        session::clear_token();
        self.token.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
