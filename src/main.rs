//! Argus Vision Console
//!
//! Frontend for the Argus image analysis chatbot, built with Leptos (WASM).
//!
//! # Features
//!
//! - Conversational image analysis with attachment support
//! - Analysis dashboard with detection breakdowns and charts
//! - Simulated model training with dataset uploads and live curves
//! - Model version management
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Chat replies and training runs are simulated in the browser;
//! only auth, analysis creation and dataset uploads reach the Argus API.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod task;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Apply the persisted theme before anything renders
    state::theme::apply_theme(state::theme::load_theme());

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
