//! Auth Page
//!
//! Login/signup form. Validation runs entirely client-side; only a valid
//! form issues the single auth request, and the returned token is kept in
//! the session cookie.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::GlobalState;
use crate::validate::{validate_credentials, AuthMode};

/// Auth page at `/auth`
#[component]
pub fn Auth() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let mode = create_rw_signal(AuthMode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let current_mode = mode.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let name_value = name.get_untracked();

        state_for_submit.clear_error();
        if let Err(message) =
            validate_credentials(current_mode, &email_value, &password_value, &name_value)
        {
            state_for_submit.show_error(&message);
            return;
        }

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let signup_name = current_mode.is_signup().then(|| name_value);
            match api::authenticate(
                current_mode,
                &email_value,
                &password_value,
                signup_name.as_deref(),
            )
            .await
            {
                Ok(response) => {
                    state_clone.sign_in(&response.access_token);
                    let greeting = if current_mode.is_signup() {
                        "Account created, welcome to Argus"
                    } else {
                        "Welcome back"
                    };
                    state_clone.show_success(greeting);
                    set_submitting.set(false);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh] px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 border border-gray-700">
                <h1 class="text-2xl font-bold text-center mb-2">
                    {move || {
                        if mode.get().is_signup() {
                            "Create your account"
                        } else {
                            "Sign in to Argus"
                        }
                    }}
                </h1>
                <p class="text-sm text-gray-400 text-center mb-8">
                    "Access the dashboard and training console"
                </p>

                <form on:submit=on_submit class="space-y-4">
                    {move || {
                        mode.get().is_signup().then(|| view! {
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                                <input
                                    type="text"
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                                           focus:border-blue-500 focus:outline-none"
                                    placeholder="Ada Lovelace"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                        })
                    }}

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            placeholder="analyst@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                                   focus:border-blue-500 focus:outline-none"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full flex items-center justify-center space-x-2 px-4 py-3
                               bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <InlineLoading />
                                    <span>"Please wait..."</span>
                                }.into_view()
                            } else if mode.get().is_signup() {
                                view! { <span>"Sign up"</span> }.into_view()
                            } else {
                                view! { <span>"Sign in"</span> }.into_view()
                            }
                        }}
                    </button>
                </form>

                <button
                    class="block w-full text-center text-sm text-blue-400 hover:text-blue-300 mt-6"
                    on:click=move |_| mode.update(|m| *m = m.toggled())
                >
                    {move || {
                        if mode.get().is_signup() {
                            "Already have an account? Sign in"
                        } else {
                            "New to Argus? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
