use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::{Logo, SplitLayout};
use crate::components::toast::use_toasts;
use crate::forms::{FieldRule, Rule, collect_errors};
use crate::services::auth;

#[derive(Clone, Default, PartialEq)]
struct LoginForm {
    email: String,
    password: String,
}

fn rules() -> Vec<FieldRule<LoginForm>> {
    vec![
        FieldRule {
            name: "email",
            label: "Email address",
            get: |form: &LoginForm| form.email.clone(),
            rule: Rule::Email,
        },
        FieldRule {
            name: "password",
            label: "Password",
            get: |form: &LoginForm| form.password.clone(),
            rule: Rule::Required,
        },
    ]
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");
    let form = use_state(LoginForm::default);
    let errors = use_state(Vec::<(&'static str, String)>::new);
    let show_password = use_state(|| false);
    let submitting = use_state(|| false);

    let error_for = |name: &str| -> Option<String> {
        errors
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, message)| message.clone())
    };

    let bind = |name: &'static str, apply: fn(&mut LoginForm, String)| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            if errors.iter().any(|(field, _)| *field == name) {
                errors.set(
                    errors
                        .iter()
                        .filter(|(field, _)| *field != name)
                        .cloned()
                        .collect(),
                );
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let found = collect_errors(&rules(), &form);
            if !found.is_empty() {
                errors.set(found);
                toasts.error(
                    "login",
                    "Please check your information",
                    Some("Please fill in all required fields correctly.".into()),
                );
                return;
            }

            submitting.set(true);
            let email = form.email.trim().to_string();
            let password = form.password.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let session = auth::login(&email, &password).await;
                toasts.success(
                    "login",
                    "Login Successful!",
                    Some("Welcome back to CarePulse!".into()),
                );
                submitting.set(false);
                TimeoutFuture::new(1_500).await;
                if session.has_completed_profile {
                    navigator.push(&Route::Dashboard);
                } else {
                    navigator.push(&Route::PatientForm);
                }
            });
        })
    };

    let field_error = |name: &str| {
        error_for(name).map(|message| {
            html! {
                <p class="text-red-400 text-sm flex items-center gap-1">
                    <span class="w-1 h-1 bg-red-400 rounded-full"></span>
                    {message}
                </p>
            }
        })
    };

    let input_class = |name: &str| {
        if error_for(name).is_some() {
            "w-full px-4 py-4 rounded-xl border bg-[#11161c] text-white placeholder-gray-500 \
             outline-none focus:ring-4 transition-all text-base border-red-500 \
             focus:border-red-500 focus:ring-red-500/20"
        } else {
            "w-full px-4 py-4 rounded-xl border bg-[#11161c] text-white placeholder-gray-500 \
             outline-none focus:ring-4 transition-all text-base border-gray-600 \
             focus:border-green-500 focus:ring-green-500/20"
        }
    };

    html! {
        <SplitLayout>
            <div class="mb-12">
                <Logo />
            </div>

            <div class="mb-8 md:mb-12">
                <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-3 leading-tight">
                    {"Welcome Back"}
                    <span class="block text-green-400">{"Sign in to Continue"}</span>
                </h1>
                <p class="text-gray-300 text-lg sm:text-xl font-light">
                    {"Access your healthcare dashboard."}
                </p>
            </div>

            <form onsubmit={onsubmit} class="space-y-6 w-full">
                <div class="space-y-3">
                    <label for="email" class="text-sm font-medium text-gray-300">{"Email address"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email address"
                        value={form.email.clone()}
                        oninput={bind("email", |form, value| form.email = value)}
                        class={input_class("email")}
                    />
                    { for field_error("email") }
                </div>

                <div class="space-y-3">
                    <label for="password" class="text-sm font-medium text-gray-300">{"Password"}</label>
                    <div class="relative">
                        <input
                            id="password"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Enter your password"
                            value={form.password.clone()}
                            oninput={bind("password", |form, value| form.password = value)}
                            class={input_class("password")}
                        />
                        <button
                            type="button"
                            onclick={{
                                let show_password = show_password.clone();
                                Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
                            }}
                            class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 \
                                   hover:text-white transition-colors text-sm"
                        >
                            { if *show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>
                    { for field_error("password") }
                </div>

                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full py-4 text-lg font-semibold bg-gradient-to-r from-green-500 \
                           to-green-600 hover:from-green-600 hover:to-green-700 text-white rounded-xl \
                           shadow-lg hover:shadow-green-500/25 transition-all duration-200 \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    { if *submitting { "Signing In..." } else { "Sign In →" } }
                </button>
            </form>

            <div class="mt-6 text-center">
                <p class="text-gray-400 text-sm">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Onboarding} classes="text-green-400 hover:text-green-300 font-medium">
                        {"Create account here"}
                    </Link<Route>>
                </p>
            </div>
        </SplitLayout>
    }
}
