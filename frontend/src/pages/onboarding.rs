use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::{Logo, SplitLayout};
use crate::components::otp_modal::OtpModal;
use crate::components::toast::use_toasts;
use crate::forms::{FieldRule, Rule, collect_errors};

#[derive(Clone, Default, PartialEq)]
struct OnboardForm {
    name: String,
    email: String,
    phone: String,
}

fn rules() -> Vec<FieldRule<OnboardForm>> {
    vec![
        FieldRule {
            name: "name",
            label: "Full name",
            get: |form: &OnboardForm| form.name.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "email",
            label: "Email address",
            get: |form: &OnboardForm| form.email.clone(),
            rule: Rule::Email,
        },
        FieldRule {
            name: "phone",
            label: "Phone number",
            get: |form: &OnboardForm| form.phone.clone(),
            rule: Rule::Phone,
        },
    ]
}

/// Landing page: patient onboarding form, then OTP verification of the phone
/// number.
#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let toasts = use_toasts();
    let form = use_state(OnboardForm::default);
    let errors = use_state(Vec::<(&'static str, String)>::new);
    let otp_open = use_state(|| false);

    let error_for = |name: &str| -> Option<String> {
        errors
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, message)| message.clone())
    };

    let bind = |name: &'static str, apply: fn(&mut OnboardForm, String)| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            // Typing clears that field's error.
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
        let otp_open = otp_open.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = collect_errors(&rules(), &form);
            if !found.is_empty() {
                errors.set(found);
                toasts.error(
                    "onboarding",
                    "Please check your information",
                    Some("Please fill in all required fields correctly.".into()),
                );
                return;
            }
            toasts.success(
                "onboarding",
                "OTP Sent!",
                Some("We've sent a verification code to your phone.".into()),
            );
            otp_open.set(true);
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
        <>
            <SplitLayout>
                <div class="mb-12">
                    <Logo />
                </div>

                <div class="mb-8 md:mb-12">
                    <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-3 leading-tight">
                        {"Hi there,"}
                        <span class="block text-green-400">{"Welcome!"}</span>
                    </h1>
                    <p class="text-gray-300 text-lg sm:text-xl font-light">
                        {"Get Started with Appointments."}
                    </p>
                </div>

                <form onsubmit={onsubmit} class="space-y-6 w-full">
                    <div class="space-y-3">
                        <label for="name" class="text-sm font-medium text-gray-300">{"Full name"}</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter your full name"
                            value={form.name.clone()}
                            oninput={bind("name", |form, value| form.name = value)}
                            class={input_class("name")}
                        />
                        { for field_error("name") }
                    </div>

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
                        <label for="phone" class="text-sm font-medium text-gray-300">{"Phone number"}</label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="Enter your phone number"
                            value={form.phone.clone()}
                            oninput={bind("phone", |form, value| form.phone = value)}
                            class={input_class("phone")}
                        />
                        { for field_error("phone") }
                    </div>

                    <button
                        type="submit"
                        class="w-full py-4 text-lg font-semibold bg-gradient-to-r from-green-500 \
                               to-green-600 hover:from-green-600 hover:to-green-700 text-white rounded-xl \
                               shadow-lg hover:shadow-green-500/25 transition-all duration-200"
                    >
                        {"Get Started →"}
                    </button>
                </form>
            </SplitLayout>

            <OtpModal
                open={*otp_open}
                on_close={{
                    let otp_open = otp_open.clone();
                    Callback::from(move |_| otp_open.set(false))
                }}
                phone={form.phone.clone()}
            />
        </>
    }
}
