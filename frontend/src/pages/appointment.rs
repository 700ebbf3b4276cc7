use carepulse_shared::Doctor;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::doctor_select::DoctorSelect;
use crate::components::layout::{Logo, SplitLayout};
use crate::components::toast::use_toasts;
use crate::forms::{email_ok, phone_ok};
use crate::services::appointments::{self, AppointmentRequest};
use crate::services::session;
use crate::utils::parse_date;

/// Patient-side appointment request form.
#[function_component(AppointmentPage)]
pub fn appointment_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");
    let doctor = use_state(|| None::<Doctor>);
    let reason = use_state(String::new);
    let date = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let notes = use_state(String::new);
    let submitting = use_state(|| false);

    let text = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let (doctor, reason, date) = (doctor.clone(), reason.clone(), date.clone());
        let (email, phone, notes) = (email.clone(), phone.clone(), notes.clone());
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let parsed_date = parse_date(&date);
            if doctor.is_none() || parsed_date.is_none() || reason.trim().is_empty() {
                toasts.error("appointment", "Please fill in all required fields", None);
                return;
            }
            if email.trim().is_empty() && phone.trim().is_empty() {
                toasts.error(
                    "appointment",
                    "Please provide at least one contact method (email or phone)",
                    None,
                );
                return;
            }
            if !email.trim().is_empty() && !email_ok(email.trim()) {
                toasts.error("appointment", "Please enter a valid email address", None);
                return;
            }
            if !phone.trim().is_empty() && !phone_ok(phone.trim()) {
                toasts.error("appointment", "Please enter a valid phone number", None);
                return;
            }

            let picked = doctor.as_ref().cloned().unwrap_or_else(|| Doctor {
                name: String::new(),
                specialty: String::new(),
                image: String::new(),
            });
            let request = AppointmentRequest {
                patient: session::load()
                    .map(|user| user.name)
                    .unwrap_or_else(|| "Guest Patient".to_string()),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                doctor: picked.name,
                specialty: picked.specialty,
                date: parsed_date,
                time: String::new(),
                reason: reason.trim().to_string(),
                notes: notes.trim().to_string(),
            };

            submitting.set(true);
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                appointments::request(request).await;
                toasts.success("appointment", "Appointment requested successfully!", None);
                submitting.set(false);
                TimeoutFuture::new(1_500).await;
                navigator.push(&Route::AppointmentSuccess);
            });
        })
    };

    let field_class = "w-full bg-[#0D0F12] border border-gray-600 text-white rounded-xl px-4 py-4 \
                       text-base placeholder-gray-500 focus:ring-2 focus:ring-green-500 \
                       focus:border-green-500";

    html! {
        <SplitLayout footer="@carepulse.com • Secure Patient Portal">
            <div class="mb-12">
                <Logo subtitle="Patient Portal" />
            </div>

            <div class="mb-8 md:mb-12">
                <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-3 leading-tight">
                    {"Hey"}
                    <span class="block text-green-400">{"there"}</span>
                </h1>
                <p class="text-gray-300 text-lg sm:text-xl font-light">
                    {"Request a new appointment in 10 seconds"}
                </p>
            </div>

            <div class="space-y-6 mb-8">
                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-white">{"Doctor"}</h2>
                    <DoctorSelect
                        selected={(*doctor).clone()}
                        on_select={{
                            let doctor = doctor.clone();
                            Callback::from(move |picked: Doctor| doctor.set(Some(picked)))
                        }}
                    />
                </div>

                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-white">{"Reason for appointment"}</h2>
                    <input
                        placeholder="ex: Annual monthly check-up"
                        value={(*reason).clone()}
                        oninput={text(reason.clone())}
                        class={field_class}
                    />
                </div>

                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-white">{"Expected appointment date"}</h2>
                    <input
                        type="date"
                        value={(*date).clone()}
                        oninput={text(date.clone())}
                        class={field_class}
                    />
                </div>

                <div class="space-y-4">
                    <div class="border-t border-gray-700 pt-4">
                        <h2 class="text-xl font-semibold text-white mb-1">{"Contact Details"}</h2>
                        <p class="text-gray-400 text-sm">
                            {"Provide at least one contact method so we can reach you"}
                        </p>
                    </div>

                    <div class="space-y-3">
                        <h3 class="text-lg font-semibold text-white">{"Email Address"}</h3>
                        <input
                            type="email"
                            placeholder="ex: your.email@example.com"
                            value={(*email).clone()}
                            oninput={text(email.clone())}
                            class={field_class}
                        />
                    </div>

                    <div class="space-y-3">
                        <h3 class="text-lg font-semibold text-white">{"Phone Number"}</h3>
                        <input
                            type="tel"
                            placeholder="Enter phone number"
                            value={(*phone).clone()}
                            oninput={text(phone.clone())}
                            class={field_class}
                        />
                    </div>
                </div>

                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-white">{"Additional comments/notes"}</h2>
                    <textarea
                        placeholder="ex: Prefer afternoon appointments, if possible"
                        value={(*notes).clone()}
                        oninput={{
                            let notes = notes.clone();
                            Callback::from(move |e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                notes.set(area.value());
                            })
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-xl px-4 py-4 \
                               text-base placeholder-gray-500 min-h-32 resize-none focus:ring-2 \
                               focus:ring-green-500 focus:border-green-500"
                    ></textarea>
                </div>
            </div>

            <button
                onclick={on_submit}
                disabled={*submitting}
                class="w-full py-4 text-lg font-semibold bg-gradient-to-r from-green-500 to-green-600 \
                       hover:from-green-600 hover:to-green-700 text-white rounded-xl shadow-lg \
                       hover:shadow-green-500/25 transition-all duration-200 disabled:opacity-50"
            >
                { if *submitting { "Submitting..." } else { "Submit and continue ✓" } }
            </button>
        </SplitLayout>
    }
}
