use carepulse_shared::{Doctor, Gender, IdentificationType, PatientProfile};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::doctor_select::DoctorSelect;
use crate::components::layout::PortalHeader;
use crate::components::toast::use_toasts;
use crate::forms::{FieldRule, Rule, first_error};
use crate::services::{doctors, session};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Personal,
    Medical,
    Identification,
    Consent,
}

const STEP_ORDER: [Step; 4] = [Step::Personal, Step::Medical, Step::Identification, Step::Consent];

impl Step {
    fn label(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Medical => "Medical Info",
            Step::Identification => "Identification",
            Step::Consent => "Consent",
        }
    }

    fn number(&self) -> usize {
        STEP_ORDER.iter().position(|step| step == self).unwrap_or(0) + 1
    }

    fn next(&self) -> Option<Step> {
        STEP_ORDER.get(self.number()).copied()
    }

    fn previous(&self) -> Option<Step> {
        self.number().checked_sub(2).map(|i| STEP_ORDER[i])
    }
}

fn personal_rules() -> Vec<FieldRule<PatientProfile>> {
    vec![
        FieldRule {
            name: "full_name",
            label: "Full name",
            get: |profile: &PatientProfile| profile.full_name.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "email",
            label: "Email address",
            get: |profile: &PatientProfile| profile.email.clone(),
            rule: Rule::Email,
        },
        FieldRule {
            name: "phone",
            label: "Phone number",
            get: |profile: &PatientProfile| profile.phone.clone(),
            rule: Rule::Phone,
        },
        FieldRule {
            name: "date_of_birth",
            label: "Date of birth",
            get: |profile: &PatientProfile| profile.date_of_birth.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "gender",
            label: "Gender",
            get: |profile: &PatientProfile| {
                profile.gender.map(|g| g.label().to_string()).unwrap_or_default()
            },
            rule: Rule::Required,
        },
        FieldRule {
            name: "address",
            label: "Address",
            get: |profile: &PatientProfile| profile.address.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "emergency_contact_name",
            label: "Emergency contact name",
            get: |profile: &PatientProfile| profile.emergency_contact_name.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "emergency_phone",
            label: "Emergency phone number",
            get: |profile: &PatientProfile| profile.emergency_phone.clone(),
            rule: Rule::Phone,
        },
    ]
}

fn identification_rules() -> Vec<FieldRule<PatientProfile>> {
    vec![
        FieldRule {
            name: "identification_type",
            label: "Identification type",
            get: |profile: &PatientProfile| {
                profile
                    .identification_type
                    .map(|t| t.label().to_string())
                    .unwrap_or_default()
            },
            rule: Rule::Required,
        },
        FieldRule {
            name: "identification_number",
            label: "Identification number",
            get: |profile: &PatientProfile| profile.identification_number.clone(),
            rule: Rule::Required,
        },
        FieldRule {
            name: "identification_document",
            label: "Identification document",
            get: |profile: &PatientProfile| {
                profile.identification_document.clone().unwrap_or_default()
            },
            rule: Rule::Required,
        },
    ]
}

/// Validate the step the user is trying to leave. Medical information is
/// optional and always passes.
fn validate_step(step: Step, profile: &PatientProfile) -> Option<String> {
    match step {
        Step::Personal => first_error(&personal_rules(), profile),
        Step::Medical => None,
        Step::Identification => first_error(&identification_rules(), profile),
        Step::Consent => {
            (!profile.all_consents_given()).then(|| "Please agree to all consent terms".to_string())
        }
    }
}

/// Four-step patient registration form.
#[function_component(PatientFormPage)]
pub fn patient_form_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");
    let profile = use_state(PatientProfile::default);
    let current = use_state(|| Step::Personal);
    let submitting = use_state(|| false);

    let bind = {
        let profile = profile.clone();
        move |apply: fn(&mut PatientProfile, String)| {
            let profile = profile.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*profile).clone();
                apply(&mut next, input.value());
                profile.set(next);
            })
        }
    };

    let bind_area = {
        let profile = profile.clone();
        move |apply: fn(&mut PatientProfile, String)| {
            let profile = profile.clone();
            Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                let mut next = (*profile).clone();
                apply(&mut next, area.value());
                profile.set(next);
            })
        }
    };

    let on_next = {
        let profile = profile.clone();
        let current = current.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(message) = validate_step(*current, &profile) {
                toasts.error("intake", message, None);
                return;
            }
            if let Some(next) = current.next() {
                current.set(next);
            }
        })
    };

    let on_previous = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(previous) = current.previous() {
                current.set(previous);
            }
        })
    };

    let on_skip_medical = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = current.next() {
                current.set(next);
            }
        })
    };

    let on_submit = {
        let profile = profile.clone();
        let current = current.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            if let Some(message) = validate_step(*current, &profile) {
                toasts.error("intake", message, None);
                return;
            }
            submitting.set(true);
            session::mark_profile_complete();
            toasts.success(
                "intake",
                "Profile Completed!",
                Some("Redirecting to your dashboard...".into()),
            );
            let navigator = navigator.clone();
            spawn_local(async move {
                TimeoutFuture::new(1_500).await;
                navigator.push(&Route::Dashboard);
            });
        })
    };

    let on_file_change = {
        let profile = profile.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            let mut next = (*profile).clone();
            next.identification_document = name;
            profile.set(next);
        })
    };

    let input_class = "w-full bg-[#0D0F12] border border-gray-600 text-white rounded-md px-3 py-2 \
                       text-sm placeholder-gray-500 focus:ring-green-500 focus:border-green-500";
    let area_class = "w-full bg-[#0D0F12] border border-gray-600 text-white rounded-md px-3 py-2 \
                      text-sm placeholder-gray-500 min-h-20 focus:ring-green-500 focus:border-green-500";

    let text_field = |label: &'static str,
                      placeholder: &'static str,
                      kind: &'static str,
                      value: String,
                      oninput: Callback<InputEvent>| {
        html! {
            <div class="space-y-2">
                <label class="text-sm font-medium text-gray-300">{label}</label>
                <input type={kind} {placeholder} {value} {oninput} class={input_class} />
            </div>
        }
    };

    let step_view = match *current {
        Step::Personal => html! {
            <div class="space-y-6">
                <h2 class="text-lg sm:text-xl font-bold text-green-400">{"Personal Information"}</h2>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    { text_field("Full name *", "ex: Adam Smith", "text",
                        profile.full_name.clone(), bind(|p, v| p.full_name = v)) }
                    { text_field("Email address *", "ex: patient@example.com", "email",
                        profile.email.clone(), bind(|p, v| p.email = v)) }
                    { text_field("Phone number *", "Enter your phone number", "tel",
                        profile.phone.clone(), bind(|p, v| p.phone = v)) }
                    { text_field("Date of birth *", "", "date",
                        profile.date_of_birth.clone(), bind(|p, v| p.date_of_birth = v)) }

                    <div class="space-y-2 sm:col-span-2">
                        <label class="text-sm font-medium text-gray-300">{"Gender *"}</label>
                        <div class="flex flex-wrap gap-4">
                            { for Gender::all().into_iter().map(|gender| {
                                let checked = profile.gender == Some(gender);
                                let onclick = {
                                    let profile = profile.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*profile).clone();
                                        next.gender = Some(gender);
                                        profile.set(next);
                                    })
                                };
                                html! {
                                    <button type="button" {onclick}
                                        class="flex items-center gap-2 cursor-pointer group">
                                        <span class={format!(
                                            "relative flex items-center justify-center w-5 h-5 border-2 \
                                             rounded-full transition-all {}",
                                            if checked { "bg-green-500 border-green-500" }
                                            else { "border-gray-500 group-hover:border-gray-400" }
                                        )}>
                                            if checked {
                                                <span class="w-2 h-2 bg-white rounded-full"></span>
                                            }
                                        </span>
                                        <span class="text-gray-300 text-sm group-hover:text-white">
                                            {gender.label()}
                                        </span>
                                    </button>
                                }
                            })}
                        </div>
                    </div>

                    <div class="space-y-2 sm:col-span-2">
                        <label class="text-sm font-medium text-gray-300">{"Address *"}</label>
                        <input
                            placeholder="ex: 14 street, New York, NY - 5101"
                            value={profile.address.clone()}
                            oninput={bind(|p, v| p.address = v)}
                            class={input_class}
                        />
                    </div>

                    { text_field("Occupation", "ex: Software Engineer", "text",
                        profile.occupation.clone(), bind(|p, v| p.occupation = v)) }
                    { text_field("Emergency contact name *", "Guardian's name", "text",
                        profile.emergency_contact_name.clone(),
                        bind(|p, v| p.emergency_contact_name = v)) }
                    { text_field("Emergency phone number *", "Enter emergency phone number", "tel",
                        profile.emergency_phone.clone(), bind(|p, v| p.emergency_phone = v)) }
                </div>
            </div>
        },
        Step::Medical => {
            let selected = doctors::roster()
                .into_iter()
                .find(|doctor| doctor.name == profile.primary_care_physician);
            html! {
                <div class="space-y-6">
                    <div class="flex justify-between items-center">
                        <h2 class="text-lg sm:text-xl font-bold text-green-400">{"Medical Information"}</h2>
                        <span class="text-gray-400 text-sm bg-gray-800 px-3 py-1 rounded-full">{"Optional"}</span>
                    </div>

                    <div class="bg-blue-500/10 border border-blue-500/20 rounded-lg p-4">
                        <p class="text-blue-400 text-sm">
                            {"This section is optional. You can provide your medical information now \
                              or update it later in your profile."}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <div class="space-y-2 sm:col-span-2">
                            <label class="text-sm font-medium text-gray-300">{"Primary care physician"}</label>
                            <DoctorSelect
                                selected={selected}
                                on_select={{
                                    let profile = profile.clone();
                                    Callback::from(move |doctor: Doctor| {
                                        let mut next = (*profile).clone();
                                        next.primary_care_physician = doctor.name;
                                        profile.set(next);
                                    })
                                }}
                                on_clear={{
                                    let profile = profile.clone();
                                    Some(Callback::from(move |_| {
                                        let mut next = (*profile).clone();
                                        next.primary_care_physician = String::new();
                                        profile.set(next);
                                    }))
                                }}
                            />
                        </div>

                        { text_field("Insurance provider", "ex: BlueCross", "text",
                            profile.insurance_provider.clone(),
                            bind(|p, v| p.insurance_provider = v)) }
                        { text_field("Insurance policy number", "ex: ABC1234567", "text",
                            profile.insurance_policy_number.clone(),
                            bind(|p, v| p.insurance_policy_number = v)) }

                        <div class="space-y-2 sm:col-span-2">
                            <label class="text-sm font-medium text-gray-300">{"Allergies (if any)"}</label>
                            <textarea
                                placeholder="ex: Peanuts, Penicillin, Pollen"
                                value={profile.allergies.clone()}
                                oninput={bind_area(|p, v| p.allergies = v)}
                                class={area_class}
                            ></textarea>
                        </div>
                        <div class="space-y-2 sm:col-span-2">
                            <label class="text-sm font-medium text-gray-300">{"Current medications"}</label>
                            <textarea
                                placeholder="ex: Ibuprofen 200mg, Levothyroxine 50mcg"
                                value={profile.current_medications.clone()}
                                oninput={bind_area(|p, v| p.current_medications = v)}
                                class={area_class}
                            ></textarea>
                        </div>
                        <div class="space-y-2 sm:col-span-2">
                            <label class="text-sm font-medium text-gray-300">
                                {"Family medical history (if relevant)"}
                            </label>
                            <textarea
                                placeholder="ex: Mother had breast cancer"
                                value={profile.family_medical_history.clone()}
                                oninput={bind_area(|p, v| p.family_medical_history = v)}
                                class={area_class}
                            ></textarea>
                        </div>
                        <div class="space-y-2 sm:col-span-2">
                            <label class="text-sm font-medium text-gray-300">{"Past medical history"}</label>
                            <textarea
                                placeholder="ex: Asthma diagnosis in childhood"
                                value={profile.past_medical_history.clone()}
                                oninput={bind_area(|p, v| p.past_medical_history = v)}
                                class={area_class}
                            ></textarea>
                        </div>
                    </div>
                </div>
            }
        }
        Step::Identification => html! {
            <div class="space-y-6">
                <h2 class="text-lg sm:text-xl font-bold text-green-400">{"Identification"}</h2>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-gray-300">{"Identification Type *"}</label>
                        <select
                            onchange={{
                                let profile = profile.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    let mut next = (*profile).clone();
                                    next.identification_type = IdentificationType::all()
                                        .into_iter()
                                        .find(|t| t.label() == select.value());
                                    profile.set(next);
                                })
                            }}
                            class={input_class}
                        >
                            <option value="" selected={profile.identification_type.is_none()}>
                                {"Select type"}
                            </option>
                            { for IdentificationType::all().into_iter().map(|kind| html! {
                                <option
                                    value={kind.label()}
                                    selected={profile.identification_type == Some(kind)}
                                >
                                    {kind.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    { text_field("Identification Number *", "ex: AB1234567", "text",
                        profile.identification_number.clone(),
                        bind(|p, v| p.identification_number = v)) }

                    <div class="space-y-2 sm:col-span-2">
                        <label class="text-sm font-medium text-gray-300">
                            {"Upload Identification Document *"}
                        </label>
                        <label class="block border-2 border-dashed border-gray-600 rounded-lg p-6 \
                                      text-center hover:border-green-500 transition-colors cursor-pointer">
                            <input
                                type="file"
                                onchange={on_file_change.clone()}
                                class="hidden"
                                accept=".pdf,.jpg,.jpeg,.png"
                            />
                            <p class="text-gray-400 text-sm">
                                { match profile.identification_document.as_deref() {
                                    Some(name) => format!("Selected: {name}"),
                                    None => "Click to upload or drag and drop".to_string(),
                                }}
                            </p>
                            <p class="text-gray-500 text-xs mt-1">{"PDF, JPG, PNG up to 10MB"}</p>
                        </label>
                    </div>
                </div>
            </div>
        },
        Step::Consent => {
            let consent_row = |label: &'static str, checked: bool, apply: fn(&mut PatientProfile)| {
                let onclick = {
                    let profile = profile.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*profile).clone();
                        apply(&mut next);
                        profile.set(next);
                    })
                };
                html! {
                    <button type="button" {onclick} class="flex items-start gap-3 text-left w-full">
                        <span class={format!(
                            "mt-0.5 flex items-center justify-center w-5 h-5 border-2 rounded \
                             transition-all shrink-0 {}",
                            if checked { "bg-green-500 border-green-500 text-white" }
                            else { "border-gray-400 text-transparent" }
                        )}>
                            {"✓"}
                        </span>
                        <span class="text-sm font-medium text-gray-300">{label}</span>
                    </button>
                }
            };
            html! {
                <div class="space-y-6">
                    <h2 class="text-lg sm:text-xl font-bold text-green-400">{"Consent & Privacy"}</h2>
                    <div class="space-y-4">
                        { consent_row(
                            "I consent to receive treatment for my health condition. *",
                            profile.consent_treatment,
                            |p| p.consent_treatment = !p.consent_treatment,
                        )}
                        { consent_row(
                            "I consent to the use and disclosure of my health information for \
                             treatment purposes. *",
                            profile.consent_health_info,
                            |p| p.consent_health_info = !p.consent_health_info,
                        )}
                        { consent_row(
                            "I acknowledge that I have reviewed and agree to the privacy policy. *",
                            profile.consent_privacy_policy,
                            |p| p.consent_privacy_policy = !p.consent_privacy_policy,
                        )}
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="min-h-screen bg-[#0D0F12] text-white">
            <PortalHeader subtitle="Patient Registration">
                <div class="text-right">
                    <p class="font-semibold text-sm sm:text-base">{"Welcome to CarePulse"}</p>
                    <p class="text-gray-400 text-xs sm:text-sm">
                        {"Complete your registration in 4 simple steps"}
                    </p>
                </div>
            </PortalHeader>

            <main class="container mx-auto px-4 sm:px-6 py-8">
                // Progress steps
                <div class="bg-[#11161c] rounded-xl p-4 sm:p-6 border border-gray-700 mb-8">
                    <div class="flex justify-center">
                        <div class="flex items-center space-x-2 sm:space-x-4">
                            { for STEP_ORDER.iter().enumerate().map(|(index, step)| {
                                let done = current.number() > step.number();
                                let active = *current == *step;
                                html! {
                                    <div class="flex items-center">
                                        <div class={format!(
                                            "flex items-center justify-center w-9 h-9 rounded-full \
                                             border-2 transition-all text-sm {}",
                                            if active || done {
                                                "bg-green-500 border-green-500 text-white"
                                            } else {
                                                "border-gray-600 text-gray-400"
                                            }
                                        )}>
                                            { if done { "✓".to_string() } else { step.number().to_string() } }
                                        </div>
                                        <span class={format!(
                                            "ml-2 font-medium hidden sm:block text-sm {}",
                                            if active || done { "text-white" } else { "text-gray-400" }
                                        )}>
                                            {step.label()}
                                        </span>
                                        if index < STEP_ORDER.len() - 1 {
                                            <div class={format!(
                                                "w-6 lg:w-8 h-0.5 mx-2 hidden sm:block {}",
                                                if done { "bg-green-500" } else { "bg-gray-600" }
                                            )}></div>
                                        }
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                    <div class="sm:hidden text-center mt-4">
                        <span class="text-green-400 font-medium text-sm bg-green-500/20 border \
                                     border-green-500/30 rounded-lg py-2 px-4 inline-block">
                            { format!("Step {} of {}: {}", current.number(), STEP_ORDER.len(), current.label()) }
                        </span>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <div class="bg-[#11161c] rounded-xl p-6 lg:p-8 border border-gray-800">
                            { step_view }

                            <div class="flex flex-col-reverse sm:flex-row justify-between gap-3 mt-8 \
                                        pt-6 border-t border-gray-800">
                                <button
                                    onclick={on_previous}
                                    disabled={*current == Step::Personal}
                                    class="border border-gray-600 text-white hover:bg-gray-800 rounded-lg \
                                           px-4 py-2 text-sm disabled:opacity-50 disabled:cursor-not-allowed"
                                >
                                    {"← Previous"}
                                </button>

                                <div class="flex gap-3">
                                    if *current == Step::Medical {
                                        <button
                                            onclick={on_skip_medical}
                                            class="border border-gray-600 text-white hover:bg-gray-800 \
                                                   rounded-lg px-4 py-2 text-sm"
                                        >
                                            {"Skip Medical Info"}
                                        </button>
                                    }
                                    if *current == Step::Consent {
                                        <button
                                            onclick={on_submit}
                                            disabled={*submitting}
                                            class="bg-green-500 hover:bg-green-600 text-white rounded-lg \
                                                   px-6 py-2 text-sm disabled:opacity-50"
                                        >
                                            {"Submit and Continue"}
                                        </button>
                                    } else {
                                        <button
                                            onclick={on_next}
                                            class="bg-green-500 hover:bg-green-600 text-white rounded-lg \
                                                   px-6 py-2 text-sm"
                                        >
                                            {"Next →"}
                                        </button>
                                    }
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="lg:col-span-1 space-y-6">
                        <div class="bg-[#11161c] rounded-xl p-6 border border-gray-700">
                            <h3 class="font-semibold text-lg mb-4 text-green-400">{"Registration Progress"}</h3>
                            <div class="space-y-3">
                                { for STEP_ORDER.iter().map(|step| {
                                    let done = current.number() > step.number();
                                    let active = *current == *step;
                                    html! {
                                        <div class="flex items-center justify-between">
                                            <span class={format!(
                                                "text-sm {}",
                                                if active || done { "text-white" } else { "text-gray-400" }
                                            )}>
                                                {step.label()}
                                                if *step == Step::Medical {
                                                    <span class="text-gray-500 ml-1">{"(Optional)"}</span>
                                                }
                                            </span>
                                            if done {
                                                <span class="text-green-500 text-sm">{"✓"}</span>
                                            } else {
                                                <span class="w-4 h-4 border-2 border-gray-600 rounded-full"></span>
                                            }
                                        </div>
                                    }
                                })}
                            </div>
                        </div>

                        <div class="bg-[#11161c] rounded-xl p-6 border border-gray-700">
                            <h3 class="font-semibold text-lg mb-4 text-green-400">{"Need Help?"}</h3>
                            <div class="space-y-2 text-sm text-gray-400">
                                <p>{"• Fields marked with * are required"}</p>
                                <p>{"• Medical information is optional"}</p>
                                <p>{"• Have your identification documents ready"}</p>
                                <p>{"• Contact support if you need assistance"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
