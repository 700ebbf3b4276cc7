use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::ModalShell;
use crate::components::toast::use_toasts;
use crate::forms::{email_ok, phone_ok};
use crate::services::patients::{self, NewPatient};

#[derive(Properties, PartialEq)]
pub struct PatientCreateModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

/// Admin "Add New Patient" form.
#[function_component(PatientCreateModal)]
pub fn patient_create_modal(props: &PatientCreateModalProps) -> Html {
    let toasts = use_toasts();
    let form = use_state(NewPatient::default);
    let submitting = use_state(|| false);

    if !props.open {
        return html! {};
    }

    let field = |apply: fn(&mut NewPatient, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let current = (*form).clone();
            if current.first_name.trim().is_empty()
                || current.last_name.trim().is_empty()
                || current.email.trim().is_empty()
                || current.phone.trim().is_empty()
            {
                toasts.error("patient-create", "Please fill in all required fields", None);
                return;
            }
            if !email_ok(current.email.trim()) {
                toasts.error("patient-create", "Please enter a valid email address", None);
                return;
            }
            if !phone_ok(current.phone.trim()) {
                toasts.error("patient-create", "Please enter a valid phone number", None);
                return;
            }

            submitting.set(true);
            toasts.loading("patient-create", "Creating patient...", None);

            let form = form.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let patient = patients::create(current).await;
                toasts.success(
                    "patient-create",
                    "Patient Created!",
                    Some(
                        format!("{} {} has been added.", patient.first_name, patient.last_name)
                            .into(),
                    ),
                );
                form.set(NewPatient::default());
                submitting.set(false);
                on_success.emit(());
                on_close.emit(());
            });
        })
    };

    let text_input = |label: &'static str,
                      placeholder: &'static str,
                      kind: &'static str,
                      value: String,
                      oninput: Callback<InputEvent>| {
        html! {
            <div class="space-y-2">
                <label class="text-sm font-medium text-gray-300">{label}</label>
                <input
                    type={kind}
                    {placeholder}
                    {value}
                    {oninput}
                    class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                           text-sm placeholder-gray-500 focus:ring-2 focus:ring-green-500 \
                           focus:border-green-500"
                />
            </div>
        }
    };

    html! {
        <ModalShell title="Add New Patient" on_close={props.on_close.clone()}>
            <form onsubmit={onsubmit} class="space-y-4">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    { text_input(
                        "First name *", "ex: Phoenix", "text",
                        form.first_name.clone(),
                        field(|form, value| form.first_name = value),
                    )}
                    { text_input(
                        "Last name *", "ex: Baker", "text",
                        form.last_name.clone(),
                        field(|form, value| form.last_name = value),
                    )}
                </div>
                { text_input(
                    "Email address *", "ex: patient@example.com", "email",
                    form.email.clone(),
                    field(|form, value| form.email = value),
                )}
                { text_input(
                    "Phone number *", "ex: +1 555 123 4567", "tel",
                    form.phone.clone(),
                    field(|form, value| form.phone = value),
                )}
                { text_input(
                    "Date of birth", "", "date",
                    form.date_of_birth.clone(),
                    field(|form, value| form.date_of_birth = value),
                )}
                { text_input(
                    "Address", "ex: 14 street, New York, NY - 5101", "text",
                    form.address.clone(),
                    field(|form, value| form.address = value),
                )}
                { text_input(
                    "Emergency contact", "Guardian's name and phone", "text",
                    form.emergency_contact.clone(),
                    field(|form, value| form.emergency_contact = value),
                )}

                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full py-3 font-semibold bg-green-500 hover:bg-green-600 text-white \
                           rounded-xl transition-colors disabled:opacity-50"
                >
                    { if *submitting { "Creating..." } else { "Create Patient" } }
                </button>
            </form>
        </ModalShell>
    }
}
