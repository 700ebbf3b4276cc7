//! Admin-side appointment modals: schedule, reschedule, cancel.

use carepulse_shared::{Appointment, Doctor};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::doctor_select::DoctorSelect;
use crate::components::modal::ModalShell;
use crate::components::toast::use_toasts;
use crate::forms::{email_ok, phone_ok};
use crate::services::appointments::{self, AppointmentRequest};
use crate::utils::parse_date;

pub const TIME_SLOTS: [&str; 12] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "02:00 PM", "02:30 PM",
    "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(ScheduleAppointmentModal)]
pub fn schedule_appointment_modal(props: &ScheduleModalProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let doctor = use_state(|| None::<Doctor>);
    let reason = use_state(String::new);
    let date = use_state(String::new);
    let submitting = use_state(|| false);

    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let (name, email, phone) = (name.clone(), email.clone(), phone.clone());
        let (doctor, reason, date) = (doctor.clone(), reason.clone(), date.clone());
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let parsed_date = parse_date(&date);
            if name.trim().is_empty()
                || email.trim().is_empty()
                || phone.trim().is_empty()
                || reason.trim().is_empty()
                || doctor.is_none()
                || parsed_date.is_none()
            {
                toasts.error(
                    "schedule",
                    "Please fill in all required fields",
                    None,
                );
                return;
            }
            if !email_ok(email.trim()) {
                toasts.error("schedule", "Please enter a valid email address", None);
                return;
            }
            if !phone_ok(phone.trim()) {
                toasts.error("schedule", "Please enter a valid phone number", None);
                return;
            }

            let request = AppointmentRequest {
                patient: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                doctor: doctor.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
                specialty: doctor
                    .as_ref()
                    .map(|d| d.specialty.clone())
                    .unwrap_or_default(),
                date: parsed_date,
                time: String::new(),
                reason: reason.trim().to_string(),
                notes: String::new(),
            };

            submitting.set(true);
            toasts.loading("schedule", "Scheduling appointment...", None);

            let (name, email, phone) = (name.clone(), email.clone(), phone.clone());
            let (doctor, reason, date) = (doctor.clone(), reason.clone(), date.clone());
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                appointments::schedule(request).await;
                toasts.success(
                    "schedule",
                    "Appointment Scheduled!",
                    Some("Appointment has been successfully scheduled.".into()),
                );
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                doctor.set(None);
                reason.set(String::new());
                date.set(String::new());
                submitting.set(false);
                on_success.emit(());
                on_close.emit(());
                navigator.push(&Route::ScheduleSuccess);
            });
        })
    };

    html! {
        <ModalShell
            title="Schedule Appointment"
            subtitle={Some(AttrValue::from("Please fill in the following details to schedule an appointment"))}
            on_close={props.on_close.clone()}
            wide=true
        >
            <form onsubmit={onsubmit} class="space-y-6">
                <div class="space-y-4">
                    <h3 class="text-base font-semibold text-white">{"Patient Information"}</h3>
                    <div class="grid grid-cols-1 gap-4">
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-300">{"Full Name"}</label>
                            <input
                                placeholder="Enter patient's full name"
                                value={(*name).clone()}
                                oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| name.set(input_value(&e)))
                                }}
                                class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg \
                                       px-3 py-2 text-sm placeholder-gray-500 focus:ring-2 focus:ring-blue-500 \
                                       focus:border-blue-500"
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-300">{"Email"}</label>
                            <input
                                type="email"
                                placeholder="Enter patient's email"
                                value={(*email).clone()}
                                oninput={{
                                    let email = email.clone();
                                    Callback::from(move |e: InputEvent| email.set(input_value(&e)))
                                }}
                                class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg \
                                       px-3 py-2 text-sm placeholder-gray-500 focus:ring-2 focus:ring-blue-500 \
                                       focus:border-blue-500"
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-300">{"Phone Number"}</label>
                            <input
                                type="tel"
                                placeholder="Enter patient's phone number"
                                value={(*phone).clone()}
                                oninput={{
                                    let phone = phone.clone();
                                    Callback::from(move |e: InputEvent| phone.set(input_value(&e)))
                                }}
                                class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg \
                                       px-3 py-2 text-sm placeholder-gray-500 focus:ring-2 focus:ring-blue-500 \
                                       focus:border-blue-500"
                            />
                        </div>
                    </div>
                </div>

                <div class="space-y-3">
                    <h3 class="text-base font-semibold text-white">{"Doctor"}</h3>
                    <DoctorSelect
                        selected={(*doctor).clone()}
                        on_select={{
                            let doctor = doctor.clone();
                            Callback::from(move |picked: Doctor| doctor.set(Some(picked)))
                        }}
                        blue=true
                    />
                </div>

                <div class="space-y-3">
                    <h3 class="text-base font-semibold text-white">{"Reason for appointment"}</h3>
                    <input
                        placeholder="ex: Annual monthly check-up"
                        value={(*reason).clone()}
                        oninput={{
                            let reason = reason.clone();
                            Callback::from(move |e: InputEvent| reason.set(input_value(&e)))
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm placeholder-gray-500 focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <div class="space-y-3">
                    <h3 class="text-base font-semibold text-white">{"Expected appointment date"}</h3>
                    <input
                        type="date"
                        value={(*date).clone()}
                        oninput={{
                            let date = date.clone();
                            Callback::from(move |e: InputEvent| date.set(input_value(&e)))
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full py-3 text-lg font-semibold bg-gradient-to-r from-blue-500 to-blue-600 \
                           hover:from-blue-600 hover:to-blue-700 text-white rounded-xl shadow-lg \
                           transition-all duration-200 disabled:opacity-50"
                >
                    { if *submitting { "Scheduling..." } else { "Schedule appointment" } }
                </button>
            </form>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct RescheduleModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
    pub appointment: Option<Appointment>,
}

#[function_component(RescheduleAppointmentModal)]
pub fn reschedule_appointment_modal(props: &RescheduleModalProps) -> Html {
    let toasts = use_toasts();
    let date = use_state(String::new);
    let time = use_state(String::new);
    let reason = use_state(String::new);
    let submitting = use_state(|| false);

    // Blank the form whenever the modal opens on a (possibly different)
    // appointment.
    {
        let (date, time, reason) = (date.clone(), time.clone(), reason.clone());
        use_effect_with(
            (props.open, props.appointment.as_ref().map(|a| a.id)),
            move |(open, _)| {
                if *open {
                    date.set(String::new());
                    time.set(String::new());
                    reason.set(String::new());
                }
            },
        );
    }

    let Some(appointment) = props.appointment.clone() else {
        return html! {};
    };
    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let (date, time) = (date.clone(), time.clone());
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();
        let id = appointment.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(parsed_date) = parse_date(&date) else {
                toasts.error("reschedule", "Please pick a new date", None);
                return;
            };
            if time.is_empty() {
                toasts.error("reschedule", "Please pick a time slot", None);
                return;
            }

            submitting.set(true);
            toasts.loading("reschedule", "Rescheduling appointment...", None);

            let time_value = (*time).clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let moved = appointments::reschedule(id, parsed_date, &time_value).await;
                submitting.set(false);
                if moved {
                    toasts.success(
                        "reschedule",
                        "Appointment Rescheduled!",
                        Some("The appointment has been moved to the new slot.".into()),
                    );
                    on_success.emit(());
                } else {
                    toasts.error(
                        "reschedule",
                        "Reschedule Failed",
                        Some("The appointment could not be found.".into()),
                    );
                }
                on_close.emit(());
            });
        })
    };

    html! {
        <ModalShell
            title="Reschedule Appointment"
            on_close={props.on_close.clone()}
            wide=true
        >
            <div class="bg-[#0D0F12] border border-gray-700 rounded-lg p-4 mb-6 space-y-2 text-sm">
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Patient:"}</span>
                    <span class="text-white font-medium">{&appointment.patient}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Doctor:"}</span>
                    <span class="text-white font-medium">{&appointment.doctor}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Current date:"}</span>
                    <span class="text-white font-medium">{crate::utils::format_date(appointment.date)}</span>
                </div>
            </div>

            <form onsubmit={onsubmit} class="space-y-6">
                <div class="space-y-2">
                    <label class="text-sm font-medium text-gray-300">{"New date"}</label>
                    <input
                        type="date"
                        value={(*date).clone()}
                        oninput={{
                            let date = date.clone();
                            Callback::from(move |e: InputEvent| date.set(input_value(&e)))
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm focus:ring-2 focus:ring-green-500 focus:border-green-500"
                    />
                </div>

                <div class="space-y-2">
                    <label class="text-sm font-medium text-gray-300">{"New time slot"}</label>
                    <select
                        onchange={{
                            let time = time.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                time.set(select.value());
                            })
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm focus:ring-2 focus:ring-green-500 focus:border-green-500"
                    >
                        <option value="" selected={time.is_empty()}>{"Select a time"}</option>
                        { for TIME_SLOTS.iter().map(|slot| html! {
                            <option value={*slot} selected={*time == *slot}>{slot}</option>
                        })}
                    </select>
                </div>

                <div class="space-y-2">
                    <label class="text-sm font-medium text-gray-300">{"Reason (optional)"}</label>
                    <input
                        placeholder="ex: Doctor unavailable on the original date"
                        value={(*reason).clone()}
                        oninput={{
                            let reason = reason.clone();
                            Callback::from(move |e: InputEvent| reason.set(input_value(&e)))
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm placeholder-gray-500 focus:ring-2 focus:ring-green-500 \
                               focus:border-green-500"
                    />
                </div>

                <div class="flex flex-col sm:flex-row gap-3">
                    <button
                        type="button"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_: MouseEvent| on_close.emit(()))
                        }}
                        class="flex-1 border border-gray-600 text-gray-300 hover:bg-gray-800 hover:text-white \
                               rounded-lg py-2.5 text-sm transition-colors"
                        disabled={*submitting}
                    >
                        {"Keep Current Slot"}
                    </button>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="flex-1 bg-green-500/20 hover:bg-green-500/30 text-green-400 \
                               border border-green-500/30 rounded-lg py-2.5 text-sm transition-colors \
                               disabled:opacity-50"
                    >
                        { if *submitting { "Rescheduling..." } else { "Reschedule Appointment" } }
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct CancelModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
    pub appointment: Option<Appointment>,
}

#[function_component(CancelAppointmentModal)]
pub fn cancel_appointment_modal(props: &CancelModalProps) -> Html {
    let toasts = use_toasts();
    let reason = use_state(String::new);
    let cancelling = use_state(|| false);

    {
        let reason = reason.clone();
        use_effect_with(
            (props.open, props.appointment.as_ref().map(|a| a.id)),
            move |(open, _)| {
                if *open {
                    reason.set(String::new());
                }
            },
        );
    }

    let Some(appointment) = props.appointment.clone() else {
        return html! {};
    };
    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let reason = reason.clone();
        let cancelling = cancelling.clone();
        let toasts = toasts.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();
        let id = appointment.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *cancelling {
                return;
            }
            if reason.trim().is_empty() {
                toasts.error("cancel", "Please provide a reason for cancellation", None);
                return;
            }

            cancelling.set(true);
            toasts.loading("cancel", "Cancelling appointment...", None);

            let reason_value = reason.trim().to_string();
            let reason = reason.clone();
            let cancelling = cancelling.clone();
            let toasts = toasts.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let cancelled = appointments::cancel(id, &reason_value).await;
                cancelling.set(false);
                reason.set(String::new());
                if cancelled {
                    toasts.success(
                        "cancel",
                        "Appointment Cancelled!",
                        Some("The appointment has been successfully cancelled.".into()),
                    );
                    on_success.emit(());
                } else {
                    toasts.error(
                        "cancel",
                        "Cancellation Failed",
                        Some("Unable to cancel appointment. Please try again.".into()),
                    );
                }
                on_close.emit(());
            });
        })
    };

    html! {
        <ModalShell title="Cancel Appointment" on_close={props.on_close.clone()}>
            <div class="text-center mb-6">
                <div class="inline-flex p-3 bg-red-500/10 rounded-full text-red-400 text-2xl mb-3">
                    {"⚠"}
                </div>
                <p class="text-gray-400 text-sm">
                    {"Are you sure you want to cancel this appointment?"}
                </p>
            </div>

            <div class="bg-red-500/5 border border-red-500/20 rounded-lg p-4 mb-6 space-y-2 text-sm">
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Patient:"}</span>
                    <span class="text-white font-medium">{&appointment.patient}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Doctor:"}</span>
                    <span class="text-white font-medium">{&appointment.doctor}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">{"Date:"}</span>
                    <span class="text-white font-medium">{crate::utils::format_date(appointment.date)}</span>
                </div>
            </div>

            <form onsubmit={onsubmit} class="space-y-6">
                <div class="space-y-2">
                    <label class="text-sm font-medium text-gray-300">{"Reason for cancellation"}</label>
                    <input
                        placeholder="ex: Urgent meeting came up"
                        value={(*reason).clone()}
                        oninput={{
                            let reason = reason.clone();
                            Callback::from(move |e: InputEvent| reason.set(input_value(&e)))
                        }}
                        class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-lg px-3 py-2 \
                               text-sm placeholder-gray-500 focus:ring-2 focus:ring-red-500 \
                               focus:border-red-500"
                    />
                </div>

                <div class="flex flex-col sm:flex-row gap-3">
                    <button
                        type="button"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_: MouseEvent| on_close.emit(()))
                        }}
                        class="flex-1 border border-gray-600 text-gray-300 hover:bg-gray-800 hover:text-white \
                               rounded-lg py-2.5 text-sm transition-colors"
                        disabled={*cancelling}
                    >
                        {"Keep Appointment"}
                    </button>
                    <button
                        type="submit"
                        disabled={*cancelling || reason.trim().is_empty()}
                        class="flex-1 bg-gradient-to-r from-red-500 to-red-600 hover:from-red-600 \
                               hover:to-red-700 text-white rounded-lg py-2.5 text-sm transition-all \
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { if *cancelling { "Cancelling..." } else { "Cancel Appointment" } }
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}
