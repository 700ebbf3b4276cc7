use carepulse_shared::{Appointment, AppointmentCounts, AppointmentStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::appointment_modals::{
    CancelAppointmentModal, RescheduleAppointmentModal, ScheduleAppointmentModal,
};
use crate::components::layout::PortalHeader;
use crate::components::patient_modal::PatientCreateModal;
use crate::components::toast::use_toasts;
use crate::services::{appointments, session};
use crate::utils::{format_date, initials};

fn status_badge(status: AppointmentStatus) -> (&'static str, &'static str) {
    match status {
        AppointmentStatus::Scheduled => ("text-green-400", "✓"),
        AppointmentStatus::Pending => ("text-yellow-400", "⏱"),
        AppointmentStatus::Cancelled => ("text-red-400", "✕"),
    }
}

/// Appointment management: stats, the appointment table, and the scheduling /
/// cancellation / reschedule / add-patient modals.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");
    let appointments_list = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);

    let schedule_open = use_state(|| false);
    let patient_open = use_state(|| false);
    let cancelling = use_state(|| None::<Appointment>);
    let rescheduling = use_state(|| None::<Appointment>);

    // Gate: the dashboard requires the unlocked admin flag.
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if !session::is_admin() {
                navigator.push(&Route::Admin);
            }
        });
    }

    {
        let appointments_list = appointments_list.clone();
        let loading = loading.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            spawn_local(async move {
                appointments_list.set(appointments::list().await);
                loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session::clear_admin();
            navigator.push(&Route::Admin);
        })
    };

    let counts = AppointmentCounts::tally(&appointments_list);

    let stat_card = |label: &'static str, value: usize, number: &'static str, tint: &'static str, glyph: &'static str| {
        html! {
            <div class="bg-[#11161c] rounded-xl p-6 border border-gray-700">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-gray-400 text-sm">{label}</p>
                        <p class={format!("text-3xl font-bold {number}")}>{value}</p>
                    </div>
                    <div class={format!("p-3 rounded-lg {tint}")}>
                        <span class="text-xl">{glyph}</span>
                    </div>
                </div>
            </div>
        }
    };

    let rows = appointments_list.iter().map(|appointment| {
        let (status_color, status_glyph) = status_badge(appointment.status);
        let disabled = appointment.status == AppointmentStatus::Cancelled;
        let on_reschedule = {
            let rescheduling = rescheduling.clone();
            let appointment = appointment.clone();
            Callback::from(move |_: MouseEvent| rescheduling.set(Some(appointment.clone())))
        };
        let on_cancel = {
            let cancelling = cancelling.clone();
            let appointment = appointment.clone();
            Callback::from(move |_: MouseEvent| cancelling.set(Some(appointment.clone())))
        };
        html! {
            <tr class="border-b border-gray-700/50 hover:bg-gray-800/30 transition-colors">
                <td class="py-3 px-4 sm:px-6">
                    <div class="flex items-center gap-3">
                        <div class="w-8 h-8 bg-blue-500/20 rounded-full flex items-center justify-center \
                                    text-blue-400 text-xs font-semibold shrink-0">
                            { initials(&appointment.patient) }
                        </div>
                        <span class="font-medium text-sm">{&appointment.patient}</span>
                    </div>
                </td>
                <td class="py-3 px-4 sm:px-6 text-gray-300 text-sm">
                    { format_date(appointment.date) }
                </td>
                <td class="py-3 px-4 sm:px-6">
                    <div class="flex items-center gap-2">
                        <span class={status_color}>{status_glyph}</span>
                        <span class={format!("text-sm {status_color}")}>
                            {appointment.status.label()}
                        </span>
                    </div>
                </td>
                <td class="py-3 px-4 sm:px-6 text-gray-300 text-sm">{&appointment.doctor}</td>
                <td class="py-3 px-4 sm:px-6">
                    <div class="flex gap-2">
                        <button
                            onclick={on_reschedule}
                            disabled={disabled}
                            class="bg-green-500/20 hover:bg-green-500/30 text-green-400 \
                                   border border-green-500/30 rounded px-3 py-1.5 text-xs \
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {"Reschedule"}
                        </button>
                        <button
                            onclick={on_cancel}
                            disabled={disabled}
                            class="border border-red-500/30 text-red-400 hover:bg-red-500/10 \
                                   rounded px-3 py-1.5 text-xs disabled:opacity-50 \
                                   disabled:cursor-not-allowed"
                        >
                            { if disabled { "Cancelled" } else { "Cancel" } }
                        </button>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <div class="min-h-screen bg-[#0D0F12] text-white">
            <PortalHeader subtitle="Admin Dashboard">
                <div class="text-right">
                    <p class="font-semibold text-sm sm:text-base">{"Welcome, Admin"}</p>
                    <p class="text-gray-400 text-xs sm:text-sm">
                        {"Start day with managing new appointments"}
                    </p>
                </div>
                <button
                    onclick={on_logout}
                    class="border border-gray-600 text-gray-300 hover:bg-gray-800 rounded-lg \
                           px-3 py-2 text-xs sm:text-sm"
                >
                    {"Logout"}
                </button>
            </PortalHeader>

            <main class="container mx-auto px-4 sm:px-6 py-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    { stat_card("Total Appointments", counts.total, "text-white",
                        "bg-blue-500/10 text-blue-400", "📅") }
                    { stat_card("Pending Appointments", counts.pending, "text-yellow-400",
                        "bg-yellow-500/10 text-yellow-400", "⏱") }
                    { stat_card("Cancelled Appointments", counts.cancelled, "text-red-400",
                        "bg-red-500/10 text-red-400", "✕") }
                </div>

                <div class="bg-[#11161c] rounded-xl border border-gray-700 overflow-hidden mb-8">
                    <div class="px-6 py-4 border-b border-gray-700">
                        <h2 class="text-lg sm:text-xl font-semibold">{"Appointment Management"}</h2>
                        <p class="text-gray-400 text-sm mt-1">{"Manage all scheduled appointments"}</p>
                    </div>

                    if *loading {
                        <div class="flex justify-center items-center h-48">
                            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
                        </div>
                    } else if appointments_list.is_empty() {
                        <div class="p-12 text-center">
                            <h3 class="text-lg font-medium text-white">{"No appointments yet"}</h3>
                            <p class="mt-2 text-gray-400">
                                {"Create a new appointment to get started."}
                            </p>
                        </div>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="w-full min-w-[600px]">
                                <thead>
                                    <tr class="border-b border-gray-700">
                                        <th class="text-left py-3 px-4 sm:px-6 text-gray-400 font-semibold text-sm">{"Patient"}</th>
                                        <th class="text-left py-3 px-4 sm:px-6 text-gray-400 font-semibold text-sm">{"Date"}</th>
                                        <th class="text-left py-3 px-4 sm:px-6 text-gray-400 font-semibold text-sm">{"Status"}</th>
                                        <th class="text-left py-3 px-4 sm:px-6 text-gray-400 font-semibold text-sm">{"Doctor"}</th>
                                        <th class="text-left py-3 px-4 sm:px-6 text-gray-400 font-semibold text-sm">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for rows }
                                </tbody>
                            </table>
                        </div>
                        <div class="px-6 py-3 bg-gray-800/20">
                            <p class="text-gray-400 text-sm">
                                { format!("Showing {} of {} appointments",
                                    appointments_list.len(), counts.total) }
                            </p>
                        </div>
                    }
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-[#11161c] rounded-xl p-6 border border-gray-700">
                        <h3 class="font-semibold text-lg sm:text-xl mb-4">{"Appointment Overview"}</h3>
                        <div class="space-y-3">
                            <div class="flex justify-between items-center">
                                <span class="text-gray-400 text-sm">{"Scheduled Appointments"}</span>
                                <span class="font-semibold text-green-400 text-sm">{counts.scheduled}</span>
                            </div>
                            <div class="flex justify-between items-center">
                                <span class="text-gray-400 text-sm">{"Awaiting Confirmation"}</span>
                                <span class="font-semibold text-yellow-400 text-sm">{counts.pending}</span>
                            </div>
                            <div class="flex justify-between items-center">
                                <span class="text-gray-400 text-sm">{"Cancelled"}</span>
                                <span class="font-semibold text-red-400 text-sm">{counts.cancelled}</span>
                            </div>
                        </div>
                    </div>

                    <div class="bg-[#11161c] rounded-xl p-6 border border-gray-700">
                        <h3 class="font-semibold text-lg sm:text-xl mb-4">{"Quick Actions"}</h3>
                        <div class="space-y-3">
                            <button
                                onclick={{
                                    let schedule_open = schedule_open.clone();
                                    Callback::from(move |_: MouseEvent| schedule_open.set(true))
                                }}
                                class="w-full text-left bg-blue-500/20 hover:bg-blue-500/30 text-blue-400 \
                                       border border-blue-500/30 rounded-lg px-4 py-2.5 text-sm"
                            >
                                {"📅 Create New Appointment"}
                            </button>
                            <button
                                onclick={{
                                    let patient_open = patient_open.clone();
                                    Callback::from(move |_: MouseEvent| patient_open.set(true))
                                }}
                                class="w-full text-left bg-green-500/20 hover:bg-green-500/30 text-green-400 \
                                       border border-green-500/30 rounded-lg px-4 py-2.5 text-sm"
                            >
                                {"👤 Add New Patient"}
                            </button>
                        </div>
                    </div>
                </div>
            </main>

            <ScheduleAppointmentModal
                open={*schedule_open}
                on_close={{
                    let schedule_open = schedule_open.clone();
                    Callback::from(move |_| schedule_open.set(false))
                }}
                on_success={refresh.clone()}
            />

            <PatientCreateModal
                open={*patient_open}
                on_close={{
                    let patient_open = patient_open.clone();
                    Callback::from(move |_| patient_open.set(false))
                }}
                on_success={{
                    let toasts = toasts.clone();
                    Callback::from(move |_| {
                        toasts.info(
                            "admin",
                            "Patient roster updated",
                            None,
                        );
                    })
                }}
            />

            <CancelAppointmentModal
                open={cancelling.is_some()}
                appointment={(*cancelling).clone()}
                on_close={{
                    let cancelling = cancelling.clone();
                    Callback::from(move |_| cancelling.set(None))
                }}
                on_success={refresh.clone()}
            />

            <RescheduleAppointmentModal
                open={rescheduling.is_some()}
                appointment={(*rescheduling).clone()}
                on_close={{
                    let rescheduling = rescheduling.clone();
                    Callback::from(move |_| rescheduling.set(None))
                }}
                on_success={refresh}
            />
        </div>
    }
}
