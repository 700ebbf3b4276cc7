use carepulse_shared::AppointmentReceipt;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::Logo;
use crate::services::appointments;

/// Admin-side confirmation after scheduling an appointment.
#[function_component(ScheduleSuccessPage)]
pub fn schedule_success_page() -> Html {
    let receipt = use_state(|| None::<AppointmentReceipt>);

    {
        let receipt = receipt.clone();
        use_effect_with((), move |_| {
            receipt.set(appointments::take_receipt());
        });
    }

    let detail = |label: &'static str, value: String, tint: &'static str, glyph: &'static str| {
        html! {
            <div class="flex items-center gap-4">
                <div class={format!("p-3 rounded-xl shrink-0 {tint}")}>
                    <span class="text-xl">{glyph}</span>
                </div>
                <div class="text-left">
                    <p class="text-gray-400 text-xs sm:text-sm mb-1">{label}</p>
                    <p class="text-white font-medium text-base sm:text-lg">{value}</p>
                </div>
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-[#0D0F12] text-white flex items-center justify-center p-6">
            <div class="bg-[#11161c] border border-gray-700 rounded-2xl p-8 lg:p-12 w-full max-w-2xl">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 items-start">
                    <div class="space-y-6">
                        <Logo compact=true subtitle="Admin Portal" />

                        <div class="space-y-4">
                            <div class="flex justify-center lg:justify-start">
                                <div class="p-4 bg-blue-500/10 rounded-full">
                                    <span class="text-blue-400 text-5xl">{"✓"}</span>
                                </div>
                            </div>
                            <div>
                                <h1 class="text-2xl sm:text-3xl font-bold leading-tight mb-4">
                                    {"Appointment"}<br/>{"Scheduled Successfully!"}
                                </h1>
                                <p class="text-gray-400 text-base sm:text-lg">
                                    {"The appointment has been scheduled and confirmed in the system."}
                                </p>
                            </div>
                        </div>

                        <div class="bg-blue-500/10 border border-blue-500/20 rounded-xl p-4 sm:p-6">
                            <h4 class="text-blue-400 font-semibold mb-3 text-lg">{"Appointment Status"}</h4>
                            <div class="text-blue-300 text-sm sm:text-base space-y-1">
                                <p><strong>{"Scheduled"}</strong>{" — Patient has been notified"}</p>
                                <p><strong>{"Confirmed"}</strong>{" — Added to doctor's calendar"}</p>
                                <p><strong>{"Reminder set"}</strong>{" — Automated notifications active"}</p>
                            </div>
                        </div>

                        <div class="flex flex-col gap-3">
                            <Link<Route>
                                to={Route::AdminDashboard}
                                classes="bg-blue-600 hover:bg-blue-700 text-white rounded-xl py-3 \
                                         text-center font-medium transition-colors"
                            >
                                {"← Back to Dashboard"}
                            </Link<Route>>
                            <Link<Route>
                                to={Route::Onboarding}
                                classes="border border-gray-600 text-gray-300 hover:bg-gray-800 \
                                         hover:text-white rounded-xl py-3 text-center font-medium \
                                         transition-colors"
                            >
                                {"Back to Home"}
                            </Link<Route>>
                        </div>
                    </div>

                    if let Some(ref receipt) = *receipt {
                        <div class="bg-gray-800/30 rounded-xl p-6 sm:p-8 border border-gray-700">
                            <h3 class="font-semibold mb-6 text-gray-300 text-xl text-center">
                                {"Appointment Details"}
                            </h3>
                            <div class="space-y-6 text-sm sm:text-base">
                                <div class="space-y-4">
                                    <h4 class="text-blue-400 font-semibold text-sm">{"Patient Information"}</h4>
                                    { detail("Patient Name", receipt.patient_name.clone(),
                                        "bg-blue-500/10 text-blue-400", "👤") }
                                    { detail("Email", receipt.patient_email.clone(),
                                        "bg-green-500/10 text-green-400", "✉") }
                                    { detail("Phone", receipt.patient_phone.clone(),
                                        "bg-purple-500/10 text-purple-400", "📞") }
                                </div>

                                <div class="space-y-4 pt-4 border-t border-gray-600">
                                    <h4 class="text-blue-400 font-semibold text-sm">
                                        {"Appointment Information"}
                                    </h4>
                                    { detail("Doctor",
                                        format!("{} • {}", receipt.doctor, receipt.specialty),
                                        "bg-green-500/10 text-green-400", "🩺") }
                                    { detail("Appointment Date", receipt.date.clone(),
                                        "bg-purple-500/10 text-purple-400", "⏰") }
                                    if !receipt.reason.is_empty() {
                                        { detail("Reason", receipt.reason.clone(),
                                            "bg-orange-500/10 text-orange-400", "📅") }
                                    }
                                </div>
                            </div>
                        </div>
                    }
                </div>

                <div class="mt-8 lg:mt-12 pt-6 border-t border-gray-800">
                    <p class="text-gray-500 text-xs text-center">
                        {"@carepulse.com • Admin Portal"}
                    </p>
                </div>
            </div>
        </div>
    }
}
