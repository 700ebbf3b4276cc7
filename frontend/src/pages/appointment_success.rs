use carepulse_shared::AppointmentReceipt;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::Logo;
use crate::services::appointments;

/// Confirmation shown after a patient submits an appointment request. The
/// hand-off record is consumed on first render and never shown twice.
#[function_component(AppointmentSuccessPage)]
pub fn appointment_success_page() -> Html {
    let receipt = use_state(|| None::<AppointmentReceipt>);

    {
        let receipt = receipt.clone();
        use_effect_with((), move |_| {
            receipt.set(appointments::take_receipt());
        });
    }

    html! {
        <div class="min-h-screen bg-[#0D0F12] text-white flex items-center justify-center p-6">
            <div class="bg-[#11161c] border border-gray-700 rounded-2xl p-8 lg:p-12 w-full max-w-2xl">
                <div class="flex items-center gap-3 mb-8">
                    <Logo compact=true subtitle="Patient Portal" />
                </div>

                <div class="text-center space-y-4 mb-8">
                    <div class="inline-flex p-4 bg-green-500/10 rounded-full">
                        <span class="text-green-400 text-5xl">{"✓"}</span>
                    </div>
                    <h1 class="text-2xl sm:text-3xl font-bold leading-tight">
                        {"Appointment Request Submitted!"}
                    </h1>
                    <p class="text-gray-400 text-base sm:text-lg">
                        {"We'll be in touch shortly to confirm your appointment."}
                    </p>
                </div>

                if let Some(ref receipt) = *receipt {
                    <div class="bg-gray-800/30 border border-gray-700 rounded-xl p-6 mb-8 space-y-4">
                        <h3 class="font-semibold text-gray-300 text-lg text-center">
                            {"Request Details"}
                        </h3>
                        <div class="space-y-3 text-sm sm:text-base">
                            <div class="flex justify-between gap-4">
                                <span class="text-gray-400">{"Doctor"}</span>
                                <span class="text-white font-medium text-right">
                                    { format!("{} • {}", receipt.doctor, receipt.specialty) }
                                </span>
                            </div>
                            <div class="flex justify-between gap-4">
                                <span class="text-gray-400">{"Expected date"}</span>
                                <span class="text-white font-medium text-right">{&receipt.date}</span>
                            </div>
                            <div class="flex justify-between gap-4">
                                <span class="text-gray-400">{"Reason"}</span>
                                <span class="text-white font-medium text-right">{&receipt.reason}</span>
                            </div>
                            if !receipt.patient_email.is_empty() {
                                <div class="flex justify-between gap-4">
                                    <span class="text-gray-400">{"Email"}</span>
                                    <span class="text-white font-medium text-right">{&receipt.patient_email}</span>
                                </div>
                            }
                            if !receipt.patient_phone.is_empty() {
                                <div class="flex justify-between gap-4">
                                    <span class="text-gray-400">{"Phone"}</span>
                                    <span class="text-white font-medium text-right">{&receipt.patient_phone}</span>
                                </div>
                            }
                        </div>
                    </div>
                }

                <div class="flex flex-col gap-3">
                    <Link<Route>
                        to={Route::Dashboard}
                        classes="bg-green-600 hover:bg-green-700 text-white rounded-xl py-3 text-center \
                                 font-medium transition-colors"
                    >
                        {"Go to Dashboard"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Onboarding}
                        classes="border border-gray-600 text-gray-300 hover:bg-gray-800 hover:text-white \
                                 rounded-xl py-3 text-center font-medium transition-colors"
                    >
                        {"Back to Home"}
                    </Link<Route>>
                </div>

                <div class="mt-8 pt-6 border-t border-gray-800">
                    <p class="text-gray-500 text-xs text-center">
                        {"@carepulse.com • Secure Patient Portal"}
                    </p>
                </div>
            </div>
        </div>
    }
}
