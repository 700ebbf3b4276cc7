use carepulse_shared::UserSession;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::PortalHeader;
use crate::components::toast::use_toasts;
use crate::services::session;

/// Patient dashboard. Redirects to login without a session, and to the intake
/// form while the profile is incomplete.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navigator not found");
    let user = use_state(|| None::<UserSession>);
    let loading = use_state(|| true);

    {
        let user = user.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            match session::load() {
                None => navigator.push(&Route::Login),
                Some(loaded) => {
                    let complete = loaded.has_completed_profile;
                    user.set(Some(loaded));
                    loading.set(false);
                    if !complete {
                        toasts.info(
                            "dashboard",
                            "Please complete your profile",
                            Some("Redirecting to patient form...".into()),
                        );
                        spawn_local(async move {
                            TimeoutFuture::new(2_000).await;
                            navigator.push(&Route::PatientForm);
                        });
                    }
                }
            }
        });
    }

    let on_logout = {
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session::clear();
            toasts.success("dashboard", "Logged out successfully", None);
            navigator.push(&Route::Onboarding);
        })
    };

    let on_book = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Appointment))
    };

    let coming_soon = |what: &'static str| {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            toasts.info("dashboard", format!("{what} feature coming soon!"), None);
        })
    };

    if *loading {
        return html! {
            <div class="min-h-screen bg-[#0D0F12] flex items-center justify-center">
                <div class="flex flex-col items-center gap-4">
                    <div class="w-12 h-12 border-4 border-green-500 border-t-transparent rounded-full animate-spin"></div>
                    <div class="text-white text-lg">{"Loading your dashboard..."}</div>
                </div>
            </div>
        };
    }
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    let stat_card = |label: &'static str, value: &'static str, tint: &'static str, glyph: &'static str| {
        html! {
            <div class="bg-[#11161c] border border-gray-700 rounded-xl p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-gray-400 text-sm">{label}</p>
                        <p class="text-2xl font-bold text-white mt-1">{value}</p>
                    </div>
                    <div class={format!("p-3 rounded-full {tint}")}>
                        <span class="text-xl">{glyph}</span>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-[#0D0F12] text-white">
            <PortalHeader subtitle="Patient Portal">
                <div class="hidden sm:block text-right">
                    <p class="text-sm font-medium">{&user.name}</p>
                    <p class="text-gray-400 text-xs">{&user.email}</p>
                </div>
                <button
                    onclick={on_logout}
                    class="border border-gray-600 text-white hover:bg-gray-800 rounded-lg px-3 py-2 text-sm"
                >
                    {"Logout"}
                </button>
            </PortalHeader>

            <main class="container mx-auto px-4 sm:px-6 py-8">
                <div class="mb-8">
                    <h2 class="text-2xl sm:text-3xl font-bold mb-2">
                        { format!("Welcome back, {}!", user.name) }
                    </h2>
                    <p class="text-gray-400 text-lg">{"Here's your healthcare overview"}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    { stat_card("Upcoming Appointments", "0", "bg-green-500/20 text-green-400", "📅") }
                    { stat_card("Medical Records", "0", "bg-blue-500/20 text-blue-400", "📄") }
                    { stat_card("Prescriptions", "0", "bg-purple-500/20 text-purple-400", "℞") }
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    <div class="bg-[#11161c] border border-gray-700 hover:border-green-500/50 \
                                transition-colors rounded-xl p-6 space-y-4">
                        <div>
                            <h3 class="text-green-400 font-semibold text-lg">{"Book Appointment"}</h3>
                            <p class="text-gray-400 text-sm mt-1">{"Schedule your next doctor's visit"}</p>
                        </div>
                        <button
                            onclick={on_book.clone()}
                            class="w-full bg-green-500 hover:bg-green-600 text-white rounded-lg py-2 text-sm"
                        >
                            {"Book Now"}
                        </button>
                    </div>

                    <div class="bg-[#11161c] border border-gray-700 hover:border-blue-500/50 \
                                transition-colors rounded-xl p-6 space-y-4">
                        <div>
                            <h3 class="text-blue-400 font-semibold text-lg">{"Medical Records"}</h3>
                            <p class="text-gray-400 text-sm mt-1">{"Access your health information"}</p>
                        </div>
                        <button
                            onclick={coming_soon("Medical records")}
                            class="w-full border border-gray-600 text-white hover:bg-gray-800 rounded-lg \
                                   py-2 text-sm"
                        >
                            {"View Records"}
                        </button>
                    </div>

                    <div class="bg-[#11161c] border border-gray-700 hover:border-purple-500/50 \
                                transition-colors rounded-xl p-6 space-y-4">
                        <div>
                            <h3 class="text-purple-400 font-semibold text-lg">{"Profile Settings"}</h3>
                            <p class="text-gray-400 text-sm mt-1">{"Manage your account information"}</p>
                        </div>
                        <button
                            onclick={coming_soon("Profile settings")}
                            class="w-full border border-gray-600 text-white hover:bg-gray-800 rounded-lg \
                                   py-2 text-sm"
                        >
                            {"Edit Profile"}
                        </button>
                    </div>

                    <div class="bg-[#11161c] border border-gray-700 hover:border-orange-500/50 \
                                transition-colors rounded-xl p-6 space-y-4">
                        <div>
                            <h3 class="text-orange-400 font-semibold text-lg">{"Appointment History"}</h3>
                            <p class="text-gray-400 text-sm mt-1">{"View your past appointments"}</p>
                        </div>
                        <button
                            onclick={coming_soon("Appointment history")}
                            class="w-full border border-gray-600 text-white hover:bg-gray-800 rounded-lg \
                                   py-2 text-sm"
                        >
                            {"View History"}
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="bg-[#11161c] border border-gray-700 rounded-xl p-6">
                        <h3 class="text-white font-semibold flex items-center gap-2 mb-1">{"Recent Activity"}</h3>
                        <p class="text-gray-400 text-sm mb-4">{"Your recent healthcare activities"}</p>
                        <div class="space-y-4">
                            <div class="flex items-center justify-between p-3 bg-[#0D0F12] rounded-lg">
                                <div class="flex items-center gap-3">
                                    <div class="w-2 h-2 bg-green-500 rounded-full"></div>
                                    <div>
                                        <span class="font-medium">{"Profile completed"}</span>
                                        <p class="text-gray-400 text-sm">{"Your patient profile has been set up"}</p>
                                    </div>
                                </div>
                                <span class="text-gray-400 text-sm">{"Just now"}</span>
                            </div>
                            <div class="flex items-center justify-between p-3 bg-[#0D0F12] rounded-lg">
                                <div class="flex items-center gap-3">
                                    <div class="w-2 h-2 bg-blue-500 rounded-full"></div>
                                    <div>
                                        <span class="font-medium">{"Account verified"}</span>
                                        <p class="text-gray-400 text-sm">{"Your phone number has been verified"}</p>
                                    </div>
                                </div>
                                <span class="text-gray-400 text-sm">{"Today"}</span>
                            </div>
                            <div class="flex items-center justify-between p-3 bg-[#0D0F12] rounded-lg">
                                <div class="flex items-center gap-3">
                                    <div class="w-2 h-2 bg-purple-500 rounded-full"></div>
                                    <div>
                                        <span class="font-medium">{"Welcome to CarePulse"}</span>
                                        <p class="text-gray-400 text-sm">{"Your account has been created"}</p>
                                    </div>
                                </div>
                                <span class="text-gray-400 text-sm">{"Today"}</span>
                            </div>
                        </div>
                    </div>

                    <div class="bg-[#11161c] border border-gray-700 rounded-xl p-6">
                        <h3 class="text-white font-semibold mb-1">{"Upcoming Appointments"}</h3>
                        <p class="text-gray-400 text-sm mb-4">{"Your scheduled visits"}</p>
                        <div class="text-center py-8">
                            <p class="text-gray-400 mb-4">{"No upcoming appointments"}</p>
                            <button
                                onclick={on_book}
                                class="bg-green-500 hover:bg-green-600 text-white rounded-lg px-4 py-2 text-sm"
                            >
                                {"Book Your First Appointment"}
                            </button>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
