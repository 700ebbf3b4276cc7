use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::admin_access_modal::AdminAccessModal;
use crate::components::layout::{Logo, SplitLayout};
use crate::services::session;

/// Admin gate: feature overview plus the passkey modal.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let navigator = use_navigator().expect("navigator not found");
    let modal_open = use_state(|| false);

    let on_open = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };
    let on_success = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::set_admin();
            navigator.push(&Route::AdminDashboard);
        })
    };

    let feature = |glyph: &'static str, title: &'static str, blurb: &'static str| {
        html! {
            <div class="flex items-center gap-4 p-4 bg-blue-500/5 rounded-xl border border-blue-500/20">
                <span class="text-blue-400 text-xl">{glyph}</span>
                <div>
                    <h3 class="font-semibold text-white">{title}</h3>
                    <p class="text-gray-400 text-sm">{blurb}</p>
                </div>
            </div>
        }
    };

    html! {
        <>
            <SplitLayout
                side="from-blue-900/20 to-purple-900/20"
                footer="@carepulse.com • Secure Admin Portal"
            >
                <div class="mb-12">
                    <Logo subtitle="Admin Portal" />
                </div>

                <div class="mb-8 md:mb-12">
                    <div class="flex items-center gap-3 mb-4">
                        <span class="p-3 bg-blue-500/10 rounded-xl text-blue-400 text-2xl">{"🛡"}</span>
                        <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold leading-tight">
                            {"Admin"}
                            <span class="block text-blue-400">{"Access"}</span>
                        </h1>
                    </div>
                    <p class="text-gray-300 text-lg sm:text-xl font-light">
                        {"Secure administrative portal"}
                    </p>
                </div>

                <div class="space-y-6 mb-8">
                    { feature("👥", "User Management", "Manage patients and staff accounts") }
                    { feature("⚙", "System Settings", "Configure application settings") }
                    { feature("🔒", "Security Controls", "Access logs and security settings") }
                </div>

                <button
                    onclick={on_open}
                    class="w-full py-4 text-lg font-semibold bg-gradient-to-r from-blue-500 to-blue-600 \
                           hover:from-blue-600 hover:to-blue-700 text-white rounded-xl shadow-lg \
                           hover:shadow-blue-500/25 transition-all duration-200"
                >
                    {"Enter Admin Portal →"}
                </button>

                <div class="mt-6 p-4 bg-yellow-500/10 border border-yellow-500/20 rounded-xl">
                    <p class="text-yellow-400 text-sm text-center">
                        {"🔒 Restricted access. Authorized personnel only."}
                    </p>
                </div>
            </SplitLayout>

            <AdminAccessModal open={*modal_open} {on_close} {on_success} />
        </>
    }
}
