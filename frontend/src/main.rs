use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod forms;
mod pages;
mod services;
mod utils;

use components::toast::ToastProvider;
use pages::{
    admin::AdminPage, admin_dashboard::AdminDashboardPage, appointment::AppointmentPage,
    appointment_success::AppointmentSuccessPage, dashboard::DashboardPage, login::LoginPage,
    onboarding::OnboardingPage, patient_form::PatientFormPage, success::ScheduleSuccessPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Onboarding,
    #[at("/login")]
    Login,
    #[at("/patient-form")]
    PatientForm,
    #[at("/dashboard")]
    Dashboard,
    #[at("/appointment")]
    Appointment,
    #[at("/appointment/success")]
    AppointmentSuccess,
    #[at("/admin")]
    Admin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/success")]
    ScheduleSuccess,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Onboarding => html! { <OnboardingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::PatientForm => html! { <PatientFormPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Appointment => html! { <AppointmentPage /> },
        Route::AppointmentSuccess => html! { <AppointmentSuccessPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::ScheduleSuccess => html! { <ScheduleSuccessPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-[#0D0F12]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

fn main() {
    let document = web_sys::window()
        .expect("window not available")
        .document()
        .expect("document not available");
    let head = document.head().expect("document head not available");

    // Tailwind (play CDN)
    let tailwind = document.create_element("script").expect("create script");
    tailwind
        .set_attribute("src", "https://cdn.tailwindcss.com")
        .expect("set script src");
    head.append_child(&tailwind).expect("append script");

    // Inter font, as used across the app
    let fonts = document.create_element("link").expect("create link");
    fonts
        .set_attribute(
            "href",
            "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
        )
        .expect("set font href");
    fonts.set_attribute("rel", "stylesheet").expect("set rel");
    head.append_child(&fonts).expect("append fonts");

    // App-specific overrides
    let app_css = document.create_element("link").expect("create link");
    app_css
        .set_attribute("href", "/static/carepulse.css")
        .expect("set css href");
    app_css.set_attribute("rel", "stylesheet").expect("set rel");
    head.append_child(&app_css).expect("append css");

    yew::Renderer::<App>::new().render();
}
