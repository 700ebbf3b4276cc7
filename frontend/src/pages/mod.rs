pub mod admin;
pub mod admin_dashboard;
pub mod appointment;
pub mod appointment_success;
pub mod dashboard;
pub mod login;
pub mod onboarding;
pub mod patient_form;
pub mod success;
