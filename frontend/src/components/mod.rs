pub mod admin_access_modal;
pub mod appointment_modals;
pub mod code_entry;
pub mod doctor_select;
pub mod layout;
pub mod modal;
pub mod otp_modal;
pub mod patient_modal;
pub mod toast;
