// Simulated service layer. There is no server behind these calls: state lives
// in localStorage and every operation goes through the same artificial latency
// so pages exercise real suspension points.
use gloo_timers::future::TimeoutFuture;

async fn latency(ms: u32) {
    TimeoutFuture::new(ms).await;
}

// ============================================
// KEY-VALUE STORE
// ============================================

/// The only module that touches `localStorage`. Everything else goes through
/// these typed helpers, so swapping the persistence collaborator means
/// changing one place.
pub mod store {
    use gloo_storage::{LocalStorage, Storage};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    pub const SESSION_KEY: &str = "carepulse_session";
    pub const ADMIN_KEY: &str = "carepulse_admin";
    pub const APPOINTMENTS_KEY: &str = "carepulse_appointments";
    pub const PATIENTS_KEY: &str = "carepulse_patients";
    pub const RECEIPT_KEY: &str = "carepulse_last_appointment";

    /// A missing or corrupt record reads as absent; there are no transactional
    /// guarantees to preserve.
    pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
        LocalStorage::get(key).ok()
    }

    pub fn set<T: Serialize>(key: &str, value: &T) {
        if let Err(err) = LocalStorage::set(key, value) {
            web_sys::console::error_1(&format!("storage write failed for {key}: {err}").into());
        }
    }

    pub fn remove(key: &str) {
        LocalStorage::delete(key);
    }
}

// ============================================
// SESSION
// ============================================

pub mod session {
    use carepulse_shared::UserSession;

    use super::store;

    pub fn load() -> Option<UserSession> {
        store::get(store::SESSION_KEY)
    }

    pub fn save(session: &UserSession) {
        store::set(store::SESSION_KEY, session);
    }

    pub fn clear() {
        store::remove(store::SESSION_KEY);
        store::remove(store::RECEIPT_KEY);
    }

    pub fn mark_profile_complete() {
        if let Some(mut session) = load() {
            session.has_completed_profile = true;
            save(&session);
        }
    }

    pub fn is_admin() -> bool {
        store::get::<bool>(store::ADMIN_KEY).unwrap_or(false)
    }

    pub fn set_admin() {
        store::set(store::ADMIN_KEY, &true);
    }

    pub fn clear_admin() {
        store::remove(store::ADMIN_KEY);
    }
}

// ============================================
// AUTH
// ============================================

pub mod auth {
    use carepulse_shared::UserSession;
    use uuid::Uuid;

    use super::{latency, session};

    /// Stand-in for the server-side gate. A real deployment would verify the
    /// passkey behind a trusted boundary; the comparison is kept out of the
    /// components so only this function changes when that boundary exists.
    const ADMIN_PASSKEY: &str = "348000";

    pub(crate) fn passkey_matches(code: &str) -> bool {
        code == ADMIN_PASSKEY
    }

    pub async fn verify_admin_passkey(code: &str) -> bool {
        latency(800).await;
        passkey_matches(code)
    }

    /// Simulated OTP delivery to the claimed phone number.
    pub async fn send_otp() {
        latency(1_000).await;
    }

    /// Simulated OTP check; the stand-in backend accepts any complete code.
    pub async fn verify_otp(_code: &str) -> bool {
        latency(1_500).await;
        true
    }

    pub async fn login(email: &str, _password: &str) -> UserSession {
        latency(900).await;
        let session = UserSession {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            email: email.to_string(),
            phone: "+1234567890".to_string(),
            is_verified: true,
            has_completed_profile: false,
        };
        session::save(&session);
        session
    }
}

// ============================================
// DOCTORS
// ============================================

pub mod doctors {
    use carepulse_shared::Doctor;

    pub fn roster() -> Vec<Doctor> {
        [
            ("Dr. Sarah Safari", "Cardiologist"),
            ("Dr. Ava Williams", "Pediatrician"),
            ("Dr. Adam Smith", "General Practitioner"),
            ("Dr. Michael May", "Neurologist"),
            ("Dr. Jasmine Lee", "Dermatologist"),
            ("Dr. Harold Sharma", "Orthopedic"),
            ("Dr. Alyana Cruz", "Pediatrician"),
        ]
        .into_iter()
        .map(|(name, specialty)| Doctor {
            name: name.to_string(),
            specialty: specialty.to_string(),
            image: format!(
                "/static/doctors/{}.jpg",
                name.trim_start_matches("Dr. ").to_lowercase().replace(' ', "-")
            ),
        })
        .collect()
    }
}

// ============================================
// PATIENTS
// ============================================

pub mod patients {
    use carepulse_shared::Patient;
    use uuid::Uuid;

    use super::{latency, store};
    use crate::utils::now_utc;

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct NewPatient {
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub phone: String,
        pub date_of_birth: String,
        pub address: String,
        pub emergency_contact: String,
    }

    pub async fn list() -> Vec<Patient> {
        latency(400).await;
        store::get(store::PATIENTS_KEY).unwrap_or_default()
    }

    pub async fn create(new: NewPatient) -> Patient {
        latency(900).await;
        let opt = |value: String| (!value.trim().is_empty()).then_some(value);
        let patient = Patient {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            date_of_birth: opt(new.date_of_birth),
            address: opt(new.address),
            emergency_contact: opt(new.emergency_contact),
            created_at: now_utc(),
        };
        let mut patients: Vec<Patient> = store::get(store::PATIENTS_KEY).unwrap_or_default();
        patients.push(patient.clone());
        store::set(store::PATIENTS_KEY, &patients);
        patient
    }
}

// ============================================
// APPOINTMENTS
// ============================================

pub mod appointments {
    use carepulse_shared::{Appointment, AppointmentReceipt, AppointmentStatus};
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::{latency, store};
    use crate::utils::{format_date_long, now_utc};

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct AppointmentRequest {
        pub patient: String,
        pub email: String,
        pub phone: String,
        pub doctor: String,
        pub specialty: String,
        pub date: Option<NaiveDate>,
        pub time: String,
        pub reason: String,
        pub notes: String,
    }

    fn load() -> Vec<Appointment> {
        match store::get::<Vec<Appointment>>(store::APPOINTMENTS_KEY) {
            Some(appointments) => appointments,
            None => {
                let seeded = seed();
                store::set(store::APPOINTMENTS_KEY, &seeded);
                seeded
            }
        }
    }

    fn save(appointments: &[Appointment]) {
        store::set(store::APPOINTMENTS_KEY, &appointments.to_vec());
    }

    /// Demo roster shown the first time the admin dashboard opens.
    fn seed() -> Vec<Appointment> {
        let rows = [
            ("Phoenix Baker", "Dr. Alex Ramirez", "Cardiologist", (2022, 6, 4), AppointmentStatus::Scheduled),
            ("Camélia Wu", "Dr. Michael May", "Neurologist", (2022, 6, 2), AppointmentStatus::Pending),
            ("Lana Steiner", "Dr. Jasmine Lee", "Dermatologist", (2022, 6, 4), AppointmentStatus::Cancelled),
            ("Drew Cano", "Dr. Harold Sharma", "Orthopedic", (2022, 6, 8), AppointmentStatus::Scheduled),
            ("Natali Craig", "Dr. Alyana Cruz", "Pediatrician", (2022, 6, 6), AppointmentStatus::Pending),
        ];
        rows.into_iter()
            .filter_map(|(patient, doctor, specialty, (y, m, d), status)| {
                Some(Appointment {
                    id: Uuid::new_v4(),
                    patient: patient.to_string(),
                    patient_email: None,
                    patient_phone: None,
                    doctor: doctor.to_string(),
                    specialty: specialty.to_string(),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                    time: None,
                    reason: "Annual check-up".to_string(),
                    notes: None,
                    status,
                    cancellation_reason: None,
                    created_at: now_utc(),
                })
            })
            .collect()
    }

    pub(crate) fn apply_cancel(
        appointments: &mut [Appointment],
        id: Uuid,
        reason: &str,
    ) -> bool {
        match appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) => {
                appointment.status = AppointmentStatus::Cancelled;
                appointment.cancellation_reason = Some(reason.to_string());
                true
            }
            None => false,
        }
    }

    pub(crate) fn apply_reschedule(
        appointments: &mut [Appointment],
        id: Uuid,
        date: NaiveDate,
        time: &str,
    ) -> bool {
        match appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) => {
                appointment.date = date;
                appointment.time = Some(time.to_string());
                appointment.status = AppointmentStatus::Scheduled;
                true
            }
            None => false,
        }
    }

    pub(crate) fn build(request: AppointmentRequest, status: AppointmentStatus) -> Appointment {
        let date = request.date.unwrap_or_else(|| now_utc().date_naive());
        let opt = |value: String| (!value.trim().is_empty()).then_some(value);
        Appointment {
            id: Uuid::new_v4(),
            patient: request.patient,
            patient_email: opt(request.email),
            patient_phone: opt(request.phone),
            doctor: request.doctor,
            specialty: request.specialty,
            date,
            time: opt(request.time),
            reason: request.reason,
            notes: opt(request.notes),
            status,
            cancellation_reason: None,
            created_at: now_utc(),
        }
    }

    fn write_receipt(appointment: &Appointment) {
        let receipt = AppointmentReceipt {
            doctor: appointment.doctor.clone(),
            specialty: appointment.specialty.clone(),
            date: format_date_long(appointment.date),
            time: appointment.time.clone().unwrap_or_else(|| "To be confirmed".to_string()),
            patient_name: appointment.patient.clone(),
            patient_email: appointment.patient_email.clone().unwrap_or_default(),
            patient_phone: appointment.patient_phone.clone().unwrap_or_default(),
            reason: appointment.reason.clone(),
        };
        store::set(store::RECEIPT_KEY, &receipt);
    }

    pub async fn list() -> Vec<Appointment> {
        latency(400).await;
        load()
    }

    /// Patient-side booking: lands in the queue as pending.
    pub async fn request(request: AppointmentRequest) -> Appointment {
        latency(1_200).await;
        let appointment = build(request, AppointmentStatus::Pending);
        let mut appointments = load();
        appointments.insert(0, appointment.clone());
        save(&appointments);
        write_receipt(&appointment);
        appointment
    }

    /// Admin-side booking: confirmed immediately.
    pub async fn schedule(request: AppointmentRequest) -> Appointment {
        latency(1_500).await;
        let appointment = build(request, AppointmentStatus::Scheduled);
        let mut appointments = load();
        appointments.insert(0, appointment.clone());
        save(&appointments);
        write_receipt(&appointment);
        appointment
    }

    pub async fn cancel(id: Uuid, reason: &str) -> bool {
        latency(1_500).await;
        let mut appointments = load();
        let cancelled = apply_cancel(&mut appointments, id, reason);
        if cancelled {
            save(&appointments);
        }
        cancelled
    }

    pub async fn reschedule(id: Uuid, date: NaiveDate, time: &str) -> bool {
        latency(1_200).await;
        let mut appointments = load();
        let moved = apply_reschedule(&mut appointments, id, date, time);
        if moved {
            save(&appointments);
        }
        moved
    }

    /// The success pages read the hand-off record exactly once.
    pub fn take_receipt() -> Option<AppointmentReceipt> {
        let receipt = store::get(store::RECEIPT_KEY);
        if receipt.is_some() {
            store::remove(store::RECEIPT_KEY);
        }
        receipt
    }
}

#[cfg(test)]
mod tests {
    use carepulse_shared::{AppointmentCounts, AppointmentStatus};
    use chrono::NaiveDate;

    use super::appointments::{AppointmentRequest, apply_cancel, apply_reschedule, build};
    use super::auth::passkey_matches;

    #[test]
    fn passkey_accepts_the_configured_code_only() {
        assert!(passkey_matches("348000"));
        assert!(!passkey_matches("123456"));
        assert!(!passkey_matches(""));
        assert!(!passkey_matches("3480000"));
    }

    fn request(patient: &str) -> AppointmentRequest {
        AppointmentRequest {
            patient: patient.to_string(),
            email: "pat@example.com".to_string(),
            phone: String::new(),
            doctor: "Dr. Sarah Safari".to_string(),
            specialty: "Cardiologist".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 6, 4),
            time: "09:30 AM".to_string(),
            reason: "Check-up".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn built_appointment_keeps_contact_fields_optional() {
        let appointment = build(request("Phoenix Baker"), AppointmentStatus::Pending);
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.patient_email.as_deref(), Some("pat@example.com"));
        assert_eq!(appointment.patient_phone, None);
        assert_eq!(appointment.notes, None);
        assert_eq!(appointment.time.as_deref(), Some("09:30 AM"));
    }

    #[test]
    fn cancel_marks_status_and_records_reason() {
        let mut appointments = vec![
            build(request("Phoenix Baker"), AppointmentStatus::Scheduled),
            build(request("Drew Cano"), AppointmentStatus::Pending),
        ];
        let id = appointments[1].id;
        assert!(apply_cancel(&mut appointments, id, "Urgent meeting came up"));
        assert_eq!(appointments[1].status, AppointmentStatus::Cancelled);
        assert_eq!(
            appointments[1].cancellation_reason.as_deref(),
            Some("Urgent meeting came up")
        );
        // The other appointment is untouched.
        assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);

        let counts = AppointmentCounts::tally(&appointments);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.scheduled, 1);
    }

    #[test]
    fn cancel_of_unknown_id_reports_failure() {
        let mut appointments = vec![build(request("Phoenix Baker"), AppointmentStatus::Pending)];
        assert!(!apply_cancel(&mut appointments, uuid::Uuid::new_v4(), "x"));
        assert_eq!(appointments[0].status, AppointmentStatus::Pending);
    }

    #[test]
    fn reschedule_moves_date_and_confirms() {
        let mut appointments = vec![build(request("Phoenix Baker"), AppointmentStatus::Pending)];
        let id = appointments[0].id;
        let new_date = NaiveDate::from_ymd_opt(2022, 6, 10).unwrap();
        assert!(apply_reschedule(&mut appointments, id, new_date, "02:30 PM"));
        assert_eq!(appointments[0].date, new_date);
        assert_eq!(appointments[0].time.as_deref(), Some("02:30 PM"));
        assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);
    }
}
