use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physician that patients can be booked with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    pub image: String,
}

/// Lifecycle of an appointment as shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Pending,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient: String,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub reason: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters for the admin dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCounts {
    pub total: usize,
    pub scheduled: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl AppointmentCounts {
    pub fn tally(appointments: &[Appointment]) -> Self {
        let mut counts = Self {
            total: appointments.len(),
            ..Self::default()
        };
        for appointment in appointments {
            match appointment.status {
                AppointmentStatus::Scheduled => counts.scheduled += 1,
                AppointmentStatus::Pending => counts.pending += 1,
                AppointmentStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }
}

/// The signed-in patient, persisted across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_verified: bool,
    pub has_completed_profile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn all() -> [Gender; 3] {
        [Gender::Male, Gender::Female, Gender::Other]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentificationType {
    Passport,
    DriversLicense,
    NationalId,
    Other,
}

impl IdentificationType {
    pub fn label(&self) -> &'static str {
        match self {
            IdentificationType::Passport => "Passport",
            IdentificationType::DriversLicense => "Driver's License",
            IdentificationType::NationalId => "National ID",
            IdentificationType::Other => "Other",
        }
    }

    pub fn all() -> [IdentificationType; 4] {
        [
            IdentificationType::Passport,
            IdentificationType::DriversLicense,
            IdentificationType::NationalId,
            IdentificationType::Other,
        ]
    }
}

/// Everything collected by the four-step patient intake form. Medical fields
/// are optional; the consent booleans must all be true before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_phone: String,

    pub primary_care_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: String,
    pub current_medications: String,
    pub family_medical_history: String,
    pub past_medical_history: String,

    pub identification_type: Option<IdentificationType>,
    pub identification_number: String,
    /// File name only; the document itself never leaves the browser.
    pub identification_document: Option<String>,

    pub consent_treatment: bool,
    pub consent_health_info: bool,
    pub consent_privacy_policy: bool,
}

impl PatientProfile {
    pub fn all_consents_given(&self) -> bool {
        self.consent_treatment && self.consent_health_info && self.consent_privacy_policy
    }
}

/// A patient record created from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Hand-off record written by the scheduling flows and consumed (once) by the
/// success pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentReceipt {
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn appointment(status: AppointmentStatus) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient: "Phoenix Baker".into(),
            patient_email: None,
            patient_phone: None,
            doctor: "Dr. Alex Ramirez".into(),
            specialty: "Cardiologist".into(),
            date: NaiveDate::from_ymd_opt(2022, 6, 4).unwrap(),
            time: None,
            reason: "Check-up".into(),
            notes: None,
            status,
            cancellation_reason: None,
            created_at: Utc.with_ymd_and_hms(2022, 6, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn counts_tally_by_status() {
        let appointments = vec![
            appointment(AppointmentStatus::Scheduled),
            appointment(AppointmentStatus::Pending),
            appointment(AppointmentStatus::Pending),
            appointment(AppointmentStatus::Cancelled),
        ];
        let counts = AppointmentCounts::tally(&appointments);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.scheduled, 1);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.cancelled, 1);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
        let back: AppointmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, AppointmentStatus::Cancelled);
    }

    #[test]
    fn appointment_round_trips_through_json() {
        let original = appointment(AppointmentStatus::Pending);
        let json = serde_json::to_string(&original).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn consent_requires_all_three() {
        let mut profile = PatientProfile {
            consent_treatment: true,
            consent_health_info: true,
            consent_privacy_policy: false,
            ..PatientProfile::default()
        };
        assert!(!profile.all_consents_given());
        profile.consent_privacy_policy = true;
        assert!(profile.all_consents_given());
    }
}
