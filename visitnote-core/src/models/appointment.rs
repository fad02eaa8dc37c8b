use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppointmentSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    /// Raw ISO-8601 timestamp as supplied upstream.
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub details: Option<AppointmentSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentInput {
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentInput {
    pub date: Option<String>,
    pub summary: Option<String>,
    pub plan: Option<Vec<String>>,
    pub notes: Option<String>,
    pub documents: Option<Vec<String>>,
    pub details: Option<AppointmentSummary>,
}

impl Appointment {
    pub fn from_input(id: Uuid, input: CreateAppointmentInput) -> Self {
        Self {
            id,
            date: input.date,
            summary: input.summary,
            plan: input.plan,
            notes: input.notes,
            documents: input.documents,
            details: None,
        }
    }

    /// Merge the fields present in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: UpdateAppointmentInput) {
        if let Some(date) = input.date {
            self.date = date;
        }
        if let Some(summary) = input.summary {
            self.summary = summary;
        }
        if let Some(plan) = input.plan {
            self.plan = plan;
        }
        if let Some(notes) = input.notes {
            self.notes = notes;
        }
        if let Some(documents) = input.documents {
            self.documents = documents;
        }
        if let Some(details) = input.details {
            self.details = Some(details);
        }
    }
}
