use serde::{Deserialize, Serialize};

use crate::classify::{self, Classifiable, Importance, Tag};

/// Processed visit summary as returned by the processing service.
///
/// Covers both payload generations: v1.2 carries `todos` and `learnings`,
/// v1.3 (tagged `"version": "1.3"`) splits the plan into `tests`,
/// `medications`, `procedures` and `other` and adds `action_todo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppointmentSummary {
    pub version: Option<String>,
    pub summary: Option<String>,
    pub reason_for_visit: Vec<ReasonForVisit>,
    pub diagnosis: Option<Diagnosis>,
    pub todos: Vec<Todo>,
    pub follow_up: Vec<FollowUp>,
    pub learnings: Vec<Learning>,
    pub tests: Vec<PlanItem>,
    pub medications: Vec<PlanItem>,
    pub procedures: Vec<PlanItem>,
    pub other: Vec<PlanItem>,
    pub why_recommended: Option<String>,
    pub risks_side_effects: Vec<PlanItem>,
    #[serde(rename = "action_todo", alias = "action_todos")]
    pub action_todos: Vec<ActionTodo>,
}

impl AppointmentSummary {
    pub fn is_v13(&self) -> bool {
        self.version.as_deref() == Some("1.3")
    }

    pub fn diagnosis_details(&self) -> &[DiagnosisDetail] {
        self.diagnosis.as_ref().map(|d| d.details.as_slice()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReasonForVisit {
    pub reason: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    #[serde(default)]
    pub details: Vec<DiagnosisDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosisDetail {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text; unknown values are kept and sort last.
    #[serde(default)]
    pub severity: Option<String>,
}

impl Classifiable for DiagnosisDetail {
    fn category(&self) -> Option<&str> {
        self.severity.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub verified: bool,
    // Medication specific
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    // Procedure specific
    #[serde(default)]
    pub timeframe: Option<String>,
}

impl Todo {
    pub fn tag(&self) -> Tag {
        classify::classify(&self.kind)
    }

    /// Type-specific details worth showing under the title.
    ///
    /// Medications list dosage, frequency, timing and duration; procedures
    /// list their timeframe; other kinds have none.
    pub fn details(&self) -> Vec<&str> {
        match self.tag() {
            Tag::Medication => [&self.dosage, &self.frequency, &self.timing, &self.duration]
                .into_iter()
                .filter_map(|d| d.as_deref())
                .collect(),
            Tag::Procedure => self.timeframe.as_deref().into_iter().collect(),
            Tag::Test | Tag::Other => Vec::new(),
        }
    }
}

impl Classifiable for Todo {
    fn category(&self) -> Option<&str> {
        Some(&self.kind)
    }
}

/// One entry of a v1.3 plan list (tests, medications, procedures, other,
/// risks). Fields a given list does not use stay empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    /// Medication changed at this visit.
    #[serde(default)]
    pub change: bool,
}

impl PlanItem {
    pub fn details(&self) -> Vec<&str> {
        [&self.dosage, &self.frequency, &self.timing, &self.duration, &self.timeframe]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionTodo {
    pub title: String,
    pub importance: Importance,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowUp {
    pub description: String,
    #[serde(default)]
    pub time_frame: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Learning {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
