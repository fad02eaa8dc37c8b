//! Summary sections ready for display.
//!
//! Sorts and classifies the records of an [`AppointmentSummary`] and wraps
//! each section in a [`DisclosureList`] inside a [`Collapsible`] card.
//! Rendering adapters only walk the result.

use crate::classify::{self, Classifiable, Importance, Tag};
use crate::config::SectionLimits;
use crate::disclosure::{Collapsible, DisclosureList};
use crate::error::Result;
use crate::models::{
    ActionTodo, AppointmentSummary, DiagnosisDetail, FollowUp, Learning, PlanItem, ReasonForVisit,
    Todo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    ReasonForVisit,
    Diagnosis,
    ActionItems,
    ActionTodos,
    Tests,
    Medications,
    Procedures,
    OtherInstructions,
    RisksSideEffects,
    FollowUp,
    Learnings,
}

impl SectionKind {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::ReasonForVisit => "Reason for Visit",
            Self::Diagnosis => "Diagnosis",
            Self::ActionItems | Self::ActionTodos => "Action Items",
            Self::Tests => "Tests",
            Self::Medications => "Medications",
            Self::Procedures => "Procedures",
            Self::OtherInstructions => "Other Instructions",
            Self::RisksSideEffects => "Risks & Side Effects",
            Self::FollowUp => "Follow-up",
            Self::Learnings => "Key Learnings",
        }
    }
}

/// A card holding one list of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub kind: SectionKind,
    pub card: Collapsible,
    pub list: DisclosureList<T>,
}

impl<T> Section<T> {
    /// `None` for an empty section, which callers hide entirely.
    fn build(
        kind: SectionKind,
        items: Vec<T>,
        initial_count: usize,
        card: Collapsible,
    ) -> Result<Option<Self>> {
        if items.is_empty() {
            return Ok(None);
        }
        let list = DisclosureList::with_initial_count(items, initial_count)?;
        Ok(Some(Self { kind, card, list }))
    }

    /// A fixed card with a Read More threshold.
    fn listed(kind: SectionKind, items: Vec<T>, initial_count: usize) -> Result<Option<Self>> {
        Self::build(kind, items, initial_count, Collapsible::default())
    }

    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }

    /// Open the card and reveal every item.
    pub fn expand(&mut self) {
        if self.card.is_collapsed() {
            self.card.toggle();
        }
        if !self.list.is_expanded() {
            self.list.toggle();
        }
    }
}

/// A plan card (tests, medications, ...).
///
/// High-importance items are always shown. Low ones sit behind Read More:
/// all of them when any high item exists, all but the first `low_limit`
/// otherwise. A card with only low items starts collapsed.
fn plan_section(
    kind: SectionKind,
    mut items: Vec<PlanItem>,
    low_limit: usize,
) -> Result<Option<Section<PlanItem>>> {
    classify::sort_by_importance(&mut items, |item| item.importance);
    let high = items
        .iter()
        .filter(|item| item.importance == Importance::High)
        .count();
    let initial_count = if high > 0 { high } else { low_limit };
    Section::build(kind, items, initial_count, Collapsible::new(true, high == 0))
}

/// An action item paired with its presentation tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTodo {
    pub tag: Tag,
    pub todo: Todo,
}

impl Classifiable for TaggedTodo {
    fn category(&self) -> Option<&str> {
        Some(self.tag.as_str())
    }
}

/// A card holding a single block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCard {
    pub heading: &'static str,
    pub card: Collapsible,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryView {
    pub summary: Option<String>,
    pub reason_for_visit: Option<Section<ReasonForVisit>>,
    pub diagnosis: Option<Section<DiagnosisDetail>>,
    pub action_todos: Option<Section<ActionTodo>>,
    pub action_items: Option<Section<TaggedTodo>>,
    pub tests: Option<Section<PlanItem>>,
    pub medications: Option<Section<PlanItem>>,
    pub procedures: Option<Section<PlanItem>>,
    pub other: Option<Section<PlanItem>>,
    pub risks_side_effects: Option<Section<PlanItem>>,
    pub follow_up: Option<Section<FollowUp>>,
    pub why_recommended: Option<TextCard>,
    pub learnings: Option<Section<Learning>>,
}

fn non_blank(text: &Option<String>) -> Option<String> {
    text.clone().filter(|t| !t.trim().is_empty())
}

impl SummaryView {
    /// Build every section of `summary`.
    ///
    /// Diagnoses are ordered by severity, action todos and plan items by
    /// importance. Action items keep their original order unless
    /// `group_actions` is set, in which case they are grouped by tag
    /// (medication, test, procedure, other). Reason for visit starts
    /// collapsed.
    pub fn build(
        summary: &AppointmentSummary,
        limits: &SectionLimits,
        group_actions: bool,
    ) -> Result<Self> {
        limits.validate()?;

        let mut diagnosis = summary.diagnosis_details().to_vec();
        classify::sort_by_severity(&mut diagnosis);

        let mut action_items: Vec<TaggedTodo> = summary
            .todos
            .iter()
            .map(|todo| TaggedTodo {
                tag: todo.tag(),
                todo: todo.clone(),
            })
            .collect();
        if group_actions {
            classify::sort_by_tag(&mut action_items);
        }

        let mut action_todos = summary.action_todos.clone();
        classify::sort_by_importance(&mut action_todos, |todo| todo.importance);

        let reasons = summary.reason_for_visit.clone();
        let reason_count = reasons.len();

        Ok(Self {
            summary: non_blank(&summary.summary),
            reason_for_visit: Section::build(
                SectionKind::ReasonForVisit,
                reasons,
                reason_count.max(1),
                Collapsible::new(true, true),
            )?,
            diagnosis: Section::listed(SectionKind::Diagnosis, diagnosis, limits.diagnosis)?,
            action_todos: Section::listed(
                SectionKind::ActionTodos,
                action_todos,
                limits.action_todos,
            )?,
            action_items: Section::listed(
                SectionKind::ActionItems,
                action_items,
                limits.action_items,
            )?,
            tests: plan_section(SectionKind::Tests, summary.tests.clone(), limits.plan)?,
            medications: plan_section(
                SectionKind::Medications,
                summary.medications.clone(),
                limits.plan,
            )?,
            procedures: plan_section(
                SectionKind::Procedures,
                summary.procedures.clone(),
                limits.plan,
            )?,
            other: plan_section(
                SectionKind::OtherInstructions,
                summary.other.clone(),
                limits.plan,
            )?,
            risks_side_effects: plan_section(
                SectionKind::RisksSideEffects,
                summary.risks_side_effects.clone(),
                limits.plan,
            )?,
            follow_up: Section::listed(
                SectionKind::FollowUp,
                summary.follow_up.clone(),
                limits.follow_up,
            )?,
            why_recommended: non_blank(&summary.why_recommended).map(|body| TextCard {
                heading: "Why is this the plan?",
                card: Collapsible::new(true, false),
                body,
            }),
            learnings: Section::listed(
                SectionKind::Learnings,
                summary.learnings.clone(),
                limits.learnings,
            )?,
        })
    }

    /// Open every card and reveal every hidden item.
    pub fn expand_all(&mut self) {
        fn expand<T>(section: &mut Option<Section<T>>) {
            if let Some(section) = section {
                section.expand();
            }
        }
        expand(&mut self.reason_for_visit);
        expand(&mut self.diagnosis);
        expand(&mut self.action_todos);
        expand(&mut self.action_items);
        expand(&mut self.tests);
        expand(&mut self.medications);
        expand(&mut self.procedures);
        expand(&mut self.other);
        expand(&mut self.risks_side_effects);
        expand(&mut self.follow_up);
        expand(&mut self.learnings);
        if let Some(text) = &mut self.why_recommended {
            if text.card.is_collapsed() {
                text.card.toggle();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.reason_for_visit.is_none()
            && self.diagnosis.is_none()
            && self.action_todos.is_none()
            && self.action_items.is_none()
            && self.tests.is_none()
            && self.medications.is_none()
            && self.procedures.is_none()
            && self.other.is_none()
            && self.risks_side_effects.is_none()
            && self.follow_up.is_none()
            && self.why_recommended.is_none()
            && self.learnings.is_none()
    }
}
