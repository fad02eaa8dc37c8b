//! Plain-text rendering of appointments and their summary sections.

use visitnote_core::date_format;
use visitnote_core::models::{
    ActionTodo, Appointment, DiagnosisDetail, FollowUp, Learning, PlanItem, ReasonForVisit,
};
use visitnote_core::view::{TaggedTodo, TextCard};
use visitnote_core::Collapsible;
use visitnote_core::{Section, SummaryView};

const INDENT: &str = "  ";

/// One line for the appointment list: date, then summary.
pub fn appointment_line(appointment: &Appointment) -> String {
    let date = date_format::format_short(&appointment.date);
    if appointment.summary.is_empty() {
        format!("{date}  ({})", appointment.id)
    } else {
        format!("{date}  {}  ({})", appointment.summary, appointment.id)
    }
}

/// Full detail page for one appointment.
pub fn appointment_detail(appointment: &Appointment, view: &SummaryView) -> String {
    let mut lines = vec![date_format::format_long(&appointment.date)];
    if !appointment.summary.is_empty() {
        lines.push(appointment.summary.clone());
    }

    if let Some(summary) = &view.summary {
        lines.push(String::new());
        lines.push("Summary".to_string());
        lines.push(format!("{INDENT}{summary}"));
    }

    if let Some(section) = &view.reason_for_visit {
        render_section(&mut lines, section, reason_lines);
    }
    if let Some(section) = &view.diagnosis {
        render_section(&mut lines, section, diagnosis_lines);
    }
    if let Some(section) = &view.action_todos {
        render_section(&mut lines, section, action_todo_lines);
    }
    if let Some(section) = &view.action_items {
        render_section(&mut lines, section, action_item_lines);
    }
    for section in [
        &view.tests,
        &view.medications,
        &view.procedures,
        &view.other,
        &view.risks_side_effects,
    ]
    .into_iter()
    .flatten()
    {
        render_section(&mut lines, section, plan_item_lines);
    }
    if let Some(section) = &view.follow_up {
        render_section(&mut lines, section, follow_up_lines);
    }
    if let Some(text) = &view.why_recommended {
        render_text_card(&mut lines, text);
    }
    if let Some(section) = &view.learnings {
        render_section(&mut lines, section, learning_lines);
    }

    if view.is_empty() {
        lines.push(String::new());
        lines.push("No summary available yet.".to_string());
    }

    lines.join("\n")
}

fn render_section<T>(lines: &mut Vec<String>, section: &Section<T>, item: fn(&T) -> Vec<String>) {
    let list = &section.list;
    lines.push(String::new());
    lines.push(card_heading(section.heading(), &section.card));
    if !section.card.shows_body() {
        return;
    }

    for (index, entry) in list.visible_items().iter().enumerate() {
        let mut entry_lines = item(entry);
        if list.faded_index() == Some(index) {
            if let Some(first) = entry_lines.first_mut() {
                first.push_str(" …");
            }
            entry_lines.truncate(1);
        }
        lines.extend(entry_lines.into_iter().map(|l| format!("{INDENT}{l}")));
    }

    if let Some(label) = list.toggle_label() {
        let chevron = if list.is_expanded() { "▲" } else { "▼" };
        lines.push(format!("{INDENT}{chevron} {label}"));
    }
}

/// Heading line, with a chevron for cards that can be opened and closed.
fn card_heading(heading: &str, card: &Collapsible) -> String {
    match card.chevron() {
        Some(chevron) => format!("{chevron} {heading}"),
        None => heading.to_string(),
    }
}

fn render_text_card(lines: &mut Vec<String>, text: &TextCard) {
    lines.push(String::new());
    lines.push(card_heading(text.heading, &text.card));
    if text.card.shows_body() {
        lines.push(format!("{INDENT}{}", text.body));
    }
}

fn reason_lines(reason: &ReasonForVisit) -> Vec<String> {
    let mut out = vec![format!("• {}", reason.reason)];
    if !reason.description.is_empty() {
        out.push(format!("  {}", reason.description));
    }
    out
}

fn diagnosis_lines(detail: &DiagnosisDetail) -> Vec<String> {
    let mut out = vec![match &detail.severity {
        Some(severity) => format!("• {} [{}]", detail.title, severity.to_lowercase()),
        None => format!("• {}", detail.title),
    }];
    if !detail.description.is_empty() {
        out.push(format!("  {}", detail.description));
    }
    out
}

fn action_item_lines(item: &TaggedTodo) -> Vec<String> {
    let todo = &item.todo;
    let mut title = format!("[{}] {}", item.tag.as_str(), todo.title);
    if todo.verified {
        title.push_str(" (verified)");
    }

    let mut out = vec![title];
    if !todo.description.is_empty() {
        out.push(format!("  {}", todo.description));
    }
    let details = todo.details();
    if !details.is_empty() {
        out.push(format!("  {}", details.join(" · ")));
    }
    out
}

fn action_todo_lines(todo: &ActionTodo) -> Vec<String> {
    vec![format!("• {}", todo.title)]
}

fn follow_up_lines(item: &FollowUp) -> Vec<String> {
    let mut out = vec![format!("• {}", item.description)];
    if !item.time_frame.is_empty() {
        out.push(format!("  when: {}", item.time_frame));
    }
    out
}

fn plan_item_lines(item: &PlanItem) -> Vec<String> {
    let mut title = format!("• {}", item.title);
    if item.change {
        title.push_str(" (changed)");
    }

    let mut out = vec![title];
    for text in [item.instructions.as_deref(), Some(item.description.as_str())]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
    {
        out.push(format!("  {text}"));
    }
    let details = item.details();
    if !details.is_empty() {
        out.push(format!("  {}", details.join(" · ")));
    }
    out
}

fn learning_lines(learning: &Learning) -> Vec<String> {
    let mut out = vec![format!("• {}", learning.title)];
    if !learning.description.is_empty() {
        out.push(format!("  {}", learning.description));
    }
    out
}
