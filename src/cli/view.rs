//! Text rendering of the form surface.

use std::fmt::Write as _;

use crate::{
    domain::catalog::{self, ids, FieldKind, FieldSpec},
    form::FormSurface,
    submit::render::render_results_text,
    wizard::Wizard,
};

const BAR_WIDTH: usize = 20;

/// Renders the active step, or the results once the form has been hidden by
/// a submission.
pub fn render<S: FormSurface>(wizard: &Wizard<S>) -> String {
    let surface = wizard.surface();
    if surface.is_visible(ids::FORM) == Some(false) {
        if surface.is_visible(ids::LOADING) == Some(true) {
            return String::from("Processing...");
        }
        return render_results(surface);
    }

    let mut out = String::new();
    let index = wizard.current_step();
    if let Some(step) = catalog::step(index) {
        let _ = writeln!(
            out,
            "Step {} of {}: {}",
            index + 1,
            wizard.step_count(),
            step.title
        );
    }
    let percent = surface.progress(ids::PROGRESS).unwrap_or_default();
    let _ = writeln!(out, "{}", progress_bar(percent));

    if let Some(step) = catalog::step(index) {
        for field in step.fields {
            if !field_visible(surface, field) {
                continue;
            }
            render_field(&mut out, surface, field);
        }
    }

    out.push_str(&nav_line(surface));
    out
}

pub fn render_results(surface: &dyn FormSurface) -> String {
    match surface.results(ids::RESULTS) {
        Some(cards) if !cards.is_empty() => render_results_text(&cards),
        _ => String::from("No results yet."),
    }
}

pub fn progress_bar(percent: f32) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!(
        "Progress [{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        clamped
    )
}

fn field_visible(surface: &dyn FormSurface, field: &FieldSpec) -> bool {
    match field.parent {
        Some(container) => surface.is_visible(container).unwrap_or(false),
        None => true,
    }
}

fn render_field(out: &mut String, surface: &dyn FormSurface, field: &FieldSpec) {
    let marker = if field.required { " *" } else { "" };
    match field.kind {
        FieldKind::Select => {
            let current = surface.value(field.id).unwrap_or_default();
            let shown = if current.is_empty() {
                String::from("(not chosen)")
            } else {
                option_label(field, &current).to_string()
            };
            let _ = writeln!(out, "{} ({}){}: {}", field.label, field.id, marker, shown);
            let options: Vec<&str> = field.options.iter().map(|option| option.label).collect();
            let _ = writeln!(out, "  options: {}", options.join(", "));
        }
        FieldKind::Checkboxes => {
            let _ = writeln!(out, "{} ({}){}", field.label, field.id, marker);
            for checkbox in surface.checkboxes(field.id).unwrap_or_default() {
                let mark = if checkbox.checked { 'x' } else { ' ' };
                let _ = writeln!(out, "  [{}] {}", mark, checkbox.label);
            }
        }
        FieldKind::Choice | FieldKind::Toggle => {
            let _ = writeln!(out, "{} ({}){}", field.label, field.id, marker);
            let buttons: Vec<String> = surface
                .buttons(field.id)
                .unwrap_or_default()
                .into_iter()
                .map(|button| {
                    let mark = if button.selected { '*' } else { ' ' };
                    format!("({}) {}", mark, button.label)
                })
                .collect();
            let _ = writeln!(out, "  {}", buttons.join("  "));
        }
    }
}

fn option_label<'a>(field: &FieldSpec, value: &'a str) -> &'a str {
    field
        .options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
        .unwrap_or(value)
}

fn nav_line(surface: &dyn FormSurface) -> String {
    let mut parts = Vec::new();
    if surface.is_visible(ids::PREV_BUTTON) == Some(true) {
        parts.push(button_text(surface, ids::PREV_BUTTON, "Previous"));
    }
    parts.push(button_text(surface, ids::NEXT_BUTTON, "Next"));
    parts.join("  ")
}

fn button_text(surface: &dyn FormSurface, id: &str, fallback: &str) -> String {
    let label = surface.label(id).unwrap_or_else(|| fallback.to_string());
    match surface.is_enabled(id) {
        Some(false) => format!("[ {label} ] (disabled)"),
        _ => format!("[ {label} ]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;
    use crate::storage::MemoryStore;
    use crate::wizard::WizardSettings;

    fn wizard() -> Wizard<MemoryForm> {
        Wizard::start(
            MemoryForm::survey(),
            Box::new(MemoryStore::new()),
            WizardSettings::default(),
        )
    }

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(0.0), format!("Progress [{}]   0%", "-".repeat(20)));
        assert_eq!(
            progress_bar(50.0),
            format!("Progress [{}{}]  50%", "#".repeat(10), "-".repeat(10))
        );
        assert_eq!(progress_bar(250.0), format!("Progress [{}] 100%", "#".repeat(20)));
    }

    #[test]
    fn first_step_shows_select_and_disabled_next() {
        let mut wizard = wizard();
        let text = render(&wizard);
        assert!(text.starts_with("Step 1 of 5: Personality"));
        assert!(text.contains("(mbti) *: (not chosen)"));
        assert!(text.ends_with("[ Next ] (disabled)"));
        assert!(!text.contains("Previous"));

        wizard.set_field(ids::MBTI, "INTJ");
        let text = render(&wizard);
        assert!(text.contains("(mbti) *: INTJ"));
        assert!(text.ends_with("[ Next ]"));
    }

    #[test]
    fn family_step_hides_industry_until_yes() {
        let mut wizard = wizard();
        wizard.set_field(ids::MBTI, "INTJ");
        wizard.next();
        wizard.set_checked(ids::SUBJECTS, "Math", true);
        wizard.next();
        wizard.set_checked(ids::STRENGTHS, "Logic", true);
        wizard.next();
        wizard.set_checked(ids::INTERESTS, "Science", true);
        wizard.next();

        let text = render(&wizard);
        assert!(text.starts_with("Step 5 of 5: Family"));
        assert!(!text.contains(ids::FAMILY_INDUSTRY_SELECT));
        assert!(text.contains("[ Previous ]  [ Submit ]"));

        wizard.record_toggle("yes", ids::FAMILY_HAS_INDUSTRY);
        let text = render(&wizard);
        assert!(text.contains(ids::FAMILY_INDUSTRY_SELECT));
        assert!(text.contains("(*) Yes  ( ) No"));
    }
}
