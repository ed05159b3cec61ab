//! Typed reads and writes against the form surface.
//!
//! Missing elements never fail: reads fall back to an empty string or an empty
//! list and every miss is logged.

use tracing::error;

use crate::domain::{catalog::ids, AnswerSet, YesNo};

use super::FormSurface;

pub fn get_value(surface: &dyn FormSurface, field_id: &str) -> String {
    surface.value(field_id).unwrap_or_else(|| {
        error!(field = field_id, "form element not found");
        String::new()
    })
}

/// Writes a value; returns whether the element accepted it.
pub fn set_value(surface: &mut dyn FormSurface, field_id: &str, value: &str) -> bool {
    if surface.value(field_id).is_none() {
        error!(field = field_id, "form element not found");
        return false;
    }
    let accepted = surface.set_value(field_id, value);
    if !accepted {
        error!(field = field_id, value, "value rejected by form element");
    }
    accepted
}

/// Checked values of a checkbox group, in document order.
pub fn get_checked(surface: &dyn FormSurface, group: &str) -> Vec<String> {
    match surface.checkboxes(group) {
        Some(boxes) => boxes
            .into_iter()
            .filter(|checkbox| checkbox.checked)
            .map(|checkbox| checkbox.value)
            .collect(),
        None => {
            error!(group, "checkbox group not found");
            Vec::new()
        }
    }
}

pub fn set_checked(surface: &mut dyn FormSurface, group: &str, value: &str, checked: bool) -> bool {
    let found = surface.set_checked(group, value, checked);
    if !found {
        error!(group, value, "checkbox not found");
    }
    found
}

/// Checks exactly the listed values of a group and unchecks the rest.
/// Values with no matching checkbox are ignored.
pub fn replace_checked(surface: &mut dyn FormSurface, group: &str, values: &[String]) {
    let Some(boxes) = surface.checkboxes(group) else {
        error!(group, "checkbox group not found");
        return;
    };
    for checkbox in boxes {
        let wanted = values.iter().any(|value| *value == checkbox.value);
        surface.set_checked(group, &checkbox.value, wanted);
    }
}

fn get_yes_no(surface: &dyn FormSurface, field_id: &str) -> Option<YesNo> {
    YesNo::parse(&get_value(surface, field_id))
}

/// Reads the complete answer set from the surface.
pub fn read_answers(surface: &dyn FormSurface) -> AnswerSet {
    AnswerSet {
        mbti: get_value(surface, ids::MBTI),
        subjects: get_checked(surface, ids::SUBJECTS),
        strengths: get_checked(surface, ids::STRENGTHS),
        interests: get_checked(surface, ids::INTERESTS),
        financial_influence: get_yes_no(surface, ids::FINANCIAL_INFLUENCE),
        family_has_industry: get_yes_no(surface, ids::FAMILY_HAS_INDUSTRY),
        family_industry_select: get_value(surface, ids::FAMILY_INDUSTRY_SELECT),
        family_advice: get_value(surface, ids::FAMILY_ADVICE),
    }
}

/// Writes every stored answer back into its control.
pub fn write_answers(surface: &mut dyn FormSurface, answers: &AnswerSet) {
    set_value(surface, ids::MBTI, &answers.mbti);
    replace_checked(surface, ids::SUBJECTS, &answers.subjects);
    replace_checked(surface, ids::STRENGTHS, &answers.strengths);
    replace_checked(surface, ids::INTERESTS, &answers.interests);
    set_value(
        surface,
        ids::FINANCIAL_INFLUENCE,
        answers.financial_influence.map(YesNo::as_str).unwrap_or(""),
    );
    set_value(
        surface,
        ids::FAMILY_HAS_INDUSTRY,
        answers.family_has_industry.map(YesNo::as_str).unwrap_or(""),
    );
    set_value(
        surface,
        ids::FAMILY_INDUSTRY_SELECT,
        &answers.family_industry_select,
    );
    set_value(surface, ids::FAMILY_ADVICE, &answers.family_advice);
}
