use crate::domain::{catalog, catalog::ids, AnswerSet};

/// True when every required answer is present: an MBTI type and at least one
/// subject, strength and interest.
pub fn is_complete(answers: &AnswerSet) -> bool {
    !answers.mbti.is_empty()
        && !answers.subjects.is_empty()
        && !answers.strengths.is_empty()
        && !answers.interests.is_empty()
}

/// Whether the advance control may be used on `step`: the last step needs
/// the complete answer set, earlier steps only their own required fields.
pub fn step_ready(step: usize, answers: &AnswerSet) -> bool {
    if step + 1 >= catalog::step_count() {
        return is_complete(answers);
    }
    catalog::step(step)
        .map(|spec| {
            spec.fields
                .iter()
                .filter(|field| field.required)
                .all(|field| field_answered(field.id, answers))
        })
        .unwrap_or(false)
}

fn field_answered(field_id: &str, answers: &AnswerSet) -> bool {
    match field_id {
        ids::MBTI => !answers.mbti.is_empty(),
        ids::SUBJECTS => !answers.subjects.is_empty(),
        ids::STRENGTHS => !answers.strengths.is_empty(),
        ids::INTERESTS => !answers.interests.is_empty(),
        _ => true,
    }
}
