//! Snapshots the answer set into local storage and restores it on startup.
//!
//! Storage is best-effort: every failure is logged and swallowed, and a
//! missing or unreadable snapshot is simply "no saved state".

use tracing::{debug, warn};

use crate::{
    domain::{catalog::ids, AnswerSet},
    form::{fields, selection, FormSurface},
};

use super::SnapshotStore;

/// Fixed key of the in-progress answer snapshot.
pub const SNAPSHOT_KEY: &str = "career_wizard.answers";

/// Button groups whose selection mirrors a stored value.
const BUTTON_FIELDS: &[&str] = &[
    ids::FINANCIAL_INFLUENCE,
    ids::FAMILY_HAS_INDUSTRY,
    ids::FAMILY_ADVICE,
];

pub struct PersistenceBridge {
    store: Box<dyn SnapshotStore>,
}

impl PersistenceBridge {
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Overwrites the snapshot with `answers`.
    pub fn save(&self, answers: &AnswerSet) {
        let json = match serde_json::to_string(answers) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "could not serialize answer snapshot");
                return;
            }
        };
        if let Err(err) = self.store.set(SNAPSHOT_KEY, &json) {
            warn!(error = %err, "could not write answer snapshot");
        }
    }

    /// Reads the snapshot; absent or malformed data yields `None`.
    pub fn load(&self) -> Option<AnswerSet> {
        let raw = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "could not read answer snapshot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(answers) => Some(answers),
            Err(err) => {
                warn!(error = %err, "discarding malformed answer snapshot");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove(SNAPSHOT_KEY) {
            warn!(error = %err, "could not remove answer snapshot");
        }
    }

    /// Repopulates the surface from `answers`, including which buttons read
    /// as selected and whether dependent containers are shown.
    pub fn restore(&self, surface: &mut dyn FormSurface, answers: &AnswerSet) {
        fields::write_answers(surface, answers);
        for field_id in BUTTON_FIELDS {
            let stored = fields::get_value(surface, field_id);
            let control = if stored.is_empty() {
                None
            } else {
                let found = selection::find_control(surface, field_id, &stored);
                if found.is_none() {
                    debug!(field = *field_id, value = %stored, "no control matches restored value");
                }
                found
            };
            selection::mark_selected(surface, field_id, control);
        }
        selection::apply_dependent_visibility(
            surface,
            ids::FAMILY_HAS_INDUSTRY,
            answers.family_has_industry,
        );
    }
}
