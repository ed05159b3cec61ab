//! The survey wizard: one owner for the form surface, the step navigator and
//! the persistence bridge.
//!
//! Every user interaction is a `&mut self` method. Each mutation snapshots
//! the answer set and re-runs validation, so the advance control always
//! reflects the current answers.

pub mod navigator;
pub mod validator;

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::{
    config::Config,
    domain::{catalog, catalog::ids, AnswerSet, SubmitMode, YesNo},
    form::{fields, selection, FormSurface, ResultCard, StatusBanner, StatusKind},
    storage::{PersistenceBridge, SnapshotStore},
    submit::{
        classify_response,
        render::{clear_results, render_results},
        SubmitOutcome, Transport, INCOMPLETE_MESSAGE, MISSING_INDUSTRY_MESSAGE,
        PROCESSING_MESSAGE,
    },
};

pub use navigator::{StepNavigator, Transition};

/// Runtime knobs for a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub endpoint: String,
    pub status_delay: Duration,
}

impl From<&Config> for WizardSettings {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint(),
            status_delay: config.status_delay(),
        }
    }
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

pub struct Wizard<S: FormSurface> {
    surface: S,
    navigator: StepNavigator,
    bridge: PersistenceBridge,
    settings: WizardSettings,
    restored: bool,
}

impl<S: FormSurface> Wizard<S> {
    /// Restores any saved answers into `surface` and enters the first step.
    pub fn start(mut surface: S, store: Box<dyn SnapshotStore>, settings: WizardSettings) -> Self {
        let bridge = PersistenceBridge::new(store);
        let saved = bridge.load();
        if let Some(saved) = &saved {
            info!("restoring saved answers");
            bridge.restore(&mut surface, saved);
        }
        let mut wizard = Self {
            surface,
            navigator: StepNavigator::new(catalog::panel_ids()),
            bridge,
            settings,
            restored: saved.is_some(),
        };
        wizard.enter_step();
        wizard
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether a saved snapshot was restored at startup.
    pub fn restored(&self) -> bool {
        self.restored
    }

    pub fn current_step(&self) -> usize {
        self.navigator.current()
    }

    pub fn step_count(&self) -> usize {
        self.navigator.step_count()
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn answers(&self) -> AnswerSet {
        fields::read_answers(&self.surface)
    }

    pub fn is_complete(&self) -> bool {
        validator::is_complete(&self.answers())
    }

    pub fn can_advance(&self) -> bool {
        validator::step_ready(self.navigator.current(), &self.answers())
    }

    pub fn status(&self) -> Option<StatusBanner> {
        self.surface.status(ids::STATUS)
    }

    pub fn results(&self) -> Vec<ResultCard> {
        self.surface.results(ids::RESULTS).unwrap_or_default()
    }

    /// Records a pick from a single-choice button group.
    pub fn record_single_choice(&mut self, field_id: &str, value: &str) -> bool {
        let control = selection::find_control(&self.surface, field_id, value);
        let recorded = selection::record_single_choice(&mut self.surface, field_id, value, control);
        self.changed();
        recorded
    }

    /// Records a yes/no toggle, revealing or hiding its dependent fields.
    pub fn record_toggle(&mut self, option: &str, field_id: &str) -> bool {
        let answer = YesNo::from_option(option);
        let control = selection::find_control(&self.surface, field_id, answer.as_str());
        let recorded = selection::record_toggle(&mut self.surface, option, field_id, control);
        self.changed();
        recorded
    }

    /// Sets a select or text input.
    pub fn set_field(&mut self, field_id: &str, value: &str) -> bool {
        let accepted = fields::set_value(&mut self.surface, field_id, value);
        self.changed();
        accepted
    }

    pub fn set_checked(&mut self, group: &str, value: &str, checked: bool) -> bool {
        let found = fields::set_checked(&mut self.surface, group, value, checked);
        self.changed();
        found
    }

    /// Moves forward when the current step is answered. On the last step this
    /// reports [`Transition::Submit`] instead of moving.
    pub fn next(&mut self) -> Transition {
        if !self.can_advance() {
            return Transition::Blocked(self.navigator.current());
        }
        let transition = self.navigator.advance();
        if let Transition::Moved(_) = transition {
            self.enter_step();
        }
        transition
    }

    pub fn prev(&mut self) -> Transition {
        let transition = self.navigator.retreat();
        if let Transition::Moved(_) = transition {
            self.enter_step();
        }
        transition
    }

    /// Sends the answer set and renders whatever comes back.
    ///
    /// The snapshot is cleared right before the request goes out. The form is
    /// hidden and the controls disabled until the exchange ends; they are
    /// always re-enabled afterwards, and the form reappears on failure so the
    /// user can try again.
    pub fn submit(&mut self, transport: &dyn Transport, mode: SubmitMode) -> SubmitOutcome {
        let answers = self.answers();
        if !validator::is_complete(&answers) {
            return self.block(INCOMPLETE_MESSAGE);
        }
        if answers.missing_family_industry() {
            return self.block(MISSING_INDUSTRY_MESSAGE);
        }

        let payload = answers.to_payload(mode);
        self.bridge.clear();
        self.surface.set_visible(ids::FORM, false);
        self.surface.set_visible(ids::LOADING, true);
        self.surface.set_enabled(ids::NEXT_BUTTON, false);
        self.surface.set_enabled(ids::PREV_BUTTON, false);
        self.post_status(StatusKind::Info, PROCESSING_MESSAGE);

        info!(endpoint = %self.settings.endpoint, ?mode, "submitting answers");
        let outcome = match transport.post_json(&self.settings.endpoint, &payload) {
            Ok(response) => classify_response(&response),
            Err(err) => {
                warn!(error = %err, "submission request failed");
                SubmitOutcome::NetworkError(err.to_string())
            }
        };

        if let SubmitOutcome::Suggestions(suggestions) = &outcome {
            render_results(&mut self.surface, suggestions);
        }
        self.surface.set_visible(ids::LOADING, false);
        if !outcome.is_success() {
            self.surface.set_visible(ids::FORM, true);
        }
        self.surface.set_enabled(ids::NEXT_BUTTON, true);
        self.surface.set_enabled(ids::PREV_BUTTON, true);
        self.surface.set_status(ids::STATUS, Some(outcome.banner()));
        outcome
    }

    /// Drops the status banner once it has been shown for the configured
    /// delay. Returns whether a banner was cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        match self.surface.status(ids::STATUS) {
            Some(banner) if banner.is_expired(now, self.settings.status_delay) => {
                self.surface.set_status(ids::STATUS, None);
                true
            }
            _ => false,
        }
    }

    /// Forgets every answer, saved or on screen, and returns to the first step.
    pub fn reset(&mut self) {
        self.bridge.clear();
        self.bridge.restore(&mut self.surface, &AnswerSet::default());
        clear_results(&mut self.surface);
        self.surface.set_status(ids::STATUS, None);
        self.surface.set_visible(ids::FORM, true);
        self.surface.set_visible(ids::LOADING, false);
        self.navigator.go_to(0);
        self.enter_step();
    }

    fn block(&mut self, reason: &str) -> SubmitOutcome {
        let outcome = SubmitOutcome::Blocked(reason.to_string());
        self.surface.set_status(ids::STATUS, Some(outcome.banner()));
        outcome
    }

    fn post_status(&mut self, kind: StatusKind, text: &str) {
        self.surface
            .set_status(ids::STATUS, Some(StatusBanner::new(kind, text)));
    }

    fn changed(&mut self) {
        let answers = self.answers();
        self.bridge.save(&answers);
        self.refresh_controls(&answers);
    }

    fn enter_step(&mut self) {
        self.navigator.render(&mut self.surface);
        let answers = self.answers();
        self.refresh_controls(&answers);
    }

    fn refresh_controls(&mut self, answers: &AnswerSet) {
        let ready = validator::step_ready(self.navigator.current(), answers);
        self.surface.set_enabled(ids::NEXT_BUTTON, ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;
    use crate::storage::MemoryStore;

    fn wizard() -> Wizard<MemoryForm> {
        Wizard::start(
            MemoryForm::survey(),
            Box::new(MemoryStore::new()),
            WizardSettings::default(),
        )
    }

    #[test]
    fn advance_is_gated_by_current_step() {
        let mut wizard = wizard();
        assert_eq!(wizard.surface().is_enabled(ids::NEXT_BUTTON), Some(false));
        assert_eq!(wizard.next(), Transition::Blocked(0));
        assert_eq!(wizard.current_step(), 0);

        wizard.set_field(ids::MBTI, "INTJ");
        assert_eq!(wizard.surface().is_enabled(ids::NEXT_BUTTON), Some(true));
        assert_eq!(wizard.next(), Transition::Moved(1));
        assert_eq!(wizard.surface().is_enabled(ids::NEXT_BUTTON), Some(false));
    }

    #[test]
    fn pick_outside_the_group_matches_a_restart() {
        let store = MemoryStore::new();
        let mut wizard = Wizard::start(
            MemoryForm::survey(),
            Box::new(store.clone()),
            WizardSettings::default(),
        );
        wizard.record_single_choice(ids::FAMILY_ADVICE, "Có");
        wizard.record_single_choice(ids::FAMILY_ADVICE, "Maybe");
        let marks = |form: &MemoryForm| -> Vec<bool> {
            form.buttons(ids::FAMILY_ADVICE)
                .unwrap()
                .iter()
                .map(|button| button.selected)
                .collect()
        };
        let before = marks(wizard.surface());
        assert_eq!(before, vec![false, false, false]);

        let again = Wizard::start(
            MemoryForm::survey(),
            Box::new(store),
            WizardSettings::default(),
        );
        assert_eq!(again.answers().family_advice, "Maybe");
        assert_eq!(marks(again.surface()), before);
    }

    #[test]
    fn expire_status_honours_delay() {
        let mut wizard = wizard();
        let start = Instant::now();
        wizard.surface.set_status(
            ids::STATUS,
            Some(StatusBanner::posted_at(StatusKind::Info, "hello", start)),
        );
        assert!(!wizard.expire_status(start + Duration::from_secs(1)));
        assert!(wizard.status().is_some());
        assert!(wizard.expire_status(start + Duration::from_secs(3)));
        assert!(wizard.status().is_none());
    }

    #[test]
    fn reset_returns_to_a_blank_first_step() {
        let mut wizard = wizard();
        wizard.set_field(ids::MBTI, "INTJ");
        wizard.next();
        wizard.set_checked(ids::SUBJECTS, "Math", true);
        wizard.record_toggle("yes", ids::FAMILY_HAS_INDUSTRY);

        wizard.reset();
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(wizard.answers(), AnswerSet::default());
        assert_eq!(
            wizard.surface().is_visible(ids::FAMILY_INDUSTRY_CONTAINER),
            Some(false)
        );
    }
}
