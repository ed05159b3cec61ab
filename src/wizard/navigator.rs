use tracing::error;

use crate::{domain::catalog::ids, form::FormSurface};

pub const NEXT_LABEL: &str = "Next";
pub const SUBMIT_LABEL: &str = "Submit";

/// Result of asking the navigator to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered the given step.
    Moved(usize),
    /// Already at the first step; nothing changed.
    Stayed(usize),
    /// The given step still has unanswered required fields.
    Blocked(usize),
    /// `next` on the last step: the caller should submit.
    Submit,
}

/// Tracks the current step and keeps the step panels, progress bar and
/// navigation buttons in sync with it.
#[derive(Debug, Clone)]
pub struct StepNavigator {
    panels: Vec<&'static str>,
    current: usize,
}

impl StepNavigator {
    pub fn new(panels: Vec<&'static str>) -> Self {
        Self { panels, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.panels.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.panels.len()
    }

    pub fn advance(&mut self) -> Transition {
        if self.is_last() {
            Transition::Submit
        } else {
            self.current += 1;
            Transition::Moved(self.current)
        }
    }

    pub fn retreat(&mut self) -> Transition {
        if self.is_first() {
            Transition::Stayed(self.current)
        } else {
            self.current -= 1;
            Transition::Moved(self.current)
        }
    }

    /// Jumps to `index`, clamped into range.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.panels.len().saturating_sub(1));
        self.current
    }

    /// Progress through the survey in percent.
    pub fn progress_percent(&self) -> f32 {
        if self.panels.len() <= 1 {
            return 100.0;
        }
        self.current as f32 / (self.panels.len() - 1) as f32 * 100.0
    }

    /// Shows the current panel exclusively and updates the progress bar and
    /// navigation buttons.
    pub fn render(&self, surface: &mut dyn FormSurface) {
        for (index, panel) in self.panels.iter().enumerate() {
            if !surface.set_visible(panel, index == self.current) {
                error!(panel = *panel, "step panel not found");
            }
        }
        surface.set_progress(ids::PROGRESS, self.progress_percent());
        surface.set_visible(ids::PREV_BUTTON, !self.is_first());
        let label = if self.is_last() {
            SUBMIT_LABEL
        } else {
            NEXT_LABEL
        };
        if !surface.set_label(ids::NEXT_BUTTON, label) {
            error!("advance control not found");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::form::MemoryForm;

    fn navigator() -> StepNavigator {
        StepNavigator::new(catalog::panel_ids())
    }

    #[test]
    fn advance_stops_at_last_step_with_submit() {
        let mut nav = navigator();
        for expected in 1..5 {
            assert_eq!(nav.advance(), Transition::Moved(expected));
        }
        assert_eq!(nav.advance(), Transition::Submit);
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut nav = navigator();
        assert_eq!(nav.retreat(), Transition::Stayed(0));
        nav.go_to(2);
        assert_eq!(nav.retreat(), Transition::Moved(1));
    }

    #[test]
    fn go_to_clamps_into_range() {
        let mut nav = navigator();
        assert_eq!(nav.go_to(42), 4);
        assert!(nav.is_last());
    }

    #[test]
    fn progress_is_proportional_to_step() {
        let mut nav = navigator();
        assert_eq!(nav.progress_percent(), 0.0);
        nav.go_to(2);
        assert_eq!(nav.progress_percent(), 50.0);
        nav.go_to(4);
        assert_eq!(nav.progress_percent(), 100.0);
        assert_eq!(StepNavigator::new(vec!["only"]).progress_percent(), 100.0);
    }

    #[test]
    fn render_updates_panels_and_controls() {
        let mut form = MemoryForm::survey();
        let mut nav = navigator();
        nav.render(&mut form);
        assert_eq!(form.is_visible(ids::PREV_BUTTON), Some(false));
        assert_eq!(form.label(ids::NEXT_BUTTON).as_deref(), Some(NEXT_LABEL));

        nav.go_to(4);
        nav.render(&mut form);
        assert_eq!(form.is_visible("step-4"), Some(true));
        assert_eq!(form.is_visible("step-0"), Some(false));
        assert_eq!(form.is_visible(ids::PREV_BUTTON), Some(true));
        assert_eq!(form.label(ids::NEXT_BUTTON).as_deref(), Some(SUBMIT_LABEL));
        assert_eq!(form.progress(ids::PROGRESS), Some(100.0));
    }
}
