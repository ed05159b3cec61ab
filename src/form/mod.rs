//! The form surface the wizard drives.
//!
//! [`FormSurface`] is the small element model the wizard logic is written
//! against: value-bearing elements addressed by id, checkbox and button groups
//! addressed by name, and a handful of display elements (panels, buttons, a
//! progress bar, a status area and a results container). Every accessor
//! reports a missing element as `None`/`false` instead of failing, so callers
//! decide how to degrade.

pub mod fields;
pub mod memory;
pub mod selection;
pub mod status;

pub use memory::MemoryForm;
pub use status::{StatusBanner, StatusKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButton {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One rendered suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub rank: usize,
    pub career: String,
    pub score: String,
}

pub trait FormSurface {
    /// Value of an input or select element.
    fn value(&self, id: &str) -> Option<String>;
    fn set_value(&mut self, id: &str, value: &str) -> bool;

    /// Checkboxes of a named group, in document order.
    fn checkboxes(&self, group: &str) -> Option<Vec<Checkbox>>;
    fn set_checked(&mut self, group: &str, value: &str, checked: bool) -> bool;

    /// Buttons of a named group, in document order.
    fn buttons(&self, group: &str) -> Option<Vec<ChoiceButton>>;
    fn set_button_selected(&mut self, group: &str, index: usize, selected: bool) -> bool;

    fn is_visible(&self, id: &str) -> Option<bool>;
    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    fn is_enabled(&self, id: &str) -> Option<bool>;
    fn set_enabled(&mut self, id: &str, enabled: bool) -> bool;

    fn label(&self, id: &str) -> Option<String>;
    fn set_label(&mut self, id: &str, label: &str) -> bool;

    /// Progress percentage in `0.0..=100.0`.
    fn progress(&self, id: &str) -> Option<f32>;
    fn set_progress(&mut self, id: &str, percent: f32) -> bool;

    fn status(&self, id: &str) -> Option<StatusBanner>;
    fn set_status(&mut self, id: &str, banner: Option<StatusBanner>) -> bool;

    fn results(&self, id: &str) -> Option<Vec<ResultCard>>;
    fn set_results(&mut self, id: &str, cards: Vec<ResultCard>) -> bool;
}
