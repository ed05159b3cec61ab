use std::collections::BTreeMap;

use crate::domain::catalog::{self, ids, FieldKind};

use super::{Checkbox, ChoiceButton, FormSurface, ResultCard, StatusBanner};

#[derive(Debug, Clone)]
enum Control {
    Input { value: String },
    Select { options: Vec<String>, value: String },
    Container,
    Button { label: String },
    Progress { percent: f32 },
    Status(Option<StatusBanner>),
    Results(Vec<ResultCard>),
}

#[derive(Debug, Clone)]
struct Element {
    control: Control,
    visible: bool,
    enabled: bool,
}

impl Element {
    fn new(control: Control, visible: bool) -> Self {
        Self {
            control,
            visible,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone)]
enum Group {
    Checkboxes(Vec<Checkbox>),
    Buttons(Vec<ChoiceButton>),
}

/// In-memory element tree implementing [`FormSurface`].
///
/// Elements live in one id namespace and checkbox/button groups in a separate
/// name namespace, so a hidden input and the button group feeding it can
/// share a name.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    elements: BTreeMap<String, Element>,
    groups: BTreeMap<String, Group>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full career survey surface from the catalog.
    pub fn survey() -> Self {
        let mut form = Self::new();
        form.add_container(ids::FORM, true);
        for (index, step) in catalog::STEPS.iter().enumerate() {
            form.add_container(step.panel, index == 0);
            for field in step.fields {
                let values = || field.options.iter().map(|option| option.value);
                let pairs = || {
                    field
                        .options
                        .iter()
                        .map(|option| (option.value, option.label))
                };
                match field.kind {
                    FieldKind::Select => form.add_select(field.id, values()),
                    FieldKind::Checkboxes => form.add_checkboxes(field.id, pairs()),
                    FieldKind::Choice | FieldKind::Toggle => {
                        form.add_input(field.id);
                        form.add_buttons(field.id, pairs());
                    }
                }
                if let Some(container) = field.dependent {
                    form.add_container(container, false);
                }
            }
        }
        form.add_button(ids::PREV_BUTTON, "Previous");
        form.add_button(ids::NEXT_BUTTON, "Next");
        form.add_progress(ids::PROGRESS);
        form.add_container(ids::LOADING, false);
        form.add_status(ids::STATUS);
        form.add_results(ids::RESULTS);
        form
    }

    pub fn add_input(&mut self, id: &str) {
        self.insert(
            id,
            Control::Input {
                value: String::new(),
            },
            true,
        );
    }

    pub fn add_select<'a>(&mut self, id: &str, options: impl IntoIterator<Item = &'a str>) {
        let options = options.into_iter().map(str::to_string).collect();
        self.insert(
            id,
            Control::Select {
                options,
                value: String::new(),
            },
            true,
        );
    }

    pub fn add_container(&mut self, id: &str, visible: bool) {
        self.insert(id, Control::Container, visible);
    }

    pub fn add_button(&mut self, id: &str, label: &str) {
        self.insert(
            id,
            Control::Button {
                label: label.to_string(),
            },
            true,
        );
    }

    pub fn add_progress(&mut self, id: &str) {
        self.insert(id, Control::Progress { percent: 0.0 }, true);
    }

    pub fn add_status(&mut self, id: &str) {
        self.insert(id, Control::Status(None), true);
    }

    pub fn add_results(&mut self, id: &str) {
        self.insert(id, Control::Results(Vec::new()), true);
    }

    pub fn add_checkboxes<'a>(
        &mut self,
        group: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        let boxes = options
            .into_iter()
            .map(|(value, label)| Checkbox {
                value: value.to_string(),
                label: label.to_string(),
                checked: false,
            })
            .collect();
        self.groups
            .insert(group.to_string(), Group::Checkboxes(boxes));
    }

    pub fn add_buttons<'a>(
        &mut self,
        group: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        let buttons = options
            .into_iter()
            .map(|(value, label)| ChoiceButton {
                value: value.to_string(),
                label: label.to_string(),
                selected: false,
            })
            .collect();
        self.groups
            .insert(group.to_string(), Group::Buttons(buttons));
    }

    /// Detaches an element, as if it were missing from the markup.
    pub fn remove_element(&mut self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    pub fn remove_group(&mut self, group: &str) -> bool {
        self.groups.remove(group).is_some()
    }

    /// Options offered by a select element.
    pub fn select_options(&self, id: &str) -> Option<Vec<String>> {
        match &self.elements.get(id)?.control {
            Control::Select { options, .. } => Some(options.clone()),
            _ => None,
        }
    }

    fn insert(&mut self, id: &str, control: Control, visible: bool) {
        self.elements
            .insert(id.to_string(), Element::new(control, visible));
    }

    fn control(&self, id: &str) -> Option<&Control> {
        self.elements.get(id).map(|element| &element.control)
    }

    fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
        self.elements.get_mut(id).map(|element| &mut element.control)
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, id: &str) -> Option<String> {
        match self.control(id)? {
            Control::Input { value } | Control::Select { value, .. } => Some(value.clone()),
            _ => None,
        }
    }

    fn set_value(&mut self, id: &str, new_value: &str) -> bool {
        match self.control_mut(id) {
            Some(Control::Input { value }) => {
                *value = new_value.to_string();
                true
            }
            // Selects refuse values they do not offer and fall back to empty.
            Some(Control::Select { options, value }) => {
                if new_value.is_empty() || options.iter().any(|option| option == new_value) {
                    *value = new_value.to_string();
                    true
                } else {
                    value.clear();
                    false
                }
            }
            _ => false,
        }
    }

    fn checkboxes(&self, group: &str) -> Option<Vec<Checkbox>> {
        match self.groups.get(group)? {
            Group::Checkboxes(boxes) => Some(boxes.clone()),
            Group::Buttons(_) => None,
        }
    }

    fn set_checked(&mut self, group: &str, value: &str, checked: bool) -> bool {
        let Some(Group::Checkboxes(boxes)) = self.groups.get_mut(group) else {
            return false;
        };
        match boxes.iter_mut().find(|candidate| candidate.value == value) {
            Some(target) => {
                target.checked = checked;
                true
            }
            None => false,
        }
    }

    fn buttons(&self, group: &str) -> Option<Vec<ChoiceButton>> {
        match self.groups.get(group)? {
            Group::Buttons(buttons) => Some(buttons.clone()),
            Group::Checkboxes(_) => None,
        }
    }

    fn set_button_selected(&mut self, group: &str, index: usize, selected: bool) -> bool {
        let Some(Group::Buttons(buttons)) = self.groups.get_mut(group) else {
            return false;
        };
        match buttons.get_mut(index) {
            Some(button) => {
                button.selected = selected;
                true
            }
            None => false,
        }
    }

    fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|element| element.visible)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.visible = visible;
                true
            }
            None => false,
        }
    }

    fn is_enabled(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|element| element.enabled)
    }

    fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn label(&self, id: &str) -> Option<String> {
        match self.control(id)? {
            Control::Button { label } => Some(label.clone()),
            _ => None,
        }
    }

    fn set_label(&mut self, id: &str, new_label: &str) -> bool {
        match self.control_mut(id) {
            Some(Control::Button { label }) => {
                *label = new_label.to_string();
                true
            }
            _ => false,
        }
    }

    fn progress(&self, id: &str) -> Option<f32> {
        match self.control(id)? {
            Control::Progress { percent } => Some(*percent),
            _ => None,
        }
    }

    fn set_progress(&mut self, id: &str, new_percent: f32) -> bool {
        match self.control_mut(id) {
            Some(Control::Progress { percent }) => {
                *percent = new_percent.clamp(0.0, 100.0);
                true
            }
            _ => false,
        }
    }

    fn status(&self, id: &str) -> Option<StatusBanner> {
        match self.control(id)? {
            Control::Status(banner) => banner.clone(),
            _ => None,
        }
    }

    fn set_status(&mut self, id: &str, new_banner: Option<StatusBanner>) -> bool {
        match self.control_mut(id) {
            Some(Control::Status(banner)) => {
                *banner = new_banner;
                true
            }
            _ => false,
        }
    }

    fn results(&self, id: &str) -> Option<Vec<ResultCard>> {
        match self.control(id)? {
            Control::Results(cards) => Some(cards.clone()),
            _ => None,
        }
    }

    fn set_results(&mut self, id: &str, new_cards: Vec<ResultCard>) -> bool {
        match self.control_mut(id) {
            Some(Control::Results(cards)) => {
                *cards = new_cards;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_surface_starts_on_first_panel() {
        let form = MemoryForm::survey();
        assert_eq!(form.is_visible("step-0"), Some(true));
        for panel in ["step-1", "step-2", "step-3", "step-4"] {
            assert_eq!(form.is_visible(panel), Some(false), "{panel}");
        }
        assert_eq!(form.is_visible(ids::FAMILY_INDUSTRY_CONTAINER), Some(false));
        assert_eq!(form.is_visible(ids::LOADING), Some(false));
        assert_eq!(form.value(ids::MBTI).as_deref(), Some(""));
        assert_eq!(form.checkboxes(ids::SUBJECTS).map(|boxes| boxes.len()), Some(10));
        assert_eq!(form.buttons(ids::FAMILY_ADVICE).map(|b| b.len()), Some(3));
    }

    #[test]
    fn select_rejects_unknown_option() {
        let mut form = MemoryForm::survey();
        assert!(form.set_value(ids::MBTI, "INTJ"));
        assert!(!form.set_value(ids::MBTI, "ABCD"));
        assert_eq!(form.value(ids::MBTI).as_deref(), Some(""));
        let options = form.select_options(ids::MBTI).unwrap();
        assert_eq!(options.len(), 16);
        assert!(!options.iter().any(|option| option == "ABCD"));
    }

    #[test]
    fn groups_and_elements_use_separate_namespaces() {
        let form = MemoryForm::survey();
        assert!(form.value(ids::FINANCIAL_INFLUENCE).is_some());
        assert!(form.buttons(ids::FINANCIAL_INFLUENCE).is_some());
        assert!(form.checkboxes(ids::FINANCIAL_INFLUENCE).is_none());
    }

    #[test]
    fn missing_elements_report_none() {
        let mut form = MemoryForm::survey();
        assert!(form.remove_element(ids::NEXT_BUTTON));
        assert_eq!(form.label(ids::NEXT_BUTTON), None);
        assert!(!form.set_enabled(ids::NEXT_BUTTON, false));
        assert!(!form.set_checked("unknown", "x", true));
    }
}
