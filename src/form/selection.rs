//! Button-group interactions: recording a pick into its hidden input and
//! keeping exactly one button of the group marked as selected.

use tracing::{debug, error};

use crate::domain::{catalog, YesNo};

use super::{fields, FormSurface};

/// Marks `control` as the only selected button of `group`. `None` clears the
/// whole group.
pub fn mark_selected(surface: &mut dyn FormSurface, group: &str, control: Option<usize>) {
    let Some(buttons) = surface.buttons(group) else {
        error!(group, "button group not found");
        return;
    };
    for index in 0..buttons.len() {
        surface.set_button_selected(group, index, Some(index) == control);
    }
}

/// Index of the button in `group` carrying exactly `value`.
pub fn find_control(surface: &dyn FormSurface, group: &str, value: &str) -> Option<usize> {
    surface
        .buttons(group)?
        .iter()
        .position(|button| button.value == value)
}

/// Stores `value` in `field_id` and marks the invoked control selected.
/// Without a control every button of the group ends up unselected, so the
/// marks always agree with the stored value.
pub fn record_single_choice(
    surface: &mut dyn FormSurface,
    field_id: &str,
    value: &str,
    control: Option<usize>,
) -> bool {
    if !fields::set_value(surface, field_id, value) {
        return false;
    }
    mark_selected(surface, field_id, control);
    true
}

/// Stores a yes/no answer and shows the field's dependent container iff the
/// option is "yes". The dependent field keeps its value while hidden.
pub fn record_toggle(
    surface: &mut dyn FormSurface,
    option: &str,
    field_id: &str,
    control: Option<usize>,
) -> bool {
    let answer = YesNo::from_option(option);
    if !record_single_choice(surface, field_id, answer.as_str(), control) {
        return false;
    }
    apply_dependent_visibility(surface, field_id, Some(answer));
    true
}

/// Shows or hides the container that depends on `field_id`, if any.
pub fn apply_dependent_visibility(
    surface: &mut dyn FormSurface,
    field_id: &str,
    answer: Option<YesNo>,
) {
    let Some(container) = catalog::field(field_id).and_then(|field| field.dependent) else {
        return;
    };
    let visible = answer.is_some_and(YesNo::is_yes);
    if !surface.set_visible(container, visible) {
        debug!(container, "dependent container not present");
    }
}
