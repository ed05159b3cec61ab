//! Guided answering of the current step with dialoguer prompts.

use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::{
    domain::catalog::{self, FieldKind, FieldSpec},
    form::{FormSurface, MemoryForm},
    wizard::Wizard,
};

use super::core::CommandError;

/// Prompts for every visible field of the current step. Fields revealed by a
/// toggle answered along the way are prompted for too.
pub(crate) fn answer_current_step(
    theme: &ColorfulTheme,
    wizard: &mut Wizard<MemoryForm>,
) -> Result<(), CommandError> {
    let Some(step) = catalog::step(wizard.current_step()) else {
        return Ok(());
    };
    for field in step.fields {
        let visible = field
            .parent
            .map(|container| wizard.surface().is_visible(container) == Some(true))
            .unwrap_or(true);
        if !visible {
            continue;
        }
        match field.kind {
            FieldKind::Select => prompt_select(theme, wizard, field)?,
            FieldKind::Checkboxes => prompt_checkboxes(theme, wizard, field)?,
            FieldKind::Choice | FieldKind::Toggle => prompt_buttons(theme, wizard, field)?,
        }
    }
    Ok(())
}

fn labels(field: &FieldSpec) -> Vec<&'static str> {
    field.options.iter().map(|option| option.label).collect()
}

fn prompt_select(
    theme: &ColorfulTheme,
    wizard: &mut Wizard<MemoryForm>,
    field: &FieldSpec,
) -> Result<(), CommandError> {
    let current = wizard.surface().value(field.id).unwrap_or_default();
    let default = field
        .options
        .iter()
        .position(|option| option.value == current)
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(field.label)
        .items(&labels(field))
        .default(default)
        .interact()?;
    wizard.set_field(field.id, field.options[index].value);
    Ok(())
}

fn prompt_checkboxes(
    theme: &ColorfulTheme,
    wizard: &mut Wizard<MemoryForm>,
    field: &FieldSpec,
) -> Result<(), CommandError> {
    let checkboxes = wizard.surface().checkboxes(field.id).unwrap_or_default();
    let defaults: Vec<bool> = field
        .options
        .iter()
        .map(|option| {
            checkboxes
                .iter()
                .any(|checkbox| checkbox.value == option.value && checkbox.checked)
        })
        .collect();
    let picked = MultiSelect::with_theme(theme)
        .with_prompt(format!("{} (space to toggle)", field.label))
        .items(&labels(field))
        .defaults(&defaults)
        .interact()?;
    for (index, option) in field.options.iter().enumerate() {
        let wanted = picked.contains(&index);
        if wanted != defaults[index] {
            wizard.set_checked(field.id, option.value, wanted);
        }
    }
    Ok(())
}

fn prompt_buttons(
    theme: &ColorfulTheme,
    wizard: &mut Wizard<MemoryForm>,
    field: &FieldSpec,
) -> Result<(), CommandError> {
    let default = wizard
        .surface()
        .buttons(field.id)
        .unwrap_or_default()
        .iter()
        .position(|button| button.selected)
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(field.label)
        .items(&labels(field))
        .default(default)
        .interact()?;
    let value = field.options[index].value;
    if field.kind == FieldKind::Toggle {
        wizard.record_toggle(value, field.id);
    } else {
        wizard.record_single_choice(field.id, value);
    }
    Ok(())
}
