//! Command table and handlers for the survey shell.

use once_cell::sync::Lazy;

use crate::{
    domain::{
        catalog::{self, FieldKind, FieldSpec},
        SubmitMode,
    },
    form::FormSurface,
    wizard::Transition,
};

use super::core::{closest, CliMode, CommandError, CommandResult, ShellContext};
use super::output;
use super::prompts;
use super::view;

pub(crate) type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub(crate) struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

static COMMANDS: Lazy<Vec<CommandEntry>> = Lazy::new(|| {
    vec![
        CommandEntry::new("show", "Show the current step", "show", cmd_show),
        CommandEntry::new(
            "next",
            "Go to the next step, or submit on the last one",
            "next",
            cmd_next,
        ),
        CommandEntry::new("prev", "Go back one step", "prev", cmd_prev),
        CommandEntry::new("back", "Alias for `prev`", "back", cmd_prev),
        CommandEntry::new(
            "pick",
            "Choose one of a button group's options",
            "pick <field> <option>",
            cmd_pick,
        ),
        CommandEntry::new(
            "set",
            "Choose a value from a dropdown",
            "set <field> <value>",
            cmd_set,
        ),
        CommandEntry::new(
            "check",
            "Tick one or more checkboxes",
            "check <field> <option> [option...]",
            cmd_check,
        ),
        CommandEntry::new(
            "uncheck",
            "Clear one or more checkboxes",
            "uncheck <field> <option> [option...]",
            cmd_uncheck,
        ),
        CommandEntry::new(
            "answer",
            "Answer the current step with guided prompts",
            "answer",
            cmd_answer,
        ),
        CommandEntry::new(
            "submit",
            "Send your answers from the last step",
            "submit [--save-only]",
            cmd_submit,
        ),
        CommandEntry::new("status", "Show the status message", "status", cmd_status),
        CommandEntry::new(
            "results",
            "Show the last suggestions",
            "results",
            cmd_results,
        ),
        CommandEntry::new(
            "reset",
            "Forget every answer and start over",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Leave the survey", "exit", cmd_exit),
        CommandEntry::new("quit", "Alias for `exit`", "quit", cmd_exit),
    ]
});

pub(crate) fn lookup(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

pub(crate) fn names() -> Vec<&'static str> {
    COMMANDS.iter().map(|entry| entry.name).collect()
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_step();
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.next() {
        Transition::Moved(_) => {
            context.show_step();
            Ok(())
        }
        Transition::Blocked(_) | Transition::Stayed(_) => Err(CommandError::Message(
            "Answer the required questions on this step first.".into(),
        )),
        Transition::Submit => submit(context, SubmitMode::Suggest),
    }
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.prev() {
        Transition::Moved(_) => context.show_step(),
        _ => output::warning("Already on the first step."),
    }
    Ok(())
}

fn cmd_pick(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (field, value) = field_and_value(context, args, "pick <field> <option>")?;
    let recorded = match field.kind {
        FieldKind::Choice => context.wizard.record_single_choice(field.id, value),
        FieldKind::Toggle => context.wizard.record_toggle(value, field.id),
        FieldKind::Select => {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` is a dropdown; use `set {} <value>`.",
                field.id, field.id
            )))
        }
        FieldKind::Checkboxes => {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` is a checkbox list; use `check {} <option>`.",
                field.id, field.id
            )))
        }
    };
    if !recorded {
        return Err(CommandError::Message(format!(
            "Could not record `{value}` for `{}`.",
            field.id
        )));
    }
    context.show_step();
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (field, value) = field_and_value(context, args, "set <field> <value>")?;
    if field.kind != FieldKind::Select {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not a dropdown; use `{}`.",
            field.id,
            if field.kind == FieldKind::Checkboxes {
                "check"
            } else {
                "pick"
            }
        )));
    }
    if !context.wizard.set_field(field.id, value) {
        return Err(CommandError::Message(format!(
            "`{value}` was not accepted by `{}`.",
            field.id
        )));
    }
    context.show_step();
    Ok(())
}

fn cmd_check(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    toggle_checkboxes(context, args, true)
}

fn cmd_uncheck(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    toggle_checkboxes(context, args, false)
}

fn toggle_checkboxes(context: &mut ShellContext, args: &[&str], checked: bool) -> CommandResult {
    let usage = if checked {
        "check <field> <option> [option...]"
    } else {
        "uncheck <field> <option> [option...]"
    };
    let (name, options) = match args.split_first() {
        Some((name, options)) if !options.is_empty() => (*name, options),
        _ => return Err(usage_error(usage)),
    };
    let field = field_on_current_step(context, name)?;
    if field.kind != FieldKind::Checkboxes {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` has no checkboxes.",
            field.id
        )));
    }
    let values = options
        .iter()
        .map(|option| resolve_value(field, option))
        .collect::<Result<Vec<_>, _>>()?;
    for value in values {
        context.wizard.set_checked(field.id, value, checked);
    }
    context.show_step();
    Ok(())
}

fn cmd_answer(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Script {
        return Err(CommandError::Message(
            "`answer` needs an interactive terminal; use pick, set or check instead.".into(),
        ));
    }
    prompts::answer_current_step(&context.theme, &mut context.wizard)?;
    context.show_step();
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mode = match args {
        [] => SubmitMode::Suggest,
        ["--save-only"] => SubmitMode::SaveOnly,
        _ => return Err(usage_error("submit [--save-only]")),
    };
    if !context.wizard.is_last_step() {
        return Err(CommandError::Message(
            "Submission happens from the last step; use `next` to get there.".into(),
        ));
    }
    submit(context, mode)
}

fn submit(context: &mut ShellContext, mode: SubmitMode) -> CommandResult {
    let outcome = context.wizard.submit(context.transport.as_ref(), mode);
    output::banner(&outcome.banner());
    if outcome.was_sent() {
        context.show_step();
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.status() {
        Some(banner) => output::banner(&banner),
        None => output::info("No status message."),
    }
    Ok(())
}

fn cmd_results(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(view::render_results(context.wizard.surface()));
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.reset();
    output::success("All answers cleared.");
    context.show_step();
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match lookup(&name.to_lowercase()) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                output::info(format!("  {}", entry.description));
                output::info(format!("  Usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    for entry in COMMANDS.iter() {
        output::info(format!("  {:<10} {}", entry.name, entry.description));
    }
    output::hint("Use `help <command>` for details.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}

/// Splits `<field> <value words...>`; multi-word values may also be quoted.
fn field_and_value(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
) -> Result<(&'static FieldSpec, &'static str), CommandError> {
    let (name, rest) = match args.split_first() {
        Some((name, rest)) if !rest.is_empty() => (*name, rest),
        _ => return Err(usage_error(usage)),
    };
    let field = field_on_current_step(context, name)?;
    let value = resolve_value(field, &rest.join(" "))?;
    Ok((field, value))
}

fn field_on_current_step(
    context: &ShellContext,
    name: &str,
) -> Result<&'static FieldSpec, CommandError> {
    let id = name.to_lowercase();
    let Some(field) = catalog::field(&id) else {
        let mut message = format!("Unknown field `{name}`.");
        if let Some(best) = closest(name, catalog::fields().map(|field| field.id)) {
            message.push_str(&format!(" Did you mean `{best}`?"));
        }
        return Err(CommandError::InvalidArguments(message));
    };

    let current = context.wizard.current_step();
    let on_step = catalog::step(current)
        .map(|step| step.fields.iter().any(|candidate| candidate.id == field.id))
        .unwrap_or(false);
    if !on_step {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not on this step.",
            field.id
        )));
    }
    if let Some(container) = field.parent {
        if context.wizard.surface().is_visible(container) != Some(true) {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` is hidden right now.",
                field.id
            )));
        }
    }
    Ok(field)
}

fn resolve_value(field: &FieldSpec, input: &str) -> Result<&'static str, CommandError> {
    catalog::resolve_option(field, input).ok_or_else(|| {
        let mut message = format!("`{input}` is not an option for `{}`.", field.id);
        let labels = field.options.iter().map(|option| option.label);
        if let Some(best) = closest(input, labels) {
            message.push_str(&format!(" Did you mean `{best}`?"));
        }
        CommandError::InvalidArguments(message)
    })
}
