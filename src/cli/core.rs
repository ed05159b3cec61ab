//! Shell state and error types shared by the interactive and script front
//! ends.

use std::{io, time::Instant};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::WizardError,
    form::MemoryForm,
    storage::JsonFileStore,
    submit::{HttpTransport, Transport, TransportError},
    wizard::{Wizard, WizardSettings},
};

use super::commands;
use super::output;
use super::view;

/// Fatal shell errors. Anything here ends the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] WizardError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Per-command failures. These are reported and the shell keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub wizard: Wizard<MemoryForm>,
    pub transport: Box<dyn Transport>,
}

impl ShellContext {
    /// Loads configuration from the data directory (writing the defaults on
    /// first run), opens the snapshot store and restores any saved answers.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_init()?.with_env_overrides();
        let store = JsonFileStore::new(config.resolve_storage_dir(manager.base_dir()))?;
        let wizard = Wizard::start(
            MemoryForm::survey(),
            Box::new(store),
            WizardSettings::from(&config),
        );
        let transport = HttpTransport::new()?;
        Ok(Self::with_parts(mode, config, wizard, Box::new(transport)))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        wizard: Wizard<MemoryForm>,
        transport: Box<dyn Transport>,
    ) -> Self {
        output::use_plain_output(config.plain_output || mode == CliMode::Script);
        Self {
            mode,
            theme: ColorfulTheme::default(),
            config,
            wizard,
            transport,
        }
    }

    pub(crate) fn greet(&mut self) {
        output::section("Career survey");
        if self.wizard.restored() {
            output::info("Restored your saved answers.");
        }
        self.show_step();
        output::hint("Type `help` to list commands.");
    }

    pub(crate) fn prompt(&self) -> String {
        let step = self.wizard.current_step();
        let title = crate::domain::catalog::step(step)
            .map(|spec| spec.title)
            .unwrap_or("?");
        format!("survey [{}/{} {}]> ", step + 1, self.wizard.step_count(), title)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        self.wizard.expire_status(Instant::now());
        match commands::lookup(command) {
            Some(entry) => match (entry.handler)(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Renders whatever the surface currently shows: the active step while
    /// the form is visible, the results otherwise.
    pub(crate) fn show_step(&mut self) {
        self.wizard.expire_status(Instant::now());
        output::info(view::render(&self.wizard));
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = closest(input, commands::names()) {
            output::hint(format!("Did you mean `{best}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit the survey? Your answers stay saved.")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Dialoguer(err) => Err(CliError::Prompt(err)),
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}

/// Closest candidate within an edit distance of three.
pub(crate) fn closest<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(&candidate.to_lowercase(), &needle), candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
