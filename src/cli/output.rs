//! Terminal messages. Each tone carries a text label so plain output (scripts,
//! `plain_output` in the config) stays readable once colors are switched off.

use std::fmt;

use colored::Colorize;

use crate::form::{StatusBanner, StatusKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Hint,
}

impl Tone {
    fn prefix(self) -> &'static str {
        match self {
            Tone::Plain => "",
            Tone::Success => "[ok] ",
            Tone::Warning => "[!] ",
            Tone::Error => "[x] ",
            Tone::Hint => "hint: ",
        }
    }
}

impl From<StatusKind> for Tone {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Info => Tone::Plain,
            StatusKind::Success => Tone::Success,
            StatusKind::Error => Tone::Error,
        }
    }
}

/// Turns colors off for the whole process, or hands the decision back to
/// `colored`'s own terminal and `NO_COLOR` detection.
pub fn use_plain_output(plain: bool) {
    if plain {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub(crate) fn styled(tone: Tone, message: impl fmt::Display) -> String {
    let text = format!("{}{message}", tone.prefix());
    match tone {
        Tone::Plain => text,
        Tone::Success => text.bright_green().to_string(),
        Tone::Warning => text.bright_yellow().to_string(),
        Tone::Error => text.bright_red().to_string(),
        Tone::Hint => text.bright_cyan().to_string(),
    }
}

pub(crate) fn heading(title: impl fmt::Display) -> String {
    format!("=== {} ===", title.to_string().trim()).bold().to_string()
}

pub fn info(message: impl fmt::Display) {
    println!("{}", styled(Tone::Plain, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", styled(Tone::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", styled(Tone::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    println!("{}", styled(Tone::Error, message));
}

pub fn hint(message: impl fmt::Display) {
    println!("{}", styled(Tone::Hint, message));
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", heading(title));
}

/// Repeats a scripted command line ahead of its output.
pub fn echo(line: &str) {
    println!("{}", format!("> {line}").dimmed());
}

pub fn banner(banner: &StatusBanner) {
    println!("{}", styled(banner.kind.into(), &banner.text));
}
