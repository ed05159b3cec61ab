//! The read-dispatch loop. Lines come from a rustyline editor on a terminal or
//! from stdin when `CAREER_WIZARD_CLI_SCRIPT` is set; both feed the same loop.

use std::io::{self, BufRead, Lines, StdinLock};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};

use crate::cli::commands;
use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;
use crate::domain::catalog::{self, FieldKind};

/// Presence of this variable switches the shell to reading commands from
/// stdin without prompts.
pub const SCRIPT_ENV: &str = "CAREER_WIZARD_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    let source = match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<SurveyHelper, DefaultHistory>::new()?;
            editor.set_helper(Some(SurveyHelper));
            LineSource::Terminal(editor)
        }
        CliMode::Script => LineSource::Piped(io::stdin().lock().lines()),
    };
    context.greet();
    drive(&mut context, source)
}

enum Input {
    Line(String),
    Interrupted,
    Closed,
}

enum LineSource {
    Terminal(Editor<SurveyHelper, DefaultHistory>),
    Piped(Lines<StdinLock<'static>>),
}

impl LineSource {
    fn read(&mut self, prompt: &str) -> Result<Input, CliError> {
        match self {
            Self::Terminal(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    Ok(Input::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
                Err(ReadlineError::Eof) => Ok(Input::Closed),
                Err(err) => Err(err.into()),
            },
            Self::Piped(lines) => match lines.next() {
                Some(line) => {
                    let line = line?;
                    let trimmed = line.trim();
                    // `#` starts a comment line.
                    if trimmed.starts_with('#') {
                        return Ok(Input::Line(String::new()));
                    }
                    if !trimmed.is_empty() {
                        output::echo(trimmed);
                    }
                    Ok(Input::Line(line))
                }
                None => Ok(Input::Closed),
            },
        }
    }
}

fn drive(context: &mut ShellContext, mut source: LineSource) -> Result<(), CliError> {
    loop {
        match source.read(&context.prompt())? {
            Input::Line(line) => {
                let tokens = match tokenize(&line) {
                    Ok(tokens) => tokens,
                    Err(err) => {
                        output::warning(format!("Could not read that line: {err}"));
                        continue;
                    }
                };
                let Some((command, args)) = tokens.split_first() else {
                    continue;
                };
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                match context.dispatch(&command.to_lowercase(), command, &args) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => return Ok(()),
                    Err(err) => context.report_error(err)?,
                }
            }
            Input::Interrupted => {
                if context.confirm_exit()? {
                    return Ok(());
                }
            }
            Input::Closed => {
                if context.mode == CliMode::Interactive {
                    output::info("Goodbye. Your answers stay saved.");
                }
                return Ok(());
            }
        }
    }
}

/// Splits a line into words. Quoted option labels stay one word.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(line)
}

/// Tab completion over the survey: command names first, then the field ids a
/// command accepts, then the options of the named field.
struct SurveyHelper;

impl SurveyHelper {
    fn candidates(words: &[&str], partial: &str) -> Vec<String> {
        let needle = partial.trim_start_matches('"').to_lowercase();
        let pool: Vec<String> = match words {
            [] => commands::names().into_iter().map(str::to_string).collect(),
            ["help"] => commands::names().into_iter().map(str::to_string).collect(),
            ["submit"] => vec!["--save-only".to_string()],
            [command] => {
                let Some(kinds) = field_kinds(command) else {
                    return Vec::new();
                };
                catalog::fields()
                    .filter(|field| kinds.contains(&field.kind))
                    .map(|field| field.id.to_string())
                    .collect()
            }
            [command, field, ..] if field_kinds(command).is_some() => {
                let Some(field) = catalog::field(&field.to_lowercase()) else {
                    return Vec::new();
                };
                field
                    .options
                    .iter()
                    .map(|option| {
                        if option.label.contains(' ') {
                            format!("\"{}\"", option.label)
                        } else {
                            option.label.to_string()
                        }
                    })
                    .collect()
            }
            _ => Vec::new(),
        };
        pool.into_iter()
            .filter(|candidate| {
                candidate
                    .trim_start_matches('"')
                    .to_lowercase()
                    .starts_with(&needle)
            })
            .collect()
    }
}

fn field_kinds(command: &str) -> Option<&'static [FieldKind]> {
    match command.to_lowercase().as_str() {
        "pick" => Some(&[FieldKind::Choice, FieldKind::Toggle]),
        "set" => Some(&[FieldKind::Select]),
        "check" | "uncheck" => Some(&[FieldKind::Checkboxes]),
        _ => None,
    }
}

impl Completer for SurveyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let pairs = Self::candidates(&words, &prefix[start..])
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.trim_matches('"').to_string(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for SurveyHelper {
    type Hint = String;
}

impl Highlighter for SurveyHelper {}

impl Validator for SurveyHelper {}

impl Helper for SurveyHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, pairs) = SurveyHelper.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn quoted_values_stay_together() {
        let tokens = tokenize(r#"check strengths "Problem Solving" Logic"#).unwrap();
        assert_eq!(tokens, ["check", "strengths", "Problem Solving", "Logic"]);
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        assert!(tokenize(r#"set mbti "INTJ"#).is_err());
    }

    #[test]
    fn first_word_completes_commands() {
        let (start, names) = complete("res");
        assert_eq!(start, 0);
        assert_eq!(names, ["results", "reset"]);
    }

    #[test]
    fn second_word_completes_fields_the_command_accepts() {
        let (start, names) = complete("set ");
        assert_eq!(start, 4);
        assert_eq!(names, ["mbti", "family_industry_select"]);

        let (_, names) = complete("pick fam");
        assert_eq!(names, ["family_has_industry", "family_advice"]);

        let (_, names) = complete("check s");
        assert_eq!(names, ["subjects", "strengths"]);
    }

    #[test]
    fn later_words_complete_option_labels() {
        let (start, labels) = complete("check strengths Prob");
        assert_eq!(start, 16);
        assert_eq!(labels, ["\"Problem Solving\""]);

        let (_, labels) = complete("set family_industry_select \"Inf");
        assert_eq!(labels, ["\"Information Technology\""]);

        let (_, labels) = complete("pick family_has_industry ");
        assert_eq!(labels, ["Yes", "No"]);
    }

    #[test]
    fn unknown_commands_complete_nothing() {
        assert!(complete("frobnicate ").1.is_empty());
        assert!(complete("show anything").1.is_empty());
        assert_eq!(complete("submit --").1, ["--save-only"]);
    }
}
