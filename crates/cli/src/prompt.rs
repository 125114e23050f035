//! Interactive prompts for the values a new post needs.
//!
//! Values given on the command line are used as-is. Missing values are asked
//! for when stdin is a terminal; in batch mode (or without a terminal) a
//! missing required value is an error.

use dialoguer::{FuzzySelect, Input, theme::ColorfulTheme};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, fail on missing values instead of prompting.
    pub batch_mode: bool,
}

impl PromptOptions {
    fn is_interactive(&self) -> bool {
        !self.batch_mode && io::stdin().is_terminal()
    }
}

/// Error type for value collection.
#[derive(Debug)]
pub enum PromptError {
    /// Missing required value in batch mode.
    MissingRequired(&'static str),
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::MissingRequired(name) => {
                write!(
                    f,
                    "missing required value: {name}\n  Hint: pass --{name} or remove --batch"
                )
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Pick a template: the given name, or a fuzzy selection over `names`.
pub fn choose_template(
    provided: Option<String>,
    names: &[&str],
    options: &PromptOptions,
) -> Result<String, PromptError> {
    if let Some(name) = provided {
        return Ok(name);
    }
    if !options.is_interactive() {
        return Err(PromptError::MissingRequired("template"));
    }

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a post template")
        .items(names)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)?;

    selection.map(|idx| names[idx].to_string()).ok_or(PromptError::Cancelled)
}

/// The post title, prompting when not provided. Empty titles are rejected.
pub fn title(provided: Option<String>, options: &PromptOptions) -> Result<String, PromptError> {
    if let Some(title) = non_empty(provided) {
        return Ok(title);
    }
    if !options.is_interactive() {
        return Err(PromptError::MissingRequired("title"));
    }

    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter post title")
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;
    non_empty(Some(value)).ok_or(PromptError::Cancelled)
}

/// The post slug: the provided one, a prompt pre-filled with `default`, or
/// `default` itself when not interactive.
pub fn slug(
    provided: Option<String>,
    default: &str,
    options: &PromptOptions,
) -> Result<String, PromptError> {
    if let Some(slug) = non_empty(provided) {
        return Ok(slug);
    }
    let value = if options.is_interactive() {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter post slug")
            .default(default.to_string())
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error)?
    } else {
        default.to_string()
    };
    non_empty(Some(value)).ok_or(PromptError::MissingRequired("slug"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
