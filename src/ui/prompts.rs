//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Prompt for text input.
///
/// Returns the entered text, or the default when the user enters
/// nothing and a default exists.
///
/// # Errors
///
/// Returns `PromptError::NotInteractive` if not in interactive mode.
pub fn input(
    message: &str,
    default: Option<&str>,
    interactive: bool,
) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    match default {
        Some(d) if !d.is_empty() => print!("{} [{}]: ", message, d),
        _ => print!("{}: ", message),
    }
    io::stdout()
        .flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let entered = line.trim();
    if entered.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(entered.to_string())
    }
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they
/// decline. An empty answer takes the default.
///
/// # Errors
///
/// Returns `PromptError::NotInteractive` if not in interactive mode.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{} {} ", message, hint);
    io::stdout()
        .flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    match line.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_refuses_non_interactive() {
        assert!(matches!(
            input("Plugin name", None, false),
            Err(PromptError::NotInteractive)
        ));
    }

    #[test]
    fn confirm_refuses_non_interactive() {
        assert!(matches!(
            confirm("Continue?", true, false),
            Err(PromptError::NotInteractive)
        ));
    }
}
