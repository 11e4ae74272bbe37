//! User confirmation prompts for destructive operations

use dialoguer::Confirm;
use log::warn;

/// How a confirmation request is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// `--yes` was given
    AssumeYes,
    /// `--batch` without `--yes`: never prompt, decline
    Batch,
    /// Ask on the terminal
    Interactive,
}

impl ConfirmMode {
    pub fn from_flags(assume_yes: bool, batch: bool) -> Self {
        if assume_yes {
            ConfirmMode::AssumeYes
        } else if batch {
            ConfirmMode::Batch
        } else {
            ConfirmMode::Interactive
        }
    }
}

/// Ask the user to confirm `prompt`, defaulting to "no"
pub fn confirm_action(prompt: &str, mode: ConfirmMode) -> dialoguer::Result<bool> {
    match mode {
        ConfirmMode::AssumeYes => Ok(true),
        ConfirmMode::Batch => {
            warn!("Batch mode without --yes, declining: {}", prompt);
            Ok(false)
        }
        ConfirmMode::Interactive => Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact(),
    }
}
