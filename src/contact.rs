//! Contact form state machine and the simulated delivery behind it.

use serde::Serialize;
use thiserror::Error;

/// Milliseconds the simulated delivery takes before resolving.
pub const SEND_DELAY_MS: f64 = 1000.0;

/// Milliseconds a Success or Error banner stays up before returning to Idle.
pub const STATUS_RESET_MS: f64 = 3000.0;

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// True while a submission is in flight; the submit control is disabled.
    pub fn is_submitting(self) -> bool {
        self == SubmitStatus::Submitting
    }

    /// Banner copy for terminal states; `None` renders no banner.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Success => Some("Message sent successfully! I'll get back to you soon."),
            SubmitStatus::Error => {
                Some("Failed to send message. Please try again or contact me directly.")
            }
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

/// The three form fields, updated per keystroke and cleared together after a
/// successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("could not encode message payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Simulated delivery: encodes the draft and logs the payload a real backend
/// would receive. There is no transport behind this.
pub fn deliver(draft: &ContactDraft) -> Result<(), SendError> {
    let payload = serde_json::to_string(draft)?;
    log::info!("contact form submission (simulated): {payload}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_status_defaults_to_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    }

    #[test]
    fn test_only_submitting_disables_the_form() {
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::Idle.is_submitting());
        assert!(!SubmitStatus::Success.is_submitting());
        assert!(!SubmitStatus::Error.is_submitting());
    }

    #[test]
    fn test_banner_shows_only_for_terminal_states() {
        assert!(SubmitStatus::Idle.banner().is_none());
        assert!(SubmitStatus::Submitting.banner().is_none());
        assert!(SubmitStatus::Success
            .banner()
            .is_some_and(|text| text.contains("sent successfully")));
        assert!(SubmitStatus::Error
            .banner()
            .is_some_and(|text| text.contains("Failed to send")));
    }

    #[test]
    fn test_draft_completeness_requires_every_field() {
        assert!(filled_draft().is_complete());
        assert!(!ContactDraft::default().is_complete());

        let mut draft = filled_draft();
        draft.email = "   ".to_string();
        assert!(!draft.is_complete());

        let mut draft = filled_draft();
        draft.message.clear();
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_delivery_resolves_ok_and_keeps_the_draft() {
        let draft = filled_draft();
        assert!(deliver(&draft).is_ok());
        // the caller decides when fields are cleared
        assert_eq!(draft, filled_draft());
    }
}
