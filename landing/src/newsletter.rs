//! Footer newsletter signup. Same simulated-delay shape as the contact form,
//! with a single email field.

use crate::contact::is_valid_email;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    Submitting,
    Subscribed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFlow {
    phase: SignupPhase,
    pub email: String,
    error: Option<&'static str>,
}

impl NewsletterFlow {
    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    /// Start a signup. Returns the address to subscribe, or `None` when the
    /// input is blank, invalid, or a signup is already running.
    pub fn submit(&mut self) -> Option<String> {
        if self.phase != SignupPhase::Idle {
            return None;
        }
        let email = self.email.trim();
        if email.is_empty() {
            return None;
        }
        if !is_valid_email(email) {
            self.error = Some("Invalid email address");
            return None;
        }
        self.phase = SignupPhase::Submitting;
        Some(email.to_owned())
    }

    pub fn subscribed(&mut self) {
        if self.phase == SignupPhase::Submitting {
            tracing::info!("newsletter subscription accepted");
            self.email.clear();
            self.phase = SignupPhase::Subscribed;
        }
    }

    pub fn reset(&mut self) {
        if self.phase == SignupPhase::Subscribed {
            self.phase = SignupPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_email_is_ignored() {
        let mut flow = NewsletterFlow::default();
        flow.set_email("   ".into());
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.phase(), SignupPhase::Idle);
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn invalid_email_shows_error_until_edited() {
        let mut flow = NewsletterFlow::default();
        flow.set_email("nope".into());
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.error(), Some("Invalid email address"));
        flow.set_email("nope@example.com".into());
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn signup_cycle() {
        let mut flow = NewsletterFlow::default();
        flow.set_email(" reader@example.com ".into());
        assert_eq!(flow.submit().as_deref(), Some("reader@example.com"));
        assert_eq!(flow.phase(), SignupPhase::Submitting);
        assert_eq!(flow.submit(), None);

        flow.subscribed();
        assert_eq!(flow.phase(), SignupPhase::Subscribed);
        assert!(flow.email.is_empty());

        flow.reset();
        assert_eq!(flow.phase(), SignupPhase::Idle);
    }
}
