//! # Feedback banners
//!
//! At most one error and one success banner are visible; showing a new one
//! replaces the old. Errors stay until dismissed or replaced. Success banners
//! expire: every [`Feedback::show_success`] bumps a generation counter, and the
//! task that later expires the banner carries a [`DismissTicket`] for that
//! generation. [`Feedback::expire`] ignores tickets from older generations, so a
//! timer started for a previous message never clears a newer one.

use std::time::Duration;

use crate::timer;

/// Identifies the success banner a scheduled expiry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    pub error: Option<String>,
    pub success: Option<String>,
    generation: u64,
}

impl Feedback {
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show_success(&mut self, message: impl Into<String>) -> DismissTicket {
        self.generation += 1;
        self.success = Some(message.into());
        DismissTicket(self.generation)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Ticket of the currently visible success banner.
    pub fn success_ticket(&self) -> Option<DismissTicket> {
        self.success.as_ref().map(|_| DismissTicket(self.generation))
    }

    /// Clear the success banner if `ticket` is still the current one.
    pub fn expire(&mut self, ticket: DismissTicket) {
        if ticket.0 == self.generation {
            self.success = None;
        }
    }
}

/// Resolve `ticket` once `delay` has elapsed.
pub async fn wait_for_dismissal(ticket: DismissTicket, delay: Duration) -> DismissTicket {
    timer::sleep(delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_message_overwrites() {
        let mut feedback = Feedback::default();
        feedback.show_error("first");
        feedback.show_error("second");
        assert_eq!(feedback.error.as_deref(), Some("second"));

        feedback.dismiss_error();
        assert!(feedback.error.is_none());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_banner() {
        let mut feedback = Feedback::default();
        let old = feedback.show_success("Name updated");
        let new = feedback.show_success("Photo updated");
        assert_ne!(old, new);

        feedback.expire(old);
        assert_eq!(feedback.success.as_deref(), Some("Photo updated"));

        feedback.expire(new);
        assert!(feedback.success.is_none());
    }

    #[test]
    fn test_ticket_only_while_visible() {
        let mut feedback = Feedback::default();
        assert!(feedback.success_ticket().is_none());

        let ticket = feedback.show_success("Saved");
        assert_eq!(feedback.success_ticket(), Some(ticket));

        feedback.dismiss_success();
        assert!(feedback.success_ticket().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissal_waits_for_delay() {
        let mut feedback = Feedback::default();
        let ticket = feedback.show_success("Saved");
        let delay = Duration::from_secs(3);

        let early = tokio::time::timeout(Duration::from_secs(2), wait_for_dismissal(ticket, delay)).await;
        assert!(early.is_err());
        assert!(feedback.success.is_some());

        let start = tokio::time::Instant::now();
        let due = wait_for_dismissal(ticket, delay).await;
        assert!(start.elapsed() >= delay);

        feedback.expire(due);
        assert!(feedback.success.is_none());
    }
}
