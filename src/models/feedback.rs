//! Transient notification banner.

use serde::Serialize;

/// Styling of the feedback banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    #[default]
    Info,
}

/// Proof that a banner was shown; only the newest ticket can dismiss it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct DismissTicket(u64);

/// Single-slot, auto-dismissing banner.
///
/// Every [`show`](Self::show) bumps a generation counter, so a dismiss timer
/// armed for an older banner finds a stale ticket and does nothing.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
    pub visible: bool,
    #[serde(skip)]
    generation: u64,
}

impl Feedback {
    pub fn show(&mut self, message: impl Into<String>, kind: FeedbackKind) -> DismissTicket {
        self.generation += 1;
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        DismissTicket(self.generation)
    }

    /// Hide the banner if `ticket` belongs to the one currently shown.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut banner = Feedback::default();
        assert!(!banner.visible);

        let ticket = banner.show("saved", FeedbackKind::Success);
        assert!(banner.visible);
        assert_eq!(banner.kind, FeedbackKind::Success);

        assert!(banner.dismiss(ticket));
        assert!(!banner.visible);
        assert!(!banner.dismiss(ticket));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut banner = Feedback::default();
        let old = banner.show("first", FeedbackKind::Info);
        let new = banner.show("second", FeedbackKind::Info);

        assert!(!banner.dismiss(old));
        assert!(banner.visible);
        assert_eq!(banner.message, "second");
        assert!(banner.dismiss(new));
    }
}
