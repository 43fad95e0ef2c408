// SPDX-License-Identifier: MPL-2.0
//! Copy-citation button feedback.
//!
//! After a successful copy the button shows a "copied" label for a while.
//! Each copy starts a new feedback round; only the latest round's expiry
//! restores the original label.

/// Identifies one feedback round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round(u64);

#[derive(Debug, Default)]
pub struct CopyButton {
    rounds: u64,
    showing: Option<Round>,
}

impl CopyButton {
    /// Starts showing the copied label.
    pub fn begin_feedback(&mut self) -> Round {
        self.rounds += 1;
        let round = Round(self.rounds);
        self.showing = Some(round);
        round
    }

    /// Ends `round` if it is still the current one. Returns whether the
    /// original label should be restored.
    pub fn end_feedback(&mut self, round: Round) -> bool {
        if self.showing == Some(round) {
            self.showing = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_showing_feedback(&self) -> bool {
        self.showing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_round_restores_once() {
        let mut button = CopyButton::default();
        let round = button.begin_feedback();
        assert!(button.is_showing_feedback());
        assert!(button.end_feedback(round));
        assert!(!button.end_feedback(round));
    }

    #[test]
    fn older_round_does_not_cut_newer_feedback_short() {
        let mut button = CopyButton::default();
        let first = button.begin_feedback();
        let second = button.begin_feedback();
        assert!(!button.end_feedback(first));
        assert!(button.is_showing_feedback());
        assert!(button.end_feedback(second));
    }
}
