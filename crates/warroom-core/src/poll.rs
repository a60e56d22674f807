//! Opinion poll data and local voting state.
//!
//! Votes never leave the process and are not added to the tally: a vote
//! only switches the widget from ballot to results.

use serde::{Deserialize, Serialize};

/// One answer of a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub flag: String,
    pub votes: u64,
}

/// A poll question with ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
}

impl Poll {
    /// Sum of the static vote counts.
    #[must_use]
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Option with the given id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&PollOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Each option paired with its rounded share of the total.
    #[must_use]
    pub fn breakdown(&self) -> Vec<(&PollOption, u8)> {
        let total = self.total_votes();
        self.options
            .iter()
            .map(|o| (o, vote_percentage(o.votes, total)))
            .collect()
    }
}

/// `round(votes / total * 100)`, or 0 for an empty poll.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn vote_percentage(votes: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

/// Vote count with thousands grouped by commas.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Ballot state of one poll widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    selected: Option<String>,
    submitted: bool,
}

impl PollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote for `option_id`.
    ///
    /// Only the first vote for an option that exists in `poll` counts.
    /// Returns whether the state changed.
    pub fn submit_vote(&mut self, poll: &Poll, option_id: &str) -> bool {
        if self.submitted {
            return false;
        }
        if poll.option(option_id).is_none() {
            tracing::debug!(poll = %poll.id, option = option_id, "ignoring vote for unknown option");
            return false;
        }
        self.selected = Some(option_id.to_string());
        self.submitted = true;
        tracing::info!(poll = %poll.id, option = option_id, "vote submitted");
        true
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether `option_id` is the submitted choice.
    #[must_use]
    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.as_deref() == Some(option_id)
    }
}
