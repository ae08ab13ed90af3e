//! Poll tallying and vote submission.
//!
//! A poll post carries its configured options and a vote log of
//! (voter, answer) pairs. Counts and percentages are never maintained
//! incrementally: the full tally is recomputed from the log on every
//! save, so stored numbers cannot drift from the authoritative log.

use chrono::{Days, NaiveDate};
use ess_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured poll option with its derived tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOptionTally {
    /// Option label as shown to voters.
    pub option: String,
    /// Number of log entries choosing this option.
    pub num_of_vote: u64,
    /// Share of the total log, in percent, rounded to two decimals.
    pub percentage: f64,
}

/// One (voter, answer) pair. At most one entry per voter per post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollLogEntry {
    /// Voting user.
    pub user: String,
    /// Chosen option label.
    pub answer: String,
}

/// Poll slice of a feed post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollPost {
    /// Configured options with their current tallies.
    pub options: Vec<PollOptionTally>,
    /// Authoritative vote log, one entry per voter.
    pub log: Vec<PollLogEntry>,
    /// Day the poll opened.
    pub poll_start_date: Option<NaiveDate>,
    /// Last day votes are accepted.
    pub poll_end_date: Option<NaiveDate>,
}

/// Compute per-option vote counts and percentages over a vote log.
///
/// Every configured option appears in the result, with zero counts when
/// nobody chose it. Percentages are shares of the full log length; when
/// the log is empty every percentage is zero.
#[must_use]
pub fn tally(options: &[String], log: &[PollLogEntry]) -> Vec<PollOptionTally> {
    let total = log.len();

    let mut answers: HashMap<&str, u64> = HashMap::new();
    for entry in log {
        *answers.entry(entry.answer.as_str()).or_insert(0) += 1;
    }

    options
        .iter()
        .map(|option| {
            let num_of_vote = answers.get(option.as_str()).copied().unwrap_or(0);
            let percentage = if total > 0 {
                round2(100.0 * num_of_vote as f64 / total as f64)
            } else {
                0.0
            };
            PollOptionTally {
                option: option.clone(),
                num_of_vote,
                percentage,
            }
        })
        .collect()
}

/// Round to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PollPost {
    /// Create a poll running from `today` for `duration_days` days.
    pub fn new(options: Vec<String>, duration_days: u64, today: NaiveDate) -> AppResult<Self> {
        if options.len() < 2 {
            return Err(AppError::Validation(
                "Poll must have at least 2 options".to_string(),
            ));
        }
        for option in &options {
            if option.trim().is_empty() {
                return Err(AppError::Validation(
                    "Poll options cannot be empty".to_string(),
                ));
            }
        }

        let poll_end_date = today
            .checked_add_days(Days::new(duration_days))
            .ok_or_else(|| AppError::Validation("Poll duration out of range".to_string()))?;

        Ok(Self {
            options: tally(&options, &[]),
            log: Vec::new(),
            poll_start_date: Some(today),
            poll_end_date: Some(poll_end_date),
        })
    }

    /// Record one voter's answer and refresh the tallies.
    ///
    /// A voter's resubmission overwrites their prior entry in place, so
    /// the log never holds two entries for the same voter. Votes after
    /// `poll_end_date` are rejected.
    pub fn submit_vote(&mut self, voter: &str, answer: &str, today: NaiveDate) -> AppResult<()> {
        if self.poll_end_date.is_some_and(|end| end < today) {
            tracing::debug!(voter, "vote rejected, poll is ended");
            return Err(AppError::Forbidden("Poll is ended".to_string()));
        }

        match self.log.iter_mut().find(|entry| entry.user == voter) {
            Some(entry) => entry.answer = answer.to_string(),
            None => self.log.push(PollLogEntry {
                user: voter.to_string(),
                answer: answer.to_string(),
            }),
        }

        self.revalidate();
        Ok(())
    }

    /// Recompute all option tallies from the log.
    ///
    /// Runs on every save of the parent post, mirroring the document
    /// validate hook of the host platform.
    pub fn revalidate(&mut self) {
        let labels: Vec<String> = self.options.iter().map(|o| o.option.clone()).collect();
        self.options = tally(&labels, &self.log);
    }

    /// Total number of votes in the log.
    #[must_use]
    pub fn total_votes(&self) -> usize {
        self.log.len()
    }
}
