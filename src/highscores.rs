//! Session score tracking
//!
//! Kept in memory for the life of the process only; nothing is written to disk.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of finished runs to remember
pub const MAX_RUN_HISTORY: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based index of the run within this process
    pub run: u32,
    /// Pipes cleared
    pub score: u32,
    /// Ticks survived
    pub ticks: u64,
}

/// Best score plus a short history of recent runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    best: u32,
    runs_played: u32,
    recent: VecDeque<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score seen so far (never decreases)
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Number of runs recorded so far
    pub fn runs_played(&self) -> u32 {
        self.runs_played
    }

    /// Recent runs, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &RunRecord> {
        self.recent.iter()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record_run(&mut self, score: u32, ticks: u64) -> bool {
        self.runs_played += 1;
        self.recent.push_back(RunRecord {
            run: self.runs_played,
            score,
            ticks,
        });
        if self.recent.len() > MAX_RUN_HISTORY {
            self.recent.pop_front();
        }

        if score > self.best {
            log::info!("New best score: {} (was {})", score, self.best);
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let scores = HighScores::new();
        assert_eq!(scores.best(), 0);
        assert_eq!(scores.runs_played(), 0);
        assert_eq!(scores.recent().count(), 0);
    }

    #[test]
    fn test_best_only_moves_up() {
        let mut scores = HighScores::new();
        assert!(scores.record_run(4, 300));
        assert!(!scores.record_run(2, 100));
        assert!(!scores.record_run(4, 310));
        assert!(scores.record_run(9, 800));
        assert!(!scores.record_run(0, 20));
        assert_eq!(scores.best(), 9);
        assert_eq!(scores.runs_played(), 5);
    }

    #[test]
    fn test_zero_score_is_not_a_best() {
        let mut scores = HighScores::new();
        assert!(!scores.record_run(0, 30));
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut scores = HighScores::new();
        for i in 0..25 {
            scores.record_run(i, u64::from(i) * 10);
        }
        let runs: Vec<u32> = scores.recent().map(|r| r.run).collect();
        assert_eq!(runs.len(), MAX_RUN_HISTORY);
        assert_eq!(runs.first(), Some(&16));
        assert_eq!(scores.recent().last().map(|r| r.score), Some(24));
    }
}
