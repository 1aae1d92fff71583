//! # Review Sessions
//!
//! A review is one finite pass over a shuffled snapshot of the visible collection.
//!
//! ```text
//!            start (non-empty)              end
//!   Idle ─────────────────────────▶ Active ─────▶ Idle
//!                                   │   ▲
//!                     flip/correct/ │   │
//!                     wrong         └───┘
//! ```
//!
//! While Active the session owns its working list: a uniformly random permutation of
//! the cards visible at start, truncated to the configured [`ReviewLimit`]. The list is
//! never re-synced with the store, so edits elsewhere cannot shift the cursor.
//!
//! Invariants while Active:
//! - `position <= working list length`
//! - `correct + wrong == position`
//!
//! Once `position` reaches the end the session is *exhausted*: still Active, but
//! flip/correct/wrong fail with `ReviewExhausted` until it is ended.

use crate::error::{FlashnotesError, Result};
use crate::model::{Face, Flashcard};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Maximum number of cards per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewLimit {
    #[default]
    Unlimited,
    Cards(NonZeroUsize),
}

impl ReviewLimit {
    /// `None` and `Some(0)` both mean no limit.
    pub fn from_option(limit: Option<usize>) -> Self {
        match limit.and_then(NonZeroUsize::new) {
            Some(n) => ReviewLimit::Cards(n),
            None => ReviewLimit::Unlimited,
        }
    }

    pub fn as_option(self) -> Option<usize> {
        match self {
            ReviewLimit::Unlimited => None,
            ReviewLimit::Cards(n) => Some(n.get()),
        }
    }

    fn apply(self, available: usize) -> usize {
        match self {
            ReviewLimit::Unlimited => available,
            ReviewLimit::Cards(n) => available.min(n.get()),
        }
    }
}

impl fmt::Display for ReviewLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewLimit::Unlimited => write!(f, "all"),
            ReviewLimit::Cards(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// The card under the cursor, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewCard {
    pub card: Flashcard,
    pub face: Face,
    /// 1-based position within the working list
    pub number: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewProgress {
    pub position: usize,
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
}

impl ReviewProgress {
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub progress: ReviewProgress,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

#[derive(Debug)]
struct ActiveReview {
    cards: Vec<Flashcard>,
    position: usize,
    face: Face,
    correct: usize,
    wrong: usize,
    started_at: DateTime<Utc>,
}

impl ActiveReview {
    fn progress(&self) -> ReviewProgress {
        ReviewProgress {
            position: self.position,
            total: self.cards.len(),
            correct: self.correct,
            wrong: self.wrong,
        }
    }

    fn current(&self) -> Option<ReviewCard> {
        self.cards.get(self.position).map(|card| ReviewCard {
            card: card.clone(),
            face: self.face,
            number: self.position + 1,
            total: self.cards.len(),
        })
    }
}

pub struct ReviewSession {
    limit: ReviewLimit,
    active: Option<ActiveReview>,
    rng: StdRng,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A session whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            limit: ReviewLimit::Unlimited,
            active: None,
            rng,
        }
    }

    pub fn limit(&self) -> ReviewLimit {
        self.limit
    }

    /// Applies from the next [`start`](Self::start) on.
    pub fn set_limit(&mut self, limit: ReviewLimit) {
        debug!(%limit, "review limit set");
        self.limit = limit;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn working_list(&self) -> Option<&[Flashcard]> {
        self.active.as_ref().map(|a| a.cards.as_slice())
    }

    pub fn progress(&self) -> Option<ReviewProgress> {
        self.active.as_ref().map(ActiveReview::progress)
    }

    pub fn current(&self) -> Option<ReviewCard> {
        self.active.as_ref().and_then(ActiveReview::current)
    }

    /// Snapshot, shuffle and truncate `visible`, then present its first card.
    pub fn start(&mut self, mut visible: Vec<Flashcard>) -> Result<ReviewCard> {
        if visible.is_empty() {
            return Err(FlashnotesError::EmptyDeck);
        }

        let available = visible.len();
        visible.shuffle(&mut self.rng);
        visible.truncate(self.limit.apply(available));

        let active = ActiveReview {
            cards: visible,
            position: 0,
            face: Face::Question,
            correct: 0,
            wrong: 0,
            started_at: Utc::now(),
        };
        info!(
            cards = active.cards.len(),
            available,
            limit = %self.limit,
            "review started"
        );
        let first = active.current().ok_or(FlashnotesError::EmptyDeck)?;
        self.active = Some(active);
        Ok(first)
    }

    /// Turns the current card over. Does nothing when no review is running.
    pub fn flip(&mut self) -> Result<Option<ReviewCard>> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        if active.position >= active.cards.len() {
            return Err(FlashnotesError::ReviewExhausted);
        }
        active.face = active.face.flipped();
        Ok(active.current())
    }

    /// Scores the current card and moves past it. Does nothing when no review is running.
    pub fn score(&mut self, outcome: Outcome) -> Result<Option<ReviewProgress>> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        if active.position >= active.cards.len() {
            return Err(FlashnotesError::ReviewExhausted);
        }
        match outcome {
            Outcome::Correct => active.correct += 1,
            Outcome::Wrong => active.wrong += 1,
        }
        active.position += 1;
        active.face = Face::Question;
        debug!(?outcome, position = active.position, "card scored");
        Ok(Some(active.progress()))
    }

    /// Ends the session whatever its state, returning the tally if one was running.
    pub fn end(&mut self) -> Option<ReviewSummary> {
        let active = self.active.take()?;
        let summary = ReviewSummary {
            progress: active.progress(),
            started_at: active.started_at,
            ended_at: Utc::now(),
        };
        info!(
            reviewed = summary.progress.position,
            total = summary.progress.total,
            correct = summary.progress.correct,
            wrong = summary.progress.wrong,
            "review ended"
        );
        Some(summary)
    }
}
