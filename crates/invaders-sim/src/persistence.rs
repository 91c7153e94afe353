//! High-score persistence port.
//!
//! The engine only offers a final score when a round ends; whether and where
//! it is stored is up to the collaborator behind this trait.

/// Stores the best score seen so far.
pub trait HighScoreStore {
    /// Best score on record, 0 if none.
    fn best(&self) -> u32;

    /// Offer a final score. Returns true if it replaced the stored best.
    fn offer(&mut self, score: u32) -> bool;
}

/// Keeps the best score in memory. Only a strictly greater score replaces it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHighScore {
    best: u32,
}

impl InMemoryHighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for InMemoryHighScore {
    fn best(&self) -> u32 {
        self.best
    }

    fn offer(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}
