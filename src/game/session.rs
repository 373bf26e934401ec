//! A single game: hidden target, revealed clues and the guesses made so far
//!
//! The session is the only owner of mutable game state. Every method either
//! applies its whole change or leaves the state untouched.

use super::error::GameError;
use super::matcher::{self, Excluded, SUGGESTION_LIMIT};
use crate::core::{
    Bearing, ClueCategory, ClueValue, Country, bearing_arrow, distance_km, is_revealed,
    reveal_next,
};
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No roster yet, no target chosen
    Loading,
    InProgress,
    Won,
}

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The session has no target yet
    NotStarted,
    /// The game is already won; restart first
    AlreadyWon,
    /// The text matches no country that is still in play
    Unmatched,
    /// The text names a country that was already guessed
    AlreadyGuessed(String),
    /// Wrong country; `revealed` is the clue uncovered by this miss, if any were left
    Miss {
        country: String,
        revealed: Option<ClueCategory>,
    },
    Correct { country: String, tries: usize },
}

impl GuessOutcome {
    /// Whether the guess was recorded in the session
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Miss { .. } | Self::Correct { .. })
    }
}

/// Direction and distance from a guessed country to the hidden target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub bearing: Bearing,
    pub distance_km: u32,
}

/// Game state for one player
pub struct GameSession {
    roster: Vec<Country>,
    target: Option<usize>,
    revealed: Vec<ClueCategory>,
    guessed: Vec<usize>,
    won: bool,
    rng: StdRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session in the `Loading` state with an OS-seeded generator
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a session whose target choices are reproducible
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            roster: Vec::new(),
            target: None,
            revealed: Vec::new(),
            guessed: Vec::new(),
            won: false,
            rng,
        }
    }

    /// Install the roster and pick a random target
    ///
    /// # Errors
    /// - `GameError::AlreadyStarted` if the session left `Loading`
    /// - `GameError::EmptyRoster` if `roster` is empty; the session stays in `Loading`
    /// - `GameError::DuplicateCountry` if two entries share an official name
    pub fn start(&mut self, roster: Vec<Country>) -> Result<(), GameError> {
        if self.target.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        check_roster(&roster)?;

        self.roster = roster;
        let target = self.pick_target(None).ok_or(GameError::EmptyRoster)?;
        self.begin_round(target);
        info!(countries = self.roster.len(), "game started");
        Ok(())
    }

    /// Install the roster with a chosen target (by official name)
    ///
    /// # Errors
    /// As [`start`](Self::start), plus `GameError::UnknownTarget` when no
    /// roster entry has that official name.
    pub fn start_with_target(
        &mut self,
        roster: Vec<Country>,
        official_name: &str,
    ) -> Result<(), GameError> {
        if self.target.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        check_roster(&roster)?;

        let target = roster
            .iter()
            .position(|c| c.official_name() == official_name)
            .ok_or_else(|| GameError::UnknownTarget(official_name.to_string()))?;

        self.roster = roster;
        self.begin_round(target);
        info!(countries = self.roster.len(), "game started with fixed target");
        Ok(())
    }

    /// Start a new round with a new random target
    ///
    /// The previous target is not picked again unless it is the only country.
    ///
    /// # Errors
    /// Returns `GameError::NotStarted` while the session is still `Loading`.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let previous = self.target.ok_or(GameError::NotStarted)?;
        let target = self.pick_target(Some(previous)).ok_or(GameError::EmptyRoster)?;
        self.begin_round(target);
        info!("game restarted");
        Ok(())
    }

    fn pick_target(&mut self, previous: Option<usize>) -> Option<usize> {
        let skip = previous.filter(|_| self.roster.len() > 1);
        let candidates: Vec<usize> = (0..self.roster.len()).filter(|&i| Some(i) != skip).collect();
        candidates.choose(&mut self.rng).copied()
    }

    fn begin_round(&mut self, target: usize) {
        debug!(target_index = target, "target selected");
        self.target = Some(target);
        self.revealed = reveal_next(&[]);
        self.guessed.clear();
        self.won = false;
    }

    /// Submit a guess as free text
    ///
    /// Unknown, blank, or repeated guesses leave the session unchanged. A wrong
    /// guess is recorded and reveals the next clue. The right guess is recorded
    /// and wins the game without revealing anything.
    pub fn submit_guess(&mut self, query: &str) -> GuessOutcome {
        let Some(target) = self.target else {
            return GuessOutcome::NotStarted;
        };
        if self.won {
            return GuessOutcome::AlreadyWon;
        }

        if let Some(&repeat) = self
            .guessed
            .iter()
            .find(|&&i| matcher::names_exactly(&self.roster[i], query))
        {
            let name = self.roster[repeat].common_name().to_string();
            debug!(query, country = %name, "guess repeated");
            return GuessOutcome::AlreadyGuessed(name);
        }

        let resolved = {
            let excluded = self.excluded();
            matcher::resolve_guess(&self.roster, &excluded, query).and_then(|country| {
                self.roster
                    .iter()
                    .position(|c| std::ptr::eq(c, country))
                    .map(|index| (index, country.common_name().to_string()))
            })
        };
        let Some((index, common)) = resolved else {
            debug!(query, "guess unmatched");
            return GuessOutcome::Unmatched;
        };
        if self.guessed.contains(&index) {
            return GuessOutcome::AlreadyGuessed(common);
        }

        self.guessed.push(index);

        if index == target {
            self.won = true;
            let tries = self.guessed.len();
            debug!(tries, "target guessed");
            return GuessOutcome::Correct { country: common, tries };
        }

        let before = self.revealed.len();
        self.revealed = reveal_next(&self.revealed);
        let revealed = (self.revealed.len() > before).then(|| self.revealed[before]);
        debug!(country = %common, ?revealed, "guess missed");

        GuessOutcome::Miss {
            country: common,
            revealed,
        }
    }

    /// The target's value for `category`, or `ClueValue::Hidden` if not revealed
    #[must_use]
    pub fn clue_value(&self, category: ClueCategory) -> ClueValue<'_> {
        match self.target_country() {
            Some(target) if is_revealed(&self.revealed, category) => target.clue(category),
            _ => ClueValue::Hidden,
        }
    }

    /// Bearing and distance from `guess` to the target
    ///
    /// `None` for the target itself and while no game is running.
    #[must_use]
    pub fn feedback_for(&self, guess: &Country) -> Option<Feedback> {
        let target = self.target_country()?;
        if target.same_as(guess) {
            return None;
        }

        Some(Feedback {
            bearing: bearing_arrow(target.coordinates(), guess.coordinates()),
            distance_km: distance_km(target.coordinates(), guess.coordinates()),
        })
    }

    /// Every country matching `query` that has not been guessed, sorted by name
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Country> {
        let excluded = self.excluded();
        matcher::filter(&self.roster, &excluded, query)
    }

    /// Autocomplete entries for `query`, capped at [`SUGGESTION_LIMIT`]
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<&Country> {
        let mut found = self.search(query);
        found.truncate(SUGGESTION_LIMIT);
        found
    }

    fn excluded(&self) -> Excluded<'_> {
        self.guessed
            .iter()
            .map(|&i| self.roster[i].official_name())
            .collect()
    }

    fn target_country(&self) -> Option<&Country> {
        self.target.map(|i| &self.roster[i])
    }

    /// Lifecycle state derived from the target and win flag
    #[must_use]
    pub fn state(&self) -> SessionState {
        match (self.target, self.won) {
            (None, _) => SessionState::Loading,
            (Some(_), false) => SessionState::InProgress,
            (Some(_), true) => SessionState::Won,
        }
    }

    /// Whether the current round's target has been guessed
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Every country in play, in roster order
    #[must_use]
    pub fn roster(&self) -> &[Country] {
        &self.roster
    }

    /// Categories revealed so far, in reveal order
    #[must_use]
    pub fn revealed_clues(&self) -> &[ClueCategory] {
        &self.revealed
    }

    /// Guessed countries in guess order
    #[must_use]
    pub fn guessed_countries(&self) -> Vec<&Country> {
        self.guessed.iter().map(|&i| &self.roster[i]).collect()
    }

    /// Number of recorded guesses in this round
    #[must_use]
    pub fn tries(&self) -> usize {
        self.guessed.len()
    }

    /// The target, once it has been guessed
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Country> {
        if self.won { self.target_country() } else { None }
    }
}

/// A roster must be non-empty with unique official names
fn check_roster(roster: &[Country]) -> Result<(), GameError> {
    if roster.is_empty() {
        return Err(GameError::EmptyRoster);
    }

    let mut seen = FxHashSet::default();
    match roster.iter().find(|c| !seen.insert(c.official_name())) {
        Some(duplicate) => Err(GameError::DuplicateCountry(duplicate.official_name().to_string())),
        None => Ok(()),
    }
}
