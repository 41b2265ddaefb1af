//! Round state for the target-sum game: round generation, selection
//! evaluation and the countdown, driven through a single reducer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// How many numbers are dealt. The game expects at least 3.
    pub tile_count: usize,
    /// Seconds on the clock; 0 means the round is over before it starts.
    pub duration_secs: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Playing
    }
}

/// Persisted score pair. Outlives rounds; see `storage` for the stored form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreRecord {
    /// Fold one win into the record. The high score only ever moves up.
    pub fn after_win(self) -> Self {
        let score = self.score + 1;
        Self {
            score,
            high_score: self.high_score.max(score),
        }
    }
}

/// Numbers dealt for one round, fixed at generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Values in draw order; the target is computed from this order.
    pub pool: Vec<u32>,
    pub target: u32,
    /// The same values in the shuffled order the player sees.
    pub display: Vec<u32>,
}

impl Round {
    /// Deal a round from the browser RNG.
    pub fn generate(config: RoundConfig) -> Self {
        Self::generate_with(config, js_sys::Math::random)
    }

    /// Deal `tile_count` values in 1..=10, take the target over all but the
    /// last two draws, then shuffle a display copy. `rng` must yield uniform
    /// values in [0, 1).
    pub fn generate_with(config: RoundConfig, mut rng: impl FnMut() -> f64) -> Self {
        let pool: Vec<u32> = (0..config.tile_count)
            .map(|_| 1 + (rng() * 10.0).floor() as u32)
            .collect();
        let target = target_of(&pool);
        let display = shuffled(pool.clone(), &mut rng);
        Self {
            pool,
            target,
            display,
        }
    }
}

/// Sum of all values except the last two; pools shorter than that
/// contribute nothing.
pub fn target_of(pool: &[u32]) -> u32 {
    let kept = pool.len().saturating_sub(2);
    pool[..kept].iter().sum()
}

// Fisher-Yates over a copy of the pool.
fn shuffled(mut values: Vec<u32>, rng: &mut impl FnMut() -> f64) -> Vec<u32> {
    for i in (1..values.len()).rev() {
        let j = ((rng() * (i + 1) as f64).floor() as usize).min(i);
        values.swap(i, j);
    }
    values
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Bumped on every new round; keys the countdown effect so a stale
    /// interval can never tick into a fresh round.
    pub round_id: u32,
    pub round: Round,
    /// Tile indices into `round.display` in tap order, no duplicates.
    pub selected: Vec<usize>,
    pub status: Status,
    pub remaining_secs: u32,
    pub scores: ScoreRecord,
}

impl RoundState {
    pub fn new(config: RoundConfig, round: Round) -> Self {
        Self {
            round_id: 0,
            round,
            selected: Vec::new(),
            status: initial_status(config.duration_secs),
            remaining_secs: config.duration_secs,
            scores: ScoreRecord::default(),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn sum_selected(&self) -> u32 {
        self.selected.iter().map(|&i| self.round.display[i]).sum()
    }
}

fn initial_status(duration_secs: u32) -> Status {
    if duration_secs == 0 {
        Status::Lost
    } else {
        Status::Playing
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum RoundAction {
    /// Player tapped the tile at `index` in the display order.
    SelectTile { index: usize },
    /// One second elapsed on the countdown.
    Tick,
    /// Fresh round from the parent-owned factory; scores carry over.
    NewRound { round: Round, duration_secs: u32 },
    /// Persisted record read at mount.
    SetScores { scores: ScoreRecord },
    ResetScores,
}

impl Reducible for RoundState {
    type Action = RoundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use RoundAction::*;
        let mut new = (*self).clone();
        match action {
            SelectTile { index } => {
                // Terminal rounds and repeated taps must not move state,
                // even if the tile layer lets a tap through.
                if new.status.is_terminal() {
                    return self;
                }
                if index >= new.round.display.len() || new.is_selected(index) {
                    return self;
                }
                new.selected.push(index);
                let sum = new.sum_selected();
                if sum == new.round.target {
                    new.status = Status::Won;
                    new.scores = new.scores.after_win();
                } else if sum > new.round.target {
                    new.status = Status::Lost;
                }
            }
            Tick => {
                if new.status.is_terminal() {
                    return self;
                }
                new.remaining_secs = new.remaining_secs.saturating_sub(1);
                if new.remaining_secs == 0 {
                    new.status = Status::Lost;
                }
            }
            NewRound {
                round,
                duration_secs,
            } => {
                new.round_id = new.round_id.wrapping_add(1);
                new.round = round;
                new.selected.clear();
                new.status = initial_status(duration_secs);
                new.remaining_secs = duration_secs;
            }
            SetScores { scores } => {
                new.scores = scores;
            }
            ResetScores => {
                new.scores = ScoreRecord::default();
            }
        }
        Rc::new(new)
    }
}
