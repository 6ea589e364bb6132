use std::str::FromStr;

use arrayvec::ArrayVec;
use oxitac_engine::{Board, Mark, MovePolicy, NoLegalMoveError};
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IndexedRandom as _,
};
use rand_pcg::Pcg32;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Seed for the selector's tie-break randomness.
///
/// A 128-bit seed for the selector's random number generator. The first
/// three heuristic rules are fully deterministic; the seed only governs the
/// corner and any-cell tie-breaks, so two selectors built from the same
/// seed play identically on identical boards.
///
/// Parses from a 32-character hex string (for the `--seed` flag):
///
/// ```
/// use oxitac_ai::SelectorSeed;
///
/// let seed: SelectorSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectorSeed([u8; 16]);

/// Allows generating random `SelectorSeed` values with `rng.random()`.
impl Distribution<SelectorSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SelectorSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SelectorSeed(seed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex characters, got {_0}")]
    WrongLength(#[error(not(source))] usize),
    #[display("invalid seed: not a hex string")]
    InvalidHex,
}

impl FromStr for SelectorSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::WrongLength(s.len()));
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidHex)?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// The heuristic opponent.
///
/// Picks a move by the first matching rule, in this exact order:
///
/// 1. **Win now** - the lowest empty index that completes a line for `O`
/// 2. **Block** - the lowest empty index where `X` would complete a line
/// 3. **Center** - index 4, if empty
/// 4. **Corner** - a uniformly random empty corner
/// 5. **Any** - a uniformly random remaining empty cell
///
/// The ordering guarantees an immediate win is taken and an immediate loss
/// is blocked; it does not avoid every losable position (no game-tree
/// search).
///
/// # Example
///
/// ```
/// use oxitac_ai::HeuristicSelector;
/// use oxitac_engine::{Board, MovePolicy as _};
///
/// let mut selector = HeuristicSelector::new();
///
/// // On an empty board the center is always taken.
/// let index = selector.select_move(&Board::new()).unwrap();
/// assert_eq!(index, 4);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicSelector {
    rng: Pcg32,
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicSelector {
    /// Creates a selector seeded from the OS's random data source.
    ///
    /// For deterministic tie-breaks, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: SelectorSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl MovePolicy for HeuristicSelector {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMoveError> {
        if let Some(index) = completing_move(board, Mark::O) {
            return Ok(index);
        }
        if let Some(index) = completing_move(board, Mark::X) {
            return Ok(index);
        }
        if board.cell(CENTER).is_none() {
            return Ok(CENTER);
        }
        let corners: ArrayVec<usize, 4> = CORNERS
            .into_iter()
            .filter(|&index| board.cell(index).is_none())
            .collect();
        if let Some(&index) = corners.choose(&mut self.rng) {
            return Ok(index);
        }
        let remaining: ArrayVec<usize, { Board::CELLS }> = board.empty_cells().collect();
        remaining.choose(&mut self.rng).copied().ok_or(NoLegalMoveError)
    }
}

/// Finds the lowest empty index where placing `mark` completes a line.
///
/// Probes a board copy per candidate; the real board is never touched.
fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_cells().find(|&index| {
        let mut probe = *board;
        probe.place(index, mark).is_ok() && probe.winning_line(mark).is_some()
    })
}
