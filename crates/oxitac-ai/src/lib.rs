//! The automated opponent: a fixed-priority heuristic move selector.
//!
//! The selector plays the `O` role through the engine's
//! [`MovePolicy`](oxitac_engine::MovePolicy) seam. It is deliberately a
//! shallow heuristic, not a game-tree search: it always takes an immediate
//! win and always blocks an immediate loss, but guarantees nothing beyond
//! that. Tie-breaks among corners and leftover cells are uniformly random,
//! drawn from a seedable generator so tests can pin the choices down.

pub use self::selector::*;

mod selector;
