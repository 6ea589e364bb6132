pub use self::{board::*, lines::*, mark::*};

pub(crate) mod board;
pub(crate) mod lines;
pub(crate) mod mark;
