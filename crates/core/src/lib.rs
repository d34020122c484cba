//! Meld engine and card model. Keep this crate free of IO and platform
//! concerns.

pub mod cards;
pub mod deck;
pub mod mask;
pub mod partition;
pub mod rng;
pub mod scan;
pub mod wild;

pub use cards::*;
pub use deck::*;
pub use mask::*;
pub use partition::*;
pub use rng::*;
pub use scan::*;
pub use wild::*;
