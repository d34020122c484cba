//! Client-side state mirror: the hand/round store the transport and
//! rendering layers sit on. All grouping decisions come from
//! `wildrun-core`; this crate only owns when they are recomputed and how
//! the host hears about them.

pub mod events;
pub mod scoring;
pub mod state;

pub use events::*;
pub use scoring::*;
pub use state::*;
