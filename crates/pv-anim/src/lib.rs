//! Step-by-step path reveal for pathviz.
//!
//! The reveal is driven by a [`RevealClock`], which is pure and can be ticked
//! from any frame loop, and by [`Animator`], which owns a cancellable timer
//! thread per path.
//!
//! # Design Principles
//!
//! - **Restartable**: setting a new path resets the reveal index to 0
//! - **Generation-keyed**: every path gets a new generation; timers of older
//!   generations no-op instead of advancing the wrong path

pub mod animator;
pub mod clock;

pub use animator::{Animator, RevealEvent};
pub use clock::{DEFAULT_STEP_DELAY, RevealClock};
