//! # Springboard
//!
//! **Deep recursion without a deep stack**
//!
//! Springboard evaluates recursive algorithms one step at a time. Instead of
//! calling itself, a step returns a [`Thunk`] describing the next call, and a
//! driver loop (the trampoline) keeps forcing thunks until a final value shows
//! up. Native stack depth stays constant; the pending work lives on the heap.
//!
//! ## Quick Start
//!
//! ```rust
//! use springboard::{trampoline, Bounce};
//!
//! fn countdown(n: u64) -> Bounce<'static, u64> {
//!     if n == 0 {
//!         Bounce::Done(0)
//!     } else {
//!         Bounce::call(countdown, n - 1)
//!     }
//! }
//!
//! // A million nested calls, constant stack.
//! assert_eq!(trampoline(countdown(1_000_000)), 0);
//! ```
//!
//! ## Core Concepts
//!
//! ### Thunks and bounces
//! A [`Thunk`] is a target function plus its already evaluated arguments. A
//! step returns a [`Bounce`]: either `Done(value)` or `Call(thunk)`.
//!
//! ### Continuations
//! Functions with work left to do after their recursive call take a
//! [`Continuation`] describing that work, which turns every call into a tail
//! call. See the [`continuation`] module for the rewriting rules.
//!
//! ### Drivers
//! [`trampoline`] is the bare loop. [`Driver`] adds opt-in [`DriverLimits`]
//! and reports [`RunStats`].
//!
//! ### Algorithms
//! The [`algorithms`] module holds worked examples: linear and binary search,
//! factorial, tree size, adjacent duplicate removal and depth-first numbering.

pub mod algorithms;
pub mod continuation;
pub mod driver;
pub mod error;
pub mod limits;
pub mod sequence;
pub mod thunk;
pub mod tree;

pub use continuation::Continuation;
pub use driver::{make_trampoline, trampoline, Driver, RunStats};
pub use error::SpringError;
pub use limits::DriverLimits;
pub use sequence::{NextList, Sequence, SliceView};
pub use thunk::{make_thunk, Bounce, Thunk};
pub use tree::Tree;

/// Result type for Springboard operations
pub type SpringResult<T> = Result<T, SpringError>;

#[cfg(test)]
mod tests;
