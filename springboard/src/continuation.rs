//! Continuations and the rewriting discipline
//!
//! A [`Continuation`] is "what to do with my result". Passing one explicitly
//! lets a function with pending work after its recursive call put that call
//! in tail position, where the driver can take it over as a thunk.
//!
//! Rewriting `f(input)` into `f_cps(input, k)`:
//!
//! 1. Base case: `k.bounce(base_value)`.
//! 2. One self-call: `let k = k.compose(|partial| combine(partial));` then
//!    `Bounce::call(f_cps_step, (smaller_input, k))`.
//! 3. Two self-calls: issue one of them in tail position and resolve the
//!    other inside the continuation. Either run it through a nested driver
//!    (depth still grows with that branch) or return it as a thunk from the
//!    continuation (no native growth on either branch). The tree size
//!    algorithms show both.
//! 4. Top level: start with [`Continuation::identity`].
//!
//! A continuation must be applied through [`Continuation::bounce`] whenever the
//! application could recurse further. Calling it directly moves the stack
//! growth from the descent into the unwinding.
//!
//! ```rust
//! use springboard::{trampoline, Bounce, Continuation};
//!
//! fn sum_to(n: u64, k: Continuation<'static, u64, u64>) -> Bounce<'static, u64> {
//!     if n == 0 {
//!         k.bounce(0)
//!     } else {
//!         let k = k.compose(move |partial: u64| partial + n);
//!         Bounce::call(|(n, k)| sum_to(n, k), (n - 1, k))
//!     }
//! }
//!
//! assert_eq!(trampoline(sum_to(100_000, Continuation::identity())), 5_000_050_000);
//! ```

use crate::thunk::{Bounce, Thunk};
use std::fmt;

type Resume<'a, A, T> = Box<dyn FnOnce(A) -> Bounce<'a, T> + 'a>;

/// The rest of a computation, waiting for a value of type `A`
///
/// One-shot: applying it consumes it. Everything it captures is moved in when
/// it is created.
pub struct Continuation<'a, A, T> {
    resume: Resume<'a, A, T>,
}

impl<'a, A: 'a, T: 'a> Continuation<'a, A, T> {
    pub fn new<F>(resume: F) -> Self
    where
        F: FnOnce(A) -> Bounce<'a, T> + 'a,
    {
        Self {
            resume: Box::new(resume),
        }
    }

    /// Invoke the continuation right away
    pub fn apply(self, value: A) -> Bounce<'a, T> {
        (self.resume)(value)
    }

    /// Hand the application to the driver as a thunk
    pub fn bounce(self, value: A) -> Bounce<'a, T> {
        Bounce::Call(Thunk::new(self.resume, value))
    }

    /// Wrap this continuation: fold `combine` over the incoming value, then
    /// pass the result on
    pub fn compose<B, F>(self, combine: F) -> Continuation<'a, B, T>
    where
        B: 'a,
        F: FnOnce(B) -> A + 'a,
    {
        Continuation::new(move |value: B| self.bounce(combine(value)))
    }
}

impl<'a, T: 'a> Continuation<'a, T, T> {
    /// The top-level continuation: finish with the value as is
    pub fn identity() -> Self {
        Self::new(Bounce::Done)
    }
}

impl<A, T> fmt::Debug for Continuation<'_, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Continuation(..)")
    }
}
