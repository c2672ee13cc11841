//! Deferred steps
//!
//! A [`Thunk`] is one suspended call: a target function and the argument it
//! will be called with. Both are fixed when the thunk is built, and the
//! argument is already evaluated at that point. Forcing a thunk performs that
//! single call and yields the next [`Bounce`].

use std::fmt;

type Step<'a, T> = Box<dyn FnOnce() -> Bounce<'a, T> + 'a>;

/// One suspended step of a recursive computation
///
/// `force` takes the thunk by value, so a thunk is forced at most once.
pub struct Thunk<'a, T> {
    step: Step<'a, T>,
}

impl<'a, T> Thunk<'a, T> {
    /// Suspend `target(args)`
    ///
    /// `args` is moved into the thunk now; nothing about it is recomputed
    /// when the thunk is forced.
    pub fn new<F, A>(target: F, args: A) -> Self
    where
        F: FnOnce(A) -> Bounce<'a, T> + 'a,
        A: 'a,
    {
        Self {
            step: Box::new(move || target(args)),
        }
    }

    /// Suspend a closure that already owns everything it needs
    pub fn deferred<F>(step: F) -> Self
    where
        F: FnOnce() -> Bounce<'a, T> + 'a,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// Perform the suspended call
    pub fn force(self) -> Bounce<'a, T> {
        (self.step)()
    }
}

impl<T> fmt::Debug for Thunk<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// Build a [`Thunk`] for `target(args)`
pub fn make_thunk<'a, F, A, T>(target: F, args: A) -> Thunk<'a, T>
where
    F: FnOnce(A) -> Bounce<'a, T> + 'a,
    A: 'a,
{
    Thunk::new(target, args)
}

/// What a step returns: a final value or the next step
#[derive(Debug)]
pub enum Bounce<'a, T> {
    /// The computation finished
    Done(T),
    /// More work is pending
    Call(Thunk<'a, T>),
}

impl<'a, T> Bounce<'a, T> {
    /// Finish with `value`
    pub fn done(value: T) -> Self {
        Bounce::Done(value)
    }

    /// Tail-call `target(args)` through the driver
    pub fn call<F, A>(target: F, args: A) -> Self
    where
        F: FnOnce(A) -> Bounce<'a, T> + 'a,
        A: 'a,
    {
        Bounce::Call(Thunk::new(target, args))
    }

    /// Hand a closure that already owns its inputs to the driver
    pub fn defer<F>(step: F) -> Self
    where
        F: FnOnce() -> Bounce<'a, T> + 'a,
    {
        Bounce::Call(Thunk::deferred(step))
    }

    /// True once there is nothing left to force
    pub fn is_done(&self) -> bool {
        matches!(self, Bounce::Done(_))
    }

    /// The final value, if the computation already finished
    pub fn into_done(self) -> Option<T> {
        match self {
            Bounce::Done(value) => Some(value),
            Bounce::Call(_) => None,
        }
    }
}

impl<'a, T, E> Bounce<'a, Result<T, E>> {
    /// Finish a fallible computation with an error
    ///
    /// The driver stops at the first `Done`, so no further step runs.
    pub fn fail(error: E) -> Self {
        Bounce::Done(Err(error))
    }
}
