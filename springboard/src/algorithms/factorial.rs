use crate::continuation::Continuation;
use crate::thunk::Bounce;
use crate::trampoline;
use num_bigint::BigUint;
use num_traits::One;

/// `n!`, with `0! = 1`
pub fn factorial(n: u64) -> BigUint {
    trampoline(factorial_bounce(n))
}

/// First step of the accumulator version; forces `n - 1` thunks for `n >= 1`
pub fn factorial_bounce(n: u64) -> Bounce<'static, BigUint> {
    factorial_step((n, BigUint::one()))
}

fn factorial_step((n, accumulator): (u64, BigUint)) -> Bounce<'static, BigUint> {
    if n <= 1 {
        Bounce::Done(accumulator)
    } else {
        Bounce::call(factorial_step, (n - 1, accumulator * n))
    }
}

/// `n!` computed by the continuation version
pub fn factorial_by_continuation(n: u64) -> BigUint {
    trampoline(factorial_cps(n, Continuation::identity()))
}

/// Factorial in continuation-passing style
///
/// The multiplications happen while the continuations unwind, one thunk each,
/// so a run forces `2n - 1` thunks for `n >= 1`.
pub fn factorial_cps<T: 'static>(
    n: u64,
    k: Continuation<'static, BigUint, T>,
) -> Bounce<'static, T> {
    if n <= 1 {
        k.bounce(BigUint::one())
    } else {
        let k = k.compose(move |partial: BigUint| partial * n);
        Bounce::call(|(n, k)| factorial_cps(n, k), (n - 1, k))
    }
}
