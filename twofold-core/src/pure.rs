use crate::either::Either;
use crate::maybe::Maybe;

/// A trait for lifting a value into a monadic/applicative context.
///
/// Equivalent to Haskell's `pure` / `return`: the value lands in the
/// success or presence variant.
///
/// # Examples
/// ```
/// use twofold_core::pure::Pure;
/// use twofold_core::maybe::Maybe;
///
/// let m: Maybe<i32> = Pure::pure(42);
/// assert_eq!(m, Maybe::Just(42));
/// ```
pub trait Pure<A> {
    fn pure(a: A) -> Self;
}

impl<A> Pure<A> for Option<A> {
    fn pure(a: A) -> Self {
        Some(a)
    }
}

impl<A, E> Pure<A> for Result<A, E> {
    fn pure(a: A) -> Self {
        Ok(a)
    }
}

impl<A> Pure<A> for Maybe<A> {
    fn pure(a: A) -> Self {
        Maybe::Just(a)
    }
}

impl<L, A> Pure<A> for Either<L, A> {
    fn pure(a: A) -> Self {
        Either::Right(a)
    }
}
