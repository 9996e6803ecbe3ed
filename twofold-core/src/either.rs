use std::fmt;

/// A disjoint union of two values.
///
/// `Either<L, R>` holds exactly one of two payloads. By convention `Left`
/// carries a failure and `Right` carries a success, and the functor/monad
/// combinators (`fmap`, `bind`) operate on the success channel while `lmap`
/// operates on the failure channel.
///
/// # Examples
/// ```
/// use twofold_core::either::Either;
///
/// let right: Either<String, i32> = Either::right(21);
/// assert_eq!(right.fmap(|x| x * 2), Either::Right(42));
///
/// let left: Either<String, i32> = Either::left("boom".to_string());
/// assert_eq!(left.fmap(|x| x * 2), Either::Left("boom".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` value.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Creates a `Right` value.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Creates an `Either` from a `Result`.
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Creates an `Either` from an `Option`, using `left_value` for `None`.
    pub fn from_option(option: Option<R>, left_value: impl FnOnce() -> L) -> Self {
        match option {
            Some(r) => Either::Right(r),
            None => Either::Left(left_value()),
        }
    }

    /// Returns `true` if this is a `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the `Left` value, if present.
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the `Right` value, if present.
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Maps a plain function over the success channel.
    ///
    /// On `Right(v)` the function runs exactly once; a `Left` passes
    /// through unchanged and the function never runs.
    pub fn fmap<U, F: FnOnce(&R) -> U>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(l.clone()),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Chains a function that itself returns an `Either` over the success
    /// channel.
    ///
    /// On `Right(v)` the result is `f(v)` directly, with no double-wrapping;
    /// a `Left` short-circuits and the function never runs.
    pub fn bind<U, F: FnOnce(&R) -> Either<L, U>>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(l.clone()),
            Either::Right(r) => f(r),
        }
    }

    /// Maps a plain function over the failure channel.
    ///
    /// The mirror image of [`fmap`](Either::fmap): runs on a `Left`, while
    /// a `Right` passes through unchanged.
    pub fn lmap<M, F: FnOnce(&L) -> M>(&self, f: F) -> Either<M, R>
    where
        R: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r.clone()),
        }
    }

    /// Dispatches on the variant, invoking exactly one of the two callbacks
    /// exactly once.
    pub fn either<U, FL: FnOnce(&L) -> U, FR: FnOnce(&R) -> U>(&self, on_left: FL, on_right: FR) -> U {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Returns the `Left` payload.
    ///
    /// # Panics
    /// Panics on a `Right`, naming the held value. Use
    /// [`from_left_or_else`](Either::from_left_or_else) to supply a fallback
    /// instead.
    pub fn from_left(&self) -> L
    where
        L: Clone,
        R: fmt::Debug,
    {
        match self {
            Either::Left(l) => l.clone(),
            Either::Right(r) => panic!("expected left value, got Right({:?})", r),
        }
    }

    /// Returns the `Left` payload, or computes one from the `Right` payload.
    pub fn from_left_or_else<F: FnOnce(&R) -> L>(&self, f: F) -> L
    where
        L: Clone,
    {
        match self {
            Either::Left(l) => l.clone(),
            Either::Right(r) => f(r),
        }
    }

    /// Returns the `Right` payload.
    ///
    /// # Panics
    /// Panics on a `Left`, naming the held value. Use
    /// [`from_right_or_else`](Either::from_right_or_else) to supply a
    /// fallback instead.
    pub fn from_right(&self) -> R
    where
        R: Clone,
        L: fmt::Debug,
    {
        match self {
            Either::Left(l) => panic!("expected right value, got Left({:?})", l),
            Either::Right(r) => r.clone(),
        }
    }

    /// Returns the `Right` payload, or computes one from the `Left` payload.
    pub fn from_right_or_else<F: FnOnce(&L) -> R>(&self, f: F) -> R
    where
        R: Clone,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r.clone(),
        }
    }

    /// Swaps `Left` and `Right`.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Converts to a `Result<R, L>`.
    pub fn to_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Converts to an `Option<R>`, discarding any `Left` value.
    pub fn to_option(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.to_result()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => f.debug_tuple("Left").field(l).finish(),
            Either::Right(r) => f.debug_tuple("Right").field(r).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}
