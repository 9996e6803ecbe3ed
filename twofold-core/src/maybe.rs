use std::fmt;

/// An optional value without a null sentinel.
///
/// `Maybe<T>` is either `Just` a value or `Nothing`. Both combinators take
/// the callback as a mandatory parameter, so every call site handles both
/// variants by construction.
///
/// # Examples
/// ```
/// use twofold_core::maybe::Maybe;
///
/// let m = Maybe::just(21);
/// assert_eq!(m.fmap(|x| x * 2), Maybe::Just(42));
///
/// let n: Maybe<i32> = Maybe::nothing();
/// assert_eq!(n.fmap(|x| x * 2), Maybe::Nothing);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Nothing,
    Just(T),
}

impl<T> Maybe<T> {
    /// Creates a `Just` holding `value`.
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Creates a `Nothing`.
    ///
    /// The variant is zero-sized, so all `Nothing` values of a given `T`
    /// are interchangeable.
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Creates a `Maybe` from a std `Option`.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(v) => Maybe::Just(v),
            None => Maybe::Nothing,
        }
    }

    /// Returns `true` if this is a `Just`.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if this is a `Nothing`.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Returns the held value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Nothing => None,
            Maybe::Just(v) => Some(v),
        }
    }

    /// Maps a plain function over the held value.
    ///
    /// On `Just(v)` the function runs exactly once; on `Nothing` it never
    /// runs and `Nothing` is returned unchanged.
    pub fn fmap<U, F: FnOnce(&T) -> U>(&self, f: F) -> Maybe<U> {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(v) => Maybe::Just(f(v)),
        }
    }

    /// Chains a function that itself returns a `Maybe`.
    ///
    /// On `Just(v)` the result is `f(v)` directly, with no double-wrapping;
    /// on `Nothing` the function never runs.
    pub fn bind<U, F: FnOnce(&T) -> Maybe<U>>(&self, f: F) -> Maybe<U> {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(v) => f(v),
        }
    }

    /// Collapses both variants into a single value.
    pub fn fold<U, FN: FnOnce() -> U, FJ: FnOnce(&T) -> U>(&self, on_nothing: FN, on_just: FJ) -> U {
        match self {
            Maybe::Nothing => on_nothing(),
            Maybe::Just(v) => on_just(v),
        }
    }

    /// Returns the held value, or computes a default.
    pub fn get_or_else<F: FnOnce() -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Maybe::Nothing => f(),
            Maybe::Just(v) => v.clone(),
        }
    }

    /// Converts to a std `Option`.
    pub fn to_option(self) -> Option<T> {
        match self {
            Maybe::Nothing => None,
            Maybe::Just(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Nothing => f.write_str("Nothing"),
            Maybe::Just(v) => f.debug_tuple("Just").field(v).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Nothing => f.write_str("Nothing"),
            Maybe::Just(v) => write!(f, "Just({})", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_creation() {
        let m = Maybe::just(42);
        assert!(m.is_just());
        assert!(!m.is_nothing());
        assert_eq!(m.value(), Some(&42));
    }

    #[test]
    fn nothing_creation() {
        let m: Maybe<i32> = Maybe::nothing();
        assert!(!m.is_just());
        assert!(m.is_nothing());
        assert_eq!(m.value(), None);
    }

    #[test]
    fn nothing_values_compare_equal() {
        let a: Maybe<i32> = Maybe::nothing();
        let b: Maybe<i32> = Maybe::nothing();
        assert_eq!(a, b);
    }

    #[test]
    fn fmap_transforms_just() {
        let m = Maybe::just(21);
        assert_eq!(m.fmap(|x| x * 2), Maybe::Just(42));
    }

    #[test]
    fn fmap_invokes_exactly_once() {
        let m = Maybe::just(1);
        let mut calls = 0;
        m.fmap(|_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn fmap_never_invoked_on_nothing() {
        let m: Maybe<i32> = Maybe::nothing();
        let mut calls = 0;
        let mapped = m.fmap(|_| {
            calls += 1;
        });
        assert_eq!(calls, 0);
        assert_eq!(mapped, Maybe::Nothing);
    }

    #[test]
    fn fmap_identity_law() {
        let m = Maybe::just(42);
        assert_eq!(m.fmap(|x| *x), m);
        let n: Maybe<i32> = Maybe::nothing();
        assert_eq!(n.fmap(|x| *x), n);
    }

    #[test]
    fn fmap_composition_law() {
        let m = Maybe::just(10);
        let f = |x: &i32| x + 1;
        let g = |x: &i32| x * 2;
        assert_eq!(m.fmap(f).fmap(|x| g(x)), m.fmap(|x| g(&f(x))));
    }

    #[test]
    fn bind_chains_just() {
        let m = Maybe::just(42);
        let result = m.bind(|x| {
            if *x > 0 {
                Maybe::just(x.to_string())
            } else {
                Maybe::nothing()
            }
        });
        assert_eq!(result, Maybe::Just("42".to_string()));
    }

    #[test]
    fn bind_does_not_double_wrap() {
        let m = Maybe::just(1);
        let result: Maybe<i32> = m.bind(|_| Maybe::nothing());
        assert_eq!(result, Maybe::Nothing);
    }

    #[test]
    fn bind_short_circuits_nothing() {
        let m: Maybe<i32> = Maybe::nothing();
        let mut calls = 0;
        let result = m.bind(|x| {
            calls += 1;
            Maybe::just(*x)
        });
        assert_eq!(calls, 0);
        assert_eq!(result, Maybe::Nothing);
    }

    #[test]
    fn bind_associativity() {
        let m = Maybe::just(10);
        let f = |x: &i32| Maybe::just(x + 1);
        let g = |x: &i32| Maybe::just(x * 2);

        // (m >>= f) >>= g  ==  m >>= (x -> f(x) >>= g)
        assert_eq!(m.bind(f).bind(g), m.bind(|x| f(x).bind(g)));
    }

    #[test]
    fn fold_collapses_both_variants() {
        let just = Maybe::just(10);
        let nothing: Maybe<i32> = Maybe::nothing();
        assert_eq!(just.fold(|| 0, |x| x * 2), 20);
        assert_eq!(nothing.fold(|| 0, |x| x * 2), 0);
    }

    #[test]
    fn get_or_else_returns_value() {
        assert_eq!(Maybe::just(42).get_or_else(|| 0), 42);
    }

    #[test]
    fn get_or_else_computes_default() {
        let m: Maybe<i32> = Maybe::nothing();
        assert_eq!(m.get_or_else(|| 7), 7);
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Maybe::from_option(Some(1)), Maybe::Just(1));
        assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
        assert_eq!(Maybe::just(1).to_option(), Some(1));
        assert_eq!(Maybe::<i32>::nothing().to_option(), None);
    }

    #[test]
    fn from_trait_both_directions() {
        let m: Maybe<i32> = Some(42).into();
        assert_eq!(m, Maybe::Just(42));
        let o: Option<i32> = Maybe::just(42).into();
        assert_eq!(o, Some(42));
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format!("{}", Maybe::just(42)), "Just(42)");
        assert_eq!(format!("{}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[test]
    fn debug_formatting() {
        assert_eq!(format!("{:?}", Maybe::just("hi")), "Just(\"hi\")");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }
}
