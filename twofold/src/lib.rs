//! twofold: a minimal functional prelude for Rust.
//!
//! This is the umbrella crate that re-exports all twofold functionality:
//! the `Maybe` and `Either` algebraic types with their functor/monad
//! combinators, and `wrap_error` for bridging panicking code.
//!
//! # Quick Start
//! ```
//! use twofold::prelude::*;
//!
//! let maybe = Maybe::just(21);
//! assert_eq!(maybe.fmap(|x| x * 2), Maybe::Just(42));
//!
//! let either: Either<&str, i32> = Either::right(42);
//! let described = either.either(|l| format!("failed: {}", l), |r| format!("got {}", r));
//! assert_eq!(described, "got 42");
//! ```

pub use twofold_core::prelude;
pub use twofold_core::*;
