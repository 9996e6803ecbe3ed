//! twofold-core: Core algebraic types for twofold.
//!
//! This crate provides two two-variant algebraic data types, `Maybe` and
//! `Either`, with functor/monad combinators, plus `wrap_error` for
//! classifying panics into the `Either` failure channel.

pub mod caught;
pub mod either;
pub mod maybe;
pub mod prelude;
pub mod pure;
