pub use crate::caught::{message_kinds, wrap_error, CaughtError, ErrorKind};
pub use crate::either::Either;
pub use crate::maybe::Maybe;
pub use crate::pure::Pure;
