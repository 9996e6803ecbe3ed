use std::any::{type_name, Any};
use std::fmt;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

use crate::either::Either;

/// A classifier for one panic-payload type.
///
/// Rust panics carry a `Box<dyn Any + Send>` payload, so a "kind" is the
/// payload's concrete type. `panic!("...")` produces a `&'static str` or
/// `String` payload; `std::panic::panic_any` produces whatever it is given.
#[derive(Clone, Copy)]
pub struct ErrorKind {
    matches: fn(&(dyn Any + Send)) -> bool,
    name: &'static str,
}

impl ErrorKind {
    /// A kind matching payloads of concrete type `E`.
    pub fn of<E: Any>() -> Self {
        ErrorKind {
            matches: |payload| payload.is::<E>(),
            name: type_name::<E>(),
        }
    }

    /// Returns `true` if `payload` is of this kind.
    pub fn matches(&self, payload: &(dyn Any + Send)) -> bool {
        (self.matches)(payload)
    }

    /// The type name of the classified payload.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.name).finish()
    }
}

/// The kinds produced by `panic!` with a message: `&'static str` for a
/// literal, `String` for a formatted one. Std arithmetic panics (division
/// by zero, overflow checks) fall under these.
pub fn message_kinds() -> [ErrorKind; 2] {
    [ErrorKind::of::<&'static str>(), ErrorKind::of::<String>()]
}

/// A captured panic whose payload matched one of the listed kinds.
pub struct CaughtError {
    message: String,
    kind_name: &'static str,
    payload: Box<dyn Any + Send>,
}

impl CaughtError {
    fn new(kind_name: &'static str, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            format!("panic payload of type {}", kind_name)
        };
        CaughtError {
            message,
            kind_name,
            payload,
        }
    }

    /// A human-readable rendering of the payload.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The type name of the kind that matched.
    pub fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    /// Borrows the payload as a concrete type, for typed recovery.
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Consumes the error, returning the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

// The payload is an opaque `Box<dyn Any + Send>`, so Debug shows the kind
// name and message only.
impl fmt::Debug for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtError")
            .field("kind_name", &self.kind_name)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caught {}: {}", self.kind_name, self.message)
    }
}

impl std::error::Error for CaughtError {}

/// Runs `body`, converting panics of the listed kinds into a `Left`.
///
/// A normal completion with value `v` yields `Right(v)`. A panic whose
/// payload matches one of `kinds` yields `Left(caught)`. A panic of any
/// other kind resumes unwinding untouched: it is outside the modeled
/// failure domain and is never converted to a `Left`.
///
/// `body` is invoked exactly once and is wrapped in `AssertUnwindSafe`,
/// so closures capturing mutable state are accepted.
///
/// # Examples
/// ```
/// use twofold_core::caught::{message_kinds, wrap_error};
///
/// let ok = wrap_error(&message_kinds(), || 42);
/// assert_eq!(ok.right_value(), Some(&42));
///
/// let caught = wrap_error(&message_kinds(), || -> i32 { panic!("boom") });
/// assert_eq!(caught.left_value().unwrap().message(), "boom");
/// ```
pub fn wrap_error<T>(kinds: &[ErrorKind], body: impl FnOnce() -> T) -> Either<CaughtError, T> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(v) => Either::Right(v),
        Err(payload) => match kinds.iter().find(|k| k.matches(&*payload)) {
            Some(kind) => Either::Left(CaughtError::new(kind.name(), payload)),
            None => resume_unwind(payload),
        },
    }
}
