//! Domain error model.
//!
//! [`Error`] is a closed set of well-known variants plus a [`Error::Custom`]
//! extension point and an [`Error::Aggregate`] variant that bundles several
//! errors. Every variant exposes a `code` and a `message`, and equality is
//! variant-sensitive: two errors with the same code and message but a
//! different variant are not equal.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! let a = Error::validation("E", "Same message");
//! let b = Error::not_found("E", "Same message");
//!
//! assert_ne!(a, b);
//! assert_eq!(a.to_string(), "ValidationError: Same message");
//! ```
use crate::types::alloc_type::{Cow, Vec};

mod aggregate;
mod traits;

pub use aggregate::{AggregateError, EmptyAggregate};

/// Code carried by every [`AggregateError`].
pub const AGGREGATE_CODE: &str = "Errors.Aggregate";

/// Code and message shared by all non-aggregate variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorInfo {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ErrorInfo {
    /// Creates a new code/message pair.
    #[inline]
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a pair with an empty code.
    #[inline]
    pub fn message_only(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("", message)
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Discriminant of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Error,
    Validation,
    NotFound,
    Conflict,
    Authentication,
    Authorization,
    Custom,
    Aggregate,
}

/// A domain error: an expected, recoverable failure carried as data.
///
/// # Variants
///
/// * `Error` - a general failure
/// * `Validation` / `NotFound` / `Conflict` / `Authentication` / `Authorization` -
///   well-known categories
/// * `Custom` - a caller-named category; the name takes part in equality and display
/// * `Aggregate` - an ordered list of errors reported together
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, ErrorKind};
///
/// let err = Error::conflict("User.Duplicate", "user already exists");
/// assert_eq!(err.kind(), ErrorKind::Conflict);
/// assert_eq!(err.code(), "User.Duplicate");
/// assert_eq!(err.message(), "user already exists");
///
/// let plain = Error::msg("something broke");
/// assert_eq!(plain.code(), "");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    Error(ErrorInfo),
    Validation(ErrorInfo),
    NotFound(ErrorInfo),
    Conflict(ErrorInfo),
    Authentication(ErrorInfo),
    Authorization(ErrorInfo),
    Custom { kind: Cow<'static, str>, info: ErrorInfo },
    Aggregate(AggregateError),
}

macro_rules! variant_constructors {
    ($($variant:ident => $ctor:ident, $msg_ctor:ident;)+) => {
        $(
            #[doc = concat!(
                "Creates an [`Error::",
                stringify!($variant),
                "`] with a code and a message."
            )]
            #[inline]
            pub fn $ctor(
                code: impl Into<Cow<'static, str>>,
                message: impl Into<Cow<'static, str>>,
            ) -> Self {
                Self::$variant(ErrorInfo::new(code, message))
            }

            #[doc = concat!(
                "Creates an [`Error::",
                stringify!($variant),
                "`] with an empty code."
            )]
            #[inline]
            pub fn $msg_ctor(message: impl Into<Cow<'static, str>>) -> Self {
                Self::$variant(ErrorInfo::message_only(message))
            }
        )+
    };
}

impl Error {
    variant_constructors! {
        Error => new, msg;
        Validation => validation, validation_msg;
        NotFound => not_found, not_found_msg;
        Conflict => conflict, conflict_msg;
        Authentication => authentication, authentication_msg;
        Authorization => authorization, authorization_msg;
    }

    /// Creates a caller-named error variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::custom("RateLimitError", "Rate.Exceeded", "slow down");
    /// assert_eq!(err.to_string(), "RateLimitError: slow down");
    /// assert_ne!(err, Error::new("Rate.Exceeded", "slow down"));
    /// ```
    #[inline]
    pub fn custom(
        kind: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Custom {
            kind: kind.into(),
            info: ErrorInfo::new(code, message),
        }
    }

    /// Folds a list of errors into at most one error.
    ///
    /// Returns `None` for no errors, the error itself for exactly one, and an
    /// [`Error::Aggregate`] holding all of them, in order, otherwise.
    /// Nested aggregates are kept as children, not flattened.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// assert_eq!(Error::combine([]), None);
    ///
    /// let single = Error::combine([Error::msg("a")]);
    /// assert_eq!(single, Some(Error::msg("a")));
    ///
    /// let many = Error::combine([Error::msg("a"), Error::msg("b")]).unwrap();
    /// assert_eq!(many.code(), "Errors.Aggregate");
    /// ```
    pub fn combine<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let mut errors: Vec<Error> = errors.into_iter().collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Aggregate(AggregateError::from_vec(errors))),
        }
    }

    /// Returns the variant discriminant.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Error(_) => ErrorKind::Error,
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Authorization(_) => ErrorKind::Authorization,
            Self::Custom { .. } => ErrorKind::Custom,
            Self::Aggregate(_) => ErrorKind::Aggregate,
        }
    }

    /// Whether `name` is the display name of one of the built-in variants.
    pub(crate) fn is_builtin_name(name: &str) -> bool {
        matches!(
            name,
            "Error"
                | "ValidationError"
                | "NotFoundError"
                | "ConflictError"
                | "AuthenticationError"
                | "AuthorizationError"
                | "AggregateError"
        )
    }

    /// Returns the display name of the variant, e.g. `"ValidationError"`.
    pub fn variant_name(&self) -> &str {
        match self {
            Self::Error(_) => "Error",
            Self::Validation(_) => "ValidationError",
            Self::NotFound(_) => "NotFoundError",
            Self::Conflict(_) => "ConflictError",
            Self::Authentication(_) => "AuthenticationError",
            Self::Authorization(_) => "AuthorizationError",
            Self::Custom { kind, .. } => kind,
            Self::Aggregate(_) => "AggregateError",
        }
    }

    /// Returns the code/message pair of a non-aggregate error.
    #[inline]
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error(info)
            | Self::Validation(info)
            | Self::NotFound(info)
            | Self::Conflict(info)
            | Self::Authentication(info)
            | Self::Authorization(info)
            | Self::Custom { info, .. } => Some(info),
            Self::Aggregate(_) => None,
        }
    }

    /// Returns the error code. Aggregates always report [`AGGREGATE_CODE`].
    #[inline]
    pub fn code(&self) -> &str {
        match self {
            Self::Aggregate(_) => AGGREGATE_CODE,
            other => other.info().map_or("", ErrorInfo::code),
        }
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Aggregate(aggregate) => aggregate.message(),
            other => other.info().map_or("", ErrorInfo::message),
        }
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    #[inline]
    pub fn as_aggregate(&self) -> Option<&AggregateError> {
        match self {
            Self::Aggregate(aggregate) => Some(aggregate),
            _ => None,
        }
    }

    /// Iterates over the errors this error stands for: the children of an
    /// aggregate, or the error itself otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let single = Error::msg("only");
    /// assert_eq!(single.iter().count(), 1);
    ///
    /// let many = Error::combine([Error::msg("a"), Error::msg("b")]).unwrap();
    /// let messages: Vec<_> = many.iter().map(Error::message).collect();
    /// assert_eq!(messages, ["a", "b"]);
    /// ```
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        match self {
            Self::Aggregate(aggregate) => aggregate.iter(),
            other => core::slice::from_ref(other).iter(),
        }
    }
}
