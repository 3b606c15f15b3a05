mod adhoc;
mod invalid_configuration;
mod invalid_schema;

use adhoc::AdhocError;
use invalid_configuration::InvalidConfiguration;
use invalid_schema::InvalidSchema;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while configuring prefixed identifier assignment.
///
/// Errors are cheap to clone and carry an optional chain of causes, rendered
/// most recent first.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) if inner.cause.is_none() => inner.kind,
            // A shared or already-chained consequent keeps only its message.
            Ok(inner) => ErrorKind::Adhoc(AdhocError::from(Error::from_inner(inner))),
            Err(shared) => ErrorKind::Adhoc(AdhocError::from(Error { inner: shared })),
        };

        Error::from_inner(ErrorInner {
            kind,
            cause: Some(self),
        })
    }

    fn from_inner(inner: ErrorInner) -> Error {
        Error {
            inner: Arc::new(inner),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the innermost cause of this error.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = &self.inner.cause {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Json(serde_json::Error),
    InvalidSchema(InvalidSchema),
    InvalidConfiguration(InvalidConfiguration),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Json(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from_inner(ErrorInner { kind, cause: None })
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(ErrorKind::Json(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
        assert_eq!(chained.root().to_string(), "root cause");
    }

    #[test]
    fn context_from_str() {
        let err = Error::invalid_schema("entity `User` is defined twice").context("loading schema");
        assert_eq!(
            err.to_string(),
            "loading schema: invalid schema: entity `User` is defined twice"
        );
        assert!(err.root().is_invalid_schema());
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn context_with_shared_consequent() {
        let consequent = err!("shared");
        let _keep = consequent.clone();

        let err = err!("cause").context(consequent);
        assert_eq!(err.to_string(), "shared: cause");
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn json_bridge() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let our_err: Error = json_err.into();
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn invalid_configuration_error() {
        let err = Error::invalid_configuration("a schema is required");
        assert_eq!(err.to_string(), "invalid configuration: a schema is required");
        assert!(err.is_invalid_configuration());
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn bail_returns_error() {
        fn fails() -> crate::Result<()> {
            bail!("failed with {}", "reason");
        }

        assert_eq!(fails().unwrap_err().to_string(), "failed with reason");
    }
}
