use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for flatstore operations.
///
/// Each kind describes a category of failure, enabling precise error handling
/// at call sites. Soft conditions (a missing document, a missing collection)
/// are never reported through errors; they surface structurally through
/// [`crate::collection::WriteOutcome`] and empty snapshots instead.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Generic IO error while reading or writing the backing file
    IOError,
    /// The backing file was not found
    FileNotFound,
    /// Permission denied for a file operation
    PermissionDenied,
    /// The backing file does not parse as a store snapshot
    FileCorrupted,
    /// Error encoding or decoding data
    EncodingError,
    /// Error mapping a typed entity to or from a document
    EntityMappingError,
    /// Generic validation error (empty name, missing configuration)
    ValidationError,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::IOError => write!(f, "IO error"),
            ErrorKind::FileNotFound => write!(f, "File not found"),
            ErrorKind::PermissionDenied => write!(f, "Permission denied"),
            ErrorKind::FileCorrupted => write!(f, "File corrupted"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::EntityMappingError => write!(f, "Entity mapping error"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom flatstore error type.
///
/// `FlatstoreError` encapsulates the error message, kind, and an optional
/// cause. It supports error chaining and backtraces for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::errors::{FlatstoreError, ErrorKind, FlatstoreResult};
///
/// fn example() -> FlatstoreResult<()> {
///     Err(FlatstoreError::new("backing file missing", ErrorKind::FileNotFound))
/// }
/// ```
#[derive(Clone)]
pub struct FlatstoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FlatstoreError>>,
    backtrace: Backtrace,
}

impl FlatstoreError {
    /// Creates a new `FlatstoreError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FlatstoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `FlatstoreError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for
    /// debugging.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FlatstoreError) -> Self {
        FlatstoreError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&FlatstoreError> {
        self.cause.as_deref()
    }
}

impl Display for FlatstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FlatstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for FlatstoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for flatstore operations.
///
/// `FlatstoreResult<T>` is shorthand for `Result<T, FlatstoreError>`.
/// All fallible flatstore operations return this type.
pub type FlatstoreResult<T> = Result<T, FlatstoreError>;

// From trait implementations for automatic error conversion
impl From<std::io::Error> for FlatstoreError {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IOError,
        };
        FlatstoreError::new(&format!("IO error: {}", err), error_kind)
    }
}

impl From<serde_json::Error> for FlatstoreError {
    fn from(err: serde_json::Error) -> Self {
        let error_kind = if err.is_io() {
            ErrorKind::IOError
        } else {
            ErrorKind::FileCorrupted
        };
        FlatstoreError::new(&format!("JSON error: {}", err), error_kind)
    }
}

impl From<String> for FlatstoreError {
    fn from(msg: String) -> Self {
        FlatstoreError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for FlatstoreError {
    fn from(msg: &str) -> Self {
        FlatstoreError::new(msg, ErrorKind::InternalError)
    }
}
