use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the Pathname Assistant
#[derive(Debug)]
pub enum Error {
    /// Error when an index does not address an element of a location set
    IndexOutOfRange { index: usize, len: usize },
    /// Error related to the system clipboard
    Clipboard { operation: String, detail: String },
    /// Error when the clipboard holds no file-system locations
    NoLocationsOnClipboard,
    /// Error when a piece of text cannot be turned into a location
    InvalidLocation { value: String, detail: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} is out of range for {len} locations")
            }
            Error::Clipboard { operation, detail } => {
                write!(f, "Failed to {operation} clipboard: {detail}")
            }
            Error::NoLocationsOnClipboard => {
                write!(f, "There are no file-system locations on the clipboard.")
            }
            Error::InvalidLocation { value, detail } => {
                write!(f, "Not a file-system location '{value}': {detail}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard {
            operation: "access".to_string(),
            detail: err.to_string(),
        }
    }
}

/// Custom Result type for the Pathname Assistant
///
/// # Examples
/// ```
/// use pathname_assistant::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an index out of range error
pub fn index_out_of_range_error(index: usize, len: usize) -> Error {
    Error::IndexOutOfRange { index, len }
}

/// Helper function to create a clipboard error
pub fn clipboard_error<E: fmt::Display>(err: E, operation: &str) -> Error {
    Error::Clipboard {
        operation: operation.to_string(),
        detail: err.to_string(),
    }
}

/// Helper function to create an empty clipboard error
pub fn no_locations_on_clipboard_error() -> Error {
    Error::NoLocationsOnClipboard
}

/// Helper function to create an invalid location error
pub fn invalid_location_error(value: &str, detail: &str) -> Error {
    Error::InvalidLocation {
        value: value.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
