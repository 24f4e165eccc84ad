//! Collects file-system locations and turns them into text.
//!
//! Locations are kept in a [`LocationSet`] (ordered, no duplicates) and
//! rendered with a [`PathnameFormatter`] in one of four [`Format`]s. The
//! [`Session`] ties both together and carries out the user's commands.

pub use cli::*;
pub use errors::*;
pub use export::{ExportKind, export_text, filename, filename_stem};
pub use format::{Format, PathnameFormatter};
pub use location::{Location, Provider};
pub use location_set::LocationSet;
pub use session::{Command, Requirement, Session};

pub mod cli;
pub mod clipboard;
pub mod config;
mod constants;
mod errors;
pub mod export;
pub mod format;
pub mod intake;
pub mod location;
pub mod location_set;
pub mod logging;
pub mod session;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::clipboard::{
        MemoryClipboard, SystemClipboard, TextClipboard, is_clipboard_keeper, keep_clipboard_text,
    };
    pub use crate::errors::{
        clipboard_error, file_operation_error, generic_error,
        index_out_of_range_error, invalid_location_error, no_locations_on_clipboard_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{RunOptions, RunOutcome, run};
    pub use crate::{ExportKind, Format, Location, LocationSet, PathnameFormatter, Session};
}
