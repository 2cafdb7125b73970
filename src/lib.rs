//! Idempotent "make sure this path exists" primitive.
//!
//! Given a path, [`ensure`] guarantees that an entry of a requested kind
//! (regular file or directory) exists there, optionally creating it or
//! correcting its kind, and reports whether anything changed. A leading `~`
//! component is expanded to the caller's home directory first.
//!
//! The existence check and the mutation are separate filesystem calls, so a
//! concurrent actor can race them. Callers that need atomicity must hold an
//! external lock keyed on the resolved path.
//!
//! ```no_run
//! use surepath::{ensure, EntryKind, EnsureOptions};
//!
//! let options = EnsureOptions {
//!     default_contents: b"{}\n".to_vec(),
//!     ..EnsureOptions::default()
//! };
//!
//! let created = ensure("~/.config/mytool/settings.json", EntryKind::File, &options)?;
//! println!("created: {created}");
//! # Ok::<(), surepath::EnsureError>(())
//! ```

mod api;
mod entry;
mod errors;
mod options;
mod paths;

pub use api::{ensure, ensure_dir, ensure_file};
pub use entry::EntryKind;
pub use errors::{EnsureError, FileOperation, IoError};
pub use options::EnsureOptions;
pub use paths::expand_user;
