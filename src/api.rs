use std::{fs, path::Path};

use crate::{
    entry::EntryKind,
    errors::{EnsureError, FileOperation, IoError},
    options::EnsureOptions,
    paths::expand_user,
};

/// Ensures an entry of the requested `kind` exists at `path`, creating or
/// correcting it according to `options`.
///
/// A leading `~` component is expanded to the caller's home directory before
/// anything else. Creation is single-level: a missing parent directory is an
/// error, not an invitation to create the whole chain. Correcting a directory
/// into a file removes it non-recursively, so a non-empty directory surfaces
/// the underlying I/O error instead of losing its contents.
///
/// Returns `true` when an entry was created or its kind was corrected, and
/// `false` when the path was already in the requested state.
///
/// The existence check and the mutation are separate filesystem calls: a
/// concurrent actor can change the path in between. Callers that need
/// atomicity must serialize calls externally, e.g. behind a lock keyed on
/// the resolved path. On failure there is no rollback either; if a
/// correction's delete succeeded and its create failed, the original entry
/// is already gone.
///
/// # Errors
///
/// Returns an [`EnsureError`] if:
///
/// - The path is empty after home expansion.
/// - `options.must_exist` is set and no entry exists at the path.
/// - `options.must_exist` and `options.verify_kind` are set and the existing
///   entry has the wrong kind.
/// - A remove, create, or write primitive fails.
pub fn ensure(
    path: impl AsRef<Path>,
    kind: EntryKind,
    options: &EnsureOptions,
) -> Result<bool, EnsureError> {
    let path = expand_user(path.as_ref());
    let path: &Path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(EnsureError::EmptyPath);
    }

    let existing = EntryKind::of(path);

    // Read-only precondition branch: nothing is ever created here, even when
    // the entry exists and matches.
    if options.must_exist {
        let Some(found) = existing else {
            return Err(EnsureError::NotFound {
                path: path.to_path_buf(),
                kind,
            });
        };

        if options.verify_kind && found != kind {
            return Err(EnsureError::KindMismatch {
                path: path.to_path_buf(),
                expected: kind,
                found,
            });
        }

        return Ok(false);
    }

    match existing {
        Some(found) if found == kind || !options.auto_correct_kind => Ok(false),
        Some(EntryKind::Directory) => {
            remove_dir(path)?;
            write_file(path, &options.default_contents)?;

            Ok(true)
        }
        Some(EntryKind::File) => {
            remove_file(path)?;
            create_dir(path)?;

            Ok(true)
        }
        None if kind == EntryKind::Directory => {
            create_dir(path)?;

            Ok(true)
        }
        None => {
            write_file(path, &options.default_contents)?;

            Ok(true)
        }
    }
}

/// Ensures a regular file exists at `path`, with the default policy and
/// empty initial contents.
///
/// # Errors
///
/// Same failure modes as [`ensure`].
pub fn ensure_file(path: impl AsRef<Path>) -> Result<bool, EnsureError> {
    ensure(path, EntryKind::File, &EnsureOptions::default())
}

/// Ensures a directory exists at `path`, with the default policy.
///
/// # Errors
///
/// Same failure modes as [`ensure`].
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<bool, EnsureError> {
    ensure(path, EntryKind::Directory, &EnsureOptions::default())
}

fn remove_file(path: &Path) -> Result<(), IoError> {
    log::debug!("removing file: {}", path.display());

    fs::remove_file(path)
        .map_err(|error| IoError::new(FileOperation::RemoveFile, path.to_path_buf(), error))
}

// Non-recursive removal: a non-empty directory fails here.
fn remove_dir(path: &Path) -> Result<(), IoError> {
    log::debug!("removing directory: {}", path.display());

    fs::remove_dir(path)
        .map_err(|error| IoError::new(FileOperation::RemoveDir, path.to_path_buf(), error))
}

// Single-level creation: a missing parent fails here.
fn create_dir(path: &Path) -> Result<(), IoError> {
    log::debug!("creating directory: {}", path.display());

    fs::create_dir(path)
        .map_err(|error| IoError::new(FileOperation::CreateDir, path.to_path_buf(), error))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), IoError> {
    log::debug!("writing file: {}", path.display());

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::WriteFile, path.to_path_buf(), error))
}
