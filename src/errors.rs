use miette::Diagnostic;
use thiserror::Error;

use crate::entry::EntryKind;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("removing a file")]
    RemoveFile,
    #[error("removing a directory")]
    RemoveDir,
    #[error("creating a directory")]
    CreateDir,
    #[error("writing a file")]
    WriteFile,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(surepath::io),
    help("Check file permissions, disk space, or that the path is correct.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum EnsureError {
    #[error("path is empty after home expansion")]
    #[diagnostic(code(surepath::ensure::empty_path), help("Pass a non-empty path."))]
    EmptyPath,

    #[error("the {kind} at '{path}' doesn't exist")]
    #[diagnostic(
        code(surepath::ensure::not_found),
        help("Create the entry first, or unset `must_exist` to let the call create it.")
    )]
    NotFound {
        path: std::path::PathBuf,
        kind: EntryKind,
    },

    #[error("the entry at '{path}' should be a {expected}, found a {found}")]
    #[diagnostic(
        code(surepath::ensure::kind_mismatch),
        help("Remove the entry, or unset `verify_kind` to ignore the kind.")
    )]
    KindMismatch {
        path: std::path::PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("I/O error within the ensure operation")]
    #[diagnostic(code(surepath::ensure::io))]
    Io(#[from] IoError),
}
