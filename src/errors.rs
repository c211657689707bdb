use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Open,
    Create,
    Stat,
    Mkdir,
    MkdirAll,
    Remove,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Open => "open",
            Op::Create => "create",
            Op::Stat => "stat",
            Op::Mkdir => "mkdir",
            Op::MkdirAll => "mkdir_all",
            Op::Remove => "remove",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    /// A parent of the file or directory being created does not exist.
    NoSuchParent,
    AlreadyExists,
    PermissionDenied,
    IsADirectory,
    NotADirectory,
    DirectoryNotEmpty,
    Other,
}

#[derive(Debug, Error)]
#[error("{op} {name:?}: {source}")]
pub struct FsError {
    op: Op,
    name: String,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl FsError {
    pub(crate) fn new(op: Op, name: &str, path: PathBuf, source: io::Error) -> Self {
        Self {
            op,
            name: name.to_string(),
            path,
            source,
        }
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    pub fn kind(&self) -> ErrorKind {
        match self.source.kind() {
            io::ErrorKind::NotFound if matches!(self.op, Op::Create | Op::Mkdir) => {
                ErrorKind::NoSuchParent
            }
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::IsADirectory => ErrorKind::IsADirectory,
            io::ErrorKind::NotADirectory => ErrorKind::NotADirectory,
            io::ErrorKind::DirectoryNotEmpty => ErrorKind::DirectoryNotEmpty,
            _ => ErrorKind::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::NoSuchParent => "NoSuchParent",
            ErrorKind::AlreadyExists => "AlreadyExists",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IsADirectory => "IsADirectory",
            ErrorKind::NotADirectory => "NotADirectory",
            ErrorKind::DirectoryNotEmpty => "DirectoryNotEmpty",
            ErrorKind::Other => "Other",
        }
    }

    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}

pub type FsResult<T> = Result<T, FsError>;
