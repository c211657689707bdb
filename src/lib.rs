//! File access confined to a root directory.
//!
//! A name from an untrusted source (say, a URL path) is turned into a path
//! inside the root by purely lexical means: the name is forced absolute,
//! cleaned, and appended to the root. `..` chains, absolute paths and repeated
//! separators all land somewhere below the root, so an escape attempt is never
//! reported as such. It simply fails like any other missing file, or succeeds
//! against a file that really is inside the root.
//!
//! ```
//! use jailfs::JailedFs;
//! use std::path::Path;
//!
//! let fs = JailedFs::new("/u/app1");
//! # #[cfg(unix)] {
//! assert_eq!(fs.resolve("index.html"), Path::new("/u/app1/index.html"));
//! assert_eq!(fs.resolve("../secret.html"), Path::new("/u/app1/secret.html"));
//! assert_eq!(fs.resolve("/etc/passwd"), Path::new("/u/app1/etc/passwd"));
//! assert_eq!(fs.join(["..", "..", "etc", "passwd"]), Path::new("/u/app1/etc/passwd"));
//! # }
//! ```
//!
//! # Limits
//!
//! Symlinks are not resolved. A link inside the root that points elsewhere is
//! followed by the OS as usual, and so is a root that is itself replaced.

pub mod config;
mod errors;
mod file;
mod fs;
pub mod logging;
mod resolve;
mod serve;
pub mod server;

pub use errors::{ErrorKind, FsError, FsResult, Op};
pub use file::{File, FileInfo, JailedFile};
pub use fs::JailedFs;
pub use resolve::{clean, from_slash, join, resolve, to_slash};
