use crate::errors::{FsError, FsResult, Op};
use crate::file::{FileInfo, JailedFile};
use crate::resolve;
use std::fs::{self, DirBuilder, OpenOptions};
use std::path::{Path, PathBuf};

/// File access confined to a root directory. Confinement is lexical: symlinks
/// inside the root are followed by the OS like anywhere else.
#[derive(Debug, Clone)]
pub struct JailedFs {
    root: PathBuf,
}

impl JailedFs {
    /// Root the file system at `dir`. The directory is not checked for
    /// existence; an empty path means the current directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let root = dir.into();
        let root = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        resolve::resolve(&self.root, name)
    }

    pub fn join<I, S>(&self, elems: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        resolve::join(&self.root, elems)
    }

    fn target(&self, op: Op, name: &str) -> PathBuf {
        let path = self.resolve(name);
        tracing::trace!(%op, name, path = %path.display(), "resolved");
        path
    }

    pub fn open(&self, name: &str) -> FsResult<JailedFile> {
        let path = self.target(Op::Open, name);
        match fs::File::open(&path) {
            Ok(f) => Ok(JailedFile::new(f, path)),
            Err(e) => Err(FsError::new(Op::Open, name, path, e)),
        }
    }

    /// Open a file with caller-chosen options. On Unix `mode` sets the
    /// permission bits of a newly created file; elsewhere it is ignored.
    pub fn open_file(&self, name: &str, options: &OpenOptions, mode: u32) -> FsResult<JailedFile> {
        let path = self.target(Op::Open, name);
        let mut options = options.clone();
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        match options.open(&path) {
            Ok(f) => Ok(JailedFile::new(f, path)),
            Err(e) => Err(FsError::new(Op::Open, name, path, e)),
        }
    }

    /// Create or truncate a file, opened for reading and writing. Missing
    /// parent directories are not created.
    pub fn create(&self, name: &str) -> FsResult<JailedFile> {
        let path = self.target(Op::Create, name);
        let opened = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path);
        match opened {
            Ok(f) => Ok(JailedFile::new(f, path)),
            Err(e) => Err(FsError::new(Op::Create, name, path, e)),
        }
    }

    pub fn stat(&self, name: &str) -> FsResult<FileInfo> {
        let path = self.target(Op::Stat, name);
        match fs::metadata(&path) {
            Ok(meta) => Ok(FileInfo::from_metadata(&path, &meta)),
            Err(e) => Err(FsError::new(Op::Stat, name, path, e)),
        }
    }

    pub fn mkdir(&self, name: &str, mode: u32) -> FsResult<()> {
        let path = self.target(Op::Mkdir, name);
        dir_builder(false, mode)
            .create(&path)
            .map_err(|e| FsError::new(Op::Mkdir, name, path, e))
    }

    pub fn mkdir_all(&self, name: &str, mode: u32) -> FsResult<()> {
        let path = self.target(Op::MkdirAll, name);
        dir_builder(true, mode)
            .create(&path)
            .map_err(|e| FsError::new(Op::MkdirAll, name, path, e))
    }

    pub fn remove(&self, name: &str) -> FsResult<()> {
        let path = self.target(Op::Remove, name);
        let removed = fs::symlink_metadata(&path).and_then(|meta| {
            if meta.is_dir() {
                fs::remove_dir(&path)
            } else {
                fs::remove_file(&path)
            }
        });
        removed.map_err(|e| FsError::new(Op::Remove, name, path, e))
    }
}

fn dir_builder(recursive: bool, mode: u32) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder
}
