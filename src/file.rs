use std::fs::{self, Metadata};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Read, write, seek, stat and list. Closing is dropping the handle.
pub trait File: Read + Write + Seek {
    fn stat(&self) -> io::Result<FileInfo>;

    /// Directory entries sorted by name, continuing where the previous call
    /// stopped. `Some(n)` returns at most `n` entries and an empty `Vec` once
    /// the listing is exhausted; `None` returns everything left.
    fn read_dir(&mut self, count: Option<usize>) -> io::Result<Vec<FileInfo>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub is_dir: bool,
    pub readonly: bool,
}

impl FileInfo {
    pub(crate) fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            size: meta.len(),
            modified: meta.modified().ok(),
            is_dir: meta.is_dir(),
            readonly: meta.permissions().readonly(),
        }
    }
}

#[derive(Debug)]
pub struct JailedFile {
    inner: fs::File,
    path: PathBuf,
    // remaining entries, reversed so paging pops from the back
    listing: Option<Vec<FileInfo>>,
}

impl JailedFile {
    pub(crate) fn new(inner: fs::File, path: PathBuf) -> Self {
        Self { inner, path, listing: None }
    }

    /// The resolved path this handle was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn into_inner(self) -> fs::File {
        self.inner
    }

    // Entries are read by path, so the path must still name the opened directory.
    fn list(&self) -> io::Result<Vec<FileInfo>> {
        let meta = self.inner.metadata()?;
        if !meta.is_dir() {
            return Err(io::ErrorKind::NotADirectory.into());
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let current = fs::metadata(&self.path)?;
            if (current.dev(), current.ino()) != (meta.dev(), meta.ino()) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} no longer names the opened directory", self.path.display()),
                ));
            }
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            entries.push(FileInfo::from_metadata(&entry.path(), &meta));
        }
        entries.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(entries)
    }
}

impl File for JailedFile {
    fn stat(&self) -> io::Result<FileInfo> {
        let meta = self.inner.metadata()?;
        Ok(FileInfo::from_metadata(&self.path, &meta))
    }

    fn read_dir(&mut self, count: Option<usize>) -> io::Result<Vec<FileInfo>> {
        if self.listing.is_none() {
            self.listing = Some(self.list()?);
        }
        let Some(remaining) = self.listing.as_mut() else {
            return Ok(Vec::new());
        };
        let take = count.map_or(remaining.len(), |n| n.min(remaining.len()));
        let split = remaining.len() - take;
        let mut page = remaining.split_off(split);
        page.reverse();
        Ok(page)
    }
}

impl Deref for JailedFile {
    type Target = fs::File;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for JailedFile {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Read for JailedFile {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for JailedFile {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for JailedFile {
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
