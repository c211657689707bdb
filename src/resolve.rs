//! Lexical path confinement.
//!
//! Names use `/` as separator on every host. A name is forced absolute, cleaned,
//! and appended to the root, so `..` can never climb above it. Nothing here
//! touches the filesystem; symlinks inside the root are not resolved.

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Lexically clean a slash-separated path.
///
/// Repeated slashes collapse, `.` elements vanish, and `..` removes the element
/// before it. A `..` at the start of a rooted path is dropped; an unrooted path
/// keeps its leading `..` elements. The empty result is `"."`.
///
/// ```
/// assert_eq!(jailfs::clean("a//b/./../c"), "a/c");
/// assert_eq!(jailfs::clean("/../../etc"), "/etc");
/// assert_eq!(jailfs::clean("../x"), "../x");
/// assert_eq!(jailfs::clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut elems: Vec<&str> = Vec::new();
    for elem in path.split('/') {
        match elem {
            "" | "." => {}
            ".." => {
                if elems.last().is_some_and(|e| *e != "..") {
                    elems.pop();
                } else if !rooted {
                    elems.push("..");
                }
            }
            e => elems.push(e),
        }
    }
    let body = elems.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Map `name` to a path that is `root` itself or lexically below it.
///
/// Absolute names, `..` chains and repeated separators all degrade to some
/// path under the root; nothing is rejected. The root is used as given.
pub fn resolve(root: &Path, name: &str) -> PathBuf {
    let cleaned = clean(&format!("/{}", to_slash(name)));
    let rel = &cleaned[1..];
    if rel.is_empty() {
        return root.to_path_buf();
    }

    let mut joined = OsString::from(root.as_os_str());
    let ends_with_sep = root
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|b| is_separator(*b as char));
    if !joined.is_empty() && !ends_with_sep {
        joined.push(MAIN_SEPARATOR_STR);
    }
    joined.push(from_slash(rel).as_ref());
    PathBuf::from(joined)
}

/// Join slash-separated elements, then [`resolve`] the result against `root`.
///
/// Empty elements are ignored.
pub fn join<I, S>(root: &Path, elems: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = elems
        .into_iter()
        .filter_map(|e| {
            let e = e.as_ref();
            (!e.is_empty()).then(|| e.to_string())
        })
        .collect();
    if parts.is_empty() {
        return root.to_path_buf();
    }
    resolve(root, &clean(&parts.join("/")))
}

/// Replace the host separator with `/`. A no-op where the host separator is `/`.
pub fn to_slash(name: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR == '/' {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.replace(MAIN_SEPARATOR, "/"))
    }
}

/// Replace `/` with the host separator. A no-op where the host separator is `/`.
pub fn from_slash(name: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR == '/' {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.replace('/', MAIN_SEPARATOR_STR))
    }
}
