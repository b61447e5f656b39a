//! Lexical operations on `/`-separated reference paths.
//!
//! These never touch the file system and never consult the platform
//! separator: `..` is resolved textually and symbolic links are ignored.

/// Shortest path equivalent to `path` by purely lexical processing.
///
/// Repeated separators collapse, `.` elements vanish, and `..` removes the
/// element before it where one exists. An empty result becomes `.`.
///
/// ```
/// use yangpath_core::resolver::clean;
///
/// assert_eq!(clean("a//b/./c/.."), "a/b");
/// assert_eq!(clean("/../x"), "/x");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join `dir` and `name`, ignoring empty elements, then [`clean`] the result.
///
/// Joining with an empty directory returns `name` untouched apart from
/// cleaning; joining two empty elements returns the empty string.
pub fn join(dir: &str, name: &str) -> String {
    match (dir.is_empty(), name.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean(name),
        (false, true) => clean(dir),
        (false, false) => clean(&format!("{dir}/{name}")),
    }
}

/// All but the last element of `path`, cleaned.
///
/// A path without a separator lives in `.`.
pub fn dir(path: &str) -> String {
    let head = path.rfind('/').map_or("", |idx| &path[..=idx]);
    clean(head)
}
