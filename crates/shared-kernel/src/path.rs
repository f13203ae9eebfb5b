//! String-level path composition used by the descriptors and the listing adapter.
//!
//! Descriptors carry paths as plain UTF-8 strings because that is what crosses
//! the store boundary, so these helpers work on `&str` rather than `Path`.

/// Platform separator used when composing descriptor paths.
pub const PATH_SEPARATOR: char = std::path::MAIN_SEPARATOR;

#[inline]
pub fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}

/// Appends `right` to `left` with exactly one separator between them.
///
/// `left` is never inspected for emptiness: an empty `left` yields a leading
/// separator. A `left` that already ends in a separator (a filesystem root)
/// does not get a second one.
pub fn join_with_separator(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len() + 1);
    joined.push_str(left);
    if !left.ends_with(is_separator) {
        joined.push(PATH_SEPARATOR);
    }
    joined.push_str(right);
    joined
}

/// Removes a single trailing separator unless the path is a filesystem root.
pub fn strip_trailing_separator(path: &str) -> &str {
    match path.strip_suffix(is_separator) {
        Some(rest) if !rest.is_empty() && !is_root(rest) && !rest.ends_with(is_separator) => rest,
        _ => path,
    }
}

/// Splits a cleaned path into `(parent, name)`.
///
/// A path without separators has no parent. A root has no name of its own and is
/// returned whole as the name so that rejoining yields the root again.
pub fn split_parent(path: &str) -> (&str, &str) {
    if is_root(path) {
        return ("", path);
    }
    match path.rfind(is_separator) {
        None => ("", path),
        Some(idx) => {
            let name = &path[idx + 1..];
            let parent = &path[..idx];
            if parent.is_empty() || is_root(&path[..=idx]) {
                (&path[..=idx], name)
            } else {
                (parent, name)
            }
        }
    }
}

/// Splits a file name into `(base_name, extension)` at the last dot.
///
/// A leading dot does not start an extension, so `.profile` has no extension.
/// Neither does a trailing dot: `notes.` stays whole so the name can be rebuilt.
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], &name[idx + 1..]),
        _ => (name, ""),
    }
}

#[cfg(windows)]
fn is_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes.len() {
        1 => is_separator(bytes[0] as char),
        3 => bytes[1] == b':' && is_separator(bytes[2] as char),
        _ => false,
    }
}

#[cfg(not(windows))]
fn is_root(path: &str) -> bool {
    path.len() == 1 && path.starts_with(is_separator)
}
