//! Extension inference for module references.

use std::borrow::Cow;

/// Canonical module file extension.
pub const MODULE_EXTENSION: &str = ".yang";

/// Directory separator inside module references.
///
/// References use `/` on every platform.
pub const REFERENCE_SEPARATOR: char = '/';

/// Whether `reference` names a path rather than a bare module.
pub fn has_separator(reference: &str) -> bool {
    reference.contains(REFERENCE_SEPARATOR)
}

/// Append [`MODULE_EXTENSION`] to a bare reference that lacks it.
///
/// References containing a separator name an exact file and are returned
/// unchanged, with or without the extension.
///
/// ```
/// use yangpath_core::complete_reference;
///
/// assert_eq!(complete_reference("ietf-yang-types"), "ietf-yang-types.yang");
/// assert_eq!(complete_reference("ietf-yang-types.yang"), "ietf-yang-types.yang");
/// assert_eq!(complete_reference("models/ietf-yang-types"), "models/ietf-yang-types");
/// ```
pub fn complete_reference(reference: &str) -> Cow<'_, str> {
    if has_separator(reference) || reference.ends_with(MODULE_EXTENSION) {
        Cow::Borrowed(reference)
    } else {
        Cow::Owned(format!("{reference}{MODULE_EXTENSION}"))
    }
}
