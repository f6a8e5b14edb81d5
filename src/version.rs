/// Prefix every release tag carries.
pub const TAG_PREFIX: char = 'v';

/// Normalizes a user supplied version into a tag name.
///
/// Prepends `v` unless the string already starts with it. No other
/// validation is performed, so `"1.0"`, `"2024-rc"` and `"vnext"` are all
/// accepted as given.
///
/// # Example
/// ```
/// use pypublish::version::normalize_version;
/// assert_eq!(normalize_version("0.2.0"), "v0.2.0");
/// assert_eq!(normalize_version("v0.2.0"), "v0.2.0");
/// ```
pub fn normalize_version(version: &str) -> String {
    if is_normalized(version) {
        version.to_string()
    } else {
        format!("{}{}", TAG_PREFIX, version)
    }
}

/// Returns true if the version already carries the tag prefix.
pub fn is_normalized(version: &str) -> bool {
    version.starts_with(TAG_PREFIX)
}
