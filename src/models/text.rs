//! Text normalization shared by the record types.

use serde::{Deserialize, Deserializer};

/// Trims a text value, mapping absent or whitespace-only input to `None`.
///
/// Whitespace is Unicode whitespace, so a value made only of non-breaking
/// spaces (U+00A0) or other Unicode spaces is absent as well.
///
/// # Examples
///
/// ```
/// use payroll_model::models::normalize_text;
///
/// assert_eq!(normalize_text(Some("  Saskatoon ")), Some("Saskatoon".to_string()));
/// assert_eq!(normalize_text(Some(" \t ")), None);
/// assert_eq!(normalize_text(None), None);
/// ```
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

/// Deserializes optional text and applies [`normalize_text`].
pub(crate) fn deserialize_normalized<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_text(value.as_deref()))
}
