/// Normalization applied before every province/city comparison: trim
/// surrounding whitespace and lowercase. Absent or blank input collapses
/// to the empty string, so "no location" and "blank location" compare
/// equal everywhere.
pub fn normalize(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_lowercase()
}
