// src/core/sanitize.rs

/// Join text fragments the way cells are read: each fragment trimmed,
/// empty ones dropped, the rest joined with `sep`.
pub fn join_fragments<'a, I>(fragments: I, sep: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Keep alphanumerics, spaces, `_` and `-`, then trim.
/// Falls back to `table_<idx>` when the title is missing or empty.
pub fn sanitize_title(title: Option<&str>, idx: usize) -> String {
    let fallback;
    let raw = match title.filter(|t| !t.is_empty()) {
        Some(t) => t,
        None => {
            fallback = format!("table_{idx}");
            &fallback
        }
    };
    raw.chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}
