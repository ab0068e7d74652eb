/// Normalize free-text entries for overlap testing.
///
/// Each entry is lowercased and stripped of everything that is not an ASCII
/// letter or digit. Order and duplicates are preserved.
pub fn normalize<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries.iter().map(|entry| normalize_entry(entry.as_ref())).collect()
}

/// Normalize a single entry (see [`normalize`])
#[inline]
pub fn normalize_entry(entry: &str) -> String {
    entry
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Count entries of `mine` that also appear in `theirs`, after normalization.
///
/// Every matching entry of `mine` counts, so a repeated entry counts once per
/// repetition.
pub fn count_shared<S: AsRef<str>>(mine: &[S], theirs: &[S]) -> u32 {
    let theirs = normalize(theirs);
    let shared = normalize(mine)
        .iter()
        .filter(|entry| theirs.contains(entry))
        .count();
    u32::try_from(shared).unwrap_or(u32::MAX)
}
