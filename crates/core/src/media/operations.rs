/// Sorts media names case-insensitively.
///
/// Names that compare equal ignoring case fall back to byte order so the
/// listing is identical on every call.
pub fn sort_media_names(names: &mut [String]) {
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

/// Confirmation text returned after a successful delete.
pub fn delete_confirmation(name: &str) -> String {
    format!("Ray destroyed successfully: {name}")
}
