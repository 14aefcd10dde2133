use uuid::Uuid;

/// Extension of an upload filename: everything after the final dot, case
/// preserved. A filename with no dot has an empty extension.
pub fn file_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// Generate a globally unique storage key for an upload.
///
/// `{uuid}.{ext}`, or the bare uuid when the filename has no extension.
pub fn storage_key(filename: &str) -> String {
    let token = Uuid::new_v4();
    match file_extension(filename) {
        "" => token.to_string(),
        ext => format!("{token}.{ext}"),
    }
}
