use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const WINDOWS_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduce a client-supplied filename to a flat, safe basename.
///
/// Accents are folded through NFKD before non-ASCII is dropped. Path
/// separators become underscores, anything outside `[A-Za-z0-9_.-]` is
/// dropped, and leading/trailing dots and underscores are stripped, so the
/// result can never name a parent directory. Returns `None` if nothing is
/// left. Windows device names are prefixed only when running on Windows.
pub fn secure_filename(filename: &str) -> Option<String> {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    let disallowed = Regex::new(r"[^A-Za-z0-9_.-]").expect("static pattern");
    let cleaned = disallowed.replace_all(&joined, "");
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        return None;
    }

    let stem = cleaned.split('.').next().unwrap_or_default().to_uppercase();
    if cfg!(windows) && WINDOWS_DEVICE_NAMES.contains(&stem.as_str()) {
        return Some(format!("_{}", cleaned));
    }

    Some(cleaned.to_string())
}
