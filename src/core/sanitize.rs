// src/core/sanitize.rs

/// Cells copied out of HTML tables may still carry entities.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("\u{a0}", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Entities decoded, whitespace collapsed and trimmed.
pub fn clean_cell(s: &str) -> String {
    normalize_ws(&normalize_entities(s))
}

/// Team and player codes end up in file names: ASCII letters and digits only.
pub fn is_plain_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Lowercase file-name fragment for a display name ("De'Aaron Fox" → "de_aaron_fox").
pub fn file_fragment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    out.trim_matches('_').to_string()
}
