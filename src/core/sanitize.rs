// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
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

/// Identity slug for zones and requirements:
/// lowercase, spaces → `_`, double quotes dropped.
///
/// "Nutrition Unit" → "nutrition_unit", `Can of "Hot Rod"` → "can_of_hot_rod"
pub fn create_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|&c| c != '"')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
