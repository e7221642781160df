//! Skill normalization for credential skill fields.
//!
//! The backend stores skills as free text: zero, one, or several skill names
//! joined by commas. This module turns one such field into trimmed tokens.

/// Normalize a credential's free-text skill field into zero or more trimmed,
/// non-empty skill tokens.
///
/// - Absent or empty input produces no tokens.
/// - A field containing commas is split on every comma; each piece is trimmed
///   and pieces that trim to empty are dropped.
/// - A field with no comma yields its single trimmed value, unless that trims
///   to empty.
///
/// Tokens are NOT case-folded: "Python" and "python" stay distinct tokens.
/// That mirrors the source data's behavior and is a known limitation, not
/// something to silently fix here.
///
/// Pure and total; idempotent on already-normalized single-skill strings.
pub fn normalize_skill_field(field: Option<&str>) -> Vec<String> {
    let Some(raw) = field else {
        return Vec::new();
    };

    if raw.contains(',') {
        raw.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_owned()]
        }
    }
}
