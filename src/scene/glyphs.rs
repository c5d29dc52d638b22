use std::borrow::Cow;

const CIRCLED_DIGITS: [&str; 9] = ["①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨"];

/// Display glyph for a 1-based choice ordinal: `①`..`⑨`, otherwise the plain numeral.
pub fn circled_ordinal(ordinal: i64) -> Cow<'static, str> {
    usize::try_from(ordinal)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| CIRCLED_DIGITS.get(i))
        .map(|s| Cow::Borrowed(*s))
        .unwrap_or_else(|| Cow::Owned(ordinal.to_string()))
}

/// Option label for a 0-based option index: `'A'`..`'Z'`.
///
/// Indices from 26 on have no letter; callers decide how to present them.
pub fn option_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/glyphs.rs"]
mod tests;
