use std::borrow::Cow;

/// Quote a string for use as a SQL literal:
/// - value is wrapped in single quotes
/// - internal `'` becomes `''`
/// - nothing else is escaped (backslashes and control characters pass through)
pub fn escape_sql_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');

    for ch in s.chars() {
        if ch == '\'' {
            out.push('\''); // double the quote
        }
        out.push(ch);
    }

    out.push('\'');
    out
}

/// Drop `_` digit separators from a numeric candidate.
///
/// Each `_` must sit between two ASCII digits (`1_000`, `0.000_1`); any other
/// placement returns `None`, so the cell is not a number.
pub fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(Cow::Owned(out))
}

/// Render a finite float as an unquoted SQL numeric token.
///
/// Integral values print every digit with no fractional part (`1e3` -> `1000`),
/// everything else uses the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        // -0.0 + 0.0 == +0.0, so negative zero prints as `0`
        let value = value + 0.0;
        format!("{value:.0}")
    } else {
        ryu::Buffer::new().format(value).to_string()
    }
}
