//! String escape processing.

/// Resolve the character after a backslash, if it is a known escape.
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Process escape sequences in the contents of a string literal.
///
/// Unknown escapes are kept verbatim, backslash included.
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(next) => match resolve_escape(next) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(next);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}
