//! Literal Cooking
//!
//! Turns the source text of string and character literals into their
//! values. Regular literals use C# escapes (`\n`, `\x41`, `\u0041`,
//! `\U0001F600`, ...); verbatim strings double their quotes; raw strings
//! strip the indentation of their closing line.
//!
//! Unrecognized escapes are preserved literally (`\q` stays `\q`).

/// Resolve a single-character escape to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        '0' => Some('\0'),
        'a' => Some('\u{7}'),
        'b' => Some('\u{8}'),
        'e' => Some('\u{1B}'),
        'f' => Some('\u{C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{B}'),
        _ => None,
    }
}

/// Parse `digits` hex digits from the front of `rest` (exactly, or up to
/// `digits` when `variable` is set). Returns the char and the bytes used.
fn hex_escape(rest: &str, digits: usize, variable: bool) -> Option<(char, usize)> {
    let len = rest
        .bytes()
        .take(digits)
        .take_while(u8::is_ascii_hexdigit)
        .count();
    if len == 0 || (!variable && len != digits) {
        return None;
    }
    let value = u32::from_str_radix(&rest[..len], 16).ok()?;
    char::from_u32(value).map(|c| (c, len))
}

/// Cook the body of a regular string literal (between the quotes).
pub(crate) fn unescape_regular(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find('\\') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let mut chars = after.chars();
        let Some(esc) = chars.next() else {
            result.push('\\');
            rest = "";
            break;
        };

        let numeric = match esc {
            'x' => hex_escape(&after[1..], 4, true),
            'u' => hex_escape(&after[1..], 4, false),
            'U' => hex_escape(&after[1..], 8, false),
            _ => None,
        };

        if let Some((c, used)) = numeric {
            result.push(c);
            rest = &after[1 + used..];
        } else if let Some(resolved) = resolve_escape(esc) {
            result.push(resolved);
            rest = chars.as_str();
        } else {
            result.push('\\');
            result.push(esc);
            rest = chars.as_str();
        }
    }

    result.push_str(rest);
    result
}

/// Cook the body of a character literal. Bodies that cook to more than one
/// char (`'\q'`) yield their first char.
pub(crate) fn unescape_char(body: &str) -> char {
    unescape_regular(body).chars().next().unwrap_or('\0')
}

/// Cook the body of a verbatim string literal: `""` is one quote.
pub(crate) fn unescape_verbatim(body: &str) -> String {
    body.replace("\"\"", "\"")
}

/// Cook the full text of a raw string literal, delimiters included.
///
/// Single-line raw strings are taken as-is. Multi-line raw strings drop the
/// opening and closing lines and strip the closing line's whitespace from
/// the start of every content line.
pub(crate) fn cook_raw(literal: &str) -> String {
    let literal = literal.trim_start_matches('$');
    let quotes = literal.bytes().take_while(|&b| b == b'"').count();
    let Some(content) = literal.get(quotes..literal.len().saturating_sub(quotes)) else {
        return String::new();
    };

    if !content.contains('\n') {
        return content.to_string();
    }

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let (Some(last), Some(body)) = (lines.last(), lines.get(1..lines.len() - 1)) else {
        return String::new();
    };
    let indent = if last.trim().is_empty() { *last } else { "" };

    body.iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(indent).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
