//! Backslash escape decoding for property values.
//!
//! Legacy layout files store control characters as source-text escapes
//! (`\n`, `\t`, `é`, ...). Decoding turns them back into the actual
//! characters before the value lands in the output document.

use std::str::Chars;

/// Decode backslash escape sequences in `raw`.
///
/// Supports the common C-style escapes (`\n \t \r \\ \' \" \0 \a \b \f \v`)
/// plus `\xHH`, `\uHHHH`, and `\UHHHHHHHH`. Total over all inputs: unknown
/// or malformed sequences pass through verbatim.
pub fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some(marker @ ('x' | 'u' | 'U')) => {
                let len = match marker {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                decode_hex_escape(&mut chars, &mut out, marker, len);
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

fn decode_hex_escape(chars: &mut Chars, out: &mut String, marker: char, len: usize) {
    let mut digits = String::with_capacity(len);
    for _ in 0..len {
        match chars.clone().next() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(c);
                chars.next();
            }
            _ => break,
        }
    }

    if digits.len() == len {
        if let Some(decoded) = u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(char::from_u32)
        {
            out.push(decoded);
            return;
        }
    }

    // Short or unrepresentable sequence: keep the source text as-is.
    out.push('\\');
    out.push(marker);
    out.push_str(&digits);
}
