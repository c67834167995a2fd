//! Terminal-safe rendering of untrusted text.
//!
//! Model output is rendered straight into the terminal, so escape sequences
//! (cursor movement, OSC 52 clipboard writes, hyperlinks) and stray control
//! characters must never reach the backend.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{9b}';
const C1_OSC: char = '\u{9d}';

/// Strip escape sequences and control characters, keeping `\n` and `\t`.
///
/// Returns `Cow::Borrowed` when the input is already clean.
///
/// ```
/// use cyberelement_types::sanitize_terminal_text;
///
/// assert_eq!(sanitize_terminal_text("Carbon"), "Carbon");
/// assert_eq!(sanitize_terminal_text("C\x1b[2Jarbon"), "Carbon");
/// ```
#[must_use]
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_disallowed) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => match chars.peek().copied() {
                Some('[') => {
                    chars.next();
                    skip_csi(&mut chars);
                }
                Some(']' | 'P' | '^' | '_' | 'X') => {
                    chars.next();
                    skip_string_sequence(&mut chars);
                }
                // Two-character escapes (ESC c, ESC 7, ...).
                Some(_) => {
                    chars.next();
                }
                None => {}
            },
            C1_CSI => skip_csi(&mut chars),
            C1_OSC => skip_string_sequence(&mut chars),
            c if is_disallowed(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_disallowed(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        '\r' => true,
        c => c.is_control(),
    }
}

/// Consume CSI parameters up to and including the final byte (`@`..=`~`).
fn skip_csi(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    for c in chars.by_ref() {
        if ('@'..='~').contains(&c) {
            break;
        }
    }
}

/// Consume an OSC/DCS-style payload terminated by BEL or ST (`ESC \`).
fn skip_string_sequence(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == BEL || c == '\u{9c}' {
            break;
        }
        if c == ESC {
            if chars.peek() == Some(&'\\') {
                chars.next();
            }
            break;
        }
    }
}
