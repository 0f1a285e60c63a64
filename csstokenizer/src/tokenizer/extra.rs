use std::borrow::Cow;
use std::iter::Peekable;
use std::ops::ControlFlow;
use std::str::Chars;

use super::code_points::{self, CodePoint};
use super::{tokenize_extended, PosedLexerDiagnostic, Token, TokenType, Tokenize};

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Resolves the escapes of an ident-like name (ident, function name without
/// the `(`, at-keyword or hash name without the marker).
///
/// Borrows `raw` when it holds no `\`. Never fails: escapes of NUL, of a
/// surrogate, of a value above U+10FFFF, and a trailing lone `\` all decode
/// to U+FFFD.
pub fn decode_ident(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    let mut chars = raw.chars().peekable();
    let mut result = String::with_capacity(raw.len());
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            escape(&mut chars, &mut result);
        } else {
            result.push(ch);
        }
    }
    Cow::Owned(result)
}

/// PRECONDITION: the `\` has been consumed.
fn escape(chars: &mut Peekable<Chars>, result: &mut String) {
    match chars.peek().copied() {
        None => result.push(REPLACEMENT_CHARACTER),
        Some(ch) if ch.is_ascii_hexdigit() => result.push(hex_escape(chars)),
        // not an escape, the backslash stands for itself
        Some('\n' | '\r' | '\x0c') => result.push('\\'),
        Some(ch) => {
            chars.next();
            result.push(ch);
        }
    }
}

/// Up to six hex digits and one optional whitespace (CR LF counting as one).
fn hex_escape(chars: &mut Peekable<Chars>) -> char {
    let mut value: u32 = 0;
    let mut digits = 0;
    while digits < 6 {
        match chars.peek().and_then(|ch| ch.to_digit(16)) {
            Some(digit) => {
                value = value * 16 + digit;
                chars.next();
                digits += 1;
            }
            None => break,
        }
    }
    match chars.peek() {
        Some('\r') => {
            chars.next();
            chars.next_if_eq(&'\n');
        }
        Some(' ' | '\t' | '\n' | '\x0c') => {
            chars.next();
        }
        _ => {}
    }
    let code = value as CodePoint;
    if value == 0 || code_points::is_surrogate(code) || code > code_points::MAX_ALLOWED_CODE_POINT {
        return REPLACEMENT_CHARACTER;
    }
    char::from_u32(value).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Whether the Extended CSS tokenization of `raw` yields a token of one of
/// the `wanted` kinds. Stops at the first match.
pub fn has_token(raw: &str, wanted: &[TokenType]) -> bool {
    has_token_with(raw, wanted, tokenize_extended)
}

/// [`has_token`] with an explicit tokenizer, e.g. [`tokenize`](super::tokenize)
/// for standard CSS.
pub fn has_token_with(raw: &str, wanted: &[TokenType], tokenizer: Tokenize) -> bool {
    let mut found = false;
    tokenizer(
        raw,
        &mut |token: Token| {
            if wanted.contains(&token.kind) {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
        &mut |_: PosedLexerDiagnostic| {},
    );
    found
}
