//! Code-point classes of [CSS Syntax Module Level 3](https://drafts.csswg.org/css-syntax/#tokenizer-definitions).
//!
//! The tokenizer buffer stores one `i32` slot per code point, with [`EOF`] as the
//! trailing sentinel. Every predicate here accepts that sentinel and never classifies it.

pub type CodePoint = i32;

/// End-of-file sentinel. Negative, so it compares unequal to every real code point.
pub const EOF: CodePoint = -1;

pub const NULL: CodePoint = 0x00;
pub const CHARACTER_TABULATION: CodePoint = '\t' as CodePoint;
pub const LINE_FEED: CodePoint = '\n' as CodePoint;
pub const LINE_TABULATION: CodePoint = 0x0B;
pub const FORM_FEED: CodePoint = 0x0C;
pub const CARRIAGE_RETURN: CodePoint = '\r' as CodePoint;
pub const SHIFT_OUT: CodePoint = 0x0E;
pub const INFORMATION_SEPARATOR_ONE: CodePoint = 0x1F;
pub const SPACE: CodePoint = ' ' as CodePoint;
pub const EXCLAMATION_MARK: CodePoint = '!' as CodePoint;
pub const QUOTATION_MARK: CodePoint = '"' as CodePoint;
pub const NUMBER_SIGN: CodePoint = '#' as CodePoint;
pub const PERCENTAGE_SIGN: CodePoint = '%' as CodePoint;
pub const APOSTROPHE: CodePoint = '\'' as CodePoint;
pub const LEFT_PARENTHESIS: CodePoint = '(' as CodePoint;
pub const RIGHT_PARENTHESIS: CodePoint = ')' as CodePoint;
pub const ASTERISK: CodePoint = '*' as CodePoint;
pub const PLUS_SIGN: CodePoint = '+' as CodePoint;
pub const COMMA: CodePoint = ',' as CodePoint;
pub const HYPHEN_MINUS: CodePoint = '-' as CodePoint;
pub const FULL_STOP: CodePoint = '.' as CodePoint;
pub const SOLIDUS: CodePoint = '/' as CodePoint;
pub const DIGIT_ZERO: CodePoint = '0' as CodePoint;
pub const DIGIT_NINE: CodePoint = '9' as CodePoint;
pub const COLON: CodePoint = ':' as CodePoint;
pub const SEMICOLON: CodePoint = ';' as CodePoint;
pub const LESS_THAN_SIGN: CodePoint = '<' as CodePoint;
pub const GREATER_THAN_SIGN: CodePoint = '>' as CodePoint;
pub const COMMERCIAL_AT: CodePoint = '@' as CodePoint;
pub const LATIN_CAPITAL_LETTER_A: CodePoint = 'A' as CodePoint;
pub const LATIN_CAPITAL_LETTER_E: CodePoint = 'E' as CodePoint;
pub const LATIN_CAPITAL_LETTER_F: CodePoint = 'F' as CodePoint;
pub const LATIN_CAPITAL_LETTER_Z: CodePoint = 'Z' as CodePoint;
pub const LEFT_SQUARE_BRACKET: CodePoint = '[' as CodePoint;
pub const REVERSE_SOLIDUS: CodePoint = '\\' as CodePoint;
pub const RIGHT_SQUARE_BRACKET: CodePoint = ']' as CodePoint;
pub const LOW_LINE: CodePoint = '_' as CodePoint;
pub const LATIN_SMALL_LETTER_A: CodePoint = 'a' as CodePoint;
pub const LATIN_SMALL_LETTER_E: CodePoint = 'e' as CodePoint;
pub const LATIN_SMALL_LETTER_F: CodePoint = 'f' as CodePoint;
pub const LATIN_SMALL_LETTER_Z: CodePoint = 'z' as CodePoint;
pub const LEFT_CURLY_BRACKET: CodePoint = '{' as CodePoint;
pub const RIGHT_CURLY_BRACKET: CodePoint = '}' as CodePoint;
pub const DELETE: CodePoint = 0x7F;
pub const CONTROL: CodePoint = 0x80;
pub const LEADING_SURROGATE_START: CodePoint = 0xD800;
pub const LEADING_SURROGATE_END: CodePoint = 0xDBFF;
pub const TRAILING_SURROGATE_START: CodePoint = 0xDC00;
pub const TRAILING_SURROGATE_END: CodePoint = 0xDFFF;
pub const BYTE_ORDER_MARK: CodePoint = 0xFEFF;
pub const REPLACEMENT_CHARACTER: CodePoint = 0xFFFD;

/// https://drafts.csswg.org/css-syntax/#maximum-allowed-code-point
pub const MAX_ALLOWED_CODE_POINT: CodePoint = 0x10FFFF;

/// https://drafts.csswg.org/css-syntax/#digit
#[inline]
pub fn is_digit(c: CodePoint) -> bool {
    (DIGIT_ZERO..=DIGIT_NINE).contains(&c)
}

/// https://drafts.csswg.org/css-syntax/#hex-digit
#[inline]
pub fn is_hex_digit(c: CodePoint) -> bool {
    is_digit(c)
        || (LATIN_CAPITAL_LETTER_A..=LATIN_CAPITAL_LETTER_F).contains(&c)
        || (LATIN_SMALL_LETTER_A..=LATIN_SMALL_LETTER_F).contains(&c)
}

#[inline]
pub fn is_uppercase_letter(c: CodePoint) -> bool {
    (LATIN_CAPITAL_LETTER_A..=LATIN_CAPITAL_LETTER_Z).contains(&c)
}

#[inline]
pub fn is_lowercase_letter(c: CodePoint) -> bool {
    (LATIN_SMALL_LETTER_A..=LATIN_SMALL_LETTER_Z).contains(&c)
}

#[inline]
pub fn is_letter(c: CodePoint) -> bool {
    is_uppercase_letter(c) || is_lowercase_letter(c)
}

/// https://drafts.csswg.org/css-syntax/#non-ascii-code-point
#[inline]
pub fn is_non_ascii(c: CodePoint) -> bool {
    c >= CONTROL
}

/// https://drafts.csswg.org/css-syntax/#ident-start-code-point
#[inline]
pub fn is_ident_start(c: CodePoint) -> bool {
    is_letter(c) || is_non_ascii(c) || c == LOW_LINE
}

/// https://drafts.csswg.org/css-syntax/#ident-code-point
#[inline]
pub fn is_ident_code_point(c: CodePoint) -> bool {
    is_ident_start(c) || is_digit(c) || c == HYPHEN_MINUS
}

/// https://drafts.csswg.org/css-syntax/#non-printable-code-point
#[inline]
pub fn is_non_printable(c: CodePoint) -> bool {
    (NULL..=0x08).contains(&c)
        || c == LINE_TABULATION
        || (SHIFT_OUT..=INFORMATION_SEPARATOR_ONE).contains(&c)
        || c == DELETE
}

/// https://drafts.csswg.org/css-syntax/#newline
///
/// The input is not preprocessed, so CR and FF count as newlines on their own.
#[inline]
pub fn is_newline(c: CodePoint) -> bool {
    c == LINE_FEED || c == CARRIAGE_RETURN || c == FORM_FEED
}

/// https://drafts.csswg.org/css-syntax/#whitespace
#[inline]
pub fn is_whitespace(c: CodePoint) -> bool {
    is_newline(c) || c == CHARACTER_TABULATION || c == SPACE
}

#[inline]
pub fn is_quote(c: CodePoint) -> bool {
    c == QUOTATION_MARK || c == APOSTROPHE
}

/// https://infra.spec.whatwg.org/#leading-surrogate
#[inline]
pub fn is_leading_surrogate(c: CodePoint) -> bool {
    (LEADING_SURROGATE_START..=LEADING_SURROGATE_END).contains(&c)
}

/// https://infra.spec.whatwg.org/#trailing-surrogate
#[inline]
pub fn is_trailing_surrogate(c: CodePoint) -> bool {
    (TRAILING_SURROGATE_START..=TRAILING_SURROGATE_END).contains(&c)
}

/// https://infra.spec.whatwg.org/#surrogate
#[inline]
pub fn is_surrogate(c: CodePoint) -> bool {
    is_leading_surrogate(c) || is_trailing_surrogate(c)
}

#[inline]
pub fn is_bom(c: CodePoint) -> bool {
    c == BYTE_ORDER_MARK
}

/// https://drafts.csswg.org/css-syntax/#check-if-two-code-points-are-a-valid-escape
///
/// An escape at the very end of the input (`first` followed by [`EOF`]) is valid.
#[inline]
pub fn is_valid_escape(first: CodePoint, second: CodePoint) -> bool {
    first == REVERSE_SOLIDUS && !is_newline(second)
}

/// https://drafts.csswg.org/css-syntax/#would-start-an-identifier
#[inline]
pub fn would_start_ident(first: CodePoint, second: CodePoint, third: CodePoint) -> bool {
    match first {
        HYPHEN_MINUS => {
            is_ident_start(second) || second == HYPHEN_MINUS || is_valid_escape(second, third)
        }
        REVERSE_SOLIDUS => is_valid_escape(first, second),
        c => is_ident_start(c),
    }
}

/// https://drafts.csswg.org/css-syntax/#starts-with-a-number
#[inline]
pub fn would_start_number(first: CodePoint, second: CodePoint, third: CodePoint) -> bool {
    match first {
        PLUS_SIGN | HYPHEN_MINUS => is_digit(second) || (second == FULL_STOP && is_digit(third)),
        FULL_STOP => is_digit(second),
        c => is_digit(c),
    }
}
