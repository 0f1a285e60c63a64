//! Token consumers of [CSS Syntax Module Level 3 §4.3](https://drafts.csswg.org/css-syntax/#tokenizer-algorithms).
//!
//! Every consumer starts with the cursor on the first code point of its token,
//! leaves it right after the last one, and emits exactly one token (plus any
//! diagnostics, which always come before the token).

use super::code_points::*;
use super::hash::URL_HASH;
use super::{HashFlag, LexerDiagnostic, NumericFlag, TokenProps, TokenType, TokenizerContext};

impl TokenizerContext<'_> {
    pub(crate) fn consume_whitespace_token(&mut self) {
        let start = self.cursor();
        self.consume_whitespace();
        self.emit_token(TokenType::Whitespace, start, self.cursor(), None);
    }

    /// PRECONDITION: `/*` is under the cursor.
    pub(crate) fn consume_comment_token(&mut self) {
        let start = self.cursor();
        self.advance(2);
        if !self.consume_until_comment_end() {
            self.emit_error(LexerDiagnostic::UnterminatedComment, start, self.cursor());
        }
        self.emit_token(TokenType::Comment, start, self.cursor(), None);
    }

    /// PRECONDITION: `#` is under the cursor.
    pub(crate) fn consume_hash_token(&mut self) {
        let (next, third, fourth) = (self.next_code(), self.code_at(2), self.code_at(3));
        if !is_ident_code_point(next) && !is_valid_escape(next, third) {
            self.emit_trivial(TokenType::Delim);
            return;
        }
        let start = self.cursor();
        let flag = if would_start_ident(next, third, fourth) {
            HashFlag::Id
        } else {
            HashFlag::Unrestricted
        };
        self.advance(1);
        self.consume_ident_sequence();
        self.emit_token(TokenType::Hash, start, self.cursor(), Some(TokenProps::Hash(flag)));
    }

    /// https://drafts.csswg.org/css-syntax/#consume-numeric-token
    pub(crate) fn consume_numeric_token(&mut self) {
        let start = self.cursor();
        let flag = self.consume_number();
        if would_start_ident(self.code(), self.next_code(), self.code_at(2)) {
            let unit_start = self.cursor();
            self.consume_ident_sequence();
            let props = TokenProps::Dimension {
                flag,
                unit_start: self.byte_offset(unit_start),
            };
            self.emit_token(TokenType::Dimension, start, self.cursor(), Some(props));
        } else if self.code() == PERCENTAGE_SIGN {
            self.advance(1);
            self.emit_token(TokenType::Percentage, start, self.cursor(), Some(TokenProps::Numeric(flag)));
        } else {
            self.emit_token(TokenType::Number, start, self.cursor(), Some(TokenProps::Numeric(flag)));
        }
    }

    /// https://drafts.csswg.org/css-syntax/#consume-a-number
    ///
    /// PRECONDITION: the cursor would start a number.
    pub fn consume_number(&mut self) -> NumericFlag {
        let mut flag = NumericFlag::Integer;
        if matches!(self.code(), PLUS_SIGN | HYPHEN_MINUS) {
            self.advance(1);
        }
        self.consume_digits();
        if self.code() == FULL_STOP && is_digit(self.next_code()) {
            self.advance(1);
            self.consume_digits();
            flag = NumericFlag::Number;
        }
        if matches!(self.code(), LATIN_SMALL_LETTER_E | LATIN_CAPITAL_LETTER_E) {
            let (next, third) = (self.next_code(), self.code_at(2));
            let exponent_start = if is_digit(next) {
                1
            } else if matches!(next, PLUS_SIGN | HYPHEN_MINUS) && is_digit(third) {
                2
            } else {
                0
            };
            if exponent_start > 0 {
                self.advance(exponent_start);
                self.consume_digits();
                flag = NumericFlag::Number;
            }
        }
        flag
    }

    fn consume_digits(&mut self) {
        while is_digit(self.code()) {
            self.advance(1);
        }
    }

    /// https://drafts.csswg.org/css-syntax/#consume-a-string-token
    ///
    /// PRECONDITION: the opening quote is under the cursor.
    pub(crate) fn consume_string_token(&mut self) {
        let start = self.cursor();
        let ending = self.code();
        self.advance(1);
        loop {
            let code = self.code();
            if code == ending {
                self.advance(1);
                break;
            }
            match code {
                EOF => {
                    self.emit_error(LexerDiagnostic::UnexpectedEofInString, start, self.cursor());
                    break;
                }
                c if is_newline(c) => {
                    self.consume_single_whitespace();
                    self.emit_error(LexerDiagnostic::UnexpectedNewlineInString, start, self.cursor());
                    self.emit_token(TokenType::BadString, start, self.cursor(), None);
                    return;
                }
                REVERSE_SOLIDUS => {
                    let next = self.next_code();
                    self.advance(1);
                    if next == EOF {
                        break;
                    } else if is_newline(next) {
                        self.consume_single_whitespace();
                    } else {
                        self.consume_escaped_code_point();
                    }
                }
                _ => self.advance(1),
            }
        }
        self.emit_token(TokenType::String, start, self.cursor(), None);
    }

    /// https://drafts.csswg.org/css-syntax/#consume-escaped-code-point
    ///
    /// PRECONDITION: the `\` has been consumed.
    pub fn consume_escaped_code_point(&mut self) {
        let code = self.code();
        if is_hex_digit(code) {
            self.advance(1);
            let mut digits = 1;
            while digits < 6 && is_hex_digit(self.code()) {
                self.advance(1);
                digits += 1;
            }
            self.consume_single_whitespace();
        } else if code == EOF {
            let end = self.cursor();
            self.emit_error(LexerDiagnostic::UnexpectedEofInEscape, end.saturating_sub(1), end);
        } else {
            self.advance(1);
        }
    }

    /// https://drafts.csswg.org/css-syntax/#consume-name
    pub fn consume_ident_sequence(&mut self) {
        loop {
            let code = self.code();
            if is_ident_code_point(code) {
                self.advance(1);
            } else if is_valid_escape(code, self.next_code()) {
                self.advance(1);
                self.consume_escaped_code_point();
            } else {
                break;
            }
        }
    }

    /// https://drafts.csswg.org/css-syntax/#consume-ident-like-token
    ///
    /// PRECONDITION: the cursor would start an ident sequence.
    pub(crate) fn consume_ident_like_token(&mut self) {
        let start = self.cursor();
        self.consume_ident_sequence();
        if self.code() != LEFT_PARENTHESIS {
            self.emit_token(TokenType::Ident, start, self.cursor(), None);
            return;
        }
        let name_hash = self.hash_from(start);
        self.advance(1);
        if name_hash == URL_HASH && !self.is_quoted_url_argument() {
            self.consume_url_token(start);
            return;
        }
        self.emit_token(TokenType::Function, start, self.cursor(), None);
        if let Some(handler) = self.handler(name_hash) {
            if !self.is_stopped() {
                handler(self);
            }
        }
    }

    /// Whether the argument after `url(` starts with a quote, ignoring whitespace.
    fn is_quoted_url_argument(&self) -> bool {
        let mut offset = 0;
        while is_whitespace(self.code_at(offset)) {
            offset += 1;
        }
        is_quote(self.code_at(offset))
    }

    /// https://drafts.csswg.org/css-syntax/#consume-url-token
    ///
    /// PRECONDITION: `url(` has been consumed, `start` is where it began.
    fn consume_url_token(&mut self, start: usize) {
        self.consume_whitespace();
        loop {
            let code = self.code();
            match code {
                RIGHT_PARENTHESIS => {
                    self.advance(1);
                    break;
                }
                EOF => {
                    self.emit_error(LexerDiagnostic::UnexpectedEofInUrl, start, self.cursor());
                    break;
                }
                c if is_whitespace(c) => {
                    self.consume_whitespace();
                    match self.code() {
                        RIGHT_PARENTHESIS => {
                            self.advance(1);
                            break;
                        }
                        EOF => {
                            self.emit_error(LexerDiagnostic::UnexpectedEofInUrl, start, self.cursor());
                            break;
                        }
                        _ => {
                            let at = self.cursor();
                            self.emit_error(LexerDiagnostic::UnexpectedCharInUrl, at, at + 1);
                            self.consume_bad_url_remnants(start);
                            return;
                        }
                    }
                }
                c if is_quote(c) || c == LEFT_PARENTHESIS || is_non_printable(c) => {
                    let at = self.cursor();
                    self.emit_error(LexerDiagnostic::UnexpectedCharInUrl, at, at + 1);
                    self.consume_bad_url_remnants(start);
                    return;
                }
                REVERSE_SOLIDUS => {
                    if is_valid_escape(code, self.next_code()) {
                        self.advance(1);
                        self.consume_escaped_code_point();
                    } else {
                        let at = self.cursor();
                        self.emit_error(LexerDiagnostic::InvalidEscapeSequence, at, at + 1);
                        self.consume_bad_url_remnants(start);
                        return;
                    }
                }
                _ => self.advance(1),
            }
        }
        self.emit_token(TokenType::Url, start, self.cursor(), None);
    }

    /// https://drafts.csswg.org/css-syntax/#consume-remnants-of-bad-url
    fn consume_bad_url_remnants(&mut self, start: usize) {
        loop {
            let code = self.code();
            if code == EOF {
                break;
            }
            if code == RIGHT_PARENTHESIS {
                self.advance(1);
                break;
            }
            self.advance(1);
            if is_valid_escape(code, self.code()) {
                self.consume_escaped_code_point();
            }
        }
        self.emit_token(TokenType::BadUrl, start, self.cursor(), None);
    }
}
