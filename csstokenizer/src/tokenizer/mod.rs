//! A callback-driven css tokenizer based on [CSS Syntax Module Level 3](https://drafts.csswg.org/css-syntax/)
//! with some notable differences:
//! - the input is not preprocessed: CR, FF and CR LF are each treated as a single newline
//!     where the tokenizer meets them, and NUL is not replaced
//! - comments are kept as `Comment` tokens
//! - tokens only carry a kind, a byte range and the type flag of the token (`TokenProps`);
//!     values (unescaped names, numeric values) are left to the consumer, see `decode_ident`
//! - functions can have a custom handler which takes over tokenization of the arguments,
//!     used by the Extended CSS dialect for pseudo-classes with non-CSS arguments

pub mod code_points;
mod consumers;
mod context;
mod extended;
mod extra;
mod hash;

use std::ops::{ControlFlow, Range};

use code_points::*;
use rustc_hash::FxHashMap;
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

pub use context::{LexerDiagnostic, PosedLexerDiagnostic, TokenizerContext};
pub use extended::{
    consume_pseudo_param, consume_xpath_param, default_handlers, tokenize_extended,
    tokenize_extended_with_handlers,
};
pub use extra::{decode_ident, has_token, has_token_with};
pub use hash::name_hash;

/// Token callback. Returning `ControlFlow::Break(())` stops tokenization.
pub type OnToken<'a> = dyn FnMut(Token) -> ControlFlow<()> + 'a;

/// Diagnostic callback.
pub type OnError<'a> = dyn FnMut(PosedLexerDiagnostic) + 'a;

/// Shape shared by [`tokenize`] and [`tokenize_extended`].
pub type Tokenize = fn(&str, &mut OnToken<'_>, &mut OnError<'_>);

/// Takes over tokenization right after the `(` of a function token.
///
/// A handler emits tokens through the context and returns with the cursor
/// where the main loop should resume.
pub type CustomHandler = fn(&mut TokenizerContext<'_>);

/// Custom handlers keyed by [`name_hash`] of the function name.
pub type HandlerTable = FxHashMap<u32, CustomHandler>;

/// Parsed token. `start..end` is a byte range of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenType,
    pub start: u32,
    pub end: u32,
    pub props: Option<TokenProps>,
}

impl Token {
    pub fn new(kind: TokenType, start: u32, end: u32) -> Self {
        Self {
            kind,
            start,
            end,
            props: None,
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Source text of the token.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr, IntoStaticStr, Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenType {
    /// End of input. Never emitted.
    Eof = 0,

    /// [`<ident-token>`](https://drafts.csswg.org/css-syntax/#ident-token-diagram)
    Ident = 1,

    /// [`<function-token>`](https://drafts.csswg.org/css-syntax/#function-token-diagram)
    ///
    /// The range includes the `(` marker.
    Function = 2,

    /// [`<at-keyword-token>`](https://drafts.csswg.org/css-syntax/#at-keyword-token-diagram)
    ///
    /// The range includes the `@` marker.
    AtKeyword = 3,

    /// [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram)
    ///
    /// The type flag is in [`TokenProps::Hash`].
    Hash = 4,

    /// [`<string-token>`](https://drafts.csswg.org/css-syntax/#string-token-diagram)
    ///
    /// The range includes the quotes (the closing one only if present).
    String = 5,

    /// [`<bad-string-token>`](https://drafts.csswg.org/css-syntax/#typedef-bad-string-token)
    ///
    /// This token always indicates a parse error.
    BadString = 6,

    /// [`<url-token>`](https://drafts.csswg.org/css-syntax/#url-token-diagram)
    ///
    /// The range includes the `url(` `)` markers. Note that `url( <string-token> )` is represented by a
    /// `Function` token.
    Url = 7,

    /// [`<bad-url-token>`](https://drafts.csswg.org/css-syntax/#typedef-bad-url-token)
    ///
    /// This token always indicates a parse error.
    BadUrl = 8,

    /// [`<delim-token>`](https://drafts.csswg.org/css-syntax/#typedef-delim-token)
    Delim = 9,

    /// [`<number-token>`](https://drafts.csswg.org/css-syntax/#number-token-diagram)
    Number = 10,

    /// [`<percentage-token>`](https://drafts.csswg.org/css-syntax/#percentage-token-diagram)
    Percentage = 11,

    /// [`<dimension-token>`](https://drafts.csswg.org/css-syntax/#dimension-token-diagram)
    Dimension = 12,

    /// [`<whitespace-token>`](https://drafts.csswg.org/css-syntax/#whitespace-token-diagram)
    Whitespace = 13,

    /// `<!--` [`<CDO-token>`](https://drafts.csswg.org/css-syntax/#CDO-token-diagram)
    Cdo = 14,

    /// `-->` [`<CDC-token>`](https://drafts.csswg.org/css-syntax/#CDC-token-diagram)
    Cdc = 15,

    /// `:`
    Colon = 16,
    /// `;`
    Semicolon = 17,
    /// `,`
    Comma = 18,
    /// `[`
    OpenSquareBracket = 19,
    /// `]`
    CloseSquareBracket = 20,
    /// `(`
    OpenParenthesis = 21,
    /// `)`
    CloseParenthesis = 22,
    /// `{`
    OpenCurlyBracket = 23,
    /// `}`
    CloseCurlyBracket = 24,

    /// `/* ... */`, the range includes the markers.
    Comment = 25,
}

/// [Type flag](https://drafts.csswg.org/css-syntax/#hash-token-diagram) of a hash token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashFlag {
    /// The name would start an ident sequence, so the hash is a valid ID selector.
    Id,
    Unrestricted,
}

/// Type flag of a numeric token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericFlag {
    Integer,
    /// A fraction or an exponent was consumed.
    Number,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenProps {
    Hash(HashFlag),
    /// On `Number` and `Percentage` tokens.
    Numeric(NumericFlag),
    Dimension {
        flag: NumericFlag,
        /// Byte offset where the unit starts.
        unit_start: u32,
    },
}

/// Tokenizes `source` as standard CSS, reporting each token to `on_token`
/// and each diagnostic to `on_error`, in source order.
pub fn tokenize(source: &str, on_token: &mut OnToken<'_>, on_error: &mut OnError<'_>) {
    let _p = tracing::span!(tracing::Level::TRACE, "tokenize", len = source.len()).entered();
    TokenizerContext::new(source, on_token, on_error, None).consume_tokens();
}

/// Tokenizes `source` as standard CSS, handing the arguments of every function
/// named in `handlers` to its handler.
pub fn tokenize_with_handlers(
    source: &str,
    on_token: &mut OnToken<'_>,
    on_error: &mut OnError<'_>,
    handlers: &HandlerTable,
) {
    let _p = tracing::span!(
        tracing::Level::TRACE,
        "tokenize_with_handlers",
        len = source.len(),
        handlers = handlers.len()
    )
    .entered();
    TokenizerContext::new(source, on_token, on_error, Some(handlers)).consume_tokens();
}

impl TokenizerContext<'_> {
    pub(crate) fn consume_tokens(&mut self) {
        while !self.is_eof() && !self.is_stopped() {
            self.consume_token();
        }
        debug_assert!(self.is_stopped() || self.cursor() == self.length());
    }

    /// https://drafts.csswg.org/css-syntax/#consume-token
    fn consume_token(&mut self) {
        let code = self.code();
        match code {
            c if is_whitespace(c) => self.consume_whitespace_token(),
            c if is_digit(c) => self.consume_numeric_token(),
            QUOTATION_MARK | APOSTROPHE => self.consume_string_token(),
            NUMBER_SIGN => self.consume_hash_token(),
            LEFT_PARENTHESIS => self.emit_trivial(TokenType::OpenParenthesis),
            RIGHT_PARENTHESIS => self.emit_trivial(TokenType::CloseParenthesis),
            COMMA => self.emit_trivial(TokenType::Comma),
            COLON => self.emit_trivial(TokenType::Colon),
            SEMICOLON => self.emit_trivial(TokenType::Semicolon),
            LEFT_SQUARE_BRACKET => self.emit_trivial(TokenType::OpenSquareBracket),
            RIGHT_SQUARE_BRACKET => self.emit_trivial(TokenType::CloseSquareBracket),
            LEFT_CURLY_BRACKET => self.emit_trivial(TokenType::OpenCurlyBracket),
            RIGHT_CURLY_BRACKET => self.emit_trivial(TokenType::CloseCurlyBracket),
            PLUS_SIGN | FULL_STOP => {
                if would_start_number(code, self.next_code(), self.code_at(2)) {
                    self.consume_numeric_token()
                } else {
                    self.emit_trivial(TokenType::Delim)
                }
            }
            HYPHEN_MINUS => {
                let (next, third) = (self.next_code(), self.code_at(2));
                if would_start_number(code, next, third) {
                    self.consume_numeric_token()
                } else if next == HYPHEN_MINUS && third == GREATER_THAN_SIGN {
                    let start = self.cursor();
                    self.advance(3);
                    self.emit_token(TokenType::Cdc, start, self.cursor(), None)
                } else if would_start_ident(code, next, third) {
                    self.consume_ident_like_token()
                } else {
                    self.emit_trivial(TokenType::Delim)
                }
            }
            LESS_THAN_SIGN => {
                if self.next_code() == EXCLAMATION_MARK
                    && self.code_at(2) == HYPHEN_MINUS
                    && self.code_at(3) == HYPHEN_MINUS
                {
                    let start = self.cursor();
                    self.advance(4);
                    self.emit_token(TokenType::Cdo, start, self.cursor(), None)
                } else {
                    self.emit_trivial(TokenType::Delim)
                }
            }
            COMMERCIAL_AT => {
                if would_start_ident(self.next_code(), self.code_at(2), self.code_at(3)) {
                    let start = self.cursor();
                    self.advance(1);
                    self.consume_ident_sequence();
                    self.emit_token(TokenType::AtKeyword, start, self.cursor(), None)
                } else {
                    self.emit_trivial(TokenType::Delim)
                }
            }
            REVERSE_SOLIDUS => {
                if is_valid_escape(code, self.next_code()) {
                    self.consume_ident_like_token()
                } else {
                    let start = self.cursor();
                    self.emit_error(LexerDiagnostic::InvalidEscapeSequence, start, start + 1);
                    self.emit_trivial(TokenType::Delim)
                }
            }
            SOLIDUS => {
                if self.next_code() == ASTERISK {
                    self.consume_comment_token()
                } else {
                    self.emit_trivial(TokenType::Delim)
                }
            }
            c if is_ident_start(c) => self.consume_ident_like_token(),
            _ => self.emit_trivial(TokenType::Delim),
        }
    }
}
