use miette::Diagnostic;
use strum::IntoStaticStr;
use thiserror::Error;

use super::code_points::{self, CodePoint, EOF};
use super::hash;
use super::{CustomHandler, HandlerTable, OnError, OnToken, Token, TokenProps, TokenType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Diagnostic, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexerDiagnostic {
    #[error("Invalid escape sequence")]
    #[diagnostic(
        code(css::invalid_escape),
        help("a reverse solidus followed by a newline does not start an escape")
    )]
    InvalidEscapeSequence,
    #[error("Unterminated comment went into end of file")]
    #[diagnostic(code(css::unterminated_comment))]
    UnterminatedComment,
    #[error("Unterminated string went into end of file")]
    #[diagnostic(code(css::eof_in_string))]
    UnexpectedEofInString,
    #[error("Unterminated url went into end of file")]
    #[diagnostic(code(css::eof_in_url))]
    UnexpectedEofInUrl,
    #[error("Escaped code point went into end of file")]
    #[diagnostic(code(css::eof_in_escape))]
    UnexpectedEofInEscape,
    #[error("Newline in string")]
    #[diagnostic(code(css::newline_in_string), help("escape the newline with a reverse solidus"))]
    UnexpectedNewlineInString,
    #[error("Unexpected character in url")]
    #[diagnostic(code(css::unexpected_char_in_url), help("quote the url: url(\"...\")"))]
    UnexpectedCharInUrl,
}

impl LexerDiagnostic {
    /// Stable identifier of the diagnostic, e.g. `"UnexpectedEofInString"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A diagnostic with the byte range `start..end` it was reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosedLexerDiagnostic {
    pub diagnostic: LexerDiagnostic,
    pub start: u32,
    pub end: u32,
}

/// Tokenizer state shared by the main loop, the token consumers and custom handlers.
///
/// Positions taken and returned by the context are *slot* indices into the
/// code-point buffer. They are converted to byte offsets only when a token or
/// diagnostic leaves through a callback.
pub struct TokenizerContext<'a> {
    /// One slot per code point, followed by a single [`EOF`].
    codes: Box<[CodePoint]>,
    /// Byte offset of every slot (and of the end), `None` for ASCII sources.
    offsets: Option<Box<[u32]>>,
    length: usize,
    cursor: usize,
    stopped: bool,
    on_token: &'a mut OnToken<'a>,
    on_error: &'a mut OnError<'a>,
    handlers: Option<&'a HandlerTable>,
}

impl<'a> TokenizerContext<'a> {
    pub(crate) fn new(
        source: &str,
        on_token: &'a mut OnToken<'a>,
        on_error: &'a mut OnError<'a>,
        handlers: Option<&'a HandlerTable>,
    ) -> Self {
        debug_assert!(u32::try_from(source.len()).is_ok(), "sources must be shorter than 4 GiB");
        let (mut codes, offsets) = if source.is_ascii() {
            let mut codes = Vec::with_capacity(source.len() + 1);
            codes.extend(source.bytes().map(CodePoint::from));
            (codes, None)
        } else {
            let mut codes = Vec::with_capacity(source.len() + 1);
            let mut offsets = Vec::with_capacity(source.len() + 1);
            for (offset, c) in source.char_indices() {
                codes.push(c as CodePoint);
                offsets.push(offset as u32);
            }
            offsets.push(source.len() as u32);
            (codes, Some(offsets.into_boxed_slice()))
        };
        let length = codes.len();
        codes.push(EOF);
        let cursor = usize::from(code_points::is_bom(codes[0]));
        TokenizerContext {
            codes: codes.into_boxed_slice(),
            offsets,
            length,
            cursor,
            stopped: false,
            on_token,
            on_error,
            handlers,
        }
    }

    // ////////////////////////////////////////////////////////////////////////////////////////////
    // Accessors
    // ////////////////////////////////////////////////////////////////////////////////////////////

    /// Current slot index.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of code points in the source, excluding the EOF sentinel.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.length
    }

    /// Whether the token callback asked to stop.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Code point under the cursor, [`EOF`] at the end.
    #[inline]
    pub fn code(&self) -> CodePoint {
        self.codes.get(self.cursor).copied().unwrap_or(EOF)
    }

    #[inline]
    pub fn prev_code(&self) -> CodePoint {
        self.code_at(-1)
    }

    #[inline]
    pub fn next_code(&self) -> CodePoint {
        self.code_at(1)
    }

    /// Code point `offset` slots away from the cursor. Anything outside the
    /// buffer reads as [`EOF`].
    #[inline]
    pub fn code_at(&self, offset: isize) -> CodePoint {
        self.cursor
            .checked_add_signed(offset)
            .and_then(|position| self.codes.get(position))
            .copied()
            .unwrap_or(EOF)
    }

    /// Byte offset of slot `position` in the source.
    #[inline]
    pub fn byte_offset(&self, position: usize) -> u32 {
        debug_assert!(position <= self.length);
        match &self.offsets {
            Some(offsets) => offsets[position.min(self.length)],
            None => position as u32,
        }
    }

    // ////////////////////////////////////////////////////////////////////////////////////////////
    // Primitives
    // ////////////////////////////////////////////////////////////////////////////////////////////

    /// Moves the cursor by `steps` slots, which may be negative.
    /// The cursor stays within `0..=length`.
    #[inline]
    pub fn advance(&mut self, steps: isize) {
        let target = self.cursor.saturating_add_signed(steps);
        debug_assert!(target <= self.length, "advanced past the end of input");
        self.cursor = target.min(self.length);
    }

    /// PRECONDITION: the opening `/*` has been consumed.
    ///
    /// Consumes up to and including the closing `*/`. Returns `false` when the
    /// input ended first.
    pub fn consume_until_comment_end(&mut self) -> bool {
        while !self.is_eof() {
            if self.code() == code_points::ASTERISK && self.next_code() == code_points::SOLIDUS {
                self.advance(2);
                return true;
            }
            self.advance(1);
        }
        false
    }

    /// Consumes one whitespace code point, treating CR LF as one.
    pub fn consume_single_whitespace(&mut self) {
        let code = self.code();
        if code == code_points::CARRIAGE_RETURN && self.next_code() == code_points::LINE_FEED {
            self.advance(2);
        } else if code_points::is_whitespace(code) {
            self.advance(1);
        }
    }

    pub fn consume_whitespace(&mut self) {
        while code_points::is_whitespace(self.code()) {
            self.advance(1);
        }
    }

    /// Case-insensitive hash of the code points in `start..cursor`.
    pub fn hash_from(&self, start: usize) -> u32 {
        debug_assert!(start <= self.cursor);
        self.codes[start..self.cursor]
            .iter()
            .fold(hash::SEED, |acc, &c| hash::mix(acc, c as u32))
    }

    /// Handler registered for a function whose name hashes to `name_hash`.
    #[inline]
    pub fn handler(&self, name_hash: u32) -> Option<CustomHandler> {
        self.handlers.and_then(|handlers| handlers.get(&name_hash).copied())
    }

    // ////////////////////////////////////////////////////////////////////////////////////////////
    // Emission
    // ////////////////////////////////////////////////////////////////////////////////////////////

    /// Reports a token spanning slots `start..end`. Does nothing once stopped.
    pub fn emit_token(&mut self, kind: TokenType, start: usize, end: usize, props: Option<TokenProps>) {
        if self.stopped {
            return;
        }
        debug_assert!(start < end, "empty {kind} token at {start}");
        let token = Token {
            kind,
            start: self.byte_offset(start),
            end: self.byte_offset(end),
            props,
        };
        if (self.on_token)(token).is_break() {
            tracing::debug!(offset = token.end, "tokenization stopped by caller");
            self.stopped = true;
        }
    }

    /// Reports a diagnostic spanning slots `start..end`. Does nothing once stopped.
    pub fn emit_error(&mut self, diagnostic: LexerDiagnostic, start: usize, end: usize) {
        if self.stopped {
            return;
        }
        let posed = PosedLexerDiagnostic {
            diagnostic,
            start: self.byte_offset(start),
            end: self.byte_offset(end),
        };
        tracing::trace!(code = diagnostic.as_str(), start = posed.start, end = posed.end, "{diagnostic}");
        (self.on_error)(posed);
    }

    /// Emits a one code point token at the cursor and steps over it.
    pub fn emit_trivial(&mut self, kind: TokenType) {
        let start = self.cursor;
        self.emit_token(kind, start, start + 1, None);
        self.advance(1);
    }
}
