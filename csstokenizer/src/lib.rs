#![allow(clippy::needless_return)]

//! Streaming CSS tokenizer following [CSS Syntax Module Level 3](https://drafts.csswg.org/css-syntax/),
//! with an Extended CSS mode for the selector dialect of content blockers.
//!
//! Tokens and diagnostics are reported through callbacks as byte ranges of the
//! source; nothing is allocated per token.
//!
//! ```
//! use std::ops::ControlFlow;
//! use csstokenizer::{tokenize_extended, PosedLexerDiagnostic, Token, TokenType};
//!
//! let source = "div:contains(a(b)) > p";
//! let mut delims = 0;
//! tokenize_extended(
//!     source,
//!     &mut |token: Token| {
//!         if token.kind == TokenType::Delim {
//!             delims += 1;
//!         }
//!         ControlFlow::Continue(())
//!     },
//!     &mut |_: PosedLexerDiagnostic| {},
//! );
//! // `a(b)` plus the `>` combinator
//! assert_eq!(delims, 5);
//! ```

pub mod tokenizer;

pub use tokenizer::{
    decode_ident, has_token, has_token_with, name_hash, tokenize, tokenize_extended,
    tokenize_extended_with_handlers, tokenize_with_handlers, CustomHandler, HandlerTable,
    HashFlag, LexerDiagnostic, NumericFlag, PosedLexerDiagnostic, Token, TokenProps, TokenType,
    Tokenize, TokenizerContext,
};
