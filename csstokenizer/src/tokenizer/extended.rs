//! Extended CSS, the selector dialect of content blockers.
//!
//! Pseudo-classes such as `:contains(...)` or `:xpath(...)` take arguments that
//! are not CSS: regular expressions, text, XPath expressions. Their function
//! tokens get a custom handler that reports the raw argument as `Delim` tokens,
//! one per code point, up to (not including) the `)` that balances the
//! function's `(`.

use super::code_points::*;
use super::hash::name_hash;
use super::{CustomHandler, HandlerTable, OnError, OnToken, TokenType, TokenizerContext};

static BUILTIN_HANDLERS: [(u32, CustomHandler); 9] = [
    (name_hash("contains"), consume_pseudo_param),
    (name_hash("-abp-contains"), consume_pseudo_param),
    (name_hash("has-text"), consume_pseudo_param),
    (name_hash("matches-css"), consume_pseudo_param),
    (name_hash("matches-css-before"), consume_pseudo_param),
    (name_hash("matches-css-after"), consume_pseudo_param),
    (name_hash("matches-attr"), consume_pseudo_param),
    (name_hash("matches-property"), consume_pseudo_param),
    (name_hash("xpath"), consume_xpath_param),
];

/// Built-in Extended CSS handlers.
pub fn default_handlers() -> HandlerTable {
    BUILTIN_HANDLERS.iter().copied().collect()
}

/// Tokenizes `source` as Extended CSS.
pub fn tokenize_extended(source: &str, on_token: &mut OnToken<'_>, on_error: &mut OnError<'_>) {
    let _p = tracing::span!(tracing::Level::TRACE, "tokenize_extended", len = source.len()).entered();
    let handlers = default_handlers();
    TokenizerContext::new(source, on_token, on_error, Some(&handlers)).consume_tokens();
}

/// Tokenizes `source` as Extended CSS with `overrides` merged over the
/// built-in handlers. An override replaces the built-in handler of the same name.
pub fn tokenize_extended_with_handlers(
    source: &str,
    on_token: &mut OnToken<'_>,
    on_error: &mut OnError<'_>,
    overrides: &HandlerTable,
) {
    let _p = tracing::span!(
        tracing::Level::TRACE,
        "tokenize_extended",
        len = source.len(),
        overrides = overrides.len()
    )
    .entered();
    let mut handlers = default_handlers();
    handlers.extend(overrides.iter().map(|(&hash, &handler)| (hash, handler)));
    TokenizerContext::new(source, on_token, on_error, Some(&handlers)).consume_tokens();
}

/// Handler for pseudo-classes taking text or a regular expression.
///
/// A quoted argument is left to the regular tokenizer, which makes it a
/// `String` token. Otherwise every code point up to the balancing `)` becomes
/// a `Delim`. A `\` escapes the next code point from paren counting.
pub fn consume_pseudo_param(context: &mut TokenizerContext<'_>) {
    let start = context.cursor();
    context.consume_whitespace();
    let end = context.cursor();
    if is_quote(context.code()) {
        if end > start {
            context.emit_token(TokenType::Whitespace, start, end, None);
        }
        return;
    }
    emit_delims(context, start, end);
    consume_balanced(context, false);
}

/// Handler for `:xpath(...)`.
///
/// Like [`consume_pseudo_param`], but parentheses inside `"`-quoted XPath
/// string literals are not counted, and a leading quote is part of the
/// expression.
pub fn consume_xpath_param(context: &mut TokenizerContext<'_>) {
    let start = context.cursor();
    context.consume_whitespace();
    let end = context.cursor();
    emit_delims(context, start, end);
    consume_balanced(context, true);
}

fn emit_delims(context: &mut TokenizerContext<'_>, start: usize, end: usize) {
    for position in start..end {
        context.emit_token(TokenType::Delim, position, position + 1, None);
    }
}

/// Emits a `Delim` per code point until the `)` closing the function, which is
/// left under the cursor. Ends at EOF when the function is never closed.
fn consume_balanced(context: &mut TokenizerContext<'_>, track_strings: bool) {
    let mut balance = 1usize;
    let mut escaped = false;
    let mut in_string = false;
    while !context.is_eof() && !context.is_stopped() {
        let code = context.code();
        if escaped {
            escaped = false;
        } else if code == REVERSE_SOLIDUS {
            escaped = true;
        } else if track_strings && code == QUOTATION_MARK {
            in_string = !in_string;
        } else if !in_string {
            if code == LEFT_PARENTHESIS {
                balance += 1;
            } else if code == RIGHT_PARENTHESIS {
                balance -= 1;
                if balance == 0 {
                    return;
                }
            }
        }
        context.emit_trivial(TokenType::Delim);
    }
}
