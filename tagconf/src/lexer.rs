//! Annotation tokenizer
//!
//! Splits a raw `#[conf("...")]` annotation into its comma-separated
//! constraint tokens. A comma directly following `[` is the separator of a
//! sequence type (`type=[,]string`) and stays inside its token.

const TOKEN_SEPARATOR: char = ',';
const OPEN_BRACKET: char = '[';

/// Split `raw` into constraint tokens.
///
/// The last token is always flushed, so the result is never empty: an empty
/// annotation yields a single empty token, which the constraint parser
/// rejects like any other unknown token.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();

    for ch in raw.chars() {
        if ch == TOKEN_SEPARATOR && !token.ends_with(OPEN_BRACKET) {
            tokens.push(std::mem::take(&mut token));
            continue;
        }
        token.push(ch);
    }
    tokens.push(token);

    tracing::trace!(annotation = raw, ?tokens, "tokenized annotation");
    tokens
}
