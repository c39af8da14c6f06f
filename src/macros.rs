//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored grammar rule
//!
//! These macros reduce boilerplate in the grammar table and lexer.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$position` - Where the token starts in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a grammar rule whose pattern only matches at the start of the
/// remaining input.
///
/// # Arguments
///
/// * `$kind` - The TokenKind emitted by the rule, or `None` for skipped input
/// * `$pattern` - The regular expression, without anchoring
/// * `$handler` - The handler invoked with the matched text
///
/// # Example
///
/// ```ignore
/// MK_RULE!(Some(TokenKind::Punctuation), r"[;,]", default_handler)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:literal, $handler:expr) => {
        Rule {
            kind: $kind,
            regex: Regex::new(concat!("^(?:", $pattern, ")")).unwrap(),
            handler: $handler,
        }
    };
}
