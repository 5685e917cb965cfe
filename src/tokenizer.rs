//! Configuration-line tokenizer.
//!
//! One directive per line. A line splits on unescaped whitespace into an
//! ordered token list:
//!
//! ```text
//! pkg.id support mailto:dev@example.com as "Contact the developer"
//!        │                              └── quoted segment = one token
//!        └── plain tokens split on whitespace
//! ```
//!
//! - `"` opens/closes a quoted segment; whitespace inside is kept.
//! - `\` escapes the next character, inside or outside quotes.
//! - Quote and escape characters are consumed, never emitted.
//!
//! Blank and comment lines must be filtered out *before* tokenizing (the
//! scan driver in `api.rs` does this); a line that is empty after trimming
//! is a [`ParseError::MalformedLine`] here.

use crate::ParseError;

const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Split one configuration line into tokens.
///
/// Pure function: no I/O, no state. For a line containing neither quote nor
/// escape characters the result equals the line's whitespace split.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::malformed("line is empty after trimming"));
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    // `in_token` is distinct from `current.is_empty()` so that an empty
    // quoted segment ("") still emits a token.
    let mut in_token = false;
    let mut in_quote = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                let Some(escaped) = chars.next() else {
                    return Err(ParseError::malformed("dangling escape at end of line"));
                };
                current.push(escaped);
                in_token = true;
            }
            QUOTE => {
                in_quote = !in_quote;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quote => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quote {
        return Err(ParseError::malformed("unterminated quoted segment"));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_match_whitespace_split() {
        // Array of input lines with neither quotes nor escapes.
        let cases = vec![
            "pkg.id support mailto:dev@example.com",
            "* store https://example.com/app",
            "  leading and   trailing   ",
            "one",
        ];

        for line in cases {
            let tokens = tokenize(line).unwrap();
            let split: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            assert_eq!(tokens, split, "line: {line:?}");
        }
    }

    #[test]
    fn quoted_segments_survive_as_one_token() {
        let tokens = tokenize(r#"pkg.id link https://x.y as "Report a bug""#).unwrap();
        assert_eq!(tokens, vec!["pkg.id", "link", "https://x.y", "as", "Report a bug"]);
    }

    #[test]
    fn quotes_join_with_adjacent_text() {
        let tokens = tokenize(r#"a b"c d"e"#).unwrap();
        assert_eq!(tokens, vec!["a", "bc de"]);
    }

    #[test]
    fn empty_quoted_segment_is_a_token() {
        let tokens = tokenize(r#"pkg.id link """#).unwrap();
        assert_eq!(tokens, vec!["pkg.id", "link", ""]);
    }

    #[test]
    fn escape_preserves_whitespace_and_quotes() {
        let tokens = tokenize(r"one\ token two").unwrap();
        assert_eq!(tokens, vec!["one token", "two"]);

        let tokens = tokenize(r#"say \"hi\""#).unwrap();
        assert_eq!(tokens, vec!["say", "\"hi\""]);
    }

    #[test]
    fn escape_works_inside_quotes() {
        let tokens = tokenize(r#""a \"quoted\" word""#).unwrap();
        assert_eq!(tokens, vec!["a \"quoted\" word"]);
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let err = tokenize(r#"pkg.id link "no end"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { .. }));
    }

    #[test]
    fn dangling_escape_is_malformed() {
        let err = tokenize(r"pkg.id link \").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { .. }));
    }

    #[test]
    fn blank_line_is_malformed() {
        for line in ["", "   ", "\t"] {
            let err = tokenize(line).unwrap_err();
            assert!(matches!(err, ParseError::MalformedLine { .. }), "line: {line:?}");
        }
    }
}
