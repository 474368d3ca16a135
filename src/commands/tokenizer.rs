//! Shell-style tokenization of command argument strings.
//!
//! This module splits a raw argument string into tokens the way a shell would,
//! so that users can write values containing spaces or `=` characters by
//! quoting them: `message="hello there" footer=plain`.

/// Errors that can occur while tokenizing an argument string.
#[derive(Debug, PartialEq, Eq)]
pub enum QuoteError {
    /// A quote character was opened but never closed.
    ///
    /// Carries the offending quote character for diagnostics.
    Unterminated(char),
}

/// Splits a raw argument string into shell-style tokens.
///
/// Tokens are separated by whitespace. A single or double quote starts a
/// literal run that only ends at the matching closing quote, so whitespace
/// and `=` characters inside quotes are kept verbatim. Outside of single
/// quotes, a backslash escapes the following character.
///
/// This is a pure function: it has no side effects and produces identical
/// output for identical input.
///
/// # Arguments
///
/// * `raw` - The raw argument string, e.g. `message="a b" footer=c`
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The ordered sequence of tokens
/// * `Err(QuoteError)` - If a quote is opened but never closed
///
/// # Examples
///
/// ```
/// # use leise::commands::tokenizer::tokenize;
/// let tokens = tokenize(r#"message="a b" footer=c"#).unwrap();
/// assert_eq!(tokens, vec!["message=a b", "footer=c"]);
/// ```
pub fn tokenize(raw: &str) -> Result<Vec<String>, QuoteError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else if c == '\\' && q == '"' {
                    // Inside double quotes a backslash escapes the next
                    // character; a trailing backslash is kept literally
                    match chars.next() {
                        Some(escaped) => current.push(escaped),
                        None => current.push('\\'),
                    }
                } else {
                    current.push(c);
                }
            }
            None => {
                if c.is_whitespace() {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else if c == '"' || c == '\'' {
                    quote = Some(c);
                    in_token = true;
                } else if c == '\\' {
                    match chars.next() {
                        Some(escaped) => current.push(escaped),
                        None => current.push('\\'),
                    }
                    in_token = true;
                } else {
                    current.push(c);
                    in_token = true;
                }
            }
        }
    }

    if let Some(q) = quote {
        return Err(QuoteError::Unterminated(q));
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
    fn test_tokenize_simple_tokens() {
        let tokens = tokenize("message=hello footer=c").unwrap();
        assert_eq!(tokens, vec!["message=hello", "footer=c"]);
    }

    #[test]
    fn test_tokenize_double_quoted_value() {
        let tokens = tokenize(r#"message="a b" footer=c"#).unwrap();
        assert_eq!(tokens, vec!["message=a b", "footer=c"]);
    }

    #[test]
    fn test_tokenize_single_quoted_value() {
        let tokens = tokenize("message='a b c'").unwrap();
        assert_eq!(tokens, vec!["message=a b c"]);
    }

    #[test]
    fn test_tokenize_equals_inside_quotes() {
        let tokens = tokenize(r#"link="https://example.com/?a=b&c=d""#).unwrap();
        assert_eq!(tokens, vec!["link=https://example.com/?a=b&c=d"]);
    }

    #[test]
    fn test_tokenize_unterminated_double_quote() {
        let result = tokenize(r#"message="a"#);
        assert_eq!(result, Err(QuoteError::Unterminated('"')));
    }

    #[test]
    fn test_tokenize_unterminated_single_quote() {
        let result = tokenize("message='a b");
        assert_eq!(result, Err(QuoteError::Unterminated('\'')));
    }

    #[test]
    fn test_tokenize_empty_input() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        let tokens = tokenize("   \t  ").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_multiple_spaces_between_tokens() {
        let tokens = tokenize("a=1    b=2").unwrap();
        assert_eq!(tokens, vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_tokenize_escaped_quote_inside_double_quotes() {
        let tokens = tokenize(r#"message="say \"hi\"""#).unwrap();
        assert_eq!(tokens, vec![r#"message=say "hi""#]);
    }

    #[test]
    fn test_tokenize_single_quote_inside_double_quotes() {
        let tokens = tokenize(r#"message="it's fine""#).unwrap();
        assert_eq!(tokens, vec!["message=it's fine"]);
    }

    #[test]
    fn test_tokenize_quoted_run_joins_with_bare_text() {
        // Quotes end a literal run but not the token itself
        let tokens = tokenize(r#"message="a b"c"#).unwrap();
        assert_eq!(tokens, vec!["message=a bc"]);
    }

    #[test]
    fn test_tokenize_empty_quoted_token() {
        let tokens = tokenize(r#""""#).unwrap();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_tokenize_backslash_outside_quotes() {
        let tokens = tokenize(r"message=a\ b").unwrap();
        assert_eq!(tokens, vec!["message=a b"]);
    }

    #[test]
    fn test_tokenize_is_pure() {
        let raw = r#"message="a b" footer=c"#;
        assert_eq!(tokenize(raw), tokenize(raw));
    }
}
