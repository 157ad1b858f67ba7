//! Quote-aware splitting of a single line into fields

/// Split one line (without its terminator) into fields
///
/// A quote toggles quoted mode; inside quotes, a doubled quote stands for one
/// literal quote and the delimiter is an ordinary character. An unterminated
/// quote leaves the rest of the line quoted. This never fails.
///
/// ```
/// use stockroom_csv::tokenize_line;
///
/// assert_eq!(tokenize_line(r#"a,"b,c",d"#, ',', '"'), vec!["a", "b,c", "d"]);
/// assert_eq!(tokenize_line(r#"a,"b""c",d"#, ',', '"'), vec!["a", "b\"c", "d"]);
/// ```
pub fn tokenize_line(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote {
            if in_quotes && chars.peek() == Some(&quote) {
                current.push(quote);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize(line: &str) -> Vec<String> {
        tokenize_line(line, ',', '"')
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(tokenize("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("single"), vec!["single"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize(",,"), vec!["", "", ""]);
        assert_eq!(tokenize("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(tokenize(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(tokenize(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
        assert_eq!(tokenize(r#""say ""hi""""#), vec![r#"say "hi""#]);
        assert_eq!(tokenize(r#""""#), vec![""]);
    }

    #[test]
    fn test_whitespace_is_kept() {
        assert_eq!(tokenize(" a , \"b\" "), vec![" a ", " b "]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(tokenize(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_quote_in_unquoted_field_toggles() {
        assert_eq!(tokenize(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(tokenize_line("a;\"b;c\"", ';', '"'), vec!["a", "b;c"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(tokenize("Гайка,\"M6, оцинк.\""), vec!["Гайка", "M6, оцинк."]);
    }
}
