/// The shape of a single Cli token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--KEY` or `--KEY=VALUE`.
    Long {
        key: &'t str,
        value: Option<&'t str>,
    },
    /// `-K` or `-KVALUE`.
    Short {
        key: &'t str,
        value: Option<&'t str>,
    },
    Positional(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // Find a 'long' option, such as:
        //  --initial
        //  --initial=..
        //  --=..
        if let Some(rest) = token.strip_prefix("--") {
            return match rest.split_once('=') {
                Some((key, value)) => Token::Long {
                    key,
                    value: Some(value),
                },
                None => Token::Long {
                    key: rest,
                    value: None,
                },
            };
        }

        // Find a 'short' option, such as (where 'i' is the short key):
        //  -i
        //  -i..
        // A lone "-" falls through to positional.
        if let Some(rest) = token.strip_prefix('-') {
            if let Some(first) = rest.chars().next() {
                let (key, value) = rest.split_at(first.len_utf8());
                return Token::Short {
                    key,
                    value: if value.is_empty() { None } else { Some(value) },
                };
            }
        }

        Token::Positional(token)
    }

    /// The key & explicit value of an option token, or `None` for a positional.
    pub(crate) fn option(&self) -> Option<(&'t str, Option<&'t str>)> {
        match self {
            Token::Long { key, value } | Token::Short { key, value } => Some((key, *value)),
            Token::Positional(_) => None,
        }
    }
}

/// Whether the token may be taken as the value of a preceding option.
pub(crate) fn is_not_option(token: &str) -> bool {
    !token.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--port", "port", None)]
    #[case("--port=8080", "port", Some("8080"))]
    #[case("--port=", "port", Some(""))]
    #[case("--key=a=b", "key", Some("a=b"))]
    #[case("--", "", None)]
    #[case("--=x", "", Some("x"))]
    #[case("---x", "-x", None)]
    fn classify_long(#[case] token: &str, #[case] key: &str, #[case] value: Option<&str>) {
        assert_eq!(Token::classify(token), Token::Long { key, value });
    }

    #[rstest]
    #[case("-a", "a", None)]
    #[case("-ab", "a", Some("b"))]
    #[case("-atrue", "a", Some("true"))]
    #[case("-p8080", "p", Some("8080"))]
    #[case("-a=b", "a", Some("=b"))]
    #[case("-é", "é", None)]
    #[case("-éx", "é", Some("x"))]
    #[case("-1", "1", None)]
    fn classify_short(#[case] token: &str, #[case] key: &str, #[case] value: Option<&str>) {
        assert_eq!(Token::classify(token), Token::Short { key, value });
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("build")]
    #[case("a-b")]
    #[case(" -a")]
    fn classify_positional(#[case] token: &str) {
        assert_eq!(Token::classify(token), Token::Positional(token));
        assert_eq!(Token::classify(token).option(), None);
    }

    #[test]
    fn option_parts() {
        assert_eq!(
            Token::classify("--port=1").option(),
            Some(("port", Some("1")))
        );
        assert_eq!(Token::classify("-v").option(), Some(("v", None)));
    }

    #[rstest]
    #[case("b", true)]
    #[case("", true)]
    #[case("-", false)]
    #[case("-b", false)]
    #[case("--b", false)]
    fn not_option(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_not_option(token), expected);
    }
}
