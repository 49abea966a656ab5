use regex::Regex;

use crate::error::{Error, Result};

/// Extracts the grouping key from one raw log line.
///
/// Extraction never fails: a line that yields nothing becomes the empty key.
#[derive(Debug, Clone, Default)]
pub enum KeyExtractor {
    /// First whitespace-delimited token (the client address in Common Log Format).
    #[default]
    FirstField,
    /// First capture group of the pattern, or the whole match when it has no groups.
    Pattern(Regex),
}

impl KeyExtractor {
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| Error::Config(format!("bad key pattern: {e}")))?;
        Ok(KeyExtractor::Pattern(regex))
    }

    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        match self {
            KeyExtractor::FirstField => parse(line),
            KeyExtractor::Pattern(regex) => match regex.captures(line) {
                Some(caps) => caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map_or("", |m| m.as_str()),
                None => "",
            },
        }
    }
}

pub fn parse(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_field_is_the_key() {
        let line = r#"10.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 2326"#;
        assert_eq!(parse(line), "10.0.0.1");
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse("   \t192.168.1.9 GET"), "192.168.1.9");
    }

    #[test]
    fn degenerate_lines_give_empty_key() {
        assert_eq!(parse(""), "");
        assert_eq!(parse("    "), "");
    }

    #[test]
    fn no_address_validation() {
        assert_eq!(parse("not-an-ip rest"), "not-an-ip");
    }

    #[test]
    fn pattern_uses_first_group() {
        let extractor = KeyExtractor::pattern(r#""\w+ (\S+)"#).unwrap();
        let line = r#"10.0.0.1 - - [x] "GET /index.html HTTP/1.1" 200 1"#;
        assert_eq!(extractor.extract(line), "/index.html");
    }

    #[test]
    fn pattern_without_group_uses_whole_match() {
        let extractor = KeyExtractor::pattern(r"\d{3}$").unwrap();
        assert_eq!(extractor.extract("10.0.0.1 GET / 404"), "404");
    }

    #[test]
    fn unmatched_pattern_gives_empty_key() {
        let extractor = KeyExtractor::pattern(r"user=(\w+)").unwrap();
        assert_eq!(extractor.extract("10.0.0.1 GET /"), "");
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        assert!(matches!(KeyExtractor::pattern("(unclosed"), Err(Error::Config(_))));
    }

    #[test]
    fn default_extractor_is_first_field() {
        assert_eq!(KeyExtractor::default().extract("1.2.3.4 x"), "1.2.3.4");
    }
}
