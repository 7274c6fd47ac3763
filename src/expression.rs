//! Recursive-descent parser for dependency expressions.
//!
//! ```text
//! dependency := set SEPARATOR set
//! set        := "{" name ("," name)* "}"
//! name       := [A-Za-z]+
//! ```
//!
//! Whitespace is insignificant anywhere in the expression. The separator is
//! `->` for functional dependencies and `->->` for multivalued ones; the
//! parser is told which one to expect, so an expression of the other kind is
//! rejected rather than silently reinterpreted.

use crate::error::{NormalizationError, Result};
use crate::schema::{Attribute, AttributeSet};

/// Splits `expression` into its determinant and dependant sets.
pub(crate) fn parse(expression: &str, separator: &str) -> Result<(AttributeSet, AttributeSet)> {
    let compact: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = Parser { source: expression, chars: &compact, pos: 0 };

    let determinant = parser.set()?;
    parser.keyword(separator)?;
    let dependant = parser.set()?;
    parser.end()?;

    Ok((determinant, dependant))
}

struct Parser<'a> {
    source: &'a str,
    chars: &'a [char],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: impl Into<String>) -> NormalizationError {
        NormalizationError::expression(self.source, reason)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn expect(&mut self, wanted: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}' but found '{}'", wanted, c))),
            None => Err(self.error(format!("expected '{}' but the expression ended", wanted))),
        }
    }

    fn keyword(&mut self, keyword: &str) -> Result<()> {
        for wanted in keyword.chars() {
            self.expect(wanted)
                .map_err(|_| self.error(format!("expected separator '{}'", keyword)))?;
        }
        Ok(())
    }

    fn set(&mut self) -> Result<AttributeSet> {
        self.expect('{')?;
        let mut set = AttributeSet::new();
        set.insert(self.name()?);
        while self.peek() == Some(',') {
            self.pos += 1;
            set.insert(self.name()?);
        }
        self.expect('}')?;
        Ok(set)
    }

    fn name(&mut self) -> Result<Attribute> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected an attribute name but found '{}'", c)),
                None => self.error("expected an attribute name but the expression ended"),
            });
        }
        Attribute::new(self.chars[start..self.pos].iter().collect::<String>())
    }

    fn end(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!("unexpected trailing '{}'", c))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::attribute_set;
    use rstest::rstest;

    #[test]
    fn test_parse_ignores_whitespace() {
        let (determinant, dependant) = parse(" { RFC }  ->\t{Nombre ,CP} ", "->").unwrap();
        assert_eq!(determinant, attribute_set(["RFC"]).unwrap());
        assert_eq!(dependant, attribute_set(["Nombre", "CP"]).unwrap());
    }

    #[test]
    fn test_parse_multivalued_separator() {
        let (determinant, dependant) = parse("{RFC} ->-> {RegimenC}", "->->").unwrap();
        assert_eq!(determinant, attribute_set(["RFC"]).unwrap());
        assert_eq!(dependant, attribute_set(["RegimenC"]).unwrap());
    }

    #[rstest]
    #[case("", "->")]
    #[case("{A} -> {B}", "->->")] // functional text where multivalued is expected
    #[case("{A} ->-> {B}", "->")] // and the reverse
    #[case("{} -> {B}", "->")]
    #[case("{A,} -> {B}", "->")]
    #[case("A -> {B}", "->")]
    #[case("{A} -> {B", "->")]
    #[case("{A} => {B}", "->")]
    #[case("{A} -> {B} -> {C}", "->")]
    #[case("{A1} -> {B}", "->")]
    #[case("{A} {B}", "->")]
    fn test_parse_rejects_malformed(#[case] input: &str, #[case] separator: &str) {
        let err = parse(input, separator).unwrap_err();
        assert!(
            matches!(err, NormalizationError::InvalidExpression { .. }),
            "'{}' gave {:?}",
            input,
            err
        );
    }

    #[test]
    fn test_error_keeps_original_text() {
        let err = parse("{A} -> {B", "->").unwrap_err();
        assert!(err.to_string().contains("'{A} -> {B'"), "{}", err);
    }
}
