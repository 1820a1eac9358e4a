//! Strict parser for the mapping literals written into classification logs.
//!
//! Log payloads come from two writers: JSON (`{"tabs_open": 3}`) and
//! Python-style reprs (`{'tabs_open': 3, 'ok': True}`). This parser accepts
//! both data notations and nothing else: no identifiers beyond the
//! keyword constants, no expressions, no calls.

use crate::utils::error::ParseError;
use serde_json::{Map, Number, Value};

/// Nesting limit for containers
const MAX_DEPTH: usize = 64;

/// Parse a literal into a JSON value
///
/// # Errors
/// * `ParseError::InvalidLiteral` - any syntax outside the accepted notation
pub fn parse_literal(input: &str) -> Result<Value, ParseError> {
    let mut parser = LiteralParser { input, pos: 0 };

    parser.skip_whitespace();
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();

    if parser.pos < input.len() {
        return Err(parser.error("unexpected trailing characters"));
    }

    Ok(value)
}

struct LiteralParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(&format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn error(&self, reason: &str) -> ParseError {
        ParseError::InvalidLiteral {
            offset: self.pos,
            reason: reason.to_string(),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }

        match self.peek() {
            Some('{') => self.parse_object(depth),
            Some('[') => self.parse_array(depth),
            Some('"') | Some('\'') => self.parse_string().map(Value::String),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.parse_number(),
            Some(c) if c.is_ascii_alphabetic() => self.parse_constant(),
            Some(c) => Err(self.error(&format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect('{')?;
        let mut map = Map::new();

        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }

            if !matches!(self.peek(), Some('"') | Some('\'')) {
                return Err(self.error("object keys must be quoted strings"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(map)),
                _ => return Err(self.error("expected ',' or '}'")),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value(depth + 1)?);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(Value::Array(items)),
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let quote = match self.bump() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error("expected string")),
        };
        let mut out = String::new();

        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ParseError> {
        match self.bump() {
            Some('\\') => Ok('\\'),
            Some('\'') => Ok('\''),
            Some('"') => Ok('"'),
            Some('/') => Ok('/'),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('u') => {
                let end = self.pos + 4;
                let hex = self
                    .input
                    .get(self.pos..end)
                    .ok_or_else(|| self.error("truncated \\u escape"))?;
                let code = u32::from_str_radix(hex, 16)
                    .map_err(|_| self.error("invalid \\u escape"))?;
                self.pos = end;
                char::from_u32(code).ok_or_else(|| self.error("invalid code point"))
            }
            _ => Err(self.error("invalid escape sequence")),
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.bump();
        }
        let text = &self.input[start..self.pos];

        let is_float = text.contains(['.', 'e', 'E']);
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::from(n));
            }
        }

        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ParseError::InvalidLiteral {
                offset: start,
                reason: format!("invalid number '{}'", text),
            })
    }

    fn parse_constant(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }

        match &self.input[start..self.pos] {
            "true" | "True" => Ok(Value::Bool(true)),
            "false" | "False" => Ok(Value::Bool(false)),
            "null" | "None" => Ok(Value::Null),
            other => Err(ParseError::InvalidLiteral {
                offset: start,
                reason: format!("unsupported identifier '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_quoted_mapping() {
        let value = parse_literal("{'tabs_open': 3, 'classification_time': '12.5ms'}").unwrap();
        assert_eq!(value, json!({"tabs_open": 3, "classification_time": "12.5ms"}));
    }

    #[test]
    fn test_json_mapping() {
        let value =
            parse_literal(r#"{"tabs_open":2,"classification_time":"0.5 ms","classification_result":["arts","music"]}"#)
                .unwrap();
        assert_eq!(value["classification_result"], json!(["arts", "music"]));
    }

    #[test]
    fn test_python_constants_and_trailing_comma() {
        let value = parse_literal("{'a': True, 'b': None, 'c': [1, 2.5, -3e2,],}").unwrap();
        assert_eq!(value, json!({"a": true, "b": null, "c": [1, 2.5, -300.0]}));
    }

    #[test]
    fn test_escapes() {
        let value = parse_literal(r#"{'k': 'it\'s é\n'}"#).unwrap();
        assert_eq!(value["k"], "it's é\n");
    }

    #[test]
    fn test_rejects_expressions() {
        assert!(parse_literal("{'a': __import__('os')}").is_err());
        assert!(parse_literal("{'a': 1 + 2}").is_err());
        assert!(parse_literal("{a: 1}").is_err());
    }

    #[test]
    fn test_rejects_trailing_garbage_and_unterminated() {
        assert!(parse_literal("{'a': 1} extra").is_err());
        assert!(parse_literal("{'a': 'open").is_err());
        assert!(parse_literal("{'a': 1").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let deep = "[".repeat(MAX_DEPTH + 2) + &"]".repeat(MAX_DEPTH + 2);
        assert!(parse_literal(&deep).is_err());
    }
}
