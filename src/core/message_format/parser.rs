use std::collections::HashSet;

use super::ast::{Element, FormatKind, Message, MessageOption, PluralKind};
use super::error::MessageFormatError;

type Result<T> = std::result::Result<T, MessageFormatError>;

/// Parse an ICU message string.
pub fn parse(input: &str) -> Result<Message> {
    let mut parser = Parser { input, pos: 0 };
    let message = parser.parse_message(false)?;
    match parser.peek() {
        None => Ok(message),
        Some(_) => Err(parser.expected("\"{\" or text")),
    }
}

/// Recursive-descent parser over the input, tracking a byte offset.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.expected(&format!("\"{}\"", expected)))
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &input[start..self.pos]
    }

    /// Error at the current position.
    fn expected(&self, what: &str) -> MessageFormatError {
        let found = match self.peek() {
            Some(c) => format!("\"{}\"", c),
            None => "end of input".to_string(),
        };
        self.error_at(self.pos, format!("Expected {} but {} found.", what, found))
    }

    fn error_at(&self, offset: usize, message: String) -> MessageFormatError {
        let before = &self.input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        MessageFormatError {
            message,
            offset,
            line,
            column,
        }
    }

    /// Parse elements until end of input or an unmatched `}`.
    fn parse_message(&mut self, in_plural: bool) -> Result<Message> {
        let mut elements = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '}' => break,
                '{' => {
                    flush_text(&mut text, &mut elements);
                    elements.push(self.parse_argument(in_plural)?);
                }
                '#' if in_plural => {
                    self.bump();
                    flush_text(&mut text, &mut elements);
                    elements.push(Element::Pound);
                }
                '\\' => text.push(self.parse_escape()?),
                _ => {
                    self.bump();
                    text.push(c);
                }
            }
        }

        flush_text(&mut text, &mut elements);
        Ok(Message::new(elements))
    }

    fn parse_escape(&mut self) -> Result<char> {
        self.expect('\\')?;
        match self.peek() {
            Some(c @ ('{' | '}' | '\\' | '#')) => {
                self.bump();
                Ok(c)
            }
            Some('u') => {
                self.bump();
                let start = self.pos;
                let hex = self.take_while(|c| c.is_ascii_hexdigit());
                if hex.len() < 4 {
                    self.pos = start;
                    return Err(self.expected("four hexadecimal digits"));
                }
                // Only the first four digits belong to the escape.
                self.pos = start + 4;
                u32::from_str_radix(&hex[..4], 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error_at(start, "Invalid unicode escape.".to_string()))
            }
            _ => Err(self.expected("\"\\\\\", \"{\", \"}\", \"#\" or \"u\"")),
        }
    }

    fn parse_argument(&mut self, in_plural: bool) -> Result<Element> {
        self.expect('{')?;
        self.skip_ws();

        let name = self.take_while(is_name_char);
        if name.is_empty() {
            return Err(self.expected("argument name"));
        }
        let name = name.to_string();
        self.skip_ws();

        if self.eat('}') {
            return Ok(Element::Argument(name));
        }
        if !self.eat(',') {
            return Err(self.expected("\",\" or \"}\""));
        }
        self.skip_ws();

        let type_start = self.pos;
        let kind = self.take_while(|c| c.is_ascii_alphabetic());
        let element = match kind {
            "number" | "date" | "time" => {
                let kind = match kind {
                    "number" => FormatKind::Number,
                    "date" => FormatKind::Date,
                    _ => FormatKind::Time,
                };
                self.skip_ws();
                let style = if self.eat(',') {
                    let style = self.take_while(|c| c != '{' && c != '}').trim();
                    if style.is_empty() {
                        return Err(self.expected("argument style"));
                    }
                    Some(style.to_string())
                } else {
                    None
                };
                Element::Formatted { name, kind, style }
            }
            "plural" | "selectordinal" => {
                let kind = if kind == "plural" {
                    PluralKind::Cardinal
                } else {
                    PluralKind::Ordinal
                };
                self.skip_ws();
                self.expect(',')?;
                self.skip_ws();
                let offset = self.parse_offset()?;
                let options = self.parse_options(true)?;
                Element::Plural {
                    name,
                    kind,
                    offset,
                    options,
                }
            }
            "select" => {
                self.skip_ws();
                self.expect(',')?;
                let options = self.parse_options(in_plural)?;
                Element::Select { name, options }
            }
            _ => {
                self.pos = type_start;
                return Err(self.expected(
                    "\"number\", \"date\", \"time\", \"plural\", \"selectordinal\" or \"select\"",
                ));
            }
        };

        self.skip_ws();
        self.expect('}')?;
        Ok(element)
    }

    fn parse_offset(&mut self) -> Result<i64> {
        if !self.input[self.pos..].starts_with("offset:") {
            return Ok(0);
        }
        self.pos += "offset:".len();
        self.skip_ws();

        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        let offset = digits.parse::<i64>().map_err(|_| {
            self.pos = start;
            self.expected("offset value")
        })?;
        self.skip_ws();
        Ok(offset)
    }

    fn parse_options(&mut self, in_plural: bool) -> Result<Vec<MessageOption>> {
        let mut options = Vec::new();
        let mut seen = HashSet::new();

        loop {
            self.skip_ws();
            if self.peek() == Some('}') || self.peek().is_none() {
                break;
            }

            let start = self.pos;
            let selector = if self.eat('=') {
                let value = self.take_while(|c| c.is_ascii_digit());
                if value.is_empty() {
                    return Err(self.expected("number"));
                }
                format!("={}", value)
            } else {
                let value = self.take_while(is_name_char);
                if value.is_empty() {
                    return Err(self.expected("option selector"));
                }
                value.to_string()
            };

            if !seen.insert(selector.clone()) {
                return Err(
                    self.error_at(start, format!("Duplicate option selector \"{}\".", selector))
                );
            }

            self.skip_ws();
            self.expect('{')?;
            let value = self.parse_message(in_plural)?;
            self.expect('}')?;
            options.push(MessageOption { selector, value });
        }

        if options.is_empty() {
            return Err(self.expected("at least one option"));
        }
        Ok(options)
    }
}

fn flush_text(text: &mut String, elements: &mut Vec<Element>) {
    if !text.is_empty() {
        elements.push(Element::Literal(std::mem::take(text)));
    }
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '{' | '}' | ',' | '#' | '\\' | '=')
}
