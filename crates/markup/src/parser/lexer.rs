//! Lexer for tag markup.
//!
//! Converts input text into a stream of tokens.

use crate::error::MarkupError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag content (without brackets): `click:run_command:"/spawn"`
    OpenTag(&'a str),
    /// Closing tag content (without `</` and `>`): `bold`
    CloseTag(&'a str),
    /// Escaped character, `\<` or `\\`.
    Escaped(char),
}

/// Lexer for tag markup.
///
/// Inside a tag, an argument that starts with `"` or `'` is quoted: `>` and
/// `:` lose their meaning until the matching quote, and a backslash escapes
/// the next character.
///
/// # Examples
///
/// ```
/// use markup::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<bold>Hello</bold>").collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::OpenTag("bold"), Token::Text("Hello"), Token::CloseTag("bold")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until we hit a special character or end of input.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            match c {
                '<' | '\\' => break,
                _ => {
                    self.advance();
                }
            }
        }

        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Consume a tag (including the brackets).
    fn consume_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let tag_start = self.pos;
        self.advance(); // consume '<'

        let content_start = self.pos;
        let mut quote: Option<char> = None;
        let mut arg_start = true;

        loop {
            let Some(c) = self.peek() else {
                return Err(MarkupError::UnclosedTag(tag_start));
            };

            match (quote, c) {
                (Some(_), '\\') => {
                    self.advance();
                    if self.advance().is_none() {
                        return Err(MarkupError::UnclosedTag(tag_start));
                    }
                    continue;
                }
                (Some(open), c) if c == open => quote = None,
                (Some(_), _) => {}
                (None, '>') => break,
                (None, '"' | '\'') if arg_start => quote = Some(c),
                _ => {}
            }

            arg_start = quote.is_none() && c == ':';
            self.advance();
        }

        let content = &self.input[content_start..self.pos];
        self.advance(); // consume '>'

        if let Some(name) = content.strip_prefix('/') {
            if name.is_empty() {
                return Err(MarkupError::EmptyTag(tag_start));
            }
            Ok(Token::CloseTag(name))
        } else if content.is_empty() {
            Err(MarkupError::EmptyTag(tag_start))
        } else {
            Ok(Token::OpenTag(content))
        }
    }

    /// Consume an escape sequence. A backslash before anything other than
    /// `<` or `\` is literal.
    fn consume_escape(&mut self) -> Token<'a> {
        let escape_start = self.pos;
        self.advance(); // consume '\'

        match self.peek() {
            Some(c @ ('<' | '\\')) => {
                self.advance();
                Token::Escaped(c)
            }
            _ => Token::Text(&self.input[escape_start..self.pos]),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        match self.peek() {
            Some('<') => Some(self.consume_tag()),
            Some('\\') => Some(Ok(self.consume_escape())),
            _ => self.consume_text().map(|t| Ok(Token::Text(t))),
        }
    }
}
