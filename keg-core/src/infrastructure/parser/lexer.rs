// keg-core/src/infrastructure/parser/lexer.rs

use super::ParseFailure;
use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Bare word: keys, hook names, parameter keys, `:symbols`.
    Word(String),
    /// Double-quoted string, escapes resolved.
    Str(String),
    LBrace,
    RBrace,
    Colon,
    Comma,
    Newline,
    Eof,
}

impl TokenKind {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Word(w) => format!("`{w}`"),
            Self::Str(_) => "a string".to_string(),
            Self::LBrace => "`{`".to_string(),
            Self::RBrace => "`}`".to_string(),
            Self::Colon => "`:`".to_string(),
            Self::Comma => "`,`".to_string(),
            Self::Newline => "end of line".to_string(),
            Self::Eof => "end of file".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn next_offset(chars: &mut Chars<'_>, src: &str) -> usize {
    chars.peek().map_or(src.len(), |&(i, _)| i)
}

fn read_word<'a>(chars: &mut Chars<'_>, src: &'a str, start: usize) -> &'a str {
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }
    &src[start..next_offset(chars, src)]
}

fn read_string(chars: &mut Chars<'_>, src: &str, start: usize) -> Result<Token, ParseFailure> {
    chars.next(); // opening quote
    let mut value = String::new();
    loop {
        match chars.next() {
            Some((end, '"')) => return Ok(Token::new(TokenKind::Str(value), start..end + 1)),
            Some((at, '\\')) => match chars.next() {
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, other)) => {
                    return Err(ParseFailure::new(
                        format!("unknown escape `\\{other}`"),
                        at..at + 1 + other.len_utf8(),
                    )
                    .with_help("Supported escapes are \\\", \\\\, \\n and \\t."));
                }
                None => break,
            },
            Some((_, '\n')) | None => break,
            Some((_, c)) => value.push(c),
        }
    }
    let end = src[start..]
        .find('\n')
        .map_or(src.len(), |offset| start + offset);
    Err(ParseFailure::new("unterminated string", start..end)
        .with_label("string starts here")
        .with_help("Close the string with `\"` before the end of the line."))
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, ParseFailure> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            '\n' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Newline, start..start + 1));
            }
            '#' => {
                while chars.peek().is_some_and(|&(_, c)| c != '\n') {
                    chars.next();
                }
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '{' | '}' | ',' => {
                chars.next();
                let kind = match c {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    _ => TokenKind::Comma,
                };
                tokens.push(Token::new(kind, start..start + 1));
            }
            ':' => {
                chars.next();
                // `:gpl` is a symbol, `key: "v"` is a separator.
                if chars.peek().is_some_and(|&(_, n)| is_word_start(n)) {
                    let word = read_word(&mut chars, src, start);
                    let end = start + word.len();
                    tokens.push(Token::new(TokenKind::Word(word.to_string()), start..end));
                } else {
                    tokens.push(Token::new(TokenKind::Colon, start..start + 1));
                }
            }
            '"' => tokens.push(read_string(&mut chars, src, start)?),
            c if is_word_start(c) => {
                let word = read_word(&mut chars, src, start);
                let end = start + word.len();
                tokens.push(Token::new(TokenKind::Word(word.to_string()), start..end));
            }
            other => {
                return Err(ParseFailure::new(
                    format!("unexpected character `{other}`"),
                    start..start + other.len_utf8(),
                )
                .with_label("not valid here"));
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, src.len()..src.len()));
    Ok(tokens)
}
