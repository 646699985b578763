// keg-core/src/infrastructure/parser/grammar.rs

use super::lexer::{Token, TokenKind};
use super::{ParseFailure, RawHook, RawManifest};
use crate::domain::package::field;
use std::ops::Range;

const KNOWN_KEYS: [&str; 8] = [
    field::VERSION,
    field::CHECKSUM,
    field::URL_TEMPLATE,
    field::DISPLAY_NAME,
    field::HOMEPAGE,
    field::LICENSE,
    field::INSTALL_TARGET,
    field::POST_INSTALL,
];

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// `tokens` must end with `Eof`, as produced by the lexer.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn skip_newlines(&mut self) {
        while *self.peek() == TokenKind::Newline {
            self.advance();
        }
    }

    fn unexpected(&self, expected: &str) -> ParseFailure {
        let token = &self.tokens[self.pos];
        ParseFailure::new(
            format!("expected {expected}, found {}", token.kind.describe()),
            token.span.clone(),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseFailure> {
        if *self.peek() == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_word(&mut self, expected: &str) -> Result<(String, Range<usize>), ParseFailure> {
        if let TokenKind::Word(word) = self.peek() {
            let word = word.clone();
            Ok((word, self.advance().span))
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_string(&mut self, expected: &str) -> Result<String, ParseFailure> {
        if let TokenKind::Str(value) = self.peek() {
            let value = value.clone();
            self.advance();
            Ok(value)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// A declaration ends at a newline or right before the closing brace.
    fn end_of_declaration(&mut self) -> Result<(), ParseFailure> {
        match self.peek() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(self
                .unexpected("end of line")
                .with_help("Write one declaration per line.")),
        }
    }

    pub(crate) fn parse(mut self) -> Result<RawManifest, ParseFailure> {
        self.skip_newlines();
        let (keyword, span) = self.expect_word("`package`")?;
        if keyword != "package" {
            return Err(
                ParseFailure::new(format!("expected `package`, found `{keyword}`"), span)
                    .with_help("A manifest starts with `package \"<identifier>\" {`."),
            );
        }
        let identifier = self.expect_string("the package identifier string")?;
        let open = self.expect(TokenKind::LBrace, "`{`")?;

        let mut manifest = RawManifest {
            identifier,
            ..RawManifest::default()
        };
        let mut hooks_seen = false;

        loop {
            self.skip_newlines();
            match self.peek() {
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseFailure::new("unclosed package block", open.span)
                        .with_label("opened here")
                        .with_help("Add the closing `}`."));
                }
                TokenKind::Word(_) => self.declaration(&mut manifest, &mut hooks_seen)?,
                _ => return Err(self.unexpected("a declaration")),
            }
        }

        self.skip_newlines();
        if *self.peek() != TokenKind::Eof {
            return Err(self
                .unexpected("end of file")
                .with_help("A manifest declares exactly one package."));
        }
        Ok(manifest)
    }

    fn declaration(
        &mut self,
        manifest: &mut RawManifest,
        hooks_seen: &mut bool,
    ) -> Result<(), ParseFailure> {
        let (key, span) = self.expect_word("a declaration")?;
        let what = format!("a string value for `{key}`");

        match key.as_str() {
            field::VERSION => {
                set_once(&mut manifest.version, self.expect_string(&what)?, &key, span)?
            }
            field::CHECKSUM => {
                set_once(&mut manifest.checksum, self.expect_string(&what)?, &key, span)?
            }
            field::URL_TEMPLATE => {
                set_once(&mut manifest.url_template, self.expect_string(&what)?, &key, span)?
            }
            field::DISPLAY_NAME => {
                set_once(&mut manifest.display_name, self.expect_string(&what)?, &key, span)?
            }
            field::HOMEPAGE => {
                set_once(&mut manifest.homepage, self.expect_string(&what)?, &key, span)?
            }
            field::LICENSE => {
                let value = match self.peek() {
                    TokenKind::Word(_) => self.expect_word(&what)?.0,
                    _ => self.expect_string(&what)?,
                };
                set_once(&mut manifest.license, value, &key, span)?
            }
            field::INSTALL_TARGET => manifest.install_targets.push(self.expect_string(&what)?),
            field::POST_INSTALL => {
                if *hooks_seen {
                    return Err(duplicate(&key, span));
                }
                *hooks_seen = true;
                manifest.post_install = self.hooks()?;
            }
            _ => {
                return Err(ParseFailure::new(format!("unknown key `{key}`"), span)
                    .with_label("not a manifest key")
                    .with_help(format!("Known keys: {}.", KNOWN_KEYS.join(", "))));
            }
        }

        self.end_of_declaration()
    }

    fn hooks(&mut self) -> Result<Vec<RawHook>, ParseFailure> {
        let open = self.expect(TokenKind::LBrace, "`{` after `post-install`")?;
        let mut hooks = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek() {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(hooks);
                }
                TokenKind::Eof => {
                    return Err(ParseFailure::new("unclosed post-install block", open.span)
                        .with_label("opened here"));
                }
                TokenKind::Word(_) => {
                    hooks.push(self.hook()?);
                    self.end_of_declaration()?;
                }
                _ => return Err(self.unexpected("a hook name")),
            }
        }
    }

    // <hook-name> [key: "value" {, key: "value"}]
    fn hook(&mut self) -> Result<RawHook, ParseFailure> {
        let (name, _) = self.expect_word("a hook name")?;
        let mut params = Vec::new();
        if matches!(self.peek(), TokenKind::Word(_)) {
            loop {
                let (key, _) = self.expect_word("a hook parameter name")?;
                self.expect(TokenKind::Colon, "`:` after the parameter name")?;
                let value = self.expect_string(&format!("a string value for `{key}`"))?;
                params.push((key, value));
                if *self.peek() != TokenKind::Comma {
                    break;
                }
                self.advance();
            }
        }
        Ok(RawHook { name, params })
    }
}

fn duplicate(key: &str, span: Range<usize>) -> ParseFailure {
    ParseFailure::new(format!("duplicate key `{key}`"), span)
        .with_label("declared again here")
        .with_help(format!("`{key}` may be declared only once."))
}

fn set_once(
    slot: &mut Option<String>,
    value: String,
    key: &str,
    span: Range<usize>,
) -> Result<(), ParseFailure> {
    if slot.is_some() {
        return Err(duplicate(key, span));
    }
    *slot = Some(value);
    Ok(())
}
