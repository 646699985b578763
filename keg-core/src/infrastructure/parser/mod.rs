// keg-core/src/infrastructure/parser/mod.rs
//
// Manifest text -> RawManifest. No field validation happens here: the parser
// only enforces the grammar, the loader enforces the package rules.

mod grammar;
mod lexer;

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::ops::Range;
use thiserror::Error;

/// A manifest as written, before any package rule is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawManifest {
    pub identifier: String,
    pub version: Option<String>,
    pub checksum: Option<String>,
    pub url_template: Option<String>,
    pub display_name: Option<String>,
    pub homepage: Option<String>,
    pub license: Option<String>,
    pub install_targets: Vec<String>,
    pub post_install: Vec<RawHook>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHook {
    pub name: String,
    pub params: Vec<(String, String)>,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Manifest syntax error: {message}")]
#[diagnostic(code(keg::infra::syntax))]
pub struct SyntaxError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    pub label: String,
    #[help]
    pub help: Option<String>,
}

/// Grammar failure before it is attached to its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseFailure {
    message: String,
    label: String,
    help: Option<String>,
    span: Range<usize>,
}

impl ParseFailure {
    pub(crate) fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            label: "here".to_string(),
            help: None,
            span,
        }
    }

    pub(crate) fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub(crate) fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn into_syntax_error(self, name: &str, src: &str) -> SyntaxError {
        SyntaxError {
            message: self.message,
            src: NamedSource::new(name, src.to_string()),
            span: (self.span.start, self.span.end - self.span.start).into(),
            label: self.label,
            help: self.help,
        }
    }
}

/// Parses manifest text. `name` labels the source in diagnostics.
pub fn parse_manifest(name: &str, src: &str) -> Result<RawManifest, SyntaxError> {
    lexer::tokenize(src)
        .and_then(|tokens| grammar::Parser::new(tokens).parse())
        .map_err(|failure| failure.into_syntax_error(name, src))
}
