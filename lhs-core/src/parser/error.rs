use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedIdent,
    MissingAssign,
    ConstWithoutValue,
    MissingEndLine,
    MissingClosingParen,
    UnexpectedEof,
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    UnknownType {
        name: String
    },
    ReservedKeyword {
        token: Token
    },
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedIdent => ("Expected an identifier as a name", vec![]),
            ParseErrorType::MissingAssign => ("Expected `=` operator", vec![]),
            ParseErrorType::ConstWithoutValue => (
                "Constant declared without a value",
                vec!["A `const` must be assigned where it is declared".to_string()]
            ),
            ParseErrorType::MissingEndLine => ("Expected a semicolon", vec![]),
            ParseErrorType::MissingClosingParen => ("Expected `)`", vec![]),
            ParseErrorType::UnexpectedEof => ("Unexpected end of input", vec![]),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = match token {
                    Token::Number(_) => "a Number".to_string(),
                    Token::String(_) => "a String".to_string(),
                    Token::Ident(_) => "an Identifier".to_string(),
                    Token::EndLine => "`;`".to_string(),
                    Token::Eof => "the end of input".to_string(),
                    _ if token.is_reserved_word() => format!("the keyword `{}`", token.as_literal()),
                    _ => format!("`{}`", token.as_literal())
                };

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnknownType { name } => (
                "Unknown type",
                vec![format!("`{name}` is not one of `number`, `string`, `bool`, `nil`")]
            ),
            ParseErrorType::ReservedKeyword { token } => (
                "Reserved keyword",
                vec![format!("`{}` is reserved and cannot be used yet", token.as_literal())]
            ),
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
