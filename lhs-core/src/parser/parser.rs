use crate::{
    environment::prelude::DataType,
    lexer::prelude::{LexResult, LexicalError, Lexer, Spanned, Token},
    utils::prelude::SrcSpan
};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Expression, Program};

pub trait Parse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

pub struct Parser<T: Iterator<Item = LexResult>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    pub lex_errors: Vec<LexicalError>,

    // whether the last consumed token was `;`
    after_end_line: bool,
    tokens: T,
}

impl<T: Iterator<Item = LexResult>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            lex_errors: vec![],

            after_end_line: false,
            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        let next = match self.tokens.next() {
            Some(Ok(tok)) => Some(tok),
            Some(Err(err)) => {
                self.lex_errors.push(err);

                None
            },
            None => None
        };

        self.after_end_line = matches!(t, Some((_, Token::EndLine, _)));
        self.current_token = self.next_token.take();
        self.next_token = next;

        t
    }

    pub fn current_precedence(&self) -> Precedence {
        match &self.current_token {
            Some((_, token, _)) => Precedence::from(token),
            None => Precedence::Lowest
        }
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let program = Program::parse(self, None);

        // A lexical error is fatal for the whole source, whatever the parser made of
        // the tokens before it.
        if program.is_err() {
            let rest = self.tokens.by_ref().filter_map(|token| token.err());
            self.lex_errors.extend(rest);
        }

        if let Some(error) = self.lex_errors.first() {
            return parse_error(
                ParseErrorType::LexError { error: *error },
                error.location
            );
        }

        program
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.current_token = Some((start, tok, end));
                self.step();
                Ok((start, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![format!("`{}`", token.as_literal())],
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    /// Consumes the `;` that terminates a declaration or an assignment.
    pub fn expect_end_line(&mut self) -> Result<(u32, u32), ParseError> {
        self.expect_one(Token::EndLine)
            .map_err(|err| match err.error {
                ParseErrorType::UnexpectedEof => err,
                _ => ParseError { error: ParseErrorType::MissingEndLine, span: err.span }
            })
    }

    /// An expression statement ends at `;` or at the end of input. Assignments
    /// consume their own `;`, so a statement that just did so is already complete.
    pub fn expect_end_of_statement(&mut self) -> Result<(), ParseError> {
        if self.after_end_line {
            return Ok(());
        }

        match &self.current_token {
            Some((_, Token::Eof, _)) => Ok(()),
            Some(_) => self.expect_end_line().map(|_| ()),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.current_token = Some((start, Token::Ident(value.clone()), end));
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, _, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::ExpectedIdent,
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    pub fn parse_type_annotation(&mut self) -> Result<DataType, ParseError> {
        self.expect_one(Token::Colon)?;

        let (start, name, end) = self.expect_ident()?;

        match DataType::from_name(&name) {
            Some(data_type) => Ok(data_type),
            None => parse_error(
                ParseErrorType::UnknownType { name },
                SrcSpan { start, end }
            )
        }
    }
}

/// Binding power of the binary operators, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Sum,
    Product,
    Modulo,
}

impl Precedence {
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Self::Lowest => Some(Self::Sum),
            Self::Sum => Some(Self::Product),
            Self::Product => Some(Self::Modulo),
            Self::Modulo => None
        }
    }
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Plus | Token::Minus => Self::Sum,
            Token::Asterisk | Token::Slash => Self::Product,
            Token::Percent => Self::Modulo,
            _ => Self::Lowest,
        }
    }
}

pub fn produce_ast(src: &str) -> Result<Program, ParseError> {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    parser.parse()
}

pub fn produce_ast_from_stream(stream: impl Iterator<Item = char>) -> Result<Program, ParseError> {
    let lexer = Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    );
    let mut parser = Parser::new(lexer);

    parser.parse()
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
