use std::fmt::Display;

use crate::{
    environment::prelude::DataType,
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, InfixParse, Parse, ParseError, ParseErrorType, Parser, Precedence},
    utils::prelude::SrcSpan
};

// program -> { <statement> } eof
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let mut body = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::Eof, end)) => {
                    return Ok(Self {
                        body,
                        location: SrcSpan { start: 0, end: *end }
                    })
                },
                // the lexer stopped early, `Parser::parse` reports why
                None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: 0, end: 0 }
                ),
                Some(_) => body.push(Statement::parse(parser, None)?)
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.body.iter()
            .map(|statement| format!("{statement}"))
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join(" "))
    }
}

// statement -> <declaration> | <expression> (";" | eof) | ";"
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let res = match &parser.current_token {
            Some((_, Token::Let | Token::Const, _)) => {
                Self::VariableDeclaration(VariableDeclaration::parse(parser, None)?)
            },
            Some((start, token @ Token::Func, end)) => return parse_error(
                ParseErrorType::ReservedKeyword { token: token.clone() },
                SrcSpan { start: *start, end: *end }
            ),
            Some((start, Token::EndLine, end)) => {
                let location = SrcSpan { start: *start, end: *end };
                parser.step();

                Self::Expression(Expression::Null { location })
            },
            Some(_) => {
                let expression = Expression::parse(parser, None)?;
                parser.expect_end_of_statement()?;

                Self::Expression(expression)
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(res)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableDeclaration(declaration) => write!(f, "{declaration}"),
            Self::Expression(expression) => write!(f, "{expression};")
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::VariableDeclaration(declaration) => declaration.location,
            Self::Expression(expression) => expression.location()
        }
    }
}

// declaration -> (let | const) <identifier> [":" <type>] ( ";" | "=" <expression> ";" )
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub is_constant: bool,
    pub identifier: Identifier,
    pub value: Option<Expression>,
    pub declared_type: Option<DataType>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for VariableDeclaration {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, is_constant) = match parser.next_token() {
            Some((start, Token::Let, _)) => (start, false),
            Some((start, Token::Const, _)) => (start, true),
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["`let`".to_string(), "`const`".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let identifier = Identifier::from(parser.expect_ident()?);

        let declared_type = match parser.current_token {
            Some((_, Token::Colon, _)) => Some(parser.parse_type_annotation()?),
            _ => None
        };

        let (value, end) = match &parser.current_token {
            Some((start, Token::EndLine, end)) => {
                if is_constant {
                    return parse_error(
                        ParseErrorType::ConstWithoutValue,
                        SrcSpan { start: *start, end: *end }
                    );
                }

                let end = *end;
                parser.step();

                (None, end)
            },
            Some((_, Token::Assign, _)) => {
                parser.step();

                let value = Expression::parse(parser, None)?;
                let (_, end) = parser.expect_end_line()?;

                (Some(value), end)
            },
            Some((start, _, end)) => return parse_error(
                ParseErrorType::MissingAssign,
                SrcSpan { start: *start, end: *end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(Self {
            is_constant,
            identifier,
            value,
            declared_type,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.is_constant { "const" } else { "let" };

        write!(f, "{keyword} {}", self.identifier)?;

        if let Some(declared_type) = self.declared_type {
            write!(f, ": {declared_type}")?;
        }

        match &self.value {
            Some(value) => write!(f, " = {value};"),
            None => write!(f, ";")
        }
    }
}

// expression -> <additive>
// additive -> <multiplicative> { ("+" | "-") <multiplicative> }
// multiplicative -> <modulo> { ("*" | "/") <modulo> }
// modulo -> <primary> { "%" <primary> }
// primary -> <assignment> | <identifier> | <number> | <string> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assignment(VariableAssignment),
    Binary(BinaryExpression),
    Identifier(Identifier),
    Literal(Literal),
    Null {
        location: SrcSpan
    }
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let level = match precedence {
            None | Some(Precedence::Lowest) => Precedence::Sum,
            Some(level) => level
        };

        let mut expr = Self::parse_operand(parser, level)?;

        // Folding in a loop keeps every level left-associative.
        while parser.current_precedence() == level {
            expr = Self::Binary(BinaryExpression::parse(parser, expr, Some(level))?);
        }

        Ok(expr)
    }
}

impl Expression {
    /// Parses an operand of an operator at `level`, i.e. an expression one level tighter.
    pub fn parse_operand<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>,
        level: Precedence
    ) -> Result<Self, ParseError> {
        match level.tighter() {
            Some(tighter) => Self::parse(parser, Some(tighter)),
            None => Self::parse_primary(parser)
        }
    }

    fn parse_primary<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let expr = match &parser.current_token {
            Some((start, token, end)) => match token {
                Token::Ident(_) => match &parser.next_token {
                    Some((_, next, _)) if next.is_assignment() => {
                        Self::Assignment(VariableAssignment::parse(parser, None)?)
                    },
                    _ => Self::Identifier(Identifier::from(parser.expect_ident()?))
                },
                Token::Number(_)
                | Token::String(_) => Self::Literal(Literal::parse(parser, None)?),
                Token::LParen => {
                    parser.step();

                    let expression = Expression::parse(parser, None)?;

                    match &parser.current_token {
                        Some((_, Token::RParen, _)) => parser.step(),
                        Some((start, _, end)) => return parse_error(
                            ParseErrorType::MissingClosingParen,
                            SrcSpan { start: *start, end: *end }
                        ),
                        None => return parse_error(
                            ParseErrorType::UnexpectedEof,
                            SrcSpan { start: 0, end: 0 }
                        )
                    }

                    expression
                },
                Token::Eof => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: *start, end: *end }
                ),
                _ => return parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: token.clone(),
                        expected: vec!["an Identifier, Number, String or `(`".to_string()]
                    },
                    SrcSpan { start: *start, end: *end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(expr)
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assignment(assignment) => assignment.location,
            Self::Binary(binary) => binary.location,
            Self::Identifier(ident) => ident.location,
            Self::Literal(literal) => literal.location(),
            Self::Null { location } => *location
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Null { .. } => Ok(())
        }
    }
}

// assignment -> <identifier> ("=" | "+=" | "-=" | "*=" | "/=" | "%=") <expression> ";"
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub identifier: Identifier,
    pub value: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for VariableAssignment {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let identifier = Identifier::from(parser.expect_ident()?);

        let (operator, operator_location) = match parser.next_token() {
            Some((start, token, end)) if token.is_assignment() => (token, SrcSpan { start, end }),
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["an assignment operator".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let rhs = Expression::parse(parser, None)?;

        // `x += e` is stored as `x = x + e`
        let value = match operator.base_operator().and_then(BinaryOperator::from_token) {
            Some(base) => Expression::Binary(BinaryExpression {
                location: identifier.location.to(rhs.location()),
                left: Box::new(Expression::Identifier(identifier.clone())),
                operator: base,
                operator_location,
                right: Box::new(rhs),
            }),
            None => rhs
        };

        let (_, end) = parser.expect_end_line()?;

        Ok(Self {
            location: SrcSpan { start: identifier.location.start, end },
            identifier,
            value: Box::new(value),
        })
    }
}

impl Display for VariableAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.value)
    }
}

// identifier -> <letter> { <letter> }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo
}

impl BinaryOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        Some(match token {
            Token::Plus => Self::Add,
            Token::Minus => Self::Subtract,
            Token::Asterisk => Self::Multiply,
            Token::Slash => Self::Divide,
            Token::Percent => Self::Modulo,
            _ => return None
        })
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%"
        };

        write!(f, "{operator}")
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub operator_location: SrcSpan,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> InfixParse<T> for BinaryExpression {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let level = precedence.unwrap_or_else(|| parser.current_precedence());

        let (operator, operator_location) = match parser.next_token() {
            Some((start, token, end)) => match BinaryOperator::from_token(token.clone()) {
                Some(operator) => (operator, SrcSpan { start, end }),
                None => return parse_error(
                    ParseErrorType::UnexpectedToken {
                        token,
                        expected: vec!["`+`, `-`, `*`, `/` or `%`".to_string()]
                    },
                    SrcSpan { start, end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let right = Expression::parse_operand(parser, level)?;

        Ok(Self {
            location: left.location().to(right.location()),
            left: Box::new(left),
            operator,
            operator_location,
            right: Box::new(right),
        })
    }
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// literal -> <number> | <string>
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Numeric {
        value: f64,
        location: SrcSpan
    },
    String {
        value: String,
        location: SrcSpan
    }
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Literal {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        match parser.next_token() {
            Some((start, Token::Number(value), end)) => Ok(Self::Numeric {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, Token::String(value), end)) => Ok(Self::String {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["a Number or String".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric { value, .. } => write!(f, "{value}"),
            Self::String { value, .. } => write!(f, "{}", Token::String(value.clone()).as_literal())
        }
    }
}

impl Literal {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Numeric { location, .. } |
            Self::String { location, .. } => *location
        }
    }
}
