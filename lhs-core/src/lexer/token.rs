use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    ComposedOperator,
    Sign,
    EndLine,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Operator => "operator",
            Self::ComposedOperator => "composedOperator",
            Self::Sign => "sign",
            Self::EndLine => "endLine",
            Self::Eof => "eof",
        };

        write!(f, "{kind}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter>{<letter>}
    Ident(String),
    // <digit>{<digit>}[.<digit>{<digit>}]
    Number(f64),
    // "<any>{<any>}" with \" as the only escape
    String(String),

    // Keywords
    Let, // let
    Const, // const
    Func, // func, reserved

    // Operators
    Plus, // +
    Minus, // -
    Asterisk, // *
    Slash, // /
    Percent, // %
    Assign, // =
    LessThan, // <
    GreaterThan, // >

    // Composed operators
    PlusAssign, // +=
    MinusAssign, // -=
    AsteriskAssign, // *=
    SlashAssign, // /=
    PercentAssign, // %=
    Equal, // ==
    LessThanOrEqual, // <=
    GreaterThanOrEqual, // >=
    Arrow, // ->
    Increment, // ++

    // Signs
    LParen, // (
    RParen, // )
    Colon, // :

    EndLine, // ;
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Ident(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,

            Token::Let
            | Token::Const
            | Token::Func => TokenKind::Keyword,

            Token::Plus
            | Token::Minus
            | Token::Asterisk
            | Token::Slash
            | Token::Percent
            | Token::Assign
            | Token::LessThan
            | Token::GreaterThan => TokenKind::Operator,

            Token::PlusAssign
            | Token::MinusAssign
            | Token::AsteriskAssign
            | Token::SlashAssign
            | Token::PercentAssign
            | Token::Equal
            | Token::LessThanOrEqual
            | Token::GreaterThanOrEqual
            | Token::Arrow
            | Token::Increment => TokenKind::ComposedOperator,

            Token::LParen
            | Token::RParen
            | Token::Colon => TokenKind::Sign,

            Token::EndLine => TokenKind::EndLine,
            Token::Eof => TokenKind::Eof,
        }
    }

    pub fn is_reserved_word(&self) -> bool {
        self.kind() == TokenKind::Keyword
    }

    /// `=` and the compound forms that may follow an identifier to start an assignment.
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::PlusAssign
                | Token::MinusAssign
                | Token::AsteriskAssign
                | Token::SlashAssign
                | Token::PercentAssign
        )
    }

    /// The arithmetic operator a compound assignment desugars to.
    pub fn base_operator(&self) -> Option<Token> {
        Some(match self {
            Token::PlusAssign => Token::Plus,
            Token::MinusAssign => Token::Minus,
            Token::AsteriskAssign => Token::Asterisk,
            Token::SlashAssign => Token::Slash,
            Token::PercentAssign => Token::Percent,
            _ => return None
        })
    }

    /// Joins this token with the character right after it, if the pair is a known
    /// two-character operator. Only operators compose, so identifiers, numbers and
    /// signs always return `None`.
    pub fn compose(&self, next: char) -> Option<Token> {
        Some(match (self, next) {
            (Token::Plus, '=') => Token::PlusAssign,
            (Token::Minus, '=') => Token::MinusAssign,
            (Token::Asterisk, '=') => Token::AsteriskAssign,
            (Token::Slash, '=') => Token::SlashAssign,
            (Token::Percent, '=') => Token::PercentAssign,
            (Token::Assign, '=') => Token::Equal,
            (Token::LessThan, '=') => Token::LessThanOrEqual,
            (Token::GreaterThan, '=') => Token::GreaterThanOrEqual,
            (Token::Minus, '>') => Token::Arrow,
            (Token::Plus, '+') => Token::Increment,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.to_string(),
            Token::Number(value) => value.to_string(),
            Token::String(value) => format!("\"{}\"", value.replace('"', "\\\"")),

            Token::Let => "let".to_string(),
            Token::Const => "const".to_string(),
            Token::Func => "func".to_string(),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::Assign => "=".to_string(),
            Token::LessThan => "<".to_string(),
            Token::GreaterThan => ">".to_string(),

            Token::PlusAssign => "+=".to_string(),
            Token::MinusAssign => "-=".to_string(),
            Token::AsteriskAssign => "*=".to_string(),
            Token::SlashAssign => "/=".to_string(),
            Token::PercentAssign => "%=".to_string(),
            Token::Equal => "==".to_string(),
            Token::LessThanOrEqual => "<=".to_string(),
            Token::GreaterThanOrEqual => ">=".to_string(),
            Token::Arrow => "->".to_string(),
            Token::Increment => "++".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Colon => ":".to_string(),

            Token::EndLine => ";".to_string(),
            Token::Eof => "\0".to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eof => write!(f, "eof"),
            token => write!(f, "{}({})", token.kind(), token.as_literal())
        }
    }
}
