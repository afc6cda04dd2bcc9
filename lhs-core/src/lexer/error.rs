use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedToken { tok: char },
    MissingDigitAfterPeriod,
    UnterminatedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("Unknown character", vec![format!("`{}` is not part of the language", tok.escape_debug())])
            },
            LexicalErrorType::MissingDigitAfterPeriod => {
                ("Missing digits after the period", vec![])
            },
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string literal", vec!["Add a closing `\"`".to_string()])
            }
        }
    }
}
