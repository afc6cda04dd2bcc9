use crate::{
    environment::prelude::{DataType, EnvironmentError},
    parser::prelude::BinaryOperator,
    utils::prelude::SrcSpan
};

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    Environment {
        error: EnvironmentError
    },
    /// Arithmetic is only defined on two numbers.
    InvalidOperands {
        operator: BinaryOperator,
        left: DataType,
        right: DataType
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub span: SrcSpan
}

impl RuntimeError {
    pub fn environment(error: EnvironmentError, span: SrcSpan) -> Self {
        Self {
            error: RuntimeErrorType::Environment { error },
            span
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::Environment { error } => {
                let label = match error {
                    EnvironmentError::DuplicateDeclaration { .. } => "Multiple declarations",
                    EnvironmentError::UnresolvedName { .. } => "Variable not declared",
                    EnvironmentError::ConstantViolation { .. } => "Assignment to a constant",
                    EnvironmentError::TypeMismatch { .. } => "Type mismatch",
                };

                (label, vec![format!("{error}")])
            },
            RuntimeErrorType::InvalidOperands { operator, left, right } => (
                "Invalid operands",
                vec![format!("Cannot apply `{operator}` to `{left}` and `{right}`, expected `number` and `number`")]
            )
        }
    }
}
