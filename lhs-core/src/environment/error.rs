use thiserror::Error;

use super::value::DataType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("variable `{name}` is already declared in this scope")]
    DuplicateDeclaration {
        name: String
    },
    #[error("cannot resolve `{name}`")]
    UnresolvedName {
        name: String
    },
    #[error("cannot reassign `{name}` as it is a constant")]
    ConstantViolation {
        name: String
    },
    #[error("`{name}` is of type `{expected}`, but got `{got}`")]
    TypeMismatch {
        name: String,
        expected: DataType,
        got: DataType
    },
}
