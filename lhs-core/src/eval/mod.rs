pub mod error;

pub mod prelude {
    pub use super::{
        error::*,
        evaluate,
        Evaluate,
        EvalResult
    };
}


use crate::{
    environment::prelude::{Environment, Value, NULL},
    parser::prelude::{
        BinaryExpression, BinaryOperator, Expression, Identifier, Literal, Program, Statement,
        VariableAssignment, VariableDeclaration
    }
};

use error::{RuntimeError, RuntimeErrorType};

pub type EvalResult = Result<Value, RuntimeError>;

/// Reduces a syntax tree node to a runtime value against `env`.
pub trait Evaluate {
    fn evaluate(&self, env: &mut Environment) -> EvalResult;
}

pub fn evaluate<N: Evaluate + ?Sized>(node: &N, env: &mut Environment) -> EvalResult {
    node.evaluate(env)
}

impl Evaluate for Program {
    /// Runs the statements in order and yields the value of the last one. The
    /// first failing statement stops the run, earlier effects are kept.
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        let mut last = NULL;

        for statement in &self.body {
            last = statement.evaluate(env)?;
        }

        Ok(last)
    }
}

impl Evaluate for Statement {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        match self {
            Statement::VariableDeclaration(declaration) => declaration.evaluate(env),
            Statement::Expression(expression) => expression.evaluate(env)
        }
    }
}

impl Evaluate for VariableDeclaration {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        let value = match &self.value {
            Some(value) => value.evaluate(env)?,
            None => NULL
        };

        env.declare(&self.identifier.value, value, self.is_constant, self.declared_type)
            .map_err(|error| RuntimeError::environment(error, self.location))
    }
}

impl Evaluate for Expression {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        match self {
            Expression::Assignment(assignment) => assignment.evaluate(env),
            Expression::Binary(binary) => binary.evaluate(env),
            Expression::Identifier(ident) => ident.evaluate(env),
            Expression::Literal(literal) => literal.evaluate(env),
            Expression::Null { .. } => Ok(NULL)
        }
    }
}

impl Evaluate for VariableAssignment {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        let value = self.value.evaluate(env)?;

        env.assign(&self.identifier.value, value)
            .map_err(|error| RuntimeError::environment(error, self.location))
    }
}

impl Evaluate for Identifier {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        env.lookup(&self.value)
            .map_err(|error| RuntimeError::environment(error, self.location))
    }
}

impl Evaluate for Literal {
    fn evaluate(&self, _env: &mut Environment) -> EvalResult {
        Ok(match self {
            Literal::Numeric { value, .. } => Value::Number { value: *value },
            Literal::String { value, .. } => Value::String { value: value.clone() }
        })
    }
}

impl Evaluate for BinaryExpression {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        let left = self.left.evaluate(env)?;
        let right = self.right.evaluate(env)?;

        match (left, right) {
            (
                Value::Number { value: left_value },
                Value::Number { value: right_value }
            ) => {
                // plain IEEE arithmetic, division by zero gives inf or NaN
                let value = match self.operator {
                    BinaryOperator::Add => left_value + right_value,
                    BinaryOperator::Subtract => left_value - right_value,
                    BinaryOperator::Multiply => left_value * right_value,
                    BinaryOperator::Divide => left_value / right_value,
                    BinaryOperator::Modulo => left_value % right_value
                };

                Ok(Value::Number { value })
            },
            (left, right) => Err(RuntimeError {
                error: RuntimeErrorType::InvalidOperands {
                    operator: self.operator,
                    left: left.data_type(),
                    right: right.data_type()
                },
                span: self.location
            })
        }
    }
}
