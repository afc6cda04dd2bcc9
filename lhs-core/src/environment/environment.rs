use std::collections::HashMap;

use super::error::EnvironmentError;
use super::value::{DataType, Value, FALSE, NULL, TRUE};

/// Index of a scope inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
    pub declared_type: DataType,
    pub is_constant: bool
}

#[derive(Default, Debug, Clone, PartialEq)]
struct Scope {
    parent: Option<ScopeId>,
    variables: HashMap<String, Variable>
}

/// Scope chain stored as an arena: every scope keeps the index of its
/// enclosing scope, and `current` marks where declarations go.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
            current: ScopeId(0)
        }
    }

    /// Root scope holding the `true`, `false` and `null` constants.
    pub fn prelude() -> Self {
        let mut env = Self::new();

        for (name, value) in [("true", TRUE), ("false", FALSE), ("null", NULL)] {
            env.scope_mut(env.current).variables.insert(name.to_string(), Variable {
                name: name.to_string(),
                declared_type: value.data_type(),
                value,
                is_constant: true
            });
        }

        env
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn enter_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());

        self.scopes.push(Scope {
            parent: Some(self.current),
            variables: HashMap::new()
        });
        self.current = id;

        id
    }

    /// Drops the current scope with its variables. The root scope is never dropped.
    pub fn exit_scope(&mut self) -> Option<ScopeId> {
        let parent = self.scope(self.current).parent?;

        // scopes are entered and exited in stack order, so the current one is last
        self.scopes.truncate(self.current.0);
        self.current = parent;

        Some(parent)
    }

    pub fn declare(
        &mut self,
        name: &str,
        value: Value,
        is_constant: bool,
        declared_type: Option<DataType>
    ) -> Result<Value, EnvironmentError> {
        let scope = self.scope_mut(self.current);

        if scope.variables.contains_key(name) {
            return Err(EnvironmentError::DuplicateDeclaration { name: name.to_string() });
        }

        let declared_type = match declared_type {
            Some(declared_type) if declared_type != value.data_type() => {
                return Err(EnvironmentError::TypeMismatch {
                    name: name.to_string(),
                    expected: declared_type,
                    got: value.data_type()
                });
            },
            Some(declared_type) => declared_type,
            None => value.data_type()
        };

        scope.variables.insert(name.to_string(), Variable {
            name: name.to_string(),
            value: value.clone(),
            declared_type,
            is_constant
        });

        Ok(value)
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, EnvironmentError> {
        let owner = self.resolve(name)
            .ok_or_else(|| EnvironmentError::UnresolvedName { name: name.to_string() })?;

        let variable = self.scope_mut(owner).variables.get_mut(name)
            .ok_or_else(|| EnvironmentError::UnresolvedName { name: name.to_string() })?;

        if variable.is_constant {
            return Err(EnvironmentError::ConstantViolation { name: name.to_string() });
        }

        if variable.declared_type != value.data_type() {
            return Err(EnvironmentError::TypeMismatch {
                name: name.to_string(),
                expected: variable.declared_type,
                got: value.data_type()
            });
        }

        variable.value = value.clone();

        Ok(value)
    }

    pub fn lookup(&self, name: &str) -> Result<Value, EnvironmentError> {
        self.variable(name)
            .map(|variable| variable.value.clone())
            .ok_or_else(|| EnvironmentError::UnresolvedName { name: name.to_string() })
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        let owner = self.resolve(name)?;

        self.scope(owner).variables.get(name)
    }

    /// Nearest scope, walking outwards from the current one, that declares `name`.
    pub fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut id = Some(self.current);

        while let Some(current) = id {
            let scope = self.scope(current);

            if scope.variables.contains_key(name) {
                return Some(current);
            }

            id = scope.parent;
        }

        None
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}
