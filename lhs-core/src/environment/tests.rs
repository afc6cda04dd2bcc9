use super::prelude::{DataType, Environment, EnvironmentError, Value, NULL, TRUE};

#[test]
fn test_declare_and_lookup() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();

    let declared = env.declare("x", Value::from(5.0), false, None)?;

    assert_eq!(declared, Value::from(5.0));
    assert_eq!(env.lookup("x")?, Value::from(5.0));

    let variable = env.variable("x").expect("x is declared");

    assert_eq!(variable.name, "x");
    assert_eq!(variable.declared_type, DataType::Number);
    assert!(!variable.is_constant);

    Ok(())
}

#[test]
fn test_duplicate_declaration() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();

    env.declare("x", Value::from(1.0), false, None)?;

    assert_eq!(
        env.declare("x", Value::from(2.0), false, None),
        Err(EnvironmentError::DuplicateDeclaration { name: "x".to_string() })
    );
    assert_eq!(env.lookup("x")?, Value::from(1.0));

    Ok(())
}

#[test]
fn test_declared_type_mismatch() {
    let mut env = Environment::new();

    assert_eq!(
        env.declare("s", Value::from(1.0), false, Some(DataType::String)),
        Err(EnvironmentError::TypeMismatch {
            name: "s".to_string(),
            expected: DataType::String,
            got: DataType::Number
        })
    );
    assert!(env.variable("s").is_none());
}

#[test]
fn test_assign() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();

    env.declare("x", Value::from(1.0), false, None)?;

    assert_eq!(env.assign("x", Value::from(8.0))?, Value::from(8.0));
    assert_eq!(env.lookup("x")?, Value::from(8.0));

    assert_eq!(
        env.assign("x", Value::from("s")),
        Err(EnvironmentError::TypeMismatch {
            name: "x".to_string(),
            expected: DataType::Number,
            got: DataType::String
        })
    );
    assert_eq!(env.lookup("x")?, Value::from(8.0));

    Ok(())
}

#[test]
fn test_constant_violation() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();

    env.declare("c", Value::from(1.0), true, None)?;

    assert_eq!(
        env.assign("c", Value::from(2.0)),
        Err(EnvironmentError::ConstantViolation { name: "c".to_string() })
    );
    assert_eq!(env.lookup("c")?, Value::from(1.0));

    Ok(())
}

#[test]
fn test_unresolved_name() {
    let mut env = Environment::new();

    let unresolved = Err(EnvironmentError::UnresolvedName { name: "y".to_string() });

    assert_eq!(env.lookup("y"), unresolved);
    assert_eq!(env.assign("y", Value::from(1.0)), unresolved);
    assert_eq!(env.resolve("y"), None);
}

#[test]
fn test_shadowing() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();
    let root = env.root();

    env.declare("x", Value::from(1.0), true, None)?;
    env.declare("y", Value::from(1.0), false, None)?;

    let inner = env.enter_scope();

    assert_ne!(inner, root);
    assert_eq!(env.resolve("x"), Some(root));

    // shadowing an outer constant with a different type is allowed
    env.declare("x", Value::from("inner"), false, None)?;

    assert_eq!(env.resolve("x"), Some(inner));
    assert_eq!(env.lookup("x")?, Value::from("inner"));
    assert_eq!(env.assign("x", Value::from("changed"))?, Value::from("changed"));

    // assignment reaches the owning outer scope
    env.assign("y", Value::from(2.0))?;

    assert_eq!(env.exit_scope(), Some(root));
    assert_eq!(env.current(), root);
    assert_eq!(env.lookup("x")?, Value::from(1.0));
    assert_eq!(env.lookup("y")?, Value::from(2.0));

    assert_eq!(env.exit_scope(), None);
    assert_eq!(env.depth(), 1);

    Ok(())
}

#[test]
fn test_exited_scope_is_dropped() -> Result<(), EnvironmentError> {
    let mut env = Environment::new();

    env.enter_scope();
    env.declare("tmp", Value::from(true), false, None)?;
    env.exit_scope();

    assert!(env.lookup("tmp").is_err());

    // the name can be declared again in a fresh child scope
    env.enter_scope();
    env.declare("tmp", Value::from(false), false, None)?;

    assert_eq!(env.depth(), 2);

    Ok(())
}

#[test]
fn test_prelude() -> Result<(), EnvironmentError> {
    let mut env = Environment::prelude();

    assert_eq!(env.lookup("true")?, TRUE);
    assert_eq!(env.lookup("false")?, Value::from(false));
    assert_eq!(env.lookup("null")?, NULL);
    assert_eq!(env.variable("null").map(|v| v.declared_type), Some(DataType::Nil));

    assert_eq!(
        env.assign("true", Value::from(false)),
        Err(EnvironmentError::ConstantViolation { name: "true".to_string() })
    );

    Ok(())
}
