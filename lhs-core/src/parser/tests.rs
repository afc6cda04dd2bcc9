use crate::{
    environment::prelude::DataType,
    lexer::prelude::{LexicalErrorType, Lexer, Token},
    parser::prelude::{
        produce_ast, produce_ast_from_stream, BinaryOperator, Expression, Literal, ParseError,
        ParseErrorType, Parser, Statement
    }
};

fn parse_error_type(input: &str) -> ParseErrorType {
    match produce_ast(input) {
        Err(err) => err.error,
        Ok(program) => panic!("Expected Err for {input:?} but got Ok({program})")
    }
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let cases = vec![
        ("1 + 2 * 3;", "(1 + (2 * 3));"),
        ("(1 + 2) * 3;", "((1 + 2) * 3);"),
        ("10 - 2 - 3;", "((10 - 2) - 3);"),
        ("8 / 4 / 2;", "((8 / 4) / 2);"),
        ("2 * 7 % 4;", "(2 * (7 % 4));"),
        ("9 % 5 % 3 + 1;", "(((9 % 5) % 3) + 1);"),
        ("a - b * c + d / e;", "((a - (b * c)) + (d / e));"),
        ("((((1))));", "1;"),
    ];

    for (input, expected) in cases {
        let program = produce_ast(input)?;

        assert_eq!(program.to_string(), expected, "input: {input}");
    }

    Ok(())
}

#[test]
fn test_declarations() -> Result<(), ParseError> {
    let program = produce_ast(r#"
        let a;
        let b = 5 + 1;
        const c = "hello";
        let d: number = 4;
        const e: string = "s";
    "#)?;

    assert_eq!(
        program.to_string(),
        r#"let a; let b = (5 + 1); const c = "hello"; let d: number = 4; const e: string = "s";"#
    );

    match &program.body[3] {
        Statement::VariableDeclaration(declaration) => {
            assert!(!declaration.is_constant);
            assert_eq!(declaration.identifier.value, "d");
            assert_eq!(declaration.declared_type, Some(DataType::Number));
            assert!(matches!(
                declaration.value,
                Some(Expression::Literal(Literal::Numeric { value, .. })) if value == 4.0
            ));
        },
        statement => panic!("Expected a declaration, got {statement}")
    }

    match &program.body[2] {
        Statement::VariableDeclaration(declaration) => {
            assert!(declaration.is_constant);
            assert_eq!(declaration.declared_type, None);
        },
        statement => panic!("Expected a declaration, got {statement}")
    }

    Ok(())
}

#[test]
fn test_assignments() -> Result<(), ParseError> {
    let program = produce_ast("x = 1; x += 3; x -= y; x *= 2 + 1; x /= 2; x %= 5;")?;

    assert_eq!(
        program.to_string(),
        "x = 1; x = (x + 3); x = (x - y); x = (x * (2 + 1)); x = (x / 2); x = (x % 5);"
    );
    assert_eq!(program.body.len(), 6);

    Ok(())
}

#[test]
fn test_compound_assignment_desugars() -> Result<(), ParseError> {
    let compound = produce_ast("x += 3;")?;
    let manual = produce_ast("x = x + 3;")?;

    assert_eq!(compound.to_string(), manual.to_string());

    match &compound.body[0] {
        Statement::Expression(Expression::Assignment(assignment)) => {
            assert_eq!(assignment.identifier.value, "x");

            match assignment.value.as_ref() {
                Expression::Binary(binary) => {
                    assert_eq!(binary.operator, BinaryOperator::Add);
                    assert!(matches!(binary.left.as_ref(), Expression::Identifier(ident) if ident.value == "x"));
                },
                value => panic!("Expected a binary expression, got {value}")
            }
        },
        statement => panic!("Expected an assignment, got {statement}")
    }

    Ok(())
}

#[test]
fn test_assignment_inside_expression() -> Result<(), ParseError> {
    let program = produce_ast("1 + x = 2; x;")?;

    assert_eq!(program.to_string(), "(1 + x = 2); x;");
    assert_eq!(program.body.len(), 2);

    Ok(())
}

#[test]
fn test_empty_statements() -> Result<(), ParseError> {
    let program = produce_ast(";; let a = 1;;")?;

    assert_eq!(program.body.len(), 4);
    assert!(matches!(program.body[0], Statement::Expression(Expression::Null { .. })));
    assert!(matches!(program.body[3], Statement::Expression(Expression::Null { .. })));

    assert!(produce_ast("")?.body.is_empty());
    assert!(produce_ast("  \n\t ")?.body.is_empty());

    Ok(())
}

#[test]
fn test_expression_without_end_line_at_eof() -> Result<(), ParseError> {
    let program = produce_ast("1 + 2")?;

    assert_eq!(program.to_string(), "(1 + 2);");

    Ok(())
}

#[test]
fn test_errors() {
    let fails = vec![
        ("let = 5;", ParseErrorType::ExpectedIdent),
        ("const;", ParseErrorType::ExpectedIdent),
        ("let x 5;", ParseErrorType::MissingAssign),
        ("const c;", ParseErrorType::ConstWithoutValue),
        ("let x = 5", ParseErrorType::MissingEndLine),
        ("let x = 5 6;", ParseErrorType::MissingEndLine),
        ("x = 1", ParseErrorType::MissingEndLine),
        ("x += 1 let y;", ParseErrorType::MissingEndLine),
        ("1 2;", ParseErrorType::MissingEndLine),
        ("(1 + 2;", ParseErrorType::MissingClosingParen),
        ("(1 + 2", ParseErrorType::MissingClosingParen),
        ("1 +", ParseErrorType::UnexpectedEof),
        ("let x: integer = 1;", ParseErrorType::UnknownType { name: "integer".to_string() }),
        ("func;", ParseErrorType::ReservedKeyword { token: Token::Func }),
    ];

    for (idx, (input, fail)) in fails.into_iter().enumerate() {
        let error = parse_error_type(input);

        assert_eq!(
            fail, error,
            "Error does not match expected error ({:?}, {:?}) at {}",
            fail, error, idx
        );
    }
}

#[test]
fn test_unexpected_token() {
    match parse_error_type("1 + * 2;") {
        ParseErrorType::UnexpectedToken { token, .. } => assert_eq!(token, Token::Asterisk),
        error => panic!("Expected UnexpectedToken, got {error:?}")
    }

    match parse_error_type(") ;") {
        ParseErrorType::UnexpectedToken { token, .. } => assert_eq!(token, Token::RParen),
        error => panic!("Expected UnexpectedToken, got {error:?}")
    }

    assert!(matches!(
        parse_error_type("x == 1;"),
        ParseErrorType::MissingEndLine
    ));
}

#[test]
fn test_error_span() {
    let err = produce_ast("let x = 5 6;").unwrap_err();

    assert_eq!((err.span.start, err.span.end), (10, 11));
}

#[test]
fn test_lex_error_takes_precedence() {
    let cases = vec![
        ("1 + 2; $", LexicalErrorType::UnrecognizedToken { tok: '$' }),
        ("let = 1; let s = \"open", LexicalErrorType::UnterminatedString),
    ];

    for (input, expected) in cases {
        match parse_error_type(input) {
            ParseErrorType::LexError { error } => assert_eq!(error.error, expected),
            error => panic!("Expected LexError for {input:?}, got {error:?}")
        }
    }
}

#[test]
fn test_program_from_parser() -> Result<(), ParseError> {
    let input = "let a = 1; a = a * 2;";

    let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    let program = parser.parse()?;

    assert_eq!(program.to_string(), "let a = 1; a = (a * 2);");
    assert_eq!(program.location.end, input.len() as u32);

    let streamed = produce_ast_from_stream(input.chars())?;

    assert_eq!(streamed, program);

    Ok(())
}
