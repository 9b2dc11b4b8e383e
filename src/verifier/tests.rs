//! Unit tests for the verifier module.

use crate::{
    errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse, Position,
};

use super::{
    symbol_table::{SymbolTable, SymbolTableEntry},
    verifier::{literal_type, verify, verify_with, Verifier, VerifierConfig},
};

fn verify_source(source: &str, config: VerifierConfig) -> Vec<String> {
    let (parser, program) = parse(tokenize(source).unwrap());
    assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());

    verify_with(&program, config)
        .iter()
        .map(Error::to_string)
        .collect()
}

fn verify_default(source: &str) -> Vec<String> {
    verify_source(source, VerifierConfig::default())
}

#[test]
fn test_valid_program() {
    let errors = verify_default("var int x = 5\nvar bool b = false\nvar string s = \"s\"\nefunc main() {\n}\n");

    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_variable_redefinition() {
    assert_eq!(
        verify_default("var int x = 5\nvar int x = 6\n"),
        vec!["already defined x"]
    );
}

#[test]
fn test_type_mismatch() {
    assert_eq!(
        verify_default("var int x = true\n"),
        vec!["type mismatch: x declared as int, assigned bool"]
    );
}

#[test]
fn test_redefinition_and_mismatch_both_reported() {
    assert_eq!(
        verify_default("var int x = 5\nvar int x = \"six\"\n"),
        vec![
            "already defined x",
            "type mismatch: x declared as int, assigned string",
        ]
    );
}

#[test]
fn test_non_literal_value_is_unknown() {
    assert_eq!(
        verify_default("var int x = 1 + 2\n"),
        vec!["type mismatch: x declared as int, assigned unknown"]
    );
}

#[test]
fn test_unknown_entrypoint_name() {
    assert_eq!(
        verify_default("efunc start() {\n}\n"),
        vec!["unknown entrypoint name start"]
    );
}

#[test]
fn test_entrypoint_redefinition() {
    assert_eq!(
        verify_default("efunc main() {\n}\nefunc main() {\n}\n"),
        vec!["already defined main"]
    );
}

#[test]
fn test_entrypoint_clashes_with_variable() {
    assert_eq!(
        verify_default("var int main = 1\nefunc main() {\n}\n"),
        vec!["already defined main"]
    );
}

#[test]
fn test_diagnostics_follow_source_order() {
    let (_, program) = parse(tokenize("var int a = 1\nvar int a = 2\nefunc nope() {\n}\n").unwrap());
    let errors = verify(&program);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "AlreadyDefined");
    assert_eq!(*errors[0].get_position(), Position::new(2, 9));
    assert_eq!(errors[1].get_error_name(), "UnknownEntrypoint");
    assert_eq!(*errors[1].get_position(), Position::new(3, 7));
}

#[test]
fn test_default_skips_functions_and_bodies() {
    let source = "func f() {\n}\nfunc f() {\n}\nefunc main() {\n  var int x = true\n}\n";

    assert!(verify_default(source).is_empty());
}

#[test]
fn test_function_signatures() {
    let config = VerifierConfig {
        function_signatures: true,
        nested_blocks: false,
    };

    assert_eq!(
        verify_source("func f(int a) int {\n}\nfunc f() {\n}\n", config),
        vec!["already defined f"]
    );
}

#[test]
fn test_nested_blocks() {
    let config = VerifierConfig {
        function_signatures: false,
        nested_blocks: true,
    };
    let source = "var int x = 1\nefunc main() {\n  var int x = 2\n  if (x) {\n    var bool y = 3\n  }\n}\n";

    assert_eq!(
        verify_source(source, config),
        vec![
            "already defined x",
            "type mismatch: y declared as bool, assigned int",
        ]
    );
}

#[test]
fn test_strict_records_signatures() {
    let (_, program) = parse(tokenize("func add(int a, int b) int {\n}\nefunc main() {\n}\n").unwrap());
    let mut verifier = Verifier::new(VerifierConfig::strict());
    verifier.verify_program(&program);

    assert!(verifier.errors().is_empty());
    assert_eq!(verifier.symbol_table().len(), 2);
    assert_eq!(
        verifier.symbol_table().get("add"),
        Some(&SymbolTableEntry::Function {
            return_type: "int".to_string(),
            parameter_types: vec!["int".to_string(), "int".to_string()],
        })
    );
    assert_eq!(
        verifier.symbol_table().get("main"),
        Some(&SymbolTableEntry::EntrypointFunction)
    );
}

#[test]
fn test_symbol_table_defines_once() {
    let mut table = SymbolTable::new();
    let int = SymbolTableEntry::Variable {
        declared_type: "int".to_string(),
    };

    assert!(table.is_empty());
    assert!(table.define("x", int.clone(), Position::start()).is_ok());

    let error = table
        .define("x", SymbolTableEntry::EntrypointFunction, Position::new(2, 1))
        .unwrap_err();
    assert_eq!(error.to_string(), "already defined x");
    assert_eq!(table.get("x"), Some(&int));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_literal_types() {
    let (_, program) = parse(tokenize("1\ntrue\n\"s\"\nx\n").unwrap());
    let types: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            crate::ast::ast::Statement::Expression(expr) => literal_type(&expr.value),
            _ => panic!("expected expression statements"),
        })
        .collect();

    assert_eq!(types, vec!["int", "bool", "string", "unknown"]);
}

#[test]
fn test_entry_display() {
    let function = SymbolTableEntry::Function {
        return_type: "void".to_string(),
        parameter_types: vec!["int".to_string(), "bool".to_string()],
    };

    assert_eq!(function.to_string(), "{void, int, bool}");
    assert_eq!(SymbolTableEntry::EntrypointFunction.to_string(), "EPF");
}
