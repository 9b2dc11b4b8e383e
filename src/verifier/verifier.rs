use crate::{
    ast::{
        ast::{Expression, Node, Program, Statement},
        statements::{
            BlockStatement, EntrypointFunctionDefinition, ExpressionStatement, FunctionDefinition,
            ReturnStatement, VarStatement,
        },
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbol_table::{SymbolTable, SymbolTableEntry};

/// Return type recorded for a function without an annotation.
pub const VOID_TYPE: &str = "void";

/// Opt-in checks beyond the top-level pass.
///
/// The default runs the top-level pass only: function, block, expression and
/// return statements are not inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Record `func` signatures in the symbol table and reject redefinitions.
    pub function_signatures: bool,
    /// Check statements inside function, entrypoint, block and `if` bodies,
    /// against the same flat symbol table.
    pub nested_blocks: bool,
}

impl VerifierConfig {
    pub fn strict() -> Self {
        VerifierConfig {
            function_signatures: true,
            nested_blocks: true,
        }
    }
}

/// State for one verification run. Build a new one per program.
#[derive(Debug)]
pub struct Verifier {
    config: VerifierConfig,
    symbol_table: SymbolTable,
    errors: Vec<Error>,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Verifier {
            config,
            symbol_table: SymbolTable::new(),
            errors: vec![],
        }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn verify_program(&mut self, program: &Program) {
        for stmt in program.iter() {
            self.verify_statement(stmt);
        }
    }

    pub fn verify_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Var(var) => self.verify_var_statement(var),
            Statement::Entrypoint(entrypoint) => self.verify_entrypoint_definition(entrypoint),
            Statement::Function(function) => self.verify_function_definition(function),
            Statement::Block(block) => self.verify_block_statement(block),
            Statement::Expression(expression) => self.verify_expression_statement(expression),
            Statement::Return(ret) => self.verify_return_statement(ret),
        }
    }

    /// Redefinition and type mismatch are checked independently; both may fire.
    fn verify_var_statement(&mut self, var: &VarStatement) {
        let name = &var.name.value;
        let declared = &var.declared_type.value;

        self.define(
            name,
            SymbolTableEntry::Variable {
                declared_type: declared.clone(),
            },
            var.name.position(),
        );

        let actual = literal_type(&var.value);
        if actual != declared.as_str() {
            self.errors.push(Error::new(
                ErrorImpl::TypeMismatch {
                    name: name.clone(),
                    declared: declared.clone(),
                    actual: actual.to_string(),
                },
                var.value.position(),
            ));
        }
    }

    fn verify_entrypoint_definition(&mut self, entrypoint: &EntrypointFunctionDefinition) {
        let name = &entrypoint.name.value;
        let position = entrypoint.name.position();
        let mut accepted = true;

        if !entrypoint.has_valid_name() {
            self.errors.push(Error::new(
                ErrorImpl::UnknownEntrypoint { name: name.clone() },
                position,
            ));
            accepted = false;
        }

        if self.symbol_table.is_defined(name) {
            self.errors.push(Error::new(
                ErrorImpl::AlreadyDefined { name: name.clone() },
                position,
            ));
            accepted = false;
        }

        if accepted {
            self.define(name, SymbolTableEntry::EntrypointFunction, position);
        }

        if self.config.nested_blocks {
            self.verify_block_statement_body(&entrypoint.body);
        }
    }

    fn verify_function_definition(&mut self, function: &FunctionDefinition) {
        if self.config.function_signatures {
            let return_type = function
                .return_type
                .as_ref()
                .map(|ty| ty.value.clone())
                .unwrap_or_else(|| VOID_TYPE.to_string());

            self.define(
                &function.name.value,
                SymbolTableEntry::Function {
                    return_type,
                    parameter_types: function.parameter_types(),
                },
                function.name.position(),
            );
        }

        if self.config.nested_blocks {
            self.verify_block_statement_body(&function.body);
        }
    }

    fn verify_block_statement(&mut self, block: &BlockStatement) {
        if self.config.nested_blocks {
            self.verify_block_statement_body(block);
        }
    }

    fn verify_expression_statement(&mut self, expression: &ExpressionStatement) {
        if self.config.nested_blocks {
            self.verify_nested_expression(&expression.value);
        }
    }

    fn verify_return_statement(&mut self, ret: &ReturnStatement) {
        if self.config.nested_blocks {
            self.verify_nested_expression(&ret.value);
        }
    }

    fn verify_block_statement_body(&mut self, block: &BlockStatement) {
        for stmt in block.iter() {
            self.verify_statement(stmt);
        }
    }

    /// Only expressions that carry statement bodies are of interest here.
    fn verify_nested_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::If(if_expr) => {
                self.verify_block_statement_body(&if_expr.consequence);
                if let Some(alternative) = &if_expr.alternative {
                    self.verify_block_statement_body(alternative);
                }
            }
            Expression::Function(function) => self.verify_function_definition(function),
            _ => {}
        }
    }

    fn define(&mut self, name: &str, entry: SymbolTableEntry, position: Position) {
        if let Err(error) = self.symbol_table.define(name, entry, position) {
            self.errors.push(error);
        }
    }
}

/// The type a value has on its face. Only literals are typed; anything else
/// is `unknown`.
pub fn literal_type(expression: &Expression) -> &'static str {
    match expression {
        Expression::Integer(_) => "int",
        Expression::Boolean(_) => "bool",
        Expression::String(_) => "string",
        _ => "unknown",
    }
}

/// Verifies the top-level statements of `program`.
pub fn verify(program: &Program) -> Vec<Error> {
    verify_with(program, VerifierConfig::default())
}

pub fn verify_with(program: &Program, config: VerifierConfig) -> Vec<Error> {
    let mut verifier = Verifier::new(config);
    verifier.verify_program(program);
    verifier.into_errors()
}
