/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, the Statement and Expression sum types, the Node trait
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - types: The type annotation node
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
