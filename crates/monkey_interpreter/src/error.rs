use thiserror::Error;

use monkey_parser::ast::{InfixOperator, PrefixOperator};

/// Faults raised while evaluating. Carried through evaluation as `Object::Error`.
///
/// Operand types are recorded by their type name (e.g. `INTEGER`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Prefix operation on an unsupported type (e.g. `-true`)
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        right: &'static str,
    },
    /// Infix operation on two values of the same type that don't support it (e.g. `true + false`)
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },
    /// Infix operation on values of different types (e.g. `5 + true`)
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    /// Call syntax used on something that can't be called (e.g. `5(1)`)
    #[error("not a function: {0}")]
    NotAFunction(&'static str),
    /// A call's argument count does not match what the function takes
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },
    /// A builtin was handed an argument of a type it can't work with
    #[error("argument to '{builtin}' not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow: {left} {operator} {right}")]
    IntegerOverflow {
        left: i64,
        operator: InfixOperator,
        right: i64,
    },
    #[error("integer overflow: -{0}")]
    NegationOverflow(i64),
}
