use miette::Diagnostic;
use thiserror::Error;

use lapis_ast::Name;

/// The result type specialized to erasure errors.
pub type ErasureResult<T = ()> = Result<T, Box<ErasureError>>;

/// Errors emitted by the erasure pass.
///
/// There is no recoverable tier: every detected inconsistency terminates
/// the erasure of the current declaration and is surfaced to the driver as
/// a code-generation failure.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ErasureError {
    #[error("Unexpected occurrence of '{eliminator}': the minor premise for constructor {ctor} is expected to be a lambda-expression")]
    #[diagnostic(code("E-001"))]
    MinorPremiseNotLambda { eliminator: String, ctor: String },
    #[error("Code generation failed, unsupported occurrence of '{eliminator}': constructors expected")]
    #[diagnostic(code("E-002"))]
    ConstructorsExpected { eliminator: String },
    #[error("Wrong number of arguments to eliminator {name}: got {actual}, expected at least {expected}")]
    #[diagnostic(code("E-003"))]
    EliminatorArity { name: String, expected: usize, actual: usize },
    #[error("The inductive family {name} is not declared in the environment")]
    #[diagnostic(code("E-004"))]
    UnknownInductive { name: String },
    #[error("The constructor {name} is not declared in the environment")]
    #[diagnostic(code("E-005"))]
    UnknownConstructor { name: String },
    #[error("Unexpected application of the recursor {name}: recursive recursors must be eliminated before erasure")]
    #[diagnostic(code("E-006"), help("This indicates a broken elaboration contract, not a user error."))]
    RecursiveRecursor { name: String },
    #[error("The name {name} is reserved by the erasure pass")]
    #[diagnostic(code("E-007"))]
    ReservedName { name: String },
    #[error("The declaration of {name} is ill-formed: {message}")]
    #[diagnostic(code("E-008"))]
    IllFormedSignature { name: String, message: String },
    #[error("The erasure pass was interrupted")]
    #[diagnostic(code("E-009"))]
    Interrupted,
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("E-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated.
    Impossible { message: String },
}

impl ErasureError {
    pub fn unknown_inductive(name: &Name) -> Box<Self> {
        Self::UnknownInductive { name: name.to_string() }.into()
    }

    pub fn unknown_constructor(name: &Name) -> Box<Self> {
        Self::UnknownConstructor { name: name.to_string() }.into()
    }

    pub fn reserved_name(name: &Name) -> Box<Self> {
        Self::ReservedName { name: name.to_string() }.into()
    }

    pub fn impossible(message: impl Into<String>) -> Box<Self> {
        Self::Impossible { message: message.into() }.into()
    }
}
