use miette::Diagnostic;
use thiserror::Error;
use utils::integer::IntegerError;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument: {0}")]
    #[diagnostic(code(infra_collections::invalid_argument))]
    InvalidArgument(#[from] IntegerError),
}
