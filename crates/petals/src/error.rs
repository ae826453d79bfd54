use crate::element::ClassName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("No wheel element matches `.{0}`")]
    MissingWheel(ClassName),
}
