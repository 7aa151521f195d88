use std::fmt;

/// Errors returned by rendering setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A destination rectangle component is not a finite number.
    NonFiniteRect(&'static str),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteRect(component) => {
                write!(f, "destination rectangle {component} must be finite")
            }
        }
    }
}

impl std::error::Error for RenderError {}
