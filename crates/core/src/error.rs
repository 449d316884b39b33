/// Errors produced by the pure transformation layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid mode '{0}'. Mode must be pokemon or ability or move!")]
    InvalidMode(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}
