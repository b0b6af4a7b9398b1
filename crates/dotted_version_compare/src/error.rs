use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A single dot separated component held more numeric runs than the walk allows.
    #[error("invalid version format: component {component:?} has more than {max} numeric subcomponents")]
    InvalidVersionFormat {
        component: String,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
