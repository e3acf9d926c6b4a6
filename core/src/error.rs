use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Simulation '{id}' not found")]
    SimulationNotFound { id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
