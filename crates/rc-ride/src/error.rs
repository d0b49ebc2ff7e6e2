use rc_core::RcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RideError {
    #[error("ride configuration error: {0}")]
    Config(#[from] RcError),

    #[error("failed to spawn {actor} thread: {source}")]
    Spawn {
        actor:  String,
        #[source]
        source: std::io::Error,
    },

    #[error("{actor} thread panicked")]
    ActorPanicked { actor: String },
}

pub type RideResult<T> = Result<T, RideError>;

/// The ride closed before the passenger was called forward.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("the ride is closed")]
pub struct RideClosed;
