// Error type for the trail engine and the demo window.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String), // Bad engine/app parameters, rejected at construction

    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed

    #[error("Snapshot error ({path}): {reason}")]
    Snapshot { path: PathBuf, reason: String }, // Writing the trail PNG failed

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
