#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Unknown irrigation zone: {0}")]
    ZoneNotFound(String),

    #[error("Invalid schedule time: {0}")]
    InvalidScheduleTime(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to format export date: {0}")]
    Format(#[from] time::error::Format),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}
