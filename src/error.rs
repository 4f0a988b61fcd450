use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("malformed record `{name}`: {reason}")]
    MalformedRecord { name: String, reason: String },

    #[error("unknown disaster category: `{0}`")]
    UnknownCategory(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl TimelineError {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
