use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultError {
    #[error("malformed recognition payload")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ResultError {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedPayload { source }
    }
}
