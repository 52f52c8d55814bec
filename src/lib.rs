pub mod cli;
pub mod config;
pub mod result;

pub use config::ConfigSet;
pub use result::{
    CancellationDetails, CancellationReason, RecognitionResult, RecognitionStatus, ResultError,
};
