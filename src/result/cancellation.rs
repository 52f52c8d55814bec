//! キャンセル理由の導出
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::ResultError;
use super::recognition::RecognitionResult;
use super::status::RecognitionStatus;

/// 認識がキャンセル扱いとなった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CancellationReason {
    /// 音声ストリームの終端に達した
    EndOfStream,
    /// エラーが発生した（理由不明の場合もこちら）
    Error,
}

impl CancellationReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndOfStream => "EndOfStream",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// キャンセルされた認識結果の詳細
///
/// `from_result` 系でのみ生成され、生成後は変更できない
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationDetails {
    reason: CancellationReason,
    error_details: String,
}

impl CancellationDetails {
    /// 認識結果からキャンセル詳細を生成
    ///
    /// ペイロードが無ければ `Error`。ペイロードが不正な場合はエラーを返す。
    pub fn from_result(result: &RecognitionResult) -> Result<Self, ResultError> {
        let status = result
            .phrase()?
            .and_then(|phrase| phrase.recognition_status);
        Ok(Self::build(result, status.as_ref()))
    }

    /// 不正なペイロードを `Error` として扱う版
    pub fn from_result_lenient(result: &RecognitionResult) -> Self {
        match Self::from_result(result) {
            Ok(details) => details,
            Err(err) => {
                warn!(
                    result_id = %result.result_id(),
                    error = ?err,
                    "malformed payload treated as error"
                );
                Self::new(CancellationReason::Error, result.error_details())
            }
        }
    }

    fn build(result: &RecognitionResult, status: Option<&RecognitionStatus>) -> Self {
        let reason = match status {
            Some(status) => {
                if !status.is_known() {
                    warn!(
                        result_id = %result.result_id(),
                        status = %status,
                        "unknown recognition status"
                    );
                }
                status.cancellation_reason()
            }
            None => CancellationReason::Error,
        };
        debug!(
            result_id = %result.result_id(),
            status = ?status,
            reason = %reason,
            "cancellation reason derived"
        );
        Self::new(reason, result.error_details())
    }

    fn new(reason: CancellationReason, error_details: impl Into<String>) -> Self {
        Self {
            reason,
            error_details: error_details.into(),
        }
    }

    pub fn reason(&self) -> CancellationReason {
        self.reason
    }

    /// エラー詳細（認識結果の値をそのまま保持）
    pub fn error_details(&self) -> &str {
        &self.error_details
    }
}
