//! 結果モデルの動作設定
use serde::Deserialize;

use crate::result::{CancellationDetails, RecognitionResult, ResultError};

#[derive(Debug, Clone, Deserialize)]
pub struct ResultModelConfig {
    pub malformed_payload: MalformedPayloadPolicy,
}

impl ResultModelConfig {
    /// ポリシーに従ってキャンセル詳細を導出
    pub fn cancellation_details(
        &self,
        result: &RecognitionResult,
    ) -> Result<CancellationDetails, ResultError> {
        match self.malformed_payload {
            MalformedPayloadPolicy::Propagate => CancellationDetails::from_result(result),
            MalformedPayloadPolicy::TreatAsError => {
                Ok(CancellationDetails::from_result_lenient(result))
            }
        }
    }
}

/// 不正なペイロードを受け取ったときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPayloadPolicy {
    /// 呼び出し元へエラーを返す
    #[default]
    Propagate,
    /// 理由 `Error` として扱う
    TreatAsError,
}
