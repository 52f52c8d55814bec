use serde::Deserialize;

use super::error::ResultError;
use super::phrase::SimpleSpeechPhrase;

/// 認識パイプラインが1回の発話に対して返す結果
///
/// JSON行から読み込む場合のキーは camelCase（`resultId`, `errorDetails` 等）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecognitionResult {
    result_id: String,
    text: String,
    offset: u64,
    duration: u64,
    json: Option<String>,
    error_details: String,
}

impl RecognitionResult {
    pub fn new(result_id: impl Into<String>) -> Self {
        Self {
            result_id: result_id.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// オフセットと長さ（100ナノ秒単位）
    pub fn with_timing(mut self, offset: u64, duration: u64) -> Self {
        self.offset = offset;
        self.duration = duration;
        self
    }

    pub fn with_json(mut self, json: impl Into<String>) -> Self {
        self.json = Some(json.into());
        self
    }

    pub fn with_error_details(mut self, error_details: impl Into<String>) -> Self {
        self.error_details = error_details.into();
        self
    }

    pub fn result_id(&self) -> &str {
        &self.result_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// シリアライズされたペイロード（空文字列は未設定と同じ扱い）
    pub fn json(&self) -> Option<&str> {
        self.json.as_deref().filter(|json| !json.is_empty())
    }

    pub fn error_details(&self) -> &str {
        &self.error_details
    }

    /// ペイロードを型付きフレーズとして解析
    pub fn phrase(&self) -> Result<Option<SimpleSpeechPhrase>, ResultError> {
        self.json().map(SimpleSpeechPhrase::parse).transpose()
    }
}
