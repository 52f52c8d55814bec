//! 認識結果に埋め込まれるJSONペイロード
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::error::ResultError;
use super::status::RecognitionStatus;

/// 1秒あたりのティック数（オフセット/長さは100ナノ秒単位）
pub const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// シンプル形式のフレーズ結果
///
/// すべてのフィールドは省略可能。未知のフィールドは無視し、
/// 型の合わない値は `None` として扱う（ステータス以外で失敗させない）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleSpeechPhrase {
    #[serde(default, deserialize_with = "lenient")]
    pub recognition_status: Option<RecognitionStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<u64>,
}

impl SimpleSpeechPhrase {
    /// JSON文字列を解析
    ///
    /// - JSONとして不正、または `null` の場合はエラー
    /// - オブジェクト以外（配列・数値・文字列・真偽値）はフィールド無しとして扱う
    pub fn parse(json: &str) -> Result<Self, ResultError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value {
            serde_json::Value::Null => Err(ResultError::MalformedPayload {
                source: <serde_json::Error as serde::de::Error>::custom(
                    "payload is null",
                ),
            }),
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    pub fn offset_seconds(&self) -> Option<f64> {
        self.offset.map(|ticks| ticks as f64 / TICKS_PER_SECOND)
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration.map(|ticks| ticks as f64 / TICKS_PER_SECOND)
    }
}

/// 値の型が合わなければ `None`（`null` も `None`）
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(T::deserialize(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_phrase() {
        let phrase = SimpleSpeechPhrase::parse(
            r#"{"RecognitionStatus":"Success","DisplayText":"Hello.","Offset":5000000,"Duration":15000000}"#,
        )
        .expect("parse phrase");
        assert_eq!(phrase.recognition_status, Some(RecognitionStatus::Success));
        assert_eq!(phrase.display_text.as_deref(), Some("Hello."));
        assert_eq!(phrase.offset_seconds(), Some(0.5));
        assert_eq!(phrase.duration_seconds(), Some(1.5));
    }

    #[test]
    fn ignores_extra_fields() {
        let phrase = SimpleSpeechPhrase::parse(r#"{"RecognitionStatus":"NoMatch","NBest":[]}"#)
            .expect("parse phrase");
        assert_eq!(phrase.recognition_status, Some(RecognitionStatus::NoMatch));
        assert!(phrase.display_text.is_none());
    }

    #[test]
    fn non_object_json_has_no_fields() {
        for json in ["[]", "[\"Success\"]", "\"Success\"", "42", "true"] {
            let phrase = SimpleSpeechPhrase::parse(json).expect("non-object payload");
            assert_eq!(phrase, SimpleSpeechPhrase::default(), "{json}");
        }
    }

    #[test]
    fn rejects_null_payload() {
        let err = SimpleSpeechPhrase::parse("null").expect_err("null payload");
        assert!(matches!(err, ResultError::MalformedPayload { .. }));
    }

    #[test]
    fn mistyped_fields_fall_back_to_none() {
        let phrase = SimpleSpeechPhrase::parse(
            r#"{"RecognitionStatus":"Success","Offset":-1,"Duration":1.5,"DisplayText":42}"#,
        )
        .expect("parse phrase");
        assert_eq!(phrase.recognition_status, Some(RecognitionStatus::Success));
        assert_eq!(phrase.offset, None);
        assert_eq!(phrase.duration, None);
        assert_eq!(phrase.display_text, None);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(SimpleSpeechPhrase::parse("{\"RecognitionStatus\":").is_err());
    }
}
