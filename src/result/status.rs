//! サービスが返す認識ステータス
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::cancellation::CancellationReason;

/// `RecognitionStatus` フィールドの値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionStatus {
    Success,
    EndOfDictation,
    NoMatch,
    InitialSilenceTimeout,
    BabbleTimeout,
    Error,
    /// 既知の集合に含まれない値（受信した文字列をそのまま保持）
    Unknown(String),
}

impl RecognitionStatus {
    /// ステータスからキャンセル理由を決定
    ///
    /// 未知の値は常に `Error` 扱い
    pub fn cancellation_reason(&self) -> CancellationReason {
        match self {
            Self::Success | Self::EndOfDictation | Self::NoMatch => CancellationReason::EndOfStream,
            Self::InitialSilenceTimeout | Self::BabbleTimeout | Self::Error | Self::Unknown(_) => {
                CancellationReason::Error
            }
        }
    }

    /// サービス上の名前（未知値は受信した文字列）
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::EndOfDictation => "EndOfDictation",
            Self::NoMatch => "NoMatch",
            Self::InitialSilenceTimeout => "InitialSilenceTimeout",
            Self::BabbleTimeout => "BabbleTimeout",
            Self::Error => "Error",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl FromStr for RecognitionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s {
            "Success" => Self::Success,
            "EndOfDictation" => Self::EndOfDictation,
            "NoMatch" => Self::NoMatch,
            "InitialSilenceTimeout" => Self::InitialSilenceTimeout,
            "BabbleTimeout" => Self::BabbleTimeout,
            "Error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        };
        Ok(status)
    }
}

impl From<&str> for RecognitionStatus {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for RecognitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文字列以外のJSON値（数値など）はそのテキスト表現で `Unknown` に落とす
impl<'de> Deserialize<'de> for RecognitionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let status = match value {
            serde_json::Value::String(s) => Self::from(s.as_str()),
            other => Self::Unknown(other.to_string()),
        };
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_status_names() {
        assert_eq!(RecognitionStatus::from("Success"), RecognitionStatus::Success);
        assert_eq!(
            RecognitionStatus::from("EndOfDictation"),
            RecognitionStatus::EndOfDictation
        );
        assert_eq!(RecognitionStatus::from("NoMatch"), RecognitionStatus::NoMatch);
        assert_eq!(
            RecognitionStatus::from("InitialSilenceTimeout"),
            RecognitionStatus::InitialSilenceTimeout
        );
        assert_eq!(
            RecognitionStatus::from("BabbleTimeout"),
            RecognitionStatus::BabbleTimeout
        );
        assert_eq!(RecognitionStatus::from("Error"), RecognitionStatus::Error);
    }

    #[test]
    fn unknown_names_are_preserved() {
        let status = RecognitionStatus::from("TooManyRequests");
        assert!(!status.is_known());
        assert_eq!(status.as_str(), "TooManyRequests");
        assert_eq!(status.cancellation_reason(), CancellationReason::Error);
    }

    #[test]
    fn status_names_are_case_sensitive() {
        assert_eq!(
            RecognitionStatus::from("success"),
            RecognitionStatus::Unknown("success".to_string())
        );
    }

    #[test]
    fn end_of_stream_statuses() {
        for status in [
            RecognitionStatus::Success,
            RecognitionStatus::EndOfDictation,
            RecognitionStatus::NoMatch,
        ] {
            assert_eq!(status.cancellation_reason(), CancellationReason::EndOfStream);
        }
    }

    #[test]
    fn error_statuses() {
        for status in [
            RecognitionStatus::InitialSilenceTimeout,
            RecognitionStatus::BabbleTimeout,
            RecognitionStatus::Error,
            RecognitionStatus::Unknown(String::new()),
        ] {
            assert_eq!(status.cancellation_reason(), CancellationReason::Error);
        }
    }

    #[test]
    fn numeric_status_becomes_unknown() {
        let status: RecognitionStatus = serde_json::from_str("3").expect("deserialize");
        assert_eq!(status, RecognitionStatus::Unknown("3".to_string()));
    }
}
