//! 認識結果モデル
//!
//! 認識パイプラインが返す `RecognitionResult` から、キャンセル理由を表す
//! `CancellationDetails` を導出します。
//!
//! - `RecognitionStatus` はサービスが返すステータス文字列の閉じた集合（未知値は `Unknown`）
//! - `SimpleSpeechPhrase` は結果に埋め込まれたJSONペイロードの型付きビュー
//! - `CancellationDetails` は生成後に変更されない読み取り専用レコード
mod cancellation;
mod error;
mod phrase;
mod recognition;
mod status;

pub use cancellation::{CancellationDetails, CancellationReason};
pub use error::ResultError;
pub use phrase::{SimpleSpeechPhrase, TICKS_PER_SECOND};
pub use recognition::RecognitionResult;
pub use status::RecognitionStatus;
