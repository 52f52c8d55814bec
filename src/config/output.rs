use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 出力JSONを整形するか（falseなら1行1オブジェクト）
    #[serde(default)]
    pub pretty: bool,
}
