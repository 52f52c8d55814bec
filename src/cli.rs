//! JSON行形式の認識結果を読み込み、キャンセル詳細をJSON行で書き出す
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ConfigSet;
use crate::result::{RecognitionResult, ResultError};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open input file: {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid recognition result")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Result {
        line: usize,
        #[source]
        source: ResultError,
    },
    #[error("failed to encode cancellation details: {0}")]
    Encode(#[source] serde_json::Error),
}

/// 入力ファイルを開く（失敗時はパスをエラーに含める）
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, CliError> {
    let path = path.as_ref();
    File::open(path).map(BufReader::new).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// 入力の各行を処理し、書き出した件数を返す（空行は読み飛ばす）
pub fn process_lines<R, W>(reader: R, mut writer: W, config: &ConfigSet) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut written = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result: RecognitionResult = serde_json::from_str(&line)
            .map_err(|source| CliError::Decode { line: line_no, source })?;
        let details = config
            .result_model
            .cancellation_details(&result)
            .map_err(|source| CliError::Result { line: line_no, source })?;
        debug!(line = line_no, reason = %details.reason(), "line processed");

        if config.output.pretty {
            serde_json::to_writer_pretty(&mut writer, &details).map_err(CliError::Encode)?;
        } else {
            serde_json::to_writer(&mut writer, &details).map_err(CliError::Encode)?;
        }
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    info!(count = written, "cancellation details written");
    Ok(written)
}
