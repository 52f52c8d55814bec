use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use speech_result_model::cli::{self, CliError};
use speech_result_model::config::ConfigSet;

fn main() {
    init_tracing();

    let config = match ConfigSet::load_from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = ?err, "failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        root = ?config.root(),
        policy = ?config.result_model.malformed_payload,
        "configuration loaded"
    );

    // 引数なし or "-" は標準入力
    let input = std::env::args().nth(1).filter(|arg| arg != "-");
    if let Err(err) = run(input.as_deref(), &config) {
        error!(error = ?err, "processing failed");
        std::process::exit(1);
    }
}

fn run(input: Option<&str>, config: &ConfigSet) -> Result<usize, CliError> {
    let stdout = io::stdout().lock();
    match input {
        Some(path) => {
            info!(path = %path, "reading recognition results");
            let reader = cli::open_input(path)?;
            cli::process_lines(reader, stdout, config)
        }
        None => cli::process_lines(io::stdin().lock(), stdout, config),
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}
