use std::io::{self, BufRead, Write};
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;

use lingo_core::config::Config;
use lingo_core::protocol;

fn main() -> ExitCode {
    // stdout carries protocol responses; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let resolver = match Config::load_from_env()
        .map(Config::apply_env)
        .and_then(|cfg| lingo_core::build_resolver(&cfg))
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("lingo-core ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input line");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&resolver, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                tracing::error!("panic while handling request");
                protocol::err(serde_json::Value::Null, "internal", "internal core error")
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    ExitCode::SUCCESS
}
