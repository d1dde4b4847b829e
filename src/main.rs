//! Lipidscope: lipid panel calculator and interpreter.
//!
//! Main entry point. With no arguments the terminal UI starts; with three
//! lab values on the command line a one-shot report is printed instead:
//!
//! ```bash
//! lipidscope                   # interactive form
//! lipidscope 200 50 150        # text report on stdout
//! lipidscope 200 50 150 --json # machine-readable report
//! ```

#![allow(non_snake_case)]

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use Lipidscope::adapters::{JsonRenderer, TextRenderer};
use Lipidscope::application::ReportService;
use Lipidscope::tui::App;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        run_tui()
    } else {
        run_one_shot(&args)
    }
}

fn run_tui() -> Result<()> {
    // Initialize logging.
    //
    // IMPORTANT: writing logs to the terminal will corrupt the TUI (alternate
    // screen). Default behavior:
    // - interactive TTY: log to a file
    // - non-interactive: log to stdout
    let log_mode =
        std::env::var("LIPIDSCOPE_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let interactive = std::io::stdout().is_terminal();
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        // auto
        _ => interactive,
    };

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("LIPIDSCOPE_LOG_FILE")
            .unwrap_or_else(|_| "lipidscope.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            // Best-effort: don't fail startup just because the directory is missing.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting Lipidscope...");

    let mut app = App::new();
    app.run()?;

    tracing::info!("Lipidscope shutdown complete.");
    Ok(())
}

fn run_one_shot(args: &[String]) -> Result<()> {
    // One-shot mode shares stdout with the report, so logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut values = Vec::with_capacity(3);
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("Usage: lipidscope [<total-cholesterol> <hdl> <triglycerides> [--json]]");
                eprintln!("Values in mg/dL. Without arguments the terminal UI starts.");
                return Ok(());
            }
            other => {
                // Unparseable values become NaN and fail domain validation
                // with a field-specific error, same as the form.
                values.push(other.parse::<f64>().unwrap_or(f64::NAN));
            }
        }
    }

    if values.len() != 3 {
        eprintln!("Usage: lipidscope [<total-cholesterol> <hdl> <triglycerides> [--json]]");
        std::process::exit(2);
    }

    let stdout = std::io::stdout().lock();
    if json {
        let mut service = ReportService::new(JsonRenderer::new(stdout));
        service.report(values[0], values[1], values[2])?;
    } else {
        let mut service = ReportService::new(TextRenderer::new(stdout));
        service.report(values[0], values[1], values[2])?;
    }

    Ok(())
}
