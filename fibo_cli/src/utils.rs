use std::backtrace::BacktraceStatus;

use console::style;

/// Set up the logger: compact format without timestamps, writing to stderr
/// so stdout carries nothing but the result line. `RUST_LOG` overrides the
/// default info filter.
pub fn try_setup_logger() {
    use tracing_subscriber::{
        EnvFilter, Registry, filter::LevelFilter, fmt, layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let default_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .compact()
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .with_writer(std::io::stderr);

    Registry::default()
        .with(fmt_layer)
        .with(default_filter)
        .try_init()
        .ok();
}

pub fn print_error(e: anyhow::Error) {
    for e in e.chain().rev() {
        eprintln!(
            "{}{} {}",
            style("error").red().bold(),
            style(":").white().bold(),
            e
        );
    }
    let bt = e.backtrace();
    if bt.status() == BacktraceStatus::Captured {
        eprintln!("error backtrace:");
        eprintln!("{bt}");
    }
}
