//! Logging setup for hosts and the CLI.
//!
//! Records from the `fingerspell*` crates are shown at the requested level.
//! Everything else (dependencies, the host's own crates) is capped at `warn`
//! so `-vv` traces the per-frame pipeline without drowning it.
//!
//! [`init_with_level`] installs a small stderr logger printing
//! `[elapsed LEVEL target] message`. With the `tracing` feature,
//! [`init_tracing`] installs a `tracing-subscriber` with the same default
//! filter, overridable through `RUST_LOG`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Targets logged at the requested level.
const OWN_TARGETS: [&str; 3] = ["fingerspell", "fingerspell_core", "fingerspell_letters"];

/// Level for a `-v` count: none is `info`, one `debug`, more `trace`.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn is_own_target(target: &str) -> bool {
    let krate = target.split("::").next().unwrap_or(target);
    OWN_TARGETS.contains(&krate)
}

/// Effective level for records from `target` when `level` was requested.
fn level_for(target: &str, level: LevelFilter) -> LevelFilter {
    if is_own_target(target) {
        level
    } else {
        level.min(LevelFilter::Warn)
    }
}

/// `EnvFilter` directive equivalent to [`level_for`].
pub fn default_directive(level: LevelFilter) -> String {
    let own = level.as_str().to_ascii_lowercase();
    let rest = level.min(LevelFilter::Warn).as_str().to_ascii_lowercase();
    let mut directive = rest;
    for target in OWN_TARGETS {
        directive.push_str(&format!(",{target}={own}"));
    }
    directive
}

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= level_for(metadata.target(), self.level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:8.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger.
///
/// Later calls are no-ops once a logger has been installed.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter is
/// [`default_directive`]`(level)`. `json` switches to flattened JSON events,
/// one per line, with span close timings.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}
