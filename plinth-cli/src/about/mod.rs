//! # About Report
//!
//! Assembles and renders the diagnostics snapshot behind `plinth about`:
//! the application release and its support windows, the configured
//! environment and its directories, and the host runtime. Host probes that
//! come up empty degrade to `n/a` display values; the only hard failures
//! are malformed support-date constants and the `--is-maintained` gate.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, NaiveDateTime};
use owo_colors::OwoColorize;
use plinth_core::config::{ConfigDirs, dir_size, format_bytes};
use plinth_core::output::{display_or_na, print_error};
use plinth_core::release::{Release, SupportDate};
use plinth_core::runtime::RuntimeSnapshot;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::consts::{END_OF_LIFE, END_OF_MAINTENANCE, LONG_TERM_SUPPORT, PRODUCT_NAME};

/// The full diagnostics snapshot, shared by the text and json renderers
#[derive(Serialize)]
pub struct AboutData {
  pub application: ApplicationInfo,
  pub environment: EnvironmentInfo,
  pub runtime: RuntimeInfo,
}

/// Release metadata and support-window status
#[derive(Serialize)]
pub struct ApplicationInfo {
  pub name: String,
  pub version: String,
  pub long_term_support: bool,
  pub end_of_maintenance: SupportWindowInfo,
  pub end_of_life: SupportWindowInfo,
}

/// One support window, evaluated against the current wall clock
#[derive(Serialize)]
pub struct SupportWindowInfo {
  /// The window's closing month, as `MM/YYYY`
  pub date: String,
  pub expired: bool,
  /// Whole days until the deadline; negative once it has passed
  pub days_remaining: i64,
}

/// Environment configuration and directory usage
#[derive(Serialize)]
pub struct EnvironmentInfo {
  pub environment: String,
  pub debug: bool,
  pub config_dir: Option<DirInfo>,
  pub data_dir: Option<DirInfo>,
  pub cache_dir: Option<DirInfo>,
  pub logs_dir: Option<DirInfo>,
}

/// A reported directory and its recursive on-disk size, when it exists
#[derive(Serialize)]
pub struct DirInfo {
  pub path: String,
  pub size_bytes: Option<u64>,
}

/// Host and binary build metadata
#[derive(Serialize)]
pub struct RuntimeInfo {
  pub commit: Option<String>,
  pub built: Option<String>,
  pub target: Option<String>,
  pub os: String,
  pub arch: String,
  pub debug_assertions: bool,
  pub locale: Option<String>,
  pub timezone: Option<String>,
}

/// Run the about command
///
/// Prints the diagnostics snapshot in the requested format, then applies
/// the `--is-maintained` gate against the end-of-maintenance window.
pub fn run_about(is_maintained: bool, format: &str) -> Result<()> {
  let now = Local::now().naive_local();
  let release = current_release()?;
  let data = collect(&release, now);

  match format {
    "json" => {
      let json = serde_json::to_string_pretty(&data).context("Failed to serialize about data")?;
      println!("{json}");
    }
    _ => display_text_about(&data),
  }

  if is_maintained {
    maintenance_gate(&release, now)?;
  }

  Ok(())
}

/// Enforce the maintenance window
///
/// Prints an error message and fails once `now` is past the release's
/// declared end of maintenance, so the process exits with status 1.
fn maintenance_gate(release: &Release, now: NaiveDateTime) -> Result<()> {
  if release.is_maintained(now) {
    return Ok(());
  }

  print_error(&format!(
    "{} {} has been unmaintained since {}",
    release.name, release.version, release.end_of_maintenance
  ));
  bail!(
    "{} {} is past its end of maintenance ({})",
    release.name,
    release.version,
    release.end_of_maintenance
  )
}

/// Build the release metadata for the running binary
///
/// The support-window constants are trusted configuration; if one fails to
/// parse, the whole command fails rather than reporting a bogus window.
pub fn current_release() -> Result<Release> {
  let end_of_maintenance: SupportDate = END_OF_MAINTENANCE
    .parse()
    .context("Invalid END_OF_MAINTENANCE constant")?;
  let end_of_life: SupportDate = END_OF_LIFE.parse().context("Invalid END_OF_LIFE constant")?;

  Ok(Release {
    name: PRODUCT_NAME.to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
    long_term_support: LONG_TERM_SUPPORT,
    end_of_maintenance,
    end_of_life,
  })
}

/// Gather the full snapshot for the given release and wall-clock time
pub fn collect(release: &Release, now: NaiveDateTime) -> AboutData {
  let snapshot = RuntimeSnapshot::capture();

  AboutData {
    application: ApplicationInfo {
      name: release.name.clone(),
      version: release.version.clone(),
      long_term_support: release.long_term_support,
      end_of_maintenance: support_window(release.end_of_maintenance, now),
      end_of_life: support_window(release.end_of_life, now),
    },
    environment: environment_info(&snapshot),
    runtime: RuntimeInfo {
      commit: option_env!("GIT_HASH")
        .map(str::to_string)
        .filter(|hash| !hash.is_empty()),
      built: build_timestamp(),
      target: option_env!("TARGET").map(str::to_string).filter(|t| !t.is_empty()),
      os: snapshot.os.clone(),
      arch: snapshot.arch.clone(),
      debug_assertions: cfg!(debug_assertions),
      locale: snapshot.locale.clone(),
      timezone: snapshot.timezone.clone(),
    },
  }
}

fn support_window(date: SupportDate, now: NaiveDateTime) -> SupportWindowInfo {
  SupportWindowInfo {
    date: date.to_string(),
    expired: date.is_expired(now),
    days_remaining: date.days_remaining(now),
  }
}

/// Environment configuration plus directory paths and sizes
///
/// An unresolvable home directory leaves the directory rows empty instead
/// of failing the report.
fn environment_info(snapshot: &RuntimeSnapshot) -> EnvironmentInfo {
  let dirs = match ConfigDirs::new() {
    Ok(dirs) => Some(dirs),
    Err(e) => {
      debug!("Could not resolve project directories: {e}");
      None
    }
  };

  EnvironmentInfo {
    environment: snapshot.environment.clone(),
    debug: snapshot.debug,
    config_dir: dirs.as_ref().map(|d| describe_dir(d.config_dir())),
    data_dir: dirs.as_ref().map(|d| describe_dir(d.data_dir())),
    cache_dir: dirs.as_ref().and_then(|d| d.cache_dir().map(|path| describe_dir(path))),
    logs_dir: dirs.as_ref().map(|d| describe_dir(&d.logs_dir())),
  }
}

fn describe_dir(path: &std::path::Path) -> DirInfo {
  let size_bytes = if path.is_dir() { dir_size(path).ok() } else { None };
  DirInfo {
    path: path.display().to_string(),
    size_bytes,
  }
}

/// The embedded build timestamp, formatted as a UTC datetime
fn build_timestamp() -> Option<String> {
  let seconds: i64 = option_env!("BUILD_TIMESTAMP")?.parse().ok()?;
  let built = DateTime::from_timestamp(seconds, 0)?;
  Some(built.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Display the about report in text format
fn display_text_about(data: &AboutData) {
  // Two-column row shared by all three sections
  #[derive(Tabled)]
  struct InfoRow {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
  }

  fn row(property: &str, value: impl Into<String>) -> InfoRow {
    InfoRow {
      property: property.to_string(),
      value: value.into(),
    }
  }

  let app = &data.application;
  let application_rows = vec![
    row("Version", app.version.as_str()),
    row("Long-Term Support", yes_no(app.long_term_support)),
    row("End of Maintenance", format_support_window(&app.end_of_maintenance)),
    row("End of Life", format_support_window(&app.end_of_life)),
  ];

  println!("\n{}", data.application.name.bold().underline());
  println!("{}", Table::new(application_rows).with(Style::sharp()));

  let env = &data.environment;
  let environment_rows = vec![
    row("Environment", env.environment.as_str()),
    row("Debug", if env.debug { "true" } else { "false" }),
    row("Config Directory", format_dir(env.config_dir.as_ref())),
    row("Data Directory", format_dir(env.data_dir.as_ref())),
    row("Cache Directory", format_dir(env.cache_dir.as_ref())),
    row("Log Directory", format_dir(env.logs_dir.as_ref())),
  ];

  println!("\n{}", "Environment".bold().underline());
  println!("{}", Table::new(environment_rows).with(Style::sharp()));

  let runtime = &data.runtime;
  let runtime_rows = vec![
    row("Commit", display_or_na(runtime.commit.as_deref())),
    row("Built", display_or_na(runtime.built.as_deref())),
    row("Target", display_or_na(runtime.target.as_deref())),
    row("OS / Architecture", format!("{} / {}", runtime.os, runtime.arch)),
    row("Debug Assertions", yes_no(runtime.debug_assertions)),
    row("Locale", display_or_na(runtime.locale.as_deref())),
    row("Timezone", display_or_na(runtime.timezone.as_deref())),
  ];

  println!("\n{}", "Runtime".bold().underline());
  println!("{}", Table::new(runtime_rows).with(Style::sharp()));
}

/// Format a support window as `MM/YYYY (in N days)` / `(expired N days ago)`
fn format_support_window(window: &SupportWindowInfo) -> String {
  if window.expired {
    let days_ago = -window.days_remaining;
    format!(
      "{} ({})",
      window.date,
      format!("expired {} day{} ago", days_ago, plural(days_ago)).red()
    )
  } else if window.days_remaining == 0 {
    format!("{} ({})", window.date, "ends today".yellow())
  } else {
    format!(
      "{} ({})",
      window.date,
      format!("in {} day{}", window.days_remaining, plural(window.days_remaining)).green()
    )
  }
}

/// Format a directory row: path plus recursive size, or `n/a`
fn format_dir(dir: Option<&DirInfo>) -> String {
  match dir {
    Some(dir) => match dir.size_bytes {
      Some(size) => format!("{} ({})", dir.path, format_bytes(size)),
      None => format!("{} (n/a)", dir.path),
    },
    None => "n/a".to_string(),
  }
}

fn yes_no(value: bool) -> &'static str {
  if value { "yes" } else { "no" }
}

fn plural(count: i64) -> &'static str {
  if count == 1 { "" } else { "s" }
}
