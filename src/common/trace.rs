//! Contains the [`TracePlugin`]

use bevy_app::{App, Plugin};
use cfg_if::cfg_if;
use tracing::info;
use tracing_panic::panic_hook;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

cfg_if! {
    if #[cfg(feature = "log-to-file")] {
        use std::fs::{File, OpenOptions};
        use std::time::SystemTime;
        use tracing::{Event, Subscriber};
        use tracing_log::NormalizeEvent;
        use tracing_subscriber::fmt::format::Writer;
        use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
        use tracing_subscriber::registry::LookupSpan;
    }
}

cfg_if! {
    if #[cfg(any(feature = "log-to-console", feature = "log-to-file"))] {
        use tracing::metadata::LevelFilter;
        use tracing_subscriber::{Layer, EnvFilter};
    }
}

/// Environment variable holding the filter directives, e.g. `REFRACT_LOG=refract=debug,wgpu_core=warn`
pub const LOG_ENV_VAR: &str = "REFRACT_LOG";

/// The plugin that manages logging.
///
/// Adding this plugin installs a global `tracing` subscriber.
/// If the feature `log-to-console` is set then events are printed to stdout.
/// If the feature `log-to-file` is set then events are also written to `logs/`, and older logs are compressed.
/// If the feature `trace` is set then a Chrome trace is written to `tracing/`.
///
/// Only the first subscriber installed in a process wins; later attempts are reported and ignored.
pub struct TracePlugin;

impl Plugin for TracePlugin {
    #[cfg_attr(not(feature = "trace"), allow(unused_variables))]
    fn build(&self, app: &mut App) {
        cfg_if! {
            if #[cfg(feature = "log-to-console")] {
                let stdout_log = tracing_subscriber::fmt::layer().with_filter(env_filter());
            } else {
                // This creates a layer that does nothing
                let stdout_log = tracing_subscriber::layer::Identity::new();
            }
        }

        cfg_if! {
            if #[cfg(feature = "log-to-file")] {
                let file = match get_log_file() {
                    Ok(file) => file,
                    Err(err) => {
                        eprintln!("Failed to open log file: {err}");
                        return;
                    }
                };

                let file_log = tracing_subscriber::fmt::layer()
                    .event_format(FileFormatter)
                    .with_writer(file)
                    .with_ansi(false)
                    .with_filter(env_filter());
            } else {
                let file_log = tracing_subscriber::layer::Identity::new();
            }
        }

        cfg_if! {
            if #[cfg(feature = "trace")] {
                if let Err(err) = initialize_directory("tracing") {
                    eprintln!("Failed to initialize tracing directory: {err}");
                    return;
                }
                let (chrome, guard) = tracing_chrome::ChromeLayerBuilder::new()
                    .file(timestamped_path("tracing/refract_trace", "json"))
                    .name_fn(Box::new(|event_or_span| match event_or_span {
                        tracing_chrome::EventOrSpan::Event(event) => event.metadata().name().into(),
                        tracing_chrome::EventOrSpan::Span(span) => {
                            if let Some(fields) = span
                                .extensions()
                                .get::<tracing_subscriber::fmt::FormattedFields<tracing_subscriber::fmt::format::DefaultFields>>()
                            {
                                format!("{}: {}", span.metadata().name(), fields.fields.as_str())
                            } else {
                                span.metadata().name().into()
                            }
                        }
                    }))
                    .build();
                app.insert_non_send_resource(guard);
            } else {
                let chrome = tracing_subscriber::layer::Identity::new();
            }
        }

        if let Err(err) = registry()
            .with(stdout_log)
            .with(file_log)
            .with(chrome)
            .try_init()
        {
            eprintln!("Failed to set global subscriber: {err}");
            return;
        }

        // Feed panic through tracing
        let old_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |infos| {
            panic_hook(infos);
            old_hook(infos);
        }));

        info!(
            "refract {} is up, filter read from {LOG_ENV_VAR}",
            env!("CARGO_PKG_VERSION")
        );
    }
}

#[cfg(any(feature = "log-to-console", feature = "log-to-file"))]
/// Builds the filter shared by every output layer. Defaults to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

#[cfg(any(feature = "log-to-file", feature = "trace"))]
/// Returns `<prefix>_<utc timestamp>.<extension>`
fn timestamped_path(prefix: &str, extension: &str) -> String {
    chrono::Utc::now()
        .format(&format!("{prefix}_%Y-%m-%d_%H-%M-%S-%f.{extension}"))
        .to_string()
}

#[cfg(any(feature = "log-to-file", feature = "trace"))]
/// Creates the directory if it does not exist
fn initialize_directory(path: &str) -> Result<(), std::io::Error> {
    if !std::path::Path::new(path).exists() {
        std::fs::create_dir(path)?;
    }

    Ok(())
}

#[cfg(feature = "log-to-file")]
/// Compresses old logs, then creates a new log file and returns it.
fn get_log_file() -> Result<File, std::io::Error> {
    initialize_directory("logs")?;
    compress_old_logs()?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(timestamped_path("logs/refract_log", "log"))
}

#[cfg(feature = "log-to-file")]
/// Gzips every `.log` file in `logs/` and removes the original.
fn compress_old_logs() -> Result<(), std::io::Error> {
    for log in std::fs::read_dir("logs")? {
        let log = log?;
        let path = log.path();

        if !log.metadata()?.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !file_name.ends_with(".log") {
            continue;
        }

        let compressed_file_path = path.with_file_name(format!("{file_name}.gz"));

        let mut reader = std::io::BufReader::new(File::open(&path)?);
        let mut compressed_file = flate2::write::GzEncoder::new(
            File::create(&compressed_file_path)?,
            flate2::Compression::default(),
        );

        std::io::copy(&mut reader, &mut compressed_file)?;
        compressed_file.finish()?;
        std::fs::remove_file(&path)?;
    }

    Ok(())
}

#[cfg(feature = "log-to-file")]
/// Formatting for logging to files
///
/// Will format events in the following format:
/// \[\<timestamp>] \[\<level>] \[\<target>]: \<message>
///
/// Example:
/// \[2024-05-05T05:15:02.623Z] \[INFO] \[refract::graphics]: Selected adapter
struct FileFormatter;

#[cfg(feature = "log-to-file")]
impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.normalized_metadata();
        let metadata = metadata.as_ref().unwrap_or(event.metadata());

        write!(
            &mut writer,
            "[{}] [{}] [{}]: ",
            humantime::format_rfc3339_millis(SystemTime::now()),
            metadata.level(),
            metadata.target()
        )?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;

                let ext = span.extensions();
                if let Some(fields) = ext.get::<tracing_subscriber::fmt::FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{}}}", fields)?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
