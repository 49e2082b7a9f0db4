use serde::{Deserialize, Serialize};
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{writer::BoxMakeWriter, MakeWriter},
    prelude::*,
    registry, EnvFilter,
};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write_all(buf);
        let res_b = self.b.write_all(buf);
        res_a.or(res_b).map(|()| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a>,
    B: MakeWriter<'a>,
{
    type Writer = Tee<A::Writer, B::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Console,
    File,
    Both,
    Off,
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(LogOutput::Console),
            "file" => Ok(LogOutput::File),
            "both" => Ok(LogOutput::Both),
            "off" | "none" => Ok(LogOutput::Off),
            other => Err(format!("unknown log output '{other}'")),
        }
    }
}

/// Logging settings, usually read from the `logging` section of the
/// configuration file and then overridden by environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Human,
            output: LogOutput::Console,
            file_path: env::temp_dir().join("snow-devops.log"),
        }
    }
}

impl LogSettings {
    /// Apply `LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT` and `LOG_FILE_PATH`.
    ///
    /// Unparseable values are ignored and the current setting is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = env::var("LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.level = level.trim().to_string();
            }
        }
        if let Some(format) = env::var("LOG_FORMAT").ok().and_then(|v| v.parse().ok()) {
            self.format = format;
        }
        if let Some(output) = env::var("LOG_OUTPUT").ok().and_then(|v| v.parse().ok()) {
            self.output = output;
        }
        if let Ok(path) = env::var("LOG_FILE_PATH") {
            if !path.trim().is_empty() {
                self.file_path = PathBuf::from(path);
            }
        }
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

fn file_writer(file_path: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let log_dir = file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(env::temp_dir);
    let log_filename = file_path
        .file_name()
        .unwrap_or_else(|| "snow-devops.log".as_ref());

    let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
    tracing_appender::non_blocking(file_appender)
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. The returned guard must
/// be kept alive for as long as file logging should be flushed.
pub fn init_subscriber(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let mut guard: Option<WorkerGuard> = None;

    let writer = match settings.output {
        LogOutput::Off => {
            registry().with(env_filter).init();
            return None;
        }
        LogOutput::Console => BoxMakeWriter::new(io::stderr),
        LogOutput::File => {
            let (non_blocking, file_guard) = file_writer(&settings.file_path);
            guard = Some(file_guard);
            BoxMakeWriter::new(non_blocking)
        }
        LogOutput::Both => {
            let (non_blocking, file_guard) = file_writer(&settings.file_path);
            guard = Some(file_guard);
            BoxMakeWriter::new(MakeTee {
                make_a: io::stderr,
                make_b: non_blocking,
            })
        }
    };

    let subscriber = registry().with(env_filter);
    match settings.format {
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init(),
        LogFormat::Human => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(writer),
            )
            .init(),
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["LOG_LEVEL", "LOG_FORMAT", "LOG_OUTPUT", "LOG_FILE_PATH"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_tee_writes_to_both_sinks() {
        let mut tee = Tee {
            a: Vec::new(),
            b: Vec::new(),
        };
        tee.write_all(b"scan started\n").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.a, b"scan started\n");
        assert_eq!(tee.b, b"scan started\n");
    }

    #[test]
    fn test_parse_format_and_output() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" human ".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("both".parse::<LogOutput>(), Ok(LogOutput::Both));
        assert_eq!("none".parse::<LogOutput>(), Ok(LogOutput::Off));
    }

    #[test]
    #[serial]
    fn test_env_overrides_settings() {
        clear_env();
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_FORMAT", "json");
        env::set_var("LOG_OUTPUT", "file");
        env::set_var("LOG_FILE_PATH", "/var/log/devops.log");

        let settings = LogSettings::default().with_env_overrides();
        clear_env();

        assert_eq!(settings.level, "debug");
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.output, LogOutput::File);
        assert_eq!(settings.file_path, PathBuf::from("/var/log/devops.log"));
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_are_ignored() {
        clear_env();
        env::set_var("LOG_FORMAT", "xml");
        env::set_var("LOG_OUTPUT", "printer");

        let settings = LogSettings::default().with_env_overrides();
        clear_env();

        assert_eq!(settings, LogSettings::default());
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: LogSettings =
            serde_json::from_str(r#"{"level": "info", "output": "both"}"#).unwrap();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.output, LogOutput::Both);
        assert_eq!(settings.format, LogFormat::Human);
    }
}
