//! Global subscriber installation. Kept in its own test binary because the
//! subscriber can only be installed once per process.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use riv_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn json_logs_respect_the_level() {
    let buffer = Buffer::default();
    let config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_env_filter(false)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    init_logging_with_writer(&config, buffer.clone());

    tracing::info!(target: "riv_extract", artboards = 2, "names resolved");
    tracing::debug!(target: "riv_extract", "hidden detail");

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\"message\":\"names resolved\""));
    assert!(lines[0].contains("\"artboards\":2"));
    assert!(!output.contains("hidden detail"));
}
