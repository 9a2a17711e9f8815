//! The subscriber installed by the CLI captures engine events as JSON.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use thermo_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use thermo_model::ProfileId;
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

// Installs the global subscriber, so this file holds a single test.
#[test]
fn json_logs_record_each_rename() {
    let buffer = Buffer::default();
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, buffer.clone());

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("scan_2.csv"), "b").unwrap();
    std::fs::write(dir.path().join("scan_1.csv"), "a").unwrap();
    thermo_core::run(dir.path(), ProfileId::Steps9B).unwrap();

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let messages: Vec<&str> = events
        .iter()
        .filter_map(|event| event["fields"]["message"].as_str())
        .collect();

    // Two renumbers and two mappings.
    assert_eq!(messages.iter().filter(|m| **m == "renamed").count(), 4);
    assert_eq!(messages.iter().filter(|m| **m == "moved").count(), 2);
    assert!(messages.contains(&"run complete"));
    assert!(events.iter().all(|event| event["level"] != "DEBUG"));
}
