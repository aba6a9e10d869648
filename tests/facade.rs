// Copyright 2025 Logward Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;

use logward::Append;
use logward::Attr;
use logward::Config;
use logward::Error;
use logward::Layout;
use logward::Level;
use logward::Logger;
use logward::Record;
use logward::layout::JsonLayout;
use logward::layout::TextLayout;
use serde_json::Value;

/// Shared handle to the bytes a [`Capture`] appender has written.
#[derive(Debug, Default, Clone)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// An appender that formats records like [`logward::append::Stdout`] but
/// collects the output in memory for assertions.
#[derive(Debug)]
struct Capture {
    layout: Box<dyn Layout>,
    buffer: Buffer,
}

impl Capture {
    fn new(layout: impl Into<Box<dyn Layout>>) -> (Capture, Buffer) {
        let buffer = Buffer::default();
        let capture = Capture {
            layout: layout.into(),
            buffer: buffer.clone(),
        };
        (capture, buffer)
    }
}

impl Append for Capture {
    fn append(&self, record: &Record) -> anyhow::Result<()> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        // one locked write per record, mirroring the stdout appender
        self.buffer.0.lock().unwrap().extend_from_slice(&bytes);
        Ok(())
    }
}

fn json_logger(min_level: Level, include_source: bool) -> (Logger, Buffer) {
    let config = Config {
        encoding: "json".to_string(),
        min_level,
        include_source,
    };
    let (capture, buffer) = Capture::new(JsonLayout::default());
    let logger = Logger::with_append(config, capture).unwrap();
    (logger, buffer)
}

fn text_logger(min_level: Level) -> (Logger, Buffer) {
    let config = Config {
        encoding: "text".to_string(),
        min_level,
        include_source: false,
    };
    let (capture, buffer) = Capture::new(TextLayout::default());
    let logger = Logger::with_append(config, capture).unwrap();
    (logger, buffer)
}

#[test]
fn test_unsupported_encoding_fails_construction() {
    let config = Config {
        encoding: "xml".to_string(),
        ..Config::default()
    };

    let err = Logger::new(config).unwrap_err();
    assert!(matches!(err, Error::UnsupportedEncoding(ref value) if value.as_str() == "xml"));
    assert_eq!(err.to_string(), r#"unsupported log encoding: "xml""#);

    // the custom-appender constructor validates the same way
    let config = Config {
        encoding: "yaml".to_string(),
        ..Config::default()
    };
    let (capture, buffer) = Capture::new(TextLayout::default());
    assert!(Logger::with_append(config, capture).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_json_emits_one_parsable_line_per_severity_in_order() {
    let (logger, buffer) = json_logger(Level::Debug, true);

    logger.info("starting server", []);
    logger.debug("debugging server", []);
    logger.warn("warning server", []);
    logger.error("error server", []);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 4);

    let expected = [
        ("INFO", "starting server"),
        ("DEBUG", "debugging server"),
        ("WARN", "warning server"),
        ("ERROR", "error server"),
    ];
    for (line, (level, msg)) in lines.iter().zip(expected) {
        let value: Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["level"], level);
        assert_eq!(value["msg"], msg);
        assert!(value["time"].is_string());
    }
}

#[test]
fn test_function_attr_never_reaches_output() {
    let (logger, buffer) = json_logger(Level::Debug, false);
    logger.info(
        "handled request",
        [Attr::new("function", "handle"), Attr::new("status", 200)],
    );

    let lines = buffer.lines();
    let value: Value = serde_json::from_str(&lines[0]).unwrap();
    assert!(value.get("function").is_none());
    assert_eq!(value["status"], 200);

    let (logger, buffer) = text_logger(Level::Debug);
    logger.info("handled request", [Attr::new("function", "handle")]);

    assert!(!buffer.lines()[0].contains("function"));
}

#[test]
fn test_source_carries_base_file_name_only() {
    let (logger, buffer) = json_logger(Level::Debug, true);
    logger.warn("warning server", []);

    let lines = buffer.lines();
    let value: Value = serde_json::from_str(&lines[0]).unwrap();
    let file = value["source"]["file"].as_str().unwrap();
    assert_eq!(file, "facade.rs");
    assert!(!file.contains(['/', '\\']));
    assert!(value["source"]["line"].as_u64().unwrap() > 0);
}

#[test]
fn test_source_absent_when_disabled() {
    let (logger, buffer) = json_logger(Level::Debug, false);
    logger.info("starting server", []);

    let lines = buffer.lines();
    let value: Value = serde_json::from_str(&lines[0]).unwrap();
    assert!(value.get("source").is_none());
}

#[test]
fn test_records_below_min_level_produce_no_output() {
    let (logger, buffer) = text_logger(Level::Warn);

    logger.debug("x", []);
    logger.info("y", []);
    assert!(buffer.is_empty());

    logger.warn("z", []);
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("msg=z"));
}

#[test]
fn test_attrs_flatten_as_top_level_json_keys() {
    let (logger, buffer) = json_logger(Level::Debug, false);
    logger.info(
        "starting server",
        [Attr::new("port", 8080), Attr::new("tls", false)],
    );

    let lines = buffer.lines();
    let value: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["port"], 8080);
    assert_eq!(value["tls"], false);
}

#[test]
fn test_unserializable_attr_degrades_without_failing_emit() {
    struct Broken;

    impl serde::Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    let (logger, buffer) = json_logger(Level::Debug, false);
    logger.error("listener failed", [Attr::new("detail", Broken)]);

    let lines = buffer.lines();
    let value: Value = serde_json::from_str(&lines[0]).unwrap();
    let detail = value["detail"].as_str().unwrap();
    assert!(detail.starts_with("<unserializable:"));
}

#[test]
fn test_concurrent_emitters_keep_records_whole_and_ordered_per_thread() {
    const THREADS: usize = 8;
    const RECORDS: usize = 50;

    let (logger, buffer) = json_logger(Level::Debug, true);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for seq in 0..RECORDS {
                    logger.info(
                        "tick",
                        [Attr::new("worker", worker), Attr::new("seq", seq)],
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * RECORDS);

    // every line is a whole record, and each worker's own records appear in
    // emit order
    let mut next_seq = vec![0u64; THREADS];
    for line in &lines {
        let value: Value = serde_json::from_str(line).unwrap();
        let worker = value["worker"].as_u64().unwrap() as usize;
        let seq = value["seq"].as_u64().unwrap();
        assert_eq!(seq, next_seq[worker]);
        next_seq[worker] += 1;
    }
}
