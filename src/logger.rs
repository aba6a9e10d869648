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

use std::panic::Location;

use crate::Config;
use crate::Error;
use crate::Level;
use crate::append::Append;
use crate::append::Stdout;
use crate::layout;
use crate::record::Attr;
use crate::record::Record;
use crate::record::Source;

/// The attribute-rewrite policy applied to every attribute before formatting.
type RewriteAttr = fn(Attr) -> Option<Attr>;

// attrs keyed "function" never reach the output, whatever the encoding
fn strip_function(attr: Attr) -> Option<Attr> {
    if attr.key() == "function" {
        None
    } else {
        Some(attr)
    }
}

/// A leveled logging facade bound to one output encoding.
///
/// A `Logger` is immutable after construction and safe to share across
/// threads. Emit operations never fail: records below the configured minimum
/// level are silently dropped, and delivery problems degrade to a best-effort
/// note on stderr.
///
/// # Examples
///
/// ```
/// use logward::Config;
/// use logward::Level;
/// use logward::Logger;
///
/// let logger = Logger::new(Config {
///     encoding: "json".to_string(),
///     min_level: Level::Debug,
///     include_source: true,
/// })
/// .expect("encoding is valid");
///
/// logger.info("starting server", []);
/// ```
///
/// An unknown encoding fails construction:
///
/// ```
/// use logward::Config;
/// use logward::Error;
/// use logward::Logger;
///
/// let result = Logger::new(Config {
///     encoding: "xml".to_string(),
///     ..Config::default()
/// });
/// assert!(matches!(result, Err(Error::UnsupportedEncoding(_))));
/// ```
#[derive(Debug)]
pub struct Logger {
    min_level: Level,
    include_source: bool,
    rewrite: RewriteAttr,
    append: Box<dyn Append>,
}

impl Logger {
    /// Creates a logger that writes to stdout with the configured encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] if `config.encoding` is not one
    /// of `json` or `text`.
    pub fn new(config: Config) -> Result<Logger, Error> {
        let layout = layout::for_encoding(&config.encoding)?;
        Ok(Self::assemble(config, Stdout::new(layout)))
    }

    /// Creates a logger that delivers records to the given appender.
    ///
    /// The encoding is validated the same way as in [`Logger::new`] even
    /// though the appender brings its own layout, so that a bad configuration
    /// fails startup regardless of the sink.
    pub fn with_append(config: Config, append: impl Append) -> Result<Logger, Error> {
        layout::for_encoding(&config.encoding)?;
        Ok(Self::assemble(config, append))
    }

    fn assemble(config: Config, append: impl Append) -> Logger {
        Logger {
            min_level: config.min_level,
            include_source: config.include_source,
            rewrite: strip_function,
            append: Box::new(append),
        }
    }

    /// Emits a record at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, message: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.log(Level::Info, message, attrs);
    }

    /// Emits a record at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, message: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.log(Level::Warn, message, attrs);
    }

    /// Emits a record at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, message: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.log(Level::Error, message, attrs);
    }

    /// Emits a record at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, message: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.log(Level::Debug, message, attrs);
    }

    #[track_caller]
    fn log(&self, level: Level, message: &str, attrs: impl IntoIterator<Item = Attr>) {
        if level < self.min_level {
            return;
        }

        let attrs = attrs.into_iter().filter_map(self.rewrite).collect();
        let mut record = Record::new(level, message).with_attrs(attrs);

        if self.include_source {
            let location = Location::caller();
            record = record.with_source(Source::new(location.file(), location.line()));
        }

        if let Err(err) = self.append.append(&record) {
            handle_error(&record, err);
        }
    }

    /// Flushes the underlying appender.
    pub fn flush(&self) {
        self.append.flush();
    }
}

fn handle_error(record: &Record, error: anyhow::Error) {
    use std::io::Write;

    let _ = writeln!(
        std::io::stderr(),
        "error performing logging. message: {message}, error: {error}",
        message = record.message(),
    );
}
