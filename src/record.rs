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

//! Log record, call-site metadata, and key-value attributes.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;

use jiff::Zoned;
use serde::Serialize;
use serde_json::Value;

use crate::Level;

/// A key-value pair attached to a record for structured context.
///
/// The value is captured eagerly at the call site. A value that cannot be
/// serialized degrades to a descriptive string; constructing an attribute
/// never fails.
///
/// # Examples
///
/// ```
/// use logward::Attr;
///
/// let attr = Attr::new("port", 8080);
/// assert_eq!(attr.key(), "port");
/// ```
#[derive(Debug, Clone)]
pub struct Attr {
    key: Cow<'static, str>,
    value: Value,
}

impl Attr {
    /// Creates an attribute from a key and any serializable value.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Serialize) -> Self {
        let value = match serde_json::to_value(&value) {
            Ok(value) => value,
            Err(err) => Value::String(format!("<unserializable: {err}>")),
        };

        Self {
            key: key.into(),
            value,
        }
    }

    /// The attribute key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The call site a record originated from.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    file: &'static str,
    line: u32,
}

impl Source {
    /// Creates a source location from a file path and line number.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The source file path as captured.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The base name of the source file.
    // directory components are noisy and leak build-machine paths
    pub fn file_name(&self) -> Cow<'static, str> {
        Path::new(self.file)
            .file_name()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default()
    }

    /// The line containing the emit call.
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// The payload of one log event.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    // the observed time
    time: Zoned,

    // the metadata
    level: Level,
    source: Option<Source>,

    // the payload
    message: &'a str,

    // structural logging
    attrs: Vec<Attr>,
}

impl<'a> Record<'a> {
    /// Creates a record observed now, with no source and no attributes.
    pub fn new(level: Level, message: &'a str) -> Self {
        Self {
            time: Zoned::now(),
            level,
            source: None,
            message,
            attrs: vec![],
        }
    }

    /// Sets the call-site location.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the key-value attributes.
    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> Self {
        self.attrs = attrs;
        self
    }

    /// The observed time.
    pub fn time(&self) -> &Zoned {
        &self.time
    }

    /// The verbosity level of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The call-site location, if captured.
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The key-value attributes.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}
