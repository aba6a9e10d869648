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

use std::borrow::Cow;

use jiff::Zoned;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::layout::Layout;
use crate::layout::TIME_FORMAT;
use crate::record::Record;

/// A JSON layout for formatting log records.
///
/// Output format:
///
/// ```json
/// {"time":"2025-06-01T22:44:57.172051+08:00","level":"INFO","msg":"starting server","source":{"file":"main.rs","line":21}}
/// {"time":"2025-06-01T22:44:57.172187+08:00","level":"WARN","msg":"cache nearly full","used":92,"cap":100}
/// ```
///
/// The `source` field is present only when the logger captures call sites;
/// its `file` component carries the base file name only. Attributes appear as
/// top-level keys.
///
/// # Examples
///
/// ```
/// use logward::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct JsonLayout {}

#[derive(Debug, Serialize)]
struct SourceLine {
    file: Cow<'static, str>,
    line: u32,
}

#[derive(Debug, Serialize)]
struct RecordLine<'a> {
    #[serde(serialize_with = "serialize_time")]
    time: &'a Zoned,
    level: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<SourceLine>,
    #[serde(flatten)]
    attrs: Map<String, Value>,
}

fn serialize_time<S>(time: &Zoned, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&time.strftime(TIME_FORMAT))
}

impl Layout for JsonLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let attrs = record
            .attrs()
            .iter()
            .map(|attr| (attr.key().to_string(), attr.value().clone()))
            .collect();

        let record_line = RecordLine {
            time: record.time(),
            level: record.level().as_str(),
            msg: record.message(),
            source: record.source().map(|source| SourceLine {
                file: source.file_name(),
                line: source.line(),
            }),
            attrs,
        };

        Ok(serde_json::to_vec(&record_line)?)
    }
}
