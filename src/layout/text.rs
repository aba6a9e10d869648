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

use serde_json::Value;

use crate::layout::Layout;
use crate::layout::TIME_FORMAT;
use crate::record::Record;

/// A logfmt-style text layout for formatting log records.
///
/// Output format:
///
/// ```text
/// time=2025-06-01T21:04:28.986032+08:00 level=INFO msg="starting server" source=main.rs:21
/// time=2025-06-01T21:04:28.991233+08:00 level=WARN msg="cache nearly full" used=92 cap=100
/// ```
///
/// # Examples
///
/// ```
/// use logward::layout::TextLayout;
///
/// let text_layout = TextLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct TextLayout {}

// The encode logic is adapted from https://github.com/go-logfmt/logfmt/blob/76262ea7/encode.go,
// except that unrepresentable keys drop the pair instead of failing the record.
fn encode_key_value(result: &mut String, key: &str, value: &str) {
    use std::fmt::Write;

    if key.contains([' ', '=', '"']) {
        // logfmt cannot represent such keys; omit the pair
        return;
    }

    // SAFETY: write to a string always succeeds
    if value.contains([' ', '=', '"']) {
        write!(result, " {key}=\"{}\"", value.escape_debug()).unwrap();
    } else {
        write!(result, " {key}={value}").unwrap();
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let mut text = format!("time={}", record.time().strftime(TIME_FORMAT));

        encode_key_value(&mut text, "level", record.level().as_str());
        encode_key_value(&mut text, "msg", record.message());

        if let Some(source) = record.source() {
            let position = format!("{}:{}", source.file_name(), source.line());
            encode_key_value(&mut text, "source", &position);
        }

        for attr in record.attrs() {
            // strings render verbatim; everything else as compact JSON
            let value = match attr.value() {
                Value::String(s) => s.clone(),
                value => value.to_string(),
            };
            encode_key_value(&mut text, attr.key(), &value);
        }

        Ok(text.into_bytes())
    }
}
