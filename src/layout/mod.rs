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

//! Layouts for formatting log records.

use std::fmt;

use crate::Error;
use crate::record::Record;

mod json;
mod text;

pub use self::json::JsonLayout;
pub use self::text::TextLayout;

// microsecond precision with UTC offset; RFC3339-compatible
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6f%:z";

/// A layout for formatting log records.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record into one line of output, without the trailing
    /// newline.
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// Selects the layout for a configured encoding name.
///
/// This is the closed set of supported encodings; anything else is an
/// [`Error::UnsupportedEncoding`].
///
/// # Examples
///
/// ```
/// let layout = logward::layout::for_encoding("json").unwrap();
/// assert!(logward::layout::for_encoding("xml").is_err());
/// ```
pub fn for_encoding(encoding: &str) -> Result<Box<dyn Layout>, Error> {
    match encoding {
        "json" => Ok(Box::new(JsonLayout::default())),
        "text" => Ok(Box::new(TextLayout::default())),
        other => Err(Error::UnsupportedEncoding(other.to_string())),
    }
}
