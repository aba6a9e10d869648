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

use serde::Deserialize;

use crate::Level;

/// Configuration for constructing a [`Logger`](crate::Logger).
///
/// The encoding is kept as the raw configured string; it is validated once at
/// construction so that a bad value fails startup instead of surfacing later.
///
/// # Examples
///
/// ```
/// use logward::Config;
/// use logward::Level;
///
/// let config: Config = serde_json::from_str(
///     r#"{"encoding": "json", "min_level": "warn", "include_source": true}"#,
/// )
/// .unwrap();
/// assert_eq!(config.min_level, Level::Warn);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output serialization; one of `json` or `text`.
    pub encoding: String,
    /// Records below this severity are dropped.
    pub min_level: Level,
    /// Whether each record carries its call-site file and line.
    pub include_source: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: "text".to_string(),
            min_level: Level::Info,
            include_source: false,
        }
    }
}
