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

//! Logward is a minimal structured logging facade: one explicitly constructed
//! logger value, two line-oriented output encodings (JSON and logfmt text),
//! and four severity-tagged emit operations.
//!
//! # Overview
//!
//! A [`Logger`] is built once from a [`Config`] selecting the encoding, the
//! minimum severity, and whether records carry their call-site location. It
//! writes one self-contained line per record to standard output. There is no
//! global logger: pass the constructed value to whichever components need it.
//!
//! # Examples
//!
//! Simple setup with the text encoding:
//!
//! ```
//! use logward::Config;
//! use logward::Level;
//! use logward::Logger;
//!
//! let config = Config {
//!     encoding: "text".to_string(),
//!     min_level: Level::Info,
//!     include_source: false,
//! };
//! let logger = Logger::new(config).expect("encoding is valid");
//!
//! logger.info("This is an info message.", []);
//! ```
//!
//! Structured attributes ride along as key-value pairs:
//!
//! ```
//! use logward::Attr;
//! use logward::Config;
//! use logward::Logger;
//!
//! let logger = Logger::new(Config::default()).expect("encoding is valid");
//!
//! logger.warn("cache nearly full", [Attr::new("used", 92), Attr::new("cap", 100)]);
//! ```

pub mod append;
pub mod layout;

pub use append::Append;
pub use layout::Layout;

mod config;
mod error;
mod level;
mod logger;
mod record;

pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use logger::Logger;
pub use record::Attr;
pub use record::Record;
pub use record::Source;
