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

/// The error type of logward.
///
/// Construction is the only fallible operation; emit calls never return
/// errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured encoding is not one of `json` or `text`.
    #[error("unsupported log encoding: {0:?}")]
    UnsupportedEncoding(String),
    /// A level name failed to parse.
    #[error("malformed level: {0:?}")]
    MalformedLevel(String),
}
