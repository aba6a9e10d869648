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

use logward::Attr;
use logward::Config;
use logward::Level;
use logward::Logger;

fn main() {
    let config = Config {
        encoding: "text".to_string(),
        min_level: Level::Info,
        include_source: false,
    };

    let logger = Logger::new(config).unwrap_or_else(|err| panic!("cannot create logger: {err}"));

    logger.debug("dropped below the minimum level", []);
    logger.info("starting server", [Attr::new("port", 8080)]);
    logger.warn("cache nearly full", [Attr::new("used", 92), Attr::new("cap", 100)]);
    logger.error("listener failed", [Attr::new("reason", "address in use")]);
    logger.flush();
}
