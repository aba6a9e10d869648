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

use logward::Config;
use logward::Level;
use logward::Logger;

fn main() {
    let config = Config {
        encoding: "json".to_string(),
        min_level: Level::Debug,
        include_source: true,
    };

    let logger = Logger::new(config).unwrap_or_else(|err| panic!("cannot create logger: {err}"));

    logger.info("starting server", []);
    logger.debug("debugging server", []);
    logger.warn("warning server", []);
    logger.error("error server", []);
    logger.flush();
}
