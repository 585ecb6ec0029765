// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Errors which abort a whole extraction run.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Must provide input `data` or `inputPaths`")]
    MissingInput,
    #[error("Formatter not found : {0}")]
    UnknownFormat(String),
    #[error("Unknown extra strings bundle {name:?}, available: {available}")]
    UnknownExtra { name: String, available: String },
    #[error("File comment must be a valid web uri, found {0:?}")]
    InvalidFileComment(String),
    #[error("Could not parse JavaScript: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
