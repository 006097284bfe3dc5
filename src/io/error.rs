// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadDirectionsError {
    #[error("Data file '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *super::read::DATA_FILE_EXTENSIONS)]
    UnrecognisedExtension(PathBuf),

    #[error("No data was found in the input")]
    NoData,

    #[error("Couldn't find a column named '{0}' in the header")]
    NoColumn(String),

    #[error("Column '{0}' was requested by name, but the data has no header")]
    NoHeader(String),

    #[error("Line {line_num}: expected at least {expected} fields, but found {found}")]
    MissingField {
        line_num: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line_num}: couldn't parse '{string}' as a number")]
    ParseFloat { line_num: usize, string: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
