// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading azimuths and dips from delimited text tables.
//!
//! Tables are plain text (`.txt` or `.csv`). For either extension the
//! delimiter is guessed from the first data line if it isn't specified. A header line is
//! optional; if present, the azimuth and dip columns may be selected by name.

use std::{
    fs::File,
    io::BufRead,
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::ReadDirectionsError;
use crate::stats::{DirectionSet, MeanVectorError};

lazy_static::lazy_static! {
    pub(crate) static ref DATA_FILE_EXTENSIONS: String = DataFileType::iter().join(", ");
}

/// Header names recognised as the azimuth column when no column is specified.
const AZIMUTH_NAMES: [&str; 3] = ["azimuth", "trend", "az"];
/// Header names recognised as the dip column when no column is specified.
const DIP_NAMES: [&str; 2] = ["dip", "plunge"];
/// The number of rows to show at each end of the data preview.
const NUM_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum DataFileType {
    #[strum(serialize = "txt")]
    Txt,

    #[strum(serialize = "csv")]
    Csv,
}

/// How to pick a column out of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// A (case-insensitive) header name.
    Name(String),

    /// A zero-based column index.
    Index(usize),
}

impl From<&str> for ColumnSelector {
    fn from(s: &str) -> Self {
        match s.trim().parse() {
            Ok(i) => ColumnSelector::Index(i),
            Err(_) => ColumnSelector::Name(s.trim().to_string()),
        }
    }
}

impl FromStr for ColumnSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnSelector::from(s))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// The field delimiter. If this isn't specified, it is guessed from the
    /// first line (tab, comma, semicolon, then whitespace).
    pub delimiter: Option<char>,

    /// The number of lines to skip at the start of the file.
    pub skip_rows: usize,

    /// The azimuth column. If this isn't specified, a column with a header
    /// like "azimuth" or "trend" is used, or the first column if there is no
    /// header.
    pub azimuth_column: Option<ColumnSelector>,

    /// The dip column. If this isn't specified, a column with a header like
    /// "dip" or "plunge" is used, or the second column if there is no header.
    pub dip_column: Option<ColumnSelector>,
}

/// Azimuths and dips read from a table [degrees].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionColumns {
    pub azimuths: Vec<f64>,
    pub dips: Vec<f64>,
}

impl DirectionColumns {
    pub fn len(&self) -> usize {
        self.azimuths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.azimuths.is_empty()
    }

    pub fn to_direction_set(&self) -> Result<DirectionSet, MeanVectorError> {
        DirectionSet::from_slices(&self.azimuths, &self.dips)
    }
}

/// Read azimuths and dips from a `.txt` or `.csv` file.
pub fn read_directions<P: AsRef<Path>>(
    file: P,
    options: &ReadOptions,
) -> Result<DirectionColumns, ReadDirectionsError> {
    let file = file.as_ref();
    let file_type = file
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| DataFileType::from_str(e).ok())
        .ok_or_else(|| ReadDirectionsError::UnrecognisedExtension(PathBuf::from(file)))?;

    debug!("Reading {file_type} directions from {}", file.display());
    let mut buf = std::io::BufReader::new(File::open(file)?);
    parse_directions(&mut buf, options)
}

/// Split a line into trimmed fields.
fn split_line(line: &str, delimiter: Option<char>) -> Vec<&str> {
    match delimiter {
        None | Some(' ') => line.split_whitespace().collect(),
        Some(d) => line.split(d).map(|s| s.trim()).collect(),
    }
}

fn guess_delimiter(line: &str) -> Option<char> {
    ['\t', ',', ';'].into_iter().find(|&d| line.contains(d))
}

/// Is this the header line of a table? It is if no field is a number, or if
/// any field names a column we'd look for.
fn looks_like_header(fields: &[&str], options: &ReadOptions) -> bool {
    let is_column_name = |field: &str| {
        AZIMUTH_NAMES
            .iter()
            .chain(DIP_NAMES.iter())
            .any(|n| field.eq_ignore_ascii_case(n))
            || [&options.azimuth_column, &options.dip_column]
                .into_iter()
                .any(|c| matches!(c, Some(ColumnSelector::Name(name)) if field.eq_ignore_ascii_case(name)))
    };

    fields.iter().all(|f| f.parse::<f64>().is_err()) || fields.iter().any(|f| is_column_name(f))
}

/// Parse a buffer containing a delimited table into azimuths and dips.
pub(crate) fn parse_directions<T: BufRead>(
    buf: &mut T,
    options: &ReadOptions,
) -> Result<DirectionColumns, ReadDirectionsError> {
    let mut line = String::new();
    let mut line_num: usize = 0;
    // The outer option is whether the delimiter is known yet; `Some(None)`
    // means fields are separated by whitespace.
    let mut delimiter: Option<Option<char>> = options.delimiter.map(Some);
    // The azimuth and dip column indices, once they are known.
    let mut columns: Option<(usize, usize)> = None;
    let mut data = DirectionColumns::default();

    let parse_float = |string: &str, line_num: usize| -> Result<f64, ReadDirectionsError> {
        string
            .parse()
            .map_err(|_| ReadDirectionsError::ParseFloat {
                line_num,
                string: string.to_string(),
            })
    };

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        if line_num <= options.skip_rows {
            line.clear();
            continue;
        }

        // Ignore comments and blank lines.
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            line.clear();
            continue;
        }

        let delimiter = *delimiter.get_or_insert_with(|| {
            let d = guess_delimiter(trimmed);
            trace!("Guessed delimiter {d:?}");
            d
        });
        let fields = split_line(trimmed, delimiter);

        let (i_az, i_dip) = match columns {
            Some(c) => c,
            None => {
                let is_header = looks_like_header(&fields, options);
                let c = find_columns(&fields, is_header, options)?;
                debug!("Azimuth column {}, dip column {}", c.0, c.1);
                columns = Some(c);
                if is_header {
                    line.clear();
                    continue;
                }
                c
            }
        };

        let expected = i_az.max(i_dip) + 1;
        if fields.len() < expected {
            return Err(ReadDirectionsError::MissingField {
                line_num,
                expected,
                found: fields.len(),
            });
        }
        data.azimuths.push(parse_float(fields[i_az], line_num)?);
        data.dips.push(parse_float(fields[i_dip], line_num)?);

        line.clear();
    }

    if data.is_empty() {
        return Err(ReadDirectionsError::NoData);
    }

    preview(&data);
    Ok(data)
}

/// Work out which columns hold the azimuths and dips.
fn find_columns(
    fields: &[&str],
    is_header: bool,
    options: &ReadOptions,
) -> Result<(usize, usize), ReadDirectionsError> {
    let find = |selector: Option<&ColumnSelector>,
                default_names: &[&str],
                default_index: usize|
     -> Result<usize, ReadDirectionsError> {
        match (selector, is_header) {
            (Some(ColumnSelector::Index(i)), _) => Ok(*i),
            (Some(ColumnSelector::Name(name)), true) => fields
                .iter()
                .position(|f| f.eq_ignore_ascii_case(name))
                .ok_or_else(|| ReadDirectionsError::NoColumn(name.clone())),
            (Some(ColumnSelector::Name(name)), false) => {
                Err(ReadDirectionsError::NoHeader(name.clone()))
            }
            (None, true) => fields
                .iter()
                .position(|f| default_names.iter().any(|n| f.eq_ignore_ascii_case(n)))
                .ok_or_else(|| ReadDirectionsError::NoColumn(default_names[0].to_string())),
            (None, false) => Ok(default_index),
        }
    };

    let i_az = find(options.azimuth_column.as_ref(), &AZIMUTH_NAMES, 0)?;
    let i_dip = find(options.dip_column.as_ref(), &DIP_NAMES, 1)?;
    Ok((i_az, i_dip))
}

/// Log a quick view of the data at each end of the table.
fn preview(data: &DirectionColumns) {
    let n = data.len();
    debug!("Read {n} directions (azimuth, dip):");
    let rows = data.azimuths.iter().zip(data.dips.iter()).enumerate();
    for (i, (az, dip)) in rows {
        if i < NUM_PREVIEW_ROWS || i + NUM_PREVIEW_ROWS >= n {
            debug!("{i:>6}: {az:>8.2} {dip:>6.2}");
        } else if i == NUM_PREVIEW_ROWS {
            debug!("   ...");
        }
    }
}
