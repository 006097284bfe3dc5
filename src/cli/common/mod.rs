// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Every `stereoplot`
//! subcommand takes azimuths and dips as input, so the same input arguments
//! are shared between them.

mod printers;

pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    constants::DEFAULT_CONFIDENCE,
    io::{read_directions, ColumnSelector, DirectionColumns, ReadDirectionsError, ReadOptions},
    params::InputDataParams,
    projection::{ProjectionKind, PROJECTION_KINDS_COMMA_SEPARATED},
    stats::MeanVectorError,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref PROJECTION_KIND_HELP: String =
        format!("The kind of projection. Valid kinds are: {}. Default: {}", *PROJECTION_KINDS_COMMA_SEPARATED, ProjectionKind::default());

    pub(super) static ref CONFIDENCE_HELP: String =
        format!("The level of confidence for the cone of confidence about the mean [percent]. Must be between 0 and 100 (exclusive). Default: {DEFAULT_CONFIDENCE}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(StereoplotError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(StereoplotError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(StereoplotError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct InputDataArgs {
    /// Path to a table of azimuths and dips [degrees]. Supported formats: txt,
    /// csv.
    #[clap(short = 'd', long = "data", parse(from_os_str), help_heading = "INPUT DATA")]
    pub(super) file: Option<PathBuf>,

    /// Azimuths of lines [degrees]. Used instead of a data file; --dips must
    /// also be given.
    #[clap(long, multiple_values(true), help_heading = "INPUT DATA")]
    pub(super) azimuths: Option<Vec<f64>>,

    /// Dips of lines [degrees]. Used instead of a data file; --azimuths must
    /// also be given.
    #[clap(long, multiple_values(true), help_heading = "INPUT DATA")]
    pub(super) dips: Option<Vec<f64>>,

    /// The field delimiter of the data file. The default is to guess from the
    /// first line (tab, comma, semicolon, then whitespace).
    #[clap(long, help_heading = "INPUT DATA")]
    pub(super) delimiter: Option<char>,

    /// The number of lines to skip at the start of the data file.
    #[clap(long, help_heading = "INPUT DATA")]
    pub(super) skip_rows: Option<usize>,

    /// The name or zero-based index of the azimuth column. The default is a
    /// column named "azimuth" (or "trend"), otherwise the first column.
    #[clap(long, help_heading = "INPUT DATA")]
    pub(super) azimuth_column: Option<String>,

    /// The name or zero-based index of the dip column. The default is a column
    /// named "dip" (or "plunge"), otherwise the second column.
    #[clap(long, help_heading = "INPUT DATA")]
    pub(super) dip_column: Option<String>,
}

impl InputDataArgs {
    /// Merge two sets of input arguments, preferring `self`.
    pub(super) fn merge(self, other: Self) -> Self {
        InputDataArgs {
            file: self.file.or(other.file),
            azimuths: self.azimuths.or(other.azimuths),
            dips: self.dips.or(other.dips),
            delimiter: self.delimiter.or(other.delimiter),
            skip_rows: self.skip_rows.or(other.skip_rows),
            azimuth_column: self.azimuth_column.or(other.azimuth_column),
            dip_column: self.dip_column.or(other.dip_column),
        }
    }

    pub(super) fn parse(self, operation_verb: &str) -> Result<InputDataParams, InputDataArgsError> {
        let InputDataArgs {
            file,
            azimuths,
            dips,
            delimiter,
            skip_rows,
            azimuth_column,
            dip_column,
        } = self;

        let mut printer = InfoPrinter::new(format!("{operation_verb} directions").into());
        let columns = match (file, azimuths, dips) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(InputDataArgsError::BothInputs)
            }

            (Some(file), None, None) => {
                let options = ReadOptions {
                    delimiter,
                    skip_rows: skip_rows.unwrap_or(0),
                    azimuth_column: azimuth_column.as_deref().map(ColumnSelector::from),
                    dip_column: dip_column.as_deref().map(ColumnSelector::from),
                };
                debug!("{options:?}");
                let columns = read_directions(&file, &options)?;
                printer.push_line(format!("From file: {}", file.display()).into());
                columns
            }

            (None, Some(azimuths), Some(dips)) => {
                if delimiter.is_some()
                    || skip_rows.is_some()
                    || azimuth_column.is_some()
                    || dip_column.is_some()
                {
                    "Ignoring data file options, because azimuths and dips were given directly"
                        .warn();
                }
                printer.push_line("From the command line".into());
                DirectionColumns { azimuths, dips }
            }

            (None, Some(_), None) => return Err(InputDataArgsError::MissingDips),
            (None, None, Some(_)) => return Err(InputDataArgsError::MissingAzimuths),
            (None, None, None) => return Err(InputDataArgsError::NoInput),
        };
        let directions = columns.to_direction_set()?;
        printer.push_line(format!("Number of directions: {}", directions.len()).into());

        let num_out_of_range = columns
            .dips
            .iter()
            .filter(|&&d| !(0.0..=90.0).contains(&d))
            .count();
        if num_out_of_range > 0 {
            format!("{num_out_of_range} dips are outside of [0°, 90°]; these won't project inside the primitive circle")
                .warn();
        }
        printer.display();

        Ok(InputDataParams {
            columns,
            directions,
        })
    }
}

#[derive(Error, Debug)]
pub(super) enum InputDataArgsError {
    #[error("No input directions were given! Supply a data file with --data, or both --azimuths and --dips")]
    NoInput,

    #[error("Both a data file and command-line azimuths/dips were given; only one can be used")]
    BothInputs,

    #[error("Dips were given, but no azimuths")]
    MissingAzimuths,

    #[error("Azimuths were given, but no dips")]
    MissingDips,

    #[error(transparent)]
    Read(#[from] ReadDirectionsError),

    #[error(transparent)]
    Sample(#[from] MeanVectorError),
}
