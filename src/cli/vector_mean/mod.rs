// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{display_warnings, InputDataArgs, ARG_FILE_HELP, CONFIDENCE_HELP};
use crate::{constants::DEFAULT_CONFIDENCE, params::VectorMeanParams, StereoplotError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct VectorMeanArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "data")]
    #[serde(default)]
    pub(super) data_args: InputDataArgs,

    #[clap(short, long, help = CONFIDENCE_HELP.as_str())]
    pub(super) confidence: Option<f64>,

    /// Also write the results to this JSON file.
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl VectorMeanArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<VectorMeanArgs, StereoplotError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let VectorMeanArgs {
                args_file: _,
                data_args,
                confidence,
                output,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(VectorMeanArgs {
                args_file: None,
                data_args: cli_args.data_args.merge(data_args),
                confidence: cli_args.confidence.or(confidence),
                output: cli_args.output.or(output),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<VectorMeanParams, StereoplotError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            data_args,
            confidence,
            output,
        } = self;

        let confidence = confidence.unwrap_or(DEFAULT_CONFIDENCE);
        if !(confidence.is_finite() && confidence > 0.0 && confidence < 100.0) {
            return Err(VectorMeanArgsError::InvalidConfidence(confidence).into());
        }
        if let Some(output) = &output {
            let is_json = output
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                return Err(VectorMeanArgsError::BadOutputExtension(output.clone()).into());
            }
        }

        let input_data_params = data_args.parse("Averaging")?;

        display_warnings();

        Ok(VectorMeanParams {
            input_data_params,
            confidence,
            output,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), StereoplotError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        display_warnings();
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum VectorMeanArgsError {
    #[error("The level of confidence must be between 0 and 100 (exclusive), but got {0}")]
    InvalidConfidence(f64),

    #[error("The output file '{}' must have a .json extension", .0.display())]
    BadOutputExtension(PathBuf),
}
