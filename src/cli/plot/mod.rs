// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to draw stereonets.

mod error;

pub(crate) use error::PlotArgsError;

use std::path::PathBuf;

use clap::Parser;
use log::debug;
use serde::{Deserialize, Serialize};

use super::common::{InputDataArgs, ARG_FILE_HELP, CONFIDENCE_HELP, PROJECTION_KIND_HELP};
use crate::StereoplotError;

/// The default output file.
#[cfg(feature = "plotting")]
const DEFAULT_OUTPUT: &str = "stereonet.png";
/// The default side length of the image [pixels].
#[cfg(feature = "plotting")]
const DEFAULT_SIZE: u32 = 800;

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct PlotArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "data")]
    #[serde(default)]
    pub(super) data_args: InputDataArgs,

    #[clap(short, long, help = PROJECTION_KIND_HELP.as_str())]
    pub(super) kind: Option<String>,

    /// Also draw the mean direction and its cone of confidence.
    #[clap(long)]
    #[serde(default)]
    pub(super) mean: bool,

    #[clap(short, long, help = CONFIDENCE_HELP.as_str())]
    pub(super) confidence: Option<f64>,

    /// Don't write the name of the projection on the plot. This avoids
    /// needing fonts.
    #[clap(long)]
    #[serde(default)]
    pub(super) no_label: bool,

    /// The path to the output PNG file. Default: stereonet.png
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    /// The width and height of the output image [pixels]. Default: 800
    #[clap(long, help_heading = "OUTPUT FILES")]
    pub(super) size: Option<u32>,
}

impl PlotArgs {
    pub(super) fn merge(self) -> Result<PlotArgs, StereoplotError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let PlotArgs {
                args_file: _,
                data_args,
                kind,
                mean,
                confidence,
                no_label,
                output,
                size,
            } = unpack_arg_file!(arg_file);

            Ok(PlotArgs {
                args_file: None,
                data_args: cli_args.data_args.merge(data_args),
                kind: cli_args.kind.or(kind),
                mean: cli_args.mean || mean,
                confidence: cli_args.confidence.or(confidence),
                no_label: cli_args.no_label || no_label,
                output: cli_args.output.or(output),
                size: cli_args.size.or(size),
            })
        } else {
            Ok(cli_args)
        }
    }

    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self, _dry_run: bool) -> Result<(), StereoplotError> {
        // Plotting is an optional feature. If it isn't available, tell the
        // user that they'll need to compile stereoplot with it.
        Err(PlotArgsError::NoPlottingFeature.into())
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self, dry_run: bool) -> Result<(), StereoplotError> {
        use log::{info, trace};

        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }

    #[cfg(feature = "plotting")]
    fn parse(self) -> Result<crate::params::PlotParams, StereoplotError> {
        use super::common::display_warnings;
        use crate::{constants::DEFAULT_CONFIDENCE, params::PlotParams, projection::ProjectionKind};

        debug!("{:#?}", self);

        let Self {
            args_file: _,
            data_args,
            kind,
            mean,
            confidence,
            no_label,
            output,
            size,
        } = self;

        let kind = match kind {
            Some(k) => ProjectionKind::parse(&k)?,
            None => ProjectionKind::default(),
        };

        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let is_png = output
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return Err(PlotArgsError::BadOutputExtension(output).into());
        }

        let size = size.unwrap_or(DEFAULT_SIZE);
        if size == 0 {
            return Err(PlotArgsError::ZeroSize.into());
        }

        let mean_confidence = match (mean, confidence) {
            (true, c) => {
                let c = c.unwrap_or(DEFAULT_CONFIDENCE);
                if !(c.is_finite() && c > 0.0 && c < 100.0) {
                    return Err(PlotArgsError::InvalidConfidence(c).into());
                }
                Some(c)
            }
            (false, Some(_)) => {
                use super::Warn;
                "A level of confidence was given, but the mean isn't being plotted (--mean)"
                    .warn();
                None
            }
            (false, None) => None,
        };

        let input_data_params = data_args.parse("Plotting")?;

        display_warnings();

        Ok(PlotParams {
            input_data_params,
            kind,
            output,
            size,
            mean_confidence,
            label: !no_label,
        })
    }
}
