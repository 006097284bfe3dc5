// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, InputDataArgs, ARG_FILE_HELP, PROJECTION_KIND_HELP};
use crate::{params::ProjectParams, projection::ProjectionKind, StereoplotError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct ProjectArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "data")]
    #[serde(default)]
    pub(super) data_args: InputDataArgs,

    #[clap(short, long, help = PROJECTION_KIND_HELP.as_str())]
    pub(super) kind: Option<String>,
}

impl ProjectArgs {
    pub(super) fn merge(self) -> Result<ProjectArgs, StereoplotError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let ProjectArgs {
                args_file: _,
                data_args,
                kind,
            } = unpack_arg_file!(arg_file);

            Ok(ProjectArgs {
                args_file: None,
                data_args: cli_args.data_args.merge(data_args),
                kind: cli_args.kind.or(kind),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<ProjectParams, StereoplotError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            data_args,
            kind,
        } = self;

        let kind = match kind {
            Some(k) => ProjectionKind::parse(&k)?,
            None => ProjectionKind::default(),
        };
        let input_data_params = data_args.parse("Projecting")?;

        display_warnings();

        Ok(ProjectParams {
            input_data_params,
            kind,
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

        params.run(std::io::stdout().lock())?;
        Ok(())
    }
}
