// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `stereoplot` command line. Each subcommand lives in its own module.
//!
//! Subcommand arguments are all `Option`s (or `#[serde(default)]` booleans) so
//! that any of them can come from an arguments file instead.

#[macro_use]
mod common;
mod error;
mod plot;
mod project;
mod vector_mean;

pub(crate) use common::{InfoPrinter, Warn};
pub use error::StereoplotError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Stereographic projections and Fisher statistics of lines (azimuth/dip pairs).",
    global_setting(AppSettings::DeriveDisplayOrder),
    disable_help_subcommand = true,
    infer_subcommands = true,
    propagate_version = true,
    infer_long_args = true
)]
pub struct Stereoplot {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Log more detail. Repeat for even more (-vv shows trace messages).
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Read and check the inputs, then stop before computing anything.
    #[clap(long, global = true)]
    dry_run: bool,

    /// Write the merged arguments to this TOML file. It can be given back as an
    /// arguments file to repeat the run.
    #[clap(long, global = true)]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "mean")]
    #[clap(about = "Estimate the mean direction of lines and its Fisher statistics.")]
    VectorMean(vector_mean::VectorMeanArgs),

    #[clap(about = "Print the projected (x, y) coordinates of lines.")]
    Project(project::ProjectArgs),

    #[clap(
        about = r#"Draw lines on a stereonet. Only available if compiled with the "plotting" feature."#
    )]
    Plot(plot::PlotArgs),
}

impl Stereoplot {
    pub fn run(self) -> Result<(), StereoplotError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity)
            .map_err(|e| StereoplotError::Generic(format!("Failed to initialise logging: {e}")))?;

        let sub_command = match &self.command {
            Command::VectorMean(_) => "vector-mean",
            Command::Project(_) => "project",
            Command::Plot(_) => "plot",
        };
        info!("stereoplot {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        macro_rules! merge_save_run {
            ($args:expr) => {{
                let args = $args.merge()?;
                if let Some(toml) = save_toml {
                    use std::{
                        fs::File,
                        io::{BufWriter, Write},
                    };

                    let mut f = BufWriter::new(File::create(toml)?);
                    let toml_str = toml::to_string(&args).map_err(|e| {
                        StereoplotError::ArgFile(format!("Couldn't serialise arguments: {e}"))
                    })?;
                    f.write_all(toml_str.as_bytes())?;
                }
                args.run(dry_run)?;
            }};
        }

        match self.command {
            Command::VectorMean(args) => merge_save_run!(args),
            Command::Project(args) => merge_save_run!(args),
            Command::Plot(args) => merge_save_run!(args),
        }

        info!("stereoplot {} complete.", sub_command);
        Ok(())
    }
}

/// Install `env_logger`, writing to stdout. Each `-v` lowers the level filter
/// one step; from `-vvv` every message also shows its source location.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .filter_level(level);
    if verbosity >= 3 {
        builder.format(|buf, record| {
            use std::io::Write;

            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp(),
                record.level(),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    }
    builder.try_init()
}

/// Log the git commit, build time and compiler of this executable.
fn display_build_info() {
    let commit = match (GIT_COMMIT_HASH_SHORT, GIT_DIRTY) {
        (Some(hash), Some(true)) => format!("{hash} (dirty)"),
        (Some(hash), _) => hash.to_string(),
        (None, _) => "<no git info>".to_string(),
    };
    info!("Built from git commit {commit} at {BUILT_TIME_UTC}");
    debug!(
        "Compiler: {RUSTC_VERSION}, git head ref: {}",
        GIT_HEAD_REF.unwrap_or("<none>")
    );
}
