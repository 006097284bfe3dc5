// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PlotArgsError {
    #[cfg(not(feature = "plotting"))]
    #[error("stereoplot was not compiled with the \"plotting\" feature.\nYou need to compile stereoplot from source with this feature to draw stereonets.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("The output file '{}' must have a .png extension", .0.display())]
    BadOutputExtension(std::path::PathBuf),

    #[cfg(feature = "plotting")]
    #[error("The image size must be bigger than 0 pixels")]
    ZeroSize,

    #[cfg(feature = "plotting")]
    #[error("The level of confidence must be between 0 and 100 (exclusive), but got {0}")]
    InvalidConfidence(f64),
}
