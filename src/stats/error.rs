// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MeanVectorError {
    #[error("Cannot take the mean of an empty sample")]
    EmptySample,

    #[error("Got {azimuths} azimuths but {dips} dips; these must be the same length")]
    LengthMismatch { azimuths: usize, dips: usize },

    #[error("The level of confidence must be between 0 and 100 percent (exclusive), but got {0}")]
    InvalidConfidence(f64),
}
