// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with projecting lines.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Unknown projection kind '{0}'. Valid kinds are: {}", *super::PROJECTION_KINDS_COMMA_SEPARATED)]
    UnknownKind(String),

    #[error("Got {azimuths} azimuths but {dips} dips; these must be the same length")]
    LengthMismatch { azimuths: usize, dips: usize },
}
