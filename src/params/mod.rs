// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for the `stereoplot` subcommands.
//!
//! The code here "mirrors" the code within the `cli` module; `cli` is
//! unparsed, user-facing code, whereas parameters have been parsed and are
//! ready to be used directly.

mod input_data;
#[cfg(feature = "plotting")]
mod plot;
mod project;
mod vector_mean;

pub(crate) use input_data::InputDataParams;
#[cfg(feature = "plotting")]
pub(crate) use plot::{PlotError, PlotParams};
pub(crate) use project::{ProjectError, ProjectParams};
pub(crate) use vector_mean::{VectorMeanError, VectorMeanParams};
