// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Stereographic projections and Fisher statistics of lines (e.g. geological
lineations), with optional stereonet plotting.

The core is pure: project azimuth/dip pairs onto the equal-area or equal-angle
disk, and aggregate lines into a mean direction with a concentration factor and
a cone of confidence. Plotting (behind the "plotting" feature) always draws on a
caller-supplied `plotters` drawing area.
 */

mod cli;
pub mod constants;
pub mod coord;
pub mod io;
pub mod math;
pub(crate) mod params;
#[cfg(feature = "plotting")]
pub mod plotting;
pub mod projection;
pub mod stats;

// Re-exports.
pub use cli::{Stereoplot, StereoplotError};
pub use coord::{Direction, DirectionCosines};
pub use projection::{project, project_array, ProjectionKind};
pub use stats::{mean_vector, mean_vector_default, DirectionSet, MeanVector, Significance};
