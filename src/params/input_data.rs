// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{io::DirectionColumns, stats::DirectionSet};

/// Directions ready to be projected or aggregated.
pub(crate) struct InputDataParams {
    /// The azimuths and dips as they were read [degrees].
    pub(crate) columns: DirectionColumns,

    /// The same directions as a non-empty sample.
    pub(crate) directions: DirectionSet,
}
