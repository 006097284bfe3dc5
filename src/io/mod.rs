// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for file input.

mod error;
pub mod read;

pub use error::ReadDirectionsError;
pub use read::{read_directions, ColumnSelector, DirectionColumns, ReadOptions};
