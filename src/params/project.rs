// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{BufWriter, Write};

use log::debug;
use ndarray::ArrayView1;
use thiserror::Error;

use super::InputDataParams;
use crate::projection::{project_array, ProjectionError, ProjectionKind};

pub(crate) struct ProjectParams {
    pub(crate) input_data_params: InputDataParams,
    pub(crate) kind: ProjectionKind,
}

impl ProjectParams {
    /// Project all of the directions and write "x y" lines to `out`.
    pub(crate) fn run<W: Write>(&self, out: W) -> Result<(), ProjectError> {
        let columns = &self.input_data_params.columns;
        debug!("Projecting {} directions ({})", columns.len(), self.kind);
        let (xs, ys) = project_array(
            self.kind,
            ArrayView1::from(columns.azimuths.as_slice()),
            ArrayView1::from(columns.dips.as_slice()),
        )?;

        let mut out = BufWriter::new(out);
        for (x, y) in xs.iter().zip(ys.iter()) {
            writeln!(out, "{x} {y}")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(crate) enum ProjectError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
