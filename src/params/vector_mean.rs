// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use log::info;
use thiserror::Error;

use super::InputDataParams;
use crate::{
    cli::{InfoPrinter, Warn},
    stats::{mean_vector, MeanVector, MeanVectorError},
};

pub(crate) struct VectorMeanParams {
    pub(crate) input_data_params: InputDataParams,

    /// The level of confidence for the cone of confidence [percent].
    pub(crate) confidence: f64,

    /// Where to write the results as JSON, if anywhere.
    pub(crate) output: Option<PathBuf>,
}

impl VectorMeanParams {
    pub(crate) fn run(&self) -> Result<MeanVector, VectorMeanError> {
        let mean = mean_vector(&self.input_data_params.directions, self.confidence)?;
        report(&mean);

        if let Some(output) = &self.output {
            let mut f = BufWriter::new(File::create(output)?);
            serde_json::to_writer_pretty(&mut f, &mean)?;
            writeln!(f)?;
            f.flush()?;
            info!("Wrote the mean vector to {}", output.display());
        }

        Ok(mean)
    }
}

fn report(mean: &MeanVector) {
    fn or_undefined(v: Option<f64>, unit: &str) -> String {
        match v {
            Some(v) => format!("{v:.4}{unit}"),
            None => "undefined".to_string(),
        }
    }

    let mut printer = InfoPrinter::new("Mean vector".into());
    printer.push_block(vec![
        format!(
            "Azimuth: {:.2}°, dip: {:.2}°",
            mean.direction.azimuth, mean.direction.dip
        )
        .into(),
        format!("({})", mean.direction).into(),
    ]);
    printer.push_block(vec![
        format!("Number of directions (n): {}", mean.num_directions).into(),
        format!("Resultant length (R): {:.6}", mean.resultant_length).into(),
        format!("Mean resultant length (R/n): {:.6}", mean.rave).into(),
    ]);
    printer.push_block(vec![
        format!(
            "Concentration factor (κ): {}",
            or_undefined(mean.concentration, "")
        )
        .into(),
        format!(
            "Cone of confidence ({}%): {}",
            mean.confidence,
            or_undefined(mean.cone_angle, "°")
        )
        .into(),
    ]);
    printer.display();

    if !mean.is_significant() {
        format!(
            "The mean resultant length ({:.4}) is very small; the mean direction is not significant",
            mean.rave
        )
        .warn();
    }
}

#[derive(Error, Debug)]
pub(crate) enum VectorMeanError {
    #[error(transparent)]
    MeanVector(#[from] MeanVectorError),

    #[error("Couldn't write the mean vector as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
