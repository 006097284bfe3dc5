// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::{debug, info};
use plotters::prelude::*;
use thiserror::Error;

use super::InputDataParams;
use crate::{
    plotting::{
        draw_projection_label, draw_stereonet, plot_directions, plot_mean, square_area,
        DrawError, MarkerStyle,
    },
    projection::ProjectionKind,
    stats::{mean_vector, MeanVectorError},
};

pub(crate) struct PlotParams {
    pub(crate) input_data_params: InputDataParams,
    pub(crate) kind: ProjectionKind,
    pub(crate) output: PathBuf,

    /// The side length of the (square) image [pixels].
    pub(crate) size: u32,

    /// If this is set, the mean direction and its cone (for this level of
    /// confidence [percent]) are also drawn.
    pub(crate) mean_confidence: Option<f64>,

    pub(crate) label: bool,
}

impl PlotParams {
    pub(crate) fn run(&self) -> Result<(), PlotError> {
        let PlotParams {
            input_data_params,
            kind,
            output,
            size,
            mean_confidence,
            label,
        } = self;

        let root = BitMapBackend::new(output, (*size, *size)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;

        let net_area = square_area(&root);
        let mut chart = draw_stereonet(&net_area)?;
        let columns = &input_data_params.columns;
        debug!("Plotting {} directions", columns.len());
        plot_directions(
            &mut chart,
            *kind,
            &columns.azimuths,
            &columns.dips,
            &MarkerStyle::default(),
        )?;

        if let Some(confidence) = mean_confidence {
            let mean = mean_vector(&input_data_params.directions, *confidence)?;
            let style = MarkerStyle {
                colour: RED,
                size: 5,
                filled: true,
            };
            plot_mean(&mut chart, *kind, &mean, &style)?;
        }

        if *label {
            draw_projection_label(&root, *kind)?;
        }

        root.present()
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        info!("Wrote {}", output.display());
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(crate) enum PlotError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    MeanVector(#[from] MeanVectorError),
}
