// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Draw stereonets with `plotters`.
//!
//! Every function here takes the drawing area (or chart) to draw on; there is
//! no "current" figure. Charts are in disk coordinates, i.e. the primitive
//! circle has unit radius and is centred on the origin.


use log::trace;
use ndarray::ArrayView1;
use plotters::{
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    prelude::*,
};
use thiserror::Error;

use crate::{
    constants::TAU,
    coord::{small_circle, DirectionCosines},
    projection::{project, project_array, ProjectionError, ProjectionKind},
    stats::MeanVector,
};

/// A chart whose coordinates are those of the projection disk.
pub type StereonetChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// The number of line segments used to draw the primitive circle.
const CIRCLE_SEGMENTS: usize = 360;
/// The number of points used to draw a cone of confidence.
const CONE_POINTS: usize = 180;
/// Half the width of the "+" at the centre of the net [disk units].
const CENTRE_MARKER_SIZE: f64 = 0.03;
/// The margin around a stereonet [pixels].
const NET_MARGIN: i32 = 5;

const LABEL_FONT_SIZE: i32 = 14;
const LABEL_LINE_HEIGHT: i32 = 16;
const LABEL_MARGIN: i32 = 4;

/// How markers are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub colour: RGBColor,

    /// The radius of the marker [pixels].
    pub size: u32,

    /// Hollow markers are drawn when this is false.
    pub filled: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            colour: BLACK,
            size: 3,
            filled: true,
        }
    }
}

impl MarkerStyle {
    fn shape_style(&self) -> ShapeStyle {
        let style = ShapeStyle::from(&self.colour);
        if self.filled {
            style.filled()
        } else {
            style
        }
    }
}

/// Get the largest square drawing area centred in `area`. Stereonets are
/// circles, so they should be drawn on square areas.
pub fn square_area<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> DrawingArea<DB, Shift> {
    let (width, height) = area.dim_in_pixel();
    let side = width.min(height);
    let dx = ((width - side) / 2) as i32;
    let dy = ((height - side) / 2) as i32;
    area.margin(dy, dy, dx, dx)
}

/// Draw the primitive circle and a "+" at its centre. The returned chart is
/// used to draw anything else on the net.
pub fn draw_stereonet<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
) -> Result<StereonetChart<'_, DB>, DrawError> {
    let mut chart = ChartBuilder::on(area)
        .margin(NET_MARGIN)
        .build_cartesian_2d(-1.0_f64..1.0_f64, -1.0_f64..1.0_f64)
        .map_err(|e| DrawError::Stereonet(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            (0..=CIRCLE_SEGMENTS).map(|i| {
                let theta = i as f64 / CIRCLE_SEGMENTS as f64 * TAU;
                (theta.sin(), theta.cos())
            }),
            &BLACK,
        ))
        .map_err(|e| DrawError::Stereonet(e.to_string()))?;

    let c = CENTRE_MARKER_SIZE;
    chart
        .draw_series([
            PathElement::new(vec![(-c, 0.0), (c, 0.0)], &BLACK),
            PathElement::new(vec![(0.0, -c), (0.0, c)], &BLACK),
        ])
        .map_err(|e| DrawError::Stereonet(e.to_string()))?;

    Ok(chart)
}

/// Project lines and draw them as markers on a stereonet.
pub fn plot_directions<DB: DrawingBackend>(
    chart: &mut StereonetChart<'_, DB>,
    kind: ProjectionKind,
    azimuths: &[f64],
    dips: &[f64],
    style: &MarkerStyle,
) -> Result<(), DrawError> {
    let (xs, ys) = project_array(kind, ArrayView1::from(azimuths), ArrayView1::from(dips))?;
    trace!("Plotting {} directions", xs.len());

    chart
        .draw_series(PointSeries::of_element(
            xs.into_iter().zip(ys),
            style.size,
            style.shape_style(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))
        .map_err(|e| DrawError::Directions(e.to_string()))?;

    Ok(())
}

/// Mark a mean direction on a stereonet. If the mean has a cone of
/// confidence, its outline is drawn too; where the cone pokes through to the
/// upper hemisphere, the lower-hemisphere image of that part is drawn.
pub fn plot_mean<DB: DrawingBackend>(
    chart: &mut StereonetChart<'_, DB>,
    kind: ProjectionKind,
    mean: &MeanVector,
    style: &MarkerStyle,
) -> Result<(), DrawError> {
    let (x, y) = project(kind, mean.direction.azimuth, mean.direction.dip);
    chart
        .draw_series(std::iter::once(
            EmptyElement::at((x, y)) + Circle::new((0, 0), style.size, style.shape_style()),
        ))
        .map_err(|e| DrawError::Directions(e.to_string()))?;

    if let Some(cone_angle) = mean.cone_angle {
        let cone = small_circle(mean.direction, cone_angle, CONE_POINTS);
        let antipodes: Vec<DirectionCosines> = cone.iter().map(|&c| -c).collect();
        for run in lower_hemisphere_runs(&cone)
            .into_iter()
            .chain(lower_hemisphere_runs(&antipodes))
        {
            let points = run.into_iter().map(|c| {
                let d = c.to_direction();
                project(kind, d.azimuth, d.dip)
            });
            chart
                .draw_series(LineSeries::new(points, &style.colour))
                .map_err(|e| DrawError::Directions(e.to_string()))?;
        }
    }

    Ok(())
}

/// Split a closed loop of points into the runs that are in the lower
/// hemisphere (down >= 0). If the whole loop is in the lower hemisphere, a
/// single closed run is returned.
pub(crate) fn lower_hemisphere_runs(points: &[DirectionCosines]) -> Vec<Vec<DirectionCosines>> {
    if points.is_empty() {
        return vec![];
    }
    let Some(start) = points.iter().position(|c| c.down < 0.0) else {
        let mut run = points.to_vec();
        run.push(points[0]);
        return vec![run];
    };

    // Starting on an upper point means no lower run wraps around the end.
    let mut runs = vec![];
    let mut current = vec![];
    for &c in points[start..].iter().chain(&points[..start]) {
        if c.down >= 0.0 {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Write the name of the projection in the lower-left corner of `area`.
pub fn draw_projection_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    kind: ProjectionKind,
) -> Result<(), DrawError> {
    let (_, height) = area.dim_in_pixel();
    let style = ("sans-serif", LABEL_FONT_SIZE).into_font().color(&BLACK);
    for (i, line) in kind.caption().lines().rev().enumerate() {
        let y = height as i32 - LABEL_MARGIN - (i as i32 + 1) * LABEL_LINE_HEIGHT;
        area.draw_text(line, &style, (LABEL_MARGIN, y))
            .map_err(|e| DrawError::Label(e.to_string()))?;
    }
    Ok(())
}

/// Split `area` into a grid of square areas, one per stereonet, in row-major
/// order.
pub fn stereonet_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    nrows: usize,
    ncols: usize,
) -> Result<Vec<DrawingArea<DB, Shift>>, DrawError> {
    if nrows == 0 || ncols == 0 {
        return Err(DrawError::EmptyGrid { nrows, ncols });
    }
    Ok(area
        .split_evenly((nrows, ncols))
        .iter()
        .map(square_area)
        .collect())
}

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("While drawing the stereonet: {0}")]
    Stereonet(String),

    #[error("While plotting directions: {0}")]
    Directions(String),

    #[error("While drawing the projection label: {0}")]
    Label(String),

    #[error("Can't make a grid of stereonets with {nrows} rows and {ncols} columns")]
    EmptyGrid { nrows: usize, ncols: usize },

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),
}
