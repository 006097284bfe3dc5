// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all stereoplot-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{common::InputDataArgsError, plot::PlotArgsError, vector_mean::VectorMeanArgsError};
use crate::{
    io::ReadDirectionsError,
    params::{ProjectError, VectorMeanError},
    projection::ProjectionError,
    stats::MeanVectorError,
};

/// The *only* publicly visible error from stereoplot. Each error message should
/// include a pointer to more help, unless it's "generic".
#[derive(Error, Debug)]
pub enum StereoplotError {
    /// An error related to vector-mean.
    #[error("{0}\n\nSee for more info: stereoplot vector-mean --help")]
    VectorMean(String),

    /// An error related to project.
    #[error("{0}\n\nSee for more info: stereoplot project --help")]
    Project(String),

    /// An error related to plot.
    #[error("{0}\n\nSee for more info: stereoplot plot --help")]
    Plot(String),

    /// An error related to reading azimuths and dips.
    #[error("{0}\n\nData files are .txt or .csv tables with azimuth and dip columns [degrees]. Columns can be selected with --azimuth-column and --dip-column.")]
    InputData(String),

    /// An error related to projection kinds.
    #[error("{0}\n\nSpecify the projection with --kind.")]
    Projection(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON files with the same names as the command-line arguments.")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<VectorMeanArgsError> for StereoplotError {
    fn from(e: VectorMeanArgsError) -> Self {
        Self::VectorMean(e.to_string())
    }
}

impl From<PlotArgsError> for StereoplotError {
    fn from(e: PlotArgsError) -> Self {
        Self::Plot(e.to_string())
    }
}

impl From<InputDataArgsError> for StereoplotError {
    fn from(e: InputDataArgsError) -> Self {
        let s = e.to_string();
        match e {
            InputDataArgsError::NoInput
            | InputDataArgsError::BothInputs
            | InputDataArgsError::MissingAzimuths
            | InputDataArgsError::MissingDips => Self::InputData(s),
            InputDataArgsError::Read(e) => Self::from(e),
            InputDataArgsError::Sample(e) => Self::from(e),
        }
    }
}

// Library errors.

impl From<ReadDirectionsError> for StereoplotError {
    fn from(e: ReadDirectionsError) -> Self {
        let s = e.to_string();
        match e {
            ReadDirectionsError::UnrecognisedExtension(_)
            | ReadDirectionsError::NoData
            | ReadDirectionsError::NoColumn(_)
            | ReadDirectionsError::NoHeader(_)
            | ReadDirectionsError::MissingField { .. }
            | ReadDirectionsError::ParseFloat { .. } => Self::InputData(s),
            ReadDirectionsError::IO(e) => Self::from(e),
        }
    }
}

impl From<MeanVectorError> for StereoplotError {
    fn from(e: MeanVectorError) -> Self {
        let s = e.to_string();
        match e {
            MeanVectorError::EmptySample | MeanVectorError::LengthMismatch { .. } => {
                Self::InputData(s)
            }
            MeanVectorError::InvalidConfidence(_) => Self::VectorMean(s),
        }
    }
}

impl From<ProjectionError> for StereoplotError {
    fn from(e: ProjectionError) -> Self {
        let s = e.to_string();
        match e {
            ProjectionError::UnknownKind(_) => Self::Projection(s),
            ProjectionError::LengthMismatch { .. } => Self::InputData(s),
        }
    }
}

impl From<VectorMeanError> for StereoplotError {
    fn from(e: VectorMeanError) -> Self {
        match e {
            VectorMeanError::MeanVector(e) => Self::from(e),
            VectorMeanError::Json(e) => Self::VectorMean(e.to_string()),
            VectorMeanError::IO(e) => Self::from(e),
        }
    }
}

impl From<ProjectError> for StereoplotError {
    fn from(e: ProjectError) -> Self {
        match e {
            ProjectError::Projection(e) => Self::from(e),
            ProjectError::IO(e) => Self::from(e),
        }
    }
}

#[cfg(feature = "plotting")]
impl From<crate::params::PlotError> for StereoplotError {
    fn from(e: crate::params::PlotError) -> Self {
        use crate::{params::PlotError, plotting::DrawError};

        match e {
            PlotError::Draw(DrawError::Projection(e)) => Self::from(e),
            PlotError::Draw(e) => Self::Plot(e.to_string()),
            PlotError::MeanVector(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for StereoplotError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
