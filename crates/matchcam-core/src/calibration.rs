//! Calibration records exported by camera-matching tools.
//!
//! A calibration export describes the camera that took (or virtually
//! took) a source image: the image dimensions and a row-major 4x4
//! world transform whose upper-left 3x3 block is the camera rotation
//! and whose rightmost column carries the translation.

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::Deserialize;

use crate::error::{MatchcamError, Result};

/// Row-major transform block as stored in the export.
#[derive(Debug, Clone, Deserialize)]
struct RawTransform {
    rows: [[f32; 4]; 4],
}

/// On-disk shape of a calibration export.
///
/// Only the fields we read are modeled; the exporting tool writes many
/// more and unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalibration {
    camera_transform: RawTransform,
    image_width: u32,
    image_height: u32,
}

/// A validated camera calibration record.
///
/// Produced once by a [`CalibrationSource`](crate::CalibrationSource)
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationRecord {
    image_width: u32,
    image_height: u32,
    transform_rows: [[f32; 4]; 4],
}

impl CalibrationRecord {
    /// Creates a record from already-validated host data.
    ///
    /// Returns [`MatchcamError::MalformedData`] when a dimension is
    /// zero or the transform contains a non-finite entry.
    pub fn new(
        image_width: u32,
        image_height: u32,
        transform_rows: [[f32; 4]; 4],
    ) -> Result<Self> {
        let record = Self {
            image_width,
            image_height,
            transform_rows,
        };
        record.validate()?;
        Ok(record)
    }

    /// Parses a record from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCalibration = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Parses a record from a JSON reader.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let raw: RawCalibration = serde_json::from_reader(reader)?;
        Self::try_from(raw)
    }

    /// Parses a record from a dynamically-typed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawCalibration = serde_json::from_value(value)?;
        Self::try_from(raw)
    }

    fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(MatchcamError::MalformedData(format!(
                "image dimensions must be positive, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self
            .transform_rows
            .iter()
            .flatten()
            .any(|v| !v.is_finite())
        {
            return Err(MatchcamError::MalformedData(
                "camera transform contains a non-finite entry".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of the calibrated source image in pixels.
    #[must_use]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Height of the calibrated source image in pixels.
    #[must_use]
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Aspect ratio (width / height) of the calibrated source image.
    #[must_use]
    pub fn image_aspect(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// The raw row-major transform rows.
    #[must_use]
    pub fn transform_rows(&self) -> &[[f32; 4]; 4] {
        &self.transform_rows
    }

    /// The camera-to-world transform as a column-major [`Mat4`].
    ///
    /// The export stores rows, so the flattened sequence is loaded
    /// through a transpose.
    #[must_use]
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.transform_rows).transpose()
    }

    /// Camera position in world space (the translation column).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.transform_rows[0][3],
            self.transform_rows[1][3],
            self.transform_rows[2][3],
        )
    }

    /// Camera orientation from the upper-left 3x3 rotation block.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_mat4(self.camera_to_world())).normalize()
    }
}

impl TryFrom<RawCalibration> for CalibrationRecord {
    type Error = MatchcamError;

    fn try_from(raw: RawCalibration) -> Result<Self> {
        Self::new(raw.image_width, raw.image_height, raw.camera_transform.rows)
    }
}
