//! Pipe bore geometry in the mixed unit systems the correlations expect.

use pf_core::units::{circle_area, in_to_ft, in_to_mm};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::input::PipeInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeGeometry {
    #[serde(rename = "D_mm")]
    pub d_mm: f64,
    #[serde(rename = "D_ft")]
    pub d_ft: f64,
    #[serde(rename = "A_m2")]
    pub a_m2: f64,
    #[serde(rename = "A_ft2")]
    pub a_ft2: f64,
    pub pipe_roughness: f64,
}

impl PipeGeometry {
    pub fn derive(pipe: &PipeInput) -> ModelResult<Self> {
        if pipe.d_in <= 0.0 {
            return Err(ModelError::InvalidInput {
                what: format!("pipe diameter must be positive, got {} in", pipe.d_in),
            });
        }
        let d_mm = in_to_mm(pipe.d_in);
        let d_ft = in_to_ft(pipe.d_in);
        Ok(Self {
            d_mm,
            d_ft,
            a_m2: circle_area(d_mm / 1000.0),
            a_ft2: circle_area(d_ft),
            pipe_roughness: pipe.pipe_roughness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_input(d_in: f64) -> PipeInput {
        PipeInput {
            pipe_material: "steel".into(),
            pipe_roughness: 0.0005,
            d_in,
            oversizing_param: 1.0,
        }
    }

    #[test]
    fn twelve_inch_bore() {
        let geo = PipeGeometry::derive(&pipe_input(12.0)).unwrap();
        assert_eq!(geo.d_ft, 1.0);
        assert_eq!(geo.d_mm, 304.8);
        assert!((geo.a_ft2 - std::f64::consts::PI / 4.0).abs() < 1e-12);
        assert!((geo.a_m2 - 0.0729658).abs() < 1e-6);
        assert_eq!(geo.pipe_roughness, 0.0005);
    }

    #[test]
    fn rejects_non_positive_diameter() {
        assert!(PipeGeometry::derive(&pipe_input(0.0)).is_err());
        assert!(PipeGeometry::derive(&pipe_input(-4.0)).is_err());
    }
}
