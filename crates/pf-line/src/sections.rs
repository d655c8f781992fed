//! Route discretization into ~5 ft calculation sections.

use pf_core::units::m_to_ft;
use pf_models::{Orientation, Segment};
use serde::{Deserialize, Serialize};

use crate::accessory::AccessoryKind;
use crate::error::{LineError, LineResult};

/// Upper bound on a straight-pipe calculation section, ft.
pub const MAX_SECTION_FT: f64 = 5.0;

/// Leftovers below this are float noise, not pipe.
const LENGTH_EPS_FT: f64 = 1e-6;

/// One calculation section of the discretized route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub section_number: usize,
    /// `"pipe"` for straight chunks, the raw accessory label otherwise.
    pub component: String,
    pub orientation: Orientation,
    #[serde(rename = "EQ_Length_ft")]
    pub eq_length_ft: f64,
    #[serde(rename = "EQ_Cumulative_ft")]
    pub eq_cumulative_ft: f64,
}

impl Section {
    pub fn is_pipe(&self) -> bool {
        self.component == "pipe"
    }
}

/// The discretized route: ordered sections plus raw and equivalent totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub sections: Vec<Section>,
    /// Sum of raw segment lengths, m.
    pub total_m: f64,
    /// Final cumulative equivalent length, ft.
    pub total_ft: f64,
}

/// Discretize raw route segments, in order.
///
/// Each segment becomes pipe sections of at most [`MAX_SECTION_FT`], then
/// one accessory section when its label resolves to a positive equivalent
/// length. `section_number` runs densely from 1 across the whole route and
/// `EQ_Cumulative_ft` carries the running equivalent length.
pub fn build_route(segments: &[Segment]) -> LineResult<Route> {
    let mut sections: Vec<Section> = Vec::new();
    let mut total_m = 0.0;
    let mut cumulative_ft = 0.0;

    for (i, segment) in segments.iter().enumerate() {
        if !segment.length.is_finite() || segment.length < 0.0 {
            return Err(LineError::BadSegment {
                index: i + 1,
                what: format!("invalid length {}", segment.length),
            });
        }
        total_m += segment.length;

        let mut remaining_ft = m_to_ft(segment.length);
        while remaining_ft > LENGTH_EPS_FT {
            let chunk_ft = remaining_ft.min(MAX_SECTION_FT);
            cumulative_ft += chunk_ft;
            sections.push(Section {
                section_number: sections.len() + 1,
                component: "pipe".to_string(),
                orientation: segment.orientation,
                eq_length_ft: chunk_ft,
                eq_cumulative_ft: cumulative_ft,
            });
            remaining_ft -= chunk_ft;
        }

        if let Some(kind) = AccessoryKind::parse(&segment.accessory) {
            cumulative_ft += kind.equivalent_length_ft();
            sections.push(Section {
                section_number: sections.len() + 1,
                component: segment.accessory.clone(),
                orientation: accessory_orientation(segment, segments.get(i + 1)),
                eq_length_ft: kind.equivalent_length_ft(),
                eq_cumulative_ft: cumulative_ft,
            });
        }
    }

    Ok(Route {
        sections,
        total_m,
        total_ft: cumulative_ft,
    })
}

// An accessory only counts as horizontal when it sits between two
// horizontal segments; anything else is charged the vertical head.
fn accessory_orientation(owner: &Segment, next: Option<&Segment>) -> Orientation {
    match next {
        Some(n)
            if owner.orientation == Orientation::Horizontal
                && n.orientation == Orientation::Horizontal =>
        {
            Orientation::Horizontal
        }
        _ => Orientation::Vertical,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chunks_cover_the_segment(length_m in 0.0f64..500.0) {
            let route = build_route(&[Segment {
                length: length_m,
                orientation: Orientation::Horizontal,
                accessory: String::new(),
            }])
            .unwrap();
            let sum: f64 = route.sections.iter().map(|s| s.eq_length_ft).sum();
            prop_assert!((sum - length_m * 3.280_839_895).abs() < 1e-5);
            for s in &route.sections {
                prop_assert!(s.eq_length_ft <= MAX_SECTION_FT + 1e-9);
                prop_assert!(s.eq_length_ft > 0.0);
            }
        }

        #[test]
        fn cumulative_is_a_prefix_sum(lengths in proptest::collection::vec(0.0f64..30.0, 0..6)) {
            let segments: Vec<Segment> = lengths
                .iter()
                .map(|&l| Segment {
                    length: l,
                    orientation: Orientation::Vertical,
                    accessory: String::new(),
                })
                .collect();
            let route = build_route(&segments).unwrap();
            let mut acc = 0.0;
            for s in &route.sections {
                acc += s.eq_length_ft;
                prop_assert!((s.eq_cumulative_ft - acc).abs() < 1e-9);
            }
        }
    }
}
