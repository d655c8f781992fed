//! The built-in example case.

use pf_models::{
    AtmosphericInput, CaseInput, FlowInput, GasInput, MaterialInput, Orientation, PipeInput,
    Segment,
};

fn seg(length: f64, orientation: Orientation, accessory: &str) -> Segment {
    Segment {
        length,
        orientation,
        accessory: accessory.to_string(),
    }
}

/// A complete worked case: 72.56 t/h of cement through roughly 452 m of
/// 12 in schedule-40 line at a 202 m site, with sixteen fittings on the
/// route. Serves the CLI `example` command and the integration tests.
pub fn sample_case() -> CaseInput {
    use Orientation::{Horizontal, Vertical};

    CaseInput {
        atmospheric: AtmosphericInput {
            location: "Balcones".to_string(),
            height_m: 202.08,
            humidity_pct: 77.0,
            tamb_c: 20.0,
        },
        gas: GasInput { moisture_air: 0.033 },
        material: MaterialInput {
            solids_material: "Cemento".to_string(),
            ms_tph: 72.56,
            t_solids_c: 100.0,
        },
        pipe: PipeInput {
            pipe_material: "Steel, schedule 40 pipe, internally score".to_string(),
            pipe_roughness: 0.0005,
            d_in: 12.0,
            oversizing_param: 4.0,
        },
        flow: FlowInput {
            vin_ms: 9.25,
            tin_gas_c: 180.0,
            preq_bar: 2.5,
        },
        segments: vec![
            seg(3.903, Horizontal, "90"),
            seg(41.537, Horizontal, "90"),
            seg(7.824, Vertical, "90"),
            seg(137.28, Horizontal, "60"),
            seg(26.400, Horizontal, "60"),
            seg(53.760, Horizontal, "90"),
            seg(7.632, Vertical, "90"),
            seg(60.480, Horizontal, "60"),
            seg(23.520, Horizontal, "90"),
            seg(44.400, Vertical, "90"),
            seg(3.085, Horizontal, "Diverter Valve 30°"),
            seg(3.346, Horizontal, "Diverter Valve 30°"),
            seg(4.320, Horizontal, "90"),
            seg(20.793, Horizontal, "Diverter Valve 30°"),
            seg(4.166, Horizontal, "90"),
            seg(6.163, Horizontal, "90"),
            seg(3.080, Vertical, ""),
        ],
    }
}
