//! Basic derivation from a dry/wet bulb pair
//!
//! Run with: cargo run --example 01_basic_derivation

use psychro_core::{reading, ErrorKind, Psychrometer};

fn main() {
    let engine = Psychrometer::default();

    // Simulated probe samples, the third one has a dropped wet bulb
    let samples: [(f32, f32); 4] = [(25.0, 18.0), (-10.0, -12.0), (21.5, -127.0), (18.0, 25.0)];

    for (dry, wet) in samples {
        let result = reading::screen(dry, wet).and_then(|sample| engine.derive_reading(&sample));

        match result {
            Ok(state) => {
                println!(
                    "dry {:.2} °C, wet {:.2} °C -> RH {:.4}, dew {:.2} °C, W {:.5}, v {:.3} m³/kg, h {:.2} kJ/kg",
                    state.dry_bulb_c,
                    state.wet_bulb_c,
                    state.relative_humidity,
                    state.dew_point_c,
                    state.absolute_humidity,
                    state.specific_volume_m3_per_kg,
                    state.enthalpy_kj_per_kg,
                );
                if state.relative_humidity > 1.0 {
                    println!("  warning: supersaturated, check wet-bulb wick and probe order");
                }
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => println!("skipping sample: {e}"),
            Err(e) => println!("reading unusable: {e}"),
        }
    }
}
