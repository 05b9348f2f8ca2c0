#![allow(dead_code)]

pub mod synthetic_image;

use thermo_lines::DetectionParams;

/// Thresholds that accept every line of `orthogonal_families` and nothing
/// else.
pub fn family_params() -> DetectionParams {
    DetectionParams::new(30.0, 32, 2).with_seed(17)
}

/// Route library logs through the test harness; repeated calls are fine.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
