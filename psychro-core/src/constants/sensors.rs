//! Sensor Acquisition Constants
//!
//! The engine consumes two temperatures from one-wire probes. These values
//! describe what those probes can report.

/// Reading returned by DS18B20-family probes when the device does not answer.
///
/// Source: DallasTemperature library, `DEVICE_DISCONNECTED_C`
pub const DEVICE_DISCONNECTED_C: f64 = -127.0;

/// Lowest temperature accepted as a plausible reading (°C).
///
/// Below this the dew-point seed is far outside its fitted range.
pub const SENSOR_MIN_C: f64 = -50.0;

/// Highest temperature accepted as a plausible reading (°C).
///
/// Near 100 °C saturation pressure reaches standard atmospheric pressure
/// and the saturated humidity ratio becomes singular.
pub const SENSOR_MAX_C: f64 = 100.0;
