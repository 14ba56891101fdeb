//! Shared numeric constants.

/// Decoder units per normalized world unit (decoder units are 0.1 mm).
pub const DEFAULT_SCALE: f64 = 10_000.0;

/// Color stop positions are truncated to this many steps per unit (3 decimal digits).
pub const COLOR_STOP_RESOLUTION: f64 = 1000.0;

/// Default bevel radius of a thread curve, in normalized units.
pub const DEFAULT_THREAD_THICKNESS: f64 = 0.0002;

/// Default height of the raised part of a stitch arc, in normalized units.
pub const DEFAULT_Z_HEIGHT: f64 = 0.0002;

/// Default vertical offset between consecutive sections, in normalized units.
pub const DEFAULT_SECTION_LIFT: f64 = 0.00002;

/// Maximum value of an 8-bit color channel.
pub const RGB8_MAX: f64 = 255.0;
