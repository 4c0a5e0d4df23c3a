//! Signal scaling table for the AFM converter messages
//!
//! Compile-time scale/offset/range/unit metadata per signal, generated from
//! `mx5_afmconv.dbc`. The min/max range is advisory metadata: the decode path
//! applies the linear transform only and never clamps or rejects values.
//! Range checking, if wanted, belongs to a display/consumer layer.

use serde::Serialize;

/// Scaling and range metadata for one CAN signal.
///
/// Physical value = `raw * factor + offset`, computed in f32 to match the
/// precision of the stored state fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalSpec {
    /// Signal name as in the DBC
    pub name: &'static str,
    /// Scale factor applied to the raw integer
    pub factor: f32,
    /// Offset added after scaling
    pub offset: f32,
    /// Declared minimum physical value (advisory, not enforced)
    pub min: f32,
    /// Declared maximum physical value (advisory, not enforced)
    pub max: f32,
    /// Engineering unit
    pub unit: &'static str,
}

impl SignalSpec {
    /// Convert a raw signed value to its physical value.
    pub fn apply(&self, raw: i16) -> f32 {
        raw as f32 * self.factor + self.offset
    }

    /// Advisory range check against the declared min/max. Not called by any
    /// decode path; offered for consumers that want plausibility filtering.
    pub fn in_range(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// AFM output frequency, AFMConv1 bytes [0:1]
pub const AFM_FREQ: SignalSpec = SignalSpec {
    name: "AFM_Freq",
    factor: 1.0,
    offset: 0.0,
    min: 1500.0,
    max: 20000.0,
    unit: "Hz",
};

/// Intake air temperature, AFMConv1 bytes [2:3]
pub const THA: SignalSpec = SignalSpec {
    name: "THA",
    factor: 0.1,
    offset: -30.0,
    min: -20.0,
    max: 120.0,
    unit: "C",
};

/// Raw air mass flow, AFMConv1 bytes [4:5]
pub const RAW_GA: SignalSpec = SignalSpec {
    name: "raw_Ga",
    factor: 0.1,
    offset: 0.0,
    min: 0.0,
    max: 200.0,
    unit: "g/s",
};

/// Converter MCU temperature, AFMconv2 bytes [6:7]
pub const MCU_TEMP: SignalSpec = SignalSpec {
    name: "MCUtemp",
    factor: 0.1,
    offset: -30.0,
    min: -20.0,
    max: 120.0,
    unit: "C",
};
