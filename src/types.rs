//! Core types for the AFM converter signal decoder
//!
//! This module defines the shared signal state written by the message decoders,
//! the fixed frame/tick types, and the error type for the dispatch boundary.
//! The decoders themselves are infallible - errors only arise where arbitrary
//! CAN IDs and payload slices enter the crate.

use serde::{Deserialize, Serialize};

/// A classic CAN data payload - both AFM converter messages are exactly 8 bytes.
///
/// Using a fixed-size array keeps signal extraction at constant byte offsets
/// within bounds by construction.
pub type AfmFrame = [u8; 8];

/// Tick count from the injected time source (monotonically non-decreasing,
/// unit left to the integration - typically milliseconds since boot).
pub type Ticks = u32;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// CAN message ID of AFMConv1 (AFM frequency, intake temperature, raw air mass)
pub const CAN_ID_AFMCONV1: u32 = 0x001;

/// CAN message ID of AFMconv2 (MCU temperature; leading fields unused here)
pub const CAN_ID_AFMCONV2: u32 = 0x002;

/// Errors that can occur when routing a raw frame into the decoders
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unknown CAN ID 0x{0:03X}: not an AFM converter message")]
    UnknownMessageId(u32),

    #[error("Frame for CAN ID 0x{can_id:03X} has {len} bytes, expected 8")]
    FrameTooShort { can_id: u32, len: usize },
}

/// Decoded AFM converter signal values with per-signal validity flags
/// and per-message freshness timestamps.
///
/// A value field is meaningful only while its validity flag is true. Each
/// message decoder writes a disjoint subset of the fields plus its own
/// `last_update_*` timestamp; flags are cleared only by [`SignalState::reset`].
///
/// The struct is plain `Copy` data - if a receive task updates it while
/// another task reads it, the caller must synchronize access (a lock or an
/// atomic snapshot); this crate imposes no threading model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalState {
    /// AFM output frequency [Hz]
    pub afm_freq: f32,
    /// Intake air temperature [°C]
    pub tha: f32,
    /// Raw air mass flow [g/s]
    pub raw_ga: f32,
    /// Converter MCU temperature [°C]
    pub mcu_temp: f32,

    pub afm_freq_valid: bool,
    pub tha_valid: bool,
    pub raw_ga_valid: bool,
    pub mcu_temp_valid: bool,

    /// Tick count at the last successful AFMConv1 decode
    pub last_update_afmconv1: Ticks,
    /// Tick count at the last successful AFMconv2 decode
    pub last_update_afmconv2: Ticks,
}

impl SignalState {
    /// Create a fresh state: all values 0.0, all flags false, both timestamps 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the unknown/stale condition. Idempotent; safe to call at any time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ticks elapsed since the last AFMConv1 decode, saturating at zero if the
    /// caller's clock reads earlier than the stored timestamp.
    ///
    /// Staleness is the only observable failure mode of this decoder; what age
    /// counts as "stale" is a policy decision left to the consumer.
    pub fn ticks_since_afmconv1(&self, now: Ticks) -> Ticks {
        now.saturating_sub(self.last_update_afmconv1)
    }

    /// Ticks elapsed since the last AFMconv2 decode (see [`Self::ticks_since_afmconv1`]).
    pub fn ticks_since_afmconv2(&self, now: Ticks) -> Ticks {
        now.saturating_sub(self.last_update_afmconv2)
    }
}
