//! AFM Converter CAN Signal Decoder
//!
//! A small, stateless library for decoding the two fixed-layout CAN messages
//! emitted by the AFM (air flow meter) converter ECU into scaled physical
//! values with per-signal validity flags and per-message freshness timestamps.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Extracts big-endian 16-bit signed raw values at fixed byte offsets
//! - Applies the linear scale/offset transform from the signal table
//! - Writes results into a caller-owned [`SignalState`]
//!
//! The library does NOT:
//! - Talk to the CAN bus (transport, arbitration, scheduling)
//! - Enforce the declared signal ranges (min/max are advisory metadata)
//! - Provide a time source (ticks are injected via [`TickSource`])
//! - Synchronize concurrent access to [`SignalState`]
//!
//! # Example Usage
//!
//! ```
//! use afmconv_decoder::{decode_frame, SignalState, CAN_ID_AFMCONV1};
//!
//! let mut state = SignalState::new();
//!
//! // AFMConv1: 2000 Hz, 0.0 C intake temp, 10.0 g/s air mass
//! let data = [0x07, 0xD0, 0x01, 0x2C, 0x00, 0x64, 0x00, 0x00];
//! decode_frame(CAN_ID_AFMCONV1, &data, &mut state, 1234).unwrap();
//!
//! assert!(state.afm_freq_valid);
//! assert_eq!(state.afm_freq, 2000.0);
//! assert_eq!(state.last_update_afmconv1, 1234);
//! ```

// Public modules
pub mod decoder;
pub mod signals;
pub mod types;

// Re-export main types for convenience
pub use decoder::{
    decode_afmconv1, decode_afmconv2, decode_frame, decode_signed_be16, AfmDecoder, TickSource,
};
pub use signals::{SignalSpec, AFM_FREQ, MCU_TEMP, RAW_GA, THA};
pub use types::{
    AfmFrame, DecodeError, Result, SignalState, Ticks, CAN_ID_AFMCONV1, CAN_ID_AFMCONV2,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
