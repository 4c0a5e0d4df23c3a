//! Message decoding for the AFM converter frames
//!
//! Extracts signal values from the two fixed-layout frames and writes them
//! into a shared [`SignalState`]. Extraction is big-endian (Motorola byte
//! order) 16-bit signed at fixed byte offsets; physical value conversion is
//! the linear transform from the signal table.
//!
//! The per-message decoders are infallible: a well-formed 8-byte frame is the
//! only input shape, and there is no checksum or range check at this layer.
//! Fallibility lives in [`decode_frame`], where arbitrary CAN IDs and payload
//! slices are routed.

use byteorder::{BigEndian, ByteOrder};

use crate::signals::{AFM_FREQ, MCU_TEMP, RAW_GA, THA};
use crate::types::{
    AfmFrame, DecodeError, Result, SignalState, Ticks, CAN_ID_AFMCONV1, CAN_ID_AFMCONV2,
};

/// Read a big-endian 16-bit signed value at `offset` within the frame.
///
/// Byte layout: `[MSB][LSB]`. The fixed-size frame type bounds the read;
/// all call sites use constant offsets no greater than 6.
pub fn decode_signed_be16(data: &AfmFrame, offset: usize) -> i16 {
    BigEndian::read_i16(&data[offset..offset + 2])
}

/// Decode an AFMConv1 frame (CAN ID 0x001) into `state`.
///
/// Writes `afm_freq`, `tha` and `raw_ga`, marks the three flags valid, and
/// records `now` as the AFMConv1 freshness timestamp. Bytes [6:7] (comp_Ga)
/// are not decoded - that signal is not consumed by this integration.
pub fn decode_afmconv1(data: &AfmFrame, state: &mut SignalState, now: Ticks) {
    // AFM_Freq: bytes [0:1]
    let raw_afm_freq = decode_signed_be16(data, 0);
    state.afm_freq = AFM_FREQ.apply(raw_afm_freq);
    state.afm_freq_valid = true;

    // THA: bytes [2:3]
    let raw_tha = decode_signed_be16(data, 2);
    state.tha = THA.apply(raw_tha);
    state.tha_valid = true;

    // raw_Ga: bytes [4:5]
    let raw_raw_ga = decode_signed_be16(data, 4);
    state.raw_ga = RAW_GA.apply(raw_raw_ga);
    state.raw_ga_valid = true;

    state.last_update_afmconv1 = now;
}

/// Decode an AFMconv2 frame (CAN ID 0x002) into `state`.
///
/// Only `mcu_temp` at bytes [6:7] is decoded; the leading fields (THA_comp,
/// VR1_comp, AFMoutV) are skipped. Records `now` as the AFMconv2 freshness
/// timestamp.
pub fn decode_afmconv2(data: &AfmFrame, state: &mut SignalState, now: Ticks) {
    let raw_mcu_temp = decode_signed_be16(data, 6);
    state.mcu_temp = MCU_TEMP.apply(raw_mcu_temp);
    state.mcu_temp_valid = true;

    state.last_update_afmconv2 = now;
}

/// Route a raw frame to the matching message decoder by CAN ID.
///
/// # Arguments
/// * `can_id` - CAN message ID as received from the bus
/// * `data` - frame payload; must hold at least 8 bytes
/// * `state` - shared signal state to update in place
/// * `now` - current tick count from the external time source
///
/// # Returns
/// * `Ok(())` if the frame was decoded into `state`
/// * `Err(DecodeError::UnknownMessageId)` for IDs this crate does not handle
/// * `Err(DecodeError::FrameTooShort)` if the payload is under 8 bytes
pub fn decode_frame(can_id: u32, data: &[u8], state: &mut SignalState, now: Ticks) -> Result<()> {
    let frame: &AfmFrame = data
        .get(..8)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::FrameTooShort {
            can_id,
            len: data.len(),
        })?;

    match can_id {
        CAN_ID_AFMCONV1 => {
            log::trace!("Decoding AFMConv1 (ID 0x{:03X}) at tick {}", can_id, now);
            decode_afmconv1(frame, state, now);
            Ok(())
        }
        CAN_ID_AFMCONV2 => {
            log::trace!("Decoding AFMconv2 (ID 0x{:03X}) at tick {}", can_id, now);
            decode_afmconv2(frame, state, now);
            Ok(())
        }
        other => Err(DecodeError::UnknownMessageId(other)),
    }
}

/// External tick-count source: monotonically non-decreasing, consistent
/// units across calls. Injected so the decoders stay testable without a
/// real clock.
pub trait TickSource {
    /// Current tick count.
    fn now_ticks(&self) -> Ticks;
}

/// Any zero-argument closure returning ticks works as a source, e.g.
/// `AfmDecoder::new(|| millis())`.
impl<F> TickSource for F
where
    F: Fn() -> Ticks,
{
    fn now_ticks(&self) -> Ticks {
        self()
    }
}

/// Stateful decoder - owns the signal state and a tick source.
///
/// Thin convenience wrapper over [`decode_frame`] for integrations that want
/// a single object to feed received frames into.
///
/// # Example
/// ```
/// use afmconv_decoder::{AfmDecoder, CAN_ID_AFMCONV1};
///
/// let mut decoder = AfmDecoder::new(|| 0u32);
/// decoder
///     .handle_frame(CAN_ID_AFMCONV1, &[0x07, 0xD0, 0x01, 0x2C, 0x00, 0x64, 0x00, 0x00])
///     .unwrap();
/// assert_eq!(decoder.state().afm_freq, 2000.0);
/// ```
pub struct AfmDecoder<C: TickSource> {
    state: SignalState,
    clock: C,
}

impl<C: TickSource> AfmDecoder<C> {
    /// Create a decoder with a fresh (all-invalid) signal state.
    pub fn new(clock: C) -> Self {
        Self {
            state: SignalState::new(),
            clock,
        }
    }

    /// Decode one received frame, stamping it with the clock's current ticks.
    pub fn handle_frame(&mut self, can_id: u32, data: &[u8]) -> Result<()> {
        let now = self.clock.now_ticks();
        decode_frame(can_id, data, &mut self.state, now)
    }

    /// Current decoded signal state.
    pub fn state(&self) -> &SignalState {
        &self.state
    }

    /// Reset the signal state to its unknown/stale condition.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
