//! Integration tests: feed raw AFM converter frames through the public API
//! and check the resulting signal state.

use afmconv_decoder::{
    decode_frame, decode_signed_be16, AfmDecoder, AfmFrame, DecodeError, SignalState,
    AFM_FREQ, CAN_ID_AFMCONV1, CAN_ID_AFMCONV2, MCU_TEMP, RAW_GA, THA,
};
use std::cell::Cell;

/// Build an 8-byte frame from up to four big-endian signed 16-bit fields.
fn frame(fields: [i16; 4]) -> AfmFrame {
    let mut data = [0u8; 8];
    for (i, value) in fields.iter().enumerate() {
        data[i * 2..i * 2 + 2].copy_from_slice(&value.to_be_bytes());
    }
    data
}

#[test]
fn be16_roundtrip_across_the_full_signed_range() {
    // Encoder/decoder agree for boundary and representative values
    for raw in [i16::MIN, -32767, -200, -1, 0, 1, 300, 2000, 20000, i16::MAX] {
        let data = frame([0, raw, 0, 0]);
        assert_eq!(decode_signed_be16(&data, 2), raw);
    }
}

#[test]
fn scaling_matches_linear_transform_in_f32() {
    for raw in [-32768i16, -200, -1, 0, 100, 300, 800, 32767] {
        assert_eq!(AFM_FREQ.apply(raw), raw as f32 * 1.0 + 0.0);
        assert_eq!(THA.apply(raw), raw as f32 * 0.1 - 30.0);
        assert_eq!(RAW_GA.apply(raw), raw as f32 * 0.1 + 0.0);
        assert_eq!(MCU_TEMP.apply(raw), raw as f32 * 0.1 - 30.0);
    }
}

#[test]
fn afmconv1_updates_exactly_its_three_signals() {
    let mut state = SignalState::new();
    let data = frame([2000, 300, 100, 0x1234]);

    decode_frame(CAN_ID_AFMCONV1, &data, &mut state, 55).unwrap();

    assert_eq!(state.afm_freq, 2000.0);
    assert_eq!(state.tha, 0.0);
    assert_eq!(state.raw_ga, 10.0);
    assert!(state.afm_freq_valid && state.tha_valid && state.raw_ga_valid);
    assert_eq!(state.last_update_afmconv1, 55);

    // comp_Ga at bytes [6:7] is dead payload and must not leak anywhere
    assert!(!state.mcu_temp_valid);
    assert_eq!(state.mcu_temp, 0.0);
    assert_eq!(state.last_update_afmconv2, 0);
}

#[test]
fn afmconv2_updates_only_mcu_temperature() {
    let mut state = SignalState::new();
    // Leading three fields carry values that must be skipped
    let data = frame([9999, -1234, 5555, 800]);

    decode_frame(CAN_ID_AFMCONV2, &data, &mut state, 77).unwrap();

    assert_eq!(state.mcu_temp, 50.0);
    assert!(state.mcu_temp_valid);
    assert_eq!(state.last_update_afmconv2, 77);

    assert!(!state.afm_freq_valid && !state.tha_valid && !state.raw_ga_valid);
    assert_eq!(state.last_update_afmconv1, 0);
}

#[test]
fn both_messages_interleave_without_clobbering() {
    let ticks = Cell::new(10u32);
    let mut decoder = AfmDecoder::new(|| ticks.get());

    decoder
        .handle_frame(CAN_ID_AFMCONV1, &frame([2000, 300, 100, 0]))
        .unwrap();
    ticks.set(20);
    decoder
        .handle_frame(CAN_ID_AFMCONV2, &frame([0, 0, 0, 800]))
        .unwrap();
    ticks.set(30);
    decoder
        .handle_frame(CAN_ID_AFMCONV1, &frame([3000, 500, 250, 0]))
        .unwrap();

    let state = decoder.state();
    assert_eq!(state.afm_freq, 3000.0);
    assert_eq!(state.tha, 20.0);
    assert_eq!(state.raw_ga, 25.0);
    assert_eq!(state.mcu_temp, 50.0);
    assert!(state.afm_freq_valid && state.tha_valid && state.raw_ga_valid && state.mcu_temp_valid);
    assert_eq!(state.last_update_afmconv1, 30);
    assert_eq!(state.last_update_afmconv2, 20);
    assert_eq!(state.ticks_since_afmconv2(30), 10);
}

#[test]
fn negative_raw_values_sign_extend_through_scaling() {
    let mut state = SignalState::new();
    // THA raw 0xFF38 (-200): -200 * 0.1 - 30 = -50.0 C
    let data = [0x00, 0x00, 0xFF, 0x38, 0x00, 0x00, 0x00, 0x00];
    decode_frame(CAN_ID_AFMCONV1, &data, &mut state, 1).unwrap();
    assert_eq!(state.tha, -50.0);
}

#[test]
fn dispatch_rejects_foreign_and_truncated_frames() {
    let mut state = SignalState::new();

    match decode_frame(0x123, &[0; 8], &mut state, 1) {
        Err(DecodeError::UnknownMessageId(id)) => assert_eq!(id, 0x123),
        other => panic!("expected UnknownMessageId, got {:?}", other),
    }

    match decode_frame(CAN_ID_AFMCONV2, &[0; 5], &mut state, 1) {
        Err(DecodeError::FrameTooShort { can_id, len }) => {
            assert_eq!(can_id, CAN_ID_AFMCONV2);
            assert_eq!(len, 5);
        }
        other => panic!("expected FrameTooShort, got {:?}", other),
    }

    // Neither error path touched the state
    assert_eq!(state, SignalState::new());
}

#[test]
fn reset_returns_to_stale_condition_after_decoding() {
    let mut decoder = AfmDecoder::new(|| 99u32);
    decoder
        .handle_frame(CAN_ID_AFMCONV1, &frame([2000, 300, 100, 0]))
        .unwrap();
    assert!(decoder.state().afm_freq_valid);

    decoder.reset();
    assert_eq!(*decoder.state(), SignalState::new());
}
