use crate::codec::CodecError;
use crate::codec::varint::{decode_varint, encode_varint, varint_len};

#[test]
fn zero_is_a_single_zero_byte() {
	assert_eq!(encode_varint(0), vec![0x00]);
	assert_eq!(decode_varint(&[0x00]).expect("zero decodes"), (0, 1));
}

#[test]
fn encodes_130_as_two_groups() {
	assert_eq!(encode_varint(130), vec![0x82, 0x01]);
	assert_eq!(decode_varint(&[0x82, 0x01]).expect("130 decodes"), (130, 2));
}

#[test]
fn group_boundaries() {
	assert_eq!(encode_varint(127), vec![0x7F]);
	assert_eq!(encode_varint(128), vec![0x80, 0x01]);
	assert_eq!(encode_varint(16_383), vec![0xFF, 0x7F]);
	assert_eq!(encode_varint(16_384), vec![0x80, 0x80, 0x01]);
	assert_eq!(encode_varint(u32::MAX), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
}

#[test]
fn varint_len_matches_encoding() {
	for value in [0, 1, 127, 128, 300, 16_383, 16_384, 2_097_151, 2_097_152, 268_435_455, 268_435_456, u32::MAX] {
		assert_eq!(varint_len(value), encode_varint(value).len(), "length of {value}");
	}
}

#[test]
fn decode_stops_at_first_final_group() {
	let (value, used) = decode_varint(&[0x05, 0xFF, 0xFF]).expect("leading byte decodes");
	assert_eq!((value, used), (5, 1));
}

#[test]
fn missing_final_group_is_eof() {
	let err = decode_varint(&[0x80, 0x80]).expect_err("continuation without end");
	assert!(matches!(err, CodecError::UnexpectedEof { at: 2, need: 1 }));

	let err = decode_varint(&[]).expect_err("empty input");
	assert!(matches!(err, CodecError::UnexpectedEof { at: 0, .. }));
}

#[test]
fn rejects_more_than_32_bits() {
	let err = decode_varint(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10]).expect_err("bit 32 set");
	assert!(matches!(err, CodecError::VarintOverflow { at: 0 }));

	let err = decode_varint(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]).expect_err("sixth group");
	assert!(matches!(err, CodecError::VarintOverflow { at: 0 }));
}
