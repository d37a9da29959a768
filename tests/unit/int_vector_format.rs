//! Byte-level checks of the int_vector file format.

use std::io::ErrorKind;

use repmeasure::{IntArray, IntVector};

use super::common::write_input;

#[test]
fn test_header_and_packing() {
    // width 2: 1 | 2 << 2 | 3 << 4 = 57
    let v = IntVector::from_values(&[1, 2, 3]);
    let mut bytes = Vec::new();
    v.write_to(&mut bytes).unwrap();

    let mut expected = 6u64.to_le_bytes().to_vec();
    expected.push(2);
    expected.extend_from_slice(&57u64.to_le_bytes());
    assert_eq!(bytes, expected);
}

#[test]
fn test_word_straddling_entries() {
    // 7 entries of 10 bits: entry 6 spans words 0 and 1
    let values: Vec<usize> = vec![1023, 0, 512, 1, 1000, 3, 777];
    let v = IntVector::from_values(&values);
    assert_eq!(v.width(), 10);
    let mut bytes = Vec::new();
    v.write_to(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 9 + 16);

    let back = IntVector::read_from(&mut bytes.as_slice()).unwrap();
    assert_eq!(back.to_vec(), values);
    assert_eq!(IntArray::get(&back, 6), 777);
}

#[test]
fn test_load_written_by_hand() {
    // A 64-bit vector [5, 7] as an sdsl tool writes it
    let mut raw = 128u64.to_le_bytes().to_vec();
    raw.push(64);
    raw.extend_from_slice(&5u64.to_le_bytes());
    raw.extend_from_slice(&7u64.to_le_bytes());
    let (_dir, path) = write_input("v.iv", &raw);

    let v = IntVector::load(&path).unwrap();
    assert_eq!(v.to_vec(), vec![5, 7]);
}

#[test]
fn test_truncated_file_rejected() {
    let mut raw = 128u64.to_le_bytes().to_vec();
    raw.push(64);
    raw.extend_from_slice(&5u64.to_le_bytes());
    let (_dir, path) = write_input("short.iv", &raw);

    let err = IntVector::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn test_bad_width_rejected() {
    let mut raw = 0u64.to_le_bytes().to_vec();
    raw.push(65);
    let (_dir, path) = write_input("wide.iv", &raw);
    assert_eq!(
        IntVector::load(&path).unwrap_err().kind(),
        ErrorKind::InvalidData
    );

    // 10 bits cannot hold a whole number of 3-bit entries
    let mut raw = 10u64.to_le_bytes().to_vec();
    raw.push(3);
    raw.extend_from_slice(&0u64.to_le_bytes());
    let (_dir, path) = write_input("ragged.iv", &raw);
    assert_eq!(
        IntVector::load(&path).unwrap_err().kind(),
        ErrorKind::InvalidData
    );
}

#[test]
fn test_empty_vector() {
    let v = IntVector::from_values(&[]);
    let mut bytes = Vec::new();
    v.write_to(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 9);
    let back = IntVector::read_from(&mut bytes.as_slice()).unwrap();
    assert!(back.is_empty());
}
