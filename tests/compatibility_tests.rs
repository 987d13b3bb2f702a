//! Version and option gating.

#[allow(dead_code)]
mod common;

use sfmesh_rs::{
    DecoderConfig, FormatVersion, MeshReader, MeshWriter, NotificationType, SfMeshError,
    StreamType,
};

fn encode_with_version(major: u8, minor: u8, type_byte: u8) -> Vec<u8> {
    let mut mesh = common::cube_mesh();
    mesh.version = FormatVersion::new(major, minor, StreamType::from_wire(type_byte));
    MeshWriter::new(&mesh).encode().unwrap()
}

#[test]
fn test_same_major_same_minor_accepted() {
    let mesh = MeshReader::from_raw(encode_with_version(1, 0, 0))
        .read()
        .unwrap();
    assert_eq!(mesh.version, FormatVersion::release(1, 0));
    assert!(mesh.notifications.is_empty());
}

#[test]
fn test_same_major_higher_minor_accepted() {
    let mesh = MeshReader::from_raw(encode_with_version(1, 7, 0))
        .read()
        .unwrap();
    assert_eq!(mesh.version, FormatVersion::release(1, 7));
    // A newer-minor stream is flagged, not rejected.
    assert!(mesh
        .notifications
        .iter()
        .any(|n| n.notification_type == NotificationType::Compatibility));
}

#[test]
fn test_higher_major_rejected() {
    let err = MeshReader::from_raw(encode_with_version(2, 0, 0))
        .read()
        .unwrap_err();
    assert!(matches!(err, SfMeshError::UnsupportedVersion(_)));
}

#[test]
fn test_development_stream_rejected_by_default() {
    let err = MeshReader::from_raw(encode_with_version(1, 0, 1))
        .read()
        .unwrap_err();
    assert!(matches!(err, SfMeshError::UnsupportedVersion(_)));
}

#[test]
fn test_development_stream_accepted_with_opt_in() {
    let config = DecoderConfig {
        accept_development: true,
        ..DecoderConfig::default()
    };
    let mesh = MeshReader::from_raw(encode_with_version(1, 0, 1))
        .with_config(config)
        .read()
        .unwrap();
    assert_eq!(mesh.version.stream_type, StreamType::Development(1));
    assert!(mesh
        .notifications
        .iter()
        .any(|n| n.notification_type == NotificationType::Compatibility));
}

#[test]
fn test_decoder_policies_coexist() {
    let stream = encode_with_version(2, 0, 0);

    let err = MeshReader::from_raw(stream.clone()).read().unwrap_err();
    assert!(matches!(err, SfMeshError::UnsupportedVersion(_)));

    let config = DecoderConfig {
        supported_major: 2,
        ..DecoderConfig::default()
    };
    let mesh = MeshReader::from_raw(stream)
        .with_config(config)
        .read()
        .unwrap();
    assert_eq!(mesh.version.major, 2);
}

#[test]
fn test_unknown_option_bits_rejected() {
    let mut encoded = encode_with_version(1, 0, 0);
    // options word lives at offset 3
    encoded[3] = 0b0000_0101;
    let err = MeshReader::from_raw(encoded).read().unwrap_err();
    assert!(matches!(
        err,
        SfMeshError::UnknownRequiredOption { bits: 0b101 }
    ));
}

#[test]
fn test_option_gate_applies_to_selective_decode() {
    let mut encoded = encode_with_version(1, 0, 0);
    encoded[3] = 1;
    let err = MeshReader::from_raw(encoded).read_object(0).unwrap_err();
    assert!(matches!(err, SfMeshError::UnknownRequiredOption { .. }));
}
