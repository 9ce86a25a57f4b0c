//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    PaSimpleError,
    config::{Config, LogLevel},
    pulse::{BufferAttributes, SampleFormat},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.stream.app_name, "pasimple");
    assert!(config.stream.buffer.is_default());
    assert_eq!(config.record.format, SampleFormat::S24LE);
    assert_eq!(config.record.channels, 1);
    assert_eq!(config.record.rate, 41_000);
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.stream.device = Some("alsa_output.usb".to_string());
    original.stream.buffer.prebuf = Some(4_096);

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[stream]"));

    let deserialized: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::parse("", None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_full_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [stream]
        app_name = "echo-test"
        stream_name = "record-mono"
        server = "unix:/run/user/1000/pulse/native"

        [stream.buffer]
        max_length = 352800
        fragment_size = 35280

        [record]
        format = "s16le"
        channels = 2
        rate = 48000
    "#;

    let config = Config::parse(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.stream.effective_stream_name(), "record-mono");
    assert_eq!(
        config.stream.buffer,
        BufferAttributes {
            max_length: Some(352_800),
            fragment_size: Some(35_280),
            ..Default::default()
        }
    );
    assert_eq!(config.record.format, SampleFormat::S16LE);
    assert_eq!(config.record.channels, 2);
    assert_eq!(config.record.rate, 48_000);
}

#[test]
fn config_partial_record_section_keeps_defaults() {
    let config = Config::parse("[record]\nchannels = 2\n", None).unwrap();

    assert_eq!(config.record.channels, 2);
    assert_eq!(config.record.format, SampleFormat::S24LE);
    assert_eq!(config.record.rate, 41_000);
}

#[test]
fn config_rejects_unwritable_record_format() {
    let err = Config::parse("[record]\nformat = \"s16be\"\n", None).unwrap_err();
    assert!(matches!(err, PaSimpleError::Config(_)));
}

#[test]
fn config_rejects_channel_counts_outside_server_range() {
    for channels in [0, 33, 255] {
        let toml = format!("[record]\nchannels = {channels}\n");
        let err = Config::parse(&toml, None).unwrap_err();
        assert!(matches!(err, PaSimpleError::Config(_)), "channels = {channels}");
    }
    let config = Config::parse("[record]\nchannels = 32\n", None).unwrap();
    assert_eq!(config.record.channels, 32);
}

#[test]
fn config_rejects_zero_rate() {
    let err = Config::parse("[record]\nrate = 0\n", None).unwrap_err();
    assert!(matches!(err, PaSimpleError::Config(_)));
}

#[test]
fn config_reports_parse_location() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[general\nlog_level = ").unwrap();

    let err = Config::load_or_default(&path).unwrap_err();
    match err {
        PaSimpleError::TomlParse { location, .. } => assert!(location.ends_with("config.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_missing_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let toml_str = format!("[general]\nlog_level = \"{level}\"\n");
        let config = Config::parse(&toml_str, None).unwrap();
        assert_eq!(config.general.log_level, level);
    }
}
