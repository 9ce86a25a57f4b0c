//! Unit tests for the stream handle
//!
//! A scripted connector stands in for the audio server, so no daemon is
//! needed.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    PaSimpleError,
    pulse::{
        Connector, Direction, ErrorCode, PaSimple, SampleFormat, SimpleConnection, StreamConfig,
        StreamParams, format_to_width, width_to_format,
    },
};

#[derive(Default)]
struct Log {
    opened: Vec<(Direction, SampleFormat, u8, u32, String)>,
    written: Vec<u8>,
    reads: Vec<usize>,
    drains: usize,
    flushes: usize,
    dropped: usize,
}

#[derive(Clone, Default)]
struct ScriptedConnector {
    log: Rc<RefCell<Log>>,
    open_error: Option<ErrorCode>,
    op_error: Option<ErrorCode>,
}

struct ScriptedConnection {
    log: Rc<RefCell<Log>>,
    op_error: Option<ErrorCode>,
}

impl Connector for ScriptedConnector {
    fn connect(&self, params: &StreamParams<'_>) -> Result<Box<dyn SimpleConnection>, ErrorCode> {
        if let Some(code) = self.open_error {
            return Err(code);
        }
        self.log.borrow_mut().opened.push((
            params.direction,
            params.format,
            params.channels,
            params.rate,
            params.config.effective_stream_name().to_string(),
        ));
        Ok(Box::new(ScriptedConnection {
            log: self.log.clone(),
            op_error: self.op_error,
        }))
    }
}

impl SimpleConnection for ScriptedConnection {
    fn read(&mut self, buf: &mut [u8]) -> Result<(), ErrorCode> {
        if let Some(code) = self.op_error {
            return Err(code);
        }
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        self.log.borrow_mut().reads.push(buf.len());
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ErrorCode> {
        if let Some(code) = self.op_error {
            return Err(code);
        }
        self.log.borrow_mut().written.extend_from_slice(data);
        Ok(())
    }

    fn drain(&mut self) -> Result<(), ErrorCode> {
        if let Some(code) = self.op_error {
            return Err(code);
        }
        self.log.borrow_mut().drains += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ErrorCode> {
        if let Some(code) = self.op_error {
            return Err(code);
        }
        self.log.borrow_mut().flushes += 1;
        Ok(())
    }

    fn latency(&mut self) -> Result<u64, ErrorCode> {
        match self.op_error {
            Some(code) => Err(code),
            None => Ok(25_000),
        }
    }
}

impl Drop for ScriptedConnection {
    fn drop(&mut self) {
        self.log.borrow_mut().dropped += 1;
    }
}

fn open(connector: &ScriptedConnector, direction: Direction) -> PaSimple {
    PaSimple::open_with(
        connector,
        direction,
        SampleFormat::S16LE,
        2,
        44_100,
        &StreamConfig::default(),
    )
    .unwrap()
}

#[test]
fn format_to_width_covers_every_format() {
    for format in SampleFormat::ALL {
        let width = format_to_width(format);
        assert!((1..=4).contains(&width), "{format} has width {width}");
    }
    assert_eq!(format_to_width(SampleFormat::ALaw), 1);
    assert_eq!(format_to_width(SampleFormat::S24BE), 3);
    assert_eq!(format_to_width(SampleFormat::S24_32LE), 4);
    assert_eq!(format_to_width(SampleFormat::F32BE), 4);
}

#[test]
fn width_to_format_inverts_pcm_widths() {
    for format in [
        SampleFormat::U8,
        SampleFormat::S16LE,
        SampleFormat::S24LE,
        SampleFormat::S32LE,
    ] {
        assert_eq!(width_to_format(format_to_width(format)).unwrap(), format);
    }
}

#[test]
fn width_to_format_rejects_other_widths() {
    for width in [0, 5, 8] {
        assert!(matches!(
            width_to_format(width),
            Err(PaSimpleError::UnsupportedWidth(w)) if w == width
        ));
    }
}

#[test]
fn format_tags_match_server_numbering() {
    for (tag, format) in SampleFormat::ALL.iter().enumerate() {
        assert_eq!(format.tag() as usize, tag);
    }
    assert_eq!(Direction::Playback as u8, 1);
    assert_eq!(Direction::Record as u8, 2);
}

#[test]
fn format_names_parse_back() {
    for format in SampleFormat::ALL {
        assert_eq!(format.name().parse::<SampleFormat>().unwrap(), format);
    }
    assert!("s20le".parse::<SampleFormat>().is_err());
}

#[test]
fn accessors_return_construction_values() {
    let connector = ScriptedConnector::default();
    let stream = PaSimple::open_with(
        &connector,
        Direction::Record,
        SampleFormat::S24LE,
        1,
        41_000,
        &StreamConfig::default().stream_name("mic"),
    )
    .unwrap();

    assert_eq!(stream.direction(), Direction::Record);
    assert_eq!(stream.format(), SampleFormat::S24LE);
    assert_eq!(stream.channels(), 1);
    assert_eq!(stream.rate(), 41_000);
    assert_eq!(stream.frame_size(), 3);
    assert_eq!(stream.bytes_per_second(), 123_000);

    let log = connector.log.borrow();
    assert_eq!(log.opened[0].4, "mic");
}

#[test]
fn stream_name_defaults_to_app_name() {
    let connector = ScriptedConnector::default();
    let _stream = PaSimple::open_with(
        &connector,
        Direction::Playback,
        SampleFormat::U8,
        1,
        8_000,
        &StreamConfig::default().app_name("tester"),
    )
    .unwrap();

    assert_eq!(connector.log.borrow().opened[0].4, "tester");
}

#[test]
fn open_rejects_bad_parameters_locally() {
    let connector = ScriptedConnector::default();
    let config = StreamConfig::default();

    for (channels, rate) in [(0, 44_100), (33, 44_100), (2, 0)] {
        let result = PaSimple::open_with(
            &connector,
            Direction::Playback,
            SampleFormat::S16LE,
            channels,
            rate,
            &config,
        );
        assert!(matches!(result, Err(PaSimpleError::InvalidArgument(_))));
    }

    let result = PaSimple::open_with(
        &connector,
        Direction::Playback,
        SampleFormat::S16LE,
        2,
        44_100,
        &StreamConfig::default().device("bad\0device"),
    );
    assert!(matches!(result, Err(PaSimpleError::InvalidArgument(_))));
    assert!(connector.log.borrow().opened.is_empty());
}

#[test]
fn open_maps_server_codes() {
    let refused = ScriptedConnector {
        open_error: Some(ErrorCode::ConnectionRefused),
        ..Default::default()
    };
    let err = PaSimple::open_with(
        &refused,
        Direction::Record,
        SampleFormat::S16LE,
        1,
        44_100,
        &StreamConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PaSimpleError::Connection {
            code: ErrorCode::ConnectionRefused
        }
    ));

    let invalid = ScriptedConnector {
        open_error: Some(ErrorCode::Invalid),
        ..Default::default()
    };
    let err = PaSimple::open_with(
        &invalid,
        Direction::Record,
        SampleFormat::S16LE,
        1,
        44_100,
        &StreamConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PaSimpleError::InvalidArgument(_)));

    let busy = ScriptedConnector {
        open_error: Some(ErrorCode::Busy),
        ..Default::default()
    };
    let err = PaSimple::open_with(
        &busy,
        Direction::Record,
        SampleFormat::S16LE,
        1,
        44_100,
        &StreamConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.server_code(), Some(ErrorCode::Busy));
}

#[test]
fn read_returns_exactly_requested_bytes() {
    let connector = ScriptedConnector::default();
    let mut stream = open(&connector, Direction::Record);

    let data = stream.read(615_000).unwrap();
    assert_eq!(data.len(), 615_000);
    assert_eq!(data[252], 1);

    assert!(stream.read(0).unwrap().is_empty());
    assert_eq!(connector.log.borrow().reads, vec![615_000]);
}

#[test]
fn write_submits_every_byte() {
    let connector = ScriptedConnector::default();
    let mut stream = open(&connector, Direction::Playback);

    stream.write(&[1, 2, 3, 4]).unwrap();
    stream.write(&[]).unwrap();
    stream.write(&[5, 6]).unwrap();
    stream.drain().unwrap();

    let log = connector.log.borrow();
    assert_eq!(log.written, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(log.drains, 1);
}

#[test]
fn direction_is_enforced() {
    let connector = ScriptedConnector::default();
    let mut playback = open(&connector, Direction::Playback);
    let mut record = open(&connector, Direction::Record);

    assert!(matches!(
        playback.read(16),
        Err(PaSimpleError::WrongDirection {
            operation: "read",
            direction: Direction::Playback
        })
    ));
    assert!(matches!(
        record.write(&[0; 16]),
        Err(PaSimpleError::WrongDirection { operation: "write", .. })
    ));
    assert!(matches!(
        record.drain(),
        Err(PaSimpleError::WrongDirection { operation: "drain", .. })
    ));

    let log = connector.log.borrow();
    assert!(log.reads.is_empty());
    assert!(log.written.is_empty());
    assert_eq!(log.drains, 0);
}

#[test]
fn flush_and_latency_work_in_both_directions() {
    let connector = ScriptedConnector::default();
    for direction in [Direction::Playback, Direction::Record] {
        let mut stream = open(&connector, direction);
        stream.flush().unwrap();
        assert_eq!(stream.latency().unwrap(), 25_000);
    }
    assert_eq!(connector.log.borrow().flushes, 2);
}

#[test]
fn server_failures_carry_operation_and_code() {
    let connector = ScriptedConnector {
        op_error: Some(ErrorCode::ConnectionTerminated),
        ..Default::default()
    };
    let mut stream = open(&connector, Direction::Playback);

    let err = stream.write(&[0; 8]).unwrap_err();
    assert!(matches!(
        err,
        PaSimpleError::Server {
            operation: "write",
            code: ErrorCode::ConnectionTerminated
        }
    ));
    assert!(matches!(
        stream.latency(),
        Err(PaSimpleError::Server {
            operation: "latency",
            ..
        })
    ));
}

#[test]
fn latency_failures_keep_the_server_code() {
    for code in [ErrorCode::NoData, ErrorCode::Invalid, ErrorCode::Unknown(99)] {
        let connector = ScriptedConnector {
            op_error: Some(code),
            ..Default::default()
        };
        let mut stream = open(&connector, Direction::Record);

        let err = stream.latency().unwrap_err();
        assert_eq!(err.server_code(), Some(code));
        assert!(matches!(
            err,
            PaSimpleError::Server {
                operation: "latency",
                ..
            }
        ));
    }
}

#[test]
fn closed_handle_rejects_everything() {
    let connector = ScriptedConnector::default();
    let mut stream = open(&connector, Direction::Playback);

    stream.close().unwrap();
    assert!(stream.is_closed());
    assert_eq!(connector.log.borrow().dropped, 1);

    assert!(matches!(stream.write(&[1]), Err(PaSimpleError::ClosedHandle)));
    assert!(matches!(stream.read(1), Err(PaSimpleError::ClosedHandle)));
    assert!(matches!(stream.drain(), Err(PaSimpleError::ClosedHandle)));
    assert!(matches!(stream.flush(), Err(PaSimpleError::ClosedHandle)));
    assert!(matches!(stream.latency(), Err(PaSimpleError::ClosedHandle)));
    assert!(matches!(stream.close(), Err(PaSimpleError::ClosedHandle)));

    assert_eq!(stream.rate(), 44_100);
    drop(stream);
    assert_eq!(connector.log.borrow().dropped, 1);
}

#[test]
fn dropping_an_open_handle_releases_the_connection() {
    let connector = ScriptedConnector::default();
    {
        let _stream = open(&connector, Direction::Record);
        assert_eq!(connector.log.borrow().dropped, 0);
    }
    assert_eq!(connector.log.borrow().dropped, 1);
}
