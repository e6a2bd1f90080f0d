use super::*;

#[test]
fn variable_integer() {
    let val01 = [0b10000000, 0x00];

    match vint(&val01) {
        Ok((rest, v)) => {
            assert_eq!(v, 0);
            assert_eq!(rest, &[0x00]);
        }
        _ => panic!(),
    }
}

#[test]
fn ebml_header_id() {
    let input = [0x1A, 0x45, 0xDF, 0xA3, 0xA3, 0x42, 0x86];

    let header = read_header(&input).unwrap().unwrap();
    assert_eq!(
        header,
        ElementHeader {
            id: 0x1A45DFA3,
            size: 0x23,
            header_len: 5,
        }
    );
    assert_eq!(header.payload_offset(), 5);
    assert_eq!(header.element_len(), Some(40));
}

#[test]
fn header_needs_a_following_octet() {
    let cue_time = [0xB3, 0x81, 0x07];

    // both the ID and the size field need one octet past their end
    assert_eq!(read_header(&[]), Ok(None));
    assert_eq!(read_header(&cue_time[..1]), Ok(None));
    assert_eq!(read_header(&cue_time[..2]), Ok(None));
    assert_eq!(
        read_header(&cue_time),
        Ok(Some(ElementHeader {
            id: 0xB3,
            size: 1,
            header_len: 2,
        }))
    );

    let segment = [0x18, 0x53, 0x80, 0x67, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    for len in 0..=segment.len() {
        assert_eq!(read_header(&segment[..len]), Ok(None), "at {}", len);
    }
}

#[test]
fn unknown_sizes() {
    let segment = [0x18, 0x53, 0x80, 0x67, 0xFF, 0x15];
    let header = read_header(&segment).unwrap().unwrap();

    assert!(header.is_unknown_size());
    assert_eq!(header.size, UNKNOWN_SIZE);
    assert_eq!(header.element_len(), None);

    // 0x7F in two octets is a plain 127
    let sized = [0x18, 0x53, 0x80, 0x67, 0x40, 0x7F, 0x15];
    let header = read_header(&sized).unwrap().unwrap();
    assert_eq!(header.size, 127);
    assert_eq!(header.header_len, 6);
}

#[test]
fn corrupt_headers() {
    assert_eq!(
        read_header(&[0x00, 0x81, 0x00]),
        Err(Error::new(0, ErrorKind::VintTooWide))
    );
    assert_eq!(
        read_header(&[0x08, 0x00, 0x00, 0x00, 0x00, 0x81]),
        Err(Error::new(0, ErrorKind::IDTooWide))
    );

    // the error is attributed to the element whose size is broken
    assert_eq!(
        read_header(&[0xBB, 0x00, 0x00]),
        Err(Error::new(0xBB, ErrorKind::VintTooWide))
    );
}

#[test]
fn uints() {
    #[rustfmt::skip]
    let tests: Vec<(&[u8], Result<u64, ErrorKind>)> = vec![
        (&[], Ok(0)),
        (&[0x0F, 0x42, 0x40], Ok(1_000_000)),
        (&[0x01, 0x2A, 0x05, 0xF2, 0x00], Ok(5_000_000_000)),
        (&[0xFF; 8], Ok(u64::MAX)),
        (&[0x01; 9], Err(ErrorKind::UintTooWide)),
    ];

    for (bytes, expected) in tests {
        assert_eq!(u64::try_parse(bytes), expected);
    }
}

#[test]
fn floats() {
    #[rustfmt::skip]
    let tests: Vec<(&[u8], Option<f64>)> = vec![
        // wrong lengths
        (&[], None),
        (&[0xFF, 0xFF], None),
        (&[0xAB, 0xCD, 0xEF, 0x12, 0x56], None),

        // f32
        (&[0x42, 0x02, 0x2F, 0x07], Some(32.545_925_140_380_86)),
        (&[0x4A, 0xBE, 0x2F, 0x00], Some(6_231_936.0)),

        // f64
        (&[0x40, 0x84, 0x0F, 0x47, 0xAE, 0x14, 0x7A, 0xE1], Some(641.91)),
        (&[0x40, 0xB3, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00], Some(5000.0)),
    ];

    for (bytes, expected) in tests {
        assert_eq!(expected, f64::try_parse(bytes).ok());
    }
}
