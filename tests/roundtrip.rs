use zenpbm::*;

fn checker_bitmap(w: usize, h: usize, encoding: Encoding) -> Bitmap {
    let mut img = Bitmap::new(w, h, encoding).unwrap();
    for y in 0..h {
        for x in 0..w {
            img.set(x, y, (x + y) % 2 == 0).unwrap();
        }
    }
    img
}

fn ramp_graymap(w: usize, h: usize, encoding: Encoding) -> Graymap {
    let mut img = Graymap::new(w, h, encoding).unwrap();
    for y in 0..h {
        for x in 0..w {
            img.set(x, y, ((x * 31 + y * 17) % 256) as u8).unwrap();
        }
    }
    img
}

fn ramp_pixmap(w: usize, h: usize, encoding: Encoding) -> Pixmap {
    let mut img = Pixmap::new(w, h, encoding).unwrap();
    for y in 0..h {
        for x in 0..w {
            let px = RGB8::new((x * 40) as u8, (y * 40) as u8, ((x + y) * 9) as u8);
            img.set(x, y, px).unwrap();
        }
    }
    img
}

#[test]
fn p1_scenario_is_byte_identical() {
    let input = b"P1\n2 2\n1 0\n0 1\n";
    let img = Bitmap::decode(input).unwrap();
    assert_eq!(img.size(), (2, 2));
    assert_eq!(img.format(), PnmFormat::PbmAscii);
    assert!(img.get(0, 0).unwrap());
    assert!(!img.get(1, 0).unwrap());
    assert!(!img.get(0, 1).unwrap());
    assert!(img.get(1, 1).unwrap());
    assert_eq!(img.encode().unwrap(), input);
}

#[test]
fn bitmap_roundtrip_both_encodings() {
    // 11 columns exercises the padded last byte of P4 rows
    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let img = checker_bitmap(11, 5, encoding);
        let bytes = img.encode().unwrap();
        let back = Bitmap::decode(&bytes).unwrap();
        assert_eq!(back, img, "{encoding:?}");
    }
}

#[test]
fn p4_packs_msb_first() {
    let mut img = Bitmap::new(9, 1, Encoding::Binary).unwrap();
    img.set(0, 0, true).unwrap();
    img.set(8, 0, true).unwrap();
    let bytes = img.encode().unwrap();
    assert_eq!(bytes, b"P4\n9 1\n\x80\x80");
}

#[test]
fn graymap_roundtrip_both_encodings() {
    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let img = ramp_graymap(7, 6, encoding);
        let back = Graymap::decode(&img.encode().unwrap()).unwrap();
        assert_eq!(back, img, "{encoding:?}");
        assert_eq!(back.max_value(), 255);
    }
}

#[test]
fn pixmap_roundtrip_both_encodings() {
    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let img = ramp_pixmap(5, 4, encoding);
        let back = Pixmap::decode(&img.encode().unwrap()).unwrap();
        assert_eq!(back, img, "{encoding:?}");
    }
}

#[test]
fn ascii_layout_is_one_row_per_line() {
    let data = b"P3\n2 1\n255\n1 2 3 4 5 6\n";
    let img = Pixmap::decode(data).unwrap();
    assert_eq!(img.get(1, 0).unwrap(), RGB8::new(4, 5, 6));
    assert_eq!(img.encode().unwrap(), data);
}

#[test]
fn custom_max_value_survives() {
    let data = b"P2\n3 1\n15\n0 7 15\n";
    let img = Graymap::decode(data).unwrap();
    assert_eq!(img.max_value(), 15);
    assert_eq!(img.encode().unwrap(), data);
}

#[test]
fn set_encoding_switches_magic() {
    let mut img = ramp_graymap(3, 3, Encoding::Ascii);
    img.set_encoding(Encoding::Binary);
    assert_eq!(img.format().magic(), "P5");
    let back = Graymap::decode(&img.encode().unwrap()).unwrap();
    assert_eq!(back.encoding(), Encoding::Binary);
    assert_eq!(back.pixels(), img.pixels());
}

#[test]
fn encode_request_overrides_encoding() {
    let img = ramp_pixmap(3, 2, Encoding::Binary);
    let bytes = EncodeRequest::new()
        .with_encoding(Encoding::Ascii)
        .encode(&img, Unstoppable)
        .unwrap();
    assert!(bytes.starts_with(b"P3\n3 2\n255\n"));
    assert_eq!(img.encoding(), Encoding::Binary);
}

#[test]
fn decode_any_dispatches_on_magic() {
    let gray = ramp_graymap(2, 2, Encoding::Binary).encode().unwrap();
    let any = decode(&gray, Unstoppable).unwrap();
    assert_eq!(any.kind(), ImageKind::Graymap);
    assert_eq!(any.format(), PnmFormat::PgmBinary);
    assert!(any.as_graymap().is_some());
    assert!(any.into_pixmap().is_none());

    let bits = checker_bitmap(3, 3, Encoding::Ascii).encode().unwrap();
    let any = DecodeRequest::new(&bits).decode(Unstoppable).unwrap();
    assert_eq!(any.max_value(), 1);
    assert_eq!(any.encode().unwrap(), bits);
}

#[test]
fn image_info_reads_header_only() {
    let info = ImageInfo::from_bytes(b"P6\n640 480\n255\n").unwrap();
    assert_eq!((info.width, info.height), (640, 480));
    assert_eq!(info.format, PnmFormat::PpmBinary);
    assert_eq!(info.kind(), ImageKind::Pixmap);
    assert_eq!(info.max_value, 255);
}

#[test]
fn header_lines_tolerate_surrounding_space() {
    let img = Graymap::decode(b"P2 \n 2  1 \n 9\n1 9\n").unwrap();
    assert_eq!(img.size(), (2, 1));
    assert_eq!(img.get(1, 0).unwrap(), 9);
}
