#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to the same image, in both encodings
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = decoded.encode().expect("encode of a decoded image");
    let decoded2 = decode(&reencoded, enough::Unstoppable).expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    let flipped = match &decoded {
        AnyImage::Bitmap(img) => {
            let mut img = img.clone();
            img.set_encoding(match img.encoding() {
                Encoding::Ascii => Encoding::Binary,
                Encoding::Binary => Encoding::Ascii,
            });
            AnyImage::from(img)
        }
        AnyImage::Graymap(img) => {
            let mut img = img.clone();
            img.set_encoding(Encoding::Ascii);
            AnyImage::from(img)
        }
        AnyImage::Pixmap(img) => {
            let mut img = img.clone();
            img.set_encoding(Encoding::Binary);
            AnyImage::from(img)
        }
    };
    let bytes = flipped.encode().expect("encode with switched encoding");
    let decoded3 = decode(&bytes, enough::Unstoppable).expect("switched encoding failed to decode");
    assert_eq!(decoded3.size(), decoded.size());
    assert_eq!(decoded3, flipped);
});
