#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the magic token says
    let _ = zenpbm::decode(data, enough::Unstoppable);
    let _ = zenpbm::ImageInfo::from_bytes(data);

    // Typed decode must agree with the kind check
    let _ = zenpbm::Bitmap::decode(data);
    let _ = zenpbm::Graymap::decode(data);
    let _ = zenpbm::Pixmap::decode(data);
});
