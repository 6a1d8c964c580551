#![no_main]
use iltag::{StandardTagFactory, Tag, TagFactory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let factory = StandardTagFactory::default();
    let mut cursor = data;
    if let Ok(tag) = factory.deserialize(&mut cursor) {
        // Decoding only accepts canonical input, so encoding gives back exactly what was read.
        let used = data.len() - cursor.len();
        assert_eq!(tag.to_vec(), &data[..used]);
    }
});
