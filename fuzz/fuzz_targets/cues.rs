#![no_main]

use libfuzzer_sys::fuzz_target;
use matroska_cues::{CueParser, Progress};

fuzz_target!(|data: &[u8]| {
    let Some((&chunk, data)) = data.split_first() else {
        return;
    };
    let chunk = usize::from(chunk).max(1);
    let mut parser = CueParser::new();

    let mut len = 0;
    while len < data.len() {
        len = (len + chunk).min(data.len());
        match parser.feed(&data[..len]) {
            Ok(Progress::NeedMoreData) => assert!(parser.resume_offset() <= len),
            Ok(Progress::Done) | Err(_) => break,
        }
    }
});
