#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the document loader.
///
/// Runs format detection, the JSON parser, the YAML fallback and the
/// conversion into `Node` trees on arbitrary UTF-8 input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = semdiff::parsers::parse_documents_str(s);
    }
});
