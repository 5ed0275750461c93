#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the comparison engine.
///
/// The input is split at the first NUL byte into two documents. Whatever
/// parses is compared both ways; the engine must never panic.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (from, to) = s.split_once('\0').unwrap_or((s, s));
    let (Ok(from), Ok(to)) = (
        semdiff::parsers::parse_documents_str(from),
        semdiff::parsers::parse_documents_str(to),
    ) else {
        return;
    };

    let _ = semdiff::diff::compare_document_sets(&from.documents, &to.documents);
    let _ = semdiff::diff::compare_document_sets(&to.documents, &from.documents);
});
