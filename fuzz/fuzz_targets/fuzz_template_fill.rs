#![no_main]

use cssmod_types::{DefinitionTemplate, Fingerprint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let template = DefinitionTemplate::new(text);
        let fingerprint = Fingerprint::from_bytes(data);
        let filled = template.fill(&fingerprint, "{\n}");
        if text.contains(DefinitionTemplate::HASH_PLACEHOLDER) {
            assert!(filled.contains(fingerprint.as_str()));
        }
    }
});
