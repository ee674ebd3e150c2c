#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let classes = cssmod_types::extract_class_names(&content);
    let rendered = cssmod_types::render_definition(&classes);
    assert_eq!(rendered.lines().count(), classes.len() + 2);
});
