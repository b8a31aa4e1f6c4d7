#![no_main]

use nimcache_demangle::nimcache::{self, DEFAULT_MODULE_MARKER, OUTPUT_PREFIX};

fn fuzz_with(data: &str) {
    let decoded = nimcache::decode(data);

    assert_eq!(decoded.is_some(), data.starts_with(DEFAULT_MODULE_MARKER));

    if let Some(decoded) = decoded {
        assert!(decoded.starts_with(OUTPUT_PREFIX));
        assert!(decoded.len() <= OUTPUT_PREFIX.len() + data.len());
    }
}

libfuzzer_sys::fuzz_target!(|data: &str| {
    fuzz_with(data);
});
