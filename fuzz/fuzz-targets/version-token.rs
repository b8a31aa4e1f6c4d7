#![no_main]

use nimcache_demangle::nimcache::VersionToken;

fn fuzz_with(data: &str) {
    if let Ok(token) = VersionToken::parse(data) {
        let canonical = token.to_string();

        assert!(data.starts_with(&canonical));
        assert_eq!(format!("{token:#}"), data);
        assert_eq!(token.build.is_some(), canonical.len() < data.len());
    }
}

libfuzzer_sys::fuzz_target!(|data: &str| {
    fuzz_with(data);
});
