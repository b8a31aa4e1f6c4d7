use crate::nimcache::{self, DecodedName, InvalidMarkersError, Markers, ParseVersionTokenError, VersionToken};

#[track_caller]
fn check_decode(encoded: &str, expected: &str) {
    assert_eq!(nimcache::decode(encoded).as_deref(), Some(expected), "Failed: {encoded}");
}

#[test]
fn test_decode_package_module() {
    check_decode(
        "@m..@s..@s..@s..@s..@s..@sUsers@s<USERNAME>@s.nimble@spkgs@snimpy-0.2.0@snimpy@spy_utils.nim.c",
        "NIMPORTER@nimpy-0.2.0@nimpy@py_utils.nim.c",
    );

    check_decode(
        "@m..@s..@shome@sbob@s.nimble@spkgs2@snimpy-0.2.0-5b1f6b8e1a4c@snimpy.nim.c",
        "NIMPORTER@nimpy-0.2.0@nimpy.nim.c",
    );
}

#[test]
fn test_decode_bare_module() {
    check_decode("@mmain.nim.c", "NIMPORTER@main.nim.c");
    check_decode("@mnimpy-0.2.0.nim.c", "NIMPORTER@nimpy-0.2.0.nim.c");
    check_decode("@m", "NIMPORTER@");
}

#[test]
fn test_decode_without_package_keeps_segment_markers() {
    check_decode("@m..@ssrc@sutils.nim.c", "NIMPORTER@..@ssrc@sutils.nim.c");

    assert_eq!(
        DecodedName::parse("@m..@ssrc@sutils.nim.c", &Markers::default()),
        Some(DecodedName::Module("..@ssrc@sutils.nim.c"))
    );
}

#[test]
fn test_decode_innermost_package_wins() {
    check_decode(
        "@mpkgs@sfoo-1.0.0@svendor@sbar-2.0.0@sleaf.nim.c",
        "NIMPORTER@bar-2.0.0@leaf.nim.c",
    );

    check_decode("@mfoo-1.0.0@sbar-2.0.0@sleaf", "NIMPORTER@bar-2.0.0@leaf");
}

#[test]
fn test_decode_package_as_leaf() {
    check_decode("@mpkgs@sfoo-1.0.0", "NIMPORTER@foo-1.0.0");
}

#[test]
fn test_decode_empty_segments() {
    check_decode("@m@sfoo-1.0.0@s@sx.c", "NIMPORTER@foo-1.0.0@@x.c");
}

#[test]
fn test_decode_only_strips_leading_marker() {
    check_decode("@mfoo-1.0.0@s@mx.c", "NIMPORTER@foo-1.0.0@@mx.c");
}

#[test]
fn test_decode_requires_module_marker() {
    assert_eq!(nimcache::decode("nimbase.h"), None);
    assert_eq!(nimcache::decode("NIMPORTER@nimpy-0.2.0@nimpy@py_utils.nim.c"), None);
    assert_eq!(nimcache::decode("x@m..@sfoo-1.0.0@sa.c"), None);
    assert_eq!(nimcache::decode(""), None);
}

#[test]
fn test_decode_is_deterministic() {
    let name = "@m..@snimpy-0.2.0@snimpy@spy_utils.nim.c";

    assert_eq!(nimcache::decode(name), nimcache::decode(name));
}

#[test]
fn test_decode_structure() {
    assert_eq!(
        DecodedName::parse("@m..@sfoo-1.2.3-deadbeef@sa@sb.c", &Markers::default()),
        Some(DecodedName::Package {
            package: VersionToken {
                name: "foo",
                major: "1",
                minor: "2",
                patch: "3",
                build: Some("deadbeef"),
            },
            path: vec!["a", "b.c"],
        })
    );
}

#[test]
fn test_decode_custom_markers() {
    let markers = Markers::new("#mod#", "/").unwrap();

    let decoded = DecodedName::parse("#mod#home/me/pkgs/foo-1.2.3/foo/bar.c", &markers).unwrap();

    assert_eq!(decoded.to_string(), "NIMPORTER@foo-1.2.3@foo@bar.c");
    assert_eq!(DecodedName::parse("@mfoo.c", &markers), None);
}

#[test]
fn test_display_version_token() {
    let token = VersionToken::parse("nimpy-0.2.0-abc123").unwrap();

    assert_eq!(token.to_string(), "nimpy-0.2.0");
    assert_eq!(format!("{token:#}"), "nimpy-0.2.0-abc123");

    let token = VersionToken::parse("nim_01-01.02.03").unwrap();

    assert_eq!(token.to_string(), "nim_01-01.02.03");
    assert_eq!(format!("{token:#}"), "nim_01-01.02.03");
}

#[test]
fn test_markers() {
    let markers = Markers::default();

    assert_eq!(markers.module(), nimcache::DEFAULT_MODULE_MARKER);
    assert_eq!(markers.segment(), nimcache::DEFAULT_SEGMENT_MARKER);

    assert!(markers.is_encoded("@mfoo.c"));
    assert!(!markers.is_encoded("foo@m.c"));
}

#[test]
fn test_markers_reject_empty_tokens() {
    assert_eq!(Markers::new("", "@s"), Err(InvalidMarkersError::EmptyModuleMarker));
    assert_eq!(Markers::new("@m", ""), Err(InvalidMarkersError::EmptySegmentMarker));
    assert_eq!(Markers::new("@m", "@s"), Ok(Markers::default()));

    assert_eq!(InvalidMarkersError::EmptyModuleMarker.to_string(), "the module marker must not be empty");
}

#[test]
fn test_parse_version_token_error() {
    let error = VersionToken::parse("nimpy").unwrap_err();

    assert_eq!(error, ParseVersionTokenError);
    assert_eq!(error.to_string(), "not a version token");
}
