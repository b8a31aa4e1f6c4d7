//! # nimcache-demangle
//!
//! Turns the file names the Nim compiler writes into its cache directory back into short, readable names.
//!
//! Nim encodes the full path of a module into the name of the generated C file, so a file compiled from a Nimble
//! package ends up with a name that spells out the home directory of whoever built it. This crate recognizes the
//! package a file belongs to and keeps only the part of the path below that package.
//!
//! Example:
//!
//! ```rust
//! use nimcache_demangle::nimcache::{self, DecodedName, Markers, VersionToken};
//!
//! let encoded = "@m..@s..@sUsers@salice@s.nimble@spkgs@snimpy-0.2.0@snimpy@spy_utils.nim.c";
//!
//! // Decode with the default `@m`/`@s` markers.
//! assert_eq!(
//!     nimcache::decode(encoded).as_deref(),
//!     Some("NIMPORTER@nimpy-0.2.0@nimpy@py_utils.nim.c")
//! );
//!
//! // Names that are not produced by the module system are not decoded.
//! assert_eq!(nimcache::decode("nimbase.h"), None);
//!
//! // You can access the structure of the decoded name.
//!
//! let decoded = DecodedName::parse(encoded, &Markers::default()).unwrap();
//!
//! assert_eq!(
//!     decoded,
//!     DecodedName::Package {
//!         package: VersionToken {
//!             name: "nimpy",
//!             major: "0",
//!             minor: "2",
//!             patch: "0",
//!             build: None,
//!         },
//!         path: vec!["nimpy", "py_utils.nim.c"],
//!     }
//! );
//!
//! // Build suffixes are dropped from the canonical form, the alternate format keeps them.
//!
//! let token = VersionToken::parse("nimpy-0.2.0-abc123").unwrap();
//!
//! assert_eq!(format!("{token}"), "nimpy-0.2.0");
//! assert_eq!(format!("{token:#}"), "nimpy-0.2.0-abc123");
//! ```

pub mod host;
pub mod nimcache;
