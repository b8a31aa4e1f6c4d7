//! Decoding of the file names Nim generates for C sources.
//!
//! An encoded name starts with the module marker (`@m`) followed by the path of the Nim module, where every path
//! separator is replaced by the segment marker (`@s`). Decoding keeps the innermost segment that looks like a Nimble
//! package directory (`name-major.minor.patch[-hash]`) and the segments below it.

use std::borrow::Cow;
use thiserror::Error;

mod context;
mod display;
pub mod normalize;
mod parsers;

#[cfg(test)]
mod tests;

/// Module marker emitted by the Nim compiler.
pub const DEFAULT_MODULE_MARKER: &str = "@m";

/// Segment marker emitted by the Nim compiler.
pub const DEFAULT_SEGMENT_MARKER: &str = "@s";

/// Every decoded name starts with this prefix.
pub const OUTPUT_PREFIX: &str = "NIMPORTER@";

/// Joins the package and the segments of a decoded name.
pub const OUTPUT_SEPARATOR: char = '@';

/// The escape tokens of an encoded name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Markers {
    module: Cow<'static, str>,
    segment: Cow<'static, str>,
}

impl Markers {
    /// Creates markers from custom tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if either token is empty: an empty module marker would select every file.
    pub fn new(
        module: impl Into<Cow<'static, str>>,
        segment: impl Into<Cow<'static, str>>,
    ) -> Result<Self, InvalidMarkersError> {
        let module = module.into();
        let segment = segment.into();

        if module.is_empty() {
            Err(InvalidMarkersError::EmptyModuleMarker)
        } else if segment.is_empty() {
            Err(InvalidMarkersError::EmptySegmentMarker)
        } else {
            Ok(Self { module, segment })
        }
    }

    /// Prefix of every name produced by the module system.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Separator between path segments.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns whether `name` carries the module marker.
    #[must_use]
    pub fn is_encoded(&self, name: &str) -> bool {
        name.starts_with(self.module())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            module: Cow::Borrowed(DEFAULT_MODULE_MARKER),
            segment: Cow::Borrowed(DEFAULT_SEGMENT_MARKER),
        }
    }
}

/// Rejected marker configuration.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InvalidMarkersError {
    /// The module marker is empty.
    #[error("the module marker must not be empty")]
    EmptyModuleMarker,
    /// The segment marker is empty.
    #[error("the segment marker must not be empty")]
    EmptySegmentMarker,
}

/// The segment was not a version token.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("not a version token")]
pub struct ParseVersionTokenError;

/// A path segment of the form `name-major.minor.patch`, optionally followed by `-build`.
///
/// Version components are kept as written, so `nim-01.2.3` keeps its leading zero.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VersionToken<'a> {
    /// Package name.
    pub name: &'a str,
    /// Major version, digits only.
    pub major: &'a str,
    /// Minor version, digits only.
    pub minor: &'a str,
    /// Patch version, digits only.
    pub patch: &'a str,
    /// Build or commit suffix, such as the checksum Nimble appends to package directories.
    pub build: Option<&'a str>,
}

impl<'a> VersionToken<'a> {
    /// Parses a single path segment.
    ///
    /// The segment is split on its last two hyphens at most, so `foo-bar-1.2.3` is read as package `foo` with version
    /// `bar` and build `1.2.3`, and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ParseVersionTokenError`] if the segment does not look like a version token.
    pub fn parse(segment: &'a str) -> Result<Self, ParseVersionTokenError> {
        parsers::parse_version_token(segment).map_err(|()| ParseVersionTokenError)
    }
}

/// The readable replacement of an encoded name. Use [`Display`](std::fmt::Display) to get the file name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DecodedName<'a> {
    /// No package could be identified. Holds everything after the module marker, segment markers included.
    Module(&'a str),
    /// The module belongs to a package.
    Package {
        /// Innermost segment that parsed as a version token.
        package: VersionToken<'a>,
        /// Segments below the package directory, in root-to-leaf order.
        path: Vec<&'a str>,
    },
}

impl<'a> DecodedName<'a> {
    /// Decodes `name`, or returns `None` if `name` does not start with the module marker.
    #[must_use]
    pub fn parse(name: &'a str, markers: &Markers) -> Option<Self> {
        let encoded = name.strip_prefix(markers.module())?;

        // Bare module, not part of a dependency.
        if !encoded.contains(markers.segment()) {
            return Some(Self::Module(encoded));
        }

        let segments = encoded.split(markers.segment()).collect::<Vec<_>>();

        // The innermost package wins, so scan from the leaf.
        let package = segments
            .iter()
            .copied()
            .enumerate()
            .rev()
            .find_map(|(index, segment)| VersionToken::parse(segment).ok().map(|package| (index, package)));

        Some(package.map_or(Self::Module(encoded), |(index, package)| Self::Package {
            package,
            path: segments[index + 1..].to_vec(),
        }))
    }
}

/// Decodes `name` with the default markers. Returns `None` if `name` is not an encoded name.
#[must_use]
pub fn decode(name: &str) -> Option<String> {
    DecodedName::parse(name, &Markers::default()).map(|decoded| decoded.to_string())
}
