//! Renaming every encoded file of a Nim cache directory to its decoded name.
//!
//! A pass first plans all renames, then refuses to touch anything if two files would end up with the same name or a
//! target already exists. Only then are the files renamed, one at a time. A failure halfway leaves the files renamed so
//! far in place; running the pass again picks up the rest, because decoded names no longer carry the module marker.

pub use self::error::NormalizeError;
use crate::nimcache::{DecodedName, Markers};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

mod error;


/// Something that runs on the directory of generated sources before they are compiled.
pub trait PreBuildHook {
    /// Prepares `directory` for compilation. An error must abort the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be prepared.
    fn before_compile(&self, directory: &Path) -> Result<(), NormalizeError>;
}

/// A planned or performed rename.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rename {
    /// Path of the encoded file.
    pub source: PathBuf,
    /// Path of the decoded file, in the same directory.
    pub target: PathBuf,
}

/// Renames the generated sources of a single, flat directory.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    markers: Markers,
}

impl Normalizer {
    /// Creates a normalizer for names using `markers`.
    #[must_use]
    pub const fn new(markers: Markers) -> Self {
        Self { markers }
    }

    /// Markers this normalizer decodes.
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Computes the renames for `directory` without touching the file system beyond reading it.
    ///
    /// Regular files whose name starts with the module marker are selected, everything else is left alone. Symbolic
    /// links count as the kind of entry they point to. The plan is sorted by source path.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Collision`] if two files decode to the same name, [`NormalizeError::TargetExists`] if
    /// a decoded name is already taken, and [`NormalizeError::Io`] if the directory could not be read.
    pub fn plan(&self, directory: &Path) -> Result<Vec<Rename>, NormalizeError> {
        let mut plan = Vec::new();

        for entry in fs::read_dir(directory).map_err(|e| NormalizeError::io(directory, e))? {
            let entry = entry.map_err(|e| NormalizeError::io(directory, e))?;
            let file_name = entry.file_name();

            let Some(name) = file_name.to_str() else {
                if file_name.as_encoded_bytes().starts_with(self.markers.module().as_bytes()) {
                    warn!(entry = ?file_name, "encoded name is not valid UTF-8, leaving it alone");
                } else {
                    trace!(entry = ?file_name, "not an encoded name, skipping");
                }

                continue;
            };

            if !self.markers.is_encoded(name) {
                trace!(entry = name, "not an encoded name, skipping");

                continue;
            }

            let source = entry.path();

            if !source.is_file() {
                trace!(entry = name, "not a regular file, skipping");

                continue;
            }

            if let Some(decoded) = DecodedName::parse(name, &self.markers) {
                let target = directory.join(decoded.to_string());

                debug!(source = name, target = %decoded, "planned rename");

                plan.push(Rename { source, target });
            }
        }

        plan.sort_unstable();

        check_plan(&plan)?;

        Ok(plan)
    }

    /// Plans and performs the renames for `directory`. Returns the renames in the order they were performed.
    ///
    /// # Errors
    ///
    /// Fails before renaming anything if planning fails (see [`Normalizer::plan`]). A file system error during a rename
    /// aborts the pass, leaving earlier renames in place.
    pub fn normalize(&self, directory: &Path) -> Result<Vec<Rename>, NormalizeError> {
        let plan = self.plan(directory)?;

        for rename in &plan {
            apply(rename)?;
        }

        info!(directory = %directory.display(), renamed = plan.len(), "normalized generated sources");

        Ok(plan)
    }
}

impl PreBuildHook for Normalizer {
    fn before_compile(&self, directory: &Path) -> Result<(), NormalizeError> {
        self.normalize(directory).map(drop)
    }
}

fn is_occupied(path: &Path) -> Result<bool, NormalizeError> {
    // Do not follow symbolic links: a dangling link still occupies the name.
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(NormalizeError::io(path, e)),
    }
}

fn check_plan(plan: &[Rename]) -> Result<(), NormalizeError> {
    let mut claimed = HashMap::<&Path, &Path>::with_capacity(plan.len());

    for rename in plan {
        if let Some(first) = claimed.insert(&rename.target, &rename.source) {
            return Err(NormalizeError::Collision {
                target: rename.target.clone(),
                first: first.to_path_buf(),
                second: rename.source.clone(),
            });
        }

        if is_occupied(&rename.target)? {
            return Err(NormalizeError::TargetExists {
                path: rename.source.clone(),
                target: rename.target.clone(),
            });
        }
    }

    Ok(())
}

fn apply(rename: &Rename) -> Result<(), NormalizeError> {
    // The directory may have changed since planning.
    if is_occupied(&rename.target)? {
        return Err(NormalizeError::TargetExists {
            path: rename.source.clone(),
            target: rename.target.clone(),
        });
    }

    fs::rename(&rename.source, &rename.target).map_err(|e| NormalizeError::io(&rename.source, e))?;

    info!(source = %rename.source.display(), target = %rename.target.display(), "renamed");

    Ok(())
}
