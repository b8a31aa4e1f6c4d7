//! Rendering decoded names.
//!
//! [`VersionToken`] displays in its canonical form, without the build suffix. The alternate format (`{:#}`) keeps the
//! suffix, which is useful in diagnostics. [`DecodedName`] displays as the replacement file name.

use crate::nimcache::{DecodedName, OUTPUT_PREFIX, OUTPUT_SEPARATOR, VersionToken};
use std::fmt::{self, Display, Formatter, Write};

impl Display for VersionToken<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}-{}.{}.{}", self.name, self.major, self.minor, self.patch)?;

        match self.build {
            Some(build) if f.alternate() => write!(f, "-{build}"),
            _ => Ok(()),
        }
    }
}

impl Display for DecodedName<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(OUTPUT_PREFIX)?;

        match self {
            Self::Module(name) => f.write_str(name),
            Self::Package { package, path } => {
                write!(f, "{package}")?;

                for segment in path {
                    f.write_char(OUTPUT_SEPARATOR)?;
                    f.write_str(segment)?;
                }

                Ok(())
            }
        }
    }
}
