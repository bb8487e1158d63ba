//! Coarse classification of `info.version` changes.
//!
//! Version strings are free-form, so only the first two dot-separated segments
//! are looked at. Anything that does not parse is treated as a major bump.

use std::num::ParseIntError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Other,
    Unparsable,
}

fn leading_segments(version: &str) -> Result<(u64, Option<u64>), ParseIntError> {
    let mut segments = version.trim().split('.');
    let major = segments.next().unwrap_or_default().parse()?;
    let minor = segments.next().map(str::parse).transpose()?;
    Ok((major, minor))
}

pub fn classify(old: &str, new: &str) -> VersionBump {
    let (Ok((old_major, old_minor)), Ok((new_major, new_minor))) =
        (leading_segments(old), leading_segments(new))
    else {
        return VersionBump::Unparsable;
    };
    if old_major != new_major {
        return VersionBump::Major;
    }
    match (old_minor, new_minor) {
        (Some(a), Some(b)) if a != b => VersionBump::Minor,
        _ => VersionBump::Other,
    }
}
