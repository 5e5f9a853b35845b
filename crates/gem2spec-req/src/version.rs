//! Dotted version model with padded comparison and bump

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RequirementError, Result};

lazy_static! {
    // Release number first, then any mix of numeric and text segments
    static ref VERSION_RE: Regex = Regex::new(r"^[0-9]+(?:\.[0-9A-Za-z]+)*$").unwrap();
}

/// One dot-separated piece of a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Numeric(u64),
    Text(String),
}

impl Segment {
    fn parse(raw: &str, version: &str) -> Result<Self> {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse::<u64>().map(Segment::Numeric).map_err(|_| {
                RequirementError::invalid_version(version, format!("segment {} is out of range", raw))
            })
        } else {
            Ok(Segment::Text(raw.to_string()))
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Segment::Numeric(_))
    }

    /// Numbers compare numerically, text lexically, and text sorts below any number.
    pub fn compare(&self, other: &Segment) -> Ordering {
        match (self, other) {
            (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            (Segment::Text(_), Segment::Numeric(_)) => Ordering::Less,
            (Segment::Numeric(_), Segment::Text(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Numeric(n) => write!(f, "{}", n),
            Segment::Text(s) => write!(f, "{}", s),
        }
    }
}

static ZERO: Segment = Segment::Numeric(0);

/// A parsed version such as `1.2.3` or `1.2.3.beta.8`.
///
/// The text it was parsed from is kept and rendered verbatim, so `1.0` and
/// `1.0.0` print differently even though they compare equal.
#[derive(Debug, Clone)]
pub struct Version {
    text: String,
    segments: Vec<Segment>,
}

impl Version {
    /// Parse a version; blank input is the zero version.
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(Version::zero());
        }

        if !VERSION_RE.is_match(text) {
            return Err(RequirementError::invalid_version(text, "malformed version number string"));
        }

        let segments = text
            .split('.')
            .map(|raw| Segment::parse(raw, text))
            .collect::<Result<Vec<_>>>()?;

        Ok(Version {
            text: text.to_string(),
            segments,
        })
    }

    /// The `0` version, which matches anything when used as a lower bound
    pub fn zero() -> Self {
        Version {
            text: "0".to_string(),
            segments: vec![Segment::Numeric(0)],
        }
    }

    fn from_segments(segments: Vec<Segment>) -> Self {
        let text = segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Version { text, segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The leading run of numeric segments, up to the first text segment
    pub fn release(&self) -> &[Segment] {
        let end = self
            .segments
            .iter()
            .position(|s| !s.is_numeric())
            .unwrap_or(self.segments.len());
        &self.segments[..end]
    }

    pub fn is_prerelease(&self) -> bool {
        self.segments.iter().any(|s| !s.is_numeric())
    }

    /// Compare segment by segment, padding the shorter side with zeros.
    pub fn compare(&self, other: &Version) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).unwrap_or(&ZERO);
            let b = other.segments.get(i).unwrap_or(&ZERO);
            match a.compare(b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }

    /// True when this version equals `0` under padded comparison.
    pub fn is_zero(&self) -> bool {
        self.segments.iter().all(|s| *s == ZERO)
    }

    /// Next version that breaks compatibility: drop any pre-release text,
    /// drop the last release segment unless it is the only one, then
    /// increment the new last segment.
    ///
    /// `1.2.3` bumps to `1.3`, `1.2` to `2`, `1.2.3.beta.8` to `1.3`, `1.beta` to `2`.
    pub fn bump(&self) -> Result<Version> {
        if self.segments.len() < 2 {
            return Err(RequirementError::invalid_version(
                &self.text,
                "cannot bump a version with fewer than two segments",
            ));
        }

        let mut segments = self.release().to_vec();
        if segments.len() > 1 {
            segments.pop();
        }

        let Some(Segment::Numeric(last)) = segments.last_mut() else {
            return Err(RequirementError::invalid_version(&self.text, "last release segment is not numeric"));
        };
        *last = last
            .checked_add(1)
            .ok_or_else(|| RequirementError::invalid_version(&self.text, "segment overflow while bumping"))?;

        Ok(Version::from_segments(segments))
    }
}

impl FromStr for Version {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_segments() {
        assert_eq!(
            v("1.2.3.beta.8").segments(),
            &[
                Segment::Numeric(1),
                Segment::Numeric(2),
                Segment::Numeric(3),
                Segment::Text("beta".to_string()),
                Segment::Numeric(8),
            ]
        );
        assert_eq!(v(" 1.0 ").as_str(), "1.0");
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(v("").as_str(), "0");
        assert_eq!(v(""), Version::zero());
        assert!(v("   ").is_zero());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Version::parse("beta").is_err());
        assert!(Version::parse("1..2").is_err());
        assert!(Version::parse("1.2.").is_err());
        assert!(Version::parse("1.2-3").is_err());
        assert!(Version::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_padded_equality() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1"), v("1.0.0.0"));
        assert_ne!(v("1.0"), v("1.0.1"));
        for s in ["0", "1.2", "3.4.5", "1.2.3.beta.8"] {
            assert_eq!(v(s).compare(&v(&format!("{}.0", s))), Ordering::Equal);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.2") < v("1.10"));
        assert!(v("1.2.3") > v("1.2"));
        assert!(v("1.2.3.beta") < v("1.2.3"));
        assert!(v("1.2.3.alpha") < v("1.2.3.beta"));
        assert!(v("2") > v("1.99.99"));
    }

    #[test]
    fn test_zero_sentinel() {
        assert!(v("0").is_zero());
        assert!(v("0.0").is_zero());
        assert!(v("0.0.0").is_zero());
        assert!(!v("0.1").is_zero());
        assert!(!v("0.0.a").is_zero());
        assert!(Version::zero().is_zero());
    }

    #[test]
    fn test_bump() {
        assert_eq!(v("1.2.3").bump().unwrap().as_str(), "1.3");
        assert_eq!(v("1.2").bump().unwrap().as_str(), "2");
        assert_eq!(v("1.12.3").bump().unwrap().as_str(), "1.13");
        assert_eq!(v("1.2.3.beta.8").bump().unwrap().as_str(), "1.3");
    }

    #[test]
    fn test_bump_single_segment_fails() {
        let err = v("1").bump().unwrap_err();
        assert!(matches!(err, RequirementError::InvalidVersion { .. }));
        assert!(v("7").bump().is_err());
    }

    #[test]
    fn test_bump_single_release_segment_with_text() {
        assert_eq!(v("1.beta").bump().unwrap().as_str(), "2");
        assert_eq!(v("1.rc1").bump().unwrap().as_str(), "2");
        assert_eq!(v("2.rc.1").bump().unwrap().as_str(), "3");
    }

    #[test]
    fn test_release_and_prerelease() {
        let version = v("2.0.rc.1");
        assert_eq!(version.release(), &[Segment::Numeric(2), Segment::Numeric(0)]);
        assert!(version.is_prerelease());
        assert!(!v("2.0.1").is_prerelease());
    }
}
