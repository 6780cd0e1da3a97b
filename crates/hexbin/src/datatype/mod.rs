use std::{fmt, str::FromStr};

use crate::{
    codec::{decode_bytes, try_canonicalize},
    errors::MalformedHexInput,
    log,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetError {
    Malformed,
    Length { expected: usize, actual: usize },
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    NotEnumerated(String),
    InvalidFacet(String),
}

impl std::error::Error for FacetError {}

impl fmt::Display for FacetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetError::Malformed => write!(f, "value is not a valid hexBinary literal"),
            FacetError::Length { expected, actual } => write!(
                f,
                "value has {} octets, length facet requires {}",
                actual, expected
            ),
            FacetError::MinLength { min, actual } => write!(
                f,
                "value has {} octets, minLength facet requires at least {}",
                actual, min
            ),
            FacetError::MaxLength { max, actual } => write!(
                f,
                "value has {} octets, maxLength facet allows at most {}",
                actual, max
            ),
            FacetError::NotEnumerated(value) => {
                write!(f, "value {} is not in the enumeration", value)
            }
            FacetError::InvalidFacet(message) => write!(f, "invalid facets: {}", message),
        }
    }
}

impl From<MalformedHexInput> for FacetError {
    fn from(_: MalformedHexInput) -> Self {
        FacetError::Malformed
    }
}

/// A hexBinary value: its canonical literal and the octets it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexBinaryValue {
    canonical: String,
    octets: Vec<u8>,
}

impl HexBinaryValue {
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    pub fn len(&self) -> usize {
        self.octets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }
}

impl FromStr for HexBinaryValue {
    type Err = MalformedHexInput;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let canonical = try_canonicalize(literal)?;
        let octets = decode_bytes(canonical.as_bytes())
            .ok_or(MalformedHexInput)?
            .into_vec();
        Ok(HexBinaryValue { canonical, octets })
    }
}

impl fmt::Display for HexBinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

// Constraining facets of a hexBinary simple type, lengths are in octets
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HexBinaryFacets {
    pub length: Option<usize>,     // Exact number of octets
    pub min_length: Option<usize>, // Minimum number of octets
    pub max_length: Option<usize>, // Maximum number of octets
    pub enumeration: Vec<String>,  // Allowed literals, compared by value
}

impl HexBinaryFacets {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Checks the facets are consistent with each other and every enumeration literal is valid.
    pub fn check(&self) -> Result<(), FacetError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            return Err(FacetError::InvalidFacet(format!(
                "minLength {} is greater than maxLength {}",
                min, max
            )));
        }
        if let Some(length) = self.length {
            if self.min_length.is_some_and(|min| min > length) {
                return Err(FacetError::InvalidFacet(format!(
                    "length {} is lower than minLength",
                    length
                )));
            }
            if self.max_length.is_some_and(|max| max < length) {
                return Err(FacetError::InvalidFacet(format!(
                    "length {} is greater than maxLength",
                    length
                )));
            }
        }
        for literal in &self.enumeration {
            if HexBinaryValue::from_str(literal).is_err() {
                return Err(FacetError::InvalidFacet(format!(
                    "enumeration literal {:?} is not valid hexBinary",
                    literal
                )));
            }
        }
        Ok(())
    }

    /// Parses `literal` and checks it against the facets.
    /// Facets are assumed consistent, see `check`.
    pub fn validate(&self, literal: &str) -> Result<HexBinaryValue, FacetError> {
        let value = HexBinaryValue::from_str(literal).inspect_err(|_| {
            log::debug!("Rejected malformed hexBinary literal of length {}", literal.len());
        })?;
        self.check_length(value.len())?;

        if !self.enumeration.is_empty() && !self.is_enumerated(&value) {
            log::debug!("hexBinary value {} not in enumeration", value);
            return Err(FacetError::NotEnumerated(value.canonical));
        }
        Ok(value)
    }

    fn check_length(&self, actual: usize) -> Result<(), FacetError> {
        if let Some(expected) = self.length
            && actual != expected
        {
            return Err(FacetError::Length { expected, actual });
        }
        if let Some(min) = self.min_length
            && actual < min
        {
            return Err(FacetError::MinLength { min, actual });
        }
        if let Some(max) = self.max_length
            && actual > max
        {
            return Err(FacetError::MaxLength { max, actual });
        }
        Ok(())
    }

    fn is_enumerated(&self, value: &HexBinaryValue) -> bool {
        self.enumeration
            .iter()
            .filter_map(|literal| try_canonicalize(literal).ok())
            .any(|canonical| canonical == value.canonical)
    }
}
