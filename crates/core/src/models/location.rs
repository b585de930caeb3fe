//! Geographic coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components fall inside the valid degree ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"`
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::Validation(format!("Expected \"lat,lon\", got {:?}", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| Error::Validation(format!("Invalid coordinate {:?}: {}", part, e)))
        };

        let coords = Coordinates::new(parse(lat)?, parse(lon)?);
        if !coords.is_valid() {
            return Err(Error::Validation(format!(
                "Coordinates out of range: {}",
                coords
            )));
        }
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let c: Coordinates = "19.0674, 72.8681".parse().unwrap();
        assert_eq!(c, Coordinates::new(19.0674, 72.8681));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("19.0674".parse::<Coordinates>().is_err());
        assert!("north,east".parse::<Coordinates>().is_err());
        assert!("91.0,10.0".parse::<Coordinates>().is_err());
    }
}
