//! Navigator link data models
//!
//! Typed representations of the route pieces that make up an ArcGIS
//! Navigator deep link: stop locations, named stops, travel modes, and the
//! optional callback to the originating app. Each model renders its own URL
//! fragment; encoding is all-or-nothing per fragment.

use std::fmt;

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::encoding::query_encode;
use crate::error::NavigatorLinkError;

/// A route location, either WGS84 coordinates or a free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopLocation {
    /// Explicit latitude/longitude pair
    Coordinates {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
    /// A free-text address, geocoded by the Navigator app
    Address(String),
}

impl StopLocation {
    /// Render this location as a query-argument value
    ///
    /// Coordinates render as `<latitude>,<longitude>` with default float
    /// formatting; digits, `.`, `-` and `,` are all query-safe, so no
    /// encoding is applied. Addresses are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorLinkError::Unencodable`] if an address cannot be
    /// encoded, or if a coordinate is non-finite.
    pub fn query_argument(&self) -> Result<String, NavigatorLinkError> {
        match self {
            Self::Coordinates {
                latitude,
                longitude,
            } => {
                let rendered = format!("{latitude},{longitude}");
                if latitude.is_finite() && longitude.is_finite() {
                    Ok(rendered)
                } else {
                    Err(NavigatorLinkError::Unencodable { text: rendered })
                }
            },
            Self::Address(address) => query_encode(address),
        }
    }
}

impl From<GeoLocation> for StopLocation {
    fn from(location: GeoLocation) -> Self {
        Self::Coordinates {
            latitude: location.latitude(),
            longitude: location.longitude(),
        }
    }
}

impl From<(f64, f64)> for StopLocation {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::Coordinates {
            latitude,
            longitude,
        }
    }
}

impl From<&str> for StopLocation {
    fn from(address: &str) -> Self {
        Self::Address(address.to_string())
    }
}

impl From<String> for StopLocation {
    fn from(address: String) -> Self {
        Self::Address(address)
    }
}

/// Whether a stop is the route start or an intermediate stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    /// The route origin (`start=` / `startname=`)
    Start,
    /// An intermediate stop (`stop=` / `stopname=`)
    Stop,
}

impl StopKind {
    /// The query key for this kind of stop
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A route stop: a location, an optional display name, and its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorStop {
    /// Where the stop is
    pub location: StopLocation,
    /// Optional display name shown in the Navigator stop list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Start or intermediate stop
    pub kind: StopKind,
}

impl NavigatorStop {
    /// Create a new stop
    #[must_use]
    pub fn new(location: StopLocation, name: Option<String>, kind: StopKind) -> Self {
        Self {
            location,
            name,
            kind,
        }
    }

    /// Render this stop as `&<kind>=<location>[&<kind>name=<name>]`
    ///
    /// # Errors
    ///
    /// Propagates the first encoding failure; no partial fragment is
    /// returned.
    pub fn encoded_fragment(&self) -> Result<String, NavigatorLinkError> {
        let key = self.kind.key();
        let mut fragment = format!("&{key}={}", self.location.query_argument()?);

        if let Some(name) = &self.name {
            fragment.push_str(&format!("&{key}name={}", query_encode(name)?));
        }

        Ok(fragment)
    }
}

/// A callback to the originating app, invoked when routing completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callback {
    /// URL scheme the Navigator app opens to return control
    pub scheme: String,
    /// Optional prompt text shown before the callback fires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Callback {
    /// Create a new callback
    #[must_use]
    pub fn new(scheme: impl Into<String>, prompt: Option<String>) -> Self {
        Self {
            scheme: scheme.into(),
            prompt,
        }
    }

    /// Render this callback as `&callback=<scheme>[&callbackprompt=<prompt>]`
    ///
    /// # Errors
    ///
    /// Fails if the scheme, or a present prompt, cannot be encoded.
    pub fn encoded_fragment(&self) -> Result<String, NavigatorLinkError> {
        let mut fragment = format!("&callback={}", query_encode(&self.scheme)?);

        if let Some(prompt) = &self.prompt {
            fragment.push_str(&format!("&callbackprompt={}", query_encode(prompt)?));
        }

        Ok(fragment)
    }
}

/// Travel mode for the generated route
///
/// The named variants are the default Esri travel modes; `Custom` carries a
/// mode defined by the map's own transportation network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Fastest driving route
    DrivingTime,
    /// Shortest driving route
    DrivingDistance,
    /// Fastest trucking route
    TruckingTime,
    /// Shortest trucking route
    TruckingDistance,
    /// Fastest walking route
    WalkingTime,
    /// Shortest walking route
    WalkingDistance,
    /// Fastest rural driving route
    RuralDrivingTime,
    /// Shortest rural driving route
    RuralDrivingDistance,
    /// A mode defined by the map's transportation network
    Custom(String),
}

impl TravelMode {
    /// The mode name as the Navigator app expects it in `travelmode=`
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::DrivingTime => "Driving Time",
            Self::DrivingDistance => "Driving Distance",
            Self::TruckingTime => "Trucking Time",
            Self::TruckingDistance => "Trucking Distance",
            Self::WalkingTime => "Walking Time",
            Self::WalkingDistance => "Walking Distance",
            Self::RuralDrivingTime => "Rural Driving Time",
            Self::RuralDrivingDistance => "Rural Driving Distance",
            Self::Custom(mode) => mode,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
