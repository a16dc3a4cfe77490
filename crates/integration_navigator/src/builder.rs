//! Navigator deep-link builder
//!
//! Assembles the `arcgis-navigator:` route URL from configured stops,
//! routing options, and an optional callback. Generation is a pure function
//! of builder state: the builder can be reconfigured and re-read any number
//! of times, and the same state always yields the same URL.

use tracing::debug;
use url::Url;

use crate::config::NavigatorConfig;
use crate::error::NavigatorLinkError;
use crate::models::{Callback, NavigatorStop, StopKind, StopLocation, TravelMode};

/// Builder for ArcGIS Navigator deep-link URLs
///
/// The `optimize` and `navigate` flags are fixed at construction. The start
/// stop, travel mode, and callback are last-write-wins; intermediate stops
/// accumulate in insertion order, which is the order they appear in the
/// generated URL (duplicates are allowed).
#[derive(Debug, Clone)]
pub struct NavigatorUrlBuilder {
    config: NavigatorConfig,
    optimize: bool,
    navigate: bool,
    travel_mode: Option<TravelMode>,
    start: Option<NavigatorStop>,
    stops: Vec<NavigatorStop>,
    callback: Option<Callback>,
}

impl NavigatorUrlBuilder {
    /// Create a builder targeting the default Navigator scheme
    #[must_use]
    pub fn new(optimize: bool, navigate: bool) -> Self {
        Self {
            config: NavigatorConfig::default(),
            optimize,
            navigate,
            travel_mode: None,
            start: None,
            stops: Vec::new(),
            callback: None,
        }
    }

    /// Create a builder with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorLinkError::InvalidConfiguration`] if the
    /// configuration does not validate.
    pub fn with_config(
        config: NavigatorConfig,
        optimize: bool,
        navigate: bool,
    ) -> Result<Self, NavigatorLinkError> {
        config
            .validate()
            .map_err(NavigatorLinkError::InvalidConfiguration)?;

        Ok(Self {
            config,
            ..Self::new(optimize, navigate)
        })
    }

    /// Whether the Navigator app should re-order stops optimally
    #[must_use]
    pub const fn optimize(&self) -> bool {
        self.optimize
    }

    /// Whether the Navigator app should start navigating immediately
    #[must_use]
    pub const fn navigate(&self) -> bool {
        self.navigate
    }

    /// Number of intermediate stops added so far
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Set the route start, replacing any previous start
    pub fn set_start(&mut self, location: impl Into<StopLocation>, name: Option<&str>) {
        self.start = Some(NavigatorStop::new(
            location.into(),
            name.map(str::to_string),
            StopKind::Start,
        ));
    }

    /// Append an intermediate stop
    pub fn add_stop(&mut self, location: impl Into<StopLocation>, name: Option<&str>) {
        self.stops.push(NavigatorStop::new(
            location.into(),
            name.map(str::to_string),
            StopKind::Stop,
        ));
    }

    /// Set the travel mode, replacing any previous mode
    pub fn set_travel_mode(&mut self, mode: TravelMode) {
        self.travel_mode = Some(mode);
    }

    /// Set the callback, replacing any previous callback
    pub fn set_callback(&mut self, scheme: impl Into<String>, prompt: Option<&str>) {
        self.callback = Some(Callback::new(scheme, prompt.map(str::to_string)));
    }

    /// Generate the deep-link URL from the current builder state
    ///
    /// Fragments are emitted in fixed order: routing flags, travel mode,
    /// start, intermediate stops in insertion order, callback. Generation
    /// short-circuits on the first encoding failure, so no partial URL is
    /// ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorLinkError::Unencodable`] if any text field fails
    /// to encode, or [`NavigatorLinkError::InvalidUrl`] if the assembled
    /// string does not parse as a URL.
    pub fn generate_url(&self) -> Result<Url, NavigatorLinkError> {
        let mut link = format!(
            "{}//?optimize={}&navigate={}",
            self.config.scheme,
            bool_str(self.optimize),
            bool_str(self.navigate)
        );

        if let Some(mode) = &self.travel_mode {
            link.push_str(&format!(
                "&travelmode={}",
                crate::encoding::query_encode(mode.label())?
            ));
        }

        if let Some(start) = &self.start {
            link.push_str(&start.encoded_fragment()?);
        }

        for stop in &self.stops {
            link.push_str(&stop.encoded_fragment()?);
        }

        if let Some(callback) = &self.callback {
            link.push_str(&callback.encoded_fragment()?);
        }

        let url = Url::parse(&link)?;

        debug!(
            %url,
            stops = self.stops.len(),
            has_start = self.start.is_some(),
            has_callback = self.callback.is_some(),
            "Generated Navigator link"
        );

        Ok(url)
    }
}

/// Convert bool to "true"/"false" str for query params
const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}
