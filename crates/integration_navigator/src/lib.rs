#![forbid(unsafe_code)]
//! ArcGIS Navigator deep-link integration
//!
//! Builds well-formed `arcgis-navigator:` URLs that launch the Navigator
//! app with a pre-populated route: an optional start, one or more stops,
//! routing options, an optional travel mode, and an optional callback that
//! returns control to the calling application.
//!
//! # Architecture
//!
//! The crate is a pure, synchronous URL assembler. [`NavigatorUrlBuilder`]
//! holds the route configuration and renders it into a [`url::Url`];
//! [`StopLocation`], [`NavigatorStop`], and [`Callback`] each encode their
//! own URL fragment, and any percent-encoding failure voids the whole
//! build. Checking whether the Navigator app is installed and opening the
//! URL are left to the host platform.
//!
//! # Example
//!
//! ```rust
//! use integration_navigator::{NavigatorUrlBuilder, TravelMode};
//!
//! let mut builder = NavigatorUrlBuilder::new(false, true);
//! builder.set_start((34.1, -117.2), Some("Home"));
//! builder.add_stop("100 Main St", None);
//! builder.set_travel_mode(TravelMode::DrivingTime);
//! builder.set_callback("myapp://", Some("Return to MyApp"));
//!
//! let url = builder.generate_url()?;
//! assert!(url.as_str().starts_with("arcgis-navigator://?optimize=false&navigate=true"));
//! # Ok::<(), integration_navigator::NavigatorLinkError>(())
//! ```

mod builder;
mod config;
mod encoding;
mod error;
mod models;

pub use builder::NavigatorUrlBuilder;
pub use config::{NAVIGATOR_SCHEME, NavigatorConfig};
pub use encoding::query_encode;
pub use error::NavigatorLinkError;
pub use models::{Callback, NavigatorStop, StopKind, StopLocation, TravelMode};
