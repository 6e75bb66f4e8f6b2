//! Apiary - beeswarm (dodge) layout for one-dimensional data.
//!
//! Given a sequence of numeric values, Apiary projects them onto a chart
//! axis and computes non-overlapping circle placements: every circle keeps
//! its exact position along the primary axis and is nudged perpendicular to
//! it just far enough to avoid its neighbors. The output is pure geometry
//! (circle centers and a chart size) for a rendering surface to consume;
//! Apiary itself draws nothing.
//!
//! The crate provides:
//!
//! - **Dodge engine**: the core packing algorithm ([`layout::dodge`])
//! - **Swarm assembly**: filtering, projection, and sizing ([`layout::swarm`])
//! - **Geometry**: points, extents, and linear scales ([`geometry`] module)
//! - **Records**: deserializable poll-result payloads ([`response`] module)

pub mod config;
pub mod geometry;
pub mod layout;
pub mod response;

mod error;

pub use error::{ApiaryError, LayoutError};

use log::{debug, info, trace};

use config::AppConfig;
use layout::swarm;
use response::PollResults;

/// Builder for loading poll results and computing swarm layouts.
///
/// # Examples
///
/// ```
/// use apiary::{SwarmBuilder, config::AppConfig};
///
/// let source = r#"{"data": [{"label": "yes", "value": 1}, {"label": "no", "value": 1}]}"#;
///
/// let builder = SwarmBuilder::new(AppConfig::default());
/// let results = builder.load(source).expect("Failed to load");
/// let layout = builder.layout(&results).expect("Failed to lay out");
///
/// assert_eq!(layout.circles().len(), 2);
/// ```
#[derive(Default)]
pub struct SwarmBuilder {
    config: AppConfig,
}

impl SwarmBuilder {
    /// Create a new swarm builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON poll-results payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiaryError::Data`] when the payload is not valid JSON or
    /// does not match the poll-results shape.
    pub fn load(&self, source: &str) -> Result<PollResults, ApiaryError> {
        info!("Loading poll results");

        let results: PollResults = serde_json::from_str(source)
            .map_err(|err| ApiaryError::Data(format!("invalid poll results: {err}")))?;

        debug!(
            samples_len = results.data().len(),
            vote_count:? = results.vote_count();
            "Poll results loaded",
        );
        trace!(results:?; "Loaded poll results");

        Ok(results)
    }

    /// Compute the swarm layout for a set of poll results.
    ///
    /// A domain configured in the [`AppConfig`] wins; otherwise the domain
    /// suggested by the payload is used; otherwise the extent of the finite
    /// values. An empty result set yields an empty layout, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiaryError::Config`] for an invalid configuration and
    /// [`ApiaryError::Layout`] when the layout preconditions are violated.
    pub fn layout(&self, results: &PollResults) -> Result<swarm::Layout, ApiaryError> {
        info!("Calculating swarm layout");

        let mut swarm_config = self.config.swarm().clone();
        if swarm_config.domain().is_none() {
            if let Some([min, max]) = results.domain() {
                swarm_config = swarm_config.with_domain(min, max);
            }
        }

        let values = if results.is_empty() {
            Vec::new()
        } else {
            results.values()
        };

        let engine = swarm::Engine::new(swarm_config);
        let layout = engine.calculate(&values)?;

        debug!(
            circles_len = layout.circles().len(),
            width = layout.size().width(),
            height = layout.size().height();
            "Layout calculated",
        );

        Ok(layout)
    }
}
