//! Entry points: the stateless `to_olde_english` function and the
//! configurable [`OldeEngine`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::decoration::{decorate, OpenerSource};
use crate::core::pipeline::{Pipeline, StageTrace};
use crate::schema::config::EngineConfig;
use crate::schema::request::{Style, TransformOptions, TransformRequest};

/// Render `text` in Early Modern English.
///
/// Total over all inputs: empty text yields empty text (plus an opener in
/// bardic style), and text with nothing to rewrite comes back unchanged.
/// Bardic openers are drawn from the calling thread's RNG, so concurrent
/// callers share no state.
pub fn to_olde_english(text: &str, options: &TransformOptions) -> String {
    let rewritten = Pipeline::standard().run(text);
    decorate(rewritten, options.style, &mut rand::thread_rng())
}

/// [`to_olde_english`] for a serialized request; missing text is empty.
pub fn transform(request: &TransformRequest) -> String {
    to_olde_english(request.text(), &request.options())
}

/// A transform engine owning its opener source, for callers that need
/// reproducible decoration or a default style.
pub struct OldeEngine {
    pipeline: &'static Pipeline,
    openers: Box<dyn OpenerSource + Send>,
    default_style: Style,
}

/// Builder for constructing an `OldeEngine`.
pub struct OldeEngineBuilder {
    seed: Option<u64>,
    openers: Option<Box<dyn OpenerSource + Send>>,
    default_style: Style,
}

impl OldeEngine {
    pub fn builder() -> OldeEngineBuilder {
        OldeEngineBuilder {
            seed: None,
            openers: None,
            default_style: Style::Plain,
        }
    }

    pub fn transform(&mut self, text: &str, options: &TransformOptions) -> String {
        let rewritten = self.pipeline.run(text);
        decorate(rewritten, options.style, &mut *self.openers)
    }

    /// Transform with the engine's default style.
    pub fn olde_ify(&mut self, text: &str) -> String {
        let options = TransformOptions::with_style(self.default_style);
        self.transform(text, &options)
    }

    pub fn handle(&mut self, request: &TransformRequest) -> String {
        self.transform(request.text(), &request.options())
    }

    /// Per-stage intermediate output; decoration is not included.
    pub fn trace(&self, text: &str) -> Vec<StageTrace> {
        self.pipeline.trace(text)
    }

    pub fn default_style(&self) -> Style {
        self.default_style
    }
}

impl OldeEngineBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a specific opener source. Takes precedence over `seed`.
    pub fn opener_source<S>(mut self, source: S) -> Self
    where
        S: OpenerSource + Send + 'static,
    {
        self.openers = Some(Box::new(source));
        self
    }

    pub fn default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    pub fn from_config(mut self, config: &EngineConfig) -> Self {
        if let Some(seed) = config.seed {
            self.seed = Some(seed);
        }
        self.default_style = config.default_style;
        self
    }

    pub fn build(self) -> OldeEngine {
        let openers = match (self.openers, self.seed) {
            (Some(source), _) => source,
            (None, Some(seed)) => Box::new(StdRng::seed_from_u64(seed)),
            (None, None) => Box::new(StdRng::from_entropy()),
        };
        OldeEngine {
            pipeline: Pipeline::standard(),
            openers,
            default_style: self.default_style,
        }
    }
}
