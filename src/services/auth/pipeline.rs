//! Ordered authentication pipeline.
//!
//! Schemes are tried in registration order. A scheme that abstains
//! (`AuthOutcome::NoKeyProvided`) hands over to the next one; the first
//! `Success` or `Failure` ends the run.

use std::sync::Arc;

use super::outcome::AuthOutcome;
use super::source::RequestKeySource;

/// A named authentication strategy.
///
/// Implementations must be pure with respect to the request: no I/O and no
/// shared mutable state, so one instance can serve every request concurrently.
pub trait AuthScheme: Send + Sync {
    fn name(&self) -> &str;

    fn authenticate(&self, source: &RequestKeySource<'_>) -> AuthOutcome;
}

#[derive(Clone, Default)]
pub struct AuthPipeline {
    schemes: Vec<Arc<dyn AuthScheme>>,
}

impl std::fmt::Debug for AuthPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPipeline")
            .field("schemes", &self.scheme_names())
            .finish()
    }
}

impl AuthPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: impl AuthScheme + 'static) -> Self {
        self.schemes.push(Arc::new(scheme));
        self
    }

    pub fn scheme_names(&self) -> Vec<&str> {
        self.schemes.iter().map(|s| s.name()).collect()
    }

    /// Run the schemes in order. Returns the deciding scheme's name with its
    /// outcome, or `None` with `NoKeyProvided` when every scheme abstained.
    pub fn run<'s>(&'s self, source: &RequestKeySource<'_>) -> (Option<&'s str>, AuthOutcome) {
        for scheme in &self.schemes {
            let outcome = scheme.authenticate(source);
            if !outcome.is_no_key() {
                return (Some(scheme.name()), outcome);
            }
        }

        (None, AuthOutcome::NoKeyProvided)
    }

    pub fn authenticate(&self, source: &RequestKeySource<'_>) -> AuthOutcome {
        self.run(source).1
    }
}
