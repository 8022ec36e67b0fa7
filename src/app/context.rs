use crate::domain::ExpandConfig;
use crate::ports::{CommandRunner, Diagnostics, RemoteFetcher};
use crate::services::PathResolver;

/// Application context holding dependencies for an expansion run.
pub struct AppContext<F: RemoteFetcher, C: CommandRunner, D: Diagnostics> {
    fetcher: F,
    runner: C,
    diagnostics: D,
    resolver: PathResolver,
    config: ExpandConfig,
}

impl<F: RemoteFetcher, C: CommandRunner, D: Diagnostics> AppContext<F, C, D> {
    /// Create a new application context.
    pub fn new(fetcher: F, runner: C, diagnostics: D, config: ExpandConfig) -> Self {
        Self { fetcher, runner, diagnostics, resolver: PathResolver::new(), config }
    }

    /// Replace the path resolver (e.g. to pin the home directory).
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn runner(&self) -> &C {
        &self.runner
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }
}
