//! Component file acquisition with offline, remote and placeholder tiers.
//!
//! For every file a component declares, the first tier that succeeds wins:
//! 1. Embedded snapshot (no network)
//! 2. Remote fetch from `<base_url>/<file>`
//! 3. Generated placeholder
//!
//! [`TemplateProvider::fetch`] never fails. Files that fell through to a
//! placeholder are reported as [`ChadcnError::TemplateUnavailable`] warnings.
//!
//! There is no built-in remote source. The remote tier exists only when a
//! base URL is configured (`--registry-url` or `CHADCN_REGISTRY_URL`).

use crate::embedded;
use crate::error::ChadcnError;
use crate::materialize::ComponentFile;
use crate::registry::ComponentDefinition;

use super::http::HttpFetcher;
use super::placeholder::placeholder;

/// Environment variable that configures the remote tier.
pub const REGISTRY_URL_ENV: &str = "CHADCN_REGISTRY_URL";

/// Where a file's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Remote,
    Placeholder,
}

/// Result of fetching one component's files.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// One entry per declared file, in declaration order.
    pub files: Vec<ComponentFile>,

    /// Source of each entry in `files`.
    pub sources: Vec<TemplateSource>,

    /// Files that could not be obtained and were replaced by placeholders.
    pub warnings: Vec<ChadcnError>,
}

impl FetchOutcome {
    /// Whether any file is a placeholder.
    pub fn degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Clone)]
struct RemoteTier {
    fetcher: HttpFetcher,
    base_url: String,
}

/// Produces file payloads for components.
#[derive(Debug, Clone)]
pub struct TemplateProvider {
    use_snapshot: bool,
    remote: Option<RemoteTier>,
}

impl TemplateProvider {
    /// Provider with the embedded snapshot and, when `base_url` is given, a
    /// remote tier at that URL.
    ///
    /// If the HTTP client cannot be built the remote tier is disabled.
    pub fn new(base_url: Option<&str>) -> Self {
        let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) else {
            return Self::offline();
        };
        let remote = match HttpFetcher::new() {
            Ok(fetcher) => Some(RemoteTier {
                fetcher,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "remote templates disabled");
                None
            }
        };

        Self {
            use_snapshot: true,
            remote,
        }
    }

    /// Provider that never touches the network.
    pub fn offline() -> Self {
        Self {
            use_snapshot: true,
            remote: None,
        }
    }

    /// Disable the embedded snapshot tier.
    pub fn without_snapshot(mut self) -> Self {
        self.use_snapshot = false;
        self
    }

    /// Remote base URL, if the remote tier is enabled.
    pub fn base_url(&self) -> Option<&str> {
        self.remote.as_ref().map(|r| r.base_url.as_str())
    }

    /// Fetch every declared file of `component`.
    pub fn fetch(&self, component: &ComponentDefinition) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();

        for file in &component.files {
            let (content, source) = match self.fetch_file(file) {
                Ok(found) => found,
                Err(reason) => {
                    tracing::warn!(component = %component.name, file = %file, %reason, "using placeholder");
                    outcome.warnings.push(ChadcnError::TemplateUnavailable {
                        component: component.name.clone(),
                        file: file.clone(),
                        reason,
                    });
                    (placeholder(file), TemplateSource::Placeholder)
                }
            };

            outcome.files.push(ComponentFile::new(file.clone(), content));
            outcome.sources.push(source);
        }

        outcome
    }

    fn fetch_file(&self, file: &str) -> Result<(String, TemplateSource), String> {
        if self.use_snapshot {
            if let Some(content) = embedded::component_file(file) {
                tracing::debug!(file, "using embedded template");
                return Ok((content.to_string(), TemplateSource::Embedded));
            }
        }

        let Some(remote) = &self.remote else {
            return Err(format!(
                "not in the embedded snapshot and no remote source is configured (set {})",
                REGISTRY_URL_ENV
            ));
        };

        let url = format!("{}/{}", remote.base_url, file);
        tracing::debug!(%url, "fetching remote template");
        remote
            .fetcher
            .fetch(&url)
            .map(|content| (content, TemplateSource::Remote))
            .map_err(|e| format!("{:#}", e))
    }
}

impl Default for TemplateProvider {
    fn default() -> Self {
        Self::new(None)
    }
}
