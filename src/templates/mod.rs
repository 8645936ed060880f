//! Template acquisition and generation.
//!
//! - [`provider`] - component file payloads (embedded, remote, placeholder)
//! - [`http`] - blocking HTTP client for the remote tier
//! - [`placeholder`] - stand-in content for unavailable files
//! - [`scaffold`] - utility module and Tailwind config written by `init`
//! - [`theme_css`] - theme variable CSS

pub mod http;
pub mod placeholder;
pub mod provider;
pub mod scaffold;
pub mod theme_css;

pub use http::HttpFetcher;
pub use placeholder::{is_placeholder, placeholder};
pub use provider::{FetchOutcome, TemplateProvider, TemplateSource, REGISTRY_URL_ENV};
pub use scaffold::{tailwind_config, tailwind_config_name, utils_module};
pub use theme_css::theme_css;
