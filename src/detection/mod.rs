//! Project and package manager detection.

pub mod file_detection;
pub mod package_manager;
pub mod project;

pub use package_manager::{PackageManager, PackageManagerDetector};
pub use project::{ProjectDetector, ProjectSignals, TailwindDetection};
