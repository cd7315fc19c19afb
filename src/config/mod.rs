//! Configuration and path management for Spendview

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
