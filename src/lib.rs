//! Tracklist Converter Library
//!
//! Loads a YAML tracklist (song metadata for a mix or an album) and renders it
//! into the plain-text tracklist formats shared on different platforms.

pub mod error;
pub mod format;
pub mod tracklist;
pub mod writer;

pub use error::{Error, Result};
pub use format::{RenderOptions, TracklistFormat};
pub use tracklist::{Track, Tracklist};
pub use writer::{output_path, write_tracklists};

/// Current version of the converter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "./Tracklist.yaml";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// File name stem shared by every output file
pub const DEFAULT_FILE_STEM: &str = "Tracklist";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert!(DEFAULT_INPUT_FILE.ends_with("Tracklist.yaml"));
        assert_eq!(DEFAULT_OUTPUT_DIR, ".");
        assert_eq!(DEFAULT_FILE_STEM, "Tracklist");
    }
}
