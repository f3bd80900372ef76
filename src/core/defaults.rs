//! Compiled-in rewrite parameters.
//!
//! The utility is deliberately not configurable: the stale path, its
//! replacement, and the project file it edits are fixed at build time and
//! never derived from arguments, environment variables, or config files.

/// Stale JUCE install path to search for.
pub const OLD_PATH: &str = "/Users/nickfox137/Downloads/JUCE";

/// Current JUCE install path to substitute.
pub const NEW_PATH: &str = "/Users/nickfox137/Documents/JUCE-8.0.8";

/// Xcode project file the rewrite applies to. Treated as opaque text.
pub const PROJECT_FILE: &str =
    "/Users/nickfox137/Documents/chatty-channel/AIplayer/AIplayer/Builds/MacOSX/AIplayer.xcodeproj/project.pbxproj";
