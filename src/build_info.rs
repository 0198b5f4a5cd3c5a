//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `wireframe 0.1.0 (2026-01-31 abc1234)`
pub fn version_string(binary: &str) -> String {
    format!(
        "{} {} ({} {})",
        binary,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
