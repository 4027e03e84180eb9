//! Compile-time build information embedded by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `dino-run <version> (<date>, <commit>)` for `--version`.
pub fn version_string() -> String {
    format!(
        "dino-run {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // 7 hex chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_string_mentions_package() {
        let version = version_string();
        assert!(version.starts_with("dino-run "));
        assert!(version.contains(BUILD_COMMIT));
    }
}
