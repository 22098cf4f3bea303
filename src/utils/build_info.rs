//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version label shown on the score board, e.g. `v0.1.0 2026-10-19 (a1b2c3d)`.
pub fn version_label() -> String {
    format!("v{} {} ({})", BUILD_VERSION, BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_VERSION.is_empty());
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_matches_package() {
        assert_eq!(BUILD_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_build_commit_format() {
        // Should be 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_label_contains_all_parts() {
        let label = version_label();
        assert!(label.starts_with(&format!("v{}", BUILD_VERSION)));
        assert!(label.contains(BUILD_DATE));
        assert!(label.contains(BUILD_COMMIT));
    }
}
