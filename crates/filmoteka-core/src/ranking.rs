//! Retention/priority ranking classifier.
//!
//! Pure function of file size and external metadata. Small files are always
//! accepted at a flat low-priority score; large files accumulate bonuses for
//! the promoted source language and a sufficiently high external rating.

/// Files below this size (200 MiB) always classify as 100.
pub const SMALL_FILE_THRESHOLD_BYTES: i64 = 209_715_200;

/// Minimum external rating that earns the rating bonus.
pub const RATING_THRESHOLD: f64 = 5.0;

/// Language code that earns the language bonus (case-insensitive).
pub const BONUS_LANGUAGE: &str = "pl";

/// Compute the ranking score for a movie file.
///
/// Deterministic, no side effects. The result is always one of
/// 0, 100, 200 or 300.
pub fn classify(size_in_bytes: i64, language_code: &str, average_rating: f64) -> i32 {
    if size_in_bytes < SMALL_FILE_THRESHOLD_BYTES {
        return 100;
    }

    let mut ranking = 0;

    if language_code.eq_ignore_ascii_case(BONUS_LANGUAGE) {
        ranking += 200;
    }

    if average_rating >= RATING_THRESHOLD {
        ranking += 100;
    }

    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_file_is_always_100() {
        assert_eq!(classify(0, "pl", 9.9), 100);
        assert_eq!(classify(104_857_600, "en", 0.0), 100);
        // One byte under the threshold still counts as small
        assert_eq!(classify(SMALL_FILE_THRESHOLD_BYTES - 1, "pl", 9.9), 100);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        // Exactly at the threshold the file is large
        assert_eq!(classify(SMALL_FILE_THRESHOLD_BYTES, "en", 0.0), 0);
        assert_eq!(classify(SMALL_FILE_THRESHOLD_BYTES, "pl", 5.0), 300);
    }

    #[test]
    fn test_large_file_bonuses() {
        assert_eq!(classify(300_000_000, "PL", 5.0), 300);
        assert_eq!(classify(300_000_000, "pl", 4.99), 200);
        assert_eq!(classify(300_000_000, "en", 5.0), 100);
        assert_eq!(classify(300_000_000, "en", 0.0), 0);
    }

    #[test]
    fn test_language_match_is_case_insensitive() {
        assert_eq!(classify(300_000_000, "Pl", 0.0), 200);
        assert_eq!(classify(300_000_000, "pL", 0.0), 200);
        assert_eq!(classify(300_000_000, "plx", 0.0), 0);
    }

    #[test]
    fn test_rating_boundary_is_inclusive() {
        assert_eq!(classify(300_000_000, "en", 5.0), 100);
        assert_eq!(classify(300_000_000, "en", 4.999_999), 0);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(250 * 1024 * 1024, "pl", 7.6), 300);
        }
    }
}
