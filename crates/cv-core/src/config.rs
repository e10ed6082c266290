use anyhow::{Context, Result};

/// Tunable thresholds for the heuristic pipeline.
///
/// The segmentation minimums are empirically tuned and can misfire on CVs
/// with unconventional layouts (a date range before the title line, for
/// instance), so they are carried here instead of being hard-coded at the
/// call sites.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// A year token starts a new entry block once the current block has this
    /// many lines.
    pub year_break_min_lines: usize,
    /// A title/degree hint starts a new entry block once the current block
    /// has this many lines.
    pub hint_break_min_lines: usize,
    /// Lines attached after each anchor in the whole-text fallback scan.
    pub fallback_trail_lines: usize,
    /// Maximum blocks produced by the fallback scan.
    pub fallback_max_blocks: usize,
    /// Highlights kept per experience entry.
    pub max_highlights: usize,
    /// Skills kept in the final record.
    pub max_skills: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            year_break_min_lines: 2,
            hint_break_min_lines: 3,
            fallback_trail_lines: 4,
            fallback_max_blocks: 6,
            max_highlights: 8,
            max_skills: 30,
        }
    }
}

/// Credentials and timeout for the external refinement vendors.
/// Every key is optional: a missing key simply disables that vendor.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub timeout_secs: u64,
}

impl AssistConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(AssistConfig {
            // The original deployment accepted either spelling.
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("GOOGLE_API_KEY")),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            timeout_secs: std::env::var("ASSIST_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .unwrap_or(Ok(30))
                .context("ASSIST_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_matches_documented_thresholds() {
        let t = Tuning::default();
        assert_eq!(t.year_break_min_lines, 2);
        assert_eq!(t.hint_break_min_lines, 3);
        assert_eq!(t.fallback_trail_lines, 4);
        assert_eq!(t.fallback_max_blocks, 6);
        assert_eq!(t.max_highlights, 8);
        assert_eq!(t.max_skills, 30);
    }
}
