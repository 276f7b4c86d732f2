use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Classic and fine-grained GitHub tokens.
static GITHUB_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gh[pousr]_[A-Za-z0-9]{20,}|github_pat_[A-Za-z0-9_]{20,})")
        .expect("github token pattern is valid")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bBearer\s+[A-Za-z0-9\-_\.]{8,}").expect("bearer pattern is valid")
});

static TOKEN_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?(?:access_token|api_key|token|secret)["']?\s*[:=]\s*["']?[A-Za-z0-9\-_\.]{8,}["']?"#)
        .expect("token field pattern is valid")
});

/// Redacts credentials from text before it is logged
///
/// Error messages may echo response bodies or request details; everything
/// the run logs about a failure passes through `scrub_message` first.
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = GITHUB_TOKEN_PATTERN.replace_all(message, "[TOKEN_REDACTED]");
        let scrubbed = BEARER_PATTERN.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        let scrubbed = TOKEN_FIELD_PATTERN.replace_all(&scrubbed, |caps: &regex::Captures| {
            let full_match = &caps[0];
            full_match
                .find([':', '='])
                .map_or_else(
                    || "[REDACTED]".to_string(),
                    |pos| format!("{}{}[REDACTED]", &full_match[..pos], &full_match[pos..=pos]),
                )
        });
        scrubbed.into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
