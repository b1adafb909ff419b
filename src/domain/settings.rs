//! Runtime annotation settings

/// Settings consumed by the annotation pipeline for one pass.
///
/// Constructed from persisted configuration; normalization happens here so the
/// pipeline never sees empty prefixes or a base URL with a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    prefixes: Vec<String>,
    base_url: String,
    use_styles: bool,
}

impl Settings {
    /// Create normalized settings.
    ///
    /// Empty prefixes are dropped, duplicates keep their first occurrence,
    /// and trailing slashes are stripped from the base URL.
    pub fn new<I, S>(prefixes: I, base_url: &str, use_styles: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            if prefix.is_empty() || unique.contains(&prefix) {
                continue;
            }
            unique.push(prefix);
        }

        Settings {
            prefixes: unique,
            base_url: base_url.trim_end_matches('/').to_string(),
            use_styles,
        }
    }

    /// Ordered list of ticket prefixes (unique, non-empty)
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Tracker base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether rendered links carry the tickmark style class
    pub fn use_styles(&self) -> bool {
        self.use_styles
    }

    /// True when at least one prefix is configured
    pub fn has_prefixes(&self) -> bool {
        !self.prefixes.is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(["HD"], "https://jira.example.com", true)
    }
}
