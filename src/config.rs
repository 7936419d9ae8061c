//! Runtime configuration read from the environment

use std::path::PathBuf;

const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
const CACHE_DIR_VAR: &str = "EMEL0_CACHE_DIR";
const DEFAULT_CACHE_DIR: &str = ".cache";

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    /// Where the theme preference is persisted
    pub cache_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            supabase_url: None,
            supabase_anon_key: None,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as unset
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            supabase_url: var(SUPABASE_URL_VAR),
            supabase_anon_key: var(SUPABASE_ANON_KEY_VAR),
            cache_dir: var(CACHE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SUPABASE_URL", "https://proj.supabase.co"),
            ("SUPABASE_ANON_KEY", "  "),
            ("EMEL0_CACHE_DIR", "/tmp/emel0"),
        ]);
        let config = SiteConfig::from_lookup(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.supabase_url.as_deref(), Some("https://proj.supabase.co"));
        assert_eq!(config.supabase_anon_key, None);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/emel0"));
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.cache_dir, PathBuf::from(".cache"));
        assert!(config.supabase_url.is_none());
    }
}
