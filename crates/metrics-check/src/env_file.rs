//! Environment file loading.
//!
//! Reads `KEY=VALUE` lines from a local file (conventionally `.env.local`)
//! and overlays the process environment on top. Process environment values
//! always take precedence over file values.

use std::collections::HashMap;
use std::path::Path;

/// Default environment file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Merged configuration mapping.
pub type EnvMap = HashMap<String, String>;

/// Parse environment file contents.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Only the
/// first `=` splits key from value, so values may contain `=` themselves.
/// Later duplicates overwrite earlier ones.
pub fn parse_env_str(content: &str) -> EnvMap {
    let mut vars = EnvMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        vars.insert(key.trim().to_string(), value.trim().to_string());
    }

    vars
}

/// Read and parse an environment file.
///
/// A missing file yields an empty mapping. A file that exists but cannot
/// be read is logged and also yields an empty mapping.
pub fn read_env_file(path: &Path) -> EnvMap {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Environment file not found, skipping");
        return EnvMap::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let vars = parse_env_str(&content);
            tracing::debug!(
                path = %path.display(),
                count = vars.len(),
                "Loaded environment file"
            );
            vars
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read environment file");
            EnvMap::new()
        }
    }
}

/// Overlay `vars` onto `base`, overwriting same-named keys.
pub fn overlay<I>(mut base: EnvMap, vars: I) -> EnvMap
where
    I: IntoIterator<Item = (String, String)>,
{
    base.extend(vars);
    base
}

/// Load the environment file at `path` and overlay the process environment.
pub fn load(path: &Path) -> EnvMap {
    // vars_os so a single non-UTF-8 variable does not abort the process
    let process_vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    overlay(read_env_file(path), process_vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_key_and_value() {
        let vars = parse_env_str("  VITE_SUPABASE_URL =  https://x.test  \n");
        assert_eq!(vars.get("VITE_SUPABASE_URL").map(String::as_str), Some("https://x.test"));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let vars = parse_env_str("TOKEN=abc==\nDSN=postgres://u:p@h/db?sslmode=require");
        assert_eq!(vars["TOKEN"], "abc==");
        assert_eq!(vars["DSN"], "postgres://u:p@h/db?sslmode=require");
    }

    #[test]
    fn test_parse_skips_blank_comment_and_malformed_lines() {
        let content = "\n   \n# comment=ignored\n  #indented=also\nNOT_A_PAIR\nKEY=value\n";
        let vars = parse_env_str(content);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["KEY"], "value");
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let vars = parse_env_str("KEY=first\nKEY=second\n");
        assert_eq!(vars["KEY"], "second");
    }

    #[test]
    fn test_parse_empty_value() {
        let vars = parse_env_str("EMPTY=\n");
        assert_eq!(vars["EMPTY"], "");
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vars = read_env_file(&dir.path().join(".env.local"));
        assert!(vars.is_empty());
    }

    #[test]
    fn test_read_unreadable_file_is_empty() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let vars = read_env_file(dir.path());
        assert!(vars.is_empty());
    }

    #[test]
    fn test_read_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "VITE_SUPABASE_URL=https://x.test").unwrap();
        writeln!(file, "VITE_SUPABASE_SERVICE_KEY=abc123").unwrap();

        let vars = read_env_file(file.path());
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["VITE_SUPABASE_URL"], "https://x.test");
        assert_eq!(vars["VITE_SUPABASE_SERVICE_KEY"], "abc123");
    }

    #[test]
    fn test_overlay_process_env_wins() {
        let file_vars = parse_env_str("SUPABASE_SERVICE_ROLE_KEY=xyz\nONLY_IN_FILE=1");
        let merged = overlay(
            file_vars,
            vec![("SUPABASE_SERVICE_ROLE_KEY".to_string(), "from-env".to_string())],
        );
        assert_eq!(merged["SUPABASE_SERVICE_ROLE_KEY"], "from-env");
        assert_eq!(merged["ONLY_IN_FILE"], "1");
    }

    #[test]
    fn test_load_includes_process_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "METRICS_CHECK_TEST_ONLY_IN_FILE=yes").unwrap();

        let merged = load(file.path());
        assert_eq!(merged["METRICS_CHECK_TEST_ONLY_IN_FILE"], "yes");
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(merged.get("PATH"), Some(&path));
        }
    }
}
