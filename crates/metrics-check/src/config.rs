//! Supabase connection configuration.

use std::fmt;

use crate::env_file::EnvMap;
use crate::error::CheckError;

/// Project URL key.
pub const URL_KEY: &str = "VITE_SUPABASE_URL";

/// Service key names, checked in order.
pub const SERVICE_KEY_KEYS: [&str; 2] = ["VITE_SUPABASE_SERVICE_KEY", "SUPABASE_SERVICE_ROLE_KEY"];

/// Credentials for the Supabase REST endpoint.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://<ref>.supabase.co`.
    pub url: String,

    /// Service role key, sent as both `apikey` and bearer token.
    pub service_key: String,
}

impl SupabaseConfig {
    /// Resolve credentials from the merged environment mapping.
    ///
    /// Empty values count as missing. The first non-empty service key in
    /// [`SERVICE_KEY_KEYS`] wins.
    pub fn from_env_map(vars: &EnvMap) -> Result<Self, CheckError> {
        let non_empty = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

        let url = non_empty(URL_KEY);
        let service_key = SERVICE_KEY_KEYS.iter().find_map(|&key| non_empty(key));

        match (url, service_key) {
            (Some(url), Some(service_key)) => Ok(Self { url, service_key }),
            _ => Err(CheckError::MissingCredentials),
        }
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}
