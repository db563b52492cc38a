//! CLI configuration: thin wrapper around `biadmin_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--profile, --api-url, --token, --timeout).

use secrecy::SecretString;

use biadmin_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use biadmin_config::{Config, Profile, config_path, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build a `ClientConfig` from the active profile plus flag overrides.
///
/// A missing profile is fine when flags or env supply everything; naming
/// a missing profile with `--profile` is not.
pub fn resolve_client_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<(ClientConfig, String), CliError> {
    let profile_name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                available: available_profiles(config),
                name: profile_name,
            });
        }
        None => Profile::default(),
    };

    // 1. API root (flag > env > profile)
    if let Some(ref url) = global.api_url {
        profile.api_url = Some(url.clone());
    }

    // 2. Timeout (flag > env > profile > defaults)
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    // 3. Token (flag > env > profile chain)
    let token = match global.token {
        Some(ref token) if !token.is_empty() => SecretString::from(token.clone()),
        _ => biadmin_config::resolve_token(&profile, &profile_name)?,
    };

    let client_config =
        biadmin_config::profile_to_client_config(&profile, token, config.defaults.timeout)?;
    Ok((client_config, profile_name))
}
