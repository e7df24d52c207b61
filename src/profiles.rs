use std::collections::HashMap;
use std::fmt;

/// Profile keys accepted in `apiKeyProfileKey`, in slot order.
pub const PROFILE_KEYS: [&str; 5] = [
    "account_1",
    "account_2",
    "account_3",
    "account_4",
    "account_5",
];

/// Environment variable holding the secret for a profile slot.
/// `account_3` -> `ELEVENLABS_KEY_ACCOUNT_3`
pub fn env_var_name(profile_key: &str) -> String {
    format!("ELEVENLABS_KEY_{}", profile_key.to_uppercase())
}

/// Fixed table of ElevenLabs API keys, one per profile slot.
///
/// Built once at startup and never mutated. Slots whose value is missing or
/// empty are kept out of the table, so they resolve exactly like unknown keys.
#[derive(Clone, Default)]
pub struct Profiles {
    keys: HashMap<&'static str, String>,
}

impl Profiles {
    /// Build the table by asking `lookup` for each slot's environment variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = PROFILE_KEYS
            .iter()
            .filter_map(|&profile| {
                lookup(&env_var_name(profile))
                    .filter(|secret| !secret.is_empty())
                    .map(|secret| (profile, secret))
            })
            .collect();

        Self { keys }
    }

    /// Exact-match lookup. `None` means the caller picked an invalid profile.
    pub fn resolve(&self, profile_key: &str) -> Option<&str> {
        self.keys.get(profile_key).map(String::as_str)
    }

    /// Keys of the slots that hold a secret, in slot order.
    pub fn configured(&self) -> Vec<&'static str> {
        PROFILE_KEYS
            .iter()
            .copied()
            .filter(|key| self.keys.contains_key(key))
            .collect()
    }
}

impl fmt::Debug for Profiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profiles")
            .field("configured", &self.configured())
            .finish()
    }
}
