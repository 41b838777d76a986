use crate::error::SyncError;
use serde::{Deserialize, Serialize};

/// Provider-wide configuration. Constructed once and passed by reference
/// into every component; nothing here lives in process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the catalog instance.
    pub host: String,
    /// Personal access token used for basic auth.
    pub token: String,
    /// The mail of the token's account.
    pub mail: String,
    /// The workspace all objects and schemas belong to.
    pub workspace_id: String,
    pub features: Features,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Features {
    /// When false, deletes retire objects through the obsolete attribute
    /// instead of removing them.
    pub destroy_object: bool,
    /// Object type attribute written with the obsolete marker on soft
    /// delete. Required whenever `destroy_object` is false.
    pub obsolete_attribute_id: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            host: "https://api.atlassian.com".to_string(),
            token: String::new(),
            mail: String::new(),
            workspace_id: String::new(),
            features: Features::default(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            destroy_object: true,
            obsolete_attribute_id: String::new(),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from defaults, an optional config file and
    /// environment variables, in that order of precedence.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&ProviderConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("assets-sync").required(false));

        let mut loaded: ProviderConfig = config.build()?.try_deserialize()?;
        loaded.apply_env_overrides()?;

        Ok(loaded)
    }

    /// Environment variables override file values.
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(host) = std::env::var("ATLASSIAN_HOST") {
            self.host = host;
        }
        if let Ok(token) = std::env::var("ATLASSIAN_TOKEN") {
            self.token = token;
        }
        if let Ok(mail) = std::env::var("ATLASSIAN_MAIL") {
            self.mail = mail;
        }
        if let Ok(workspace_id) = std::env::var("ASSETS_WORKSPACE_ID") {
            self.workspace_id = workspace_id;
        }
        if let Ok(obsolete_id) = std::env::var("ASSETS_OBJECTTYPEATTRIBUTE_ID") {
            self.features.obsolete_attribute_id = obsolete_id;
        }

        match std::env::var("ASSETS_DESTROY_OBJECT") {
            Ok(raw) => {
                self.features.destroy_object = raw.parse().map_err(|_| {
                    SyncError::Configuration(format!(
                        "ASSETS_DESTROY_OBJECT must be 'true' or 'false', got '{}'",
                        raw
                    ))
                })?;
            }
            Err(_) => {
                // Unset keeps the configured value; the default is hard delete.
                log::debug!(
                    "ASSETS_DESTROY_OBJECT not set, keeping destroy_object={}",
                    self.features.destroy_object
                );
            }
        }

        Ok(())
    }

    /// Reject incomplete configuration before any remote call is made.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.token.is_empty() {
            return Err(SyncError::Configuration(
                "missing catalog API token (set token or ATLASSIAN_TOKEN)".to_string(),
            ));
        }
        if self.mail.is_empty() {
            return Err(SyncError::Configuration(
                "missing catalog API mail (set mail or ATLASSIAN_MAIL)".to_string(),
            ));
        }
        if self.workspace_id.is_empty() {
            return Err(SyncError::Configuration(
                "missing workspace id (set workspace_id or ASSETS_WORKSPACE_ID)".to_string(),
            ));
        }

        if !self.features.destroy_object && self.features.obsolete_attribute_id.is_empty() {
            return Err(SyncError::Configuration(
                "destroy_object is disabled but no obsolete object type attribute id is configured"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "ATLASSIAN_HOST",
            "ATLASSIAN_TOKEN",
            "ATLASSIAN_MAIL",
            "ASSETS_WORKSPACE_ID",
            "ASSETS_DESTROY_OBJECT",
            "ASSETS_OBJECTTYPEATTRIBUTE_ID",
        ] {
            std::env::remove_var(key);
        }
    }

    fn complete() -> ProviderConfig {
        ProviderConfig {
            token: "pat".into(),
            mail: "ops@example.test".into(),
            workspace_id: "ws-1".into(),
            ..ProviderConfig::default()
        }
    }

    #[test]
    #[serial(env)]
    fn env_overrides_take_precedence() {
        clear_env();
        std::env::set_var("ATLASSIAN_TOKEN", "from-env");
        std::env::set_var("ASSETS_WORKSPACE_ID", "ws-env");
        std::env::set_var("ASSETS_DESTROY_OBJECT", "false");
        std::env::set_var("ASSETS_OBJECTTYPEATTRIBUTE_ID", "99");

        let mut config = complete();
        config.apply_env_overrides().unwrap();

        assert_eq!(config.token, "from-env");
        assert_eq!(config.workspace_id, "ws-env");
        assert!(!config.features.destroy_object);
        assert_eq!(config.features.obsolete_attribute_id, "99");
        clear_env();
    }

    #[test]
    #[serial(env)]
    fn unparsable_destroy_flag_is_rejected() {
        clear_env();
        std::env::set_var("ASSETS_DESTROY_OBJECT", "maybe");

        let mut config = complete();
        let err = config.apply_env_overrides().unwrap_err();
        assert!(err.to_string().contains("ASSETS_DESTROY_OBJECT"));
        clear_env();
    }

    #[test]
    #[serial(env)]
    fn unset_destroy_flag_keeps_hard_delete_default() {
        clear_env();
        let mut config = complete();
        config.apply_env_overrides().unwrap();
        assert!(config.features.destroy_object);
    }

    #[test]
    fn validate_requires_credentials() {
        let config = ProviderConfig::default();
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn validate_fails_fast_on_soft_delete_without_fallback() {
        let mut config = complete();
        config.features.destroy_object = false;
        config.features.obsolete_attribute_id = String::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyncError::Configuration(_)));
    }

    #[test]
    fn validate_accepts_soft_delete_with_fallback() {
        let mut config = complete();
        config.features.destroy_object = false;
        config.features.obsolete_attribute_id = "99".into();
        config.validate().unwrap();
    }
}
