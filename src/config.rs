use thiserror::Error;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "altea.group.qc@gmail.com",
    phone: "(514) 889-0330",
    address: "Québec, QC",
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing EmailJS setting: {0}")]
    Missing(&'static str),

    #[error("EmailJS setting {0} still holds a placeholder value")]
    Placeholder(&'static str),
}

/// Identifiers for the EmailJS account the booking form sends through.
///
/// The public key is meant to ship to the browser; none of these are secrets.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub api_url: String,
    pub service_id: String,
    pub admin_template_id: String,
    pub client_template_id: Option<String>,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Reads the identifiers baked in at build time, e.g.
    /// `ALTEA_EMAILJS_SERVICE_ID=service_x trunk build --release`.
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("ALTEA_EMAILJS_API_URL")
                .unwrap_or(EMAILJS_API_URL)
                .to_string(),
            service_id: option_env!("ALTEA_EMAILJS_SERVICE_ID").unwrap_or("").to_string(),
            admin_template_id: option_env!("ALTEA_EMAILJS_ADMIN_TEMPLATE")
                .unwrap_or("")
                .to_string(),
            client_template_id: option_env!("ALTEA_EMAILJS_CLIENT_TEMPLATE")
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string),
            public_key: option_env!("ALTEA_EMAILJS_PUBLIC_KEY").unwrap_or("").to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_setting("service_id", &self.service_id)?;
        check_setting("admin_template_id", &self.admin_template_id)?;
        if let Some(client_template_id) = &self.client_template_id {
            check_setting("client_template_id", client_template_id)?;
        }
        check_setting("public_key", &self.public_key)
    }
}

fn check_setting(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    if is_placeholder(value) {
        return Err(ConfigError::Placeholder(name));
    }
    Ok(())
}

// Values copied from the EmailJS dashboard docs, e.g. "YOUR_SERVICE_ID" or "template_xxxxxxx".
fn is_placeholder(value: &str) -> bool {
    let upper = value.to_ascii_uppercase();
    upper.starts_with("YOUR_") || upper.contains("XXX") || upper == "CHANGEME"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmailJsConfig {
        EmailJsConfig {
            api_url: EMAILJS_API_URL.to_string(),
            service_id: "service_altea".to_string(),
            admin_template_id: "template_admin".to_string(),
            client_template_id: None,
            public_key: "pk_live_123".to_string(),
        }
    }

    #[test]
    fn complete_config_is_valid() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn empty_template_is_reported_as_missing() {
        let config = EmailJsConfig {
            admin_template_id: "  ".to_string(),
            ..sample()
        };
        assert_eq!(config.validate(), Err(ConfigError::Missing("admin_template_id")));
    }

    #[test]
    fn placeholder_values_are_rejected() {
        let config = EmailJsConfig {
            client_template_id: Some("template_xxxxxxx".to_string()),
            ..sample()
        };
        assert_eq!(config.validate(), Err(ConfigError::Placeholder("client_template_id")));

        let config = EmailJsConfig {
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            ..sample()
        };
        assert_eq!(config.validate(), Err(ConfigError::Placeholder("public_key")));
    }
}
