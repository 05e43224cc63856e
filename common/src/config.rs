use serde::Deserialize;

use crate::consts;
use crate::error::{Error, Result};

/// Where the page behaviors look for their elements.
///
/// Every field is optional in the serialized form and falls back to the
/// markup of the sign-up and password reset pages. The password policy is not
/// configurable.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub password_selector: String,
    pub confirmation_selector: String,
    pub strength_meter_selector: String,
    pub email_selector: String,
    pub form_selector: String,
    pub validated_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_selector: consts::PASSWORD_SELECTOR.to_owned(),
            confirmation_selector: consts::CONFIRMATION_SELECTOR.to_owned(),
            strength_meter_selector: consts::STRENGTH_METER_SELECTOR.to_owned(),
            email_selector: consts::EMAIL_SELECTOR.to_owned(),
            form_selector: consts::FORM_SELECTOR.to_owned(),
            validated_class: consts::VALIDATED_CLASS.to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects values the DOM would throw on (`querySelector("")`,
    /// `classList.add("a b")`).
    pub fn check(&self) -> Result<()> {
        let selectors = [
            ("password_selector", &self.password_selector),
            ("confirmation_selector", &self.confirmation_selector),
            ("strength_meter_selector", &self.strength_meter_selector),
            ("email_selector", &self.email_selector),
            ("form_selector", &self.form_selector),
        ];
        for (name, selector) in selectors {
            if selector.trim().is_empty() {
                return Err(Error::EmptySelector(name));
            }
        }

        if self.validated_class.is_empty() || self.validated_class.chars().any(char::is_whitespace) {
            return Err(Error::InvalidClassName(self.validated_class.clone()));
        }

        Ok(())
    }
}
