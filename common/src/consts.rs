pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be at least 8 characters long and contain numbers, uppercase and lowercase letters.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords must match";

pub const PASSWORD_SELECTOR: &str = r#"input[type="password"]"#;
pub const CONFIRMATION_SELECTOR: &str = r#"input[name="password2"]"#;
pub const STRENGTH_METER_SELECTOR: &str = "[data-password-strength]";
pub const EMAIL_SELECTOR: &str = r#"input[type="email"]"#;
pub const FORM_SELECTOR: &str = ".needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated"; // only consumed by the stylesheet

pub const CONFIG_ELEMENT_ID: &str = "formguard-config";
