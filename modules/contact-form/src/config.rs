use serde::{Deserialize, Serialize};

fn default_max_name_len() -> usize {
    256
}

fn default_max_email_len() -> usize {
    320
}

fn default_max_subject_len() -> usize {
    512
}

fn default_max_message_len() -> usize {
    16 * 1024
}

/// Validation limits for incoming submissions. Lengths are byte lengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFormConfig {
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
    #[serde(default = "default_max_email_len")]
    pub max_email_len: usize,
    /// Cap shared by subject, project type and budget.
    #[serde(default = "default_max_subject_len")]
    pub max_subject_len: usize,
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            max_name_len: default_max_name_len(),
            max_email_len: default_max_email_len(),
            max_subject_len: default_max_subject_len(),
            max_message_len: default_max_message_len(),
        }
    }
}

fn default_mail_enabled() -> bool {
    true
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_owned()
}

fn default_smtp_port() -> u16 {
    587
}

/// SMTP settings for operator notifications.
///
/// With `enabled: false` the service runs with a no-op notifier and every
/// accepted submission reports successful delivery; useful for local
/// development without SMTP credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    #[serde(default = "default_mail_enabled")]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Sender address for notification mail.
    #[serde(default)]
    pub from: String,
    /// Recipient for enquiry submissions.
    #[serde(default)]
    pub enquiries_to: String,
    /// Recipient for support submissions.
    #[serde(default)]
    pub support_to: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: default_mail_enabled(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: String::new(),
            enquiries_to: String::new(),
            support_to: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_defaults_fill_missing_fields() {
        let cfg: ContactFormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.max_name_len, 256);
        assert_eq!(cfg.max_email_len, 320);
        assert_eq!(cfg.max_subject_len, 512);
        assert_eq!(cfg.max_message_len, 16 * 1024);
    }

    #[test]
    fn contact_form_rejects_unknown_fields() {
        let result = serde_json::from_str::<ContactFormConfig>(r#"{"max_nam_len": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mail_defaults_point_at_gmail_smtp() {
        let cfg = MailConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.smtp_host, "smtp.gmail.com");
        assert_eq!(cfg.smtp_port, 587);
        assert!(cfg.from.is_empty());
    }

    #[test]
    fn mail_partial_overrides_keep_defaults() {
        let cfg: MailConfig =
            serde_json::from_str(r#"{"enabled": false, "smtp_host": "mail.example.org"}"#).unwrap();
        assert!(!cfg.enabled);
        assert_eq!(cfg.smtp_host, "mail.example.org");
        assert_eq!(cfg.smtp_port, 587);
    }
}
