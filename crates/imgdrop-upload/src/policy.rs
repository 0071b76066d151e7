//! Upload acceptance policy

use imgdrop_core::config::UploadConfig;

/// Limits and allow-list applied to incoming submissions.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Ceiling on the declared size, in bytes.
    pub max_file_size: u64,
    /// Sniffed MIME types accepted for storage.
    pub allowed_content_types: Vec<String>,
    /// Prefix applied to every generated stored name.
    pub name_prefix: String,
}

impl Default for UploadPolicy {
    /// 2 MiB ceiling, image allow-list (JPEG, PNG, GIF), `img_` prefix.
    fn default() -> Self {
        Self {
            max_file_size: 2 * 1024 * 1024,
            allowed_content_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
            ],
            name_prefix: "img_".to_string(),
        }
    }
}

impl UploadPolicy {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            max_file_size: config.max_file_size_bytes,
            allowed_content_types: config.allowed_content_types.clone(),
            name_prefix: config.name_prefix.clone(),
        }
    }

    /// Check a sniffed MIME type against the allow-list. Parameters are
    /// stripped before comparison (no `; charset=` bypass).
    pub(crate) fn allows(&self, mime: &str) -> bool {
        let normalized = mime
            .split(';')
            .next()
            .map(str::trim)
            .unwrap_or(mime)
            .to_ascii_lowercase();

        self.allowed_content_types
            .iter()
            .any(|ct| ct.eq_ignore_ascii_case(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_the_fixed_limits() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.max_file_size, 2 * 1024 * 1024);
        assert!(policy.allows("image/jpeg"));
        assert!(policy.allows("image/png"));
        assert!(policy.allows("image/gif"));
        assert!(!policy.allows("application/pdf"));
    }

    #[test]
    fn from_config_carries_the_configured_limits() {
        let config = UploadConfig {
            upload_dir: "uploads".to_string(),
            name_prefix: "pic_".to_string(),
            max_file_size_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["image/webp".to_string()],
        };

        let policy = UploadPolicy::from_config(&config);
        assert_eq!(policy.max_file_size, 5 * 1024 * 1024);
        assert_eq!(policy.name_prefix, "pic_");
        assert!(policy.allows("image/webp"));
        assert!(!policy.allows("image/png"));
    }

    #[test]
    fn mime_parameters_do_not_bypass_the_allow_list() {
        let policy = UploadPolicy::default();
        assert!(policy.allows("image/png; charset=utf-8"));
        assert!(policy.allows("IMAGE/GIF"));
        assert!(!policy.allows("image/svg+xml; charset=utf-8"));
    }
}
