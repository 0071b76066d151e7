//! Stored-name generation
//!
//! Generated names combine a configurable prefix, a fresh UUIDv7 token,
//! and an extension derived from the declared filename. The charset is
//! confined to `[a-z0-9_\-.]`, so names embed safely in user-facing
//! messages and never carry a directory component.

use uuid::Uuid;

const MAX_EXTENSION_LENGTH: usize = 16;

/// Derive the stored extension from the declared filename.
///
/// The extension is lowercased and clamped to ASCII alphanumerics. Returns
/// `None` when the name has no usable extension; callers fall back to the
/// sniffed type's canonical extension.
pub(crate) fn declared_extension(original_filename: &str) -> Option<String> {
    let ext = std::path::Path::new(original_filename)
        .extension()?
        .to_str()?;

    let cleaned: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_EXTENSION_LENGTH)
        .collect::<String>()
        .to_ascii_lowercase();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Canonical extension for an allow-listed MIME type.
pub(crate) fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Generate a fresh stored name: `{prefix}{token}.{ext}`.
///
/// The token is a UUIDv7 (millisecond timestamp plus random entropy), so
/// names never repeat within a process run and sort by creation time.
pub(crate) fn generate_stored_name(prefix: &str, extension: &str) -> String {
    format!("{}{}.{}", prefix, Uuid::now_v7(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_and_cleaned() {
        assert_eq!(declared_extension("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(declared_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(declared_extension("weird.p…g").as_deref(), Some("pg"));
    }

    #[test]
    fn hostile_names_never_yield_separators() {
        for name in ["a.p/../ng", "x.png\u{0}", "..", ".jpg", "noext"] {
            if let Some(ext) = declared_extension(name) {
                assert!(ext.chars().all(|c| c.is_ascii_alphanumeric()), "{ext:?}");
            }
        }
    }

    #[test]
    fn generated_names_are_unique_and_prefixed() {
        let a = generate_stored_name("img_", "jpg");
        let b = generate_stored_name("img_", "jpg");

        assert_ne!(a, b);
        assert!(a.starts_with("img_"));
        assert!(a.ends_with(".jpg"));
    }

    #[test]
    fn canonical_extensions_cover_the_default_allow_list() {
        assert_eq!(extension_for_mime("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_mime("image/png"), Some("png"));
        assert_eq!(extension_for_mime("image/gif"), Some("gif"));
        assert_eq!(extension_for_mime("image/webp"), None);
    }
}
