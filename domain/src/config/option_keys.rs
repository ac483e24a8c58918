//! Option store keys read and owned by the consent layer.
//!
//! Detection reads keys belonging to other plugins; the keys this plugin
//! owns (current settings, legacy options and transients) are registered
//! in [`owned_keys`] so uninstall can remove all of them.

/// Option holding an ID accepted by an earlier version of this plugin
pub const PRIOR_SAVE_KEY: &str = "clarity_project_id";

/// Plugin basename of the official Microsoft Clarity plugin
pub const COMPANION_PLUGIN: &str = "microsoft-clarity/clarity.php";

/// Ad storage consent setting
pub const AD_STORAGE_KEY: &str = "clarity_ad_storage";

/// Analytics storage consent setting
pub const ANALYTICS_STORAGE_KEY: &str = "clarity_analytics_storage";

/// Options of other plugins that may embed a Clarity project ID,
/// in the order they are scanned.
pub const KNOWN_CLARITY_OPTIONS: [&str; 7] = [
    "microsoft_clarity_project_id",
    "microsoft_clarity_settings",
    "clarity_settings",
    "seopress_analytics_option_name",
    "seopress_analytics_clarity",
    "siteseo_analytics_clarity_project_id",
    "aioseo_options",
];

/// Storage namespace of an owned key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Current settings
    Setting,
    /// Options written by earlier versions
    Legacy,
    /// Short-lived cache entries
    Transient,
}

/// Metadata for a key owned by this plugin.
#[derive(Debug, Clone)]
pub struct OwnedKeyInfo {
    pub key: &'static str,
    pub kind: KeyKind,
}

/// All keys owned by this plugin.
pub fn owned_keys() -> &'static [OwnedKeyInfo] {
    &OWNED_KEYS
}

static OWNED_KEYS: [OwnedKeyInfo; 11] = [
    // ==================== Settings ====================
    OwnedKeyInfo {
        key: AD_STORAGE_KEY,
        kind: KeyKind::Setting,
    },
    OwnedKeyInfo {
        key: ANALYTICS_STORAGE_KEY,
        kind: KeyKind::Setting,
    },
    // ==================== Legacy ====================
    OwnedKeyInfo {
        key: PRIOR_SAVE_KEY,
        kind: KeyKind::Legacy,
    },
    OwnedKeyInfo {
        key: "clarity_auto_project_id",
        kind: KeyKind::Legacy,
    },
    OwnedKeyInfo {
        key: "clarity_detected_from",
        kind: KeyKind::Legacy,
    },
    OwnedKeyInfo {
        key: "clarity_detection_notice_dismissed",
        kind: KeyKind::Legacy,
    },
    OwnedKeyInfo {
        key: "clarity_wordpress_site_id",
        kind: KeyKind::Legacy,
    },
    // ==================== Transients ====================
    OwnedKeyInfo {
        key: "clarity_consent_temp",
        kind: KeyKind::Transient,
    },
    OwnedKeyInfo {
        key: "clarity_consent_cache",
        kind: KeyKind::Transient,
    },
    OwnedKeyInfo {
        key: "clarity_layer_temp",
        kind: KeyKind::Transient,
    },
    OwnedKeyInfo {
        key: "clarity_consent_auto_detection",
        kind: KeyKind::Transient,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_options_order() {
        assert_eq!(KNOWN_CLARITY_OPTIONS[0], "microsoft_clarity_project_id");
        assert_eq!(KNOWN_CLARITY_OPTIONS[6], "aioseo_options");
    }

    #[test]
    fn test_owned_key_counts() {
        let count = |kind| owned_keys().iter().filter(|k| k.kind == kind).count();
        assert_eq!(count(KeyKind::Setting), 2);
        assert_eq!(count(KeyKind::Legacy), 5);
        assert_eq!(count(KeyKind::Transient), 4);
    }
}
