//! Plugin registry port
//!
//! Answers whether another plugin is currently active on the site.

/// Query for active plugins
pub trait PluginRegistry: Send + Sync {
    /// Whether the plugin with the given basename (e.g. `dir/file.php`) is active
    fn is_active(&self, plugin: &str) -> bool;
}
