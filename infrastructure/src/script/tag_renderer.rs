//! Script tag renderer
//!
//! [`ScriptInjector`] adapter that turns enqueued scripts into the HTML
//! emitted in the page head or footer: an inline tag defining the payload
//! global, followed by the external script tag.

use consent_application::{InjectError, ScriptAsset, ScriptInjector};
use consent_domain::{ConsentPayload, PAYLOAD_GLOBAL};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Where a script is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Head,
    Footer,
}

/// A script enqueued for the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnqueuedScript {
    pub asset: ScriptAsset,
    pub payload: ConsentPayload,
}

impl EnqueuedScript {
    pub fn placement(&self) -> Placement {
        if self.asset.in_footer {
            Placement::Footer
        } else {
            Placement::Head
        }
    }

    /// Inline tag defining the payload global followed by the script tag
    pub fn to_html(&self) -> Result<String, InjectError> {
        let data = serde_json::to_string(&self.payload)
            .map_err(|e| InjectError::Payload(e.to_string()))?;
        let data = escape_inline_json(&data);
        let handle = escape_attr(&self.asset.handle);

        Ok(format!(
            "<script id=\"{handle}-js-extra\">\nvar {global} = {data};\n</script>\n\
             <script src=\"{src}\" id=\"{handle}-js\"></script>\n",
            global = PAYLOAD_GLOBAL,
            src = escape_attr(&versioned_src(&self.asset)),
        ))
    }
}

/// Collects enqueued scripts for one page render
#[derive(Debug, Default)]
pub struct ScriptTagRenderer {
    scripts: Mutex<Vec<EnqueuedScript>>,
}

impl ScriptTagRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueued(&self) -> Vec<EnqueuedScript> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// HTML for all scripts printed at the given placement
    pub fn render(&self, placement: Placement) -> Result<String, InjectError> {
        self.lock()
            .iter()
            .filter(|s| s.placement() == placement)
            .map(EnqueuedScript::to_html)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EnqueuedScript>> {
        self.scripts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ScriptInjector for ScriptTagRenderer {
    fn enqueue(&self, asset: &ScriptAsset, payload: &ConsentPayload) -> Result<(), InjectError> {
        let mut scripts = self.lock();
        if scripts.iter().any(|s| s.asset.handle == asset.handle) {
            return Err(InjectError::AlreadyEnqueued(asset.handle.clone()));
        }
        scripts.push(EnqueuedScript {
            asset: asset.clone(),
            payload: *payload,
        });
        Ok(())
    }
}

fn versioned_src(asset: &ScriptAsset) -> String {
    if asset.version.is_empty() {
        return asset.src.clone();
    }
    let separator = if asset.src.contains('?') { '&' } else { '?' };
    format!("{}{}ver={}", asset.src, separator, asset.version)
}

/// Keep inline JSON from closing its `<script>` element early
fn escape_inline_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
