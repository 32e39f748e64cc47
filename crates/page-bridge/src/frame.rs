//! Frame traversal paths for nested browsable contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BridgeError, BridgeErrorKind};

/// Ordered chain of iframe selectors leading from the top document to the
/// document hosting the target UI.
///
/// The application nests its working area several frames deep (`#leftFrame`
/// into the main frame, then `frame[name="table_main"]`, then the picker's
/// own iframe), so a single frame selector is not enough. Keeping the chain
/// explicit means callers thread the handle through each call instead of
/// parking it in module state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FramePath {
    segments: Vec<String>,
}

impl FramePath {
    /// Path addressing the top document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path by one nested iframe selector.
    pub fn child(mut self, selector: impl Into<String>) -> Self {
        self.segments.push(selector.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// JS expression evaluating to the document this path addresses, or
    /// `null` when any hop on the way down cannot be resolved.
    pub fn scope_expression(&self) -> Result<String, BridgeError> {
        let mut scope = "document".to_string();
        for selector in &self.segments {
            let literal = serde_json::to_string(selector).map_err(|err| {
                BridgeError::new(BridgeErrorKind::Internal).with_hint(err.to_string())
            })?;
            scope = format!(
                "(() => {{ const doc = {scope}; if (!doc) {{ return null; }} \
                 const frameEl = doc.querySelector({literal}); if (!frameEl) {{ return null; }} \
                 return frameEl.contentDocument || (frameEl.contentWindow ? frameEl.contentWindow.document : null); }})()"
            );
        }
        Ok(scope)
    }
}

impl fmt::Display for FramePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<top>");
        }
        write!(f, "{}", self.segments.join(" > "))
    }
}
