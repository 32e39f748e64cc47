//! Capability trait the widget adapters wire against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::errors::BridgeError;
use crate::frame::FramePath;

/// Point-in-time view of one matched element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// Trimmed text content of the element.
    #[serde(default)]
    pub text: String,
    /// Attribute map as rendered, names lowercased by the DOM.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ElementSnapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn class_attr(&self) -> Option<&str> {
        self.attribute("class")
    }
}

/// Minimal page surface required by the widget adapters.
///
/// The hosting session already knows how to resolve a selector inside a
/// frame, read element state, wait for visibility and click; this trait is
/// that capability and nothing more. `query` resolves immediately, the
/// remaining calls poll until their deadline and then fail with
/// `TargetNotFound`.
#[async_trait]
pub trait PageBridge: Send + Sync {
    /// Snapshot every element the selector matches inside the frame.
    async fn query(
        &self,
        frame: &FramePath,
        selector: &str,
    ) -> Result<Vec<ElementSnapshot>, BridgeError>;

    /// Wait for the first match to become visible, then read its `value`.
    async fn input_value(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<String, BridgeError>;

    /// Wait until the first match is attached and visible.
    async fn wait_visible(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BridgeError>;

    /// Wait for the `index`-th match to appear, then click it.
    async fn click_nth(
        &self,
        frame: &FramePath,
        selector: &str,
        index: usize,
        timeout: Duration,
    ) -> Result<(), BridgeError>;

    /// Wait for the first match to appear, then click it.
    async fn click(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BridgeError> {
        self.click_nth(frame, selector, 0, timeout).await
    }
}
