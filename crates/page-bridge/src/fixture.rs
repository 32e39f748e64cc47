//! Canned bridge for offline tests.
//!
//! Serves registered snapshots keyed by (frame path, selector) and records
//! clicks, so adapter logic can run without a browser. Unregistered
//! selectors behave as absent elements: the waiting calls poll and time out
//! the same way the CDP bridge does, just on a tighter interval.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::bridge::{ElementSnapshot, PageBridge};
use crate::errors::{BridgeError, BridgeErrorKind};
use crate::frame::FramePath;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// One click dispatched through the bridge, in dispatch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedClick {
    pub frame: FramePath,
    pub selector: String,
    pub index: usize,
}

/// In-memory [`PageBridge`] backed by registered snapshots.
#[derive(Default)]
pub struct StaticBridge {
    elements: Mutex<HashMap<(FramePath, String), Vec<ElementSnapshot>>>,
    clicks: Mutex<Vec<RecordedClick>>,
}

impl StaticBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the snapshots a selector resolves to inside a frame.
    pub fn insert(&self, frame: &FramePath, selector: &str, snapshots: Vec<ElementSnapshot>) {
        self.elements
            .lock()
            .insert((frame.clone(), selector.to_string()), snapshots);
    }

    /// Clicks recorded so far, in dispatch order.
    pub fn clicks(&self) -> Vec<RecordedClick> {
        self.clicks.lock().clone()
    }

    fn lookup(&self, frame: &FramePath, selector: &str) -> Vec<ElementSnapshot> {
        self.elements
            .lock()
            .get(&(frame.clone(), selector.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageBridge for StaticBridge {
    async fn query(
        &self,
        frame: &FramePath,
        selector: &str,
    ) -> Result<Vec<ElementSnapshot>, BridgeError> {
        Ok(self.lookup(frame, selector))
    }

    async fn input_value(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<String, BridgeError> {
        self.wait_visible(frame, selector, timeout).await?;
        let snapshots = self.lookup(frame, selector);
        let first = snapshots.first().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::TargetNotFound)
                .with_hint(format!("selector '{selector}' vanished after wait"))
        })?;
        Ok(first.attribute("value").unwrap_or_default().to_string())
    }

    async fn wait_visible(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BridgeError> {
        let deadline = Instant::now() + timeout;
        loop {
            if !self.lookup(frame, selector).is_empty() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BridgeError::new(BridgeErrorKind::TargetNotFound)
                    .with_hint(format!("selector '{selector}' never became visible")));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn click_nth(
        &self,
        frame: &FramePath,
        selector: &str,
        index: usize,
        timeout: Duration,
    ) -> Result<(), BridgeError> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.lookup(frame, selector).len() > index {
                self.clicks.lock().push(RecordedClick {
                    frame: frame.clone(),
                    selector: selector.to_string(),
                    index,
                });
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BridgeError::new(BridgeErrorKind::TargetNotFound).with_hint(
                    format!("click target '{selector}'[{index}] never became visible"),
                ));
            }
            sleep(POLL_INTERVAL).await;
        }
    }
}
