//! CDP-backed bridge implementation.
//!
//! Every call goes through `Runtime.evaluate` with a frame-piercing scope
//! expression, so nested same-origin frames behave the same as the top
//! document. Interactions also happen in-page (`el.click()`) rather than via
//! synthesized mouse events; the legacy pages this targets wire all behavior
//! through inline handlers, which `click()` triggers reliably.

use async_trait::async_trait;
use chromiumoxide::Page;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::debug;

use crate::bridge::{ElementSnapshot, PageBridge};
use crate::errors::{BridgeError, BridgeErrorKind};
use crate::frame::FramePath;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// [`PageBridge`] over a live Chromium page.
pub struct CdpBridge {
    page: Page,
}

impl CdpBridge {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    async fn eval(&self, expression: &str) -> Result<Value, BridgeError> {
        let result = self.page.evaluate(expression.to_string()).await.map_err(|err| {
            BridgeError::new(BridgeErrorKind::CdpIo)
                .with_hint(err.to_string())
                .retriable(true)
        })?;
        result.value().cloned().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::Internal).with_hint("evaluation returned no value")
        })
    }

    /// Evaluate until the status object reports `success`, or the deadline
    /// passes. Absent frames and absent/hidden elements are retried; a
    /// rejected selector fails immediately.
    async fn poll_status(
        &self,
        expression: &str,
        success: &str,
        timeout: Duration,
        what: &str,
    ) -> Result<Value, BridgeError> {
        let deadline = Instant::now() + timeout;
        loop {
            let value = self.eval(expression).await?;
            let status = value
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            if status == success {
                return Ok(value);
            }
            match status.as_str() {
                "bad-selector" => {
                    return Err(BridgeError::new(BridgeErrorKind::Internal)
                        .with_hint(format!("selector rejected while resolving {what}")));
                }
                "no-frame" | "not-found" | "hidden" => {
                    if Instant::now() >= deadline {
                        let kind = if status == "no-frame" {
                            BridgeErrorKind::FrameUnavailable
                        } else {
                            BridgeErrorKind::TargetNotFound
                        };
                        return Err(BridgeError::new(kind).with_hint(format!(
                            "{what} not ready before deadline (status: {status})"
                        )));
                    }
                    sleep(POLL_INTERVAL).await;
                }
                other => {
                    return Err(BridgeError::new(BridgeErrorKind::Internal)
                        .with_hint(format!("{what} returned unexpected status '{other}'")));
                }
            }
        }
    }

    fn selector_literal(selector: &str) -> Result<String, BridgeError> {
        serde_json::to_string(selector)
            .map_err(|err| BridgeError::new(BridgeErrorKind::Internal).with_hint(err.to_string()))
    }

    fn probe_expression(
        frame: &FramePath,
        selector: &str,
        read_value: bool,
    ) -> Result<String, BridgeError> {
        let scope = frame.scope_expression()?;
        let literal = Self::selector_literal(selector)?;
        let value_part = if read_value {
            ", value: ('value' in el) ? String(el.value) : ''"
        } else {
            ""
        };
        Ok(format!(
            "(() => {{ const scope = {scope}; if (!scope) {{ return {{ status: 'no-frame' }}; }} \
             let el; try {{ el = scope.querySelector({literal}); }} catch (err) {{ return {{ status: 'bad-selector' }}; }} \
             if (!el) {{ return {{ status: 'not-found' }}; }} \
             if (el.getClientRects().length === 0) {{ return {{ status: 'hidden' }}; }} \
             return {{ status: 'ok'{value_part} }}; }})()"
        ))
    }
}

#[async_trait]
impl PageBridge for CdpBridge {
    async fn query(
        &self,
        frame: &FramePath,
        selector: &str,
    ) -> Result<Vec<ElementSnapshot>, BridgeError> {
        let scope = frame.scope_expression()?;
        let literal = Self::selector_literal(selector)?;
        let expression = format!(
            "(() => {{ const scope = {scope}; if (!scope) {{ return {{ status: 'no-frame' }}; }} \
             let elements; try {{ elements = scope.querySelectorAll({literal}); }} catch (err) {{ return {{ status: 'bad-selector' }}; }} \
             const items = Array.from(elements, (el) => ({{ \
                 text: (el.textContent || '').trim(), \
                 attributes: Object.fromEntries(Array.from(el.attributes, (a) => [a.name, a.value])) \
             }})); \
             return {{ status: 'ok', items }}; }})()"
        );

        let value = self.eval(&expression).await?;
        match value.get("status").and_then(Value::as_str) {
            Some("ok") => {
                let items = value.get("items").cloned().unwrap_or(Value::Null);
                let snapshots: Vec<ElementSnapshot> =
                    serde_json::from_value(items).map_err(|err| {
                        BridgeError::new(BridgeErrorKind::Internal)
                            .with_hint(format!("malformed query payload: {err}"))
                    })?;
                debug!(frame = %frame, selector, matches = snapshots.len(), "query resolved");
                Ok(snapshots)
            }
            Some("no-frame") => Err(BridgeError::new(BridgeErrorKind::FrameUnavailable)
                .with_hint(format!("frame path '{frame}' did not resolve"))),
            Some("bad-selector") => Err(BridgeError::new(BridgeErrorKind::Internal)
                .with_hint(format!("selector '{selector}' rejected by querySelectorAll"))),
            other => Err(BridgeError::new(BridgeErrorKind::Internal)
                .with_hint(format!("query returned unexpected status {other:?}"))),
        }
    }

    async fn input_value(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<String, BridgeError> {
        let expression = Self::probe_expression(frame, selector, true)?;
        let value = self
            .poll_status(&expression, "ok", timeout, &format!("input '{selector}'"))
            .await?;
        Ok(value
            .get("value")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    async fn wait_visible(
        &self,
        frame: &FramePath,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BridgeError> {
        let expression = Self::probe_expression(frame, selector, false)?;
        self.poll_status(&expression, "ok", timeout, &format!("element '{selector}'"))
            .await?;
        Ok(())
    }

    async fn click_nth(
        &self,
        frame: &FramePath,
        selector: &str,
        index: usize,
        timeout: Duration,
    ) -> Result<(), BridgeError> {
        let scope = frame.scope_expression()?;
        let literal = Self::selector_literal(selector)?;
        let expression = format!(
            "(() => {{ const scope = {scope}; if (!scope) {{ return {{ status: 'no-frame' }}; }} \
             let elements; try {{ elements = scope.querySelectorAll({literal}); }} catch (err) {{ return {{ status: 'bad-selector' }}; }} \
             if (elements.length <= {index}) {{ return {{ status: 'not-found' }}; }} \
             const el = elements[{index}]; \
             if (el.getClientRects().length === 0) {{ return {{ status: 'hidden' }}; }} \
             el.click(); \
             return {{ status: 'clicked' }}; }})()"
        );

        self.poll_status(
            &expression,
            "clicked",
            timeout,
            &format!("click target '{selector}'[{index}]"),
        )
        .await?;
        debug!(frame = %frame, selector, index, "click dispatched");
        Ok(())
    }
}
