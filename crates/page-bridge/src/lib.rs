//! Minimal DOM capability surface for driving nested-frame web UIs.
//!
//! The license-management application renders its working area several
//! iframes deep, so every lookup carries an explicit [`FramePath`] naming the
//! chain of frames to traverse. The [`PageBridge`] trait captures the small
//! set of page operations the widget adapters wire against; [`CdpBridge`]
//! backs it with a live Chromium page, while [`StaticBridge`] serves canned
//! snapshots for offline tests.

pub mod bridge;
pub mod errors;
pub mod fixture;
pub mod frame;

mod cdp;

pub use bridge::*;
pub use cdp::*;
pub use errors::*;
pub use fixture::*;
pub use frame::*;
