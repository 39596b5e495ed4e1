//! Export bridge: scene → SVG document → one `create-chart` message to the host.
//!
//! The host is injected as a [`HostBridge`]; posting is one-way and nothing is
//! awaited. Placing the document and notifying the user is the host's job.

use std::io::Write;
use std::sync::Mutex;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scene::VectorScene;
use crate::svg::to_svg_string;

/// Discriminator of the chart-creation message.
pub const CREATE_CHART: &str = "create-chart";

/// Outbound message: `{ "type": "create-chart", "svg": "<svg …>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub svg: String,
}

impl ExportMessage {
    pub fn create_chart(svg: String) -> Self {
        Self {
            kind: CREATE_CHART.to_string(),
            svg,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Capability to hand a finished document to the host. Fire-and-forget.
pub trait HostBridge {
    fn post(&self, message: ExportMessage);
}

/// Serialize `scene` and post exactly one message to `host`.
///
/// Each call builds an independent document; nothing is shared between calls.
pub fn export_scene(scene: &VectorScene, host: &dyn HostBridge) -> Result<()> {
    let svg = to_svg_string(scene)?;
    log::debug!("posting {} message ({} bytes)", CREATE_CHART, svg.len());
    host.post(ExportMessage::create_chart(svg));
    Ok(())
}

/// Host reached through a channel; the receiving side runs on its own schedule.
#[derive(Debug, Clone)]
pub struct ChannelHost {
    sender: Sender<ExportMessage>,
}

impl ChannelHost {
    pub fn new(sender: Sender<ExportMessage>) -> Self {
        Self { sender }
    }
}

impl HostBridge for ChannelHost {
    fn post(&self, message: ExportMessage) {
        if self.sender.send(message).is_err() {
            log::warn!("host channel closed; chart message dropped");
        }
    }
}

/// Host reached through a byte stream: one JSON message per line.
#[derive(Debug)]
pub struct JsonLinesHost<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonLinesHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> HostBridge for JsonLinesHost<W> {
    fn post(&self, message: ExportMessage) {
        let line = match message.to_json() {
            Ok(line) => line,
            Err(e) => {
                log::warn!("could not encode chart message: {e}");
                return;
            }
        };
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            log::warn!("could not write chart message: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_uses_type_discriminator() {
        let json = ExportMessage::create_chart("<svg/>".into()).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["type"], "create-chart");
        assert_eq!(v["svg"], "<svg/>");
    }

    #[test]
    fn json_lines_host_writes_one_line_per_post() {
        let host = JsonLinesHost::new(Vec::new());
        let scene = VectorScene::new(10.0, 10.0);
        export_scene(&scene, &host).unwrap();
        export_scene(&scene, &host).unwrap();
        let out = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
    }
}
