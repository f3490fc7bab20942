//! Page requests and responses for the tensors endpoint.
//!
//! A page is a window of training steps `[cursor, cursor + limit)`. The
//! endpoint answers with every layer, each carrying only the kernel and bias
//! steps that fall inside the window.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snapshot::{BiasSnapshot, KernelSnapshot};

/// Error returned by [`TensorPage::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The body is not a layer array or a `{ layers, has_more }` envelope.
    #[error("failed to decode tensors page: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One trainable layer and its recorded tensors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub name: String,
    #[serde(default)]
    pub kernel: KernelSnapshot,
    #[serde(default)]
    pub bias: BiasSnapshot,
}

/// Query parameters of one page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    /// Weights file the endpoint reads, relative to the host's working directory.
    pub log_dir: String,
    /// First step of the window.
    pub cursor: u64,
    /// Number of steps in the window.
    pub limit: u64,
    pub no_kernel: bool,
    pub no_bias: bool,
}

impl PageQuery {
    /// Query string pairs in the order and spelling the endpoint expects.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("log_dir", self.log_dir.clone()),
            ("cursor", self.cursor.to_string()),
            ("limit", self.limit.to_string()),
            ("noKernel", self.no_kernel.to_string()),
            ("noBias", self.no_bias.to_string()),
        ]
    }

    /// Last step covered by the window (inclusive). Saturates at `u64::MAX`.
    #[must_use]
    pub fn last_step(&self) -> u64 {
        self.cursor.saturating_add(self.limit.saturating_sub(1))
    }
}

/// Part of a page left out because it did not have the expected shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    /// Position in the endpoint's layer list.
    pub index: usize,
    /// Layer name, when the entry had a readable one.
    pub name: Option<String>,
    pub part: SkippedPart,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkippedPart {
    /// The whole entry; the layer is dropped.
    Layer,
    /// The kernel; the layer is kept with an empty kernel.
    Kernel,
    /// The bias; the layer is kept with an empty bias.
    Bias,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = match self.part {
            SkippedPart::Layer => "layer",
            SkippedPart::Kernel => "kernel",
            SkippedPart::Bias => "bias",
        };
        match &self.name {
            Some(name) => write!(f, "layer {} ({name}): skipped {part}: {}", self.index, self.reason),
            None => write!(f, "layer {}: skipped {part}: {}", self.index, self.reason),
        }
    }
}

/// Decoded page: the layers plus whatever the endpoint said about later pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TensorPage {
    pub layers: Vec<LayerEntry>,
    /// `None` when the endpoint answered with a bare array.
    pub has_more: Option<bool>,
    /// Layers and tensors that did not decode. Empty for a well-formed page.
    pub skipped: Vec<Skipped>,
}

#[derive(Deserialize)]
struct Envelope {
    layers: Vec<Value>,
    #[serde(default)]
    has_more: Option<bool>,
}

/// A layer entry with its tensors still undecoded.
#[derive(Deserialize)]
struct RawLayer {
    name: String,
    #[serde(default)]
    kernel: Option<Value>,
    #[serde(default)]
    bias: Option<Value>,
}

impl TensorPage {
    /// Decode a response body.
    ///
    /// Layers are decoded one at a time: a layer entry or tensor with the
    /// wrong shape is recorded in [`TensorPage::skipped`] and the rest of the
    /// page is kept.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Decode`] when the body is neither a layer array
    /// nor a `{ layers, has_more }` envelope.
    pub fn from_json(body: &str) -> Result<Self, PageError> {
        // Integer step keys do not survive serde's buffered untagged
        // matching, so the shape is picked from the first token instead.
        let (raw_layers, has_more) = if body.trim_start().starts_with('[') {
            (serde_json::from_str::<Vec<Value>>(body)?, None)
        } else {
            let Envelope { layers, has_more } = serde_json::from_str(body)?;
            (layers, has_more)
        };

        let mut page = Self { layers: Vec::with_capacity(raw_layers.len()), has_more, skipped: Vec::new() };
        for (index, raw) in raw_layers.into_iter().enumerate() {
            match serde_json::from_value::<RawLayer>(raw) {
                Ok(layer) => page.push_layer(index, layer),
                Err(e) => page.skipped.push(Skipped {
                    index,
                    name: None,
                    part: SkippedPart::Layer,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(page)
    }

    fn push_layer(&mut self, index: usize, raw: RawLayer) {
        let RawLayer { name, kernel, bias } = raw;
        let mut skip = |part: SkippedPart, e: serde_json::Error| {
            self.skipped.push(Skipped { index, name: Some(name.clone()), part, reason: e.to_string() });
        };
        let kernel = decode_tensor(kernel).unwrap_or_else(|e| {
            skip(SkippedPart::Kernel, e);
            KernelSnapshot::default()
        });
        let bias = decode_tensor(bias).unwrap_or_else(|e| {
            skip(SkippedPart::Bias, e);
            BiasSnapshot::default()
        });
        self.layers.push(LayerEntry { name, kernel, bias });
    }
}

/// Missing and `null` tensors decode to an empty snapshot.
fn decode_tensor<T: DeserializeOwned + Default>(value: Option<Value>) -> Result<T, serde_json::Error> {
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}
