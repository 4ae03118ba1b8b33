//! Action convention
//!
//! Every action carries a `type` discriminator. The store itself never looks
//! at anything else; reducers and middleware interpret the payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type of the bootstrap action dispatched once when a store is created.
///
/// Application action types must never use this value.
pub const INIT_ACTION_TYPE: &str = "@@redux/INIT";

/// An action that can be dispatched to a [`Store`](crate::Store)
pub trait Action: 'static {
    /// The `type` discriminator
    fn action_type(&self) -> &str;

    /// Build the reserved bootstrap action (type [`INIT_ACTION_TYPE`])
    fn init() -> Self;

    fn is_init(&self) -> bool {
        self.action_type() == INIT_ACTION_TYPE
    }
}

/// Record-shaped action: a `type` field plus arbitrary payload fields
///
/// Serializes flat, e.g. `{"type":"ADD","amount":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PlainAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Attach a payload field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl Action for PlainAction {
    fn action_type(&self) -> &str {
        &self.kind
    }

    fn init() -> Self {
        Self::new(INIT_ACTION_TYPE)
    }
}
