//! Structured diagnostics shared by pagination and validation. These are
//! always returned as data, never raised.

use crate::node::LayoutNode;
use quire_types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    NanFrame,
    NegativeFrame,
    OutOfBounds,
    OverflowMain,
    FlushGapSidebarLeft,
    FlushGapSidebarRight,
    OversizedBlock,
    OrphanTitle,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::NanFrame => "NAN_FRAME",
            IssueCode::NegativeFrame => "NEGATIVE_FRAME",
            IssueCode::OutOfBounds => "OUT_OF_BOUNDS",
            IssueCode::OverflowMain => "OVERFLOW_MAIN",
            IssueCode::FlushGapSidebarLeft => "FLUSH_GAP_SIDEBAR_LEFT",
            IssueCode::FlushGapSidebarRight => "FLUSH_GAP_SIDEBAR_RIGHT",
            IssueCode::OversizedBlock => "OVERSIZED_BLOCK",
            IssueCode::OrphanTitle => "ORPHAN_TITLE",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub level: Level,
    pub code: IssueCode,
    pub node_id: NodeId,
    pub node_type: String,
    pub message: String,
    #[serde(default)]
    pub data: BTreeMap<String, f32>,
}

impl Diagnostic {
    pub fn error(code: IssueCode, node: &LayoutNode, message: impl Into<String>) -> Self {
        Self::new(Level::Error, code, node, message)
    }

    pub fn warn(code: IssueCode, node: &LayoutNode, message: impl Into<String>) -> Self {
        Self::new(Level::Warn, code, node, message)
    }

    fn new(level: Level, code: IssueCode, node: &LayoutNode, message: impl Into<String>) -> Self {
        Self {
            level,
            code,
            node_id: node.node_id.clone(),
            node_type: node.node_type().to_string(),
            message: message.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: f32) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}
