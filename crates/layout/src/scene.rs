//! Scene input: the typed content tree handed to the geometry pass.

use crate::LayoutError;
use crate::node_kind::TextRole;
use quire_types::FieldPath;
use serde::{Deserialize, Serialize};

/// Content per page region. Regions the preset lacks are folded into the
/// nearest one that exists when geometry is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneTree {
    pub header: Vec<SceneNode>,
    pub main: Vec<SceneNode>,
    pub sidebar: Vec<SceneNode>,
    pub left_rail: Vec<SceneNode>,
    pub right_rail: Vec<SceneNode>,
}

impl SceneTree {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.main.is_empty()
            && self.sidebar.is_empty()
            && self.left_rail.is_empty()
            && self.right_rail.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_path: Option<FieldPath>,
    #[serde(flatten)]
    pub content: SceneContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SceneContent {
    #[serde(rename_all = "camelCase")]
    Section {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        always_splittable: bool,
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Group {
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Text {
        /// `None` means the content could not be resolved; it still gets one line.
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        role: TextRole,
    },
    List {
        #[serde(default)]
        items: Vec<SceneNode>,
    },
    Image {
        src: String,
        width: f32,
        height: f32,
    },
}

impl SceneNode {
    pub fn text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_content(
            id,
            SceneContent::Text {
                content: Some(content.into()),
                role: TextRole::Body,
            },
        )
    }

    pub fn text_with_role(
        id: impl Into<String>,
        content: impl Into<String>,
        role: TextRole,
    ) -> Self {
        Self::from_content(
            id,
            SceneContent::Text {
                content: Some(content.into()),
                role,
            },
        )
    }

    pub fn section(id: impl Into<String>, title: Option<String>, children: Vec<SceneNode>) -> Self {
        Self::from_content(
            id,
            SceneContent::Section {
                title,
                always_splittable: false,
                children,
            },
        )
    }

    pub fn group(id: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self::from_content(id, SceneContent::Group { children })
    }

    pub fn list(id: impl Into<String>, items: Vec<SceneNode>) -> Self {
        Self::from_content(id, SceneContent::List { items })
    }

    pub fn image(id: impl Into<String>, src: impl Into<String>, width: f32, height: f32) -> Self {
        Self::from_content(
            id,
            SceneContent::Image {
                src: src.into(),
                width,
                height,
            },
        )
    }

    pub fn from_content(id: impl Into<String>, content: SceneContent) -> Self {
        Self {
            id: id.into(),
            field_path: None,
            content,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<FieldPath>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    /// Marks a section as always broken into entries by pagination.
    pub fn always_splittable(mut self) -> Self {
        if let SceneContent::Section {
            always_splittable, ..
        } = &mut self.content
        {
            *always_splittable = true;
        }
        self
    }
}
