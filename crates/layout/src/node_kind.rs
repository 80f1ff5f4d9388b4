use crate::style::TextTransform;
use quire_constraints::FrameName;
use serde::{Deserialize, Serialize};

/// Semantic role of a region container placed directly on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerRole {
    Header,
    Sidebar,
    LeftRail,
    RightRail,
    Main,
    /// A generic grouping inside a region (e.g. one experience entry).
    Group,
}

impl ContainerRole {
    /// Sidebar and rails may repeat on every page; the header never does.
    pub fn is_repeatable_chrome(self) -> bool {
        matches!(
            self,
            ContainerRole::Sidebar | ContainerRole::LeftRail | ContainerRole::RightRail
        )
    }
}

impl From<FrameName> for ContainerRole {
    fn from(name: FrameName) -> Self {
        match name {
            FrameName::Header => ContainerRole::Header,
            FrameName::Sidebar => ContainerRole::Sidebar,
            FrameName::LeftRail => ContainerRole::LeftRail,
            FrameName::RightRail => ContainerRole::RightRail,
            FrameName::Main => ContainerRole::Main,
        }
    }
}

/// How a run of text functions in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    #[default]
    Body,
    /// Title of a top-level section ("EXPERIENCE").
    SectionTitle,
    /// Heading of an entry inside a section (job title, degree).
    Heading,
    /// The document owner's name.
    Name,
    /// Small print: dates, places, contact lines.
    Label,
}

impl TextRole {
    pub fn text_transform(self) -> TextTransform {
        match self {
            TextRole::SectionTitle => TextTransform::Uppercase,
            _ => TextTransform::None,
        }
    }
}

/// The closed set of node variants and the fields each one carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename_all = "camelCase")]
pub enum NodeKind {
    Page {
        index: usize,
    },
    Container {
        role: ContainerRole,
    },
    #[serde(rename_all = "camelCase")]
    Section {
        /// Pagination always breaks this section into its entries.
        always_splittable: bool,
    },
    Text {
        content: String,
        role: TextRole,
    },
    List,
    Image {
        src: String,
    },
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Page { .. } => "page",
            NodeKind::Container { .. } => "container",
            NodeKind::Section { .. } => "section",
            NodeKind::Text { .. } => "text",
            NodeKind::List => "list",
            NodeKind::Image { .. } => "image",
        }
    }
}
