//! The profile document model and the Content Tree Builder that turns it
//! into a [`SceneTree`] with stable field paths.

use quire_constraints::LayoutConstraints;
use quire_layout::node_kind::TextRole;
use quire_layout::{SceneNode, SceneTree};
use quire_types::FieldPath;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub headline: Option<String>,
    pub photo: Option<Photo>,
    pub contact: Contact,
    pub summary: Option<String>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub src: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl Contact {
    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("email", &self.email),
            ("phone", &self.phone),
            ("location", &self.location),
            ("website", &self.website),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key, v))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub level: Option<String>,
}

/// Which parts of the profile are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    pub show_photo: bool,
    pub show_headline: bool,
    pub show_contact: bool,
    pub show_summary: bool,
    pub show_experiences: bool,
    pub show_educations: bool,
    pub show_skills: bool,
    pub show_languages: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_photo: true,
            show_headline: true,
            show_contact: true,
            show_summary: true,
            show_experiences: true,
            show_educations: true,
            show_skills: true,
            show_languages: true,
        }
    }
}

/// Builds the scene for `profile`. Empty sections are left out entirely;
/// header and sidebar content is routed by the geometry pass when the
/// preset lacks those regions.
pub fn build_scene(
    profile: &Profile,
    options: &DisplayOptions,
    constraints: &LayoutConstraints,
) -> SceneTree {
    let mut scene = SceneTree::default();

    if !profile.name.trim().is_empty() {
        scene.header.push(
            SceneNode::text_with_role("name", profile.name.trim(), TextRole::Name)
                .with_field_path("name"),
        );
    }
    if options.show_headline {
        if let Some(headline) = non_empty(&profile.headline) {
            scene.header.push(
                SceneNode::text_with_role("headline", headline, TextRole::Label)
                    .with_field_path("headline"),
            );
        }
    }

    // ATS-oriented single column layouts drop the photo.
    let has_chrome = constraints.has_sidebar() || constraints.frames.header.is_some();
    if options.show_photo && has_chrome {
        if let Some(photo) = &profile.photo {
            scene.sidebar.push(
                SceneNode::image("photo", photo.src.as_str(), photo.width, photo.height)
                    .with_field_path("photo"),
            );
        }
    }
    if options.show_contact {
        let items: Vec<SceneNode> = profile
            .contact
            .entries()
            .map(|(key, value)| {
                SceneNode::text_with_role(format!("contact-{}", key), value, TextRole::Label)
                    .with_field_path(format!("contact.{}", key))
            })
            .collect();
        push_section(&mut scene.sidebar, "contact", "Contact", items, constraints);
    }
    if options.show_skills {
        let items = profile
            .skills
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.name.trim().is_empty())
            .map(|(i, s)| rated_item("skills", i, &s.name, s.level.as_deref()))
            .collect();
        push_section(&mut scene.sidebar, "skills", "Skills", items, constraints);
    }
    if options.show_languages {
        let items = profile
            .languages
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.name.trim().is_empty())
            .map(|(i, l)| rated_item("languages", i, &l.name, l.level.as_deref()))
            .collect();
        push_section(&mut scene.sidebar, "languages", "Languages", items, constraints);
    }

    if options.show_summary {
        if let Some(summary) = non_empty(&profile.summary) {
            let text = SceneNode::text("summary-text", summary).with_field_path("summary.text");
            push_section(&mut scene.main, "summary", "Summary", vec![text], constraints);
        }
    }
    if options.show_experiences {
        let entries = profile
            .experiences
            .iter()
            .enumerate()
            .map(|(i, e)| experience_entry(i, e))
            .collect();
        push_section(&mut scene.main, "experiences", "Experience", entries, constraints);
    }
    if options.show_educations {
        let entries = profile
            .educations
            .iter()
            .enumerate()
            .map(|(i, e)| education_entry(i, e))
            .collect();
        push_section(&mut scene.main, "educations", "Education", entries, constraints);
    }

    log::debug!(
        "Built scene for '{}': {} header, {} main, {} sidebar nodes",
        profile.name,
        scene.header.len(),
        scene.main.len(),
        scene.sidebar.len()
    );
    scene
}

fn push_section(
    target: &mut Vec<SceneNode>,
    key: &str,
    title: &str,
    children: Vec<SceneNode>,
    constraints: &LayoutConstraints,
) {
    if children.is_empty() {
        return;
    }
    let section = SceneNode::section(key, Some(title.to_string()), children).with_field_path(key);
    target.push(if constraints.is_always_splittable(key) {
        section.always_splittable()
    } else {
        section
    });
}

fn experience_entry(index: usize, exp: &Experience) -> SceneNode {
    let path = FieldPath::new("experiences").at(index);
    let id = format!("experience-{}", index);
    let mut children = vec![
        SceneNode::text_with_role(
            format!("{}-title", id),
            join_nonempty(&[exp.title.as_str(), exp.company.as_str()], ", "),
            TextRole::Heading,
        )
        .with_field_path(path.join("title")),
    ];

    let period = period(exp.start.as_deref(), exp.end.as_deref());
    let meta = join_nonempty(&[period.as_str(), exp.location.as_deref().unwrap_or("")], " | ");
    if !meta.is_empty() {
        children.push(
            SceneNode::text_with_role(format!("{}-meta", id), meta, TextRole::Label)
                .with_field_path(path.join("meta")),
        );
    }

    let tasks_path = path.join("tasks");
    let tasks: Vec<SceneNode> = exp
        .tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.trim().is_empty())
        .map(|(j, task)| {
            SceneNode::text(format!("{}-task-{}", id, j), task.as_str())
                .with_field_path(tasks_path.at(j))
        })
        .collect();
    if !tasks.is_empty() {
        children.push(SceneNode::list(format!("{}-tasks", id), tasks).with_field_path(tasks_path));
    }

    SceneNode::group(id, children).with_field_path(path)
}

fn education_entry(index: usize, edu: &Education) -> SceneNode {
    let path = FieldPath::new("educations").at(index);
    let id = format!("education-{}", index);
    let mut children = vec![
        SceneNode::text_with_role(format!("{}-title", id), edu.degree.as_str(), TextRole::Heading)
            .with_field_path(path.join("title")),
    ];
    let period = period(edu.start.as_deref(), edu.end.as_deref());
    let meta = join_nonempty(&[edu.school.as_str(), period.as_str()], " | ");
    if !meta.is_empty() {
        children.push(
            SceneNode::text_with_role(format!("{}-meta", id), meta, TextRole::Label)
                .with_field_path(path.join("meta")),
        );
    }
    if let Some(details) = non_empty(&edu.details) {
        children.push(
            SceneNode::text(format!("{}-details", id), details)
                .with_field_path(path.join("details")),
        );
    }
    SceneNode::group(id, children).with_field_path(path)
}

fn rated_item(key: &str, index: usize, name: &str, level: Option<&str>) -> SceneNode {
    let text = match level.filter(|l| !l.trim().is_empty()) {
        Some(level) => format!("{} ({})", name.trim(), level.trim()),
        None => name.trim().to_string(),
    };
    SceneNode::text(format!("{}-{}", key, index), text)
        .with_field_path(FieldPath::new(key).at(index))
}

fn period(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} - {}", s, e),
        (Some(s), None) => format!("{} - present", s),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}

fn join_nonempty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
