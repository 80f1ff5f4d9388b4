use quire::Profile;
use quire::harness;

pub fn empty_profile() -> Profile {
    Profile::default()
}

pub fn typical_profile() -> Profile {
    harness::typical_profile()
}

/// One experience with 15 long tasks.
pub fn long_tasks_profile() -> Profile {
    harness::long_tasks_profile()
}

pub fn profile_json() -> &'static str {
    r#"{
        "name": "Riley Chen",
        "headline": "Data Engineer",
        "contact": { "email": "riley@example.com", "location": "Berlin" },
        "summary": "Builds reliable data pipelines.",
        "experiences": [
            {
                "title": "Data Engineer",
                "company": "Streamworks",
                "start": "2021",
                "tasks": ["Owned the ingestion layer.", "Cut batch runtime in half."]
            }
        ],
        "skills": [{ "name": "Python" }, { "name": "Rust", "level": "intermediate" }],
        "languages": [{ "name": "German", "level": "C1" }]
    }"#
}

pub fn scene_json() -> &'static str {
    r#"{
        "header": [{ "id": "name", "type": "text", "content": "Riley Chen", "role": "name" }],
        "main": [
            {
                "id": "skills",
                "fieldPath": "skills",
                "type": "section",
                "title": "Skills",
                "alwaysSplittable": true,
                "children": [
                    { "id": "s0", "type": "text", "content": "Rust" },
                    { "id": "s1", "type": "text" }
                ]
            }
        ]
    }"#
}
