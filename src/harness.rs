//! Regression harness: renders a matrix of golden profiles over every
//! region, preset and sidebar position and records a structural snapshot of
//! each case.
//!
//! Snapshots hold page signatures rather than full trees, so any geometric
//! drift shows up as a changed case in [`diff`].

use crate::error::PipelineError;
use crate::executor::{Executor, ExecutorImpl};
use crate::pipeline::PipelineBuilder;
use crate::profile::{Contact, DisplayOptions, Education, Experience, Language, Profile, Skill};
use chrono::Utc;
use quire_constraints::{PresetId, RegionId, SidebarPosition};
use quire_layout::{IssueCode, PaginationOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSnapshot {
    pub page_count: usize,
    pub page_signatures: Vec<String>,
    pub split_points: Vec<f32>,
    pub warning_codes: Vec<IssueCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    pub version: u32,
    pub generated_at: String,
    pub cases: BTreeMap<String, CaseSnapshot>,
}

impl SnapshotFile {
    pub fn new(cases: BTreeMap<String, CaseSnapshot>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            cases,
        }
    }
}

/// One matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaseKey {
    pub profile: String,
    pub region: RegionId,
    pub preset: PresetId,
    pub position: SidebarPosition,
}

impl CaseKey {
    /// `"{profile}/{region}/{preset}/{position}"`
    pub fn as_key(&self) -> String {
        format!("{}/{}/{}/{}", self.profile, self.region, self.preset, self.position)
    }
}

#[derive(Debug, Clone)]
pub struct GoldenProfile {
    pub name: String,
    pub profile: Profile,
}

impl GoldenProfile {
    pub fn new(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }
}

pub struct Harness {
    profiles: Vec<GoldenProfile>,
    display: DisplayOptions,
    pagination: PaginationOptions,
    executor: ExecutorImpl,
}

impl Harness {
    pub fn new(profiles: Vec<GoldenProfile>) -> Self {
        Self {
            profiles,
            display: DisplayOptions::default(),
            pagination: PaginationOptions::default(),
            executor: ExecutorImpl::default(),
        }
    }

    pub fn with_pagination_options(mut self, options: PaginationOptions) -> Self {
        self.pagination = options;
        self
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = executor;
        self
    }

    /// Every profile x region x preset x sidebar position, in key order.
    pub fn cases(&self) -> Vec<CaseKey> {
        let mut keys = Vec::new();
        for golden in &self.profiles {
            for region in RegionId::ALL {
                for preset in PresetId::ALL {
                    for position in SidebarPosition::ALL {
                        keys.push(CaseKey {
                            profile: golden.name.clone(),
                            region,
                            preset,
                            position,
                        });
                    }
                }
            }
        }
        keys.sort();
        keys
    }

    pub fn run(&self) -> BTreeMap<String, CaseSnapshot> {
        let profiles: Arc<BTreeMap<String, Profile>> = Arc::new(
            self.profiles
                .iter()
                .map(|g| (g.name.clone(), g.profile.clone()))
                .collect(),
        );
        let display = self.display;
        let pagination = self.pagination;
        let cases = self.cases();
        log::info!(
            "Running {} regression cases on {} ({} threads)",
            cases.len(),
            self.executor.name(),
            self.executor.parallelism()
        );

        let results = self.executor.execute_all(cases, move |case| {
            let snapshot = profiles
                .get(&case.profile)
                .map(|profile| run_case(&case, profile, &display, pagination));
            (case.as_key(), snapshot)
        });

        results
            .into_iter()
            .filter_map(|(key, snapshot)| snapshot.map(|s| (key, s)))
            .collect()
    }

    pub fn snapshot(&self) -> SnapshotFile {
        SnapshotFile::new(self.run())
    }
}

fn run_case(
    case: &CaseKey,
    profile: &Profile,
    display: &DisplayOptions,
    pagination: PaginationOptions,
) -> CaseSnapshot {
    let output = PipelineBuilder::new()
        .with_region(case.region)
        .with_preset(case.preset)
        .with_sidebar_position(case.position)
        .with_pagination_options(pagination)
        .build()
        .run_profile(profile, display);
    if !output.validation.valid {
        log::warn!(
            "{}: {} validation error(s)",
            case.as_key(),
            output.validation.stats.errors
        );
    }
    CaseSnapshot {
        page_count: output.pagination.page_count,
        warning_codes: output.pagination.warning_codes(),
        page_signatures: output.pagination.page_signatures,
        split_points: output.pagination.split_points,
    }
}

pub fn save(path: impl AsRef<Path>, snapshot: &SnapshotFile) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<SnapshotFile, PipelineError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let snapshot: SnapshotFile = serde_json::from_str(&json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(PipelineError::Snapshot(format!(
            "'{}' has version {}, expected {}",
            path.display(),
            snapshot.version,
            SNAPSHOT_VERSION
        )));
    }
    Ok(snapshot)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseChange {
    pub key: String,
    pub expected: CaseSnapshot,
    pub actual: CaseSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<CaseChange>,
}

impl SnapshotDiff {
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compares two snapshots case by case. `generatedAt` is ignored.
pub fn diff(expected: &SnapshotFile, actual: &SnapshotFile) -> SnapshotDiff {
    let mut result = SnapshotDiff::default();
    for (key, exp) in &expected.cases {
        match actual.cases.get(key) {
            None => result.removed.push(key.clone()),
            Some(act) if act != exp => result.changed.push(CaseChange {
                key: key.clone(),
                expected: exp.clone(),
                actual: act.clone(),
            }),
            Some(_) => {}
        }
    }
    result.added = actual
        .cases
        .keys()
        .filter(|k| !expected.cases.contains_key(*k))
        .cloned()
        .collect();
    result
}

/// The built-in golden profiles: empty, typical, long tasks and many entries.
pub fn golden_profiles() -> Vec<GoldenProfile> {
    vec![
        GoldenProfile::new("empty", Profile::default()),
        GoldenProfile::new("typical", typical_profile()),
        GoldenProfile::new("long-tasks", long_tasks_profile()),
        GoldenProfile::new("many-entries", many_entries_profile()),
    ]
}

pub fn typical_profile() -> Profile {
    Profile {
        name: "Alex Morgan".into(),
        headline: Some("Senior Backend Engineer".into()),
        contact: Contact {
            email: Some("alex.morgan@example.com".into()),
            phone: Some("+1 555 0100".into()),
            location: Some("Portland, OR".into()),
            website: None,
        },
        summary: Some(
            "Backend engineer with ten years of experience building payment and logistics platforms."
                .into(),
        ),
        experiences: (0..3)
            .map(|i| Experience {
                title: "Software Engineer".into(),
                company: format!("Company {}", i + 1),
                location: Some("Remote".into()),
                start: Some(format!("{}", 2016 + i * 3)),
                end: Some(format!("{}", 2019 + i * 3)),
                tasks: vec![
                    "Designed and operated the order ingestion service.".into(),
                    "Reduced p99 latency of the checkout path by forty percent.".into(),
                    "Mentored four engineers through their first on-call rotation.".into(),
                ],
            })
            .collect(),
        educations: vec![Education {
            degree: "BSc Computer Science".into(),
            school: "State University".into(),
            start: Some("2010".into()),
            end: Some("2014".into()),
            details: None,
        }],
        skills: ["Rust", "PostgreSQL", "Kafka", "Kubernetes"]
            .iter()
            .map(|s| Skill {
                name: s.to_string(),
                level: None,
            })
            .collect(),
        languages: vec![
            Language {
                name: "English".into(),
                level: Some("native".into()),
            },
            Language {
                name: "German".into(),
                level: Some("B2".into()),
            },
        ],
        ..Default::default()
    }
}

/// One experience with 15 long tasks: forces splits inside a single entry.
pub fn long_tasks_profile() -> Profile {
    let task = "Led the migration of a monolithic billing system to event-driven services, \
                coordinating schema changes, backfills and cut-over plans across six teams \
                while keeping invoices accurate to the cent.";
    Profile {
        name: "Sam Rivera".into(),
        experiences: vec![Experience {
            title: "Staff Engineer".into(),
            company: "Billing Corp".into(),
            start: Some("2018".into()),
            tasks: (0..15).map(|i| format!("{} ({})", task, i + 1)).collect(),
            ..Default::default()
        }],
        skills: vec![Skill {
            name: "Distributed systems".into(),
            level: Some("expert".into()),
        }],
        ..typical_profile()
    }
}

pub fn many_entries_profile() -> Profile {
    let mut profile = typical_profile();
    profile.name = "Jordan Lee".into();
    profile.experiences = (0..12)
        .map(|i| Experience {
            title: format!("Engineer {}", i + 1),
            company: format!("Firm {}", i + 1),
            start: Some(format!("{}", 2000 + i)),
            end: Some(format!("{}", 2001 + i)),
            tasks: vec![
                "Built internal tooling.".into(),
                "Owned the release process.".into(),
            ],
            ..Default::default()
        })
        .collect();
    profile
}
