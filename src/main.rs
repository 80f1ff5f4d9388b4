use clap::{Args, Parser, Subcommand};
use quire::constraints::{BuildOptions, PresetId, RegionId, SidebarPosition};
use quire::harness::{self, Harness};
use quire::layout::{Diagnostic, PaginationOptions};
use quire::{DisplayOptions, LayoutPipeline, PipelineBuilder, PipelineError, Profile};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Lay out and paginate profile documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out one profile and print the paginated tree and validation report
    Layout(LayoutArgs),
    /// Write the golden-matrix snapshot, or compare against an existing one
    Snapshot {
        out: PathBuf,

        /// Compare with the file instead of overwriting it
        #[arg(long)]
        check: bool,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Profile JSON file
    profile: PathBuf,

    #[arg(short, long, default_value = "US")]
    region: String,

    /// Layout preset; defaults to the region's preferred preset
    #[arg(short, long)]
    preset: Option<String>,

    #[arg(long, default_value = "left")]
    sidebar: String,

    #[arg(long)]
    sidebar_width: Option<f32>,

    /// Space between the sidebar and the main column
    #[arg(long)]
    sidebar_gap: Option<f32>,

    #[arg(long)]
    header_height: Option<f32>,

    /// Clone the sidebar and rails onto every page
    #[arg(long)]
    repeat_sidebar: bool,

    #[arg(long, default_value_t = 3)]
    keep_together_threshold: usize,

    #[arg(long, default_value_t = 1)]
    min_widows: usize,

    /// Print only the page count, signatures and issues
    #[arg(long)]
    summary: bool,
}

impl LayoutArgs {
    fn pipeline(&self) -> Result<LayoutPipeline, PipelineError> {
        let build_options = BuildOptions {
            sidebar_position: Some(self.sidebar.parse::<SidebarPosition>()?),
            sidebar_width: self.sidebar_width,
            sidebar_gap: self.sidebar_gap,
            header_height: self.header_height,
        };
        let mut builder = PipelineBuilder::new()
            .with_region(self.region.parse::<RegionId>()?)
            .with_build_options(build_options)
            .with_pagination_options(PaginationOptions {
                repeat_sidebar_on_all_pages: self.repeat_sidebar,
                keep_together_threshold: self.keep_together_threshold,
                min_widows: self.min_widows,
            });
        if let Some(name) = &self.preset {
            builder = builder.with_preset(name.parse::<PresetId>()?);
        }
        Ok(builder.build())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSummary<'a> {
    page_count: usize,
    page_signatures: &'a [String],
    split_points: &'a [f32],
    issues: &'a [Diagnostic],
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, PipelineError> {
    match cli.command {
        Command::Layout(args) => {
            let profile = Profile::from_json(&fs::read_to_string(&args.profile)?)?;
            let pipeline = args.pipeline()?;

            let output = pipeline.run_profile(&profile, &DisplayOptions::default());
            let json = if args.summary {
                serde_json::to_string_pretty(&LayoutSummary {
                    page_count: output.pagination.page_count,
                    page_signatures: &output.pagination.page_signatures,
                    split_points: &output.pagination.split_points,
                    issues: &output.validation.issues,
                })?
            } else {
                serde_json::to_string_pretty(&output)?
            };
            println!("{}", json);
            Ok(if output.validation.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Snapshot { out, check } => {
            let current = Harness::new(harness::golden_profiles()).snapshot();
            if !check {
                harness::save(&out, &current)?;
                println!("Wrote {} cases to {}", current.cases.len(), out.display());
                return Ok(ExitCode::SUCCESS);
            }

            let expected = harness::load(&out)?;
            let diff = harness::diff(&expected, &current);
            if diff.is_clean() {
                println!("{} cases match {}", current.cases.len(), out.display());
                return Ok(ExitCode::SUCCESS);
            }
            for key in &diff.added {
                println!("added:   {}", key);
            }
            for key in &diff.removed {
                println!("removed: {}", key);
            }
            for change in &diff.changed {
                println!(
                    "changed: {} (pages {} -> {})",
                    change.key, change.expected.page_count, change.actual.page_count
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire::constraints::FrameName;

    fn layout_args(args: &[&str]) -> LayoutArgs {
        let mut argv = vec!["quire", "layout", "profile.json"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Layout(args) => args,
            other => panic!("expected layout, got {:?}", other),
        }
    }

    #[test]
    fn test_sidebar_overrides_reach_constraints() {
        let args = layout_args(&[
            "--preset",
            "SIDEBAR",
            "--sidebar-width",
            "150",
            "--sidebar-gap",
            "30",
        ]);
        let pipeline = args.pipeline().unwrap();
        let constraints = pipeline.constraints();

        assert_eq!(constraints.sidebar_width, 150.0);
        assert_eq!(constraints.sidebar_gap, 30.0);
        let main = constraints.frame(FrameName::Main).unwrap();
        assert_eq!(main.x, 180.0);
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let args = layout_args(&["--region", "atlantis"]);
        assert!(matches!(args.pipeline(), Err(PipelineError::Constraint(_))));
    }
}
