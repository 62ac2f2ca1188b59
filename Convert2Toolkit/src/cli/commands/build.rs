//! CLI command for building projects

use std::path::PathBuf;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::cli::progress::{
    PACKAGE, print_done, print_failure, print_step, print_success, print_warning, simple_bar,
    update_bar,
};
use crate::cli::prompt::TerminalPrompt;
use crate::config::BuildSettings;
use crate::project::{
    BatchBuildResult, BuildProgress, NamePrompt, ProjectBuilder, ProjectOutcome, ProjectRegistry,
};

/// Build the given workspaces
pub fn execute(workspaces: &[PathBuf], settings: &BuildSettings) -> anyhow::Result<()> {
    let mut registry = ProjectRegistry::new();
    for workspace in workspaces {
        registry.add_project(workspace);
    }
    run(&registry, settings)
}

/// Build every registered workspace and report the outcomes
pub fn run(registry: &ProjectRegistry, settings: &BuildSettings) -> anyhow::Result<()> {
    let started = Instant::now();
    let builder = ProjectBuilder::from_settings(settings);

    print_step(
        1,
        1,
        PACKAGE,
        &format!(
            "Building {} project(s) into {}...",
            registry.len(),
            builder.output_root().display()
        ),
    );

    let terminal = TerminalPrompt;
    let prompt: Option<&dyn NamePrompt> = settings.interactive.then_some(&terminal as &dyn NamePrompt);

    // The prompt and a live bar would fight over the terminal
    let pb = if settings.interactive {
        ProgressBar::hidden()
    } else {
        simple_bar(0, "Building")
    };
    let callback = |progress: &BuildProgress| update_bar(&pb, progress);

    let batch = registry.build_all_with_progress(&builder, prompt, &callback);
    pb.finish_and_clear();

    report(&batch);
    print_done(started.elapsed());

    if batch.fail_count > 0 {
        anyhow::bail!("{} project(s) failed", batch.fail_count);
    }
    Ok(())
}

fn report(batch: &BatchBuildResult) {
    for result in &batch.results {
        match &result.outcome {
            ProjectOutcome::Built(report) => {
                print_success(&format!(
                    "[Project] Project {} successfully created",
                    result.name
                ));
                println!("  {}", report.root.display());
                println!(
                    "  {} copied, {} already present, {} rewritten",
                    report.files_copied, report.files_skipped, report.files_rewritten
                );
                for failure in &report.failures {
                    print_warning(&format!(
                        "  could not {} {}: {}",
                        failure.stage,
                        failure.path.display(),
                        failure.error
                    ));
                }
            }
            ProjectOutcome::Invalid => {
                print_warning(&format!("[Project] {} is not a valid project", result.name));
            }
            ProjectOutcome::Skipped => {
                print_warning(&format!("[Project] Skipped {}", result.name));
            }
            ProjectOutcome::Failed(err) => {
                print_failure(&format!(
                    "[Project] Failed to create project {}\n\tReason: {err}",
                    result.name
                ));
            }
        }
    }

    println!();
    println!("Build complete:");
    println!("  Success: {}", batch.success_count);
    println!("  Skipped: {}", batch.skip_count);
    println!("  Failed: {}", batch.fail_count);
}
