//! The ordered sequence of steps performed by a `buildall` run, and the
//! driver that executes them one after the other
pub mod artifacts;
pub mod manifest;
pub mod toolkit;

use core::fmt;
use std::time::{Duration, Instant};

use color_eyre::{eyre::Context, Result};

use crate::cli::output::arguments::CommandLine;
use crate::pipeline_model::{
    artifacts::ArtifactCopy, environment::BuildEnvironment, invocation::BuildInvocation,
    PipelineModel,
};

use self::toolkit::Toolkit;

/// A single unit of work of the pipeline. Every variant maps to exactly
/// one [`Toolkit`] operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    ClearArtifacts,
    Status,
    Manifest,
    Build(&'a BuildInvocation<'a>),
    GenerateDocs,
    CopyToArtifacts(&'a ArtifactCopy<'a>),
    LintCorrectness,
    LintStyle,
}

impl<'a> Step<'a> {
    /// The command line that the step spawns, if it spawns a single external process
    pub fn command_line(&self, env: &BuildEnvironment<'a>) -> Option<CommandLine<'a>> {
        match self {
            Step::Status => Some(env.tools().status.clone()),
            Step::Build(invocation) => Some(env.waf_command(&invocation.options)),
            Step::GenerateDocs => Some(env.tools().docs.clone()),
            Step::LintCorrectness => Some(env.tools().cppcheck.clone()),
            Step::LintStyle => Some(env.tools().stylecheck.clone()),
            Step::ClearArtifacts | Step::Manifest | Step::CopyToArtifacts(_) => None,
        }
    }
}

impl<'a> fmt::Display for Step<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ClearArtifacts => write!(f, "clear artifacts"),
            Step::Status => write!(f, "status"),
            Step::Manifest => write!(f, "manifest"),
            Step::Build(invocation) => write!(f, "build {invocation}"),
            Step::GenerateDocs => write!(f, "generate docs"),
            Step::CopyToArtifacts(copy) => write!(f, "copy to artifacts {copy}"),
            Step::LintCorrectness => write!(f, "lint correctness"),
            Step::LintStyle => write!(f, "lint style"),
        }
    }
}

/// Lays out the steps of the pipeline in their fixed order:
///
/// 1. clear the artifacts
/// 2. status
/// 3. manifest
/// 4. every build invocation, in declaration order
/// 5. documentation
/// 6. every artifacts copy, in declaration order
/// 7. correctness static analysis
/// 8. style check
pub fn assemble_steps<'a>(model: &'a PipelineModel<'a>) -> Vec<Step<'a>> {
    let mut steps = Vec::with_capacity(model.invocations.len() + model.artifacts.len() + 6);

    steps.push(Step::ClearArtifacts);
    steps.push(Step::Status);
    steps.push(Step::Manifest);
    steps.extend(model.invocations.iter().map(Step::Build));
    steps.push(Step::GenerateDocs);
    steps.extend(model.artifacts.iter().map(Step::CopyToArtifacts));
    steps.push(Step::LintCorrectness);
    steps.push(Step::LintStyle);

    steps
}

/// Details about a step that finished successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: String,
    pub elapsed: Duration,
}

/// The outcome of a complete pipeline run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub completed: Vec<StepRecord>,
    pub elapsed: Duration,
}

impl PipelineReport {
    pub fn log_summary(&self) {
        for record in &self.completed {
            log::info!(
                "{:>8} ms - {}",
                record.elapsed.as_millis(),
                record.step
            );
        }
        log::info!(
            "{} steps completed in {} ms",
            self.completed.len(),
            self.elapsed.as_millis()
        );
    }
}

/// Runs the steps sequentially against the given toolkit.
///
/// The first failing step aborts the run: no later step is executed, and
/// the returned error names the step that failed
pub fn execute<'a, T>(
    steps: &[Step<'a>],
    toolkit: &mut T,
    env: &BuildEnvironment<'a>,
) -> Result<PipelineReport>
where
    T: Toolkit + ?Sized,
{
    let pipeline_ts = Instant::now();
    let mut report = PipelineReport::default();
    let total = steps.len();

    for (idx, step) in steps.iter().enumerate() {
        log::info!("[{}/{total}] {step}", idx + 1);
        let step_ts = Instant::now();

        run_step(step, toolkit, env)
            .with_context(|| format!("Step [{}/{total}] '{step}' failed", idx + 1))?;

        let elapsed = step_ts.elapsed();
        log::debug!("'{step}' took {} ms", elapsed.as_millis());
        report.completed.push(StepRecord {
            step: step.to_string(),
            elapsed,
        });
    }

    report.elapsed = pipeline_ts.elapsed();
    Ok(report)
}

fn run_step<'a, T>(step: &Step<'a>, toolkit: &mut T, env: &BuildEnvironment<'a>) -> Result<()>
where
    T: Toolkit + ?Sized,
{
    match step {
        Step::ClearArtifacts => toolkit.clear_artifacts(env),
        Step::Status => toolkit.status(env),
        Step::Manifest => toolkit.manifest(env),
        Step::Build(invocation) => toolkit.build(env, &invocation.options),
        Step::GenerateDocs => toolkit.generate_docs(env),
        Step::CopyToArtifacts(copy) => {
            toolkit.copy_to_artifacts(env, &copy.patterns, copy.subdir.as_deref())
        }
        Step::LintCorrectness => toolkit.lint_correctness(env),
        Step::LintStyle => toolkit.lint_style(env),
    }
}

/// Prints every step together with the command line it resolves to
pub fn print_plan<'a>(steps: &[Step<'a>], env: &BuildEnvironment<'a>) {
    println!("Pipeline for project '{}':", env.model.project.name);
    println!("  build directory: {:?}", env.build_dir());
    println!("  artifacts directory: {:?}", env.artifact_dir());
    for (idx, step) in steps.iter().enumerate() {
        match step.command_line(env) {
            Some(cmd) => println!("{:>3}. {step}\n       $ {cmd}", idx + 1),
            None => println!("{:>3}. {step}", idx + 1),
        }
    }
}
