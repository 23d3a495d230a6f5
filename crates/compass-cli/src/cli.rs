//! Command-line argument wrappers and the command handler
//!
//! Each command's arguments are a clap `Args` struct that converts into the
//! matching core parameter type, keeping clap out of `compass-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store / Workflow
//! ```
//!
//! [`Cli`] then executes the command against an [`IntentStore`] and hands
//! the resulting markdown to the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use compass_core::{
    display::{CreateResult, GenerateResult, IntentEntries, OperationStatus, Tasks},
    models::CheckStatus,
    params::{GeneratePlan, GenerateTasks, IntentRef, NewIntent, VerifyIntent},
    render, template, IntentStore, ReportFormat, TemplateKind,
};
use log::{debug, warn};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Create a new intent from a template
#[derive(Args)]
pub struct NewArgs {
    /// Template to start from
    #[arg(value_enum, default_value_t = TemplateArg::Basic)]
    pub template: TemplateArg,
    /// File name in the store, without the .intent.yaml suffix. Defaults to
    /// a timestamp
    #[arg(short, long)]
    pub name: Option<String>,
    /// Subject of the change, used in the template goal
    #[arg(long, help = "Subject of the change, e.g. \"login timeout\"")]
    pub hint: Option<String>,
}

impl From<NewArgs> for NewIntent {
    fn from(val: NewArgs) -> Self {
        NewIntent {
            template: Some(val.template.to_string()),
            name: val.name,
            hint: val.hint,
        }
    }
}

/// Select an intent by name or path
#[derive(Args)]
pub struct IntentArgs {
    /// Intent name or path to an intent file. Defaults to the latest intent
    pub name: Option<String>,
}

impl From<IntentArgs> for IntentRef {
    fn from(val: IntentArgs) -> Self {
        IntentRef { intent: val.name }
    }
}

/// Generate an implementation plan
#[derive(Args)]
pub struct PlanArgs {
    /// Intent name or path to an intent file. Defaults to the latest intent
    pub name: Option<String>,
    /// Omit the leading analysis step
    #[arg(long)]
    pub no_analysis: bool,
    /// Omit the trailing review step
    #[arg(long)]
    pub no_review: bool,
}

impl From<PlanArgs> for GeneratePlan {
    fn from(val: PlanArgs) -> Self {
        GeneratePlan {
            intent: val.name,
            no_analysis: val.no_analysis,
            no_review: val.no_review,
        }
    }
}

/// Generate a task breakdown
#[derive(Args)]
pub struct TasksArgs {
    /// Intent name or path to an intent file. Defaults to the latest intent
    pub name: Option<String>,
    /// Omit the leading analysis task
    #[arg(long)]
    pub no_analysis: bool,
    /// Omit the per-constraint verification tasks
    #[arg(long)]
    pub no_constraint_checks: bool,
    /// Show only tasks whose dependencies are done, from the saved breakdown
    #[arg(long, help = "Show tasks ready to start instead of regenerating")]
    pub ready: bool,
}

impl From<TasksArgs> for GenerateTasks {
    fn from(val: TasksArgs) -> Self {
        GenerateTasks {
            intent: val.name,
            no_analysis: val.no_analysis,
            no_constraint_checks: val.no_constraint_checks,
        }
    }
}

/// Mark checklist items and report
///
/// Every value is matched case-insensitively as a substring of a checklist
/// criterion, and only the first matching item is marked. Repeat a flag to
/// mark several items.
#[derive(Args)]
pub struct VerifyArgs {
    /// Intent name or path to an intent file. Defaults to the latest intent
    pub name: Option<String>,
    /// Criterion that passed
    #[arg(long = "pass", value_name = "TEXT")]
    pub passed: Vec<String>,
    /// Criterion that failed
    #[arg(long = "fail", value_name = "TEXT")]
    pub failed: Vec<String>,
    /// Criterion that was not checked
    #[arg(long = "skip", value_name = "TEXT")]
    pub skipped: Vec<String>,
    /// Report format. Defaults to the project config
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

impl From<VerifyArgs> for VerifyIntent {
    fn from(val: VerifyArgs) -> Self {
        VerifyIntent {
            intent: val.name,
            passed: val.passed,
            failed: val.failed,
            skipped: val.skipped,
            format: val.format.map(|format| format.to_string()),
        }
    }
}

/// Command-line representation of the intent templates
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    Basic,
    Feature,
    Bugfix,
    Refactor,
    Security,
}

impl From<TemplateArg> for TemplateKind {
    fn from(val: TemplateArg) -> Self {
        match val {
            TemplateArg::Basic => TemplateKind::Basic,
            TemplateArg::Feature => TemplateKind::Feature,
            TemplateArg::Bugfix => TemplateKind::Bugfix,
            TemplateArg::Refactor => TemplateKind::Refactor,
            TemplateArg::Security => TemplateKind::Security,
        }
    }
}

impl std::fmt::Display for TemplateArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TemplateKind::from(*self).as_str())
    }
}

/// Command-line representation of the report formats
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    #[value(alias = "md")]
    Markdown,
    Json,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatArg::Text => write!(f, "text"),
            FormatArg::Markdown => write!(f, "markdown"),
            FormatArg::Json => write!(f, "json"),
        }
    }
}

// ============================================================================
// Command handler
// ============================================================================

/// Executes CLI commands against one store.
pub struct Cli {
    store: IntentStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: IntentStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn init(&self) -> Result<()> {
        let created = self.store.init().context("Failed to initialize store")?;
        let dir = self.store.store_dir();
        let status = if created {
            OperationStatus::success(format!("Initialized store at {}", dir.display()))
        } else {
            OperationStatus::success(format!("Store already initialized at {}", dir.display()))
        };
        self.renderer.render(&status.to_string())
    }

    pub fn new_intent(&self, params: NewIntent) -> Result<()> {
        let kind = match params.template.as_deref() {
            Some(name) => name.parse::<TemplateKind>().map_err(anyhow::Error::msg)?,
            None => TemplateKind::default(),
        };
        let intent = template(kind, params.hint.as_deref());

        let path = self
            .store
            .create(params.name.as_deref(), &intent)
            .context("Failed to create intent")?;
        self.renderer
            .render(&CreateResult::new(intent, path).to_string())
    }

    pub fn list(&self) -> Result<()> {
        let entries = self.store.list().context("Failed to list intents")?;
        let title = if entries.is_empty() { "No intents" } else { "Intents" };
        let output = format!("# {title}\n\n{}", IntentEntries(entries));
        self.renderer.render(&output)
    }

    pub fn show(&self, params: IntentRef) -> Result<()> {
        let path = self
            .store
            .resolve(params.intent.as_deref())
            .context("Failed to find intent")?;
        let intent = self
            .store
            .read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut output = intent.to_string();
        let validation = intent.validate();
        if !validation.is_valid() {
            output.push_str("## Problems\n\n");
            for error in &validation.errors {
                output.push_str(&format!("- {error}\n"));
            }
        }
        self.renderer.render(&output)
    }

    pub fn plan(&self, params: GeneratePlan) -> Result<()> {
        let (path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .context("Failed to open intent")?;
        let config = params.plan_config(workflow.plan_config());

        let plan = workflow
            .with_plan_config(config)
            .create_plan()
            .context("Failed to generate plan")?
            .clone();
        let saved = self
            .store
            .write_plan(&path, &plan)
            .context("Failed to save plan")?;
        debug!("Plan written to {}", saved.display());

        self.renderer
            .render(&GenerateResult::saved(plan, saved).to_string())
    }

    pub fn tasks(&self, args: TasksArgs) -> Result<()> {
        let ready = args.ready;
        let params = GenerateTasks::from(args);
        let (path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .context("Failed to open intent")?;

        if ready {
            if let Some(breakdown) = self.store.read_tasks(&path).context("Failed to read tasks")? {
                let output = format!(
                    "# Ready tasks: {}\n\n{}",
                    breakdown.goal,
                    Tasks(breakdown.ready_tasks())
                );
                return self.renderer.render(&output);
            }
            debug!("No saved tasks for {}, generating", path.display());
        }

        let config = params.task_config(workflow.task_config());
        let breakdown = workflow
            .with_task_config(config)
            .create_tasks()
            .context("Failed to generate tasks")?
            .clone();
        let saved = self
            .store
            .write_tasks(&path, &breakdown)
            .context("Failed to save tasks")?;

        if ready {
            let output = format!(
                "# Ready tasks: {}\n\n{}",
                breakdown.goal,
                Tasks(breakdown.ready_tasks())
            );
            return self.renderer.render(&output);
        }
        self.renderer
            .render(&GenerateResult::saved(breakdown, saved).to_string())
    }

    pub fn checklist(&self, params: IntentRef) -> Result<()> {
        let (_path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .context("Failed to open intent")?;
        workflow.validate().context("Invalid intent")?;

        let checklist = workflow.create_checklist();
        self.renderer.render(&checklist.to_string())
    }

    pub fn verify(&self, params: VerifyIntent) -> Result<()> {
        let config = self.store.load_config().context("Failed to load config")?;
        let format = params
            .report_format(config.report_format)
            .map_err(anyhow::Error::msg)?;
        let (_path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .context("Failed to open intent")?;
        workflow.validate().context("Invalid intent")?;
        workflow.create_checklist();

        let marks = [
            (&params.passed, CheckStatus::Passed),
            (&params.failed, CheckStatus::Failed),
            (&params.skipped, CheckStatus::Skipped),
        ];
        for (needles, status) in marks {
            for needle in workflow.mark_all(needles, status) {
                warn!("No checklist item matches '{needle}'");
                eprintln!("Warning: no checklist item matches '{needle}'");
            }
        }

        let result = workflow.verify();
        let report = render(result, format).context("Failed to render report")?;
        match format {
            ReportFormat::Markdown => self.renderer.render(&report)?,
            ReportFormat::Text | ReportFormat::Json => self.renderer.plain(&report),
        }

        if !result.passed() {
            bail!("{}", result.summary);
        }
        Ok(())
    }
}
