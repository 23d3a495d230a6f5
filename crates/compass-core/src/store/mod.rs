//! File store for intents and their generated documents.
//!
//! Everything lives under one project root:
//!
//! ```text
//! <root>/.compass/
//! ├── config.yaml
//! └── intents/
//!     ├── <name>.intent.yaml
//!     ├── <name>.plan.yaml
//!     └── <name>.tasks.yaml
//! ```
//!
//! Plan and task files are found from the intent file by suffix
//! substitution (see [`IntentStore::associated_path`]).

pub mod builder;

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::{debug, info};
use serde::Serialize;

use crate::{
    codec,
    config::ProjectConfig,
    error::{CompassError, IoResultExt, Result},
    models::{Intent, Plan, TaskBreakdown},
    workflow::Workflow,
};

pub use builder::StoreBuilder;

/// Directory created under the project root.
pub const STORE_DIR: &str = ".compass";
const INTENTS_DIR: &str = "intents";
const CONFIG_FILE: &str = "config.yaml";
/// File name suffix of intent documents.
pub const INTENT_SUFFIX: &str = ".intent.yaml";

/// Documents stored next to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Plan,
    Tasks,
}

impl DocumentKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            DocumentKind::Plan => ".plan.yaml",
            DocumentKind::Tasks => ".tasks.yaml",
        }
    }
}

/// One intent file found in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: Timestamp,
    /// Goal of the document, if it could be parsed
    pub goal: Option<String>,
}

/// Project-root keyed access to intent documents.
#[derive(Debug, Clone)]
pub struct IntentStore {
    root: PathBuf,
}

impl IntentStore {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    pub fn intents_dir(&self) -> PathBuf {
        self.store_dir().join(INTENTS_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.store_dir().join(CONFIG_FILE)
    }

    pub fn is_initialized(&self) -> bool {
        self.intents_dir().is_dir()
    }

    /// Creates the store directories and a default config. Existing files are
    /// left alone. Returns `true` if anything was created.
    pub fn init(&self) -> Result<bool> {
        let mut created = false;

        let intents = self.intents_dir();
        if !intents.is_dir() {
            fs::create_dir_all(&intents).at_path(&intents)?;
            created = true;
        }

        let config = self.config_path();
        if !config.exists() {
            write_yaml(&config, &ProjectConfig::default())?;
            created = true;
        }

        debug!("Initialized store at {} (created: {created})", self.store_dir().display());
        Ok(created)
    }

    /// Loads the project config, falling back to defaults when absent.
    pub fn load_config(&self) -> Result<ProjectConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ProjectConfig::default());
        }
        let text = fs::read_to_string(&path).at_path(&path)?;
        if text.trim().is_empty() {
            return Ok(ProjectConfig::default());
        }
        serde_yaml::from_str(&text).map_err(|e| CompassError::Configuration {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Path an intent named `name` would have.
    pub fn intent_path(&self, name: &str) -> PathBuf {
        self.intents_dir().join(format!("{name}{INTENT_SUFFIX}"))
    }

    /// Writes a new intent file. Without a name, a timestamp slug is used.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::AlreadyExists` rather than overwriting, and
    /// `CompassError::InvalidInput` for names that are not plain file names.
    pub fn create(&self, name: Option<&str>, intent: &Intent) -> Result<PathBuf> {
        let name = match name {
            Some(name) => validate_name(name)?.to_string(),
            None => default_name(),
        };

        self.init()?;
        let path = self.intent_path(&name);
        if path.exists() {
            return Err(CompassError::AlreadyExists { path });
        }

        write_yaml(&path, intent)?;
        debug!("Created intent {} at {}", intent.id, path.display());
        Ok(path)
    }

    /// Reads and parses an intent file. Validation is left to the caller.
    ///
    /// A hand-written file without an `id` is given one, and the id is
    /// written back so every later read returns the same intent id.
    pub fn read(&self, path: &Path) -> Result<Intent> {
        let (intent, assigned) = load_intent(path)?;
        if assigned {
            write_yaml(path, &intent)?;
            info!("Assigned id {} to {}", intent.id, path.display());
        }
        Ok(intent)
    }

    /// Overwrites an existing intent file.
    pub fn save(&self, path: &Path, intent: &Intent) -> Result<()> {
        write_yaml(path, intent)
    }

    /// All intent files, sorted by name. An uninitialized store is empty.
    pub fn list(&self) -> Result<Vec<IntentEntry>> {
        let dir = self.intents_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir).at_path(&dir)? {
            let entry = entry.at_path(&dir)?;
            let path = entry.path();
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(INTENT_SUFFIX))
                .map(str::to_string)
            else {
                continue;
            };

            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .at_path(&path)?;
            let modified = Timestamp::try_from(modified).unwrap_or(Timestamp::UNIX_EPOCH);
            let goal = load_intent(&path).ok().map(|(intent, _)| intent.goal);

            entries.push(IntentEntry {
                name,
                path,
                modified,
                goal,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Most recently modified intent, or `None` for an empty store.
    pub fn find_latest(&self) -> Result<Option<IntentEntry>> {
        Ok(self
            .list()?
            .into_iter()
            .max_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name))))
    }

    /// Resolves an intent by name, or the latest one when no name is given.
    ///
    /// A plain name is looked up in the store only. A name containing a path
    /// separator or ending in `.yaml`/`.yml` may also be a file path, tried
    /// after the store.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::IntentNotFound` when nothing matches.
    pub fn resolve(&self, name: Option<&str>) -> Result<PathBuf> {
        match name {
            Some(name) => {
                let stem = name.strip_suffix(INTENT_SUFFIX).unwrap_or(name);
                if let Some(path) = validate_name(stem)
                    .ok()
                    .map(|stem| self.intent_path(stem))
                    .filter(|path| path.is_file())
                {
                    return Ok(path);
                }

                let direct = PathBuf::from(name);
                if looks_like_path(name) && direct.is_file() {
                    return Ok(direct);
                }
                Err(CompassError::IntentNotFound {
                    name: stem.to_string(),
                })
            }
            None => self
                .find_latest()?
                .map(|entry| entry.path)
                .ok_or_else(|| CompassError::IntentNotFound {
                    name: "latest".to_string(),
                }),
        }
    }

    /// Resolves and reads an intent, returning its path and a workflow whose
    /// generators use the project config.
    ///
    /// # Errors
    ///
    /// Fails on lookup, parse or configuration errors. The intent is not
    /// validated here; generation does that.
    pub fn open(&self, name: Option<&str>) -> Result<(PathBuf, Workflow)> {
        let path = self.resolve(name)?;
        let intent = self.read(&path)?;
        let config = self.load_config()?;
        debug!("Opened intent {} from {}", intent.id, path.display());

        let mut workflow = Workflow::from_intent(intent);
        workflow
            .with_plan_config(config.plan)
            .with_task_config(config.tasks);
        Ok((path, workflow))
    }

    /// Derives the plan or tasks file path from an intent file path.
    pub fn associated_path(intent_path: &Path, kind: DocumentKind) -> PathBuf {
        let file_name = intent_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let stem = file_name
            .strip_suffix(INTENT_SUFFIX)
            .or_else(|| file_name.strip_suffix(".yaml"))
            .or_else(|| file_name.strip_suffix(".yml"))
            .unwrap_or(file_name);
        intent_path.with_file_name(format!("{stem}{}", kind.suffix()))
    }

    pub fn write_plan(&self, intent_path: &Path, plan: &Plan) -> Result<PathBuf> {
        let path = Self::associated_path(intent_path, DocumentKind::Plan);
        write_yaml(&path, plan)?;
        Ok(path)
    }

    /// Reads the plan stored next to an intent, if there is one.
    pub fn read_plan(&self, intent_path: &Path) -> Result<Option<Plan>> {
        let path = Self::associated_path(intent_path, DocumentKind::Plan);
        match read_optional(&path)? {
            Some(text) => Ok(Some(codec::parse_plan(&text)?)),
            None => Ok(None),
        }
    }

    pub fn write_tasks(&self, intent_path: &Path, tasks: &TaskBreakdown) -> Result<PathBuf> {
        let path = Self::associated_path(intent_path, DocumentKind::Tasks);
        write_yaml(&path, tasks)?;
        Ok(path)
    }

    /// Reads the task breakdown stored next to an intent, if there is one.
    pub fn read_tasks(&self, intent_path: &Path) -> Result<Option<TaskBreakdown>> {
        let path = Self::associated_path(intent_path, DocumentKind::Tasks);
        match read_optional(&path)? {
            Some(text) => Ok(Some(codec::parse_tasks(&text)?)),
            None => Ok(None),
        }
    }
}

fn write_yaml<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let text = codec::to_yaml(document)?;
    fs::write(path, text).at_path(path)
}

/// Names with a separator or a YAML extension may point outside the store.
fn looks_like_path(name: &str) -> bool {
    name.contains(['/', '\\']) || name.ends_with(".yaml") || name.ends_with(".yml")
}

/// Parses an intent file without touching it. The flag is set when the
/// document had no id of its own.
fn load_intent(path: &Path) -> Result<(Intent, bool)> {
    let text = fs::read_to_string(path).at_path(path)?;
    let intent = codec::parse_intent(&text)?;
    Ok((intent, !codec::declares_id(&text)))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CompassError::file_system(path, e)),
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CompassError::invalid_input("name").with_reason("must not be empty"));
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(CompassError::invalid_input("name")
            .with_reason("must be a plain file name without path separators"));
    }
    Ok(name.strip_suffix(INTENT_SUFFIX).unwrap_or(name))
}

fn default_name() -> String {
    format!("intent-{}", Timestamp::now().strftime("%Y%m%d-%H%M%S"))
}
