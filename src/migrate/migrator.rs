//! Migration runs: carry open tasks into a new note file and mark them
//! migrated in their source files.

use crate::domain::NoteTree;
use crate::infra::{
    DEFAULT_TASKS_FILE, FsError, create_exclusive, daily_file_name, ensure_dir, month_dir,
    previous_month, read_note_text, replace_atomically, scan_note_files,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ===========================================
// Errors
// ===========================================

/// Conditions that stop a migration before anything is written.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("notes directory does not exist: {path}")]
    NotesDirNotFound { path: PathBuf },

    #[error("previous month directory does not exist: {path}")]
    SourceDirNotFound { path: PathBuf },

    #[error("next note file already exists: {path}")]
    TargetFileExists { path: PathBuf },

    #[error("next month directory already exists: {path}")]
    TargetDirExists { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] FsError),
}

// ===========================================
// Options & Report
// ===========================================

/// Which period a migration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationKind {
    /// Carry the current month's open tasks into today's daily note.
    Daily,
    /// Roll last month's open tasks into this month's task list.
    Monthly,
}

impl fmt::Display for MigrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationKind::Daily => write!(f, "daily"),
            MigrationKind::Monthly => write!(f, "monthly"),
        }
    }
}

/// Parameters of a single migration run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// The date the migration runs for; only used to name files and directories.
    pub date: NaiveDate,
    /// Name of the monthly task list file.
    pub tasks_file: String,
    /// Extra file names excluded from the sources.
    pub ignore: Vec<String>,
    /// Compute the result without writing anything.
    pub dry_run: bool,
}

impl MigrationOptions {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            tasks_file: DEFAULT_TASKS_FILE.to_string(),
            ignore: Vec::new(),
            dry_run: false,
        }
    }

    pub fn tasks_file(mut self, tasks_file: impl Into<String>) -> Self {
        self.tasks_file = tasks_file.into();
        self
    }

    pub fn ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a migration run.
#[derive(Debug, Serialize)]
pub struct MigrationReport {
    pub kind: MigrationKind,
    /// The date the run was made for.
    pub date: NaiveDate,
    /// The new note file.
    pub target: PathBuf,
    /// Source files, in merge order.
    pub sources: Vec<PathBuf>,
    /// Open tasks carried into the new file.
    pub carried: usize,
    /// Notes marked migrated across all sources.
    pub migrated: usize,
    /// Source files whose contents changed and were replaced.
    pub rewritten: Vec<PathBuf>,
    pub dry_run: bool,
    /// Contents of the new note file.
    pub contents: String,
}

// ===========================================
// Migrator
// ===========================================

/// Where a run reads from and writes to.
#[derive(Debug)]
struct Plan {
    kind: MigrationKind,
    date: NaiveDate,
    source_dir: PathBuf,
    target: PathBuf,
    ignored: Vec<String>,
}

/// A parsed source file, kept until every source has been read.
struct SourceDocument {
    path: PathBuf,
    original: String,
    tree: NoteTree,
}

/// Runs migrations against a notes root laid out as `<root>/<year>/<mon>/`.
pub struct Migrator {
    notes_root: PathBuf,
}

impl Migrator {
    pub fn new(notes_root: impl Into<PathBuf>) -> Self {
        Self {
            notes_root: notes_root.into(),
        }
    }

    pub fn notes_root(&self) -> &Path {
        &self.notes_root
    }

    /// Carries open tasks from the current month's notes into a new daily note.
    ///
    /// The monthly task list and any `options.ignore` files are not sources.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::NotesDirNotFound` if the notes root is missing.
    /// Returns `MigrationError::TargetFileExists` if today's note already exists.
    pub fn run_daily(&self, options: &MigrationOptions) -> Result<MigrationReport, MigrationError> {
        self.check_notes_root()?;

        let source_dir = month_dir(&self.notes_root, options.date);
        let target = source_dir.join(daily_file_name(options.date));
        if target.exists() {
            return Err(MigrationError::TargetFileExists { path: target });
        }

        let mut ignored = vec![options.tasks_file.clone()];
        ignored.extend(options.ignore.iter().cloned());

        self.execute(
            Plan {
                kind: MigrationKind::Daily,
                date: options.date,
                source_dir,
                target,
                ignored,
            },
            options.dry_run,
        )
    }

    /// Rolls open tasks from last month's notes into this month's task list.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::NotesDirNotFound` if the notes root is missing.
    /// Returns `MigrationError::TargetDirExists` if this month's directory exists.
    /// Returns `MigrationError::SourceDirNotFound` if last month's directory is missing.
    pub fn run_monthly(
        &self,
        options: &MigrationOptions,
    ) -> Result<MigrationReport, MigrationError> {
        self.check_notes_root()?;

        let target_dir = month_dir(&self.notes_root, options.date);
        if target_dir.exists() {
            return Err(MigrationError::TargetDirExists { path: target_dir });
        }

        let source_dir = previous_month(options.date)
            .map(|prev| month_dir(&self.notes_root, prev))
            .ok_or_else(|| MigrationError::SourceDirNotFound {
                path: self.notes_root.clone(),
            })?;
        if !source_dir.is_dir() {
            return Err(MigrationError::SourceDirNotFound { path: source_dir });
        }

        self.execute(
            Plan {
                kind: MigrationKind::Monthly,
                date: options.date,
                source_dir,
                target: target_dir.join(&options.tasks_file),
                ignored: options.ignore.clone(),
            },
            options.dry_run,
        )
    }

    pub fn run(
        &self,
        kind: MigrationKind,
        options: &MigrationOptions,
    ) -> Result<MigrationReport, MigrationError> {
        match kind {
            MigrationKind::Daily => self.run_daily(options),
            MigrationKind::Monthly => self.run_monthly(options),
        }
    }

    fn check_notes_root(&self) -> Result<(), MigrationError> {
        if !self.notes_root.exists() {
            return Err(MigrationError::NotesDirNotFound {
                path: self.notes_root.clone(),
            });
        }
        if !self.notes_root.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.notes_root.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Reads every source, writes the new file, then rewrites the sources.
    ///
    /// Nothing is written until all sources are parsed, and no source is
    /// rewritten until the new file is in place.
    fn execute(&self, plan: Plan, dry_run: bool) -> Result<MigrationReport, MigrationError> {
        info!(
            kind = %plan.kind,
            source = %plan.source_dir.display(),
            target = %plan.target.display(),
            "starting migration"
        );

        let documents = read_sources(&plan)?;

        let mut combined = NoteTree::new();
        for document in &documents {
            let mut open = document.tree.clone();
            open.filter_incomplete_tasks();
            combined.merge(open);
        }

        let contents = combined.to_file_contents();
        let mut report = MigrationReport {
            kind: plan.kind,
            date: plan.date,
            target: plan.target.clone(),
            sources: documents.iter().map(|d| d.path.clone()).collect(),
            carried: combined.count_unmigrated(),
            migrated: 0,
            rewritten: Vec::new(),
            dry_run,
            contents,
        };

        if dry_run {
            report.migrated = documents.iter().map(|d| d.tree.count_unmigrated()).sum();
            info!(carried = report.carried, "dry run, nothing written");
            return Ok(report);
        }

        if let Some(target_dir) = plan.target.parent() {
            ensure_dir(target_dir)?;
        }
        create_exclusive(&plan.target, &report.contents).map_err(|e| match e {
            FsError::AlreadyExists { path } => MigrationError::TargetFileExists { path },
            other => other.into(),
        })?;
        info!(
            path = %plan.target.display(),
            carried = report.carried,
            "wrote new note file"
        );

        for document in documents {
            let SourceDocument {
                path,
                original,
                mut tree,
            } = document;

            let migrated = tree.migrate_all();
            report.migrated += migrated;

            // Text before the first bullet is not part of the tree
            let updated = tree.to_file_contents();
            if migrated == 0 || updated == format!("{}\n", original) {
                debug!(path = %path.display(), "source unchanged");
                continue;
            }

            replace_atomically(&path, &updated)?;
            info!(path = %path.display(), migrated, "rewrote source");
            report.rewritten.push(path);
        }

        Ok(report)
    }
}

fn read_sources(plan: &Plan) -> Result<Vec<SourceDocument>, MigrationError> {
    // A daily run may be the first of the month; there is nothing to carry yet
    if !plan.source_dir.exists() {
        debug!(dir = %plan.source_dir.display(), "source directory missing");
        return Ok(Vec::new());
    }

    let paths = scan_note_files(&plan.source_dir, &plan.ignored)?;
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let original = read_note_text(&path)?;
        let tree = NoteTree::parse(&original);
        debug!(
            path = %path.display(),
            notes = tree.len(),
            open = tree.count_unmigrated(),
            "parsed source"
        );
        documents.push(SourceDocument {
            path,
            original,
            tree,
        });
    }

    Ok(documents)
}
