use crate::error::ReportError;
use crate::model::ScenarioRecord;
use glob::Pattern;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Pattern for state snapshot files within a scenario directory
pub const STATE_FILE_PATTERN: &str = "state-*.json";
/// Pattern for error dump files within a scenario directory
pub const ERROR_FILE_PATTERN: &str = "errors-*.json";

/// Resolve `path` against the current working directory.
///
/// The result is absolute, with symlinks resolved for the part of the path that exists and
/// `.`/`..` components removed from the rest. A missing path is not an error.
pub fn resolve_root(path: &Path) -> Result<PathBuf, ReportError> {
    let cwd = std::env::current_dir().map_err(|source| ReportError::io(Path::new("."), source))?;
    Ok(resolve_from(&cwd, path))
}

fn resolve_from(base: &Path, path: &Path) -> PathBuf {
    let joined = base.join(path);
    if let Ok(canonical) = fs::canonicalize(&joined) {
        return canonical;
    }

    let mut resolved = PathBuf::new();
    let mut components = joined.components();
    for component in components.by_ref() {
        match fs::canonicalize(resolved.join(component)) {
            Ok(canonical) => resolved = canonical,
            Err(_) => {
                push_normalized(&mut resolved, component);
                break;
            }
        }
    }
    for component in components {
        push_normalized(&mut resolved, component);
    }

    resolved
}

fn push_normalized(path: &mut PathBuf, component: Component<'_>) {
    match component {
        Component::CurDir => {}
        Component::ParentDir => {
            path.pop();
        }
        other => path.push(other),
    }
}

/// Collect a [ScenarioRecord] for every directory directly beneath `root`.
///
/// Records are ordered by directory name. If `root` does not exist or is not a directory then no
/// scenarios are returned. Failures to read an existing directory are returned as errors.
pub fn collect_scenarios(root: &Path) -> Result<Vec<ScenarioRecord>, ReportError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            debug!("Root {} is not a directory", root.display());
            return Ok(Vec::new());
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound || has_file_ancestor(root) => {
            debug!("Root {} does not exist: {err}", root.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(ReportError::io(root, err)),
    }

    let patterns = ScenarioFilePatterns::new()?;

    let mut scenarios = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;

        // Symlinks to directories count as scenarios.
        if !entry.path().is_dir() {
            trace!("Skipping non-directory {}", entry.path().display());
            continue;
        }

        let record = patterns.count(entry.path())?;
        debug!(
            "Scenario {}: states={}, errors={}",
            record.name, record.states, record.errors
        );
        scenarios.push(record);
    }

    Ok(scenarios)
}

/// Whether a component above `path` is something other than a directory, making `path`
/// unreachable rather than unreadable.
fn has_file_ancestor(path: &Path) -> bool {
    path.ancestors()
        .skip(1)
        .any(|ancestor| ancestor.exists() && !ancestor.is_dir())
}

struct ScenarioFilePatterns {
    state: Pattern,
    errors: Pattern,
}

impl ScenarioFilePatterns {
    fn new() -> Result<Self, ReportError> {
        Ok(Self {
            state: Pattern::new(STATE_FILE_PATTERN)?,
            errors: Pattern::new(ERROR_FILE_PATTERN)?,
        })
    }

    /// Count the matching entries directly inside `dir`.
    fn count(&self, dir: &Path) -> Result<ScenarioRecord, ReportError> {
        let mut record = ScenarioRecord {
            name: dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            states: 0,
            errors: 0,
        };

        for entry in fs::read_dir(dir).map_err(|source| ReportError::io(dir, source))? {
            let entry = entry.map_err(|source| ReportError::io(dir, source))?;
            let file_name = entry.file_name();
            // Names that are not valid UTF-8 cannot match either pattern.
            let Some(name) = file_name.to_str() else {
                continue;
            };

            if self.state.matches(name) {
                record.states += 1;
            }
            if self.errors.matches(name) {
                record.errors += 1;
            }
        }

        Ok(record)
    }
}
