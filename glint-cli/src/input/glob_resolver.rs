//! Input resolution: glob patterns and the stdin marker

use super::{FileReader, STDIN_MARKER};
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// One source to highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, requested with `-`
    Stdin,
    /// A file matched by a pattern
    File(PathBuf),
}

impl Input {
    /// Name shown in output labels and progress
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// File path, if this input is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::File(path) => Some(path),
        }
    }

    /// Read the whole input as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            Input::Stdin => FileReader::read_stdin(),
            Input::File(path) => FileReader::read_text(path),
        }
    }
}

/// Resolve command-line inputs: `-` once means stdin, placed first;
/// everything else is a glob pattern
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<Input>> {
    let (stdin, globs): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == STDIN_MARKER);

    let mut inputs = Vec::new();
    if !stdin.is_empty() {
        inputs.push(Input::Stdin);
    }
    if !globs.is_empty() {
        let globs: Vec<String> = globs.into_iter().cloned().collect();
        inputs.extend(resolve_patterns(&globs)?.into_iter().map(Input::File));
    }
    Ok(inputs)
}

/// Resolve glob patterns to the files they match, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            } else {
                log::debug!("Skipping non-file match: {}", path.display());
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();
    log::debug!("Resolved {} file(s) from {} pattern(s)", files.len(), patterns.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.java", "a.java", "notes.txt"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        let dir = temp_dir.path().display();

        let files = resolve_patterns(&[
            format!("{dir}/*.java"),
            format!("{dir}/a.java"),
        ])
        .unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.java", "b.java"]);
    }

    #[test]
    fn test_resolve_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.java", temp_dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_resolve_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_resolve_inputs_stdin_first_and_once() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("A.java");
        fs::write(&file, "class A {}").unwrap();

        let inputs = resolve_inputs(&[
            file.display().to_string(),
            "-".to_string(),
            "-".to_string(),
        ])
        .unwrap();
        assert_eq!(inputs, vec![Input::Stdin, Input::File(file.clone())]);
        assert_eq!(inputs[0].display_name(), "<stdin>");
        assert_eq!(inputs[1].path(), Some(file.as_path()));
        assert_eq!(inputs[1].read_text().unwrap(), "class A {}");
    }

    #[test]
    fn test_resolve_inputs_stdin_only_needs_no_files() {
        let inputs = resolve_inputs(&["-".to_string()]).unwrap();
        assert_eq!(inputs, vec![Input::Stdin]);
        assert_eq!(inputs[0].path(), None);
    }
}
