//! Template directory traversal.

use std::path::{Path, PathBuf};

use revgen_config::CONFIG_FILE_NAME;
use walkdir::WalkDir;

use crate::{Error, Plan, Strategy, TemplateName};

/// A template file found under the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    /// File name without directories; outputs are named from it.
    pub file_name: String,
    pub plan: Plan,
}

impl TemplateFile {
    pub fn name(&self) -> TemplateName {
        TemplateName::new(&self.file_name)
    }
}

/// List the templates under `root`, sorted by file name within each
/// directory.
///
/// Directories are descended into but never yielded. Symbolic links are not
/// followed, and only regular files are templates. Files named `config` are
/// skipped at any depth.
pub fn walk(root: &Path, strategy: Strategy) -> Result<Vec<TemplateFile>, Error> {
    let mut templates = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk { source })?;
        if !entry.file_type().is_file() {
            if entry.path_is_symlink() {
                tracing::debug!(path = %entry.path().display(), "skipping symlink");
            }
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name == CONFIG_FILE_NAME {
            continue;
        }

        let plan = Plan::for_template(&file_name, strategy);
        tracing::trace!(path = %entry.path().display(), ?plan, "found template");
        templates.push(TemplateFile {
            path: entry.into_path(),
            file_name,
            plan,
        });
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::strategy::PROTOBUF_TEMPLATE;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walk_skips_config_and_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "config");
        touch(temp.path(), "model.go.tpl");
        touch(temp.path(), "nested/config");
        touch(temp.path(), "nested/repo.go.tpl");

        let names: Vec<String> = walk(temp.path(), Strategy::MultiFile)
            .unwrap()
            .into_iter()
            .map(|t| t.file_name)
            .collect();

        assert_eq!(names, vec!["model.go.tpl", "repo.go.tpl"]);
    }

    #[test]
    fn test_walk_plans_protobuf_as_single_unformatted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), PROTOBUF_TEMPLATE);
        touch(temp.path(), "struct.go.tpl");

        let templates = walk(temp.path(), Strategy::MultiFile).unwrap();

        assert_eq!(templates[0].file_name, PROTOBUF_TEMPLATE);
        assert_eq!(templates[0].plan.strategy, Strategy::SingleFile);
        assert!(!templates[0].plan.format);
        assert_eq!(templates[1].plan.strategy, Strategy::MultiFile);
        assert!(templates[1].plan.format);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinks() {
        let temp = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        touch(shared.path(), "shared.go.tpl");
        touch(temp.path(), "model.go.tpl");
        std::os::unix::fs::symlink(shared.path(), temp.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(
            shared.path().join("shared.go.tpl"),
            temp.path().join("alias.go.tpl"),
        )
        .unwrap();

        let names: Vec<String> = walk(temp.path(), Strategy::MultiFile)
            .unwrap()
            .into_iter()
            .map(|t| t.file_name)
            .collect();

        assert_eq!(names, vec!["model.go.tpl"]);
    }

    #[test]
    fn test_walk_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = walk(&temp.path().join("absent"), Strategy::SingleFile).unwrap_err();
        assert!(matches!(err, Error::Walk { .. }));
    }
}
