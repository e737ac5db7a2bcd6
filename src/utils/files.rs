use crate::error::{ConvertError, Result};
use crate::syntax::Syntax;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn resolve(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Scripts with a known source extension under `dir`, as paths relative to
/// `dir`, sorted. Nothing under `exclude` is visited, so an output directory
/// nested inside `dir` is never read back as input. `exclude` is ignored when
/// it does not exist.
pub fn script_files(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let root = resolve(dir)?;
    let exclude = exclude.and_then(|p| p.canonicalize().ok());

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| exclude.as_ref().map_or(true, |x| !e.path().starts_with(x)))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let known = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Syntax::from_extension)
            .is_some();
        if !known {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(&root) {
            files.push(relative.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumi-converter-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_collects_known_extensions_only() {
        let dir = scratch("known");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("login.java"), "").unwrap();
        fs::write(dir.join("nested/login.py"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let files = script_files(&dir, None).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("login.java"), PathBuf::from("nested/login.py")]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_skips_output_dir_inside_input() {
        let dir = scratch("nested-out");
        let out = dir.join("converted");
        fs::create_dir_all(&out).unwrap();
        fs::write(dir.join("login.py"), "").unwrap();
        fs::write(out.join("login.ts"), "").unwrap();

        let files = script_files(&dir, Some(&out)).unwrap();
        assert_eq!(files, vec![PathBuf::from("login.py")]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = std::env::temp_dir().join("lumi-converter-does-not-exist");
        assert!(matches!(
            script_files(&dir, None),
            Err(ConvertError::Io { .. })
        ));
    }
}
