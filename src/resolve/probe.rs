use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Resolve a candidate base path to a concrete file.
///
/// Order is a contract: the literal path wins over an extension-derived file,
/// which wins over a directory index. Suffixes are appended verbatim
/// (`./a.config` + `.ts` probes `./a.config.ts`), not substituted for an
/// existing extension. I/O failures read as "does not exist".
pub(crate) fn probe(base: &Path, extensions: &[&str]) -> Option<PathBuf> {
    if base.is_file() {
        return Some(base.to_path_buf());
    }

    for ext in extensions {
        let candidate = append_suffix(base, ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let index = base.join("index");
    for ext in extensions {
        let candidate = append_suffix(&index, ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

fn append_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = base.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn exact_file_wins_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        let exact = dir.path().join("mod");
        fs::write(&exact, "").unwrap();
        fs::write(dir.path().join("mod.ts"), "").unwrap();

        assert_eq!(probe(&exact, &[".ts"]), Some(exact));
    }

    #[test]
    fn extension_file_wins_over_index() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("base.ts");
        fs::write(&file, "").unwrap();
        let sub = dir.path().join("base");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("index.ts"), "").unwrap();

        assert_eq!(probe(&dir.path().join("base"), &[".ts"]), Some(file));
    }

    #[test]
    fn falls_back_to_directory_index() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("components");
        fs::create_dir(&sub).unwrap();
        let index = sub.join("index.tsx");
        fs::write(&index, "").unwrap();

        assert_eq!(probe(&sub, &[".ts", ".tsx"]), Some(index));
    }

    #[test]
    fn extension_order_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("foo.ts"), "").unwrap();
        fs::write(dir.path().join("foo.tsx"), "").unwrap();

        let hit = probe(&dir.path().join("foo"), &[".ts", ".tsx"]);
        assert_eq!(hit, Some(dir.path().join("foo.ts")));
    }

    #[test]
    fn suffix_is_appended_not_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("app.config.ts");
        fs::write(&file, "").unwrap();

        assert_eq!(probe(&dir.path().join("app.config"), &[".ts"]), Some(file));
    }

    #[test]
    fn missing_path_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe(&dir.path().join("nope"), &[".ts", ".js"]), None);
    }

    #[test]
    fn directory_without_index_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("empty");
        fs::create_dir(&sub).unwrap();
        assert_eq!(probe(&sub, &[".ts"]), None);
    }
}
