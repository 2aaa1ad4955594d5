use std::path::{Path, PathBuf};

use crate::context::ResolutionContext;

const GO_SUFFIX: &str = ".go";
const GO_TEST_SUFFIX: &str = "_test.go";

/// Resolve a fully-qualified Go import path to a package source file.
///
/// The specifier must be prefixed by the nearest `go.mod` module directive;
/// the remainder names a package directory under the module root. The
/// representative file is the lexically first `.go` file that is not a
/// `_test.go` file. Anything else is external.
pub(crate) fn resolve(
    specifier: &str,
    from_file: &Path,
    ctx: &mut ResolutionContext,
) -> Option<PathBuf> {
    let start_dir = from_file.parent()?;
    let module = ctx.go_module_for(start_dir)?;

    let rest = specifier.strip_prefix(module.module_path.as_str())?;
    let rest = rest.trim_start_matches('/');
    let package_dir = if rest.is_empty() {
        module.root.clone()
    } else {
        module.root.join(rest)
    };
    if !package_dir.is_dir() {
        return None;
    }
    pick_package_file(&package_dir)
}

/// Lexically first non-test `.go` file in a package directory.
fn pick_package_file(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut sources: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(GO_SUFFIX) && !n.ends_with(GO_TEST_SUFFIX))
        })
        .collect();
    sources.sort();
    sources.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn module_fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("go.mod"),
            "module example.com/proj\n\ngo 1.22\n",
        )
        .unwrap();
        let main = dir.path().join("main.go");
        fs::write(&main, "package main\n").unwrap();
        (dir, main)
    }

    #[test]
    fn module_prefixed_specifier_resolves_to_package_file() {
        let (dir, main) = module_fixture();
        let util = dir.path().join("pkg").join("util");
        fs::create_dir_all(&util).unwrap();
        let target = util.join("util.go");
        fs::write(&target, "package util\n").unwrap();

        let mut ctx = ResolutionContext::new();
        let hit = resolve("example.com/proj/pkg/util", &main, &mut ctx);
        assert_eq!(hit, Some(target));
    }

    #[test]
    fn test_only_package_yields_none() {
        let (dir, main) = module_fixture();
        let util = dir.path().join("pkg").join("util");
        fs::create_dir_all(&util).unwrap();
        fs::write(util.join("util_test.go"), "package util\n").unwrap();

        let mut ctx = ResolutionContext::new();
        assert_eq!(resolve("example.com/proj/pkg/util", &main, &mut ctx), None);
    }

    #[test]
    fn package_file_pick_is_lexical() {
        let (dir, main) = module_fixture();
        let svc = dir.path().join("svc");
        fs::create_dir_all(&svc).unwrap();
        fs::write(svc.join("zz.go"), "package svc\n").unwrap();
        let first = svc.join("aa.go");
        fs::write(&first, "package svc\n").unwrap();
        fs::write(svc.join("aa_test.go"), "package svc\n").unwrap();

        let mut ctx = ResolutionContext::new();
        let hit = resolve("example.com/proj/svc", &main, &mut ctx);
        assert_eq!(hit, Some(first));
    }

    #[test]
    fn foreign_module_path_is_external() {
        let (_dir, main) = module_fixture();
        let mut ctx = ResolutionContext::new();
        assert_eq!(resolve("github.com/pkg/errors", &main, &mut ctx), None);
    }

    #[test]
    fn missing_package_directory_is_external() {
        let (_dir, main) = module_fixture();
        let mut ctx = ResolutionContext::new();
        assert_eq!(resolve("example.com/proj/no/such/pkg", &main, &mut ctx), None);
    }
}
