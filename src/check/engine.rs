//! Consistency engine: builds the ordered list of findings.

use super::finding::Finding;
use super::resolver::resolve;
use crate::manifest::Manifest;
use crate::scanner::InstalledTree;
use std::collections::HashSet;

/// What the engine checks, resolved from a `CheckConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSettings {
    /// Scopes checked for missing and mismatched packages, in order.
    pub scopes: Vec<String>,
    /// Scopes whose packages aren't excessive but aren't checked.
    pub optional_scopes: Vec<String>,
    /// Report undeclared installed packages.
    pub only_specified: bool,
    /// Check git dependencies.
    pub check_git_urls: bool,
}

/// Compares one manifest with one installed tree.
pub struct ConsistencyEngine<'a> {
    manifest: &'a Manifest,
    tree: &'a InstalledTree,
    settings: &'a EngineSettings,
}

impl<'a> ConsistencyEngine<'a> {
    /// Create an engine.
    pub fn new(
        manifest: &'a Manifest,
        tree: &'a InstalledTree,
        settings: &'a EngineSettings,
    ) -> Self {
        Self {
            manifest,
            tree,
            settings,
        }
    }

    /// Produce findings.
    ///
    /// Missing and mismatched packages come first, scope by scope in
    /// configured order and manifest order within a scope, followed by
    /// excessive packages in tree order.
    pub fn run(&self) -> Vec<Finding> {
        let mut findings = self.declared_findings();
        if self.settings.only_specified {
            findings.extend(self.excessive_findings());
        }
        for finding in &findings {
            tracing::debug!("Finding: {}", finding);
        }
        findings
    }

    fn declared_findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        for scope_name in &self.settings.scopes {
            let Some(scope) = self.manifest.scope(scope_name) else {
                continue;
            };
            for dep in &scope.dependencies {
                let installed = self.tree.get(&dep.name);
                if let Some(entry) = installed {
                    tracing::trace!("{} installed at {}", dep.name, entry.source_path.display());
                }
                let outcome = resolve(&dep.spec, installed, self.settings.check_git_urls);
                findings.extend(outcome.into_finding(&dep.name));
            }
        }
        findings
    }

    fn excessive_findings(&self) -> Vec<Finding> {
        let declared: HashSet<&str> = self
            .settings
            .scopes
            .iter()
            .chain(&self.settings.optional_scopes)
            .filter_map(|name| self.manifest.scope(name))
            .flat_map(|scope| scope.dependencies.iter().map(|d| d.name.as_str()))
            .collect();

        self.tree
            .entries()
            .iter()
            .filter(|entry| !declared.contains(entry.name.as_str()))
            .map(|entry| Finding::Excessive {
                name: entry.name.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest;
    use crate::scanner::InstalledEntry;
    use std::path::{Path, PathBuf};

    const MANIFEST: &str = r#"{
        "dependencies": { "a": "1.2.3", "b": ">=1.0.0", "c": "1.0.0", "d": "1.0.0" },
        "devDependencies": { "e": "^2.0.0" },
        "fakeDependencies": { "x": "1.0.0" }
    }"#;

    fn tree(entries: &[(&str, &str)]) -> InstalledTree {
        InstalledTree::from_entries(
            entries
                .iter()
                .map(|(name, version)| InstalledEntry {
                    name: name.to_string(),
                    version: version.to_string(),
                    source_path: PathBuf::from("node_modules").join(name),
                })
                .collect(),
        )
    }

    fn settings(scopes: &[&str]) -> EngineSettings {
        EngineSettings {
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn messages(findings: &[Finding]) -> Vec<String> {
        findings.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn reports_in_manifest_order() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[("a", "1.2.4"), ("b", "0.9.9"), ("e", "2.1.0")]);
        let settings = settings(&["dependencies", "devDependencies"]);

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert_eq!(
            messages(&findings),
            vec![
                "a: installed: 1.2.4, expected: 1.2.3",
                "b: installed: 0.9.9, expected: >=1.0.0",
                "c: not installed!",
                "d: not installed!",
            ]
        );
    }

    #[test]
    fn unlisted_scopes_are_ignored() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[("e", "2.1.0")]);
        let settings = settings(&["devDependencies", "peerDependencies"]);

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert!(findings.is_empty());
    }

    #[test]
    fn scope_order_follows_settings() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[("a", "1.2.3"), ("b", "1.0.0"), ("c", "1.0.0"), ("d", "1.0.0")]);
        let settings = settings(&["devDependencies", "dependencies"]);

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert_eq!(messages(&findings), vec!["e: not installed!"]);
    }

    #[test]
    fn excessive_ignored_unless_only_specified() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[("a", "1.2.3"), ("zzz", "1.0.0")]);
        let settings = settings(&["devDependencies"]);

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert_eq!(messages(&findings), vec!["e: not installed!"]);
    }

    #[test]
    fn excessive_after_declared_in_tree_order() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[
            ("a", "1.2.3"),
            ("b", "1.0.0"),
            ("c", "1.0.0"),
            ("m", "1.0.0"),
            ("x", "1.0.0"),
            ("z", "1.0.0"),
        ]);
        let settings = EngineSettings {
            only_specified: true,
            ..settings(&["dependencies"])
        };

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert_eq!(
            messages(&findings),
            vec![
                "d: not installed!",
                "Package m installed, though it shouldn't be",
                "Package x installed, though it shouldn't be",
                "Package z installed, though it shouldn't be",
            ]
        );
    }

    #[test]
    fn optional_scopes_exempt_from_excessive() {
        let manifest = parse_manifest(MANIFEST, Path::new("package.json")).unwrap();
        let tree = tree(&[
            ("a", "1.2.3"),
            ("b", "1.0.0"),
            ("c", "1.0.0"),
            ("d", "1.0.0"),
            ("x", "1.0.0"),
        ]);
        let settings = EngineSettings {
            only_specified: true,
            optional_scopes: vec!["fakeDependencies".into()],
            ..settings(&["dependencies"])
        };

        let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();
        assert!(findings.is_empty());
    }

    #[test]
    fn git_dependencies_hidden_without_flag() {
        let manifest = parse_manifest(
            r#"{ "dependencies": { "a": "user/a#v0.5.9", "b": "user/b#master" } }"#,
            Path::new("package.json"),
        )
        .unwrap();
        let tree = tree(&[("a", "0.5.8")]);

        let off = settings(&["dependencies"]);
        assert!(ConsistencyEngine::new(&manifest, &tree, &off).run().is_empty());

        let on = EngineSettings {
            check_git_urls: true,
            ..settings(&["dependencies"])
        };
        assert_eq!(
            messages(&ConsistencyEngine::new(&manifest, &tree, &on).run()),
            vec!["a: installed: 0.5.8, expected: 0.5.9", "b: not installed!"]
        );
    }
}
