//! Drives a collection run: detect dependency managers, enumerate their
//! dependencies, settle license data against the override table, copy the
//! license files and write the manifest.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::dependency_manager::{self, DependencyManager};
use crate::error::CollectorError;
use crate::models::{Dependency, Manifest, ManifestEntry};
use crate::net_fetcher::{Fetch, NetFetcher};
use crate::overrides::Overrides;

pub struct Collector<F> {
    project_name: String,
    project_dir: PathBuf,
    output_dir: PathBuf,
    overrides: Overrides,
    fetcher: NetFetcher<F>,
    managers: Vec<Box<dyn DependencyManager>>,
    excluded: Vec<String>,
    quiet: bool,
}

impl<F: Fetch> Collector<F> {
    /// A collector probing every built-in dependency manager.
    pub fn new(
        project_name: impl Into<String>,
        project_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        overrides: Overrides,
        fetcher: NetFetcher<F>,
    ) -> Self {
        let project_dir = project_dir.into();
        let managers = dependency_manager::implementations(&project_dir);
        Self {
            project_name: project_name.into(),
            project_dir,
            output_dir: output_dir.into(),
            overrides,
            fetcher,
            managers,
            excluded: Vec::new(),
            quiet: false,
        }
    }

    /// Replace the dependency managers checked during detection.
    pub fn with_managers(mut self, managers: Vec<Box<dyn DependencyManager>>) -> Self {
        self.managers = managers;
        self
    }

    /// Skip dependency managers with these names even if they are detected.
    pub fn excluding(mut self, names: Vec<String>) -> Self {
        self.excluded = names;
        self
    }

    /// Suppress per-manager status lines and progress bars on stderr.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Managers that recognise the project, in registry order.
    pub fn dependency_managers(&self) -> Vec<&dyn DependencyManager> {
        self.managers
            .iter()
            .map(|m| &**m)
            .filter(|m| !self.excluded.iter().any(|name| name == m.name()))
            .filter(|m| m.detected())
            .collect()
    }

    /// Collect everything and write the manifest. The manifest is also returned.
    pub async fn run(&self) -> Result<Manifest> {
        if !self.project_dir.is_dir() {
            return Err(CollectorError::ProjectDirectoryMissing(self.project_dir.clone()).into());
        }

        let managers = self.dependency_managers();
        if managers.is_empty() {
            return Err(CollectorError::NoDependencyManagerFound(self.project_dir.clone()).into());
        }

        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating output directory {}", self.output_dir.display()))?;

        let mut manifest = Manifest::new(&self.project_name);

        for manager in managers {
            let deps = manager
                .dependencies()
                .with_context(|| format!("listing {} dependencies", manager.name()))?;

            if !self.quiet {
                eprintln!(
                    "  {} {} {} dependencies",
                    "→".cyan(),
                    manager.name(),
                    deps.len()
                );
            }

            let pb = self.progress_bar(deps.len());
            let mut entries = Vec::with_capacity(deps.len());
            for dep in &deps {
                pb.set_message(dep.name.clone());
                entries.push(self.collect_dependency(manager.name(), dep).await?);
                pb.inc(1);
            }
            pb.finish_and_clear();

            manifest
                .dependency_managers
                .insert(manager.name().to_string(), entries);
        }

        self.write_manifest(&manifest)?;
        Ok(manifest)
    }

    /// Settle one dependency's license and copy its license files.
    ///
    /// An override license wins over the detected one; override license
    /// files replace the detected ones when the override names any.
    async fn collect_dependency(&self, manager: &str, dep: &Dependency) -> Result<ManifestEntry> {
        let license = self
            .overrides
            .license_for(manager, &dep.name, &dep.version)
            .map(str::to_string)
            .or_else(|| dep.license.clone());

        let override_files = self
            .overrides
            .license_files_for(manager, &dep.name, &dep.version);
        let sources = if override_files.is_empty() {
            dep.license_files.clone()
        } else {
            override_files
                .resolve_locations(dep.path.as_deref(), &self.fetcher)
                .await?
        };

        let mut license_files = Vec::with_capacity(sources.len());
        for source in &sources {
            license_files.push(self.copy_license_file(manager, dep, source)?);
        }

        Ok(ManifestEntry {
            name: dep.name.clone(),
            version: dep.version.clone(),
            license,
            license_files,
        })
    }

    /// Copy `source` into the output directory and return the new file name.
    fn copy_license_file(&self, manager: &str, dep: &Dependency, source: &Path) -> Result<String> {
        let basename = source
            .file_name()
            .with_context(|| format!("license file {} has no file name", source.display()))?
            .to_string_lossy();
        let file_name = output_file_name(manager, &dep.name, &dep.version, &basename);
        let target = self.output_dir.join(&file_name);

        std::fs::copy(source, &target).with_context(|| {
            format!(
                "copying license file {} to {}",
                source.display(),
                target.display()
            )
        })?;

        Ok(file_name)
    }

    fn write_manifest(&self, manifest: &Manifest) -> Result<()> {
        let path = self.output_dir.join(manifest.file_name());
        let json = serde_json::to_string_pretty(manifest)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing manifest {}", path.display()))?;
        Ok(())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

/// `{manager}-{name}-{version}-{basename}`. Scoped npm names contain a `/`,
/// which is flattened so the file stays inside the output directory.
fn output_file_name(manager: &str, name: &str, version: &str, basename: &str) -> String {
    format!("{}-{}-{}-{}", manager, name, version, basename).replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_manager::bundler::BundlerManager;
    use crate::models::LICENSE_MANIFEST_VERSION;
    use crate::net_fetcher::tests::CountingFetcher;
    use crate::overrides::OverrideRule;
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::Ordering;
    use tempfile::TempDir;

    struct FakeManager {
        name: &'static str,
        deps: Vec<Dependency>,
        detect_calls: Rc<Cell<usize>>,
    }

    impl FakeManager {
        fn boxed(name: &'static str, deps: Vec<Dependency>) -> Box<dyn DependencyManager> {
            Box::new(FakeManager {
                name,
                deps,
                detect_calls: Rc::new(Cell::new(0)),
            })
        }
    }

    impl DependencyManager for FakeManager {
        fn name(&self) -> &str {
            self.name
        }

        fn detected(&self) -> bool {
            self.detect_calls.set(self.detect_calls.get() + 1);
            true
        }

        fn dependencies(&self) -> Result<Vec<Dependency>> {
            Ok(self.deps.clone())
        }
    }

    struct Fixture {
        tmp: TempDir,
        license: PathBuf,
        copying: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let licenses = tmp.path().join("test_licenses");
            std::fs::create_dir_all(&licenses).unwrap();
            let license = licenses.join("LICENSE");
            let copying = licenses.join("COPYING");
            std::fs::write(&license, "MIT License").unwrap();
            std::fs::write(&copying, "Apache License 2.0").unwrap();
            std::fs::create_dir_all(tmp.path().join("project_dir")).unwrap();
            Fixture {
                tmp,
                license,
                copying,
            }
        }

        fn project_dir(&self) -> PathBuf {
            self.tmp.path().join("project_dir")
        }

        fn output_dir(&self) -> PathBuf {
            self.tmp.path().join("output_dir")
        }

        fn collector(&self, managers: Vec<Box<dyn DependencyManager>>) -> Collector<CountingFetcher> {
            self.collector_with(managers, Overrides::default(), CountingFetcher::default())
        }

        fn collector_with(
            &self,
            managers: Vec<Box<dyn DependencyManager>>,
            overrides: Overrides,
            fetcher: CountingFetcher,
        ) -> Collector<CountingFetcher> {
            let fetcher = NetFetcher::new(fetcher, self.tmp.path().join("cache"));
            Collector::new(
                "example-project",
                self.project_dir(),
                self.output_dir(),
                overrides,
                fetcher,
            )
            .with_managers(managers)
            .quiet(true)
        }

        fn test_dep_manager(&self) -> Box<dyn DependencyManager> {
            FakeManager::boxed(
                "test_dep_manager",
                vec![
                    Dependency::new(
                        "example1",
                        "1.0.0",
                        Some("MIT".to_string()),
                        vec![self.license.clone(), self.copying.clone()],
                    ),
                    Dependency::new(
                        "example2",
                        "1.2.3",
                        Some("Apache-2".to_string()),
                        vec![self.copying.clone()],
                    ),
                ],
            )
        }

        fn read_manifest(&self) -> Value {
            let path = self.output_dir().join("example-project-dependency-licenses.json");
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
        }
    }

    #[test]
    fn test_accessors() {
        let fx = Fixture::new();
        let collector = fx.collector(Vec::new());
        assert_eq!(collector.project_name(), "example-project");
        assert_eq!(collector.project_dir(), fx.project_dir());
        assert_eq!(collector.output_dir(), fx.output_dir());
    }

    #[test]
    fn test_detects_dependency_managers() {
        let fx = Fixture::new();
        let collector = fx.collector(vec![fx.test_dep_manager()]);
        let detected = collector.dependency_managers();
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].name(), "test_dep_manager");
    }

    #[test]
    fn test_excluded_managers_are_not_detected() {
        let fx = Fixture::new();
        let collector = fx
            .collector(vec![fx.test_dep_manager()])
            .excluding(vec!["test_dep_manager".to_string()]);
        assert!(collector.dependency_managers().is_empty());
    }

    #[tokio::test]
    async fn test_copies_license_files() {
        let fx = Fixture::new();
        fx.collector(vec![fx.test_dep_manager()]).run().await.unwrap();

        let mut names: Vec<String> = std::fs::read_dir(fx.output_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| !n.ends_with(".json"))
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "test_dep_manager-example1-1.0.0-COPYING",
                "test_dep_manager-example1-1.0.0-LICENSE",
                "test_dep_manager-example2-1.2.3-COPYING",
            ]
        );
        assert_eq!(
            std::fs::read_to_string(fx.output_dir().join("test_dep_manager-example1-1.0.0-LICENSE"))
                .unwrap(),
            "MIT License"
        );
    }

    #[tokio::test]
    async fn test_writes_manifest() {
        let fx = Fixture::new();
        let manifest = fx.collector(vec![fx.test_dep_manager()]).run().await.unwrap();
        assert_eq!(manifest.license_manifest_version, LICENSE_MANIFEST_VERSION);

        let expected = json!({
            "license_manifest_version": 1,
            "project_name": "example-project",
            "dependency_managers": {
                "test_dep_manager": [
                    {
                        "name": "example1",
                        "version": "1.0.0",
                        "license": "MIT",
                        "license_files": [
                            "test_dep_manager-example1-1.0.0-LICENSE",
                            "test_dep_manager-example1-1.0.0-COPYING",
                        ],
                    },
                    {
                        "name": "example2",
                        "version": "1.2.3",
                        "license": "Apache-2",
                        "license_files": [
                            "test_dep_manager-example2-1.2.3-COPYING",
                        ],
                    },
                ],
            },
        });
        assert_eq!(fx.read_manifest(), expected);
    }

    #[tokio::test]
    async fn test_missing_license_is_recorded_as_null() {
        let fx = Fixture::new();
        let manager = FakeManager::boxed(
            "missing_license_dep_manager",
            vec![
                Dependency::new(
                    "example1",
                    "1.0.0",
                    Some("MIT".to_string()),
                    vec![fx.license.clone(), fx.copying.clone()],
                ),
                Dependency::new("example2", "1.2.3", None, Vec::new()),
            ],
        );
        fx.collector(vec![manager]).run().await.unwrap();

        let manifest = fx.read_manifest();
        let deps = &manifest["dependency_managers"]["missing_license_dep_manager"];
        assert_eq!(
            deps[0]["license_files"],
            json!([
                "missing_license_dep_manager-example1-1.0.0-LICENSE",
                "missing_license_dep_manager-example1-1.0.0-COPYING",
            ])
        );
        assert_eq!(
            deps[1],
            json!({
                "name": "example2",
                "version": "1.2.3",
                "license": null,
                "license_files": [],
            })
        );
    }

    #[tokio::test]
    async fn test_manager_order_is_preserved() {
        let fx = Fixture::new();
        let managers = vec![
            FakeManager::boxed("zeta", vec![Dependency::new("b", "1", None, Vec::new())]),
            FakeManager::boxed("alpha", vec![Dependency::new("a", "1", None, Vec::new())]),
        ];
        let manifest = fx.collector(managers).run().await.unwrap();
        let names: Vec<&String> = manifest.dependency_managers.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let raw = std::fs::read_to_string(
            fx.output_dir().join("example-project-dependency-licenses.json"),
        )
        .unwrap();
        assert!(raw.find("\"zeta\"").unwrap() < raw.find("\"alpha\"").unwrap());
    }

    #[tokio::test]
    async fn test_project_directory_missing() {
        let fx = Fixture::new();
        let detect_calls = Rc::new(Cell::new(0));
        let manager: Box<dyn DependencyManager> = Box::new(FakeManager {
            name: "test_dep_manager",
            deps: Vec::new(),
            detect_calls: detect_calls.clone(),
        });
        let fetcher = NetFetcher::new(CountingFetcher::default(), fx.tmp.path().join("cache"));
        let collector = Collector::new(
            "example-project",
            fx.tmp.path().join("nope"),
            fx.output_dir(),
            Overrides::default(),
            fetcher,
        )
        .with_managers(vec![manager])
        .quiet(true);

        let err = collector.run().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectorError>(),
            Some(CollectorError::ProjectDirectoryMissing(_))
        ));
        assert_eq!(detect_calls.get(), 0);
        assert!(!fx.output_dir().exists());
    }

    #[tokio::test]
    async fn test_no_dependency_manager_found() {
        let fx = Fixture::new();
        // The real registry finds nothing in an empty directory.
        let fetcher = NetFetcher::new(CountingFetcher::default(), fx.tmp.path().join("cache"));
        let collector = Collector::new(
            "example-project",
            fx.project_dir(),
            fx.output_dir(),
            Overrides::default(),
            fetcher,
        );

        let err = collector.run().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectorError>(),
            Some(CollectorError::NoDependencyManagerFound(_))
        ));
    }

    #[tokio::test]
    async fn test_override_license_and_local_files() {
        let fx = Fixture::new();
        let gem_dir = fx.tmp.path().join("gems/highline-1.7.8");
        std::fs::create_dir_all(&gem_dir).unwrap();
        std::fs::write(gem_dir.join("LICENSE"), "Ruby's license").unwrap();

        let manager = FakeManager::boxed(
            "ruby_bundler",
            vec![Dependency::new("highline", "1.7.8", None, Vec::new()).with_path(&gem_dir)],
        );
        let manifest = fx.collector(vec![manager]).run().await.unwrap();

        let entry = &manifest.dependency_managers["ruby_bundler"][0];
        assert_eq!(entry.license.as_deref(), Some("Ruby"));
        assert_eq!(entry.license_files, vec!["ruby_bundler-highline-1.7.8-LICENSE"]);
        assert_eq!(
            std::fs::read_to_string(fx.output_dir().join("ruby_bundler-highline-1.7.8-LICENSE"))
                .unwrap(),
            "Ruby's license"
        );
    }

    #[tokio::test]
    async fn test_override_license_keeps_native_files() {
        let fx = Fixture::new();
        let manager = FakeManager::boxed(
            "ruby_bundler",
            vec![Dependency::new(
                "rake",
                "10.4.2",
                Some("UNKNOWN".to_string()),
                vec![fx.license.clone()],
            )],
        );
        let manifest = fx.collector(vec![manager]).run().await.unwrap();

        let entry = &manifest.dependency_managers["ruby_bundler"][0];
        assert_eq!(entry.license.as_deref(), Some("MIT"));
        assert_eq!(entry.license_files, vec!["ruby_bundler-rake-10.4.2-LICENSE"]);
    }

    #[tokio::test]
    async fn test_override_files_keep_native_license() {
        let fx = Fixture::new();
        let counting = CountingFetcher::default();
        let calls = counting.calls.clone();
        let mut overrides = Overrides::empty();
        overrides.override_license(
            "erlang_rebar",
            "erlsom",
            OverrideRule {
                license: None,
                license_files: Some(vec![
                    "https://example.com/erlsom/COPYING".to_string(),
                    "https://example.com/erlsom/COPYING.LESSER".to_string(),
                ]),
            },
        );
        let manager = FakeManager::boxed(
            "erlang_rebar",
            vec![Dependency::new("erlsom", "1.4.1", Some("LGPL".to_string()), Vec::new())],
        );
        let manifest = fx
            .collector_with(vec![manager], overrides, counting)
            .run()
            .await
            .unwrap();

        let entry = &manifest.dependency_managers["erlang_rebar"][0];
        assert_eq!(entry.license.as_deref(), Some("LGPL"));
        assert_eq!(
            entry.license_files,
            vec![
                "erlang_rebar-erlsom-1.4.1-COPYING",
                "erlang_rebar-erlsom-1.4.1-COPYING.LESSER",
            ]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            std::fs::read_to_string(fx.output_dir().join("erlang_rebar-erlsom-1.4.1-COPYING"))
                .unwrap(),
            "license text from https://example.com/erlsom/COPYING"
        );
    }

    #[tokio::test]
    async fn test_remote_override_is_fetched_once_per_run() {
        let fx = Fixture::new();
        let counting = CountingFetcher::default();
        let calls = counting.calls.clone();
        let manager = FakeManager::boxed(
            "ruby_bundler",
            vec![
                Dependency::new("win32-process", "0.7.5", None, Vec::new()),
                Dependency::new("win32-api", "1.5.3", None, Vec::new()),
            ],
        );
        let manifest = fx
            .collector_with(vec![manager], Overrides::default(), counting)
            .run()
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let entries = &manifest.dependency_managers["ruby_bundler"];
        assert_eq!(
            entries[0].license_files,
            vec!["ruby_bundler-win32-process-0.7.5-artistic-2_0.txt"]
        );
        assert_eq!(
            entries[1].license_files,
            vec!["ruby_bundler-win32-api-1.5.3-artistic-2_0.txt"]
        );
    }

    #[tokio::test]
    async fn test_invalid_override_aborts_run() {
        let fx = Fixture::new();
        let gem_dir = fx.tmp.path().join("gems/inifile-3.0.0");
        std::fs::create_dir_all(&gem_dir).unwrap();

        let manager = FakeManager::boxed(
            "ruby_bundler",
            vec![Dependency::new("inifile", "3.0.0", None, Vec::new()).with_path(&gem_dir)],
        );
        let err = fx.collector(vec![manager]).run().await.unwrap_err();

        match err.downcast_ref::<CollectorError>() {
            Some(CollectorError::InvalidOverride { location, .. }) => {
                assert_eq!(location, "README.md")
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!fx
            .output_dir()
            .join("example-project-dependency-licenses.json")
            .exists());
    }

    #[tokio::test]
    async fn test_override_files_from_gem_outside_vendor_bundle() {
        let fx = Fixture::new();
        std::fs::write(
            fx.project_dir().join("Gemfile.lock"),
            "GEM\n  remote: https://rubygems.org/\n  specs:\n    inifile (3.0.0)\n",
        )
        .unwrap();
        let gem_home = fx.tmp.path().join("gem_home");
        let gem_dir = gem_home.join("gems/inifile-3.0.0");
        std::fs::create_dir_all(&gem_dir).unwrap();
        std::fs::write(gem_dir.join("README.md"), "inifile is MIT licensed").unwrap();

        let manager: Box<dyn DependencyManager> =
            Box::new(BundlerManager::new(&fx.project_dir()).with_gem_homes(vec![gem_home]));
        let manifest = fx.collector(vec![manager]).run().await.unwrap();

        let entry = &manifest.dependency_managers["ruby_bundler"][0];
        assert_eq!(entry.license.as_deref(), Some("MIT"));
        assert_eq!(entry.license_files, vec!["ruby_bundler-inifile-3.0.0-README.md"]);
        assert_eq!(
            std::fs::read_to_string(fx.output_dir().join("ruby_bundler-inifile-3.0.0-README.md"))
                .unwrap(),
            "inifile is MIT licensed"
        );
    }

    #[tokio::test]
    async fn test_missing_native_license_file_aborts_run() {
        let fx = Fixture::new();
        let missing = fx.tmp.path().join("test_licenses/NOPE");
        let manager = FakeManager::boxed(
            "test_dep_manager",
            vec![Dependency::new(
                "example1",
                "1.0.0",
                Some("MIT".to_string()),
                vec![missing],
            )],
        );

        let err = fx.collector(vec![manager]).run().await.unwrap_err();

        assert!(format!("{:#}", err).contains("NOPE"));
        assert!(!fx
            .output_dir()
            .join("example-project-dependency-licenses.json")
            .exists());
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("js_npm", "@types/node", "20.1.0", "LICENSE"),
            "js_npm-@types_node-20.1.0-LICENSE"
        );
        assert_eq!(
            output_file_name("perl_cpan", "PathTools", "3.62", "Spec.pm"),
            "perl_cpan-PathTools-3.62-Spec.pm"
        );
    }
}
