//! The build hook: compile every discovered catalog into the locale tree and
//! register the results, plus the cleanup pass removing what a build
//! produced.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::compiler::Compiler;
use crate::config::ResolvedConfig;
use crate::diagnostics::Diagnostics;
use crate::discover::SourceFiles;

/// The build target that produces the installable package. The hook is a
/// no-op for every other target.
pub const PACKAGE_TARGET: &str = "package";

/// Extension of compiled catalogs.
pub const MO_EXTENSION: &str = "mo";

/// Mutable per-build state owned by the host.
///
/// The hook records every file it generates under `force_include`, keyed and
/// valued by the path the file must take inside the final artifact.
#[derive(Debug, Default)]
pub struct BuildData {
    pub force_include: BTreeMap<String, String>,
}

/// One hook instance drives one sequential pass per build invocation.
///
/// The configuration is resolved before construction, so both entry points
/// can be called standalone and in any order.
pub struct BuildHook<'a> {
    root: PathBuf,
    target_name: String,
    config: ResolvedConfig,
    compiler: &'a dyn Compiler,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> BuildHook<'a> {
    pub fn new(
        root: &Path,
        target_name: &str,
        config: ResolvedConfig,
        compiler: &'a dyn Compiler,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            target_name: target_name.to_string(),
            config,
            compiler,
            diagnostics,
        }
    }

    /// Source directory holding the `.po` catalogs.
    fn messages_dir(&self) -> PathBuf {
        self.root.join(&self.config.messages)
    }

    /// Output directory receiving the compiled locale tree.
    fn locale_dir(&self) -> PathBuf {
        self.root.join(&self.config.locale)
    }

    /// Compile every discovered catalog and register the generated files.
    ///
    /// A missing source directory is reported at error level and ends the
    /// pass without a hard failure: the host decides what an error-level
    /// diagnostic means for the build. Compiler failures do propagate; a
    /// catalog that does not compile fails the whole step.
    pub fn initialize(&self, _version: &str, build_data: &mut BuildData) -> Result<()> {
        self.diagnostics
            .debug(&format!("mopack building {}", self.target_name), 1);
        if self.target_name != PACKAGE_TARGET {
            self.diagnostics.warning(&format!(
                "{}: unexpected target - call ignored",
                self.target_name
            ));
            return Ok(());
        }
        let src = self.messages_dir();
        if !src.is_dir() {
            self.diagnostics.error(&format!(
                "{} is not a directory: giving up",
                self.config.messages
            ));
            return Ok(());
        }
        for source in SourceFiles::new(&src, &self.config.domain)? {
            let out_dir = self.locale_dir().join(&source.locale).join("LC_MESSAGES");
            fs::create_dir_all(&out_dir)?;
            let mo = out_dir.join(format!("{}.{}", source.domain, MO_EXTENSION));
            self.compiler.compile(&source.path, &mo)?;
            // Registered under the conventional runtime layout, independent
            // of the configured locale directory name.
            let included = format!(
                "locale/{}/LC_MESSAGES/{}.{}",
                source.locale, source.domain, MO_EXTENSION
            );
            build_data
                .force_include
                .insert(included.clone(), included.clone());
            self.diagnostics.debug(
                &format!("Compiling {} to {}", source.path.display(), included),
                1,
            );
        }
        Ok(())
    }

    /// Remove compiled catalogs (any file at all with `force_clean`) and the
    /// directories their removal leaves empty.
    ///
    /// Entries are processed in reverse sorted order so files come before
    /// the directories containing them. A removal failure is reported at
    /// warning level and skipped; the pass always visits every entry. Files
    /// outside the removal criterion stay, so their parent directories
    /// legitimately fail to be removed.
    pub fn clean(&self, _versions: &[String]) {
        self.diagnostics
            .debug(&format!("Cleaning everything in {}", self.config.locale), 2);
        let force = self.config.force_clean;
        let mut entries: Vec<PathBuf> = WalkDir::new(self.locale_dir())
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            .collect();
        entries.sort();
        for path in entries.into_iter().rev() {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            if path.is_dir() {
                if fs::remove_dir(&path).is_err() {
                    self.diagnostics
                        .warning(&format!("Folder {name} not removed (not empty?)"));
                }
            } else if force || path.extension().is_some_and(|ext| ext == MO_EXTENSION) {
                if fs::remove_file(&path).is_err() {
                    self.diagnostics.warning(&format!("File {name} not removed"));
                }
            }
        }
    }
}
