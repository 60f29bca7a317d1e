//! Discovery of translation sources under the messages directory.
//!
//! Two naming conventions are recognized for direct children of the source
//! root:
//!
//! - a **locale folder**: a directory whose name is taken as the locale code
//!   verbatim; every `.po` file anywhere below it belongs to that locale and
//!   the file stem is the domain (`fr_FR/LC_MESSAGES/myapp.po`);
//! - a **flat file**: a `.po` file whose stem is `[<domain>-]<locale>`
//!   (`en.po`, `myapp-fr_CA.po`). Files whose stem matches neither form are
//!   not translation sources and are skipped silently.

use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

/// Extension of translation source files.
pub const PO_EXTENSION: &str = "po";

// An optional "<domain>-" prefix followed by a locale code such as "fr",
// "fil" or "fr_CA". The domain capture is greedy, so "foo-bar-fr" parses as
// domain "foo-bar", locale "fr".
static SOURCE_NAME_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(.+)-)?([a-z]{2,3}(?:_[A-Z]+)?)$").unwrap());

/// A single discovered translation source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PoSource {
    pub path: PathBuf,
    pub locale: String,
    pub domain: String,
}

/// Lazy iterator over the translation sources under one directory.
///
/// Every construction performs a fresh directory walk, so discovery is
/// restarted by constructing a new iterator. Entries that cannot be read are
/// skipped.
pub struct SourceFiles {
    default_domain: String,
    entries: ReadDir,
    locale_dir: Option<LocaleDir>,
}

/// In-progress walk of one locale folder.
struct LocaleDir {
    locale: String,
    walker: walkdir::IntoIter,
}

impl SourceFiles {
    pub fn new(source_root: &Path, default_domain: &str) -> io::Result<Self> {
        Ok(Self {
            default_domain: default_domain.to_string(),
            entries: fs::read_dir(source_root)?,
            locale_dir: None,
        })
    }

    fn match_flat_file(&self, path: &Path) -> Option<PoSource> {
        let stem = path.file_stem()?.to_str()?;
        let captures = SOURCE_NAME_RX.captures(stem)?;
        let locale = captures.get(2)?.as_str().to_string();
        let domain = captures
            .get(1)
            .map_or_else(|| self.default_domain.clone(), |m| m.as_str().to_string());
        Some(PoSource {
            path: path.to_path_buf(),
            locale,
            domain,
        })
    }
}

impl Iterator for SourceFiles {
    type Item = PoSource;

    fn next(&mut self) -> Option<PoSource> {
        loop {
            // Drain the current locale folder before moving to the next
            // child of the source root.
            if let Some(dir) = &mut self.locale_dir {
                for entry in dir.walker.by_ref() {
                    let Ok(entry) = entry else { continue };
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == PO_EXTENSION) {
                        if let Some(stem) = path.file_stem() {
                            return Some(PoSource {
                                path: path.to_path_buf(),
                                locale: dir.locale.clone(),
                                domain: stem.to_string_lossy().into_owned(),
                            });
                        }
                    }
                }
                self.locale_dir = None;
            }

            let Ok(child) = self.entries.next()? else {
                continue;
            };
            let path = child.path();
            if child.file_type().is_ok_and(|kind| kind.is_dir()) {
                if let Some(name) = path.file_name() {
                    self.locale_dir = Some(LocaleDir {
                        locale: name.to_string_lossy().into_owned(),
                        walker: WalkDir::new(&path).into_iter(),
                    });
                }
            } else if path.extension().is_some_and(|ext| ext == PO_EXTENSION) {
                if let Some(source) = self.match_flat_file(&path) {
                    return Some(source);
                }
            }
        }
    }
}
