//! Mopack - gettext catalog compiler for packaging builds
//!
//! Mopack turns the textual `.po` catalogs of a project into binary `.mo`
//! files laid out the way runtime translation lookup expects
//! (`locale/<lang>/LC_MESSAGES/<domain>.mo`) and registers every generated
//! file so the packaging step can include it in the final artifact. It also
//! knows how to clean up what a previous build produced.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and glue)
//! - `compiler`: The msgfmt collaborator compiling one catalog at a time
//! - `config`: Configuration file loading and defaulting
//! - `diagnostics`: Severity-tagged message sink shared by build and clean
//! - `discover`: Translation-source discovery and (locale, domain) inference
//! - `hook`: The build hook: compile-and-register pass and cleanup pass

pub mod cli;
pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod discover;
pub mod hook;
