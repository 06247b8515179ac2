//! DOC/DOCX to Markdown through an external converter (pandoc by default).

use crate::Error;
use crate::config::ConvertConfig;
use crate::exec::CommandRunner;
use crate::log;
use crate::scan::scan_files_by_ext;
use std::path::{Path, PathBuf};

/// `report.docx` becomes `report.md`, next to the original.
#[must_use]
pub fn markdown_path(doc: &Path) -> PathBuf {
    doc.with_extension("md")
}

/// One converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Runs the configured converter on one document at a time.
pub struct Converter<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    extract_media: PathBuf,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner, config: &ConvertConfig) -> Self {
        Self {
            runner,
            program: config.converter.clone(),
            extract_media: config.extract_media_path(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Writes a standalone Markdown rendering of `doc` to `target`.
    ///
    /// # Errors
    /// [`Error::Convert`] wrapping whatever the converter run reported.
    pub fn convert(&self, doc: &Path, target: &Path) -> Result<(), Error> {
        let doc_arg = doc.to_string_lossy();
        let target_arg = target.to_string_lossy();
        let media_arg = format!("--extract-media={}", self.extract_media.display());

        self.runner
            .run(
                &self.program,
                &[
                    "-s",
                    &*doc_arg,
                    media_arg.as_str(),
                    "-t",
                    "markdown",
                    "-o",
                    &*target_arg,
                ],
            )
            .map(|_| ())
            .map_err(|e| Error::Convert {
                path: doc.to_path_buf(),
                source: Box::new(e),
            })
    }
}

/// Scans the configured root and converts every document found.
///
/// A failed conversion is raised through [`log::alarm`] at the configured
/// `on_failure` level. At error level the first failure stops the run;
/// at any other level it is reported and skipped.
///
/// # Errors
/// Scan failures, and conversion failures when `on_failure` is `error`.
pub fn convert_all(
    runner: &dyn CommandRunner,
    config: &ConvertConfig,
) -> Result<Vec<Conversion>, Error> {
    let root = config.root_path();
    crate::debug!("scanning {} for documents...", root.display());
    let docs = scan_files_by_ext(&root, &config.extensions)?;

    if docs.is_empty() {
        crate::debug!("no documents to convert");
        return Ok(Vec::new());
    }
    crate::debug!("found {} documents, converting...", docs.len());

    let converter = Converter::new(runner, config);
    let level = config.failure_level();
    let mut done = Vec::with_capacity(docs.len());

    for doc in docs {
        let target = markdown_path(&doc);
        crate::debug!("converting {} -> {}", doc.display(), target.display());
        match converter.convert(&doc, &target) {
            Ok(()) => done.push(Conversion {
                source: doc,
                target,
            }),
            Err(e) => {
                if log::alarm(&e.to_string(), level).is_err() {
                    return Err(e);
                }
            }
        }
    }

    Ok(done)
}
