//! Batch driver
//!
//! Runs either pipeline stage over the fixed, well-known directories:
//! `xmls` (compound XML input), `texts` (intermediate descriptions),
//! `drawio` (final diagrams). Each run prepares its destination folder
//! explicitly, then processes files strictly one at a time. Failures are
//! contained per file; only directory-level errors abort a batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::description::{parse_description, write_description};
use crate::diagram::DiagramBuilder;
use crate::extract::Extractor;

/// Compound XML input directory
pub const XML_DIR: &str = "xmls";
/// Intermediate description directory
pub const TEXT_DIR: &str = "texts";
/// Final diagram directory
pub const DIAGRAM_DIR: &str = "drawio";

/// Suffix qualifying a file as a compound document
pub const COMPOUND_SUFFIX: &str = "cs.xml";
/// Suffix of intermediate description files
pub const TEXT_SUFFIX: &str = ".txt";
/// Suffix replacing [`TEXT_SUFFIX`] on diagram files
pub const DIAGRAM_SUFFIX: &str = "_Diagram.drawio";

/// Per-batch result counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Output files written
    pub written: usize,
    /// Input files skipped because of a contained per-file failure
    pub failed: usize,
}

/// Prepare an output directory: create it if missing, otherwise remove
/// every file and subfolder it contains.
///
/// Idempotent, and always invoked explicitly at the start of a batch.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        for entry in fs::read_dir(dir)
            .with_context(|| format!("reading output directory {}", dir.display()))?
        {
            let path = entry
                .with_context(|| format!("listing output directory {}", dir.display()))?
                .path();
            if path.is_dir() {
                fs::remove_dir_all(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
            } else {
                fs::remove_file(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
            }
        }
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    Ok(())
}

/// Enumerate the qualifying file names in a directory, sorted so batch
/// order (and therefore logging) is deterministic across platforms.
fn qualifying_files(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading input directory {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("listing input directory {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Derive the description file name from a compound file name.
///
/// Doxygen escapes compound ids into file names
/// (`class_player_8cs.xml`); this drops the `.xml` extension,
/// camel-cases underscore-separated segments, deletes every `8` and the
/// literal `class` substring, and appends `.txt`.
pub fn text_file_name(xml_name: &str) -> String {
    let base = xml_name.replace(".xml", "");

    let mut camel = String::with_capacity(base.len());
    let mut upper_next = false;
    for c in base.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    let cleaned = camel.replace('8', "").replace("class", "");
    format!("{}{}", cleaned.trim(), TEXT_SUFFIX)
}

/// Derive the diagram file name from a description file name.
pub fn diagram_file_name(txt_name: &str) -> String {
    txt_name.replace(TEXT_SUFFIX, DIAGRAM_SUFFIX)
}

/// Run the extraction stage over every compound file under
/// `root/xmls`, writing descriptions under `root/texts`.
///
/// Per-file failures (malformed XML, unreadable input, failed write) are
/// reported and counted; the batch continues.
pub fn extract_batch(root: &Path, extractor: &Extractor) -> Result<BatchOutcome> {
    let input_dir = root.join(XML_DIR);
    let output_dir = root.join(TEXT_DIR);
    prepare_dir(&output_dir)?;

    let mut outcome = BatchOutcome::default();
    for name in qualifying_files(&input_dir, COMPOUND_SUFFIX)? {
        let path = input_dir.join(&name);
        let model = match fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|xml| extractor.extract(&xml).map_err(anyhow::Error::from))
        {
            Ok(model) => model,
            Err(e) => {
                error!("error parsing {}: {:#}", path.display(), e);
                outcome.failed += 1;
                continue;
            }
        };

        let out_path = output_dir.join(text_file_name(&name));
        match fs::write(&out_path, write_description(&model)) {
            Ok(()) => {
                info!("wrote {}", out_path.display());
                outcome.written += 1;
            }
            Err(e) => {
                error!("error writing {}: {}", out_path.display(), e);
                outcome.failed += 1;
            }
        }
    }

    info!(
        written = outcome.written,
        failed = outcome.failed,
        "extraction batch finished"
    );
    Ok(outcome)
}

/// Run the diagram stage over every description under `root/texts`,
/// writing diagram documents under `root/drawio`.
pub fn build_batch(root: &Path) -> Result<BatchOutcome> {
    let input_dir = root.join(TEXT_DIR);
    let output_dir = root.join(DIAGRAM_DIR);
    prepare_dir(&output_dir)?;

    let builder = DiagramBuilder::new();
    let mut outcome = BatchOutcome::default();
    for name in qualifying_files(&input_dir, TEXT_SUFFIX)? {
        let path = input_dir.join(&name);
        let document = match fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| {
                builder
                    .build(&parse_description(&text))
                    .map_err(anyhow::Error::from)
            }) {
            Ok(document) => document,
            Err(e) => {
                error!("error building diagram for {}: {:#}", path.display(), e);
                outcome.failed += 1;
                continue;
            }
        };

        let out_path = output_dir.join(diagram_file_name(&name));
        match fs::write(&out_path, document) {
            Ok(()) => {
                info!("wrote {}", out_path.display());
                outcome.written += 1;
            }
            Err(e) => {
                error!("error writing {}: {}", out_path.display(), e);
                outcome.failed += 1;
            }
        }
    }

    info!(
        written = outcome.written,
        failed = outcome.failed,
        "diagram batch finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_file_name_camel_cases_and_cleans() {
        assert_eq!(text_file_name("class_player_8cs.xml"), "Playercs.txt");
        assert_eq!(
            text_file_name("class_enemy_controller_8cs.xml"),
            "EnemyControllercs.txt"
        );
    }

    #[test]
    fn test_text_file_name_plain() {
        assert_eq!(text_file_name("player_8cs.xml"), "playercs.txt");
    }

    #[test]
    fn test_diagram_file_name() {
        assert_eq!(diagram_file_name("Playercs.txt"), "Playercs_Diagram.drawio");
    }

    #[test]
    fn test_prepare_dir_creates_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        prepare_dir(&target).unwrap();
        assert!(target.is_dir());

        fs::write(target.join("stale.txt"), "old").unwrap();
        fs::create_dir(target.join("nested")).unwrap();
        fs::write(target.join("nested/stale.txt"), "old").unwrap();

        prepare_dir(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn test_qualifying_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_8cs.xml"), "").unwrap();
        fs::write(dir.path().join("a_8cs.xml"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::write(dir.path().join("other.xml"), "").unwrap();

        let names = qualifying_files(dir.path(), COMPOUND_SUFFIX).unwrap();
        assert_eq!(names, vec!["a_8cs.xml", "b_8cs.xml"]);
    }

    #[test]
    fn test_missing_input_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_batch(&dir.path().join("nowhere"), &Extractor::new());
        assert!(result.is_err());
    }
}
