use super::duplicates::DuplicateRegistry;
use super::sequencer::ClassSequencer;
use crate::core::{Error, ReportRow, Result};
use crate::coverage::{CoverageStats, CoverageTracker, FlushReport};
use crate::descriptions::{DescriptionStore, MatchPolicy};
use crate::extraction::{summarize, ElementExtractor};
use crate::io::{relative_path, write_report, FileWalker, ReportFormat, ReportLayout};
use crate::progress::ProgressConfig;
use crate::report::{display_name, ReportAssembler, ReportItem};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditOptions {
    pub match_policy: MatchPolicy,
    /// Show qualified member names instead of short names.
    pub full_names: bool,
    pub check_duplicates: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            full_names: true,
            check_duplicates: true,
        }
    }
}

/// Feeds extracted elements through numbering, coverage tracking and row
/// assembly, one file at a time.
pub struct AuditEngine<E: ElementExtractor> {
    extractor: E,
    tracker: CoverageTracker,
    assembler: ReportAssembler,
    duplicates: DuplicateRegistry,
    options: AuditOptions,
}

/// Everything an engine produced once all files are processed.
#[derive(Debug)]
pub struct AuditOutcome {
    pub rows: Vec<ReportRow>,
    pub tracker: CoverageTracker,
    pub duplicates: DuplicateRegistry,
}

impl<E: ElementExtractor> AuditEngine<E> {
    pub fn new(extractor: E, store: DescriptionStore, options: AuditOptions) -> Self {
        Self {
            extractor,
            tracker: CoverageTracker::new(store, options.match_policy),
            assembler: ReportAssembler::new(),
            duplicates: DuplicateRegistry::new(),
            options,
        }
    }

    pub fn tracker(&self) -> &CoverageTracker {
        &self.tracker
    }

    /// Processes one file and returns the number of elements it contributed.
    ///
    /// A file the extractor cannot handle contributes nothing.
    pub fn process_file(&mut self, path: &Path, relative: &str) -> usize {
        let extraction = self.extractor.extract(path);
        if let Some(diagnostic) = &extraction.diagnostic {
            warn!("{}", Error::extraction(relative, diagnostic.as_str()));
        }

        let mut sequencer = ClassSequencer::new();
        let count = extraction.elements.len();

        for element in extraction.elements {
            let item_number = sequencer.number(element.element_type, &element.name);
            let doc = summarize(&element.doc_text);
            let tracked = self.tracker.record(
                element.element_type,
                &element.name,
                element.short_name(),
                &doc,
            );

            self.assembler.push(ReportItem {
                relative_path: relative.to_string(),
                item_number,
                display_name: display_name(
                    &element.name,
                    element.short_name(),
                    self.options.full_names,
                ),
                element_type: element.element_type,
                description: tracked.description,
                source_line: element.source_line,
            });

            if self.options.check_duplicates {
                self.duplicates.observe(
                    element.element_type,
                    &element.name,
                    relative,
                    element.source_line,
                );
            }
        }

        debug!("{}: {} elements", relative, count);
        count
    }

    pub fn finish(self) -> AuditOutcome {
        AuditOutcome {
            rows: self.assembler.finish(),
            tracker: self.tracker,
            duplicates: self.duplicates,
        }
    }
}

/// Inputs of a full directory audit.
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub target: PathBuf,
    pub descriptions_dir: PathBuf,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub layout: ReportLayout,
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub options: AuditOptions,
    pub progress: ProgressConfig,
}

impl AuditSettings {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            descriptions_dir: PathBuf::from("descriptions"),
            output: PathBuf::from("php_analysis.csv"),
            format: ReportFormat::default(),
            layout: ReportLayout::default(),
            extensions: vec!["php".to_string()],
            ignore_patterns: Vec::new(),
            options: AuditOptions::default(),
            progress: ProgressConfig::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AuditSummary {
    pub files_scanned: usize,
    pub rows: Vec<ReportRow>,
    pub stats: CoverageStats,
    pub duplicates: DuplicateRegistry,
    pub stubs: FlushReport,
    /// `None` when nothing was found to report.
    pub report_path: Option<PathBuf>,
}

/// Audits every matching file under `settings.target`.
///
/// Writes the report and stub files. Returns an empty summary without
/// writing anything when the tree holds no files or no elements.
pub fn audit_directory<E: ElementExtractor>(
    settings: &AuditSettings,
    extractor: E,
) -> Result<AuditSummary> {
    let _span = info_span!("audit", dir = %settings.target.display()).entered();

    if !settings.target.is_dir() {
        return Err(Error::environment(format!(
            "directory {} does not exist",
            settings.target.display()
        )));
    }

    let store = DescriptionStore::load(&settings.descriptions_dir)?;
    info!(
        "Loaded {} reference descriptions from {}",
        store.total_len(),
        settings.descriptions_dir.display()
    );

    let files = FileWalker::new(settings.target.clone())
        .with_extensions(settings.extensions.clone())
        .with_ignore_patterns(settings.ignore_patterns.clone())
        .walk()?;
    if files.is_empty() {
        warn!("No PHP files found in {}", settings.target.display());
        return Ok(AuditSummary::default());
    }
    info!("Found {} files to analyze", files.len());

    let mut engine = AuditEngine::new(extractor, store, settings.options);
    let bar = settings.progress.file_bar(files.len() as u64);
    bar.set_message("Analyzing");
    for file in &files {
        let relative = relative_path(file, &settings.target);
        engine.process_file(file, &relative);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let AuditOutcome {
        rows,
        mut tracker,
        duplicates,
    } = engine.finish();

    if rows.is_empty() {
        warn!("No documentable elements found in {}", settings.target.display());
        return Ok(AuditSummary {
            files_scanned: files.len(),
            ..AuditSummary::default()
        });
    }

    write_report(&settings.output, settings.format, settings.layout, &rows)?;
    info!("Report written to {}", settings.output.display());

    let stubs = tracker.flush_empty();
    Ok(AuditSummary {
        files_scanned: files.len(),
        rows,
        stats: tracker.stats().clone(),
        duplicates,
        stubs,
        report_path: Some(settings.output.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DescriptionRecord, ElementRecord, ElementType};
    use crate::descriptions::read_description_file;
    use crate::extraction::MemoryExtractor;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_with(
        temp: &TempDir,
        sets: Vec<(ElementType, Vec<DescriptionRecord>)>,
    ) -> DescriptionStore {
        let dir = temp.path().join("descriptions");
        std::fs::create_dir_all(&dir).unwrap();
        DescriptionStore::from_sets(dir, sets)
    }

    #[test]
    fn test_reference_description_fills_undocumented_method() {
        let temp = TempDir::new().unwrap();
        let store = store_with(
            &temp,
            vec![(
                ElementType::Method,
                vec![DescriptionRecord::new("Foo::bar", "Does X.")],
            )],
        );
        let extractor = MemoryExtractor::new().with_file(
            "Foo.php",
            vec![
                ElementRecord::new(ElementType::Class, "Foo").at_line(3),
                ElementRecord::new(ElementType::Method, "Foo::bar")
                    .with_short_name("bar")
                    .at_line(5),
            ],
        );
        let mut engine = AuditEngine::new(extractor, store, AuditOptions::default());

        assert_eq!(engine.process_file(Path::new("Foo.php"), "Foo.php"), 2);
        let outcome = engine.finish();

        assert_eq!(outcome.rows[1].description, "Does X.");
        assert_eq!(outcome.rows[1].item_number, 2);
        let stats = outcome.tracker.stats();
        assert_eq!(stats.found(ElementType::Method), 1);
        assert_eq!(stats.empty(ElementType::Method), 0);
    }

    #[test]
    fn test_doc_comment_is_summarized_and_discovered() {
        let temp = TempDir::new().unwrap();
        let store = store_with(&temp, Vec::new());
        let extractor = MemoryExtractor::new().with_file(
            "Foo.php",
            vec![ElementRecord::new(ElementType::Method, "Foo::bar")
                .with_short_name("bar")
                .with_doc("/** Computes bar. Extra detail that is ignored. */")
                .at_line(4)],
        );
        let mut engine = AuditEngine::new(extractor, store, AuditOptions::default());

        engine.process_file(Path::new("Foo.php"), "Foo.php");
        let outcome = engine.finish();

        assert_eq!(outcome.rows[0].description, "Computes bar.");
        let found =
            read_description_file(&temp.path().join("descriptions/found_methods.json")).unwrap();
        assert_eq!(found, vec![DescriptionRecord::new("Foo::bar", "Computes bar.")]);
    }

    #[test]
    fn test_short_names_and_duplicates() {
        let temp = TempDir::new().unwrap();
        let store = store_with(&temp, Vec::new());
        let extractor = MemoryExtractor::new()
            .with_file(
                "a.php",
                vec![
                    ElementRecord::new(ElementType::Class, "A"),
                    ElementRecord::new(ElementType::Method, "A::save").with_short_name("save"),
                ],
            )
            .with_file(
                "b.php",
                vec![
                    ElementRecord::new(ElementType::Class, "B"),
                    ElementRecord::new(ElementType::Method, "B::save").with_short_name("save"),
                ],
            );
        let options = AuditOptions {
            full_names: false,
            ..AuditOptions::default()
        };
        let mut engine = AuditEngine::new(extractor, store, options);

        engine.process_file(Path::new("a.php"), "a.php");
        engine.process_file(Path::new("b.php"), "b.php");
        let outcome = engine.finish();

        assert_eq!(outcome.rows[1].display_name, "save");
        assert_eq!(outcome.rows[3].item_number, 2);
        let collisions = outcome.duplicates.collisions(ElementType::Method);
        assert_eq!(collisions["save"].len(), 2);
    }

    #[test]
    fn test_unknown_file_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut engine = AuditEngine::new(
            MemoryExtractor::new(),
            store_with(&temp, Vec::new()),
            AuditOptions::default(),
        );
        assert_eq!(engine.process_file(Path::new("missing.php"), "missing.php"), 0);
        assert!(engine.finish().rows.is_empty());
    }

    #[test]
    fn test_missing_target_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let settings = AuditSettings::new(temp.path().join("nope"));
        let err = audit_directory(&settings, MemoryExtractor::new()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_audit_directory_writes_report_and_stubs() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("project");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("index.php"), "<?php").unwrap();

        let extractor = MemoryExtractor::new().with_file(
            target.join("index.php"),
            vec![ElementRecord::new(ElementType::Function, "main").at_line(2)],
        );
        let mut settings = AuditSettings::new(&target);
        settings.descriptions_dir = temp.path().join("descriptions");
        settings.output = temp.path().join("out/report.csv");

        let summary = audit_directory(&settings, extractor).unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.report_path.as_deref(), Some(settings.output.as_path()));
        assert_eq!(summary.stats.empty(ElementType::Function), 1);
        assert_eq!(summary.stubs.written(ElementType::Function), 1);
        let report = std::fs::read_to_string(&settings.output).unwrap();
        assert!(report.contains("1,index.php,1,main,Функция,,2"));
    }

    #[test]
    fn test_audit_directory_without_files_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut settings = AuditSettings::new(temp.path());
        settings.descriptions_dir = temp.path().join("descriptions");
        settings.output = temp.path().join("report.csv");

        let summary = audit_directory(&settings, MemoryExtractor::new()).unwrap();

        assert_eq!(summary.files_scanned, 0);
        assert!(summary.report_path.is_none());
        assert!(!settings.output.exists());
    }
}
