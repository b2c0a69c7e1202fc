use crate::config::Config;
use crate::error::{Result, SubmitCheckError};
use crate::extractor::record::StudentRecord;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scans an info file for the student's name and matriculation number.
///
/// Matching follows the long-standing info-file convention: a field label may
/// appear anywhere in the line, matching is case-insensitive, and the value is
/// everything after the colon. The name value is trimmed; the matriculation
/// number is stored verbatim (known quirk, kept for compatibility with
/// existing grading pipelines).
pub struct InfoExtractor {
    name_pattern: Regex,
    matriculation_pattern: Regex,
    comment_marker: char,
    placeholder: String,
}

impl InfoExtractor {
    pub fn from_config(config: &Config) -> Result<Self> {
        let name_pattern = Regex::new(r"(?i)^.*Name:\s*(.*)$")?;

        // The label variants are one alternation so no variant takes
        // precedence over another.
        let labels = config
            .fields
            .matriculation_labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        let matriculation_pattern = Regex::new(&format!(r"(?i)^.*(?:{}):\s*(.*)$", labels))?;

        Ok(Self {
            name_pattern,
            matriculation_pattern,
            comment_marker: config.input.comment_marker,
            placeholder: config.fields.placeholder.clone(),
        })
    }

    /// Open and scan an info file. The handle lives only for the duration of
    /// the scan and is released on every exit path.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<ScanOutcome> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| SubmitCheckError::InfoFileMissing {
            path: path.display().to_string(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        Ok(self.scan_lines(lines))
    }

    /// Scan lines in order. Later matches overwrite earlier ones.
    pub fn scan_lines<I, S>(&self, lines: I) -> ScanOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = StudentRecord::new();
        let mut statistics = ScanStatistics::default();

        for line in lines {
            let line = line.as_ref();
            statistics.lines_scanned += 1;

            // A fully blank line carries nothing to match against
            let stripped = line.trim_start();
            if stripped.is_empty() {
                statistics.blank_lines += 1;
                continue;
            }

            if stripped.starts_with(self.comment_marker) {
                statistics.comment_lines += 1;
                continue;
            }

            // Both fields are probed independently; one line may set both
            if let Some(captures) = self.name_pattern.captures(line) {
                record.set_name(captures[1].trim().to_string(), &self.placeholder);
                statistics.name_matches += 1;
            }

            if let Some(captures) = self.matriculation_pattern.captures(line) {
                // Stored verbatim, surrounding whitespace included
                record.set_matriculation_number(captures[1].to_string(), &self.placeholder);
                statistics.matriculation_matches += 1;
            }
        }

        ScanOutcome { record, statistics }
    }
}

/// Result of scanning one info file.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub record: StudentRecord,
    pub statistics: ScanStatistics,
}

#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    pub lines_scanned: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub name_matches: usize,
    pub matriculation_matches: usize,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        format!(
            "Scan results:\n  Lines scanned: {}\n  Blank lines: {}\n  Comment lines: {}\n  Name matches: {}\n  Matriculation number matches: {}\n",
            self.lines_scanned,
            self.blank_lines,
            self.comment_lines,
            self.name_matches,
            self.matriculation_matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::record::FieldValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn extractor() -> InfoExtractor {
        InfoExtractor::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_extracts_both_fields() {
        let outcome = extractor().scan_lines(["Name: Alice Example", "MatrNr: 12345"]);
        assert_eq!(outcome.record.name(), Some("Alice Example"));
        assert_eq!(outcome.record.matriculation_number(), Some("12345"));
        assert!(outcome.record.is_complete());
    }

    #[test]
    fn test_all_label_variants() {
        for label in ["Matriculation number", "Matrikelnummer", "MatrNr"] {
            let outcome = extractor().scan_lines([format!("{}: 42", label)]);
            assert_eq!(
                outcome.record.matriculation_number(),
                Some("42"),
                "label {:?} should match",
                label
            );
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let outcome = extractor().scan_lines(["NAME: Alice", "matrnr: 7"]);
        assert_eq!(outcome.record.name(), Some("Alice"));
        assert_eq!(outcome.record.matriculation_number(), Some("7"));
    }

    #[test]
    fn test_label_may_have_prefix() {
        let outcome = extractor().scan_lines(["Student Name: Alice", "My MatrNr: 9"]);
        assert_eq!(outcome.record.name(), Some("Alice"));
        assert_eq!(outcome.record.matriculation_number(), Some("9"));
    }

    #[test]
    fn test_name_is_trimmed_matriculation_is_not() {
        let outcome = extractor().scan_lines(["Name:    Alice   ", "MatrNr: 123  "]);
        assert_eq!(outcome.record.name(), Some("Alice"));
        assert_eq!(outcome.record.matriculation_number(), Some("123  "));
    }

    #[test]
    fn test_no_space_after_colon() {
        let outcome = extractor().scan_lines(["Name:Alice", "MatrNr:55"]);
        assert_eq!(outcome.record.name(), Some("Alice"));
        assert_eq!(outcome.record.matriculation_number(), Some("55"));
    }

    #[test]
    fn test_last_match_wins() {
        let outcome = extractor().scan_lines(["Name: Alice", "Name: Bob", "MatrNr: 1", "MatrNr: 2"]);
        assert_eq!(outcome.record.name(), Some("Bob"));
        assert_eq!(outcome.record.matriculation_number(), Some("2"));
    }

    #[test]
    fn test_one_line_can_set_both_fields() {
        let outcome = extractor().scan_lines(["Name: Alice MatrNr: 3"]);
        assert!(outcome.record.name.is_provided());
        assert_eq!(outcome.record.matriculation_number(), Some("3"));
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let outcome = extractor().scan_lines(["# Name: Alice", "   # MatrNr: 1"]);
        assert_eq!(outcome.record.name, FieldValue::Unset);
        assert_eq!(outcome.record.matriculation_number, FieldValue::Unset);
        assert_eq!(outcome.statistics.comment_lines, 2);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let outcome = extractor().scan_lines(["", "   ", "\t", "Name: Alice"]);
        assert_eq!(outcome.record.name(), Some("Alice"));
        assert_eq!(outcome.statistics.blank_lines, 3);
    }

    #[test]
    fn test_placeholder_is_not_a_value() {
        let outcome = extractor().scan_lines(["Name: ???", "MatrNr: 123"]);
        assert_eq!(outcome.record.name, FieldValue::Placeholder);
        assert!(!outcome.record.is_complete());
    }

    #[test]
    fn test_empty_value_is_not_a_value() {
        let outcome = extractor().scan_lines(["Name: ", "MatrNr: 123"]);
        assert_eq!(outcome.record.name, FieldValue::Placeholder);
        assert!(!outcome.record.is_complete());
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let outcome = extractor().scan_lines(["Assignment 3", "Group: B"]);
        assert_eq!(outcome.record.name, FieldValue::Unset);
        assert_eq!(outcome.statistics.lines_scanned, 2);
        assert_eq!(outcome.statistics.name_matches, 0);
    }

    #[test]
    fn test_custom_labels() {
        let mut config = Config::default();
        config.fields.matriculation_labels = vec!["StudentId".to_string()];
        let extractor = InfoExtractor::from_config(&config).unwrap();

        let outcome = extractor.scan_lines(["StudentId: 77", "MatrNr: 1"]);
        assert_eq!(outcome.record.matriculation_number(), Some("77"));
    }

    #[test]
    fn test_labels_with_regex_metacharacters_are_escaped() {
        let mut config = Config::default();
        config.fields.matriculation_labels = vec!["Matr.Nr".to_string()];
        let extractor = InfoExtractor::from_config(&config).unwrap();

        let outcome = extractor.scan_lines(["MatrXNr: 1"]);
        assert_eq!(outcome.record.matriculation_number, FieldValue::Unset);

        let outcome = extractor.scan_lines(["Matr.Nr: 1"]);
        assert_eq!(outcome.record.matriculation_number(), Some("1"));
    }

    #[test]
    fn test_scan_file_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# header\nName: Alice\nMatrNr: 12345\n").unwrap();

        let outcome = extractor().scan_file(file.path()).unwrap();
        assert!(outcome.record.is_complete());
        assert_eq!(outcome.statistics.lines_scanned, 3);
    }

    #[test]
    fn test_scan_file_missing() {
        let error = extractor().scan_file("does_not_exist.txt").unwrap_err();
        assert!(matches!(error, SubmitCheckError::InfoFileMissing { .. }));
    }
}
