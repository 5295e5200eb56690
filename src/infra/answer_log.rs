// ============================================================
// Layer 6 — Answer Log
// ============================================================
// Appends one CSV row per question so runs can be compared
// afterwards:
//
//   question,answer_type,max_score,single_match,outcome
//   "where was sachin tendulkar born",LOCATION,2,false,answer
//
// The header is written only when the file is created, so
// several runs can append to the same log.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::answer::{AnswerType, Diagnostics, Outcome};

const HEADER: &str = "question,answer_type,max_score,single_match,outcome";

pub struct AnswerLog {
    csv_path: PathBuf,
}

impl AnswerLog {
    pub fn new(csv_path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = csv_path.into();

        if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create answer log '{}'", csv_path.display()))?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created answer log: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    pub fn log(
        &self,
        question:    &str,
        answer_type: &AnswerType,
        diagnostics: &Diagnostics,
        outcome:     &Outcome,
    ) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open answer log '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{},{},{},{}",
            csv_field(question),
            csv_field(answer_type.label()),
            diagnostics.max_score,
            diagnostics.single_match,
            outcome.kind(),
        )?;
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Quote a field, doubling inner quotes and flattening newlines.
fn csv_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\"").replace(['\n', '\r'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_once_and_appends_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log/answers.csv");

        let d = Diagnostics { selected: vec![1], max_score: 2, single_match: false };
        let log = AnswerLog::new(&path).unwrap();
        log.log("where \"exactly\"", &AnswerType::Location, &d, &Outcome::Answer("x".into()))
            .unwrap();

        let log = AnswerLog::new(&path).unwrap();
        log.log("who", &AnswerType::Person, &Diagnostics::default(), &Outcome::NoAnswer)
            .unwrap();

        let text = fs::read_to_string(log.csv_path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "\"where \"\"exactly\"\"\",\"LOCATION\",2,false,answer");
        assert_eq!(lines[2], "\"who\",\"PERSON\",0,false,no_answer");
    }
}
