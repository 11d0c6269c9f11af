use crate::compare::Comparison;
use crate::shape::{Shape, ShapeTable};
use crate::SylResult;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

pub const POSSIBLE: &str = "possible";

/// One `source,shape,count` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub source: String,
    pub shape: Shape,
    pub count: usize,
}

impl Display for ReportLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.source, self.shape, self.count)
    }
}

pub fn report_lines<T>(source: &str, table: &ShapeTable<T>) -> Vec<ReportLine> {
    table
        .counts()
        .into_iter()
        .map(|(shape, count)| ReportLine {
            source: source.to_string(),
            shape,
            count,
        })
        .collect()
}

/// Rows for the attested syllables the generator does not predict,
/// labelled `<source>-unpredicted`.
pub fn unpredicted_lines(source: &str, comparisons: &[Comparison]) -> Vec<ReportLine> {
    comparisons
        .iter()
        .map(|c| ReportLine {
            source: format!("{}-unpredicted", source),
            shape: c.shape,
            count: c.unpredicted.len(),
        })
        .collect()
}

pub fn write_report<W: Write>(mut writer: W, lines: &[ReportLine]) -> SylResult<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// A labelled corpus file, given as `LABEL=PATH` or just `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub label: String,
    pub path: PathBuf,
}

impl FromStr for Corpus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, path) = match s.split_once('=') {
            Some((label, path)) => (label.to_string(), PathBuf::from(path)),
            None => {
                let path = PathBuf::from(s);
                let label = path
                    .file_stem()
                    .map(|f| f.to_string_lossy().to_string())
                    .ok_or(format!("No file name in {}", s))?;
                (label, path)
            }
        };
        if label.is_empty() || path.as_os_str().is_empty() {
            return Err(format!("Expected LABEL=PATH, got {}", s));
        }
        if label == POSSIBLE {
            return Err(format!("The label {} is reserved", POSSIBLE));
        }
        Ok(Self { label, path })
    }
}
