use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A syllable produced by the generator. An empty coda is a null coda.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PossibleSyllable {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: String,
}

impl PossibleSyllable {
    pub fn new(onset: &str, nucleus: &str, coda: &str, tone: &str) -> Self {
        Self {
            onset: onset.to_string(),
            nucleus: nucleus.to_string(),
            coda: coda.to_string(),
            tone: tone.to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 4] {
        [&self.onset, &self.nucleus, &self.coda, &self.tone]
    }
}

/// Space separated, empty slots left out.
impl Display for PossibleSyllable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_present(&self.fields()))
    }
}

/// A segmented corpus syllable. Tone is empty for untoned records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttestedSyllable {
    pub onset: String,
    pub medial: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: String,
}

impl AttestedSyllable {
    pub fn new(onset: &str, medial: &str, nucleus: &str, coda: &str, tone: &str) -> Self {
        Self {
            onset: onset.to_string(),
            medial: medial.to_string(),
            nucleus: nucleus.to_string(),
            coda: coda.to_string(),
            tone: tone.to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.onset,
            &self.medial,
            &self.nucleus,
            &self.coda,
            &self.tone,
        ]
    }

    pub fn is_toned(&self) -> bool {
        !self.tone.is_empty()
    }

    /// The onset together with its medial glide, e.g. `k` + `w` gives `kw`.
    /// A bare glide onset stays as it is.
    pub fn onset_unit(&self, glide: &str) -> String {
        if self.onset == glide {
            self.onset.clone()
        } else {
            format!("{}{}", self.onset, self.medial)
        }
    }

    /// The comma-delimited corpus form; four fields when untoned.
    pub fn to_record(&self) -> String {
        if self.is_toned() {
            self.fields().join(",")
        } else {
            self.fields()[..4].join(",")
        }
    }
}

impl Display for AttestedSyllable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_present(&self.fields()))
    }
}

fn join_present(fields: &[&str]) -> String {
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_display_skips_empty_slots() {
        assert_eq!(PossibleSyllable::new("ʔ", "aː", "", "1").to_string(), "ʔ aː 1");
        assert_eq!(
            AttestedSyllable::new("k", "w", "a", "n", "2").to_string(),
            "k w a n 2"
        );
    }

    #[test]
    fn t_record_field_count() {
        assert_eq!(
            AttestedSyllable::new("ʔ", "", "aː", "", "1").to_record(),
            "ʔ,,aː,,1"
        );
        assert_eq!(
            AttestedSyllable::new("t", "", "a", "k", "").to_record(),
            "t,,a,k"
        );
    }

    #[test]
    fn t_onset_unit() {
        assert_eq!(AttestedSyllable::new("k", "w", "a", "n", "2").onset_unit("w"), "kw");
        assert_eq!(AttestedSyllable::new("w", "", "i", "j", "3").onset_unit("w"), "w");
        assert_eq!(AttestedSyllable::new("t", "", "a", "", "1").onset_unit("w"), "t");
    }
}
