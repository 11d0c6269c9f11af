use crate::shape::{CodaClass, OnsetClass, ToneClass};
use crate::SylError::GenericParseError;
use crate::SylResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::io;

pub fn parse_csv_to_map<R: io::Read>(reader: R) -> SylResult<Vec<HashMap<String, String>>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = vec![];
    let headers = rdr.headers()?.clone();
    for result in rdr.records() {
        let record = result?;
        let mut map = HashMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            map.insert(header.to_string(), value.to_string());
        }
        records.push(map);
    }
    Ok(records)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PhonemeClass {
    Onset,
    LabializedOnset,
    Nucleus,
    Coda,
    Tone,
}

impl TryFrom<&str> for PhonemeClass {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use PhonemeClass::*;
        Ok(match value.to_ascii_lowercase().as_str() {
            "onset" => Onset,
            "labialized-onset" => LabializedOnset,
            "nucleus" => Nucleus,
            "coda" => Coda,
            "tone" => Tone,
            _ => return Err(()),
        })
    }
}

impl Display for PhonemeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PhonemeClass::Onset => "onset",
                PhonemeClass::LabializedOnset => "labialized-onset",
                PhonemeClass::Nucleus => "nucleus",
                PhonemeClass::Coda => "coda",
                PhonemeClass::Tone => "tone",
            }
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Nucleus barred from open syllables.
    ClosedOnly,
    /// Nucleus barred after a labialized onset.
    Unlabializable,
    Nasal,
    Obstruent,
    Glide,
    PalatalGlide,
    /// Tone allowed with an obstruent coda.
    Checked,
}

impl TryFrom<&str> for Feature {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use Feature::*;
        Ok(match value.to_ascii_lowercase().as_str() {
            "closed-only" => ClosedOnly,
            "unlabializable" => Unlabializable,
            "nasal" => Nasal,
            "obstruent" => Obstruent,
            "glide" => Glide,
            "palatal-glide" => PalatalGlide,
            "checked" => Checked,
            _ => return Err(()),
        })
    }
}

/// A single row of a phoneme table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phoneme {
    pub symbol: String,
    pub class: PhonemeClass,
    pub features: Vec<Feature>,
}

impl Phoneme {
    pub fn try_from_map(map: HashMap<String, String>) -> SylResult<Self> {
        let symbol = map
            .get("symbol")
            .ok_or(GenericParseError("No symbol defined".to_string()))?
            .trim()
            .to_owned();
        if symbol.is_empty() {
            return Err(GenericParseError("Empty symbol".to_string()));
        }
        let class = PhonemeClass::try_from(
            map.get("class")
                .ok_or(GenericParseError("No class defined".to_string()))?
                .trim(),
        )
        .map_err(|_| GenericParseError(format!("Could not parse class of {}", symbol)))?;
        let features = map
            .get("features")
            .map(|f| f.split_whitespace().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
            .map(|f| {
                Feature::try_from(f).map_err(|_| {
                    GenericParseError(format!("Unknown feature {} on {}", f, symbol))
                })
            })
            .collect::<SylResult<Vec<_>>>()?;
        Ok(Self {
            symbol,
            class,
            features,
        })
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

pub fn parse_phonemes<R: io::Read>(input: R) -> SylResult<Vec<Phoneme>> {
    parse_csv_to_map(input)?
        .into_iter()
        .map(Phoneme::try_from_map)
        .collect()
}

/// The phoneme-class tables of one language variety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub onsets: Vec<String>,
    pub labialized_onsets: Vec<String>,
    pub nuclei: Vec<String>,
    pub closed_only_nuclei: Vec<String>,
    pub unlabializable_nuclei: Vec<String>,
    pub nasal_codas: Vec<String>,
    pub obstruent_codas: Vec<String>,
    pub glide: String,
    pub palatal_glide: String,
    pub tones: Vec<String>,
    pub checked_tones: Vec<String>,
}

impl Inventory {
    pub fn from_phonemes(phonemes: &[Phoneme]) -> SylResult<Self> {
        use PhonemeClass::*;
        let with = |class: PhonemeClass, feature: Option<Feature>| {
            symbols_where(phonemes, |p| {
                p.class == class && feature.map(|f| p.has(f)).unwrap_or(true)
            })
        };
        let single = |feature: Feature| -> SylResult<String> {
            let found = with(Coda, Some(feature));
            match found.as_slice() {
                [s] => Ok(s.clone()),
                _ => Err(GenericParseError(format!(
                    "Expected exactly one {:?} coda, found {}",
                    feature,
                    found.len()
                ))),
            }
        };
        Ok(Self {
            onsets: with(Onset, None),
            labialized_onsets: with(LabializedOnset, None),
            nuclei: with(Nucleus, None),
            closed_only_nuclei: with(Nucleus, Some(Feature::ClosedOnly)),
            unlabializable_nuclei: with(Nucleus, Some(Feature::Unlabializable)),
            nasal_codas: with(Coda, Some(Feature::Nasal)),
            obstruent_codas: with(Coda, Some(Feature::Obstruent)),
            glide: single(Feature::Glide)?,
            palatal_glide: single(Feature::PalatalGlide)?,
            tones: with(Tone, None),
            checked_tones: with(Tone, Some(Feature::Checked)),
        })
    }

    /// Parses and concatenates several `symbol,class,features` tables.
    pub fn parse_tables<R: io::Read>(tables: impl IntoIterator<Item = R>) -> SylResult<Self> {
        let mut phonemes = vec![];
        for table in tables {
            phonemes.append(&mut parse_phonemes(table)?);
        }
        Self::from_phonemes(&phonemes)
    }

    /// Nuclei allowed in open (coda-less) syllables.
    pub fn open_nuclei(&self) -> Vec<&str> {
        self.nuclei_without(&self.closed_only_nuclei)
    }

    /// Nuclei allowed after a labialized onset.
    pub fn labializable_nuclei(&self) -> Vec<&str> {
        self.nuclei_without(&self.unlabializable_nuclei)
    }

    pub fn nuclei_without(&self, excluded: &[String]) -> Vec<&str> {
        self.nuclei
            .iter()
            .filter(|n| !excluded.contains(n))
            .map(|n| n.as_str())
            .collect()
    }

    pub fn onset_set(&self, class: OnsetClass) -> Vec<&str> {
        match class {
            OnsetClass::Plain => as_strs(&self.onsets),
            OnsetClass::Labialized => as_strs(&self.labialized_onsets),
        }
    }

    pub fn coda_set(&self, class: CodaClass) -> Vec<&str> {
        match class {
            CodaClass::Null => vec![""],
            CodaClass::Nasal => as_strs(&self.nasal_codas),
            CodaClass::Obstruent => as_strs(&self.obstruent_codas),
            CodaClass::PalatalGlide => vec![self.palatal_glide.as_str()],
            CodaClass::LabialGlide => vec![self.glide.as_str()],
        }
    }

    pub fn tone_set(&self, class: ToneClass) -> Vec<&str> {
        match class {
            ToneClass::All => as_strs(&self.tones),
            ToneClass::Checked => as_strs(&self.checked_tones),
        }
    }

    /// Coda class of a symbol; anything unrecognised counts as a null coda.
    pub fn coda_class(&self, coda: &str) -> CodaClass {
        if coda == self.glide {
            CodaClass::LabialGlide
        } else if coda == self.palatal_glide {
            CodaClass::PalatalGlide
        } else if self.obstruent_codas.iter().any(|c| c == coda) {
            CodaClass::Obstruent
        } else if self.nasal_codas.iter().any(|c| c == coda) {
            CodaClass::Nasal
        } else {
            CodaClass::Null
        }
    }

    pub fn is_onset(&self, symbol: &str) -> bool {
        self.onsets.iter().chain(&self.labialized_onsets).any(|o| o == symbol)
    }

    pub fn is_nucleus(&self, symbol: &str) -> bool {
        self.nuclei.iter().any(|n| n == symbol)
    }

    pub fn is_coda(&self, symbol: &str) -> bool {
        !symbol.is_empty() && self.coda_class(symbol) != CodaClass::Null
    }

    pub fn is_tone(&self, symbol: &str) -> bool {
        self.tones.iter().any(|t| t == symbol)
    }
}

fn symbols_where(phonemes: &[Phoneme], pred: impl Fn(&Phoneme) -> bool) -> Vec<String> {
    phonemes
        .iter()
        .filter(|&p| pred(p))
        .map(|p| p.symbol.clone())
        .collect()
}

fn as_strs(v: &[String]) -> Vec<&str> {
    v.iter().map(|s| s.as_str()).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::raw_data::{CODAS, NUCLEI, ONSETS, TONES};

    fn default_inventory() -> Inventory {
        Inventory::parse_tables([ONSETS, NUCLEI, CODAS, TONES].map(str::as_bytes)).unwrap()
    }

    #[test]
    fn t_default_table_sizes() {
        let inv = default_inventory();
        assert_eq!(inv.onsets.len(), 24);
        assert_eq!(inv.labialized_onsets.len(), 17);
        assert_eq!(inv.nuclei.len(), 14);
        assert_eq!(inv.open_nuclei().len(), 12);
        assert_eq!(inv.labializable_nuclei().len(), 8);
        assert_eq!(inv.nasal_codas, vec!["m", "n", "ŋ"]);
        assert_eq!(inv.obstruent_codas, vec!["p", "t", "k"]);
        assert_eq!(inv.tones.len(), 6);
        assert_eq!(inv.checked_tones, vec!["5", "6"]);
        assert_eq!(inv.glide, "w");
        assert_eq!(inv.palatal_glide, "j");
    }

    #[test]
    fn t_derived_sets_keep_order() {
        let inv = default_inventory();
        assert_eq!(
            inv.open_nuclei(),
            vec!["aː", "ɛ", "e", "əː", "ɔ", "o", "i", "ɨ", "u", "iə", "ɨə", "uə"]
        );
        assert_eq!(
            inv.labializable_nuclei(),
            vec!["aː", "a", "ɛ", "e", "ə", "əː", "i", "iə"]
        );
    }

    #[test]
    fn t_coda_class() {
        let inv = default_inventory();
        assert_eq!(inv.coda_class("w"), CodaClass::LabialGlide);
        assert_eq!(inv.coda_class("j"), CodaClass::PalatalGlide);
        assert_eq!(inv.coda_class("k"), CodaClass::Obstruent);
        assert_eq!(inv.coda_class("ŋ"), CodaClass::Nasal);
        assert_eq!(inv.coda_class(""), CodaClass::Null);
        assert_eq!(inv.coda_class("q"), CodaClass::Null);
        assert!(!inv.is_coda(""));
        assert!(inv.is_coda("j"));
    }

    #[test]
    fn t_unknown_class_fails() {
        let table = "symbol,class,features\nq,diphthong,\n";
        assert!(matches!(
            parse_phonemes(table.as_bytes()),
            Err(GenericParseError(_))
        ));
    }

    #[test]
    fn t_unknown_feature_fails() {
        let table = "symbol,class,features\na,nucleus,nasalized\n";
        assert!(parse_phonemes(table.as_bytes()).is_err());
    }

    #[test]
    fn t_missing_glide_fails() {
        let tables = [ONSETS, NUCLEI, TONES].map(str::as_bytes);
        assert!(Inventory::parse_tables(tables).is_err());
    }
}
