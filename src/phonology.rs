use crate::raw_data::{CODAS, NUCLEI, ONSETS, TONES};
use crate::shape::{NucleusFilter, Shape, ShapeRule, ToneClass};
use crate::sounds::Inventory;
use crate::{SylError, SylResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use strum::IntoEnumIterator;

/// Phoneme tables plus the per-shape generation rules of one language variety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonology {
    pub inventory: Inventory,
    pub rules: Vec<ShapeRule>,
}

impl Phonology {
    /// The built-in tables: 24 plain and 17 labialized onsets, 14 nuclei,
    /// 3 nasal and 3 obstruent codas, 6 tones.
    pub fn builtin() -> SylResult<Self> {
        let tables = [ONSETS, NUCLEI, CODAS, TONES].map(str::as_bytes);
        let inventory = Inventory::parse_tables(tables)?;
        Ok(Self {
            inventory,
            rules: default_rules(),
        })
    }

    pub fn new(inventory: Inventory, rules: Vec<ShapeRule>) -> SylResult<Self> {
        let phonology = Self { inventory, rules };
        phonology.validate()?;
        Ok(phonology)
    }

    pub fn from_json_reader<R: io::Read>(reader: R) -> SylResult<Self> {
        let phonology: Self = serde_json::from_reader(reader)?;
        phonology.validate()?;
        Ok(phonology)
    }

    pub fn load(path: &Path) -> SylResult<Self> {
        let file = File::open(path)?;
        log::debug!("loading phonology from {}", path.display());
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn to_json(&self) -> SylResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rule(&self, shape: Shape) -> Option<&ShapeRule> {
        self.rules.iter().find(|r| r.shape == shape)
    }

    /// Every shape needs exactly one rule, and the glides must not double as
    /// nasal or obstruent codas, or the shapes would overlap.
    pub fn validate(&self) -> SylResult<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.shape) {
                return Err(SylError::GenericParseError(format!(
                    "Duplicate rule for {}",
                    rule.shape
                )));
            }
        }
        if let Some(missing) = Shape::iter().find(|s| !seen.contains(s)) {
            return Err(SylError::GenericParseError(format!(
                "No rule for {}",
                missing
            )));
        }
        let inv = &self.inventory;
        if inv.glide == inv.palatal_glide {
            return Err(SylError::GenericParseError(
                "Glide and palatal glide are the same symbol".to_string(),
            ));
        }
        for glide in [&inv.glide, &inv.palatal_glide] {
            if inv.nasal_codas.contains(glide) || inv.obstruent_codas.contains(glide) {
                return Err(SylError::GenericParseError(format!(
                    "Glide {} is also listed as a consonantal coda",
                    glide
                )));
            }
        }
        if let Some(both) = inv.onsets.iter().find(|o| inv.labialized_onsets.contains(o)) {
            return Err(SylError::GenericParseError(format!(
                "Onset {} is both plain and labialized",
                both
            )));
        }
        Ok(())
    }
}

pub fn default_rules() -> Vec<ShapeRule> {
    use NucleusFilter::*;
    use Shape::*;
    let symbols = |s: &[&str]| s.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    vec![
        ShapeRule::new(CV, Open, ToneClass::All),
        ShapeRule::new(CwV, OpenLabializable, ToneClass::All),
        ShapeRule::new(CVN, All, ToneClass::All),
        ShapeRule::new(CwVN, Labializable, ToneClass::All),
        ShapeRule::new(CVT, All, ToneClass::Checked),
        ShapeRule::new(CwVT, Labializable, ToneClass::Checked),
        // front vowels do not take a palatal offglide
        ShapeRule::new(CVj, Excluding(symbols(&["i", "iə", "e", "ɛ"])), ToneClass::All),
        ShapeRule::new(CwVj, Only(symbols(&["a", "aː", "ə", "əː"])), ToneClass::All),
        // back and rounded vowels do not take a labial offglide
        ShapeRule::new(
            CVw,
            Excluding(symbols(&["əː", "ɔ", "o", "u", "uə"])),
            ToneClass::All,
        ),
        ShapeRule::new(
            CwVw,
            Only(symbols(&["aː", "a", "ɛ", "e", "ə", "i", "iə"])),
            ToneClass::All,
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_builtin_is_valid() {
        let phonology = Phonology::builtin().unwrap();
        assert!(phonology.validate().is_ok());
        assert_eq!(phonology.rules.len(), 10);
    }

    #[test]
    fn t_json_round_trip() {
        let phonology = Phonology::builtin().unwrap();
        let json = phonology.to_json().unwrap();
        let back = Phonology::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(back, phonology);
    }

    #[test]
    fn t_duplicate_rule_rejected() {
        let mut phonology = Phonology::builtin().unwrap();
        phonology.rules[1].shape = Shape::CV;
        assert!(matches!(
            phonology.validate(),
            Err(SylError::GenericParseError(_))
        ));
    }

    #[test]
    fn t_glide_as_nasal_rejected() {
        let mut phonology = Phonology::builtin().unwrap();
        phonology.inventory.nasal_codas.push("j".to_string());
        assert!(phonology.validate().is_err());
    }

    #[test]
    fn t_bad_json_is_parse_error() {
        assert!(matches!(
            Phonology::from_json_reader("{\"inventory\": 3}".as_bytes()),
            Err(SylError::GenericParseError(_))
        ));
    }
}
