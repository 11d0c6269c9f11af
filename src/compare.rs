use crate::shape::{Shape, ShapeTable};
use crate::sounds::Inventory;
use crate::syllable::{AttestedSyllable, PossibleSyllable};
use std::collections::HashSet;

/// Attested syllables of one shape split by whether the generator predicts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub shape: Shape,
    pub possible: usize,
    pub expected: Vec<AttestedSyllable>,
    pub unpredicted: Vec<AttestedSyllable>,
    /// Possible syllables of this shape never seen in the corpus.
    pub unattested: usize,
}

impl Comparison {
    pub fn attested(&self) -> usize {
        self.expected.len() + self.unpredicted.len()
    }
}

/// Compares a classified corpus with the generated syllables, shape by shape.
/// The result holds one entry per shape, in report order.
///
/// A corpus syllable is matched on its onset unit (onset plus medial glide),
/// nucleus, coda and tone. Untoned syllables match any tone.
pub fn compare(
    possible: &ShapeTable<PossibleSyllable>,
    attested: &ShapeTable<AttestedSyllable>,
    inventory: &Inventory,
) -> Vec<Comparison> {
    possible
        .iter()
        .map(|(shape, generated)| compare_shape(shape, generated, attested.get(shape), inventory))
        .collect()
}

fn compare_shape(
    shape: Shape,
    generated: &[PossibleSyllable],
    attested: &[AttestedSyllable],
    inventory: &Inventory,
) -> Comparison {
    let toned = generated
        .iter()
        .map(|s| (s.onset.as_str(), s.nucleus.as_str(), s.coda.as_str(), s.tone.as_str()))
        .collect::<HashSet<_>>();
    let untoned = generated
        .iter()
        .map(|s| (s.onset.as_str(), s.nucleus.as_str(), s.coda.as_str()))
        .collect::<HashSet<_>>();

    let mut expected = vec![];
    let mut unpredicted = vec![];
    let mut seen_toned = HashSet::new();
    let mut seen_untoned = HashSet::new();
    for syllable in attested {
        let onset = syllable.onset_unit(&inventory.glide);
        let predicted = if syllable.is_toned() {
            toned.contains(&(
                onset.as_str(),
                syllable.nucleus.as_str(),
                syllable.coda.as_str(),
                syllable.tone.as_str(),
            ))
        } else {
            untoned.contains(&(
                onset.as_str(),
                syllable.nucleus.as_str(),
                syllable.coda.as_str(),
            ))
        };
        if predicted {
            if syllable.is_toned() {
                seen_toned.insert((
                    onset.clone(),
                    syllable.nucleus.clone(),
                    syllable.coda.clone(),
                    syllable.tone.clone(),
                ));
            } else {
                seen_untoned.insert((
                    onset.clone(),
                    syllable.nucleus.clone(),
                    syllable.coda.clone(),
                ));
            }
            expected.push(syllable.clone());
        } else {
            unpredicted.push(syllable.clone());
        }
    }

    let unattested = generated
        .iter()
        .filter(|s| {
            let key = (s.onset.clone(), s.nucleus.clone(), s.coda.clone());
            if seen_untoned.contains(&key) {
                return false;
            }
            let (o, n, c) = key;
            !seen_toned.contains(&(o, n, c, s.tone.clone()))
        })
        .count();

    if !unpredicted.is_empty() {
        log::debug!("{}: {} attested but unpredicted", shape, unpredicted.len());
    }
    Comparison {
        shape,
        possible: generated.len(),
        expected,
        unpredicted,
        unattested,
    }
}
