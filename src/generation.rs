use crate::phonology::Phonology;
use crate::shape::{Shape, ShapeRule, ShapeTable};
use crate::sounds::Inventory;
use crate::syllable::PossibleSyllable;
use itertools::iproduct;
use strum::IntoEnumIterator;

/// Every syllable the phonology allows, grouped by shape.
///
/// Within a shape the order is onset-major, then nucleus, coda and tone.
pub fn generate_possible_syllables(phonology: &Phonology) -> ShapeTable<PossibleSyllable> {
    let mut table = ShapeTable::new();
    for shape in Shape::iter() {
        let Some(rule) = phonology.rule(shape) else {
            log::warn!("no generation rule for {}", shape);
            continue;
        };
        let syllables = expand_rule(rule, &phonology.inventory);
        log::debug!("{}: {} possible syllables", shape, syllables.len());
        for syllable in syllables {
            table.push(shape, syllable);
        }
    }
    table
}

pub fn expand_rule(rule: &ShapeRule, inventory: &Inventory) -> Vec<PossibleSyllable> {
    let onsets = rule.onsets(inventory);
    let nuclei = rule.nuclei.resolve(inventory);
    let codas = rule.codas(inventory);
    let tones = inventory.tone_set(rule.tones);
    iproduct!(onsets, nuclei, codas, tones)
        .map(|(o, n, c, t)| PossibleSyllable::new(o, n, c, t))
        .collect()
}

/// Size of the Cartesian product a rule spans, without building it.
pub fn rule_size(rule: &ShapeRule, inventory: &Inventory) -> usize {
    rule.onsets(inventory).len()
        * rule.nuclei.resolve(inventory).len()
        * rule.codas(inventory).len()
        * inventory.tone_set(rule.tones).len()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{NucleusFilter, ToneClass};
    use std::collections::HashSet;

    fn builtin() -> Phonology {
        Phonology::builtin().unwrap()
    }

    #[test]
    fn t_builtin_counts() {
        let table = generate_possible_syllables(&builtin());
        let counts = table
            .counts()
            .into_iter()
            .map(|(s, c)| (s.to_string(), c))
            .collect::<Vec<_>>();
        let expected = [
            ("CV", 1728),
            ("CwV", 612),
            ("CVN", 6048),
            ("CwVN", 2448),
            ("CVT", 2016),
            ("CwVT", 816),
            ("CVj", 1440),
            ("CwVj", 408),
            ("CVw", 1296),
            ("CwVw", 714),
        ]
        .map(|(s, c)| (s.to_string(), c));
        assert_eq!(counts, expected.to_vec());
    }

    #[test]
    fn t_checked_shape_uses_two_tones() {
        let phonology = builtin();
        let inv = &phonology.inventory;
        let table = generate_possible_syllables(&phonology);
        assert_eq!(
            table.count(Shape::CVT),
            inv.onsets.len() * inv.nuclei.len() * inv.obstruent_codas.len() * 2
        );
        assert!(table
            .get(Shape::CVT)
            .iter()
            .all(|s| s.tone == "5" || s.tone == "6"));
    }

    #[test]
    fn t_shapes_are_disjoint_and_sized_by_rules() {
        let phonology = builtin();
        let table = generate_possible_syllables(&phonology);
        let mut all = HashSet::new();
        for (shape, syllables) in table.iter() {
            let rule = phonology.rule(shape).unwrap();
            assert_eq!(syllables.len(), rule_size(rule, &phonology.inventory));
            for s in syllables {
                assert!(all.insert(s.clone()), "{} generated twice", s);
            }
        }
        let expected: usize = phonology
            .rules
            .iter()
            .map(|r| rule_size(r, &phonology.inventory))
            .sum();
        assert_eq!(all.len(), expected);
        assert_eq!(table.total(), expected);
    }

    #[test]
    fn t_deterministic() {
        let phonology = builtin();
        assert_eq!(
            generate_possible_syllables(&phonology),
            generate_possible_syllables(&phonology)
        );
    }

    #[test]
    fn t_onset_major_order() {
        let table = generate_possible_syllables(&builtin());
        let cv = table.get(Shape::CV);
        assert_eq!(cv[0], PossibleSyllable::new("ʔ", "aː", "", "1"));
        assert_eq!(cv[1], PossibleSyllable::new("ʔ", "aː", "", "2"));
        assert_eq!(cv[6], PossibleSyllable::new("ʔ", "ɛ", "", "1"));
        let cwvj = table.get(Shape::CwVj);
        assert_eq!(cwvj[0], PossibleSyllable::new("ɗw", "a", "j", "1"));
        assert_eq!(cwvj[6], PossibleSyllable::new("ɗw", "aː", "j", "1"));
    }

    #[test]
    fn t_open_syllables_exclude_short_vowels() {
        let table = generate_possible_syllables(&builtin());
        for shape in [Shape::CV, Shape::CwV] {
            assert!(table
                .get(shape)
                .iter()
                .all(|s| s.nucleus != "a" && s.nucleus != "ə" && s.coda.is_empty()));
        }
    }

    #[test]
    fn t_variant_phonology_is_independent() {
        let base = builtin();
        let mut inventory = base.inventory.clone();
        inventory.onsets.truncate(2);
        let mut rules = base.rules.clone();
        rules[0].nuclei = NucleusFilter::Only(vec!["aː".to_string()]);
        rules[0].tones = ToneClass::Checked;
        let variant = Phonology::new(inventory, rules).unwrap();

        let small = generate_possible_syllables(&variant);
        assert_eq!(small.count(Shape::CV), 4);
        assert_eq!(generate_possible_syllables(&base).count(Shape::CV), 1728);
    }
}
