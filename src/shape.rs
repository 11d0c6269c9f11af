use crate::sounds::Inventory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Onset type crossed with coda type. Variant order is report order.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Shape {
    CV,
    CwV,
    CVN,
    CwVN,
    CVT,
    CwVT,
    CVj,
    CwVj,
    CVw,
    CwVw,
}

impl Shape {
    pub fn new(labialized: bool, coda: CodaClass) -> Self {
        use CodaClass::*;
        match (labialized, coda) {
            (false, Null) => Shape::CV,
            (true, Null) => Shape::CwV,
            (false, Nasal) => Shape::CVN,
            (true, Nasal) => Shape::CwVN,
            (false, Obstruent) => Shape::CVT,
            (true, Obstruent) => Shape::CwVT,
            (false, PalatalGlide) => Shape::CVj,
            (true, PalatalGlide) => Shape::CwVj,
            (false, LabialGlide) => Shape::CVw,
            (true, LabialGlide) => Shape::CwVw,
        }
    }

    pub fn onset_class(&self) -> OnsetClass {
        use Shape::*;
        match self {
            CV | CVN | CVT | CVj | CVw => OnsetClass::Plain,
            CwV | CwVN | CwVT | CwVj | CwVw => OnsetClass::Labialized,
        }
    }

    pub fn coda_class(&self) -> CodaClass {
        use Shape::*;
        match self {
            CV | CwV => CodaClass::Null,
            CVN | CwVN => CodaClass::Nasal,
            CVT | CwVT => CodaClass::Obstruent,
            CVj | CwVj => CodaClass::PalatalGlide,
            CVw | CwVw => CodaClass::LabialGlide,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnsetClass {
    Plain,
    Labialized,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodaClass {
    Null,
    Nasal,
    Obstruent,
    PalatalGlide,
    LabialGlide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneClass {
    All,
    /// Only the tones allowed with an obstruent coda.
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NucleusFilter {
    All,
    Open,
    Labializable,
    OpenLabializable,
    Excluding(Vec<String>),
    Only(Vec<String>),
}

impl NucleusFilter {
    pub fn resolve<'a>(&'a self, inventory: &'a Inventory) -> Vec<&'a str> {
        match self {
            NucleusFilter::All => inventory.nuclei.iter().map(|n| n.as_str()).collect(),
            NucleusFilter::Open => inventory.open_nuclei(),
            NucleusFilter::Labializable => inventory.labializable_nuclei(),
            NucleusFilter::OpenLabializable => inventory
                .labializable_nuclei()
                .into_iter()
                .filter(|n| !inventory.closed_only_nuclei.iter().any(|c| c == n))
                .collect(),
            NucleusFilter::Excluding(excluded) => inventory.nuclei_without(excluded),
            NucleusFilter::Only(only) => only.iter().map(|n| n.as_str()).collect(),
        }
    }
}

/// Generation rule for one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRule {
    pub shape: Shape,
    pub nuclei: NucleusFilter,
    pub tones: ToneClass,
}

impl ShapeRule {
    pub fn new(shape: Shape, nuclei: NucleusFilter, tones: ToneClass) -> Self {
        Self {
            shape,
            nuclei,
            tones,
        }
    }

    pub fn onsets<'a>(&self, inventory: &'a Inventory) -> Vec<&'a str> {
        inventory.onset_set(self.shape.onset_class())
    }

    pub fn codas<'a>(&self, inventory: &'a Inventory) -> Vec<&'a str> {
        inventory.coda_set(self.shape.coda_class())
    }
}

/// Ordered syllables per shape. Every shape is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTable<T> {
    inner: BTreeMap<Shape, Vec<T>>,
}

impl<T> Default for ShapeTable<T> {
    fn default() -> Self {
        Self {
            inner: Shape::iter().map(|s| (s, vec![])).collect(),
        }
    }
}

impl<T> ShapeTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape, value: T) {
        self.inner.entry(shape).or_default().push(value);
    }

    pub fn get(&self, shape: Shape) -> &[T] {
        self.inner.get(&shape).map(|v| v.as_slice()).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shape, &[T])> + '_ {
        self.inner.iter().map(|(s, v)| (*s, v.as_slice()))
    }

    pub fn count(&self, shape: Shape) -> usize {
        self.get(shape).len()
    }

    pub fn counts(&self) -> Vec<(Shape, usize)> {
        self.iter().map(|(s, v)| (s, v.len())).collect()
    }

    pub fn total(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }
}
