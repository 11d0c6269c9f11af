use crate::shape::{Shape, ShapeTable};
use crate::sounds::Inventory;
use crate::syllable::AttestedSyllable;
use crate::{SylError, SylResult};
use std::io;

/// Shape of an attested syllable.
///
/// Only the medial, the onset and the coda are looked at; the combination is
/// not checked against the phonotactic rules.
pub fn shape_of(syllable: &AttestedSyllable, inventory: &Inventory) -> Shape {
    let labialized = syllable.medial == inventory.glide || syllable.onset == inventory.glide;
    Shape::new(labialized, inventory.coda_class(&syllable.coda))
}

/// Builds a syllable from the fields of one `onset,medial,nucleus,coda[,tone]` record.
pub fn parse_record<S: AsRef<str>>(line: u64, fields: &[S]) -> SylResult<AttestedSyllable> {
    match fields {
        [o, m, n, c] => Ok(AttestedSyllable::new(
            o.as_ref(),
            m.as_ref(),
            n.as_ref(),
            c.as_ref(),
            "",
        )),
        [o, m, n, c, t] => Ok(AttestedSyllable::new(
            o.as_ref(),
            m.as_ref(),
            n.as_ref(),
            c.as_ref(),
            t.as_ref(),
        )),
        _ => Err(SylError::MalformedRecord {
            line,
            fields: fields.len(),
        }),
    }
}

/// Sorts raw corpus lines by shape. Blank lines are skipped; any other line
/// without 4 or 5 fields aborts the whole batch. Fields are trimmed and `"`
/// has no special meaning.
pub fn classify<I, S>(rows: I, inventory: &Inventory) -> SylResult<ShapeTable<AttestedSyllable>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ShapeTable::new();
    for (idx, row) in rows.into_iter().enumerate() {
        let row = row.as_ref().trim();
        if row.is_empty() {
            continue;
        }
        let fields = row.split(',').map(str::trim).collect::<Vec<_>>();
        let syllable = parse_record(idx as u64 + 1, &fields)?;
        table.push(shape_of(&syllable, inventory), syllable);
    }
    log::info!("classified {} attested syllables", table.total());
    Ok(table)
}

/// Same as [`classify`], reading comma-delimited records through `csv`.
pub fn classify_reader<R: io::Read>(
    reader: R,
    inventory: &Inventory,
) -> SylResult<ShapeTable<AttestedSyllable>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut table = ShapeTable::new();
    for result in rdr.records() {
        let record = result?;
        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields = record.iter().collect::<Vec<_>>();
        let syllable = parse_record(line, &fields)?;
        table.push(shape_of(&syllable, inventory), syllable);
    }
    log::info!("classified {} attested syllables", table.total());
    Ok(table)
}
