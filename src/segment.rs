use crate::sounds::Inventory;
use crate::syllable::AttestedSyllable;
use crate::{SylError, SylResult};
use smallvec::SmallVec;
use std::io::BufRead;

/// Reads one whitespace-separated transcription such as `k w a n 2` or `ʔ aː 1`.
///
/// The token after the onset is a medial glide only when it is the glide
/// symbol and the onset is a known onset. A final tone is recognised first;
/// the coda is then the token before it, if that is a coda symbol.
pub fn segment_line(
    line: u64,
    input: &str,
    inventory: &Inventory,
) -> SylResult<AttestedSyllable> {
    let tokens = input.split_whitespace().collect::<SmallVec<[&str; 5]>>();
    let malformed = |reason: &str| SylError::MalformedTranscription {
        line,
        reason: reason.to_string(),
    };
    if tokens.len() < 2 {
        return Err(malformed("expected at least an onset and a nucleus"));
    }
    if tokens.len() > 5 {
        return Err(malformed("more than five tokens"));
    }

    let onset = tokens[0];
    let (medial, nucleus_idx) = if tokens[1] == inventory.glide && inventory.is_onset(onset) {
        (inventory.glide.as_str(), 2)
    } else {
        ("", 1)
    };
    let nucleus = *tokens
        .get(nucleus_idx)
        .ok_or_else(|| malformed("medial glide without a nucleus"))?;

    let last = tokens.len() - 1;
    let (coda, tone) = if last > nucleus_idx && inventory.is_tone(tokens[last]) {
        let coda = if last - 1 > nucleus_idx && inventory.is_coda(tokens[last - 1]) {
            tokens[last - 1]
        } else {
            ""
        };
        (coda, tokens[last])
    } else if last > nucleus_idx && inventory.is_coda(tokens[last]) {
        (tokens[last], "")
    } else {
        ("", "")
    };

    let used = nucleus_idx + 1 + usize::from(!coda.is_empty()) + usize::from(!tone.is_empty());
    if used != tokens.len() {
        log::warn!(
            "line {}: ignoring {} unrecognised token(s) in '{}'",
            line,
            tokens.len() - used,
            input.trim()
        );
    }
    if !inventory.is_nucleus(nucleus) {
        log::warn!("line {}: unknown nucleus {}", line, nucleus);
    }
    Ok(AttestedSyllable::new(onset, medial, nucleus, coda, tone))
}

/// Segments every non-blank line, stopping at the first malformed one.
pub fn segment_reader<R: BufRead>(
    reader: R,
    inventory: &Inventory,
) -> SylResult<Vec<AttestedSyllable>> {
    let mut result = vec![];
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        result.push(segment_line(idx as u64 + 1, &line, inventory)?);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::phonology::Phonology;

    fn seg(input: &str) -> SylResult<AttestedSyllable> {
        segment_line(1, input, &Phonology::builtin().unwrap().inventory)
    }

    fn record(input: &str) -> String {
        seg(input).unwrap().to_record()
    }

    #[test]
    fn t_toned_with_medial_and_coda() {
        assert_eq!(record("k w a n 2"), "k,w,a,n,2");
    }

    #[test]
    fn t_open_toned() {
        assert_eq!(record("ʔ aː 1"), "ʔ,,aː,,1");
    }

    #[test]
    fn t_glide_onset_is_not_medial() {
        assert_eq!(record("w i j 3"), "w,,i,j,3");
    }

    #[test]
    fn t_glide_after_unknown_onset_is_nucleus() {
        assert_eq!(record("p w 1"), "p,,w,,1");
    }

    #[test]
    fn t_untoned() {
        assert_eq!(record("t a k"), "t,,a,k");
        assert_eq!(record("t aː"), "t,,aː,");
    }

    #[test]
    fn t_glide_codas() {
        assert_eq!(record("t a w 4"), "t,,a,w,4");
        assert_eq!(record("l a j 6"), "l,,a,j,6");
    }

    #[test]
    fn t_unknown_tone_kept_out() {
        // "7" is no tone, so the coda before it is not read either
        assert_eq!(record("ʔ a t 7"), "ʔ,,a,");
    }

    #[test]
    fn t_unrecognised_tokens_dropped() {
        // only a warning; the nucleus and tone still make a record
        assert_eq!(record("t a x y 1"), "t,,a,,1");
        assert_eq!(record("t a x n 1"), "t,,a,n,1");
    }

    #[test]
    fn t_too_few_tokens() {
        assert!(matches!(
            seg("ʔ"),
            Err(SylError::MalformedTranscription { line: 1, .. })
        ));
        assert!(seg("k w").is_err());
    }

    #[test]
    fn t_too_many_tokens() {
        assert!(seg("k w a n 2 3").is_err());
    }

    #[test]
    fn t_reader_stops_on_bad_line() {
        let inv = Phonology::builtin().unwrap().inventory;
        let input = "k w a n 2\n\nʔ aː 1\n";
        let parsed = segment_reader(input.as_bytes(), &inv).unwrap();
        assert_eq!(parsed.len(), 2);

        let bad = "k w a n 2\nx\n";
        assert_eq!(
            segment_reader(bad.as_bytes(), &inv),
            Err(SylError::MalformedTranscription {
                line: 2,
                reason: "expected at least an onset and a nucleus".to_string()
            })
        );
    }
}
