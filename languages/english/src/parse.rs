//! Line parsers for the WordNet database files.
//!
//! `index.<pos>`: `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...`
//!
//! `data.<pos>`: `offset lex_filenum ss_type w_cnt [word lex_id...] p_cnt
//! [symbol offset pos source/target...] [frames] | gloss`, where `w_cnt`,
//! `lex_id` and `source/target` are hexadecimal.
//!
//! `<pos>.exc`: `inflected base [base...]`

use std::str::{FromStr, SplitWhitespace};

use lexis_core::{IndexEntry, PartOfSpeech, Pointer, Synset, SynsetId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RecordError(String);

impl RecordError {
    fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// License lines at the top of every index and data file start with two spaces
pub fn is_header_line(line: &str) -> bool {
    line.starts_with("  ")
}

/// Version number from a license header such as `WordNet 3.0 Copyright ...`
pub fn detect_version<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<String> {
    lines
        .into_iter()
        .take_while(|line| is_header_line(line))
        .find_map(|line| {
            let mut words = line.split_whitespace();
            while let Some(word) = words.next() {
                if word == "WordNet" {
                    if let Some(version) = words.next() {
                        if version.starts_with(|c: char| c.is_ascii_digit()) {
                            return Some(version.trim_end_matches(['.', ',']).to_string());
                        }
                    }
                }
            }
            None
        })
}

/// Drop the syntactic marker WordNet appends to some adjectives: `(a)`, `(p)`, `(ip)`
pub fn strip_adjective_marker(word: &str) -> &str {
    match word.find('(') {
        Some(at) if at > 0 && word.ends_with(')') => &word[..at],
        _ => word,
    }
}

struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_str(&mut self, name: &str) -> Result<&'a str, RecordError> {
        self.inner
            .next()
            .ok_or_else(|| RecordError::new(format!("missing {name}")))
    }

    fn next_parse<T: FromStr>(&mut self, name: &str) -> Result<T, RecordError> {
        let raw = self.next_str(name)?;
        raw.parse()
            .map_err(|_| RecordError::new(format!("invalid {name}: {raw}")))
    }

    fn next_hex(&mut self, name: &str) -> Result<u32, RecordError> {
        let raw = self.next_str(name)?;
        u32::from_str_radix(raw, 16)
            .map_err(|_| RecordError::new(format!("invalid {name}: {raw}")))
    }

    fn next_pos(&mut self, name: &str) -> Result<PartOfSpeech, RecordError> {
        let raw = self.next_str(name)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => PartOfSpeech::from_tag(tag)
                .ok_or_else(|| RecordError::new(format!("invalid {name}: {raw}"))),
            _ => Err(RecordError::new(format!("invalid {name}: {raw}"))),
        }
    }
}

pub fn parse_index_line(line: &str) -> Result<IndexEntry, RecordError> {
    let mut fields = Fields::new(line);

    let lemma = fields.next_str("lemma")?.to_string();
    let pos = fields.next_pos("pos")?;
    let synset_count: usize = fields.next_parse("synset_cnt")?;
    let pointer_count: usize = fields.next_parse("p_cnt")?;

    let pointer_symbols = (0..pointer_count)
        .map(|_| fields.next_str("ptr_symbol").map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    let _sense_count: usize = fields.next_parse("sense_cnt")?;
    let tagged_sense_count: u32 = fields.next_parse("tagsense_cnt")?;

    let synsets = (0..synset_count)
        .map(|_| {
            fields
                .next_parse::<u64>("synset_offset")
                .map(|offset| SynsetId::new(pos, offset))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IndexEntry {
        lemma,
        pos,
        pointer_symbols,
        tagged_sense_count,
        synsets,
    })
}

pub fn parse_data_line(line: &str) -> Result<Synset, RecordError> {
    let (body, gloss) = match line.split_once('|') {
        Some((body, gloss)) => (body, gloss.trim()),
        None => (line, ""),
    };
    let mut fields = Fields::new(body);

    let offset: u64 = fields.next_parse("synset_offset")?;
    let lex_file: u8 = fields.next_parse("lex_filenum")?;
    let pos = fields.next_pos("ss_type")?;
    let word_count = fields.next_hex("w_cnt")?;

    // counts come from the file; short records fail on the missing field
    let mut lemmas = Vec::new();
    for _ in 0..word_count {
        let word = fields.next_str("word")?;
        fields.next_hex("lex_id")?;
        lemmas.push(strip_adjective_marker(word).to_string());
    }

    let pointer_count: usize = fields.next_parse("p_cnt")?;
    let mut pointers = Vec::new();
    for _ in 0..pointer_count {
        let symbol = fields.next_str("pointer_symbol")?.to_string();
        let target_offset: u64 = fields.next_parse("pointer offset")?;
        let target_pos = fields.next_pos("pointer pos")?;
        let source_target = fields.next_hex("source/target")?;
        pointers.push(Pointer {
            symbol,
            target: SynsetId::new(target_pos, target_offset),
            source: (source_target >> 8) as u8,
            target_word: (source_target & 0xff) as u8,
        });
    }

    // verb frames follow the pointers and are not needed

    Ok(Synset {
        id: SynsetId::new(pos, offset),
        lex_file,
        lemmas,
        pointers,
        gloss: gloss.to_string(),
    })
}

pub fn parse_exception_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut fields = line.split_whitespace();
    let inflected = fields.next()?.to_string();
    let bases: Vec<String> = fields.map(str::to_string).collect();
    if bases.is_empty() {
        return None;
    }
    Some((inflected, bases))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_line() {
        let entry = parse_index_line("dog n 2 4 @ ~ #m %p 2 1 02084071 10114209  ").unwrap();

        assert_eq!(entry.lemma, "dog");
        assert_eq!(entry.pos, PartOfSpeech::Noun);
        assert_eq!(entry.pointer_symbols, vec!["@", "~", "#m", "%p"]);
        assert_eq!(entry.tagged_sense_count, 1);
        assert_eq!(
            entry.synsets,
            vec![
                SynsetId::new(PartOfSpeech::Noun, 2084071),
                SynsetId::new(PartOfSpeech::Noun, 10114209),
            ]
        );
    }

    #[test]
    fn test_parse_index_line_truncated() {
        let err = parse_index_line("dog n 2 0 2 1 02084071").unwrap_err();
        assert_eq!(err.to_string(), "missing synset_offset");

        let err = parse_index_line("dog q 1 0 1 0 02084071").unwrap_err();
        assert_eq!(err.to_string(), "invalid pos: q");
    }

    #[test]
    fn test_parse_data_line() {
        let line = "02084071 05 n 03 dog 0 domestic_dog 0 Canis_familiaris 0 003 \
                    @ 02083346 n 0000 ~ 01322604 n 0000 ! 02084442 n 0101 \
                    | a member of the genus Canis  ";
        let synset = parse_data_line(line).unwrap();

        assert_eq!(synset.id, SynsetId::new(PartOfSpeech::Noun, 2084071));
        assert_eq!(synset.lex_file, 5);
        assert_eq!(synset.lemmas, vec!["dog", "domestic_dog", "Canis_familiaris"]);
        assert_eq!(synset.pointers.len(), 3);
        assert!(synset.pointers[0].is_semantic());
        assert_eq!(synset.pointers[2].source, 1);
        assert_eq!(synset.pointers[2].target_word, 1);
        assert!(!synset.pointers[2].is_semantic());
        assert_eq!(synset.gloss, "a member of the genus Canis");
    }

    #[test]
    fn test_parse_data_line_satellite_with_markers() {
        let line = "01149494 00 s 02 felicitous(a) 0 happy(p) 1 001 & 01148283 a 0000 | marked by good fortune";
        let synset = parse_data_line(line).unwrap();

        assert_eq!(synset.id.pos, PartOfSpeech::Adjective);
        assert_eq!(synset.lemmas, vec!["felicitous", "happy"]);
        assert_eq!(synset.pointers[0].target.pos, PartOfSpeech::Adjective);
    }

    #[test]
    fn test_parse_data_line_hex_word_count_and_verb_frames() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i} 0")).collect();
        let line = format!(
            "00001740 29 v 10 {} 000 01 + 02 00 | sixteen members",
            words.join(" ")
        );
        let synset = parse_data_line(&line).unwrap();

        assert_eq!(synset.lemmas.len(), 16);
        assert!(synset.pointers.is_empty());
        assert_eq!(synset.gloss, "sixteen members");
    }

    #[test]
    fn test_parse_data_line_oversized_counts() {
        let err =
            parse_data_line("00000100 05 n 01 dog 0 18446744073709551615 @ 00000200 n 0000 | x")
                .unwrap_err();
        assert_eq!(err.to_string(), "missing pointer_symbol");

        let err = parse_data_line("00000100 05 n ffffffff dog 0 000 | x").unwrap_err();
        assert_eq!(err.to_string(), "missing lex_id");
    }

    #[test]
    fn test_parse_exception_line() {
        assert_eq!(
            parse_exception_line("ran run"),
            Some(("ran".to_string(), vec!["run".to_string()]))
        );
        assert_eq!(
            parse_exception_line("axes ax axis"),
            Some((
                "axes".to_string(),
                vec!["ax".to_string(), "axis".to_string()]
            ))
        );
        assert_eq!(parse_exception_line("lonely"), None);
        assert_eq!(parse_exception_line(""), None);
    }

    #[test]
    fn test_header_and_version() {
        let text = "  1 This software and database is being provided to you\n  2 WordNet 3.0 Copyright 2006 by Princeton University.\na 1 0 1 0 00000000\n";
        assert!(is_header_line(text.lines().next().unwrap()));
        assert_eq!(detect_version(text.lines()), Some("3.0".to_string()));
        assert_eq!(detect_version("dog n 1 0 1 0 00000000".lines()), None);
    }

    #[test]
    fn test_strip_adjective_marker() {
        assert_eq!(strip_adjective_marker("happy(p)"), "happy");
        assert_eq!(strip_adjective_marker("galore(ip)"), "galore");
        assert_eq!(strip_adjective_marker("happy"), "happy");
        assert_eq!(strip_adjective_marker("(a)"), "(a)");
    }
}
