//! Writes small WordNet databases for tests.
//!
//! Synsets are declared by a key and referenced by key from pointers; byte
//! offsets are assigned when the files are written. Every offset field is
//! zero-padded to eight digits, so line lengths do not depend on the
//! offsets and a single layout pass is enough.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use lexis_core::PartOfSpeech;

use crate::dictionary::index_key;
use crate::parse::strip_adjective_marker;

const LICENSE_HEADER: &str = "  1 This is a test fixture, not the Princeton database.  \n  2 WordNet 3.0 Copyright 2006 by Princeton University.  All rights reserved.  \n";

struct FixturePointer {
    symbol: String,
    target: String,
    source_target: u16,
}

struct FixtureSynset {
    key: String,
    pos: PartOfSpeech,
    satellite: bool,
    lemmas: Vec<String>,
    pointers: Vec<FixturePointer>,
    gloss: String,
}

impl FixtureSynset {
    fn ss_type(&self) -> char {
        if self.satellite { 's' } else { self.pos.tag() }
    }
}

#[derive(Default)]
pub struct DictionaryFixture {
    synsets: Vec<FixtureSynset>,
    exceptions: Vec<(PartOfSpeech, String, Vec<String>)>,
}

impl DictionaryFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a synset. Lemmas may carry adjective markers such as `(p)`.
    pub fn synset(self, key: &str, pos: PartOfSpeech, lemmas: &[&str], gloss: &str) -> Self {
        self.push_synset(key, pos, false, lemmas, gloss)
    }

    /// Declare an adjective satellite synset (`ss_type` `s`)
    pub fn satellite(self, key: &str, lemmas: &[&str], gloss: &str) -> Self {
        self.push_synset(key, PartOfSpeech::Adjective, true, lemmas, gloss)
    }

    fn push_synset(
        mut self,
        key: &str,
        pos: PartOfSpeech,
        satellite: bool,
        lemmas: &[&str],
        gloss: &str,
    ) -> Self {
        self.synsets.push(FixtureSynset {
            key: key.to_string(),
            pos,
            satellite,
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
            pointers: Vec::new(),
            gloss: gloss.to_string(),
        });
        self
    }

    /// Synset-to-synset pointer from `from` to `to`
    pub fn pointer(self, from: &str, symbol: &str, to: &str) -> Self {
        self.lexical_pointer(from, symbol, to, 0, 0)
    }

    /// Word-to-word pointer between the 1-based word numbers of two synsets
    pub fn lexical_pointer(mut self, from: &str, symbol: &str, to: &str, source: u8, target: u8) -> Self {
        if let Some(synset) = self.synsets.iter_mut().find(|s| s.key == from) {
            synset.pointers.push(FixturePointer {
                symbol: symbol.to_string(),
                target: to.to_string(),
                source_target: (u16::from(source) << 8) | u16::from(target),
            });
        }
        self
    }

    pub fn exception(mut self, pos: PartOfSpeech, inflected: &str, bases: &[&str]) -> Self {
        self.exceptions.push((
            pos,
            inflected.to_string(),
            bases.iter().map(|b| b.to_string()).collect(),
        ));
        self
    }

    /// Write `index.*`, `data.*` and `*.exc` files into `dir`
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;

        let offsets = self.layout()?;

        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();
            fs::write(dir.join(format!("data.{suffix}")), self.render_data(pos, &offsets)?)?;
            fs::write(dir.join(format!("index.{suffix}")), self.render_index(pos, &offsets))?;

            let exceptions: BTreeMap<&str, &Vec<String>> = self
                .exceptions
                .iter()
                .filter(|(p, _, _)| *p == pos)
                .map(|(_, inflected, bases)| (inflected.as_str(), bases))
                .collect();
            if !exceptions.is_empty() {
                let mut text = String::new();
                for (inflected, bases) in exceptions {
                    let _ = writeln!(text, "{} {}", inflected, bases.join(" "));
                }
                fs::write(dir.join(format!("{suffix}.exc")), text)?;
            }
        }

        Ok(())
    }

    fn layout(&self) -> io::Result<HashMap<String, u64>> {
        let zeros: HashMap<String, u64> = self.synsets.iter().map(|s| (s.key.clone(), 0)).collect();
        let mut offsets = HashMap::new();
        let mut next: HashMap<PartOfSpeech, u64> = HashMap::new();

        for synset in &self.synsets {
            let offset = next
                .entry(synset.pos)
                .or_insert(LICENSE_HEADER.len() as u64);
            offsets.insert(synset.key.clone(), *offset);
            *offset += self.render_line(synset, &zeros)?.len() as u64;
        }

        Ok(offsets)
    }

    fn render_line(&self, synset: &FixtureSynset, offsets: &HashMap<String, u64>) -> io::Result<String> {
        let mut line = format!(
            "{:08} {:02} {} {:02x}",
            offsets[&synset.key],
            0,
            synset.ss_type(),
            synset.lemmas.len()
        );
        for lemma in &synset.lemmas {
            let _ = write!(line, " {lemma} 0");
        }

        let _ = write!(line, " {:03}", synset.pointers.len());
        for pointer in &synset.pointers {
            let target = self
                .synsets
                .iter()
                .find(|s| s.key == pointer.target)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("pointer from {} to unknown synset {}", synset.key, pointer.target),
                    )
                })?;
            let _ = write!(
                line,
                " {} {:08} {} {:04x}",
                pointer.symbol,
                offsets[&target.key],
                target.ss_type(),
                pointer.source_target
            );
        }

        if synset.pos == PartOfSpeech::Verb {
            line.push_str(" 01 + 02 00");
        }

        let _ = writeln!(line, " | {}  ", synset.gloss);
        Ok(line)
    }

    fn render_data(&self, pos: PartOfSpeech, offsets: &HashMap<String, u64>) -> io::Result<String> {
        let mut text = LICENSE_HEADER.to_string();
        for synset in self.synsets.iter().filter(|s| s.pos == pos) {
            text.push_str(&self.render_line(synset, offsets)?);
        }
        Ok(text)
    }

    fn render_index(&self, pos: PartOfSpeech, offsets: &HashMap<String, u64>) -> String {
        let mut entries: BTreeMap<String, (Vec<u64>, BTreeSet<&str>)> = BTreeMap::new();
        for synset in self.synsets.iter().filter(|s| s.pos == pos) {
            for lemma in &synset.lemmas {
                let (senses, symbols) = entries
                    .entry(index_key(strip_adjective_marker(lemma)))
                    .or_default();
                senses.push(offsets[&synset.key]);
                symbols.extend(synset.pointers.iter().map(|p| p.symbol.as_str()));
            }
        }

        let mut text = LICENSE_HEADER.to_string();
        for (lemma, (senses, symbols)) in entries {
            let _ = write!(text, "{} {} {} {}", lemma, pos.tag(), senses.len(), symbols.len());
            for symbol in &symbols {
                let _ = write!(text, " {symbol}");
            }
            let _ = write!(text, " {} 0", senses.len());
            for offset in &senses {
                let _ = write!(text, " {offset:08}");
            }
            text.push_str("  \n");
        }
        text
    }

    /// Small English database covering the behaviors exercised in tests
    pub fn sample() -> Self {
        use PartOfSpeech::{Adjective, Adverb, Noun, Verb};

        Self::new()
            // adjectives
            .synset("happy.a.01", Adjective, &["happy"], "enjoying or showing or marked by joy or pleasure")
            .satellite("felicitous.s.01", &["felicitous", "happy"], "marked by good fortune")
            .satellite("glad.s.02", &["glad", "happy"], "eagerly disposed to act or to be of service")
            .satellite("cheerful.s.01", &["cheerful(a)", "happy", "well-chosen(p)"], "well expressed and to the point")
            .synset("unhappy.a.01", Adjective, &["unhappy"], "experiencing or marked by or causing sadness")
            .pointer("happy.a.01", "&", "felicitous.s.01")
            .pointer("happy.a.01", "&", "glad.s.02")
            .pointer("happy.a.01", "&", "cheerful.s.01")
            .pointer("felicitous.s.01", "&", "happy.a.01")
            .lexical_pointer("happy.a.01", "!", "unhappy.a.01", 1, 1)
            .lexical_pointer("unhappy.a.01", "!", "happy.a.01", 1, 1)
            // nouns
            .synset("carnivore.n.01", Noun, &["carnivore"], "a terrestrial or aquatic flesh-eating mammal")
            .synset("canine.n.02", Noun, &["canine", "canid"], "any of various fissiped mammals")
            .synset("dog.n.01", Noun, &["dog", "domestic_dog", "Canis_familiaris"], "a member of the genus Canis")
            .synset("poodle.n.01", Noun, &["poodle", "poodle_dog"], "an intelligent dog with a heavy curly solid-colored coat")
            .synset("lassie.n.01", Noun, &["Lassie"], "a fictional collie")
            .synset("frump.n.01", Noun, &["frump", "dog"], "a dull unattractive unpleasant girl or woman")
            .synset("hot_dog.n.01", Noun, &["hot_dog", "red_hot", "frank"], "a frankfurter served hot on a bun")
            .synset("ice_cream.n.01", Noun, &["ice_cream", "icecream"], "frozen dessert containing cream and sugar")
            .synset("goose.n.01", Noun, &["goose"], "web-footed long-necked typically gregarious migratory aquatic birds")
            .synset("boxful.n.01", Noun, &["boxful", "boxload"], "the quantity contained in a box")
            .synset("saw.n.02", Noun, &["saw"], "hand tool having a toothed blade for cutting")
            .pointer("carnivore.n.01", "~", "canine.n.02")
            .pointer("canine.n.02", "@", "carnivore.n.01")
            .pointer("canine.n.02", "~", "dog.n.01")
            .pointer("dog.n.01", "@", "canine.n.02")
            .pointer("dog.n.01", "~", "poodle.n.01")
            .pointer("dog.n.01", "~i", "lassie.n.01")
            .pointer("poodle.n.01", "@", "dog.n.01")
            .pointer("lassie.n.01", "@i", "dog.n.01")
            // verbs
            .synset("pursue.v.02", Verb, &["pursue", "follow"], "follow in or as if in pursuit")
            .synset(
                "chase.v.01",
                Verb,
                &["chase", "chase_after", "trail", "tail", "tag", "give_chase", "dog", "go_after", "track"],
                "go after with the intent to catch",
            )
            .synset("travel_rapidly.v.01", Verb, &["travel_rapidly", "speed", "hurry", "zip"], "move fast")
            .synset("run.v.01", Verb, &["run"], "move fast by using one's feet")
            .synset("see.v.01", Verb, &["see"], "perceive by sight")
            .pointer("pursue.v.02", "~", "chase.v.01")
            .pointer("chase.v.01", "@", "pursue.v.02")
            .pointer("travel_rapidly.v.01", "~", "run.v.01")
            .pointer("run.v.01", "@", "travel_rapidly.v.01")
            // adverbs
            .synset(
                "quickly.r.01",
                Adverb,
                &["quickly", "rapidly", "speedily", "chop-chop", "apace"],
                "with rapid movements",
            )
            .exception(Noun, "geese", &["goose"])
            .exception(Verb, "ran", &["run"])
            .exception(Verb, "saw", &["see"])
            .exception(Adjective, "happier", &["happy"])
    }
}
