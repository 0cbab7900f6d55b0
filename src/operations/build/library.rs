use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, info};

use super::stroke_set::BuildStrokeSet;
use crate::config::CanvasConfig;
use crate::geometry::{CharacterStrokeSet, RawCharacterRecord};

/// Stroke set of one character together with its identifying fields and
/// the raw record it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStrokes {
    pub character: char,
    /// Unicode scalar value of `character`.
    pub unicode: u32,
    /// `unicode` formatted as `U+XXXX`.
    pub unicode_hex: String,
    /// Number of descriptors produced; may be lower than the raw stroke count.
    pub total_strokes: usize,
    pub strokes: CharacterStrokeSet,
    /// The raw character record, as read.
    pub raw_char_data: Value,
}

impl CharacterStrokes {
    /// Creates an entry, deriving the code point fields and stroke count.
    #[must_use]
    pub fn new(character: char, strokes: CharacterStrokeSet, raw_char_data: Value) -> Self {
        let unicode = u32::from(character);
        Self {
            character,
            unicode,
            unicode_hex: format!("U+{unicode:04X}"),
            total_strokes: strokes.len(),
            strokes,
            raw_char_data,
        }
    }
}

/// Stroke sets for a batch of characters.
///
/// `characters` serializes as an object keyed by character, in request
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeLibrary {
    pub total_characters: usize,
    pub successful_characters: usize,
    pub failed_characters: usize,
    /// Raw strokes across all characters that produced no descriptor.
    pub dropped_strokes: usize,
    /// Built characters, in request order.
    #[serde(serialize_with = "serialize_by_character")]
    pub characters: Vec<CharacterStrokes>,
    /// Requested characters with no raw record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_character_list: Vec<char>,
}

impl StrokeLibrary {
    /// Returns the entry for `character`, if it was built.
    #[must_use]
    pub fn get(&self, character: char) -> Option<&CharacterStrokes> {
        self.characters.iter().find(|c| c.character == character)
    }
}

fn serialize_by_character<S>(
    characters: &[CharacterStrokes],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(characters.iter().map(|c| (c.character, c)))
}

/// Picks the raw records of the wanted characters out of a record stream.
///
/// The first record seen for each character wins. Records whose `character`
/// is not exactly one `char` are ignored. Consumption stops as soon as every
/// wanted character has been found.
#[must_use]
pub fn index_records<I>(records: I, wanted: &[char]) -> HashMap<char, RawCharacterRecord>
where
    I: IntoIterator<Item = RawCharacterRecord>,
{
    let wanted: HashSet<char> = wanted.iter().copied().collect();
    let mut found = HashMap::with_capacity(wanted.len());
    for record in records {
        let Some(c) = record.hanzi() else {
            continue;
        };
        if !wanted.contains(&c) {
            continue;
        }
        if let Entry::Vacant(slot) = found.entry(c) {
            slot.insert(record);
            if found.len() == wanted.len() {
                break;
            }
        }
    }
    debug!(wanted = wanted.len(), found = found.len(), "indexed raw records");
    found
}

/// Builds stroke sets for a list of characters.
///
/// Characters without a raw record are reported as failed; they never abort
/// the batch. The list is expected to hold distinct characters, such as the
/// output of [`unique_hanzi`](super::unique_hanzi).
pub struct BuildStrokeLibrary<'a> {
    characters: &'a [char],
    records: &'a HashMap<char, RawCharacterRecord>,
    config: &'a CanvasConfig,
}

impl<'a> BuildStrokeLibrary<'a> {
    /// Creates a new `BuildStrokeLibrary` operation.
    #[must_use]
    pub fn new(
        characters: &'a [char],
        records: &'a HashMap<char, RawCharacterRecord>,
        config: &'a CanvasConfig,
    ) -> Self {
        Self {
            characters,
            records,
            config,
        }
    }

    /// Executes the build.
    #[must_use]
    pub fn execute(&self) -> StrokeLibrary {
        let mut library = StrokeLibrary {
            total_characters: self.characters.len(),
            ..StrokeLibrary::default()
        };

        for &character in self.characters {
            let Some(record) = self.records.get(&character) else {
                debug!(%character, "no raw record for character");
                library.failed_character_list.push(character);
                continue;
            };
            let strokes = BuildStrokeSet::new(record, self.config).execute();
            library.dropped_strokes += record.strokes.len() - strokes.len();
            library.characters.push(CharacterStrokes::new(
                character,
                strokes,
                record.raw_value().clone(),
            ));
        }

        library.successful_characters = library.characters.len();
        library.failed_characters = library.failed_character_list.len();
        info!(
            total = library.total_characters,
            successful = library.successful_characters,
            failed = library.failed_characters,
            dropped_strokes = library.dropped_strokes,
            "built stroke library"
        );
        library
    }
}
