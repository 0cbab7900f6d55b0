//! Builds stroke descriptors from newline-delimited character records.
//!
//! Usage:
//! ```text
//! cargo run --example normalize -- 床前明月光 < graphics.txt > strokes.json
//! ```
//!
//! Every line on stdin is one raw character record. Lines that are not valid
//! UTF-8 or not valid records are skipped with a warning. The argument text
//! selects which characters to build; without it, every record on stdin is
//! built.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;
use std::io::{self, BufRead, Write};

use hanzi_strokes::{
    index_records, unique_hanzi, BuildStrokeLibrary, CanvasConfig, RawCharacterRecord,
};
use tracing::warn;

/// Yields numbered lines, skipping lines that are not valid UTF-8.
///
/// A line with invalid UTF-8 is consumed by the reader, so reading goes on
/// after it. Any other read error ends the stream.
fn readable_lines<I>(lines: I) -> impl Iterator<Item = (usize, String)>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines
        .enumerate()
        .map_while(|(line_no, line)| match line {
            Ok(line) => Some(Some((line_no, line))),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(line = line_no + 1, "skipping line that is not valid UTF-8");
                Some(None)
            }
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "stopping at unreadable input");
                None
            }
        })
        .flatten()
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for hanzi_strokes.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hanzi_strokes=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hanzi_strokes=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let wanted_text = std::env::args().skip(1).collect::<Vec<_>>().join("");
    let config = CanvasConfig::default();

    let records = readable_lines(io::stdin().lock().lines())
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(line_no, line)| match RawCharacterRecord::from_json_str(&line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "skipping malformed record");
                None
            }
        });

    let (wanted, index): (Vec<char>, HashMap<char, RawCharacterRecord>) =
        if wanted_text.is_empty() {
            let mut wanted = Vec::new();
            let mut index = HashMap::new();
            for record in records {
                let Some(c) = record.hanzi() else {
                    continue;
                };
                if let Entry::Vacant(slot) = index.entry(c) {
                    wanted.push(c);
                    slot.insert(record);
                }
            }
            (wanted, index)
        } else {
            let wanted = unique_hanzi(&wanted_text);
            let index = index_records(records, &wanted);
            (wanted, index)
        };

    let library = BuildStrokeLibrary::new(&wanted, &index, &config).execute();

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &library)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"{\"a\": 1}\n\xff\xfe\n{\"b\": 2}\n";
        let lines: Vec<(usize, String)> = readable_lines(input.lines()).collect();
        assert_eq!(
            lines,
            vec![(0, "{\"a\": 1}".to_owned()), (2, "{\"b\": 2}".to_owned())]
        );
    }

    #[test]
    fn other_read_errors_end_the_stream() {
        let input = vec![
            Ok("first".to_owned()),
            Err(io::Error::other("disk gone")),
            Ok("never read".to_owned()),
        ];
        let lines: Vec<(usize, String)> = readable_lines(input.into_iter()).collect();
        assert_eq!(lines, vec![(0, "first".to_owned())]);
    }
}
