//! Rendering of statistics and word structure records

use super::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tamilseg_core::{Statistics, WordStructure};

/// Statistics for one input source
#[derive(Debug, Serialize)]
pub struct StatisticsReport<'a> {
    /// Display name of the source
    pub source: &'a str,
    /// Computed statistics
    pub statistics: Statistics,
}

/// Structure of one word
#[derive(Debug, Serialize)]
pub struct StructureReport<'a> {
    /// The analyzed word
    pub word: &'a str,
    /// Its structure
    #[serde(flatten)]
    pub structure: WordStructure<'a>,
}

fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn statistics_rows(stats: &Statistics) -> [(&'static str, String); 13] {
    [
        ("total_characters", stats.total_characters.to_string()),
        (
            "in_script_characters",
            stats.in_script_characters.to_string(),
        ),
        ("words", stats.words.to_string()),
        ("in_script_words", stats.in_script_words.to_string()),
        ("sentences", stats.sentences.to_string()),
        ("syllables", stats.syllables.to_string()),
        (
            "average_word_length",
            format!("{:.2}", stats.average_word_length),
        ),
        (
            "average_sentence_length",
            format!("{:.2}", stats.average_sentence_length),
        ),
        (
            "average_syllables_per_word",
            format!("{:.2}", stats.average_syllables_per_word),
        ),
        ("conjunct_words", stats.conjunct_words.to_string()),
        (
            "conjunct_word_percentage",
            format!("{:.2}", stats.conjunct_word_percentage),
        ),
        ("vowel_mark_words", stats.vowel_mark_words.to_string()),
        (
            "vowel_mark_word_percentage",
            format!("{:.2}", stats.vowel_mark_word_percentage),
        ),
    ]
}

/// Write statistics for every source
pub fn write_statistics<W: Write + ?Sized>(
    writer: &mut W,
    format: OutputFormat,
    reports: &[StatisticsReport<'_>],
    pretty_json: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, reports, pretty_json)?,
        OutputFormat::Text => {
            for report in reports {
                writeln!(writer, "== {} ==", report.source)?;
                for (name, value) in statistics_rows(&report.statistics) {
                    writeln!(writer, "{name}: {value}")?;
                }
            }
        }
        OutputFormat::Markdown => {
            for report in reports {
                writeln!(writer, "## {}", report.source)?;
                writeln!(writer)?;
                writeln!(writer, "| Metric | Value |")?;
                writeln!(writer, "|---|---|")?;
                for (name, value) in statistics_rows(&report.statistics) {
                    writeln!(writer, "| {name} | {value} |")?;
                }
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Write one record per analyzed word
pub fn write_structures<W: Write + ?Sized>(
    writer: &mut W,
    format: OutputFormat,
    reports: &[StructureReport<'_>],
    pretty_json: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, reports, pretty_json)?,
        OutputFormat::Text => {
            for report in reports {
                let s = &report.structure;
                writeln!(
                    writer,
                    "{}\tgraphemes={}\tsyllables={}\tconjunct={}\tvowel_mark={}",
                    report.word,
                    join_units(s.graphemes.iter().map(|g| g.text)),
                    join_units(s.syllables.iter().map(|y| y.text)),
                    yes_no(s.has_conjunct),
                    yes_no(s.has_vowel_mark),
                )?;
            }
        }
        OutputFormat::Markdown => {
            writeln!(
                writer,
                "| Word | Graphemes | Syllables | Conjunct | Vowel mark |"
            )?;
            writeln!(writer, "|---|---|---|---|---|")?;
            for report in reports {
                let s = &report.structure;
                writeln!(
                    writer,
                    "| {} | {} | {} | {} | {} |",
                    report.word,
                    s.grapheme_count(),
                    s.syllable_count(),
                    yes_no(s.has_conjunct),
                    yes_no(s.has_vowel_mark),
                )?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn join_units<'a>(units: impl Iterator<Item = &'a str>) -> String {
    units.collect::<Vec<_>>().join("|")
}
