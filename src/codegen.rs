//! Rendering suffix tables for the offline `suffixfsm` generator.

use std::fmt::{self, Write};
use std::io::Read;

use flate2::read::GzDecoder;

use crate::automaton::{ALPHABET_SIZE, SuffixTable, symbol};
use crate::error::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Serialized table, loadable with `SuffixTable::from_json`.
    Json,
    /// Rust constants plus a skeleton `match` over the final states.
    Rust,
}

/// Parse a newline-delimited suffix list. Blank lines and `#` comments are skipped.
pub fn parse_suffix_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse a suffix list, gunzipping it first when `gzipped` is set.
pub fn read_suffix_list<R: Read>(mut reader: R, gzipped: bool) -> Result<Vec<String>, TableError> {
    let mut text = String::new();
    if gzipped {
        GzDecoder::new(reader).read_to_string(&mut text)?;
    } else {
        reader.read_to_string(&mut text)?;
    }
    Ok(parse_suffix_list(&text))
}

pub fn render(
    table: &SuffixTable,
    suffixes: &[String],
    name: &str,
    format: TableFormat,
) -> Result<String, TableError> {
    match format {
        TableFormat::Json => table.to_json(),
        TableFormat::Rust => Ok(render_rust(table, suffixes, name)?),
    }
}

fn render_rust(table: &SuffixTable, suffixes: &[String], name: &str) -> Result<String, fmt::Error> {
    let prefix = name.to_uppercase();
    let states = table.state_count();
    let mut out = String::new();

    writeln!(out, "// Generated by suffixfsm from {} suffixes.", suffixes.len())?;
    writeln!(out)?;

    writeln!(
        out,
        "pub const {}_TRANSITIONS: [[u16; {}]; {}] = [",
        prefix, ALPHABET_SIZE, states
    )?;
    for state in 0..states {
        let mut row = [0u16; ALPHABET_SIZE];
        let mut labels = String::new();
        for (c, next) in table.edges(state) {
            if let Some(sym) = symbol(c) {
                row[sym] = next as u16;
            }
            labels.push(c);
        }
        let cells: Vec<String> = row.iter().map(u16::to_string).collect();
        write!(out, "    [{}],", cells.join(", "))?;
        if labels.is_empty() {
            writeln!(out, " // {}", state)?;
        } else {
            writeln!(out, " // {}: {}", state, labels)?;
        }
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "/// `(suffix length, rule index)` for each final state.")?;
    writeln!(out, "pub const {}_ACCEPTS: [Option<(u8, u16)>; {}] = [", prefix, states)?;
    for state in 0..states {
        match table.accept(state) {
            Some(a) => writeln!(out, "    Some(({}, {})), // {}", a.len, a.rule, suffixes[a.rule])?,
            None => writeln!(out, "    None,")?,
        }
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "match rule {{")?;
    for (rule, suffix) in suffixes.iter().enumerate() {
        writeln!(out, "    {} => {{", rule)?;
        writeln!(out, "        // {} - final", suffix)?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "    _ => {{}}")?;
    writeln!(out, "}}")?;

    Ok(out)
}
