//! Tree serialization and deserialization using the flat text format.
//!
//! The persisted layout is newline-delimited and order-significant. For an
//! entity count `N`, the stream holds a count line followed by five lines
//! per person: name, birth year, death year (`-1` = alive/unknown), child
//! count, and a space-separated child-index line (present even when empty).
//! Child indices are absolute 0-based record positions within the same
//! stream.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use lineage_foundation::{Error, Result};
use lineage_storage::FamilyTree;

/// Death-year sentinel on the wire.
const ALIVE: i32 = -1;

/// Serializes a tree to its text form.
///
/// Deterministic: the same tree always yields the same bytes. Embedded
/// newlines in names are replaced with spaces so the line-oriented parser
/// can reload the result.
#[must_use]
pub fn to_text(tree: &FamilyTree) -> String {
    let mut out = String::new();
    out.push_str(&tree.len().to_string());
    out.push('\n');

    for person in tree.iter() {
        let sanitized = person.name().replace('\n', " ");
        out.push_str(&sanitized);
        out.push('\n');
        out.push_str(&person.birth_year().to_string());
        out.push('\n');
        out.push_str(&person.death_year().unwrap_or(ALIVE).to_string());
        out.push('\n');
        out.push_str(&person.children().len().to_string());
        out.push('\n');
        for &child in person.children() {
            out.push_str(&child.to_string());
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

/// Deserializes a tree from its text form.
///
/// Parses fully into a fresh [`FamilyTree`] before returning, so the caller
/// can swap atomically: an existing tree is never half-replaced. Child
/// indices outside the declared record range are silently dropped (the
/// fail-soft linkage policy), they do not fail the load.
///
/// # Errors
///
/// Returns [`ErrorKind::Format`] when the count line is missing or
/// non-numeric, when a birth/death/child-count field is unreadable, or when
/// the input ends mid-record. Record-level failures carry the offending
/// record's 0-based ordinal.
///
/// [`ErrorKind::Format`]: lineage_foundation::ErrorKind::Format
pub fn from_text(input: &str) -> Result<FamilyTree> {
    let mut lines = input.lines();

    let count: usize = lines
        .next()
        .ok_or_else(|| Error::format("empty stream, cannot read count"))?
        .trim()
        .parse()
        .map_err(|_| Error::format("cannot read count"))?;

    // The declared counts are untrusted input and must never size an
    // allocation on their own. A record occupies five lines, so the stream
    // itself bounds how many records can actually follow; an inflated count
    // then fails with a normal truncation error during parsing.
    let line_total = input.lines().count();
    let mut records: Vec<(String, i32, i32, Vec<i64>)> =
        Vec::with_capacity(count.min(line_total / 5));

    for ordinal in 0..count {
        let name = lines
            .next()
            .ok_or_else(|| Error::format_at("unexpected end of stream before name", ordinal))?
            .to_string();

        let birth: i32 = lines
            .next()
            .ok_or_else(|| Error::format_at("unexpected end of stream before birth year", ordinal))?
            .trim()
            .parse()
            .map_err(|_| Error::format_at("birth year unreadable", ordinal))?;

        let death: i32 = lines
            .next()
            .ok_or_else(|| Error::format_at("unexpected end of stream before death year", ordinal))?
            .trim()
            .parse()
            .map_err(|_| Error::format_at("death year unreadable", ordinal))?;

        let child_count: usize = lines
            .next()
            .ok_or_else(|| {
                Error::format_at("unexpected end of stream before child count", ordinal)
            })?
            .trim()
            .parse()
            .map_err(|_| Error::format_at("child count unreadable", ordinal))?;

        let child_line = lines.next().ok_or_else(|| {
            Error::format_at("unexpected end of stream before child indices", ordinal)
        })?;

        let mut children = Vec::new();
        let mut tokens = child_line.split_whitespace();
        for _ in 0..child_count {
            let token = tokens.next().ok_or_else(|| {
                Error::format_at(
                    format!("expected {child_count} child indices, found {}", children.len()),
                    ordinal,
                )
            })?;
            let index: i64 = token
                .parse()
                .map_err(|_| Error::format_at("child index unreadable", ordinal))?;
            children.push(index);
        }

        records.push((name, birth, death, children));
    }

    let mut tree = FamilyTree::new();
    for (name, birth, death, _) in &records {
        let death_year = if *death == ALIVE { None } else { Some(*death) };
        tree.add_person(name.clone(), *birth, death_year);
    }
    for (parent, (_, _, _, children)) in records.iter().enumerate() {
        for &child in children {
            // Negative or out-of-range indices are dropped, not raised.
            if let Ok(index) = usize::try_from(child) {
                tree.connect(parent, index);
            }
        }
    }

    Ok(tree)
}

/// Saves a tree to a file in text format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. The
/// handle is scoped to this call and released on every exit path.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`] with the path if the file cannot be created,
/// written, or flushed.
///
/// [`ErrorKind::Io`]: lineage_foundation::ErrorKind::Io
pub fn save_to_file<P: AsRef<Path>>(tree: &FamilyTree, path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_text(tree).as_bytes())
        .map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;
    writer
        .flush()
        .map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;

    Ok(())
}

/// Loads a tree from a text-format file.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`] with the path if the file cannot be opened or
/// read, and [`ErrorKind::Format`] if the content is structurally invalid.
///
/// [`ErrorKind::Io`]: lineage_foundation::ErrorKind::Io
/// [`ErrorKind::Format`]: lineage_foundation::ErrorKind::Format
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FamilyTree> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;

    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;

    from_text(&text)
}
