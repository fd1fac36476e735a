//! `play`: type a reveal sequence from the catalog into the terminal.
//!
//! A playable key names either a single string leaf or a hero-style node
//! with `title` / `description` / `stats` / `cta` entries. Stages are built
//! in that order and handed to the [`Sequencer`]; the terminal driver maps
//! wall-clock time onto the sequencer's millisecond clock and prints each
//! newly revealed character. Because reveals are strictly sequential, the
//! output is append-only: a newline ends each finished slot.

use std::{
    io::Write,
    time::{Duration, Instant},
};

use anyhow::{Result, bail};

use crate::{
    catalog::CatalogValue,
    cli::{ExitStatus, PlayCommand},
    resolve::resolve_nested,
    sequencer::{Sequencer, StageSpec},
};

use super::shared::{load_catalogs, load_context, select_language};

pub fn play(cmd: &PlayCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let scan = load_catalogs(&ctx)?;
    let language = select_language(&cmd.common, &ctx)?;

    let Some(catalog) = scan.set.get(language) else {
        bail!(
            "No catalog for language '{}' in {}",
            language,
            ctx.locales_root.display()
        );
    };
    let Some(value) = resolve_nested(catalog, &cmd.key) else {
        bail!("Key '{}' not found in '{}'", cmd.key, language);
    };

    let stages = build_stages(value, cmd.char_interval, cmd.stage_delay);
    if stages.iter().all(|s| s.slots.iter().all(String::is_empty)) {
        bail!("Key '{}' has no playable text", cmd.key);
    }

    let mut sequencer = Sequencer::new(stages);
    sequencer.start(0);
    if cmd.no_delay {
        sequencer.advance(u64::MAX);
        print_pending(&sequencer, &mut PrintCursor::default())?;
        return Ok(ExitStatus::Success);
    }

    let started = Instant::now();
    let mut cursor = PrintCursor::default();
    while !sequencer.is_all_complete() {
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        sequencer.advance(now_ms);
        print_pending(&sequencer, &mut cursor)?;
        match sequencer.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_sub(now_ms).min(50);
                std::thread::sleep(Duration::from_millis(wait.max(1)));
            }
            None => break,
        }
    }
    print_pending(&sequencer, &mut cursor)?;
    Ok(ExitStatus::Success)
}

/// Build the stage list for a playable catalog value.
///
/// Leaves become a single stage. Nodes contribute, in order: title,
/// description, stat slots, call to action. Absent entries become empty
/// stages, which the sequencer skips with zero duration.
fn build_stages(value: &CatalogValue, char_interval_ms: u64, stage_delay_ms: u64) -> Vec<StageSpec> {
    let leaf = |key: &str| -> String {
        value
            .get(key)
            .and_then(CatalogValue::as_leaf)
            .unwrap_or_default()
            .to_string()
    };

    match value {
        CatalogValue::Leaf(text) => vec![StageSpec::text(text.clone(), char_interval_ms, 0)],
        _ => {
            let stats: Vec<String> = value
                .get("stats")
                .and_then(CatalogValue::as_list)
                .map(|items| items.iter().filter_map(stat_line).collect())
                .unwrap_or_default();

            vec![
                StageSpec::text(leaf("title"), char_interval_ms, stage_delay_ms),
                StageSpec::text(
                    leaf("description"),
                    (char_interval_ms / 3).max(1),
                    stage_delay_ms,
                ),
                StageSpec::slots(stats, (char_interval_ms / 2).max(1), stage_delay_ms),
                StageSpec::text(leaf("cta"), char_interval_ms, 0),
            ]
        }
    }
}

/// Render one stat entry as a single line of target text.
///
/// Entries are either plain strings or `{value, label}` records.
fn stat_line(item: &CatalogValue) -> Option<String> {
    match item {
        CatalogValue::Leaf(text) => Some(text.clone()),
        CatalogValue::Node(_) => {
            let value = item.get("value").and_then(CatalogValue::as_leaf)?;
            let label = item.get("label").and_then(CatalogValue::as_leaf)?;
            Some(format!("{} {}", value, label))
        }
        CatalogValue::List(_) => None,
    }
}

/// How much of the sequence has already been written to the terminal.
#[derive(Debug, Default)]
struct PrintCursor {
    /// Per (stage, slot): characters printed so far.
    printed: Vec<Vec<usize>>,
}

/// Print every character revealed since the last call, ending each finished
/// slot with a newline.
fn print_pending(sequencer: &Sequencer, cursor: &mut PrintCursor) -> Result<()> {
    let snapshot = sequencer.snapshot();
    if cursor.printed.len() < snapshot.stages.len() {
        cursor
            .printed
            .resize_with(snapshot.stages.len(), Vec::new);
    }

    let mut out = std::io::stdout().lock();
    for stage in &snapshot.stages {
        let printed = &mut cursor.printed[stage.stage_index];
        if printed.len() < stage.slots.len() {
            printed.resize(stage.slots.len(), 0);
        }
        for (slot_index, slot) in stage.slots.iter().enumerate() {
            let already = printed[slot_index];
            if slot.revealed_chars > already {
                let delta: String = slot
                    .revealed_text
                    .chars()
                    .skip(already)
                    .collect();
                write!(out, "{delta}")?;
                printed[slot_index] = slot.revealed_chars;
                if slot.is_complete && !slot.revealed_text.is_empty() {
                    writeln!(out)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
