//! Marquee - translation catalogs and sequential text reveals
//!
//! Marquee is a CLI tool and library for working with per-language nested
//! JSON translation catalogs: resolving dotted keys with `{{param}}`
//! interpolation and safe literal-key fallback, checking catalogs for
//! missing or orphaned keys, and driving deterministic multi-stage
//! typewriter reveals of catalog content.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog value model, per-language catalogs, directory loading
//! - `resolve`: Dotted-key resolution and interpolation
//! - `language`: Supported languages, preference persistence, active state
//! - `sequencer`: The multi-stage character-reveal state machine
//! - `config`: Configuration file loading and parsing
//! - `issue` / `report`: Catalog-consistency findings and their printing
//! - `cli` / `commands`: Command-line interface layer

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod issue;
pub mod language;
pub mod report;
pub mod resolve;
pub mod sequencer;
