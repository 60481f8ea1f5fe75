//! LeisBR Harvester - Download Brazilian legislation and build searchable
//! JSON snapshots.
//!
//! This crate turns a consolidated legislation page (e.g. the Constitution
//! on planalto.gov.br) into a validated [`leisbr_corpus::Document`] and a
//! versioned JSON snapshot, and exposes a CLI to search and cite snapshots.
//!
//! # Example
//!
//! ```no_run
//! use leisbr_harvester::{harvest_source, json};
//!
//! let law = harvest_source(
//!     "https://www.planalto.gov.br/ccivil_03/constituicao/constituicao.htm",
//!     "Constituição da República Federativa do Brasil",
//! )?;
//! let path = json::save_json(&law, "2025-01-01", None)?;
//! println!("saved {}", path.display());
//! # Ok::<(), leisbr_harvester::HarvestError>(())
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (`HarvestedLaw`)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for downloading pages
//! - [`html`]: Paragraph extraction and text cleanup
//! - [`roman`]: Roman numeral parsing for headings
//! - [`extract`]: Paragraph classification into structural records
//! - [`json`]: JSON snapshot output and loading
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod harvester;
pub mod html;
pub mod http;
pub mod json;
pub mod roman;
pub mod types;

// Re-export main functions
pub use harvester::harvest_source;

// Re-export commonly used items
pub use config::validate_date;
pub use error::{HarvestError, Result};
pub use extract::{classify_paragraph, classify_paragraphs, Extraction};
pub use types::HarvestedLaw;
