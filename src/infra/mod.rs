// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concrete implementations of the Layer 3 traits, plus the
// file-backed pieces the application needs:
//
//   web_search.rs     — EvidenceSource over a search results
//                       page (reqwest + scraper)
//   tagger.rs         — EntityTagger over an HTTP tagging
//                       service, with bounded retry
//   abbreviations.rs  — AbbreviationLookup over a dictionary
//                       file loaded once per process
//   config_store.rs   — QaConfig as JSON on disk
//   answer_log.rs     — per-question CSV diagnostics
//
// Nothing in Layers 3–5 depends on this layer, so every one of
// these can be swapped (e.g. a local tagger) without touching
// the ranking code.

pub mod web_search;

pub mod tagger;

pub mod abbreviations;

pub mod config_store;

pub mod answer_log;
