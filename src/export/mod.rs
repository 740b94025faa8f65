//! Artifact writers.

pub mod jsonl;
