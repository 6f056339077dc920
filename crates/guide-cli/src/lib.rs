//! guide-cli
//! =========
//!
//! Command-line interface for the `guide-core` travel guide data.
//!
//! This crate primarily provides a binary (`guide-cli`). The small library
//! target exists so the documentation build renders this overview. See the
//! README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! guide-cli --help
//! guide-cli stats
//! guide-cli region "Algarve Region"
//! guide-cli resolve north-region "Bragança"
//! guide-cli hover greater-lisbon
//! guide-cli clock --watch --ticks 3
//! guide-cli --json climate north-region
//! ```
//!
//! For programmatic access to the data structures and lookups, use the
//! `guide-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
