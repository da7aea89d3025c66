//! A crate for detecting triple-quoted docstring blocks in source text and
//! driving editor folding for them.
//!
//! Currently this crate provides the functionality to:
//! - Scan a document's lines for blocks delimited by `"""` markers.
//! - Cache detection results per document, keyed by document identity.
//! - Produce fold and unfold requests for a host editor to execute.
//! - Observe detection and folding activity through an event interface.
//!
//! The host editor stays abstract: this crate consumes line snapshots and
//! produces line ranges and commands, and never talks to an editor API
//! itself. Decoration styling, command registration and icons stay on the
//! host side.
//!
//! # Example
//! ```
//! use docfold::{
//!     document::Document,
//!     provider::FoldingProvider,
//!     range::FoldRange,
//! };
//!
//! fn main() {
//!     let source = r#"
//! def frobnicate():
//!     """
//!     Frobnicate the widget.
//!     """
//!     pass
//! "#;
//!
//!     // Snapshot the document under its host identity.
//!     let document = Document::new("file:///example.py", source);
//!
//!     let mut provider = FoldingProvider::new();
//!
//!     // The docstring body folds; the closing marker line stays visible.
//!     assert_eq!(provider.provide_ranges(&document), [FoldRange::new(2, 3)]);
//! }
//! ```
//!
//! # Executables
//!
//! ## `docfold`
//!
//! The `docfold` executable scans a file and either lists the detected
//! ranges or prints the file with every docstring block collapsed to its
//! first line.
//!
//! ```text
//! $ docfold --preview example.py
//! def frobnicate():
//!     """ …
//!     """
//!     pass
//! ```
pub mod cache;
pub mod detector;
pub mod document;
pub mod event;
pub mod provider;
pub mod range;
