//! Syntax trees for the caulk fix synthesizer.
//!
//! The host exports one [`SourceTree`](tree::SourceTree) per analyzed file.
//! Trees are plain values: every edit clones the input and returns a new
//! tree, which keeps fix application referentially transparent and lets a
//! fix-all driver batch edits by comparing input and output.
//!
//! - [`tree`] — Tree nodes (imports, type declarations, members, attributes)
//! - [`edit`] — Pure, span-targeted edit primitives
//! - [`render`] — Text rendering for previews and human output

pub mod edit;
pub mod render;
pub mod tree;
