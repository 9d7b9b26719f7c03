//! The `codeblock` tag core: argument parsing and figure rendering.
//!
//! Both halves are pure. Arguments are parsed once per tag invocation and the
//! figure is assembled around whatever the [`Highlighter`](crate::highlight::Highlighter)
//! returns for the trimmed body.

pub mod args;
pub mod render;

pub use args::{filetype_from_label, CaptionSpec, CodeBlockArgs, TagArguments};
pub use render::{render, FIGURE_CLASS};
