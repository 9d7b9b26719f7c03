//! `{% codeblock %}` for Jekyll-style Liquid blogs.
//!
//! The tag takes an optional `lang:<token>` marker and an optional caption
//! (label, URL, link title), highlights its body with syntect and wraps the
//! result in a `<figure class="code">`.

pub mod cli;
pub mod codeblock;
pub mod config;
pub mod highlight;
pub mod liquid;
pub mod markdown;
pub mod utils;
