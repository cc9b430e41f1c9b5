//! Render a directory as an indented tree diagram in the style of `tree`.
//!
//! ```text
//! ├───a.txt (5b)
//! └───b
//!     └───c
//! ```

pub mod cli;
pub mod error;
pub mod formatters;
pub mod render;
pub mod traversal;
pub mod types;

pub use error::TreeError;
pub use render::{render, render_with, write_tree};
pub use traversal::{DirSource, FsSource};
pub use types::{DirEntry, RenderMode};
