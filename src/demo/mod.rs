//! Terminal presentation for the demo binary: key bindings live in `main`,
//! drawing lives here.

pub mod render;
pub mod view;
