//! Core lexical pipeline
//!
//! - `scanner`: position-tracking byte cursor
//! - `entities`: session-scoped entity table and output escaping
//! - `tokenizer`: token model and the text/tag state machine

pub mod entities;
pub mod scanner;
pub mod tokenizer;
