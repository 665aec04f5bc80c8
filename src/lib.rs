//! Letter Draw
//!
//! A word game engine: four letters are drawn, and a word scores by how many
//! of them it reuses, whether it keeps them in draw order, and how few extra
//! letters it inserts between them.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_draw::core::{Draw, score_word};
//!
//! let draw: Draw = "RAME".parse().unwrap();
//! let score = score_word(&draw, "rame");
//! assert_eq!(score.total, 15);
//! ```

// Core scoring types
pub mod core;

// Error types
pub mod error;

// Rounds, draws, best-word search and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
