//! Goban: a rules engine for the board game Go.
//!
//! The crate decides move legality, computes captures, and enforces the
//! no-suicide and positional ko rules. It is the in-process core a game
//! server builds on: session handling, turn authorization, and transport
//! stay outside and talk to [`engine::BoardEngine`] through plain calls.
//!
//! ## Modules
//!
//! - [`board`] - The grid, stones, and bounds-safe access
//! - [`group`] - Connected-group detection and liberty counting
//! - [`engine`] - Move legality protocol, captures, suicide and ko
//! - [`coord`] - "D4"-style coordinate notation
//!
//! ## Example
//!
//! ```
//! use goban::board::Stone;
//! use goban::engine::BoardEngine;
//!
//! let mut game = BoardEngine::new(9, Stone::Black).unwrap();
//!
//! let outcome = game.play((2, 2)).unwrap();
//! assert_eq!(outcome.color, Stone::Black);
//! assert_eq!(game.turn(), Stone::White);
//!
//! // Playing on an occupied point is rejected and changes nothing.
//! assert!(game.play((2, 2)).is_err());
//! assert_eq!(game.turn(), Stone::White);
//! ```

pub mod board;
pub mod coord;
pub mod engine;
pub mod group;
