//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state machine that drives them.
//! It has no dependencies on terminals, timers or threads, which makes it:
//!
//! - **Deterministic**: a seeded [`PieceFactory`] reproduces a whole game
//! - **Testable**: every rule is exercised without any I/O
//! - **Portable**: any front-end that implements [`Renderer`] and [`ScoreDisplay`] can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with occupancy queries and row removal
//! - [`shape`]: occupancy matrices and the 90° rotation transform
//! - [`pieces`]: the seven tetrominoes, the active piece and the piece factory
//! - [`rng`]: injectable random sources
//! - [`placement`]: collision/placement validation
//! - [`lines`]: locking a piece into the grid and clearing full rows
//! - [`timer`]: armed/disarmed state of the automatic descent timer
//! - [`view`]: renderer and score display collaborator traits
//! - [`controller`]: the game state machine
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random and spawn at row 0, column 4
//! - A piece that cannot descend locks into the grid
//! - Every full row is removed and scores 100 points
//! - The game ends when the top row holds a locked cell right after a spawn
//! - Rotation is a plain matrix rotation; a blocked rotation is discarded
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Controller, PieceFactory};
//! use blockfall_types::GameAction;
//!
//! // `()` is a headless renderer and score display.
//! let mut game = Controller::new(PieceFactory::seeded(12345), ());
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateRight);
//! game.tick();
//!
//! assert!(game.is_running());
//! assert_eq!(game.score(), 0);
//! ```

pub mod controller;
pub mod grid;
pub mod lines;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod shape;
pub mod timer;
pub mod view;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use controller::{Controller, Phase};
pub use grid::Grid;
pub use lines::{clear_full_lines, merge};
pub use pieces::{spawn_shape, Piece, PieceFactory};
pub use placement::can_place;
pub use rng::{RandomSource, SimpleRng};
pub use shape::{rotate, Shape};
pub use timer::TickTimer;
pub use view::{Renderer, ScoreDisplay};
