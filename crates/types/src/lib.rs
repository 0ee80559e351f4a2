//! Shared types and constants.
//!
//! Everything in here is plain data with no dependencies, so it can be used by
//! the core engine, the terminal front-end and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn anchor**: row 0, column 4
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, TetrominoKind, GRID_COLS, GRID_ROWS};
//!
//! let kind = TetrominoKind::from_str("t").unwrap();
//! assert_eq!(kind, TetrominoKind::T);
//! assert_eq!(kind.color(), Color::Purple);
//!
//! assert_eq!(GameAction::from_str("rotateRight"), Some(GameAction::RotateRight));
//!
//! assert_eq!(GRID_ROWS, 20);
//! assert_eq!(GRID_COLS, 10);
//! ```

/// Grid height in cells.
pub const GRID_ROWS: usize = 20;

/// Grid width in cells.
pub const GRID_COLS: usize = 10;

/// Row of the anchor of every freshly spawned piece.
pub const SPAWN_ROW: i32 = 0;

/// Column of the anchor of every freshly spawned piece (centers pieces on a 10-wide grid).
pub const SPAWN_COL: i32 = 4;

/// Default interval between automatic descents.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Points awarded for every cleared row.
pub const POINTS_PER_LINE: u32 = 100;

/// Color tag stored in locked cells.
///
/// The names match the CSS color keywords of the classic browser version of
/// the game, which is what [`Color::as_str`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// The seven tetromino kinds, in spawn-table order.
///
/// Each kind has a fixed color:
/// - **I**: cyan
/// - **O**: yellow
/// - **T**: purple
/// - **L**: orange
/// - **J**: blue
/// - **S**: green
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl TetrominoKind {
    /// All kinds in spawn-table order. A random index into this table picks
    /// the next piece.
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::L,
        TetrominoKind::J,
        TetrominoKind::S,
        TetrominoKind::Z,
    ];

    pub fn color(&self) -> Color {
        match self {
            TetrominoKind::I => Color::Cyan,
            TetrominoKind::O => Color::Yellow,
            TetrominoKind::T => Color::Purple,
            TetrominoKind::L => Color::Orange,
            TetrominoKind::J => Color::Blue,
            TetrominoKind::S => Color::Green,
            TetrominoKind::Z => Color::Red,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_str("i"), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_str("Z"), Some(TetrominoKind::Z));
    /// assert_eq!(TetrominoKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "l" => Some(TetrominoKind::L),
            "j" => Some(TetrominoKind::J),
            "s" => Some(TetrominoKind::S),
            "z" => Some(TetrominoKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "i",
            TetrominoKind::O => "o",
            TetrominoKind::T => "t",
            TetrominoKind::L => "l",
            TetrominoKind::J => "j",
            TetrominoKind::S => "s",
            TetrominoKind::Z => "z",
        }
    }
}

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn opposite(&self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Commands produced by input sources.
///
/// Every variant maps 1:1 onto a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a new game (or restart the current one)
    Start,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move
    Descend,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Toggle pause state
    Pause,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("DESCEND"), Some(GameAction::Descend));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "descend" => Some(GameAction::Descend),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Descend => "descend",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Pause => "pause",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: filled by a locked piece of that color
pub type Cell = Option<Color>;
