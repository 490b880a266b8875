//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Tile Codes
//!
//! Layouts are supplied as rows of small integer codes:
//!
//! | Code | Tile |
//! |------|------|
//! | 0 | Air |
//! | 1 | Flux |
//! | 2 | Unbreakable |
//! | 3 | Player |
//! | 4 | Stone (resting) |
//! | 5 | Stone (falling) |
//! | 6 | Box (resting) |
//! | 7 | Box (falling) |
//! | 8 | Key1 |
//! | 9 | Lock1 |
//! | 10 | Key2 |
//! | 11 | Lock2 |
//!
//! # Timing
//!
//! The simulation advances once per frame at `DEFAULT_FPS` (30), so `TICK_MS`
//! is 33ms. Every tick drains the pending inputs and then runs one gravity pass.
//!
//! # Examples
//!
//! ```
//! use tui_boulder_types::{Direction, FallingState, Tile, TileKind};
//!
//! let stone = Tile::from_code(4).unwrap();
//! assert_eq!(stone, Tile::Stone(FallingState::Resting));
//! assert_eq!(stone.kind(), TileKind::Stone);
//! assert!(stone.is_pushable());
//!
//! assert_eq!(Direction::Left.as_str(), "left");
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! ```

/// Target simulation rate (frames per second)
pub const DEFAULT_FPS: u32 = 30;

/// Fixed timestep interval in milliseconds (1000 / 30)
pub const TICK_MS: u32 = 1000 / DEFAULT_FPS;

/// Maximum number of directions buffered between two ticks
pub const INPUT_QUEUE_CAPACITY: usize = 64;

/// Smallest grid that can hold a bordered player cell
pub const MIN_GRID_SIDE: usize = 3;

/// Width of the built-in level
pub const DEFAULT_LAYOUT_WIDTH: usize = 8;

/// Height of the built-in level
pub const DEFAULT_LAYOUT_HEIGHT: usize = 6;

/// The built-in level, expressed in tile codes.
pub const DEFAULT_LAYOUT: [[u8; DEFAULT_LAYOUT_WIDTH]; DEFAULT_LAYOUT_HEIGHT] = [
    [2, 2, 2, 2, 2, 2, 2, 2],
    [2, 3, 0, 1, 1, 2, 0, 2],
    [2, 4, 2, 6, 1, 2, 0, 2],
    [2, 8, 4, 1, 1, 2, 0, 2],
    [2, 4, 1, 1, 1, 9, 0, 2],
    [2, 2, 2, 2, 2, 2, 2, 2],
];

/// Gravity sub-state of stones and boxes
///
/// - **Resting**: supported and stable, can be pushed sideways
/// - **Falling**: dropped during the last gravity pass, cannot be pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FallingState {
    #[default]
    Resting,
    Falling,
}

/// Field-less tile discriminant, used where the fall state is irrelevant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Air,
    Flux,
    Unbreakable,
    Player,
    Stone,
    Box,
    Key1,
    Lock1,
    Key2,
    Lock2,
}

impl TileKind {
    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::TileKind;
    ///
    /// assert_eq!(TileKind::Unbreakable.as_str(), "unbreakable");
    /// assert_eq!(TileKind::Lock2.as_str(), "lock2");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Air => "air",
            TileKind::Flux => "flux",
            TileKind::Unbreakable => "unbreakable",
            TileKind::Player => "player",
            TileKind::Stone => "stone",
            TileKind::Box => "box",
            TileKind::Key1 => "key1",
            TileKind::Lock1 => "lock1",
            TileKind::Key2 => "key2",
            TileKind::Lock2 => "lock2",
        }
    }
}

/// The content of one grid cell
///
/// Stones and boxes carry their [`FallingState`]; every other kind is stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Air,
    Flux,
    Unbreakable,
    Player,
    Stone(FallingState),
    Box(FallingState),
    Key1,
    Lock1,
    Key2,
    Lock2,
}

impl Tile {
    /// Decode a layout code
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::{FallingState, Tile};
    ///
    /// assert_eq!(Tile::from_code(0), Some(Tile::Air));
    /// assert_eq!(Tile::from_code(7), Some(Tile::Box(FallingState::Falling)));
    /// assert_eq!(Tile::from_code(12), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Air),
            1 => Some(Tile::Flux),
            2 => Some(Tile::Unbreakable),
            3 => Some(Tile::Player),
            4 => Some(Tile::Stone(FallingState::Resting)),
            5 => Some(Tile::Stone(FallingState::Falling)),
            6 => Some(Tile::Box(FallingState::Resting)),
            7 => Some(Tile::Box(FallingState::Falling)),
            8 => Some(Tile::Key1),
            9 => Some(Tile::Lock1),
            10 => Some(Tile::Key2),
            11 => Some(Tile::Lock2),
            _ => None,
        }
    }

    /// Encode back into the layout code format
    pub fn code(&self) -> u8 {
        match self {
            Tile::Air => 0,
            Tile::Flux => 1,
            Tile::Unbreakable => 2,
            Tile::Player => 3,
            Tile::Stone(FallingState::Resting) => 4,
            Tile::Stone(FallingState::Falling) => 5,
            Tile::Box(FallingState::Resting) => 6,
            Tile::Box(FallingState::Falling) => 7,
            Tile::Key1 => 8,
            Tile::Lock1 => 9,
            Tile::Key2 => 10,
            Tile::Lock2 => 11,
        }
    }

    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Air => TileKind::Air,
            Tile::Flux => TileKind::Flux,
            Tile::Unbreakable => TileKind::Unbreakable,
            Tile::Player => TileKind::Player,
            Tile::Stone(_) => TileKind::Stone,
            Tile::Box(_) => TileKind::Box,
            Tile::Key1 => TileKind::Key1,
            Tile::Lock1 => TileKind::Lock1,
            Tile::Key2 => TileKind::Key2,
            Tile::Lock2 => TileKind::Lock2,
        }
    }

    /// Fall state for stones and boxes, `None` for every other kind
    pub fn falling_state(&self) -> Option<FallingState> {
        match self {
            Tile::Stone(state) | Tile::Box(state) => Some(*state),
            _ => None,
        }
    }

    /// Same kind with a new fall state. Stateless kinds are returned unchanged.
    pub fn with_falling_state(self, state: FallingState) -> Self {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }

    pub fn is_air(&self) -> bool {
        matches!(self, Tile::Air)
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Tile::Player)
    }

    /// Stone or Box in any fall state (subject to gravity)
    pub fn is_stony(&self) -> bool {
        matches!(self, Tile::Stone(_) | Tile::Box(_))
    }

    /// Stone or Box currently resting
    pub fn is_pushable(&self) -> bool {
        self.falling_state() == Some(FallingState::Resting)
    }

    pub fn is_falling(&self) -> bool {
        self.falling_state() == Some(FallingState::Falling)
    }

    /// The lock a key opens
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::Tile;
    ///
    /// assert_eq!(Tile::Key1.opens(), Some(Tile::Lock1));
    /// assert_eq!(Tile::Key2.opens(), Some(Tile::Lock2));
    /// assert_eq!(Tile::Lock1.opens(), None);
    /// ```
    pub fn opens(&self) -> Option<Tile> {
        match self {
            Tile::Key1 => Some(Tile::Lock1),
            Tile::Key2 => Some(Tile::Lock2),
            _ => None,
        }
    }
}

/// Movement axis of a [`Direction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A directional intent from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in code order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta `(dr, dc)`; rows grow downwards
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions the frontend can apply to a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a player move
    Move(Direction),
    /// Return to the initial layout
    Restart,
    /// Toggle pause state
    Pause,
}
