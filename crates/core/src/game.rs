//! Game module - one simulation step per frame
//!
//! A step drains every queued direction through the movement resolver, then
//! runs exactly one gravity pass. The queue is drained last-in-first-out by
//! default: the most recently pressed direction is applied first. FIFO is
//! available through [`DrainOrder::Fifo`] as an explicit opt-in.

use arrayvec::ArrayVec;

use crate::fall::{fall_tick, FallReport};
use crate::grid::Grid;
use crate::movement::{attempt_move, MoveOutcome};
use crate::types::{Direction, GameAction, INPUT_QUEUE_CAPACITY};

/// Order in which queued directions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrainOrder {
    /// Most recent first
    #[default]
    Lifo,
    /// Oldest first
    Fifo,
}

/// Bounded buffer of pending directions
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<Direction, INPUT_QUEUE_CAPACITY>,
    order: DrainOrder,
}

impl InputQueue {
    pub fn new(order: DrainOrder) -> Self {
        Self {
            pending: ArrayVec::new(),
            order,
        }
    }

    /// Append a direction. Returns false (and drops it) when the queue is full.
    pub fn push(&mut self, direction: Direction) -> bool {
        match self.pending.try_push(direction) {
            Ok(()) => true,
            Err(_) => {
                log::warn!(
                    "input queue full ({} pending), dropping {}",
                    INPUT_QUEUE_CAPACITY,
                    direction.as_str()
                );
                false
            }
        }
    }

    /// Remove the next direction according to the drain order
    pub fn pop(&mut self) -> Option<Direction> {
        match self.order {
            DrainOrder::Lifo => self.pending.pop(),
            DrainOrder::Fifo => {
                if self.pending.is_empty() {
                    None
                } else {
                    Some(self.pending.remove(0))
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Summary of one [`Game::step`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Outcome of each drained direction, in the order they were applied
    pub moves: ArrayVec<(Direction, MoveOutcome), INPUT_QUEUE_CAPACITY>,
    pub fall: FallReport,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    initial: Grid,
    inputs: InputQueue,
    /// Number of completed steps since start or restart
    tick: u64,
    paused: bool,
}

impl Game {
    /// Start a game on `grid` with the default LIFO drain order
    pub fn new(grid: Grid) -> Self {
        Self::with_drain_order(grid, DrainOrder::default())
    }

    pub fn with_drain_order(grid: Grid, order: DrainOrder) -> Self {
        Self {
            initial: grid.clone(),
            grid,
            inputs: InputQueue::new(order),
            tick: 0,
            paused: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn inputs(&self) -> &InputQueue {
        &self.inputs
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Queue a direction for the next step
    pub fn enqueue(&mut self, direction: Direction) -> bool {
        self.inputs.push(direction)
    }

    /// Advance one frame: drain all inputs, then run one gravity pass.
    ///
    /// While paused, pending inputs are discarded and nothing else happens.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        if self.paused {
            self.inputs.clear();
            return report;
        }

        while let Some(direction) = self.inputs.pop() {
            let outcome = attempt_move(&mut self.grid, direction);
            // Capacity matches the queue, so this never overflows.
            let _ = report.moves.try_push((direction, outcome));
        }
        report.fall = fall_tick(&mut self.grid);
        self.tick += 1;

        log::trace!(
            "tick {}: {} moves, {} dropped, {} landed",
            self.tick,
            report.moves.len(),
            report.fall.dropped,
            report.fall.landed
        );
        report
    }

    /// Return to the starting layout
    pub fn restart(&mut self) {
        self.grid = self.initial.clone();
        self.inputs.clear();
        self.tick = 0;
        self.paused = false;
        log::debug!("restarted");
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Route a frontend action. Returns false if a move could not be queued.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.enqueue(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
        }
    }
}
