//! Fixed-tick frame driver
//!
//! Input arrives whenever the platform delivers it; the driver queues it and
//! applies everything queued so far at the start of the next tick, then runs
//! that tick. One thread, no locking.

use std::collections::VecDeque;
use std::thread;
use std::time::Instant;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::TICK_DURATION;
use crate::game::{Command, Game, Key, Snapshot, TickOutcome};

/// Queued input, resolved against the phase when it is drained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Command(Command),
    Key(Key),
}

/// Queues input and steps a [`Game`] once per tick
#[derive(Debug)]
pub struct FrameDriver<R = Pcg32> {
    game: Game<R>,
    queue: VecDeque<Input>,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            queue: VecDeque::new(),
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Queue a command for the next tick
    pub fn push(&mut self, command: Command) {
        self.queue.push_back(Input::Command(command));
    }

    /// Queue a key press; its meaning depends on the phase when it is applied
    pub fn push_key(&mut self, key: Key) {
        self.queue.push_back(Input::Key(key));
    }

    /// Number of inputs waiting for the next tick
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue into the game, then run one tick.
    ///
    /// Returns `None` once a quit has been observed; the loop should stop.
    pub fn advance(&mut self) -> Option<TickOutcome> {
        while let Some(input) = self.queue.pop_front() {
            let command = match input {
                Input::Command(command) => command,
                Input::Key(key) => Command::from_key(key, self.game.phase()),
            };
            self.game.handle_command(command);
        }

        if self.game.is_quit() {
            return None;
        }
        Some(self.game.tick())
    }

    /// Run up to `max_ticks` ticks as fast as possible.
    ///
    /// Before each tick `input` sees the latest snapshot and may queue a command.
    /// Returns the number of ticks actually run.
    pub fn run_for<F>(&mut self, max_ticks: u64, input: F) -> u64
    where
        F: FnMut(&Snapshot) -> Option<Command>,
    {
        self.run(max_ticks, false, input)
    }

    /// Like [`FrameDriver::run_for`], but paced at the fixed tick rate in wall-clock time
    pub fn run_realtime<F>(&mut self, max_ticks: u64, input: F) -> u64
    where
        F: FnMut(&Snapshot) -> Option<Command>,
    {
        self.run(max_ticks, true, input)
    }

    fn run<F>(&mut self, max_ticks: u64, paced: bool, mut input: F) -> u64
    where
        F: FnMut(&Snapshot) -> Option<Command>,
    {
        let mut next_deadline = Instant::now();
        let mut ticks = 0;

        while ticks < max_ticks {
            if let Some(command) = input(&self.game.snapshot()) {
                self.push(command);
            }
            if self.advance().is_none() {
                break;
            }
            ticks += 1;

            if paced {
                next_deadline += TICK_DURATION;
                let now = Instant::now();
                if next_deadline > now {
                    thread::sleep(next_deadline - now);
                } else {
                    // Fell behind; don't try to catch up with a burst of ticks
                    next_deadline = now;
                }
            }
        }

        ticks
    }
}
