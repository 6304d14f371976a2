//! Randomizer module - the two piece selection policies
//!
//! - [`Bag`]: the "7-bag" algorithm. Each bag holds one of each kind, shuffled;
//!   a new bag is appended only once the queue runs empty, so no kind is missing
//!   for more than 12 consecutive draws.
//! - [`Uniform`]: every draw is an independent uniform pick with replacement.
//!
//! Both are seeded, so the same seed reproduces the same piece sequence.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, Variant, NEXT_PREVIEW};

/// Upcoming kinds shown in the preview
pub type Preview = ArrayVec<PieceKind, NEXT_PREVIEW>;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Remaining draw order: a suffix of one or more shuffled permutations
    queue: VecDeque<PieceKind>,
    rng: StdRng,
}

impl Bag {
    /// Create a bag generator with the given seed and one shuffled bag queued
    pub fn new(seed: u64) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(PieceKind::ALL.len()),
            rng: StdRng::seed_from_u64(seed),
        };
        bag.refill();
        bag
    }

    fn shuffled(rng: &mut StdRng) -> [PieceKind; 7] {
        let mut kinds = PieceKind::ALL;
        kinds.shuffle(rng);
        kinds
    }

    /// Append a freshly shuffled permutation if the queue is empty.
    ///
    /// Returns false (and does nothing) while a permutation is still in progress.
    pub fn refill(&mut self) -> bool {
        if !self.queue.is_empty() {
            return false;
        }
        self.queue.extend(Self::shuffled(&mut self.rng));
        true
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.queue.pop_front() {
                return kind;
            }
            self.refill();
        }
    }

    /// The next `NEXT_PREVIEW` kinds that `draw()` will return.
    ///
    /// When the current bag runs short, the following bag is previewed with a copy
    /// of the RNG, so the preview always matches the real draws.
    pub fn peek_next(&self) -> [PieceKind; NEXT_PREVIEW] {
        let mut out = [PieceKind::I; NEXT_PREVIEW];
        let mut upcoming = self.queue.iter().copied();
        let mut preview_rng = self.rng.clone();
        let mut next_bag: Option<std::array::IntoIter<PieceKind, 7>> = None;

        for slot in out.iter_mut() {
            *slot = loop {
                if let Some(kind) = upcoming.next() {
                    break kind;
                }
                if let Some(kind) = next_bag.as_mut().and_then(Iterator::next) {
                    break kind;
                }
                next_bag = Some(Self::shuffled(&mut preview_rng).into_iter());
            };
        }

        out
    }

    /// Kinds left in the current queue, in draw order
    pub fn queued(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Independent uniform draws with replacement
#[derive(Debug, Clone)]
pub struct Uniform {
    rng: StdRng,
}

impl Uniform {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// The piece selection policy owned by a session
#[derive(Debug, Clone)]
pub enum Randomizer {
    Bag(Bag),
    Uniform(Uniform),
}

impl Randomizer {
    /// Bag for the extended variant, uniform picks for the simple one
    pub fn for_variant(variant: Variant, seed: u64) -> Self {
        match variant {
            Variant::Extended => Randomizer::Bag(Bag::new(seed)),
            Variant::Simple => Randomizer::Uniform(Uniform::new(seed)),
        }
    }

    pub fn draw(&mut self) -> PieceKind {
        match self {
            Randomizer::Bag(bag) => bag.draw(),
            Randomizer::Uniform(uniform) => uniform.draw(),
        }
    }

    /// Upcoming kinds; always empty for uniform draws
    pub fn preview(&self) -> Preview {
        match self {
            Randomizer::Bag(bag) => bag.peek_next().into_iter().collect(),
            Randomizer::Uniform(_) => Preview::new(),
        }
    }
}
