// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Some utility routines using pseudo-random numbers.

use rand::{Rng, SeedableRng};
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;

/// Make the random number generator used for a simulation run.
/// With a seed, the run is reproducible; otherwise seeded from the operating system.
pub fn make_rng(seed:Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    }
}

/// The number of ranks or scores on a ballot for methods that don't fix it:
/// uniform in 5..=10, but never more than `cap`.
/// ```
/// use votesim::random_util::{make_rng, random_ballot_size};
/// let mut rng = make_rng(Some(3));
/// for _ in 0..20 {
///     let n = random_ballot_size(8,&mut rng);
///     assert!(5<=n && n<=8);
/// }
/// assert_eq!(3,random_ballot_size(3,&mut rng));
/// ```
pub fn random_ballot_size<R:Rng>(cap:usize,rng:&mut R) -> usize {
    rng.random_range(5..=10usize).min(cap)
}

/// Pick the first element, or a random one if `randomize`.
pub fn first_or_random<T:Copy,R:Rng>(choices:&[T],randomize:bool,rng:&mut R) -> Option<T> {
    if randomize { choices.choose(rng).copied() } else { choices.first().copied() }
}

/// Pick the last element, or a random one if `randomize`.
pub fn last_or_random<T:Copy,R:Rng>(choices:&[T],randomize:bool,rng:&mut R) -> Option<T> {
    if randomize { choices.choose(rng).copied() } else { choices.last().copied() }
}

/// Sample from a triangular distribution on [low,high] with the given mode.
/// The mode is clamped into [low,high]; a degenerate range returns low.
/// ```
/// use votesim::random_util::{make_rng, sample_triangular};
/// let mut rng = make_rng(Some(1));
/// for _ in 0..100 {
///     let x = sample_triangular(0.0,4.0,3.0,&mut rng);
///     assert!(0.0<=x && x<=4.0);
/// }
/// assert_eq!(2.0,sample_triangular(2.0,2.0,7.0,&mut rng));
/// ```
pub fn sample_triangular<R:Rng>(low:f64,high:f64,mode:f64,rng:&mut R) -> f64 {
    if high<=low { return low }
    let mode = mode.clamp(low,high);
    let u : f64 = rng.random();
    let width = high-low;
    let split = (mode-low)/width;
    if u<split { low+(u*width*(mode-low)).sqrt() }
    else { high-((1.0-u)*width*(high-mode)).sqrt() }
}
