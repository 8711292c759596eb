// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Things that can be wrong with the inputs to an election.
//! These are all caller errors, detected before any ballots are generated.

use thiserror::Error;
use crate::ballot_metadata::PartyIndex;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum ElectionError {
    #[error("Not enough candidates: {candidates} available, {needed} needed")]
    NotEnoughCandidates{candidates:usize,needed:usize},
    #[error("No seats to fill")]
    NoSeatsToFill,
    #[error("Invalid score range: minimum {min} is greater than maximum {max}")]
    InvalidScoreRange{min:i64,max:i64},
    #[error("Voter group preferences must rank each of the {num_parties} parties exactly once, got {preferences:?}")]
    InvalidPreferenceOrder{preferences:Vec<PartyIndex>,num_parties:usize},
    #[error("The voter population has no voter groups")]
    EmptyPopulation,
}

/// Single winner methods need at least two candidates.
pub fn check_candidates(num_candidates:usize) -> Result<(),ElectionError> {
    if num_candidates<2 { Err(ElectionError::NotEnoughCandidates{candidates:num_candidates,needed:2}) } else { Ok(()) }
}

/// Multi seat methods need at least one seat, and at least as many candidates as seats (and never fewer than two).
pub fn check_seats(seats:usize,num_candidates:usize) -> Result<(),ElectionError> {
    if seats<1 { return Err(ElectionError::NoSeatsToFill) }
    check_candidates(num_candidates)?;
    if seats>num_candidates { Err(ElectionError::NotEnoughCandidates{candidates:num_candidates,needed:seats}) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_checked_before_candidates() {
        assert_eq!(Err(ElectionError::NoSeatsToFill),check_seats(0,1));
        assert_eq!(Err(ElectionError::NotEnoughCandidates{candidates:1,needed:2}),check_seats(1,1));
        assert_eq!(Err(ElectionError::NotEnoughCandidates{candidates:3,needed:4}),check_seats(4,3));
        assert_eq!(Ok(()),check_seats(3,3));
    }
}
