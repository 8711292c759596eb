// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Plurality methods: the non-transferable vote family and the two-round system.
//!
//! None of these model tactical voting, which matters a lot for real uses of them.

use rand::Rng;
use tracing::debug;
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, BlockBallot, total_weight};
use crate::election_data::Election;
use crate::election_error::{check_candidates, check_seats, ElectionError};
use crate::election_result::{counts_for, CountStep, ElectionResult, StepReason, Tally};
use crate::util::{empty_tallies, sort_candidates_desc};

/// Add up block votes. Every candidate on a ballot gets all of its weight.
pub fn tally_block_votes(candidates:&[CandidateIndex],ballots:&[Weighted<BlockBallot>]) -> Vec<Tally> {
    let mut tallies = empty_tallies(candidates);
    for b in ballots {
        for c in &b.ballot.0 { tallies[c.0]+=b.n as Tally; }
    }
    tallies
}

/// The `seats` candidates with the most votes win. Ties go to the earlier candidate.
pub fn count_ntv(candidates:&[CandidateIndex],ballots:&[Weighted<BlockBallot>],seats:usize) -> ElectionResult {
    let tallies = tally_block_votes(candidates,ballots);
    let winners = sort_candidates_desc(candidates,&tallies).into_iter().take(seats).collect();
    ElectionResult::new("Non-transferable vote (NTV)",counts_for(candidates,&tallies),winners,vec![])
}

/// Simulate a generic non-transferable vote with `n` votes per ballot. This is the
/// template for SNTV, FPTP, MNTV and limited voting.
pub fn simulate_ntv<R:Rng>(election:&Election,n:usize,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_seats(seats,election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let ballots = election.block_ballots(n,&candidates,randomize,rng);
    let mut result = count_ntv(&candidates,&ballots,seats);
    result.details = vec![format!("{} votes per ballot",n),format!("{} seats",seats),format!("{} candidates",candidates.len())];
    if randomize { result.details.push("Randomized ballot generation".to_string()); }
    Ok(result)
}

/// Single non-transferable vote: one vote each, the `seats` candidates with the most votes win.
pub fn simulate_sntv<R:Rng>(election:&Election,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_ntv(election,1,seats,randomize,rng)?;
    result.details.remove(0); // votes per ballot
    Ok(result.renamed("Single non-transferable vote (SNTV)"))
}

/// First past the post: single seat SNTV.
pub fn simulate_fptp<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_sntv(election,1,randomize,rng)?;
    result.details.remove(0); // seats
    Ok(result.renamed("First-past-the-post (FPTP)"))
}

/// Multiple non-transferable vote, or block vote: as many votes as seats.
pub fn simulate_mntv<R:Rng>(election:&Election,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    Ok(simulate_ntv(election,seats,seats,randomize,rng)?.renamed("Multiple non-transferable vote (MNTV)"))
}

/// Limited voting: fewer votes than seats. Between 5 and 10 votes, but at most one less
/// than the number of seats, and always at least one.
pub fn simulate_limited_voting<R:Rng>(election:&Election,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_seats(seats,election.num_candidates())?;
    let n = rng.random_range(5..=10usize).min(seats-1).max(1);
    Ok(simulate_ntv(election,n,seats,randomize,rng)?.renamed("Limited voting"))
}

/// Two round system. Everyone votes for a candidate of their favourite party. A majority
/// wins outright; otherwise the top two go to a second round, where each group votes for
/// whichever of them it prefers. Preferences don't change between rounds, so this is
/// equivalent to the contingent vote.
pub fn simulate_trs<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_candidates(election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let ballots = election.block_ballots(1,&candidates,randomize,rng);
    let mut tallies = tally_block_votes(&candidates,&ballots);
    let mut transcript = vec![CountStep{ reason: StepReason::FirstPreferences, tallies: tallies.clone() }];
    let total = total_weight(&ballots) as Tally;
    let mut reported = candidates.clone();
    if !candidates.iter().any(|c|2*tallies[c.0]>total) {
        let finalists : Vec<CandidateIndex> = sort_candidates_desc(&candidates,&tallies).into_iter().take(2).collect();
        debug!("No majority, runoff between {} and {}",finalists[0],finalists[1]);
        let ballots = election.block_ballots(1,&finalists,randomize,rng);
        let second_round = tally_block_votes(&finalists,&ballots);
        tallies = vec![0;tallies.len()];
        for c in &finalists { tallies[c.0]=second_round[c.0]; }
        let ordered = sort_candidates_desc(&finalists,&tallies);
        transcript.push(CountStep{ reason: StepReason::Runoff(ordered[0],ordered[1]), tallies: tallies.clone() });
        reported = finalists;
    }
    let winner = sort_candidates_desc(&reported,&tallies)[0];
    let mut details = vec![format!("{} initial candidates",candidates.len())];
    if randomize { details.push("Randomized ballot generation".to_string()); }
    Ok(ElectionResult::new("Two-round system (TRS)",counts_for(&reported,&tallies),vec![winner],details).with_transcript(transcript))
}
