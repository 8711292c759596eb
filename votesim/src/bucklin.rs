// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Bucklin voting. First preferences are counted; without a majority, the next preference
//! on every ballot is added on top, round by round.

use rand::Rng;
use tracing::debug;
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, RankedBallot, total_weight};
use crate::election_data::Election;
use crate::election_error::{check_candidates, ElectionError};
use crate::election_result::{counts_for, CountStep, ElectionResult, StepReason, Tally};
use crate::random_util::random_ballot_size;
use crate::util::{empty_tallies, highest};

/// Count rounds until some candidate has a strict majority of the ballots, or no ballot
/// has any preferences left. The candidate with the most accumulated votes wins.
pub fn count_bucklin(candidates:&[CandidateIndex],ballots:&[Weighted<RankedBallot>]) -> ElectionResult {
    let total = total_weight(ballots) as Tally;
    let mut tallies = empty_tallies(candidates);
    let mut upto = 0;
    let mut transcript = vec![];
    loop {
        let mut any_left = false;
        for weighted in ballots {
            if let Some(c) = weighted.ballot.0.get(upto) {
                tallies[c.0]+=weighted.n as Tally;
                any_left=true;
            }
        }
        if !any_left { break; }
        upto+=1;
        transcript.push(CountStep{ reason: StepReason::BucklinRound(upto), tallies: tallies.clone() });
        if candidates.iter().any(|c|2*tallies[c.0]>total) { debug!("Majority in round {}",upto); break; }
    }
    let winners = highest(candidates,&tallies).into_iter().collect();
    let reached = candidates.iter().any(|c|2*tallies[c.0]>total);
    let details = vec![if reached { format!("Majority reached in round {}",upto) } else { format!("No majority after {} rounds",upto) }];
    ElectionResult::new("Bucklin voting",counts_for(candidates,&tallies),winners,details).with_transcript(transcript)
}

/// Simulate Bucklin voting. Ballots rank between 5 and 10 candidates (at most all of them).
pub fn simulate_bucklin<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_candidates(election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let n = random_ballot_size(candidates.len(),rng);
    let ballots = election.ranked_ballots(n,&candidates,randomize,rng);
    let mut result = count_bucklin(&candidates,&ballots);
    let mut details = vec![format!("{} candidates",candidates.len()),format!("{} ranks per ballot",n)];
    if randomize { details.push("Randomized ballot generation".to_string()); }
    details.append(&mut result.details);
    result.details = details;
    Ok(result)
}
