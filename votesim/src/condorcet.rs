// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Copeland's method, a Condorcet method. Candidates are ordered by pairwise victories
//! minus pairwise defeats.
//!
//! Without a Condorcet winner this often ties. In a three way majority rule cycle every
//! candidate has exactly one loss; such ties are reported, not resolved.

use rand::Rng;
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, RankedBallot};
use crate::election_data::Election;
use crate::election_error::{check_candidates, ElectionError};
use crate::election_result::{counts_for, ElectionResult, Tally};
use crate::random_util::random_ballot_size;
use crate::util::{empty_tallies, highest};

/// Which of a and b the ballot prefers, if either. A ranked candidate beats an unranked one.
pub fn prefers(ballot:&RankedBallot,a:CandidateIndex,b:CandidateIndex) -> Option<CandidateIndex> {
    match (ballot.position(a),ballot.position(b)) {
        (Some(pa),Some(pb)) => Some(if pa<pb {a} else {b}),
        (Some(_),None) => Some(a),
        (None,Some(_)) => Some(b),
        (None,None) => None,
    }
}

/// The weight of ballots preferring a to b, and b to a.
pub fn pairwise_support(ballots:&[Weighted<RankedBallot>],a:CandidateIndex,b:CandidateIndex) -> (Tally,Tally) {
    let mut support = (0,0);
    for weighted in ballots {
        match prefers(&weighted.ballot,a,b) {
            Some(c) if c==a => support.0+=weighted.n as Tally,
            Some(_) => support.1+=weighted.n as Tally,
            None => {}
        }
    }
    support
}

/// Copeland score (wins minus losses) for every candidate ranked on some ballot.
/// Candidates never ranked are not reported.
pub fn count_copeland(candidates:&[CandidateIndex],ballots:&[Weighted<RankedBallot>]) -> ElectionResult {
    let ranked : Vec<CandidateIndex> = candidates.iter().cloned().filter(|&c|ballots.iter().any(|b|b.ballot.position(c).is_some())).collect();
    let mut win_loss = empty_tallies(candidates);
    for (i,&a) in ranked.iter().enumerate() {
        for &b in &ranked[i+1..] {
            let (for_a,for_b) = pairwise_support(ballots,a,b);
            if for_a>for_b { win_loss[a.0]+=1; win_loss[b.0]-=1; }
            else if for_b>for_a { win_loss[b.0]+=1; win_loss[a.0]-=1; }
        }
    }
    let winners = highest(&ranked,&win_loss).into_iter().collect();
    ElectionResult::new("Copeland's method",counts_for(&ranked,&win_loss),winners,vec![]).with_count_type("Win-loss",false)
}

/// Candidates sharing the best Copeland score. More than one means an unresolved tie.
pub fn top_scorers(result:&ElectionResult) -> Vec<CandidateIndex> {
    match result.counts.values().max() {
        Some(&best) => result.counts.iter().filter(|&(_,&v)|v==best).map(|(&c,_)|c).collect(),
        None => vec![],
    }
}

/// Simulate Copeland's method. Ballots rank between 5 and 10 candidates (at most all of them).
pub fn simulate_copeland<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_candidates(election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let n = random_ballot_size(candidates.len(),rng);
    let ballots = election.ranked_ballots(n,&candidates,randomize,rng);
    let mut result = count_copeland(&candidates,&ballots);
    result.details = vec![format!("{} candidates",candidates.len()),format!("{} ranks per ballot",n)];
    if randomize { result.details.push("Randomized ballot generation".to_string()); }
    let tied = top_scorers(&result);
    if tied.len()>1 {
        result.details.push(format!("Unresolved tie between {}",tied.iter().map(|&c|election.metadata.candidate_name(c)).collect::<Vec<_>>().join(", ")));
    }
    Ok(result)
}
