// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The Borda count family. Each ballot awards points by rank position.

use std::fmt;
use std::str::FromStr;
use rand::Rng;
use serde::{Serialize,Deserialize};
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, RankedBallot};
use crate::election_data::Election;
use crate::election_error::{check_candidates, ElectionError};
use crate::election_result::{counts_for, ElectionResult, Tally};
use crate::random_util::random_ballot_size;
use crate::util::{empty_tallies, highest};

#[derive(Clone,Copy,Debug,Serialize,Deserialize,PartialEq,Eq,Default)]
pub enum BordaVariant {
    /// n points for first, n-1 for second...
    #[default]
    Standard,
    /// n-1 points for first, n-2 for second...
    ZeroIndex,
    /// 1 point for first, 1/2 for second, 1/3 for third...
    Dowdall,
}

impl BordaVariant {
    /// Points for the candidate at `rank_index` (0 being first) on a ballot of `n` ranks.
    /// ```
    /// use votesim::borda::BordaVariant;
    /// assert_eq!(5.0,BordaVariant::Standard.points(5,0));
    /// assert_eq!(4.0,BordaVariant::ZeroIndex.points(5,0));
    /// assert_eq!(0.25,BordaVariant::Dowdall.points(5,3));
    /// ```
    pub fn points(self,n:usize,rank_index:usize) -> f64 {
        match self {
            BordaVariant::Standard => (n-rank_index) as f64,
            BordaVariant::ZeroIndex => (n-rank_index-1) as f64,
            BordaVariant::Dowdall => 1.0/(rank_index+1) as f64,
        }
    }
}

impl FromStr for BordaVariant {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(BordaVariant::Standard),
            "zero-index" => Ok(BordaVariant::ZeroIndex),
            "dowdall" => Ok(BordaVariant::Dowdall),
            _ => Err("No such Borda count variant"),
        }
    }
}

impl fmt::Display for BordaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BordaVariant::Standard => "standard",
            BordaVariant::ZeroIndex => "zero-index",
            BordaVariant::Dowdall => "dowdall",
        })
    }
}

/// Points for each candidate on ballots of `n` ranks. Each ballot's points are multiplied
/// by its weight and rounded before being added.
pub fn count_borda(candidates:&[CandidateIndex],ballots:&[Weighted<RankedBallot>],n:usize,variant:BordaVariant) -> ElectionResult {
    let mut scores = empty_tallies(candidates);
    for weighted in ballots {
        for (rank_index,c) in weighted.ballot.0.iter().enumerate().take(n) {
            scores[c.0]+=(variant.points(n,rank_index)*weighted.n as f64).round() as Tally;
        }
    }
    let winners = highest(candidates,&scores).into_iter().collect();
    ElectionResult::new("Borda count",counts_for(candidates,&scores),winners,vec![]).with_count_type("Score",true)
}

/// Simulate a Borda count. Ballots rank between 5 and 10 candidates (at most all of them).
pub fn simulate_borda_count<R:Rng>(election:&Election,variant:BordaVariant,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_candidates(election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let n = random_ballot_size(candidates.len(),rng);
    let ballots = election.ranked_ballots(n,&candidates,randomize,rng);
    let mut result = count_borda(&candidates,&ballots,n,variant);
    match variant {
        BordaVariant::Dowdall => result.details.push("Dowdall system".to_string()),
        BordaVariant::ZeroIndex => result.details.push("Zero-index variant".to_string()),
        BordaVariant::Standard => {}
    }
    result.details.push(format!("{} candidates",candidates.len()));
    result.details.push(format!("{} ranks per ballot",n));
    if randomize { result.details.push("Randomized ballot generation".to_string()); }
    Ok(result)
}
