// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Cardinal methods: score voting and its special cases, and STAR.

use rand::Rng;
use tracing::{debug, trace};
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, ScoreBallot, ScoreRange, Score};
use crate::election_data::Election;
use crate::election_error::{check_candidates, check_seats, ElectionError};
use crate::election_result::{counts_for, CountStep, ElectionResult, StepReason, Tally};
use crate::random_util::random_ballot_size;
use crate::util::{empty_tallies, highest, sort_candidates_desc};

/// Sum of weight times score for each candidate. Unscored candidates contribute nothing.
pub fn tally_scores(candidates:&[CandidateIndex],ballots:&[Weighted<ScoreBallot>]) -> Vec<Tally> {
    let mut tallies = empty_tallies(candidates);
    for weighted in ballots {
        for &(c,score) in &weighted.ballot.0 { tallies[c.0]+=weighted.n as Tally*score; }
    }
    tallies
}

/// Highest total score wins.
pub fn count_score(candidates:&[CandidateIndex],ballots:&[Weighted<ScoreBallot>]) -> ElectionResult {
    let tallies = tally_scores(candidates,ballots);
    let winners = highest(candidates,&tallies).into_iter().collect();
    ElectionResult::new("Score voting",counts_for(candidates,&tallies),winners,vec![]).with_count_type("Score",false)
}

/// Simulate score voting with the given range. Ballots score between 5 and 10 candidates.
pub fn simulate_score_voting<R:Rng>(election:&Election,range:ScoreRange,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    range.validate()?;
    check_candidates(election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let n = random_ballot_size(candidates.len(),rng);
    let ballots = election.score_ballots(n,&candidates,range,randomize,rng);
    let mut result = count_score(&candidates,&ballots);
    result.details = vec![format!("Score range [{}, {}]",range.min,range.max),format!("{} candidates",candidates.len()),format!("{} ranks per ballot",n),"Randomized selection".to_string()];
    Ok(result)
}

/// Combined approval voting: support (1), neutral (0) or oppose (-1).
pub fn simulate_cav<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_score_voting(election,ScoreRange{min:-1,max:1},randomize,rng)?;
    result.details[0]="Scores used: support (1), neutral (0), oppose (-1)".to_string();
    Ok(result.renamed("Combined approval voting (CAV)"))
}

/// Approval voting: score voting with scores 0 or 1.
pub fn simulate_approval<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_score_voting(election,ScoreRange{min:0,max:1},randomize,rng)?;
    result.details[0]="Each approval counts as one point".to_string();
    result.count_type="Approvals".to_string();
    Ok(result.renamed("Approval voting"))
}

/// Weight of ballots scoring a above b, and b above a. Unscored candidates count as `unscored`.
pub fn head_to_head(ballots:&[Weighted<ScoreBallot>],a:CandidateIndex,b:CandidateIndex,unscored:Score) -> (Tally,Tally) {
    let mut support = (0,0);
    for weighted in ballots {
        let score_a = weighted.ballot.score(a).unwrap_or(unscored);
        let score_b = weighted.ballot.score(b).unwrap_or(unscored);
        if score_a>score_b { support.0+=weighted.n as Tally; }
        else if score_b>score_a { support.1+=weighted.n as Tally; }
    }
    support
}

/// STAR bloc: repeatedly take the two highest scoring remaining candidates and elect
/// whichever more ballots prefer. A tied runoff goes to the higher scoring one.
/// Unscored candidates count as 0 in a runoff.
/// Once no more candidates remain than seats, all of them are elected.
pub fn count_star_bloc(candidates:&[CandidateIndex],ballots:&[Weighted<ScoreBallot>],seats:usize) -> ElectionResult {
    let tallies = tally_scores(candidates,ballots);
    let mut transcript = vec![CountStep{ reason: StepReason::FirstPreferences, tallies: tallies.clone() }];
    let mut remaining = sort_candidates_desc(candidates,&tallies);
    let mut winners = vec![];
    while winners.len()<seats {
        if remaining.len()<=seats-winners.len() {
            transcript.push(CountStep{ reason: StepReason::Shortcut(remaining.clone()), tallies: tallies.clone() });
            winners.append(&mut remaining);
            break;
        }
        let (a,b) = (remaining[0],remaining[1]);
        let (for_a,for_b) = head_to_head(ballots,a,b,0);
        trace!("Runoff {} : {} vs {} : {}",a,for_a,b,for_b);
        let (winner,loser) = if for_b>for_a {(b,a)} else {(a,b)};
        let mut runoff = vec![0;tallies.len()];
        runoff[a.0]=for_a;
        runoff[b.0]=for_b;
        transcript.push(CountStep{ reason: StepReason::Runoff(winner,loser), tallies: runoff });
        debug!("Elected {} in runoff",winner);
        winners.push(winner);
        remaining.retain(|&c|c!=winner);
    }
    ElectionResult::new("Score-then-automatic-runoff (STAR) bloc voting",counts_for(candidates,&tallies),winners,vec![]).with_count_type("Score",true).with_transcript(transcript)
}

/// Simulate STAR bloc voting with scores 0 to 5.
pub fn simulate_star_bloc<R:Rng>(election:&Election,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_seats(seats,election.num_candidates())?;
    election.population.validate()?;
    let range = ScoreRange{min:0,max:5};
    let candidates = election.metadata.all_candidates();
    let n = random_ballot_size(candidates.len(),rng);
    let ballots = election.score_ballots(n,&candidates,range,randomize,rng);
    let mut result = count_star_bloc(&candidates,&ballots,seats);
    result.details = vec![format!("{} seats",seats),format!("{} candidates",candidates.len()),format!("{} ranks per ballot",n),"Randomized selection".to_string()];
    Ok(result)
}

/// Score then automatic runoff: single seat STAR bloc.
pub fn simulate_star<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_star_bloc(election,1,randomize,rng)?;
    result.details.remove(0); // seats
    Ok(result.renamed("Score-then-automatic-runoff (STAR)"))
}
