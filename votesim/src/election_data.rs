// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The inputs to an election, and the generation of ballots from them.
//!
//! Ballots are generated fresh for every election, so nothing generated here
//! is shared between separate counts.

use rand::Rng;
use rand::seq::SliceRandom;
use crate::ballot_metadata::{ElectionMetadata, CandidateIndex, PartyIndex};
use crate::voter_group::VoterPopulation;
use crate::ballot_paper::{Weighted, BlockBallot, RankedBallot, ScoreBallot, ScoreRange};
use crate::random_util::{first_or_random, last_or_random, sample_triangular};

/// A contest: who is standing, and who is voting.
#[derive(Clone,Copy,Debug)]
pub struct Election<'a> {
    pub metadata : &'a ElectionMetadata,
    pub population : &'a VoterPopulation,
}

impl <'a> Election<'a> {
    pub fn new(metadata:&'a ElectionMetadata,population:&'a VoterPopulation) -> Self { Election{metadata,population} }

    pub fn num_candidates(&self) -> usize { self.metadata.num_candidates() }

    /// Block voting ballots with up to n candidates.
    ///
    /// Each voter group fills its ballot with candidates of its preferred party, then its
    /// second preferred party, and so on until the ballot is full. If `randomize`, each
    /// party's candidates are shuffled first, otherwise they are taken in the order given.
    pub fn block_ballots<R:Rng>(&self,n:usize,candidates:&[CandidateIndex],randomize:bool,rng:&mut R) -> Vec<Weighted<BlockBallot>> {
        let mut ballots = Vec::with_capacity(self.population.groups.len());
        for weighted in &self.population.groups {
            let mut ballot = vec![];
            for &party in &weighted.group.preferences {
                if ballot.len()>=n { break; }
                let mut choices = self.metadata.candidates_of_party(party,candidates);
                if randomize { choices.shuffle(rng); }
                let room = n-ballot.len();
                ballot.extend(choices.into_iter().take(room));
            }
            ballots.push(Weighted::new(BlockBallot(ballot),weighted.voters));
        }
        ballots
    }

    /// Ranked ballots with n candidates.
    ///
    /// Rank k (0 based) is filled by drawing an unused candidate from each of the group's
    /// k+1 most preferred parties, then choosing one of those draws. Without `randomize`
    /// the first unused candidate of each party is drawn and the draw from the least
    /// preferred of those parties is chosen; with it, both steps are random. So votes
    /// start in the favourite party and drift to other parties as the ballot fills up.
    ///
    /// The ballot is shorter than n only if `candidates` has fewer than n members.
    pub fn ranked_ballots<R:Rng>(&self,n:usize,candidates:&[CandidateIndex],randomize:bool,rng:&mut R) -> Vec<Weighted<RankedBallot>> {
        let mut ballots = Vec::with_capacity(self.population.groups.len());
        for weighted in &self.population.groups {
            let prefs = &weighted.group.preferences;
            let mut ranking : Vec<CandidateIndex> = Vec::with_capacity(n);
            for k in 0..n {
                let choices = self.draw_from_tiers(prefs,k+1,candidates,&ranking,randomize,rng);
                match last_or_random(&choices,randomize,rng) {
                    Some(candidate) => ranking.push(candidate),
                    None => break,
                }
            }
            ballots.push(Weighted::new(RankedBallot(ranking),weighted.voters));
        }
        ballots
    }

    /// Score ballots scoring n candidates.
    ///
    /// Each group gives the maximum score to a candidate of its most preferred party and
    /// the minimum score to a candidate of its least preferred party. Other candidates
    /// are chosen as for ranked ballots and get a random score in [min, max-1] from a
    /// triangular distribution whose mode is higher for more preferred parties. That
    /// draw is rounded to the nearest integer, so every score is a whole number.
    ///
    /// Only the first two scores are reproducible without `randomize`; the others
    /// always come from the random number generator.
    pub fn score_ballots<R:Rng>(&self,n:usize,candidates:&[CandidateIndex],range:ScoreRange,randomize:bool,rng:&mut R) -> Vec<Weighted<ScoreBallot>> {
        let mut ballots = Vec::with_capacity(self.population.groups.len());
        for weighted in &self.population.groups {
            let prefs = &weighted.group.preferences;
            let mut scored : Vec<CandidateIndex> = Vec::with_capacity(n);
            let mut ballot = ScoreBallot::default();
            for k in 0..n {
                let (candidate,score) = match k {
                    0 => {
                        let choices = self.draw_from_tiers(prefs,1,candidates,&scored,randomize,rng);
                        (choices.last().copied(),range.max)
                    }
                    1 => {
                        let reversed : Vec<PartyIndex> = prefs.iter().rev().cloned().collect();
                        let choices = self.draw_from_tiers(&reversed,1,candidates,&scored,randomize,rng);
                        (choices.last().copied(),range.min)
                    }
                    _ => {
                        // the least preferred party already has its candidate, so one fewer tier than ranked ballots.
                        let choices = self.draw_from_tiers(prefs,k-1,candidates,&scored,randomize,rng);
                        match last_or_random(&choices,randomize,rng) {
                            Some(candidate) => {
                                let party = self.metadata.candidate(candidate).party;
                                let party_rank = weighted.group.rank_of(party).unwrap_or(prefs.len());
                                let preference_factor = 1.0-(party_rank as f64/prefs.len() as f64);
                                let high = (range.max-1) as f64;
                                let mode = (preference_factor*high).round();
                                let score = sample_triangular(range.min as f64,high,mode,rng).round() as i64;
                                (Some(candidate),score.clamp(range.min,range.max))
                            }
                            None => (None,range.min),
                        }
                    }
                };
                match candidate {
                    Some(candidate) => {
                        scored.push(candidate);
                        ballot.0.push((candidate,score));
                    }
                    None => break,
                }
            }
            ballots.push(Weighted::new(ballot,weighted.voters));
        }
        ballots
    }

    /// Draw one unused candidate from each of the first `window` parties in `tiers` that
    /// still has one. If none of them do, the window is widened until some party does
    /// or all parties have been tried.
    fn draw_from_tiers<R:Rng>(&self,tiers:&[PartyIndex],window:usize,candidates:&[CandidateIndex],used:&[CandidateIndex],randomize:bool,rng:&mut R) -> Vec<CandidateIndex> {
        let mut window = window.max(1);
        loop {
            let mut choices = vec![];
            for &party in &tiers[..window.min(tiers.len())] {
                let available : Vec<CandidateIndex> = self.metadata.candidates_of_party(party,candidates).into_iter().filter(|c|!used.contains(c)).collect();
                if let Some(candidate) = first_or_random(&available,randomize,rng) { choices.push(candidate); }
            }
            if !choices.is_empty() || window>=tiers.len() { return choices }
            window+=1;
        }
    }
}
