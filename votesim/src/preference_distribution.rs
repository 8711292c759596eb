// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Single transferable vote, and its single winner special case, instant runoff voting.
//!
//! Each count works on its own copy of the ballots' state: a cursor into each ranking and
//! the fraction of the ballot still counting. The generated ballots are never modified.

use std::collections::BTreeMap;
use num::{BigRational, Zero};
use rand::Rng;
use serde::{Serialize,Deserialize};
use tracing::{debug, trace};
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Weighted, RankedBallot, total_weight};
use crate::election_data::Election;
use crate::election_error::{check_seats, ElectionError};
use crate::election_result::{counts_for, CountStep, ElectionResult, StepReason, Tally};
use crate::transfer_value::{round_rational_down, TransferValue};
use crate::util::{empty_tallies, sort_candidates_desc};

/// Variations on the STV count.
#[derive(Clone,Copy,Debug,Serialize,Deserialize,PartialEq,Eq)]
pub struct StvOptions {
    /// Elect candidates reaching the Droop quota. Otherwise only exclusions happen.
    pub droop_quota : bool,
    /// Pass on the votes of an elected candidate in excess of the quota.
    pub surplus_transfers : bool,
}

impl Default for StvOptions {
    fn default() -> Self { StvOptions{ droop_quota: true, surplus_transfers: true } }
}

/// The Droop quota, the smallest tally that at most `seats` candidates can reach.
/// ```
/// use votesim::preference_distribution::droop_quota;
/// assert_eq!(34,droop_quota(100,2));
/// assert_eq!(51,droop_quota(100,1));
/// ```
pub fn droop_quota(total_votes:Tally,seats:usize) -> Tally { total_votes/(seats as Tally+1)+1 }

/// The number of preferences on each STV ballot: 1.5 times the seats, at least 5, at most the number of candidates.
pub fn stv_ballot_size(seats:usize,num_candidates:usize) -> usize {
    ((1.5*seats as f64).round_ties_even() as usize).max(5).min(num_candidates)
}

/// A ranked ballot part way through being distributed.
/// Preferences with index less than upto are no longer relevant.
#[derive(Clone,Debug)]
struct PartiallyDistributedVote<'a> {
    upto : usize,
    /// The number of voters
    n : usize,
    prefs : &'a [CandidateIndex],
    transfer_value : TransferValue,
}

impl <'a> PartiallyDistributedVote<'a> {
    fn candidate(&self) -> Option<CandidateIndex> { self.prefs.get(self.upto).copied() }
    /// skip to the first continuing candidate at or after the current position.
    fn advance(&mut self,continuing:&[bool]) -> Option<CandidateIndex> {
        while self.upto<self.prefs.len() && !continuing[self.prefs[self.upto].0] { self.upto+=1; }
        self.candidate()
    }
}

/// The main workhorse class that does preference distribution.
pub struct PreferenceDistributor<'a> {
    candidates : &'a [CandidateIndex],
    votes : Vec<PartiallyDistributedVote<'a>>,
    seats : usize,
    options : StvOptions,
    quota : Option<Tally>,
    /// The tally, by candidate.
    tallys : Vec<Tally>,
    continuing : Vec<bool>,
    elected : Vec<CandidateIndex>,
    exhausted : Tally,
    transcript : Vec<CountStep>,
}

impl <'a> PreferenceDistributor<'a> {
    pub fn new(candidates:&'a [CandidateIndex],ballots:&'a [Weighted<RankedBallot>],seats:usize,options:StvOptions) -> Self {
        let tallys = empty_tallies(candidates);
        let mut continuing = vec![false;tallys.len()];
        for c in candidates { continuing[c.0]=true; }
        let votes = ballots.iter().map(|b|PartiallyDistributedVote{ upto: 0, n: b.n, prefs: &b.ballot.0, transfer_value: TransferValue::one() }).collect();
        PreferenceDistributor{
            candidates,
            votes,
            seats,
            options,
            quota: None,
            tallys,
            continuing,
            elected: vec![],
            exhausted: 0,
            transcript: vec![],
        }
    }

    pub fn tally(&self,candidate:CandidateIndex) -> Tally { self.tallys[candidate.0] }
    pub fn remaining_to_elect(&self) -> usize { self.seats-self.elected.len() }

    fn end_of_count_step(&mut self,reason:StepReason) {
        trace!("{:?} {:?} exhausted {}",reason,self.tallys,self.exhausted);
        self.transcript.push(CountStep{ reason, tallies: self.tallys.clone() });
    }

    pub fn distribute_first_preferences(&mut self) {
        for vote in &mut self.votes {
            match vote.advance(&self.continuing) {
                Some(candidate) => self.tallys[candidate.0]+=vote.n as Tally,
                None => self.exhausted+=vote.n as Tally,
            }
        }
        if self.options.droop_quota {
            let total : Tally = self.votes.iter().map(|v|v.n as Tally).sum();
            let quota = droop_quota(total,self.seats);
            debug!("Quota = {}",quota);
            self.quota=Some(quota);
        }
        self.end_of_count_step(StepReason::FirstPreferences);
    }

    /// Whether any ballot of non-zero value sits with the candidate, even if it rounds down to no votes.
    fn holds_ballots(&self,candidate:CandidateIndex) -> bool {
        self.votes.iter().any(|v|v.candidate()==Some(candidate) && !v.transfer_value.is_zero())
    }

    /// continuing candidates that have some votes, highest first, ties in candidate order.
    fn remaining_with_votes(&self) -> Vec<CandidateIndex> {
        let with_votes : Vec<CandidateIndex> = self.candidates.iter().cloned().filter(|&c|self.continuing[c.0] && (self.tallys[c.0]>0 || self.holds_ballots(c))).collect();
        sort_candidates_desc(&with_votes,&self.tallys)
    }

    fn declare_elected(&mut self,who:CandidateIndex) {
        debug!("Elected {}",who);
        self.elected.push(who);
        self.continuing[who.0]=false;
    }

    /// Move the votes currently sitting with `from` (no longer continuing) to their next continuing
    /// preference, first multiplying their value by `factor`. The amount each candidate receives is
    /// rounded down, as is the amount exhausted.
    fn transfer_votes_of(&mut self,from:CandidateIndex,factor:Option<&TransferValue>) {
        let mut received : BTreeMap<CandidateIndex,BigRational> = BTreeMap::new();
        let mut exhausted = BigRational::zero();
        for vote in self.votes.iter_mut().filter(|v|v.candidate()==Some(from)) {
            if let Some(factor) = factor { vote.transfer_value=vote.transfer_value.compose(factor); }
            let value = vote.transfer_value.mul(vote.n);
            match vote.advance(&self.continuing) {
                Some(to) => *received.entry(to).or_insert_with(BigRational::zero)+=value,
                None => exhausted+=value,
            }
        }
        for (to,value) in received {
            self.tallys[to.0]+=round_rational_down(&value);
        }
        self.exhausted+=round_rational_down(&exhausted);
    }

    /// Elect the candidate and, if there are still seats to fill, pass on their surplus.
    /// Without surplus transfers, votes for an elected candidate stay with them.
    fn elect_by_quota(&mut self,who:CandidateIndex,quota:Tally) {
        let votes = self.tally(who);
        let surplus = votes-quota;
        self.declare_elected(who);
        self.tallys[who.0]=quota;
        self.end_of_count_step(StepReason::ReachedQuota(who));
        if self.remaining_to_elect()==0 { return; }
        let factor = if self.options.surplus_transfers { TransferValue::from_surplus(surplus,votes) } else { TransferValue::from_surplus(0,votes) };
        self.transfer_votes_of(who,Some(&factor));
        if self.options.surplus_transfers && surplus>0 {
            debug!("Distributed surplus {} of {}",surplus,who);
            self.end_of_count_step(StepReason::SurplusTransfer(who));
        }
    }

    fn exclude(&mut self,who:CandidateIndex) {
        debug!("Excluding {}",who);
        self.continuing[who.0]=false;
        self.tallys[who.0]=0;
        self.transfer_votes_of(who,None);
        self.end_of_count_step(StepReason::Exclusion(who));
    }

    /// Elect everyone with votes, then fill any seats still empty with the continuing candidates without votes, in candidate order.
    fn elect_all_remaining(&mut self,remaining:Vec<CandidateIndex>) {
        let mut group = remaining;
        let without_votes : Vec<CandidateIndex> = self.candidates.iter().cloned().filter(|c|self.continuing[c.0] && !group.contains(c)).collect();
        group.extend(without_votes);
        group.truncate(self.remaining_to_elect());
        for &c in &group { self.declare_elected(c); }
        self.end_of_count_step(StepReason::Shortcut(group));
    }

    /// One election or exclusion. Returns false when all seats are filled.
    pub fn step(&mut self) -> bool {
        if self.remaining_to_elect()==0 { return false; }
        let remaining = self.remaining_with_votes();
        if self.seats==1 && remaining.len()==2 {
            // last two standing, the leader wins.
            self.declare_elected(remaining[0]);
            self.end_of_count_step(StepReason::Shortcut(vec![remaining[0]]));
            return false;
        }
        if remaining.len()<=self.remaining_to_elect() {
            self.elect_all_remaining(remaining);
            return false;
        }
        if let Some(quota) = self.quota {
            let reached : Vec<CandidateIndex> = remaining.iter().cloned().take_while(|&c|self.tally(c)>=quota).take(self.remaining_to_elect()).collect();
            if !reached.is_empty() {
                for c in reached { self.elect_by_quota(c,quota); }
                return self.remaining_to_elect()>0;
            }
        }
        if let Some(&lowest) = remaining.last() { self.exclude(lowest); }
        true
    }

    pub fn go(mut self) -> StvOutcome {
        self.distribute_first_preferences();
        while self.step() {}
        StvOutcome{
            tallies: self.tallys,
            elected: self.elected,
            quota: self.quota,
            exhausted: self.exhausted,
            transcript: self.transcript,
        }
    }
}

/// What happened in an STV count.
#[derive(Clone,Debug)]
pub struct StvOutcome {
    /// final tally by candidate index. Elected candidates keep the quota, excluded candidates 0.
    pub tallies : Vec<Tally>,
    /// in order of election.
    pub elected : Vec<CandidateIndex>,
    pub quota : Option<Tally>,
    pub exhausted : Tally,
    pub transcript : Vec<CountStep>,
}

/// Count ranked ballots by STV.
pub fn count_stv(candidates:&[CandidateIndex],ballots:&[Weighted<RankedBallot>],seats:usize,options:StvOptions) -> ElectionResult {
    let outcome = PreferenceDistributor::new(candidates,ballots,seats,options).go();
    let method = if options.droop_quota {
        format!("Using Droop quota ({}) {} surplus transfers",outcome.quota.unwrap_or_default(),if options.surplus_transfers {"with"} else {"without"})
    } else { "Elimination transfers only".to_string() };
    let details = vec![format!("{} seats",seats),format!("{} candidates",candidates.len()),format!("{} votes cast",total_weight(ballots)),format!("{} votes exhausted",outcome.exhausted),method];
    ElectionResult::new("Single transferable vote (STV)",counts_for(candidates,&outcome.tallies),outcome.elected,details).with_transcript(outcome.transcript)
}

/// Simulate single transferable vote. Each ballot ranks 1.5 times the number of seats, but at least 5 (and at most the number of candidates).
pub fn simulate_stv<R:Rng>(election:&Election,seats:usize,options:StvOptions,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    check_seats(seats,election.num_candidates())?;
    election.population.validate()?;
    let candidates = election.metadata.all_candidates();
    let n = stv_ballot_size(seats,candidates.len());
    let ballots = election.ranked_ballots(n,&candidates,randomize,rng);
    let mut result = count_stv(&candidates,&ballots,seats,options);
    result.details.insert(2,format!("{} ranks per ballot",n));
    if randomize { result.details.insert(3,"Randomized ballot generation".to_string()); }
    Ok(result)
}

/// Simulate instant runoff voting: single seat STV, excluding the lowest candidate until two remain.
pub fn simulate_irv<R:Rng>(election:&Election,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
    let mut result = simulate_stv(election,1,StvOptions{ droop_quota: false, surplus_transfers: false },randomize,rng)?;
    result.details.remove(0); // seats
    result.details.pop(); // counting method
    Ok(result.renamed("Instant-runoff voting (IRV)"))
}
