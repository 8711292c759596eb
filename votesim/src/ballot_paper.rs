// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The ballots cast by voter groups. Every ballot carries the number of
//! voters who cast an identical ballot.

use serde::{Serialize,Deserialize};
use crate::ballot_metadata::CandidateIndex;
use crate::election_error::ElectionError;

/// A score given to a candidate on a score ballot. May be negative.
pub type Score = i64;

/// Some identical ballots.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
pub struct Weighted<B> {
    pub ballot : B,
    /// Number of people who voted in this way.
    pub n : usize,
}

impl <B> Weighted<B> {
    pub fn new(ballot:B,n:usize) -> Self { Weighted{ballot,n} }
}

/// An unranked selection of distinct candidates. Order is the order chosen, which carries no meaning.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq,Eq)]
pub struct BlockBallot(pub Vec<CandidateIndex>);

/// Distinct candidates, most preferred first.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq,Eq)]
pub struct RankedBallot(pub Vec<CandidateIndex>);

impl RankedBallot {
    /// The position of the candidate on the ballot, 0 being most preferred, None if not ranked.
    pub fn position(&self,candidate:CandidateIndex) -> Option<usize> { self.0.iter().position(|&c|c==candidate) }
}

/// Scores for some distinct candidates. Unscored candidates are treated as not on the ballot.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq,Eq,Default)]
pub struct ScoreBallot(pub Vec<(CandidateIndex,Score)>);

impl ScoreBallot {
    pub fn score(&self,candidate:CandidateIndex) -> Option<Score> {
        self.0.iter().find(|(c,_)|*c==candidate).map(|(_,s)|*s)
    }
    pub fn contains(&self,candidate:CandidateIndex) -> bool { self.0.iter().any(|(c,_)|*c==candidate) }
}

/// The inclusive range of scores allowed on a score ballot.
#[derive(Clone,Copy,Debug,Serialize,Deserialize,PartialEq,Eq)]
pub struct ScoreRange {
    pub min : Score,
    pub max : Score,
}

impl ScoreRange {
    pub fn new(min:Score,max:Score) -> Result<Self,ElectionError> {
        let range = ScoreRange{min,max};
        range.validate()?;
        Ok(range)
    }
    pub fn validate(&self) -> Result<(),ElectionError> {
        if self.min>self.max { Err(ElectionError::InvalidScoreRange{min:self.min,max:self.max}) } else { Ok(()) }
    }
    pub fn contains(&self,score:Score) -> bool { self.min<=score && score<=self.max }
}

/// Total number of voters represented by some weighted ballots.
pub fn total_weight<B>(ballots:&[Weighted<B>]) -> usize { ballots.iter().map(|b|b.n).sum() }
