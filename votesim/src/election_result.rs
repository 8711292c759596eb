// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The record of a completed election: counts, winners, and how it got there.

use std::collections::BTreeMap;
use serde::{Serialize,Deserialize};
use crate::ballot_metadata::{CandidateIndex, ElectionMetadata};
use crate::util::{make_table, sorted_desc};

/// Votes, points, scores or pairwise wins for a candidate. Signed as scores may be negative.
pub type Tally = i64;

/// Why a step in an iterative count happened.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq,Eq)]
pub enum StepReason {
    FirstPreferences,
    /// Elected on reaching the quota.
    ReachedQuota(CandidateIndex),
    /// The surplus of an elected candidate was passed on to next preferences.
    SurplusTransfer(CandidateIndex),
    /// Lowest candidate excluded, votes passed on to next preferences.
    Exclusion(CandidateIndex),
    /// Elected without a quota because the number left equals the number of vacancies, or as the leader of the last two.
    Shortcut(Vec<CandidateIndex>),
    /// A round of Bucklin counting; 1 means first preferences only.
    BucklinRound(usize),
    /// A head to head comparison; the first candidate won.
    Runoff(CandidateIndex,CandidateIndex),
}

/// Tallies for every candidate (indexed by [CandidateIndex]) at the end of a step.
#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct CountStep {
    pub reason : StepReason,
    pub tallies : Vec<Tally>,
}

#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct ElectionResult {
    pub voting_system : String,
    /// final count for each candidate reported on.
    pub counts : BTreeMap<CandidateIndex,Tally>,
    /// in order of election.
    pub winners : Vec<CandidateIndex>,
    /// What the counts are: Votes, Score, Points, Win-loss, Approvals...
    pub count_type : String,
    /// whether a table of results should show percentages.
    pub percent_column : bool,
    pub details : Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty",default)]
    pub transcript : Vec<CountStep>,
}

impl ElectionResult {
    pub fn new(voting_system:&str,counts:BTreeMap<CandidateIndex,Tally>,winners:Vec<CandidateIndex>,details:Vec<String>) -> Self {
        ElectionResult{
            voting_system: voting_system.to_string(),
            counts,
            winners,
            count_type: "Votes".to_string(),
            percent_column: true,
            details,
            transcript: vec![],
        }
    }

    pub fn with_count_type(mut self,count_type:&str,percent_column:bool) -> Self {
        self.count_type=count_type.to_string();
        self.percent_column=percent_column;
        self
    }

    pub fn with_transcript(mut self,transcript:Vec<CountStep>) -> Self {
        self.transcript=transcript;
        self
    }

    /// Change the name, for methods that are a special case of another.
    pub fn renamed(mut self,voting_system:&str) -> Self {
        self.voting_system=voting_system.to_string();
        self
    }

    /// The first winner, if any.
    pub fn winner(&self) -> Option<CandidateIndex> { self.winners.first().copied() }

    pub fn count(&self,candidate:CandidateIndex) -> Option<Tally> { self.counts.get(&candidate).copied() }

    pub fn total(&self) -> Tally { self.counts.values().sum() }

    /// Counts, highest first. Equal counts stay in candidate order.
    pub fn sorted_counts(&self) -> Vec<(CandidateIndex,Tally)> {
        let candidates : Vec<CandidateIndex> = self.counts.keys().cloned().collect();
        let tallies : Vec<Tally> = self.counts.values().cloned().collect();
        sorted_desc(&tallies).into_iter().map(|i|(candidates[i],tallies[i])).collect()
    }

    /// The counts as a text table, with a percent column if requested.
    pub fn counts_table(&self,metadata:&ElectionMetadata) -> Vec<String> {
        let mut widths = vec![20,20];
        let mut header = vec!["Candidate".to_string(),self.count_type.clone()];
        let total = self.total();
        if self.percent_column {
            widths.push(10);
            header.push("Percent".to_string());
        }
        let body : Vec<Vec<String>> = self.sorted_counts().into_iter().map(|(candidate,count)|{
            let mut row = vec![metadata.candidate_name(candidate),count.to_string()];
            if self.percent_column {
                row.push(if total==0 { "-".to_string() } else { format!("{:.2}%",100.0*count as f64/total as f64) });
            }
            row
        }).collect();
        make_table(&widths,&header,&body)
    }

    /// A human readable summary of the result.
    pub fn summary(&self,metadata:&ElectionMetadata) -> String {
        let mut summary = vec![format!("Election Result :: {} :.\n",self.voting_system)];
        summary.extend(self.details.iter().cloned());
        summary.push("\nFinal counts:".to_string());
        summary.extend(self.counts_table(metadata));
        summary.push("\nWinner(s):".to_string());
        summary.extend(self.winners.iter().map(|&w|metadata.candidate_name(w)));
        summary.join("\n")
    }
}

/// Convert a tally array covering `candidates` (indexed by [CandidateIndex]) into a map.
pub fn counts_for(candidates:&[CandidateIndex],tallies:&[Tally]) -> BTreeMap<CandidateIndex,Tally> {
    candidates.iter().map(|&c|(c,tallies[c.0])).collect()
}
