// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! A voter group is a cohort of voters sharing the same preference order over parties.

use serde::{Serialize,Deserialize};
use std::fmt;
use crate::ballot_metadata::{ElectionMetadata, PartyIndex};
use crate::election_error::ElectionError;

#[derive(Debug,Serialize,Deserialize,Clone,PartialEq,Eq,Hash)]
pub struct VoterGroup {
    /// All parties, most preferred first.
    pub preferences : Vec<PartyIndex>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub name : Option<String>,
}

impl VoterGroup {
    /// Make a voter group, checking that `preferences` is a strict ranking of all `num_parties` parties.
    pub fn new(preferences:Vec<PartyIndex>,name:Option<String>,num_parties:usize) -> Result<Self,ElectionError> {
        let mut seen = vec![false;num_parties];
        let valid = preferences.len()==num_parties && preferences.iter().all(|p|{
            if p.0>=num_parties || seen[p.0] { false } else { seen[p.0]=true; true }
        });
        if valid { Ok(VoterGroup{preferences,name}) } else { Err(ElectionError::InvalidPreferenceOrder{preferences,num_parties}) }
    }

    /// Position of the party in this group's preferences, 0 being most preferred.
    pub fn rank_of(&self,party:PartyIndex) -> Option<usize> { self.preferences.iter().position(|&p|p==party) }

    /// A human readable description, using party ids from the metadata.
    pub fn describe(&self,metadata:&ElectionMetadata) -> String {
        let ids = self.preferences.iter().map(|&p|metadata.party(p).id.as_str()).collect::<Vec<_>>();
        match &self.name {
            Some(name) => format!("{} ({})",name,ids.join("")),
            None => format!("Voter Group ({})",ids.join(", ")),
        }
    }
}

impl fmt::Display for VoterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f,"Voter Group ({})",self.preferences.iter().map(|p|p.to_string()).collect::<Vec<_>>().join(", ")),
        }
    }
}

/// A voter group together with the number of voters in it.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct WeightedVoterGroup {
    pub group : VoterGroup,
    pub voters : usize,
}

/// A mapping from voter group to number of voters, produced by population generation.
#[derive(Debug,Serialize,Deserialize,Clone,Default)]
pub struct VoterPopulation {
    pub name : String,
    pub groups : Vec<WeightedVoterGroup>,
}

impl VoterPopulation {
    pub fn new(name:&str,groups:Vec<WeightedVoterGroup>) -> Self { VoterPopulation{ name: name.to_string(), groups } }
    pub fn total_voters(&self) -> usize { self.groups.iter().map(|g|g.voters).sum() }
    pub fn validate(&self) -> Result<(),ElectionError> {
        if self.groups.is_empty() { Err(ElectionError::EmptyPopulation) } else { Ok(()) }
    }
    /// Fraction (0..=1) of the population in the given group. Zero for an empty population.
    pub fn fraction(&self,group:&WeightedVoterGroup) -> f64 {
        let total = self.total_voters();
        if total==0 { 0.0 } else { group.voters as f64/total as f64 }
    }
}
