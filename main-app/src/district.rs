// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! A district is the voter population of a constituency.

use std::fmt;
use rand::Rng;
use serde::{Serialize,Deserialize};
use votesim::ballot_metadata::ElectionMetadata;
use votesim::election_data::Election;
use votesim::election_error::ElectionError;
use votesim::util::make_table;
use votesim::voter_group::{VoterGroup, VoterPopulation, WeightedVoterGroup};

/// The most any voter group but the last can get, as a fraction of the district.
pub const MAX_GROUP_FRACTION : f64 = 0.4;

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct District {
    pub population : VoterPopulation,
}

impl District {
    /// Share `total_voters` randomly amongst the voter groups. Each group but the last gets
    /// up to 40% of the district (or whatever is left, if less); the last gets the remainder.
    pub fn generate<R:Rng>(name:&str,total_voters:usize,groups:&[VoterGroup],rng:&mut R) -> Result<District,ElectionError> {
        if groups.is_empty() { return Err(ElectionError::EmptyPopulation) }
        let max_voters = (MAX_GROUP_FRACTION*total_voters as f64).round() as usize;
        let mut remaining = total_voters;
        let mut weighted = Vec::with_capacity(groups.len());
        for (i,group) in groups.iter().enumerate() {
            let voters = if i==groups.len()-1 { remaining } else { rng.random_range(0..=max_voters.min(remaining)) };
            remaining-=voters;
            weighted.push(WeightedVoterGroup{ group: group.clone(), voters });
        }
        Ok(District{ population: VoterPopulation::new(name,weighted) })
    }

    pub fn name(&self) -> &str { &self.population.name }
    pub fn total_voters(&self) -> usize { self.population.total_voters() }

    /// The election held in this district with the given candidates.
    pub fn election<'a>(&'a self,metadata:&'a ElectionMetadata) -> Election<'a> { Election::new(metadata,&self.population) }

    /// Voter groups, largest first, as a text table.
    pub fn voter_map_table(&self,metadata:&ElectionMetadata) -> Vec<String> {
        let total = self.total_voters();
        let mut groups : Vec<&WeightedVoterGroup> = self.population.groups.iter().collect();
        groups.sort_by_key(|g|std::cmp::Reverse(g.voters));
        let body : Vec<Vec<String>> = groups.into_iter().map(|g|vec![
            g.group.describe(metadata),
            g.voters.to_string(),
            if total==0 { "-".to_string() } else { format!("{:.2}%",100.0*self.population.fraction(g)) },
        ]).collect();
        make_table(&[50,20,10],&["Voter group".to_string(),"Voters".to_string(),"Percent".to_string()],&body)
    }

    pub fn summary(&self,metadata:&ElectionMetadata) -> String {
        let mut summary = vec![format!("{} :.\n",self)];
        summary.extend(self.voter_map_table(metadata));
        summary.join("\n")
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{} ({} voters)",self.name(),self.total_voters())
    }
}
