// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! A region is a set of districts, each holding its own election.

use std::fmt;
use rand::Rng;
use serde::{Serialize,Deserialize};
use tracing::{debug, info};
use votesim::ballot_metadata::ElectionMetadata;
use votesim::election_error::ElectionError;
use votesim::election_result::ElectionResult;
use votesim::util::{make_table, sorted_desc};
use votesim::voter_group::VoterGroup;
use votesim::voting_method::VotingMethod;
use crate::district::District;

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Region {
    pub name : String,
    pub districts : Vec<District>,
}

impl Region {
    /// Divide `population` voters amongst `num_districts` districts. Each district but the
    /// last gets between 0.5% of the population and 1.5 times the average district size,
    /// limited by what is left; the last gets the remainder.
    pub fn generate<R:Rng>(name:&str,population:usize,num_districts:usize,groups:&[VoterGroup],rng:&mut R) -> Result<Region,ElectionError> {
        let min_size = (0.005*population as f64).round() as usize;
        let max_size = (1.5*population as f64/num_districts.max(1) as f64).round() as usize;
        let mut remaining = population;
        let mut districts = Vec::with_capacity(num_districts);
        for i in 0..num_districts {
            let size = if i==num_districts-1 { remaining } else {
                let high = max_size.min(remaining);
                rng.random_range(min_size.min(high)..=high)
            };
            remaining-=size;
            districts.push(District::generate(&format!("District {}",i+1),size,groups,rng)?);
        }
        debug!("Generated {} districts for {}",districts.len(),name);
        Ok(Region{ name: name.to_string(), districts })
    }

    pub fn population(&self) -> usize { self.districts.iter().map(|d|d.total_voters()).sum() }

    /// Hold an election by the given method in every district.
    pub fn simulate<R:Rng>(&self,metadata:&ElectionMetadata,method:VotingMethod,seats:usize,randomize:bool,rng:&mut R) -> Result<RegionResult,ElectionError> {
        let mut results = Vec::with_capacity(self.districts.len());
        for district in &self.districts {
            results.push(method.simulate(&district.election(metadata),seats,randomize,rng)?);
        }
        let seats_by_party = seats_by_party(metadata,&results);
        info!("{} : seats by party {:?}",method,seats_by_party);
        Ok(RegionResult{ method, results, seats_by_party })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{} ({} voters, {} districts)",self.name,self.population(),self.districts.len())
    }
}

/// Number of winners from each party, indexed by party.
pub fn seats_by_party(metadata:&ElectionMetadata,results:&[ElectionResult]) -> Vec<usize> {
    let mut seats = vec![0;metadata.parties.len()];
    for winner in results.iter().flat_map(|r|r.winners.iter()) {
        seats[metadata.candidate(*winner).party.0]+=1;
    }
    seats
}

/// The outcome of one method applied in every district of a region.
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RegionResult {
    pub method : VotingMethod,
    /// in district order.
    pub results : Vec<ElectionResult>,
    pub seats_by_party : Vec<usize>,
}

impl RegionResult {
    pub fn total_seats(&self) -> usize { self.seats_by_party.iter().sum() }

    /// Seats won by each party, most first.
    pub fn seats_table(&self,metadata:&ElectionMetadata) -> Vec<String> {
        let total = self.total_seats();
        let seats : Vec<i64> = self.seats_by_party.iter().map(|&s|s as i64).collect();
        let body : Vec<Vec<String>> = sorted_desc(&seats).into_iter().map(|p|vec![
            metadata.parties[p].name.clone(),
            self.seats_by_party[p].to_string(),
            if total==0 { "-".to_string() } else { format!("{:.2}%",100.0*self.seats_by_party[p] as f64/total as f64) },
        ]).collect();
        make_table(&[20,10,10],&["Party".to_string(),"Seats".to_string(),"Percent".to_string()],&body)
    }

    pub fn summary(&self,metadata:&ElectionMetadata) -> String {
        let name = self.results.first().map(|r|r.voting_system.as_str()).unwrap_or_default();
        let mut summary = vec![format!("Region Result :: {} :.\n",name)];
        summary.extend(self.seats_table(metadata));
        summary.join("\n")
    }
}
