// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! A scenario file describes the parties, candidates and voters for a simulation.
//! Anything it leaves out comes from the command line or the presets.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use serde::{Serialize,Deserialize};
use tracing::info;
use votesim::ballot_metadata::{ElectionMetadata, Party};
use votesim::voter_group::VoterGroup;
use crate::presets::{all_voter_groups, has_preset_parties, preset_parties, preset_voter_groups, voter_group_from_ids};

#[derive(Debug,Clone,Serialize,Deserialize,Default)]
pub struct Scenario {
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub parties : Option<Vec<Party>>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub candidates_per_party : Option<usize>,
    /// Number of candidates for particular parties, by party id.
    #[serde(skip_serializing_if = "HashMap::is_empty",default)]
    pub candidates_override : HashMap<String,usize>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub voter_groups : Option<Vec<ScenarioVoterGroup>>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub voters : Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub districts : Option<usize>,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ScenarioVoterGroup {
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub name : Option<String>,
    /// party ids, most preferred first.
    pub preferences : Vec<String>,
}

impl Scenario {
    pub fn load(path:&Path) -> anyhow::Result<Scenario> {
        let scenario = serde_json::from_reader(File::open(path)?)?;
        info!("Loaded scenario {}",path.display());
        Ok(scenario)
    }

    /// The parties and candidates, using the preset parties if none are given.
    pub fn metadata(&self,default_candidates_per_party:usize) -> ElectionMetadata {
        let parties = self.parties.clone().unwrap_or_else(preset_parties);
        ElectionMetadata::generate(parties,self.candidates_per_party.unwrap_or(default_candidates_per_party),&self.candidates_override)
    }

    /// The voter groups given, or else the presets if the parties are the preset ones
    /// and `all_patterns` is false, or else every ordering of the parties.
    pub fn voter_groups(&self,metadata:&ElectionMetadata,all_patterns:bool) -> anyhow::Result<Vec<VoterGroup>> {
        match &self.voter_groups {
            Some(groups) => groups.iter().map(|g|voter_group_from_ids(g.preferences.iter().map(|s|s.as_str()),g.name.clone(),metadata)).collect(),
            None if !all_patterns && has_preset_parties(metadata) => preset_voter_groups(metadata),
            None => Ok(all_voter_groups(metadata.parties.len())),
        }
    }
}
