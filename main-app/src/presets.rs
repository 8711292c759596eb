// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The standard six parties and the voter groups commonly used with them.

use itertools::Itertools;
use votesim::ballot_metadata::{ElectionMetadata, Party, PartyIndex};
use votesim::voter_group::VoterGroup;

/// Id and name of the parties used when no others are given.
pub const PRESET_PARTIES : [(&str,&str);6] = [
    ("I","Independent"),
    ("M","Moderate"),
    ("R","Republican"),
    ("D","Democrat"),
    ("L","Libertarian"),
    ("G","Green"),
];

/// Named voter groups that resemble real electorates, with their preferences as party ids.
pub const PRESET_VOTER_GROUPS : [(&str,&str);8] = [
    ("Libertarians","LRMIGD"),
    ("Conservative republicans","RLMIDG"),
    ("Moderate republicans","RMLIDG"),
    ("Right-leaning moderates","MRIDLG"),
    ("Left-leaning moderates","MDIRGL"),
    ("Moderate democrats","DMGIRL"),
    ("Progressive democrats","DGMIRL"),
    ("Greens","GDMIRL"),
];

pub fn preset_parties() -> Vec<Party> {
    PRESET_PARTIES.iter().map(|&(id,name)|Party::new(id,name)).collect()
}

/// Whether the metadata has exactly the preset parties, in any order.
pub fn has_preset_parties(metadata:&ElectionMetadata) -> bool {
    metadata.parties.len()==PRESET_PARTIES.len() && PRESET_PARTIES.iter().all(|(id,_)|metadata.find_party(id).is_some())
}

/// Convert party ids, most preferred first, into a validated voter group.
pub fn voter_group_from_ids<'a>(ids:impl IntoIterator<Item=&'a str>,name:Option<String>,metadata:&ElectionMetadata) -> anyhow::Result<VoterGroup> {
    let preferences = ids.into_iter().map(|id|metadata.find_party(id).ok_or_else(||anyhow::anyhow!("No party with id {}",id))).collect::<anyhow::Result<Vec<PartyIndex>>>()?;
    Ok(VoterGroup::new(preferences,name,metadata.parties.len())?)
}

/// The eight named preset voter groups. Needs the preset parties.
pub fn preset_voter_groups(metadata:&ElectionMetadata) -> anyhow::Result<Vec<VoterGroup>> {
    PRESET_VOTER_GROUPS.iter().map(|&(name,pattern)|{
        let ids : Vec<String> = pattern.chars().map(|c|c.to_string()).collect();
        voter_group_from_ids(ids.iter().map(|s|s.as_str()),Some(name.to_string()),metadata)
    }).collect()
}

/// A voter group for every possible ordering of the parties.
/// ```
/// use main_app::presets::all_voter_groups;
/// assert_eq!(720,all_voter_groups(6).len());
/// assert_eq!(2,all_voter_groups(2).len());
/// ```
pub fn all_voter_groups(num_parties:usize) -> Vec<VoterGroup> {
    (0..num_parties).map(PartyIndex).permutations(num_parties).map(|preferences|VoterGroup{ preferences, name: None }).collect()
}
