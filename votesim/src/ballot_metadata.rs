// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Information about the contest, such as parties and candidates.

use serde::{Serialize,Deserialize};
use std::fmt;
use std::collections::HashMap;

/// a candidate, referred to by position in the candidate list, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// a party, referred to by position in the party list, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyIndex(pub usize);

// type alias really, don't want long display
impl fmt::Display for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// A formal political organization or ideological affiliation.
/// Two parties are the same party iff they have the same id.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct Party {
    /// Short unique identifier, typically a letter such as "R".
    pub id : String,
    /// The name of the party
    pub name : String,
}

impl PartialEq for Party {
    fn eq(&self, other: &Self) -> bool { self.id==other.id }
}
impl Eq for Party {}

impl Party {
    pub fn new(id:&str,name:&str) -> Self { Party{ id: id.to_string(), name: name.to_string() } }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.name) }
}

/// A candidate is a member of a party identified by a number within that party.
#[derive(Debug,Serialize,Deserialize,Clone,Copy,PartialEq,Eq,Hash)]
pub struct Candidate {
    pub party : PartyIndex,
    /// number within the party, 0 being the first.
    pub id : usize,
}

/// The parties and candidates standing in a contest.
#[derive(Debug,Serialize,Deserialize,Clone,Default)]
pub struct ElectionMetadata {
    pub parties : Vec<Party>,
    pub candidates : Vec<Candidate>,
}

impl ElectionMetadata {
    pub fn party(&self,index:PartyIndex) -> &Party { &self.parties[index.0] }
    pub fn candidate(&self,index:CandidateIndex) -> &Candidate { &self.candidates[index.0] }
    pub fn num_candidates(&self) -> usize { self.candidates.len() }

    /// The human readable name of a candidate, e.g. "Republican 0".
    pub fn candidate_name(&self,index:CandidateIndex) -> String {
        let candidate = self.candidate(index);
        format!("{} {}",self.party(candidate.party).name,candidate.id)
    }

    /// All candidates, in input order.
    pub fn all_candidates(&self) -> Vec<CandidateIndex> { (0..self.candidates.len()).map(CandidateIndex).collect() }

    /// The members of the given party amongst `candidates`, in the order given.
    pub fn candidates_of_party(&self,party:PartyIndex,candidates:&[CandidateIndex]) -> Vec<CandidateIndex> {
        candidates.iter().cloned().filter(|&c|self.candidate(c).party==party).collect()
    }

    /// Find a party by its short id.
    pub fn find_party(&self,id:&str) -> Option<PartyIndex> {
        self.parties.iter().position(|p|p.id==id).map(PartyIndex)
    }

    /// Make `per_party` candidates for each party, unless overridden by `overrides` (keyed by party id).
    ///
    /// ```
    /// use votesim::ballot_metadata::{ElectionMetadata, Party, CandidateIndex};
    /// use std::collections::HashMap;
    /// let parties = vec![Party::new("R","Republican"),Party::new("D","Democrat")];
    /// let overrides = HashMap::from([("D".to_string(),1)]);
    /// let metadata = ElectionMetadata::generate(parties,2,&overrides);
    /// assert_eq!(3,metadata.num_candidates());
    /// assert_eq!("Republican 1",metadata.candidate_name(CandidateIndex(1)));
    /// assert_eq!("Democrat 0",metadata.candidate_name(CandidateIndex(2)));
    /// ```
    pub fn generate(parties:Vec<Party>,per_party:usize,overrides:&HashMap<String,usize>) -> Self {
        let mut candidates = vec![];
        for (party_index,party) in parties.iter().enumerate() {
            let number = overrides.get(&party.id).cloned().unwrap_or(per_party);
            for id in 0..number {
                candidates.push(Candidate{ party: PartyIndex(party_index), id });
            }
        }
        ElectionMetadata{ parties, candidates }
    }
}
