// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The output of a simulation run, as written to a JSON file.

use serde::{Serialize,Deserialize};
use votesim::ballot_metadata::ElectionMetadata;
use crate::region::{Region, RegionResult};

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SimulationReport {
    /// The seed used, if any, so the run can be repeated.
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub seed : Option<u64>,
    pub seats : usize,
    pub randomize : bool,
    pub metadata : ElectionMetadata,
    pub region : Region,
    pub results : Vec<RegionResult>,
}
