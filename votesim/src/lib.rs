// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Simulate elections under many voting systems, with voters grouped by their
//! ordering of the parties.

pub mod ballot_metadata;
pub mod voter_group;
pub mod ballot_paper;
pub mod election_error;
pub mod election_data;
pub mod election_result;
pub mod random_util;
pub mod transfer_value;
pub mod util;
pub mod plurality;
pub mod preference_distribution;
pub mod condorcet;
pub mod borda;
pub mod bucklin;
pub mod score_voting;
pub mod voting_method;
