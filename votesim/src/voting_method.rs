// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The supported voting methods, as a single enum that can be named on a command line
//! or in a JSON file and simulated uniformly.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use rand::Rng;
use serde::{Serialize,Deserialize};
use crate::ballot_paper::ScoreRange;
use crate::borda::{simulate_borda_count, BordaVariant};
use crate::bucklin::simulate_bucklin;
use crate::condorcet::simulate_copeland;
use crate::election_data::Election;
use crate::election_error::ElectionError;
use crate::election_result::ElectionResult;
use crate::plurality::{simulate_fptp, simulate_limited_voting, simulate_mntv, simulate_sntv, simulate_trs};
use crate::preference_distribution::{simulate_irv, simulate_stv, StvOptions};
use crate::score_voting::{simulate_approval, simulate_cav, simulate_score_voting, simulate_star, simulate_star_bloc};

#[derive(Copy,Clone,Debug,Serialize,Deserialize,PartialEq,Eq,Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VotingMethod {
    Sntv,
    Fptp,
    Mntv,
    LimitedVoting,
    Trs,
    Stv,
    /// STV without surplus transfers.
    StvNoSurplus,
    Irv,
    Copeland,
    Borda,
    BordaZeroIndex,
    BordaDowdall,
    Bucklin,
    /// Score voting with scores 0 to 5.
    Score,
    Cav,
    Approval,
    Star,
    StarBloc,
}

impl VotingMethod {
    pub const ALL : [VotingMethod;18] = [
        VotingMethod::Sntv,VotingMethod::Fptp,VotingMethod::Mntv,VotingMethod::LimitedVoting,VotingMethod::Trs,
        VotingMethod::Stv,VotingMethod::StvNoSurplus,VotingMethod::Irv,VotingMethod::Copeland,
        VotingMethod::Borda,VotingMethod::BordaZeroIndex,VotingMethod::BordaDowdall,VotingMethod::Bucklin,
        VotingMethod::Score,VotingMethod::Cav,VotingMethod::Approval,VotingMethod::Star,VotingMethod::StarBloc,
    ];

    /// Whether the seats argument to [VotingMethod::simulate] is used. Otherwise exactly one candidate is elected.
    pub fn is_multi_seat(self) -> bool {
        matches!(self,VotingMethod::Sntv|VotingMethod::Mntv|VotingMethod::LimitedVoting|VotingMethod::Stv|VotingMethod::StvNoSurplus|VotingMethod::StarBloc)
    }

    /// Generate ballots for the election and count them by this method.
    pub fn simulate<R:Rng>(self,election:&Election,seats:usize,randomize:bool,rng:&mut R) -> Result<ElectionResult,ElectionError> {
        match self {
            VotingMethod::Sntv => simulate_sntv(election,seats,randomize,rng),
            VotingMethod::Fptp => simulate_fptp(election,randomize,rng),
            VotingMethod::Mntv => simulate_mntv(election,seats,randomize,rng),
            VotingMethod::LimitedVoting => simulate_limited_voting(election,seats,randomize,rng),
            VotingMethod::Trs => simulate_trs(election,randomize,rng),
            VotingMethod::Stv => simulate_stv(election,seats,StvOptions::default(),randomize,rng),
            VotingMethod::StvNoSurplus => simulate_stv(election,seats,StvOptions{ droop_quota: true, surplus_transfers: false },randomize,rng),
            VotingMethod::Irv => simulate_irv(election,randomize,rng),
            VotingMethod::Copeland => simulate_copeland(election,randomize,rng),
            VotingMethod::Borda => simulate_borda_count(election,BordaVariant::Standard,randomize,rng),
            VotingMethod::BordaZeroIndex => simulate_borda_count(election,BordaVariant::ZeroIndex,randomize,rng),
            VotingMethod::BordaDowdall => simulate_borda_count(election,BordaVariant::Dowdall,randomize,rng),
            VotingMethod::Bucklin => simulate_bucklin(election,randomize,rng),
            VotingMethod::Score => simulate_score_voting(election,ScoreRange{min:0,max:5},randomize,rng),
            VotingMethod::Cav => simulate_cav(election,randomize,rng),
            VotingMethod::Approval => simulate_approval(election,randomize,rng),
            VotingMethod::Star => simulate_star(election,randomize,rng),
            VotingMethod::StarBloc => simulate_star_bloc(election,seats,randomize,rng),
        }
    }
}

impl FromStr for VotingMethod {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sntv" => Ok(VotingMethod::Sntv),
            "fptp" => Ok(VotingMethod::Fptp),
            "mntv" => Ok(VotingMethod::Mntv),
            "block" => Ok(VotingMethod::Mntv), // the usual name for MNTV.
            "limited-voting" => Ok(VotingMethod::LimitedVoting),
            "trs" => Ok(VotingMethod::Trs),
            "stv" => Ok(VotingMethod::Stv),
            "stv-no-surplus" => Ok(VotingMethod::StvNoSurplus),
            "irv" => Ok(VotingMethod::Irv),
            "copeland" => Ok(VotingMethod::Copeland),
            "borda" => Ok(VotingMethod::Borda),
            "borda-zero-index" => Ok(VotingMethod::BordaZeroIndex),
            "borda-dowdall" => Ok(VotingMethod::BordaDowdall),
            "bucklin" => Ok(VotingMethod::Bucklin),
            "score" => Ok(VotingMethod::Score),
            "cav" => Ok(VotingMethod::Cav),
            "approval" => Ok(VotingMethod::Approval),
            "star" => Ok(VotingMethod::Star),
            "star-bloc" => Ok(VotingMethod::StarBloc),
            _ => Err("No such voting method supported")
        }
    }
}

impl Display for VotingMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VotingMethod::Sntv => "sntv",
            VotingMethod::Fptp => "fptp",
            VotingMethod::Mntv => "mntv",
            VotingMethod::LimitedVoting => "limited-voting",
            VotingMethod::Trs => "trs",
            VotingMethod::Stv => "stv",
            VotingMethod::StvNoSurplus => "stv-no-surplus",
            VotingMethod::Irv => "irv",
            VotingMethod::Copeland => "copeland",
            VotingMethod::Borda => "borda",
            VotingMethod::BordaZeroIndex => "borda-zero-index",
            VotingMethod::BordaDowdall => "borda-dowdall",
            VotingMethod::Bucklin => "bucklin",
            VotingMethod::Score => "score",
            VotingMethod::Cav => "cav",
            VotingMethod::Approval => "approval",
            VotingMethod::Star => "star",
            VotingMethod::StarBloc => "star-bloc",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize,Clone,Debug)]
pub struct MethodDetails {
    pub name : String,
    pub description : String,
}

impl MethodDetails {
    pub fn list() -> Vec<MethodDetails> {
        let describe = |method:VotingMethod,description:&str| MethodDetails{ name: method.to_string(), description: description.to_string() };
        vec![
            describe(VotingMethod::Sntv,"Single non-transferable vote. One vote each; the candidates with the most votes fill the seats."),
            describe(VotingMethod::Fptp,"First past the post. One vote each; the candidate with the most votes wins."),
            describe(VotingMethod::Mntv,"Multiple non-transferable vote, or block voting. As many votes as seats. Also accepted as block."),
            describe(VotingMethod::LimitedVoting,"Like MNTV, but with fewer votes than seats."),
            describe(VotingMethod::Trs,"Two round system. Without a majority in the first round, the top two go to a second round."),
            describe(VotingMethod::Stv,"Single transferable vote with the Droop quota and fractional surplus transfers."),
            describe(VotingMethod::StvNoSurplus,"Single transferable vote with the Droop quota. Votes for elected candidates stay with them."),
            describe(VotingMethod::Irv,"Instant runoff voting. The lowest candidate is excluded until two remain."),
            describe(VotingMethod::Copeland,"Copeland's method. Pairwise wins minus pairwise losses; ties are not resolved."),
            describe(VotingMethod::Borda,"Borda count. n points for a first preference on a ballot of n ranks, n-1 for second..."),
            describe(VotingMethod::BordaZeroIndex,"Borda count. n-1 points for a first preference, down to 0 for the last."),
            describe(VotingMethod::BordaDowdall,"Dowdall system. 1 point for a first preference, 1/2 for a second, 1/3 for a third..."),
            describe(VotingMethod::Bucklin,"Bucklin voting. Further preferences are added round by round until someone has a majority."),
            describe(VotingMethod::Score,"Score voting with scores from 0 to 5. Highest total wins."),
            describe(VotingMethod::Cav,"Combined approval voting. Support (1), neutral (0) or oppose (-1)."),
            describe(VotingMethod::Approval,"Approval voting. Each approval counts as one point."),
            describe(VotingMethod::Star,"Score then automatic runoff. Scores 0 to 5, then the top two face a head to head runoff."),
            describe(VotingMethod::StarBloc,"STAR bloc voting. Runoffs between the two highest scoring remaining candidates fill each seat."),
        ]
    }
}
