// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Whole simulations: ballot generation followed by counting.

use std::collections::HashMap;
use votesim::ballot_metadata::{CandidateIndex, ElectionMetadata, Party};
use votesim::ballot_paper::ScoreRange;
use votesim::election_data::Election;
use votesim::election_error::ElectionError;
use votesim::election_result::StepReason;
use votesim::plurality::{simulate_fptp, simulate_limited_voting, simulate_mntv, simulate_trs};
use votesim::preference_distribution::{droop_quota, simulate_irv, simulate_stv, StvOptions};
use votesim::random_util::make_rng;
use votesim::score_voting::{simulate_approval, simulate_cav, simulate_score_voting};
use votesim::voter_group::{VoterGroup, VoterPopulation, WeightedVoterGroup};
use votesim::voting_method::{MethodDetails, VotingMethod};

/// Parties named by single letter ids; groups given as a string of party ids, most preferred first.
fn setup(parties:&[(&str,&str)],per_party:usize,groups:&[(&str,usize)]) -> (ElectionMetadata,VoterPopulation) {
    let parties = parties.iter().map(|&(id,name)|Party::new(id,name)).collect();
    let metadata = ElectionMetadata::generate(parties,per_party,&HashMap::new());
    let groups = groups.iter().map(|&(pattern,voters)|{
        let prefs = pattern.chars().map(|c|metadata.find_party(&c.to_string()).unwrap()).collect();
        WeightedVoterGroup{ group: VoterGroup::new(prefs,None,metadata.parties.len()).unwrap(), voters }
    }).collect();
    (metadata,VoterPopulation::new("Test district",groups))
}

const RDG : [(&str,&str);3] = [("R","Republican"),("D","Democrat"),("G","Green")];

#[test]
fn fptp_single_group() {
    let (metadata,population) = setup(&RDG[..2],2,&[("RD",100)]);
    let election = Election::new(&metadata,&population);
    let result = simulate_fptp(&election,false,&mut make_rng(Some(1))).unwrap();
    assert_eq!(vec![CandidateIndex(0)],result.winners);
    assert_eq!(Some(100),result.count(CandidateIndex(0)));
    assert_eq!(Some(0),result.count(CandidateIndex(3)));
    assert_eq!("First-past-the-post (FPTP)",result.voting_system);
    assert_eq!(vec!["4 candidates".to_string()],result.details);
    let summary = result.summary(&metadata);
    assert!(summary.starts_with("Election Result :: First-past-the-post (FPTP) :."));
    assert!(summary.ends_with("Winner(s):\nRepublican 0"));
    let table = result.counts_table(&metadata);
    assert_eq!(format!("{:<20}|{:<20}|{:<10}","Republican 0","100","100.00%"),table[2]);
    assert_eq!(6,table.len());
}

#[test]
fn ntv_counts_add_up() {
    let (metadata,population) = setup(&RDG,3,&[("RDG",50),("DGR",30),("GRD",20)]);
    let election = Election::new(&metadata,&population);
    let result = simulate_mntv(&election,3,false,&mut make_rng(Some(1))).unwrap();
    assert_eq!(300,result.total());
    assert_eq!(vec![CandidateIndex(0),CandidateIndex(1),CandidateIndex(2)],result.winners);
    let top : Vec<CandidateIndex> = result.sorted_counts().into_iter().take(3).map(|(c,_)|c).collect();
    assert_eq!(top,result.winners);
}

#[test]
fn limited_voting_has_fewer_votes_than_seats() {
    let (metadata,population) = setup(&RDG,3,&[("RDG",50),("DGR",30),("GRD",20)]);
    let election = Election::new(&metadata,&population);
    let mut rng = make_rng(Some(7));
    let result = simulate_limited_voting(&election,3,false,&mut rng).unwrap();
    assert_eq!("2 votes per ballot",result.details[0]);
    assert_eq!(200,result.total());
    let result = simulate_limited_voting(&election,1,false,&mut rng).unwrap();
    assert_eq!("1 votes per ballot",result.details[0]);
}

#[test]
fn trs_goes_to_second_round() {
    let (metadata,population) = setup(&RDG,1,&[("RDG",40),("DRG",35),("GDR",25)]);
    let election = Election::new(&metadata,&population);
    let result = simulate_trs(&election,false,&mut make_rng(Some(1))).unwrap();
    assert_eq!(vec![CandidateIndex(1)],result.winners);
    assert_eq!(Some(40),result.count(CandidateIndex(0)));
    assert_eq!(Some(60),result.count(CandidateIndex(1)));
    assert_eq!(None,result.count(CandidateIndex(2)));
    assert_eq!(StepReason::Runoff(CandidateIndex(1),CandidateIndex(0)),result.transcript[1].reason);
}

#[test]
fn trs_majority_in_first_round() {
    let (metadata,population) = setup(&RDG[..2],1,&[("RD",60),("DR",40)]);
    let election = Election::new(&metadata,&population);
    let result = simulate_trs(&election,false,&mut make_rng(Some(1))).unwrap();
    assert_eq!(vec![CandidateIndex(0)],result.winners);
    assert_eq!(1,result.transcript.len());
    assert_eq!(100,result.total());
}

#[test]
fn stv_elects_exactly_the_seats() {
    let (metadata,population) = setup(&RDG,3,&[("RDG",523),("DGR",311),("GRD",166),("GDR",20)]);
    let election = Election::new(&metadata,&population);
    let mut rng = make_rng(Some(2));
    for seats in 1..=9 {
        for randomize in [false,true] {
            let result = simulate_stv(&election,seats,StvOptions::default(),randomize,&mut rng).unwrap();
            assert_eq!(seats,result.winners.len());
        }
    }
}

#[test]
fn stv_is_reproducible_without_randomization() {
    let (metadata,population) = setup(&RDG,3,&[("RDG",523),("DGR",311),("GRD",166)]);
    let election = Election::new(&metadata,&population);
    let first = simulate_stv(&election,3,StvOptions::default(),false,&mut make_rng(Some(1))).unwrap();
    let second = simulate_stv(&election,3,StvOptions::default(),false,&mut make_rng(Some(99))).unwrap();
    assert_eq!(first.winners,second.winners);
    assert_eq!(first.counts,second.counts);
    let first = simulate_irv(&election,false,&mut make_rng(Some(1))).unwrap();
    let second = simulate_irv(&election,false,&mut make_rng(Some(99))).unwrap();
    assert_eq!(first.winners,second.winners);
    assert_eq!(vec!["9 candidates".to_string(),"5 ranks per ballot".to_string(),"1000 votes cast".to_string()],first.details[..3].to_vec());
    assert!(first.details[3].ends_with(" votes exhausted"));
    assert_eq!(4,first.details.len());
}

#[test]
fn droop_quota_cannot_be_reached_by_too_many() {
    for total in 0..200 {
        for seats in 1..10 {
            assert!(droop_quota(total,seats)*(seats as i64+1)>total);
        }
    }
}

#[test]
fn score_variants_relabel() {
    let (metadata,population) = setup(&RDG,2,&[("RDG",50),("GDR",50)]);
    let election = Election::new(&metadata,&population);
    let mut rng = make_rng(Some(5));
    let cav = simulate_cav(&election,false,&mut rng).unwrap();
    assert_eq!("Scores used: support (1), neutral (0), oppose (-1)",cav.details[0]);
    assert_eq!("Combined approval voting (CAV)",cav.voting_system);
    let approval = simulate_approval(&election,false,&mut rng).unwrap();
    assert_eq!("Approvals",approval.count_type);
    assert!(approval.total()<=100*6);
    assert!(approval.counts.values().all(|&c|c>=0));
    let score = simulate_score_voting(&election,ScoreRange{min:0,max:10},false,&mut rng).unwrap();
    assert_eq!("Score range [0, 10]",score.details[0]);
}

#[test]
fn invalid_inputs_are_rejected() {
    let (metadata,population) = setup(&RDG,1,&[("RDG",10)]);
    let election = Election::new(&metadata,&population);
    let mut rng = make_rng(Some(1));
    for method in VotingMethod::ALL {
        if method.is_multi_seat() {
            assert_eq!(Err(ElectionError::NotEnoughCandidates{candidates:3,needed:4}),method.simulate(&election,4,false,&mut rng).map(|_|()),"{}",method);
            assert_eq!(Err(ElectionError::NoSeatsToFill),method.simulate(&election,0,false,&mut rng).map(|_|()),"{}",method);
        }
    }
    assert_eq!(Err(ElectionError::InvalidScoreRange{min:3,max:1}),simulate_score_voting(&election,ScoreRange{min:3,max:1},false,&mut rng).map(|_|()));
    let (metadata,population) = setup(&RDG[..1],1,&[("R",10)]);
    let election = Election::new(&metadata,&population);
    for method in VotingMethod::ALL {
        assert_eq!(Err(ElectionError::NotEnoughCandidates{candidates:1,needed:2}),method.simulate(&election,1,false,&mut rng).map(|_|()),"{}",method);
    }
}

#[test]
fn empty_population_is_rejected() {
    let (metadata,_) = setup(&RDG,2,&[]);
    let empty = VoterPopulation::new("Nobody",vec![]);
    let election = Election::new(&metadata,&empty);
    let mut rng = make_rng(Some(1));
    for method in VotingMethod::ALL {
        assert_eq!(Err(ElectionError::EmptyPopulation),method.simulate(&election,2,false,&mut rng).map(|_|()),"{}",method);
    }
}

#[test]
fn every_method_elects() {
    let (metadata,population) = setup(&RDG,4,&[("RDG",500),("DRG",300),("GDR",150),("GRD",50)]);
    let election = Election::new(&metadata,&population);
    let mut rng = make_rng(Some(11));
    for method in VotingMethod::ALL {
        for randomize in [false,true] {
            let result = method.simulate(&election,3,randomize,&mut rng).unwrap();
            assert_eq!(if method.is_multi_seat() {3} else {1},result.winners.len(),"{}",method);
            assert!(!result.counts.is_empty());
        }
    }
}

#[test]
fn method_names() {
    for method in VotingMethod::ALL {
        assert_eq!(Ok(method),method.to_string().parse::<VotingMethod>());
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(format!("\"{}\"",method),json);
        assert_eq!(method,serde_json::from_str::<VotingMethod>(&json).unwrap());
    }
    assert_eq!(Ok(VotingMethod::Mntv),"block".parse::<VotingMethod>());
    assert!("plurality-at-large".parse::<VotingMethod>().is_err());
    let names : Vec<String> = MethodDetails::list().into_iter().map(|d|d.name).collect();
    assert_eq!(VotingMethod::ALL.iter().map(|m|m.to_string()).collect::<Vec<_>>(),names);
}
