// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Counting rules applied to hand made ballots.

use votesim::ballot_metadata::CandidateIndex;
use votesim::ballot_paper::{BlockBallot, RankedBallot, ScoreBallot, Weighted};
use votesim::borda::{count_borda, BordaVariant};
use votesim::bucklin::count_bucklin;
use votesim::condorcet::{count_copeland, pairwise_support, top_scorers};
use votesim::election_result::StepReason;
use votesim::plurality::count_ntv;
use votesim::preference_distribution::{count_stv, StvOptions};
use votesim::score_voting::{count_score, count_star_bloc, head_to_head};

const A : CandidateIndex = CandidateIndex(0);
const B : CandidateIndex = CandidateIndex(1);
const C : CandidateIndex = CandidateIndex(2);
const ABC : [CandidateIndex;3] = [A,B,C];

fn ranked(prefs:&[CandidateIndex],n:usize) -> Weighted<RankedBallot> { Weighted::new(RankedBallot(prefs.to_vec()),n) }
fn scored(scores:&[(CandidateIndex,i64)],n:usize) -> Weighted<ScoreBallot> { Weighted::new(ScoreBallot(scores.to_vec()),n) }

#[test]
fn ntv_ties_go_to_earlier_candidate() {
    let ballots = vec![
        Weighted::new(BlockBallot(vec![B,A]),10),
        Weighted::new(BlockBallot(vec![C]),4),
    ];
    let result = count_ntv(&ABC,&ballots,1);
    assert_eq!(vec![A],result.winners);
    assert_eq!(Some(10),result.count(B));
    assert_eq!(24,result.total());
    let result = count_ntv(&ABC,&ballots,2);
    assert_eq!(vec![A,B],result.winners);
}

#[test]
fn stv_surplus_transfer_before_exclusion() {
    let ballots = vec![ranked(&[A,B,C],60),ranked(&[B,C,A],25),ranked(&[C,B,A],15)];
    let result = count_stv(&ABC,&ballots,2,StvOptions::default());
    assert_eq!(vec![A,B],result.winners);
    assert_eq!(Some(34),result.count(A));
    assert_eq!(Some(34),result.count(B));
    assert_eq!(Some(15),result.count(C));
    let reasons : Vec<StepReason> = result.transcript.iter().map(|s|s.reason.clone()).collect();
    assert_eq!(vec![StepReason::FirstPreferences,StepReason::ReachedQuota(A),StepReason::SurplusTransfer(A),StepReason::ReachedQuota(B)],reasons);
    // A's surplus of 26 all went to B.
    assert_eq!(vec![34,51,15],result.transcript[2].tallies);
    assert!(result.details.iter().any(|d|d=="Using Droop quota (34) with surplus transfers"));
    assert!(result.details.iter().any(|d|d=="0 votes exhausted"));
}

#[test]
fn stv_excludes_candidate_holding_only_a_fraction_of_a_vote() {
    let d = CandidateIndex(3);
    let candidates = [A,B,C,d];
    // quota 8, A's surplus of 2 passes 1/5 of a vote to C.
    let ballots = vec![ranked(&[A,C],1),ranked(&[A],9),ranked(&[B],6),ranked(&[d],5)];
    let result = count_stv(&candidates,&ballots,2,StvOptions::default());
    assert_eq!(StepReason::SurplusTransfer(A),result.transcript[2].reason);
    assert_eq!(0,result.transcript[2].tallies[C.0]);
    assert_eq!(StepReason::Exclusion(C),result.transcript[3].reason);
    assert_eq!(StepReason::Exclusion(d),result.transcript[4].reason);
    assert_eq!(vec![A,B],result.winners);
    assert!(result.details.iter().any(|line|line=="6 votes exhausted"));
}

#[test]
fn stv_without_surplus_transfers_excludes() {
    let ballots = vec![ranked(&[A,B,C],60),ranked(&[B,C,A],25),ranked(&[C,B,A],15)];
    let result = count_stv(&ABC,&ballots,2,StvOptions{ droop_quota: true, surplus_transfers: false });
    // B 25 and C 15 stay below quota, C is excluded and B then has 40.
    assert_eq!(vec![A,B],result.winners);
    assert!(result.transcript.iter().any(|s|s.reason==StepReason::Exclusion(C)));
    assert!(!result.transcript.iter().any(|s|matches!(s.reason,StepReason::SurplusTransfer(_))));
}

#[test]
fn stv_fills_seats_with_candidates_without_votes() {
    let ballots = vec![ranked(&[A],10)];
    let result = count_stv(&ABC,&ballots,2,StvOptions::default());
    assert_eq!(2,result.winners.len());
    assert_eq!(vec![A,B],result.winners);
}

#[test]
fn irv_excludes_until_two_remain() {
    let ballots = vec![ranked(&[A,B,C],40),ranked(&[B,C,A],35),ranked(&[C,B,A],25)];
    let result = count_stv(&ABC,&ballots,1,StvOptions{ droop_quota: false, surplus_transfers: false });
    assert_eq!(vec![B],result.winners);
    assert_eq!(Some(60),result.count(B));
    assert_eq!(Some(0),result.count(C));
    assert_eq!(StepReason::Exclusion(C),result.transcript[1].reason);
}

#[test]
fn irv_counts_exhausted_votes() {
    let ballots = vec![ranked(&[A],50),ranked(&[B],30),ranked(&[C],20)];
    let result = count_stv(&ABC,&ballots,1,StvOptions{ droop_quota: false, surplus_transfers: false });
    assert_eq!(vec![A],result.winners);
    assert!(result.details.iter().any(|d|d=="20 votes exhausted"));
}

#[test]
fn stv_elimination_tie_excludes_later_candidate() {
    let ballots = vec![ranked(&[A],50),ranked(&[B,A],20),ranked(&[C,B],20)];
    let result = count_stv(&ABC,&ballots,1,StvOptions{ droop_quota: false, surplus_transfers: false });
    assert_eq!(StepReason::Exclusion(C),result.transcript[1].reason);
    assert_eq!(vec![A],result.winners);
}

#[test]
fn copeland_cycle_is_a_tie() {
    let ballots = vec![ranked(&[A,B,C],1),ranked(&[B,C,A],1),ranked(&[C,A,B],1)];
    let result = count_copeland(&ABC,&ballots);
    assert_eq!(vec![A,B,C],top_scorers(&result));
    assert_eq!(Some(A),result.winner());
    assert_eq!("Win-loss",result.count_type);
    assert!(!result.percent_column);
}

#[test]
fn copeland_ranked_beats_unranked() {
    let ballots = vec![ranked(&[C],3),ranked(&[A,B],2)];
    assert_eq!((3,2),pairwise_support(&ballots,C,A));
    assert_eq!((2,0),pairwise_support(&ballots,A,B));
    let result = count_copeland(&ABC,&ballots);
    assert_eq!(Some(2),result.count(C));
    assert_eq!(Some(0),result.count(A));
    assert_eq!(Some(-2),result.count(B));
    assert_eq!(vec![C],result.winners);
}

#[test]
fn copeland_ignores_unranked_candidates() {
    let ballots = vec![ranked(&[A,B],1)];
    let result = count_copeland(&ABC,&ballots);
    assert_eq!(None,result.count(C));
    assert_eq!(vec![A],result.winners);
}

#[test]
fn borda_variants() {
    let ballots = vec![ranked(&[A,B,C],2),ranked(&[B,A,C],1)];
    let standard = count_borda(&ABC,&ballots,3,BordaVariant::Standard);
    assert_eq!(vec![8,7,3],standard.counts.values().cloned().collect::<Vec<_>>());
    assert_eq!(vec![A],standard.winners);
    let zero = count_borda(&ABC,&ballots,3,BordaVariant::ZeroIndex);
    assert_eq!(vec![5,4,0],zero.counts.values().cloned().collect::<Vec<_>>());
    // each ballot's points are rounded separately.
    let dowdall = count_borda(&ABC,&ballots,3,BordaVariant::Dowdall);
    assert_eq!(vec![3,2,1],dowdall.counts.values().cloned().collect::<Vec<_>>());
}

#[test]
fn borda_points_decrease_with_rank() {
    for n in 1..=10 {
        for variant in [BordaVariant::Standard,BordaVariant::ZeroIndex,BordaVariant::Dowdall] {
            for i in 1..n { assert!(variant.points(n,i)<variant.points(n,i-1)); }
        }
        for i in 0..n {
            assert_eq!((n-i) as f64,BordaVariant::Standard.points(n,i));
            let dowdall = BordaVariant::Dowdall.points(n,i);
            assert!(dowdall>0.0 && dowdall<=1.0);
        }
    }
    assert_eq!(Ok(BordaVariant::Dowdall),"dowdall".parse::<BordaVariant>());
    assert!("tournament".parse::<BordaVariant>().is_err());
}

#[test]
fn bucklin_adds_later_preferences() {
    let ballots = vec![ranked(&[A,B],40),ranked(&[B,A],35),ranked(&[C,B],25)];
    let result = count_bucklin(&ABC,&ballots);
    assert_eq!(vec![B],result.winners);
    assert_eq!(Some(100),result.count(B));
    assert_eq!(Some(75),result.count(A));
    assert_eq!(2,result.transcript.len());
    assert_eq!(StepReason::BucklinRound(2),result.transcript[1].reason);
    assert_eq!(vec!["Majority reached in round 2".to_string()],result.details);
}

#[test]
fn bucklin_stops_when_ballots_exhausted() {
    let ballots = vec![ranked(&[A],1),ranked(&[B],1)];
    let result = count_bucklin(&ABC,&ballots);
    assert_eq!(1,result.transcript.len());
    assert_eq!(vec![A],result.winners);
    assert_eq!(vec!["No majority after 1 rounds".to_string()],result.details);
}

#[test]
fn score_sums_weighted_scores() {
    let ballots = vec![scored(&[(A,5),(B,0)],2),scored(&[(B,5)],3),scored(&[(C,-1)],4)];
    let result = count_score(&ABC,&ballots);
    assert_eq!(Some(10),result.count(A));
    assert_eq!(Some(15),result.count(B));
    assert_eq!(Some(-4),result.count(C));
    assert_eq!(vec![B],result.winners);
}

#[test]
fn star_runoff_between_top_two() {
    let ballots = vec![
        scored(&[(A,5),(B,4),(C,0)],4),
        scored(&[(C,5),(B,4),(A,0)],3),
        scored(&[(B,5),(A,0),(C,0)],2),
    ];
    assert_eq!((4,5),head_to_head(&ballots,A,B,0));
    let single = count_star_bloc(&ABC,&ballots,1);
    assert_eq!(vec![B],single.winners);
    assert_eq!(Some(38),single.count(B));
    let bloc = count_star_bloc(&ABC,&ballots,2);
    assert_eq!(vec![B,A],bloc.winners);
    assert_eq!(StepReason::Runoff(A,C),bloc.transcript[2].reason);
    let all = count_star_bloc(&ABC,&ballots,3);
    assert_eq!(vec![B,A,C],all.winners);
}

#[test]
fn star_tied_runoff_goes_to_higher_score() {
    // B has the higher total, but the runoff is even.
    let ballots = vec![scored(&[(A,1),(B,0)],1),scored(&[(B,5),(A,0)],1)];
    assert_eq!((1,1),head_to_head(&ballots,A,B,0));
    let result = count_star_bloc(&ABC,&ballots,1);
    assert_eq!(vec![B],result.winners);
    assert_eq!(StepReason::Runoff(B,A),result.transcript[1].reason);
}
