// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.

use std::cmp::Reverse;
use crate::ballot_metadata::CandidateIndex;
use crate::election_result::Tally;

/// Indices into `tallies`, highest tally first. Equal tallies keep their original order.
/// ```
/// use votesim::util::sorted_desc;
/// assert_eq!(vec![1,0,2,3],sorted_desc(&[5,7,5,-1]));
/// ```
pub fn sorted_desc(tallies:&[Tally]) -> Vec<usize> {
    let mut order : Vec<usize> = (0..tallies.len()).collect();
    order.sort_by_key(|&i|Reverse(tallies[i])); // stable
    order
}

/// A zero tally for every candidate index up to the largest in `candidates`.
pub fn empty_tallies(candidates:&[CandidateIndex]) -> Vec<Tally> {
    vec![0;candidates.iter().map(|c|c.0+1).max().unwrap_or(0)]
}

/// The given candidates, highest tally first, ties in the order given. `tallies` is indexed by [CandidateIndex].
pub fn sort_candidates_desc(candidates:&[CandidateIndex],tallies:&[Tally]) -> Vec<CandidateIndex> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by_key(|c|Reverse(tallies[c.0]));
    sorted
}

/// The candidate with the highest tally, earliest on ties.
pub fn highest(candidates:&[CandidateIndex],tallies:&[Tally]) -> Option<CandidateIndex> {
    sort_candidates_desc(candidates,tallies).first().copied()
}

/// Fit text into width characters, marking truncation with "[...]".
/// ```
/// use votesim::util::shorten;
/// assert_eq!("Greens",shorten("Greens",10));
/// assert_eq!("Conse[...]",shorten("Conservative republicans",10));
/// ```
pub fn shorten(text:&str,width:usize) -> String {
    const PLACEHOLDER : &str = "[...]";
    if text.chars().count()<=width { text.to_string() }
    else if width<=PLACEHOLDER.len() { text.chars().take(width).collect() }
    else { text.chars().take(width-PLACEHOLDER.len()).collect::<String>()+PLACEHOLDER }
}

/// Make a text table with the given column widths, header and body.
/// The second line separates the header from the body.
/// ```
/// use votesim::util::make_table;
/// let table = make_table(&[6,4],&["Name".to_string(),"N".to_string()],&[vec!["Greens".to_string(),"12".to_string()]]);
/// assert_eq!(vec!["Name  |N   ","------+----","Greens|12  "],table);
/// ```
pub fn make_table(widths:&[usize],header:&[String],body:&[Vec<String>]) -> Vec<String> {
    let format_row = |row:&[String],separator:&str|{
        row.iter().zip(widths.iter()).map(|(cell,&w)|format!("{:<w$}",shorten(cell,w),w=w)).collect::<Vec<_>>().join(separator)
    };
    let mut table = vec![format_row(header,"|")];
    table.push(widths.iter().map(|&w|"-".repeat(w)).collect::<Vec<_>>().join("+"));
    for row in body {
        table.push(format_row(row.as_slice(),"|"));
    }
    table
}
