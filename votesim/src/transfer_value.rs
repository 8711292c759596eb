// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.

use num::{One, Zero, BigRational, BigInt, ToPrimitive};
use crate::election_result::Tally;

/// The fraction of a ballot's weight still counting, 1 until it passes through a surplus transfer.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct TransferValue(pub(crate) BigRational);

impl TransferValue {
    pub fn one() -> Self { TransferValue(BigRational::one())}
    pub fn new(numerator:BigInt,denominator:BigInt) -> Self {
        TransferValue(BigRational::new(numerator,denominator))
    }
    /// surplus/votes, the fraction of each vote for an elected candidate that is passed on.
    pub fn from_surplus(surplus:Tally,votes:Tally) -> Self {
        TransferValue::new(BigInt::from(surplus),BigInt::from(votes))
    }

    /// This transfer value applied to one that a ballot already has.
    pub fn compose(&self,other:&TransferValue) -> TransferValue { TransferValue(&self.0*&other.0) }

    /// The exact value of `voters` ballots at this transfer value.
    pub fn mul(&self,voters:usize) -> BigRational {
        BigRational::new(self.0.numer().clone()*BigInt::from(voters),self.0.denom().clone())
    }

    /// Whether ballots at this value no longer count for anything.
    pub fn is_zero(&self) -> bool { self.0.is_zero() }
}

/// Round a non-negative rational number down to a tally.
pub fn round_rational_down(rational:&BigRational) -> Tally {
    rational.floor().to_integer().to_i64().unwrap_or(Tally::MAX)
}
