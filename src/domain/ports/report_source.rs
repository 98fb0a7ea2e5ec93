//! ReportSource port
//!
//! The analysis tool collaborator produces a finding report; this port turns
//! whatever it wrote into error/warning counts.

use crate::domain::value_objects::FindingCounts;
use crate::error::LintholdResult;

pub trait ReportSource {
    fn counts(&self) -> LintholdResult<FindingCounts>;
}
