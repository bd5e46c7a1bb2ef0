use crate::store::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

pub const SEATS_PER_SECTION: usize = 10;
pub const SECTIONS_COUNT: usize = Section::ALL.len();

///
/// Sections are ordered, seats in `A` are allocated before seats in `B`.
///
#[derive(
    AsRefStr, Display, EnumString, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Section {
    A,
    B,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::A, Section::B];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seat {
    pub section: Section,

    /// 1-based
    pub seat_number: i32,
}

impl Seat {
    ///
    /// ### Errors
    /// - [Error::InvalidSeat] when
    ///     - section is not one of [Section::ALL]
    ///     - seat number is outside of `1..=SEATS_PER_SECTION`
    ///
    pub fn parse(section: &str, seat_number: i32) -> Result<Self, Error> {
        let section = Section::from_str(section)
            .map_err(|_| Error::InvalidSeat(format!("invalid section {section}")))?;

        if !(1..=SEATS_PER_SECTION as i32).contains(&seat_number) {
            return Err(Error::InvalidSeat(format!(
                "invalid seat number {seat_number}"
            )));
        }

        Ok(Self {
            section,
            seat_number,
        })
    }
}
