//! Mapping between grid positions and their letter/number addresses.
//!
//! Columns are lettered `A` through `Z`, then continue as `AA`, `AB`, ... so that
//! every column of an arbitrarily wide grid has exactly one address. Rows are
//! numbered from 1.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Number of letters available for a single column digit.
const LETTERS: usize = 26;

/// Position of a cell in the grid, counted from the top-left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Cell {
    /// Zero-based column.
    pub x: usize,
    /// Zero-based row.
    pub y: usize,
}

impl Cell {
    /// Construct a [`Cell`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Get the cell `dx` columns and `dy` rows away from this one. Returns `None` if
    /// the result would fall left of the first column or above the first row.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// The letter/number address of this cell.
    pub fn address(self) -> Address {
        Address(self)
    }
}

impl From<(usize, usize)> for Cell {
    /// Construct a [`Cell`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (usize, usize) {
    /// Convert the [`Cell`] into an `(x, y)` pair.
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.address(), f)
    }
}

impl FromStr for Cell {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Address>().map(Address::cell)
    }
}

/// Human-facing address of a cell, such as `E5`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Address(Cell);

impl Address {
    /// The cell this address names.
    pub fn cell(self) -> Cell {
        self.0
    }

    /// The column letters of this address.
    pub fn letters(&self) -> String {
        column_letters(self.0.x)
    }

    /// The one-based row number of this address.
    pub fn number(&self) -> usize {
        self.0.y + 1
    }
}

impl From<Cell> for Address {
    fn from(cell: Cell) -> Self {
        Address(cell)
    }
}

impl From<Address> for Cell {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.letters(), self.number()))
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static ADDRESS: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?P<letters>[A-Za-z]+)(?P<number>[0-9]+)$").unwrap());

        let s = s.trim();
        let captures = ADDRESS
            .captures(s)
            .ok_or_else(|| ParseAddressError::Malformed(s.to_owned()))?;
        let x = column_index(&captures["letters"])
            .ok_or_else(|| ParseAddressError::OutOfRange(s.to_owned()))?;
        let y = match captures["number"].parse::<usize>() {
            Ok(0) => return Err(ParseAddressError::ZeroRow(s.to_owned())),
            Ok(number) => number - 1,
            Err(_) => return Err(ParseAddressError::OutOfRange(s.to_owned())),
        };
        Ok(Address(Cell::new(x, y)))
    }
}

/// Error returned when text cannot be read as a cell address.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseAddressError {
    /// The text was not column letters followed by a row number.
    #[error("{0:?} is not an address, expected column letters followed by a row number")]
    Malformed(String),
    /// Rows are numbered from 1.
    #[error("{0:?} names row 0, rows are numbered from 1")]
    ZeroRow(String),
    /// The column or row does not fit in a `usize`.
    #[error("{0:?} is too large to address a cell")]
    OutOfRange(String),
}

/// Letters for the given zero-based column.
fn column_letters(x: usize) -> String {
    let mut letters = Vec::new();
    // Bijective base 26: A..Z, then AA..AZ, BA..
    let mut n = x as u128 + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % LETTERS as u128) as u8);
        n /= LETTERS as u128;
    }
    letters.reverse();
    // Only ASCII uppercase letters were pushed.
    String::from_utf8(letters).unwrap()
}

/// Zero-based column for the given letters, `None` if it does not fit in a `usize`.
fn column_index(letters: &str) -> Option<usize> {
    let mut n: usize = 0;
    for b in letters.bytes() {
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        n = n.checked_mul(LETTERS)?.checked_add(digit)?;
    }
    Some(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten_columns_are_a_through_j() {
        let letters: Vec<String> = (0..10).map(|x| Cell::new(x, 0).address().letters()).collect();
        assert_eq!(
            letters,
            ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        );
    }

    #[test]
    fn address_of_cell() {
        assert_eq!(Cell::new(4, 4).address().to_string(), "E5");
        assert_eq!(Cell::new(9, 0).address().to_string(), "J1");
        assert_eq!(Cell::new(0, 9).address().to_string(), "A10");
        assert_eq!(Cell::new(4, 4).address().number(), 5);
    }

    #[test]
    fn wide_grids_continue_with_two_letters() {
        assert_eq!(Cell::new(25, 0).address().letters(), "Z");
        assert_eq!(Cell::new(26, 0).address().letters(), "AA");
        assert_eq!(Cell::new(27, 0).address().letters(), "AB");
        assert_eq!(Cell::new(52, 0).address().letters(), "BA");
        assert_eq!(Cell::new(701, 0).address().letters(), "ZZ");
        assert_eq!(Cell::new(702, 0).address().letters(), "AAA");
    }

    #[test]
    fn read_address() {
        assert_eq!("A5".parse::<Cell>(), Ok(Cell::new(0, 4)));
        assert_eq!("B7".parse::<Cell>(), Ok(Cell::new(1, 6)));
        assert_eq!("j10".parse::<Cell>(), Ok(Cell::new(9, 9)));
        assert_eq!(" AA3 ".parse::<Cell>(), Ok(Cell::new(26, 2)));
    }

    #[test]
    fn parse_and_display_agree() {
        for x in 0..800 {
            let cell = Cell::new(x, x % 13);
            assert_eq!(cell.to_string().parse::<Cell>(), Ok(cell));
        }
    }

    #[test]
    fn reject_bad_addresses() {
        assert_eq!(
            "5E".parse::<Address>(),
            Err(ParseAddressError::Malformed("5E".to_owned()))
        );
        assert_eq!(
            "".parse::<Address>(),
            Err(ParseAddressError::Malformed("".to_owned()))
        );
        assert_eq!(
            "A0".parse::<Address>(),
            Err(ParseAddressError::ZeroRow("A0".to_owned()))
        );
        assert!(matches!(
            "A99999999999999999999999".parse::<Address>(),
            Err(ParseAddressError::OutOfRange(_))
        ));
        assert!(matches!(
            "ZZZZZZZZZZZZZZZZZZZZ1".parse::<Address>(),
            Err(ParseAddressError::OutOfRange(_))
        ));
    }

    #[test]
    fn offset_stops_at_top_left() {
        let cell = Cell::new(1, 0);
        assert_eq!(cell.offset(-1, 2), Some(Cell::new(0, 2)));
        assert_eq!(cell.offset(-2, 0), None);
        assert_eq!(cell.offset(0, -1), None);
    }
}
