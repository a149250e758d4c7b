use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::model::occupancy::Occupancy;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SquareReport {
    pub index: usize,
    pub name: Option<String>,
    pub count: u64,
    pub frequency: f64,
}

/// Visit frequency per square, as `count / total`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OccupancyReport {
    pub total: u64,
    pub squares: Vec<SquareReport>,
}

impl OccupancyReport {
    /// Squares without a name are only listed when `include_unnamed` is set.
    pub fn new(board: &Board, occupancy: &Occupancy, include_unnamed: bool) -> Self {
        let frequencies = occupancy.frequencies();
        let squares = board
            .squares()
            .iter()
            .enumerate()
            .filter(|(_, square)| include_unnamed || square.name.is_some())
            .map(|(index, square)| SquareReport {
                index,
                name: square.name.map(str::to_string),
                count: occupancy.count(index),
                frequency: frequencies.get(index).copied().unwrap_or(0.0),
            })
            .collect();

        OccupancyReport {
            total: occupancy.total(),
            squares,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn square(&self, index: usize) -> Option<&SquareReport> {
        self.squares.iter().find(|square| square.index == index)
    }
}

impl fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:<22}{:>10}  {:>9}", "#", "square", "visits", "frequency")?;
        for square in &self.squares {
            writeln!(
                f,
                "{:>5}  {:<22}{:>10}  {:>9.5}",
                square.index,
                square.name.as_deref().unwrap_or("-"),
                square.count,
                square.frequency
            )?;
        }
        write!(f, "total visits: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_omits_unnamed_squares() {
        let board = Board::standard().unwrap();
        let mut occupancy = Occupancy::new(board.len());
        occupancy.record_path(&[3, 10, 10, 24]).unwrap();

        let report = OccupancyReport::new(&board, &occupancy, false);
        assert_eq!(report.total, 4);
        assert!(report.square(3).is_none());
        let jail = report.square(10).unwrap();
        assert_eq!(jail.name.as_deref(), Some("Jail"));
        assert_eq!(jail.count, 2);
        assert_eq!(jail.frequency, 0.5);

        let full = OccupancyReport::new(&board, &occupancy, true);
        assert_eq!(full.squares.len(), 40);
        assert_eq!(full.square(3).unwrap().frequency, 0.25);
    }

    #[test]
    fn test_report_json() {
        let board = Board::standard().unwrap();
        let occupancy = Occupancy::new(board.len());
        let json = OccupancyReport::new(&board, &occupancy, false)
            .to_json()
            .unwrap();
        let parsed: OccupancyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total, 0);
        assert_eq!(parsed.squares[0].name.as_deref(), Some("Go"));
    }
}
