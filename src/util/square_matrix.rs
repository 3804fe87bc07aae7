use serde::Serialize;
use std::io::Write;

/// Dense square matrix indexed by item ids.
/// Rows are stored back to back in a single allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    dimension: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    pub fn new(dimension: usize, value: T) -> Self {
        SquareMatrix {
            dimension,
            cells: vec![value; dimension * dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, (from, to): (usize, usize)) -> bool {
        from < self.dimension && to < self.dimension
    }

    /// Returns the value of the cell, or None if it lies outside the matrix.
    pub fn get(&self, (from, to): (usize, usize)) -> Option<T> {
        if !self.contains((from, to)) {
            return None;
        }

        Some(self.cells[from * self.dimension + to])
    }

    pub fn get_mut(&mut self, (from, to): (usize, usize)) -> Option<&mut T> {
        if !self.contains((from, to)) {
            return None;
        }

        Some(&mut self.cells[from * self.dimension + to])
    }

    /// Iterates mutably over every cell that is not on the diagonal.
    pub fn iter_off_diagonal_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| i / dimension != i % dimension)
            .map(|(_, cell)| cell)
    }

    pub fn rows(&self) -> Vec<Vec<T>> {
        if self.dimension == 0 {
            return Vec::new();
        }

        self.cells
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Copies the matrix into plain floats for observers outside the engine.
    pub fn snapshot<F: Fn(T) -> f64>(&self, convert: F) -> MatrixSnapshot {
        MatrixSnapshot {
            dimension: self.dimension,
            values: self
                .rows()
                .into_iter()
                .map(|row| row.into_iter().map(&convert).collect())
                .collect(),
        }
    }
}

/// An owned, read only copy of a matrix taken between two iterations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSnapshot {
    dimension: usize,
    values: Vec<Vec<f64>>,
}

impl MatrixSnapshot {
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.values.get(from).and_then(|row| row.get(to)).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Writes one csv row per matrix row, without a header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for row in self.values.iter() {
            csv_writer.write_record(row.iter().map(|value| value.to_string()))?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
