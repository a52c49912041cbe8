//! A set of independent cubes addressed by index.
//!
//! The CLI can print several cubes side by side; each one keeps its own state
//! and is mutated only through its index.

use crate::cube::Cube;
use crate::types::Move;
use crate::CubeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cubes {
    cubes: Vec<Cube>,
}

impl Cubes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `count` solved cubes
    pub fn solved(count: usize) -> Self {
        Self {
            cubes: vec![Cube::new(); count],
        }
    }

    /// Append a solved cube and return its index
    pub fn new_cube(&mut self) -> usize {
        self.cubes.push(Cube::new());
        self.cubes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Cube, CubeError> {
        self.cubes.get(index).ok_or(CubeError::InvalidCube {
            index,
            count: self.cubes.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Cube, CubeError> {
        let count = self.cubes.len();
        self.cubes
            .get_mut(index)
            .ok_or(CubeError::InvalidCube { index, count })
    }

    /// Apply a move to one cube
    pub fn apply(&mut self, index: usize, mv: Move) -> Result<(), CubeError> {
        self.get_mut(index)?.apply(mv);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cube> {
        self.cubes.iter()
    }
}

impl<'a> IntoIterator for &'a Cubes {
    type Item = &'a Cube;
    type IntoIter = std::slice::Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Face;

    #[test]
    fn cubes_are_independent() {
        let mut cubes = Cubes::new();
        let a = cubes.new_cube();
        let b = cubes.new_cube();
        assert_eq!((a, b), (0, 1));

        cubes.apply(a, Move::cw(Face::Front)).unwrap();
        assert!(!cubes.get(a).unwrap().is_solved());
        assert!(cubes.get(b).unwrap().is_solved());
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut cubes = Cubes::solved(1);
        assert_eq!(
            cubes.apply(3, Move::cw(Face::Up)),
            Err(CubeError::InvalidCube { index: 3, count: 1 })
        );
        assert!(cubes.get(0).unwrap().is_solved());
    }
}
