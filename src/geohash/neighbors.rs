//! Neighbor computation by stepping the longitude and latitude bit counters.
//!
//! The bits of each axis form an unsigned counter of cells along that axis.
//! Incrementing moves one cell north/east, decrementing one cell south/west.
//! A counter that is already all ones (or all zeros) cannot step further:
//! the grid does not wrap at the poles or the antimeridian, and such a step
//! fails with [`GeohashError::BoundaryExhausted`].

use super::bits::{decrement, increment, interleave, render, split};
use crate::error::{GeohashError, Result};
use crate::types::{Direction, Neighbors};

/// Axis counters of a cell plus their one-step moves.
struct AxisSteps {
    lon: Vec<bool>,
    lat: Vec<bool>,
}

impl AxisSteps {
    fn new(bits: &[bool], limit: Option<usize>) -> Self {
        let (lon, lat) = split(bits, limit);
        Self { lon, lat }
    }

    fn north(&self) -> Result<Vec<bool>> {
        step(increment(&self.lat), Direction::North)
    }

    fn south(&self) -> Result<Vec<bool>> {
        step(decrement(&self.lat), Direction::South)
    }

    fn east(&self) -> Result<Vec<bool>> {
        step(increment(&self.lon), Direction::East)
    }

    fn west(&self) -> Result<Vec<bool>> {
        step(decrement(&self.lon), Direction::West)
    }

    /// Longitude and latitude counters of the cell in `direction`.
    ///
    /// Latitude is stepped first so a corner step off a pole reports the
    /// north/south move.
    fn shifted(&self, direction: Direction) -> Result<(Vec<bool>, Vec<bool>)> {
        let lat = match direction {
            Direction::NorthWest | Direction::North | Direction::NorthEast => self.north()?,
            Direction::SouthWest | Direction::South | Direction::SouthEast => self.south()?,
            Direction::East | Direction::West => self.lat.clone(),
        };
        let lon = match direction {
            Direction::NorthEast | Direction::East | Direction::SouthEast => self.east()?,
            Direction::NorthWest | Direction::West | Direction::SouthWest => self.west()?,
            Direction::North | Direction::South => self.lon.clone(),
        };
        Ok((lon, lat))
    }
}

fn step(moved: Option<Vec<bool>>, direction: Direction) -> Result<Vec<bool>> {
    moved.ok_or_else(|| {
        log::debug!("Neighbor step {} leaves the grid", direction);
        GeohashError::BoundaryExhausted { direction }
    })
}

/// Computes all eight binary neighbors of the first `limit` bits.
pub(crate) fn neighbors_bits(bits: &[bool], limit: Option<usize>) -> Result<Neighbors> {
    let steps = AxisSteps::new(bits, limit);

    let north = steps.north()?;
    let east = steps.east()?;
    let south = steps.south()?;
    let west = steps.west()?;
    let (lon, lat) = (&steps.lon, &steps.lat);

    Ok(Neighbors {
        n: render(&interleave(lon, &north)),
        ne: render(&interleave(&east, &north)),
        e: render(&interleave(&east, lat)),
        se: render(&interleave(&east, &south)),
        s: render(&interleave(lon, &south)),
        sw: render(&interleave(&west, &south)),
        w: render(&interleave(&west, lat)),
        nw: render(&interleave(&west, &north)),
    })
}

/// Computes the binary neighbor in a single direction.
pub(crate) fn neighbor_bits(
    bits: &[bool],
    limit: Option<usize>,
    direction: Direction,
) -> Result<String> {
    let (lon, lat) = AxisSteps::new(bits, limit).shifted(direction)?;
    Ok(render(&interleave(&lon, &lat)))
}
