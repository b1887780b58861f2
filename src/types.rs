//! Value types returned by the geohash engine.
//!
//! Everything here is a plain, serializable value: decoding produces a
//! [`BoundingBox`], neighbor computation produces a [`Neighbors`] set keyed by
//! [`Direction`].
use geo::{Point, Rect, coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight compass directions around a geohash cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "nw")]
    NorthWest,
}

impl Direction {
    /// All directions, clockwise starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Short compass key (`"n"`, `"ne"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rectangle described by a geohash: its center plus half extents.
///
/// Values produced by decoding are truncated to 6 decimal places.
///
/// # Examples
///
/// ```
/// use geohash_any::BoundingBox;
///
/// let bbox = BoundingBox::new(45.0, 90.0, 45.0, 90.0);
/// assert_eq!(bbox.min_lat(), 0.0);
/// assert_eq!(bbox.max_lon(), 180.0);
/// assert!(bbox.contains(10.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Latitude of the center
    pub lat: f64,
    /// Longitude of the center
    pub lon: f64,
    /// Half of the box height in degrees of latitude
    pub half_lat: f64,
    /// Half of the box width in degrees of longitude
    pub half_lon: f64,
}

impl BoundingBox {
    pub fn new(lat: f64, lon: f64, half_lat: f64, half_lon: f64) -> Self {
        Self {
            lat,
            lon,
            half_lat,
            half_lon,
        }
    }

    /// Center as a `geo::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point {
        Point::new(self.lon, self.lat)
    }

    pub fn min_lat(&self) -> f64 {
        self.lat - self.half_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.lat + self.half_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.lon - self.half_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.lon + self.half_lon
    }

    /// Checks whether a coordinate lies inside the box (edges inclusive).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat()..=self.max_lat()).contains(&lat)
            && (self.min_lon()..=self.max_lon()).contains(&lon)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            coord! { x: self.min_lon(), y: self.min_lat() },
            coord! { x: self.max_lon(), y: self.max_lat() },
        )
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

/// Geohashes of the eight cells surrounding a geohash, at the same precision.
///
/// Serializes as a map keyed by compass direction (`n`, `ne`, ... `nw`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub n: String,
    pub ne: String,
    pub e: String,
    pub se: String,
    pub s: String,
    pub sw: String,
    pub w: String,
    pub nw: String,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> &str {
        match direction {
            Direction::North => &self.n,
            Direction::NorthEast => &self.ne,
            Direction::East => &self.e,
            Direction::SouthEast => &self.se,
            Direction::South => &self.s,
            Direction::SouthWest => &self.sw,
            Direction::West => &self.w,
            Direction::NorthWest => &self.nw,
        }
    }

    /// Iterates clockwise starting at north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Applies a fallible conversion to every neighbor.
    pub(crate) fn try_map<F, E>(self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(String) -> Result<String, E>,
    {
        Ok(Self {
            n: f(self.n)?,
            ne: f(self.ne)?,
            e: f(self.e)?,
            se: f(self.se)?,
            s: f(self.s)?,
            sw: f(self.sw)?,
            w: f(self.w)?,
            nw: f(self.nw)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_neighbors() -> Neighbors {
        Neighbors {
            n: "n".into(),
            ne: "ne".into(),
            e: "e".into(),
            se: "se".into(),
            s: "s".into(),
            sw: "sw".into(),
            w: "w".into(),
            nw: "nw".into(),
        }
    }

    #[test]
    fn test_direction_keys_and_opposites() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::SouthWest.to_string(), "sw");
    }

    #[test]
    fn test_neighbors_lookup_matches_keys() {
        let neighbors = sample_neighbors();
        for (direction, hash) in neighbors.iter() {
            assert_eq!(direction.as_str(), hash);
        }
        assert_eq!(neighbors.iter().count(), 8);
    }

    #[test]
    fn test_neighbors_serialize_as_compass_map() {
        let json = serde_json::to_value(sample_neighbors()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(obj["nw"], "nw");

        let direction: Direction = serde_json::from_str("\"se\"").unwrap();
        assert_eq!(direction, Direction::SouthEast);
    }

    #[test]
    fn test_try_map_stops_on_error() {
        let result: Result<Neighbors, &str> = sample_neighbors().try_map(|h| {
            if h == "e" { Err("boom") } else { Ok(h.to_uppercase()) }
        });
        assert_eq!(result, Err("boom"));

        let upper: Result<Neighbors, ()> = sample_neighbors().try_map(|h| Ok(h.to_uppercase()));
        assert_eq!(upper.unwrap().sw, "SW");
    }

    #[test]
    fn test_bounding_box_rect() {
        let bbox = BoundingBox::new(-45.0, -90.0, 45.0, 90.0);
        let rect = bbox.to_rect();
        assert_eq!(rect.min().x, -180.0);
        assert_eq!(rect.min().y, -90.0);
        assert_eq!(rect.max().x, 0.0);
        assert_eq!(rect.max().y, 0.0);
        assert_eq!(bbox.center(), Point::new(-90.0, -45.0));
        assert!(!bbox.contains(1.0, -90.0));
    }
}
