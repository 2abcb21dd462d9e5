use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::geo::{LandBounds, MAX_ABS_LATITUDE, MAX_LAND_LENGTH_METERS, MAX_LONGITUDE};
use crate::utils::meters_to_lat_degrees;

/// Side of a grid cell, in degrees of latitude and of longitude
pub const CELL_SIZE_DEGREES: f64 = 0.01;

/// Parcels one cell can index
pub const CELL_CAPACITY: usize = 128;

/// Two rows, and up to three columns near the latitude limit where 100 m of
/// longitude is wider than a cell
pub const MAX_CELLS_PER_LAND: usize = 6;

/// Grid position of a cell. Rows count from the south pole, columns from the
/// antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

fn cell_index(degrees: f64, offset: f64) -> u32 {
    ((degrees + offset) / CELL_SIZE_DEGREES).floor() as u32
}

pub fn cell_row(lat: f64) -> u32 {
    cell_index(lat, 90.0)
}

pub fn cell_col(long: f64) -> u32 {
    cell_index(long, 180.0)
}

impl CellCoord {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Every cell a box touches, edges included. Two boxes whose interiors
    /// intersect always share at least one cell.
    pub fn covering(bounds: &LandBounds) -> Vec<CellCoord> {
        let mut cells = Vec::with_capacity(MAX_CELLS_PER_LAND);
        for row in cell_row(bounds.south)..=cell_row(bounds.north) {
            for col in cell_col(bounds.west)..=cell_col(bounds.east) {
                cells.push(CellCoord { row, col });
            }
        }
        cells
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.row >= cell_row(-MAX_ABS_LATITUDE)
                && self.row <= cell_row(MAX_ABS_LATITUDE)
                && self.col <= cell_col(MAX_LONGITUDE),
            RegistryError::InvalidLandCell
        );
        Ok(())
    }
}

/// Copy of a parcel's edges kept in every cell it touches
#[zero_copy]
#[derive(Default, Debug, PartialEq)]
pub struct CellEntry {
    pub lat_north: f64,
    pub lat_south: f64,
    pub long_east: f64,
    pub long_west: f64,
    pub land_id: u64,
}

impl CellEntry {
    pub fn bounds(&self) -> LandBounds {
        LandBounds::new(self.lat_north, self.long_east, self.lat_south, self.long_west)
    }
}

/// One cell of the parcel index, entries sorted by north edge
#[account(zero_copy)]
#[derive(Debug)]
pub struct LandCell {
    pub row: u32,
    pub col: u32,
    pub len: u32,
    pub bump: u8,
    pub _padding: [u8; 3],
    pub entries: [CellEntry; CELL_CAPACITY],
}

impl LandCell {
    pub const SEED: &'static [u8] = b"land_cell";

    pub const SIZE: usize = 8 + std::mem::size_of::<LandCell>();

    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.col)
    }

    pub fn entries(&self) -> &[CellEntry] {
        &self.entries[..self.len as usize]
    }

    pub fn is_full(&self) -> bool {
        self.len as usize >= CELL_CAPACITY
    }

    /// First entry whose north edge is at or above `lat`
    fn lower_bound(&self, lat: f64) -> usize {
        self.entries().partition_point(|entry| entry.lat_north.total_cmp(&lat).is_lt())
    }

    /// Id of an indexed parcel whose interior intersects `candidate`.
    ///
    /// Only entries with a north edge in `[candidate.south, candidate.north
    /// + max length)` are visited. A parcel with a lower north edge lies
    /// entirely south of the candidate, and since no parcel is taller than
    /// the max length, one with a higher north edge cannot reach down to
    /// the candidate's north edge.
    pub fn find_overlap(&self, candidate: &LandBounds) -> Option<u64> {
        let upper_bound = candidate.north + meters_to_lat_degrees(MAX_LAND_LENGTH_METERS);

        self.entries()[self.lower_bound(candidate.south)..]
            .iter()
            .take_while(|entry| entry.lat_north < upper_bound)
            // The lower bound is inclusive, `intersects` drops parcels that end at the south edge
            .find(|entry| candidate.intersects(&entry.bounds()))
            .map(|entry| entry.land_id)
    }

    pub fn insert(&mut self, land_id: u64, bounds: &LandBounds) -> Result<()> {
        require!(!self.is_full(), RegistryError::LandCellFull);

        let len = self.len as usize;
        let position = self
            .entries()
            .partition_point(|entry| entry.lat_north.total_cmp(&bounds.north).is_le());
        self.entries.copy_within(position..len, position + 1);
        self.entries[position] = CellEntry {
            lat_north: bounds.north,
            lat_south: bounds.south,
            long_east: bounds.east,
            long_west: bounds.west,
            land_id,
        };
        self.len += 1;
        Ok(())
    }
}

#[cfg(test)]
impl LandCell {
    pub fn new(coord: CellCoord) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            len: 0,
            bump: 0,
            _padding: [0; 3],
            entries: [CellEntry::default(); CELL_CAPACITY],
        }
    }
}

/// Positions in `cells` of every cell `bounds` touches
pub fn covering_cells(cells: &[&mut LandCell], bounds: &LandBounds) -> Result<Vec<usize>> {
    CellCoord::covering(bounds)
        .into_iter()
        .map(|coord| {
            cells
                .iter()
                .position(|cell| cell.coord() == coord)
                .ok_or_else(|| error!(RegistryError::MissingLandCell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;
    use crate::geo::validate_bounds;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cell_at(lat: f64, long: f64) -> LandCell {
        LandCell::new(CellCoord::new(cell_row(lat), cell_col(long)))
    }

    #[test]
    fn test_covering_cells() {
        let inside = LandBounds::new(10.0055, 9.0055, 10.005, 9.005);
        assert_eq!(CellCoord::covering(&inside), vec![CellCoord::new(10_000, 18_900)]);

        let across = LandBounds::new(10.0102, 9.0102, 10.0098, 9.0098);
        assert_eq!(CellCoord::covering(&across).len(), 4);

        // Near the latitude limit 100 m of longitude spans more than a cell
        let (far_north, _) = validate_bounds(&LandBounds::new(84.9906, 9.0201, 84.9898, 9.0099)).unwrap();
        let cells = CellCoord::covering(&far_north);
        assert_eq!(cells.len(), MAX_CELLS_PER_LAND);
    }

    #[test]
    fn test_cell_validation() {
        assert!(CellCoord::new(cell_row(0.0), cell_col(0.0)).validate().is_ok());
        assert!(CellCoord::new(cell_row(-84.999), cell_col(180.0)).validate().is_ok());
        assert_error(CellCoord::new(cell_row(89.0), 0).validate(), RegistryError::InvalidLandCell);
        assert_error(CellCoord::new(cell_row(0.0), 40_000).validate(), RegistryError::InvalidLandCell);
    }

    #[test]
    fn test_entries_stay_sorted_by_north_edge() {
        let mut cell = cell_at(10.0, 9.0);
        let norths = [10.0009, 10.0003, 10.0006, 10.0003, 10.0001];
        for (id, north) in norths.iter().enumerate() {
            cell.insert(id as u64, &LandBounds::new(*north, 9.0005, north - 0.0001, 9.0))
                .unwrap();
        }

        let stored: Vec<f64> = cell.entries().iter().map(|e| e.lat_north).collect();
        assert_eq!(stored, vec![10.0001, 10.0003, 10.0003, 10.0006, 10.0009]);
        // Equal keys keep insertion order
        assert_eq!(cell.entries()[1].land_id, 1);
        assert_eq!(cell.entries()[2].land_id, 3);
    }

    #[test]
    fn test_overlap_and_shared_edges() {
        let mut cell = cell_at(10.0, 9.0);
        let a = LandBounds::new(10.0005, 9.0005, 10.0, 9.0);
        cell.insert(0, &a).unwrap();

        assert_eq!(cell.find_overlap(&a), Some(0));

        let neighbours = [
            LandBounds::new(10.0, 9.0005, 9.9995, 9.0),
            LandBounds::new(10.001, 9.0005, 10.0005, 9.0),
            LandBounds::new(10.0005, 9.001, 10.0, 9.0005),
            LandBounds::new(10.0005, 9.0, 10.0, 8.9995),
        ];
        for b in &neighbours {
            assert_eq!(cell.find_overlap(b), None);
        }

        // Existing parcel is taller than the candidate and starts above its north edge
        let tall = LandBounds::new(10.0018, 9.0025, 10.0011, 9.002);
        cell.insert(1, &tall).unwrap();
        let below = LandBounds::new(10.0012, 9.0025, 10.001, 9.002);
        assert_eq!(cell.find_overlap(&below), Some(1));
    }

    #[test]
    fn test_full_cell_rejects_inserts() {
        let mut cell = cell_at(10.0, 9.0);
        for id in 0..CELL_CAPACITY as u64 {
            let west = 9.0 + id as f64 * 0.00001;
            cell.insert(id, &LandBounds::new(10.0001, west + 0.00001, 10.0, west)).unwrap();
        }
        assert!(cell.is_full());

        let result = cell.insert(999, &LandBounds::new(10.0002, 9.0001, 10.0001, 9.0));
        assert_error(result, RegistryError::LandCellFull);
        assert_eq!(cell.len as usize, CELL_CAPACITY);
    }

    #[test]
    fn test_covering_cells_requires_every_cell() {
        let across = LandBounds::new(10.0102, 9.0102, 10.0098, 9.0098);
        let mut cells: Vec<LandCell> = CellCoord::covering(&across)
            .into_iter()
            .map(LandCell::new)
            .collect();

        let refs: Vec<&mut LandCell> = cells.iter_mut().collect();
        assert_eq!(covering_cells(&refs, &across).unwrap(), vec![0, 1, 2, 3]);

        let missing_one: Vec<&mut LandCell> = cells.iter_mut().skip(1).collect();
        assert_error(covering_cells(&missing_one, &across), RegistryError::MissingLandCell);
    }

    fn random_bounds(rng: &mut StdRng) -> LandBounds {
        // Dense grid of small boxes around a cell corner so many candidates
        // collide and many span several cells
        let north = 45.007 + rng.gen_range(0..60) as f64 * 0.0001;
        let west = 7.007 + rng.gen_range(0..60) as f64 * 0.0001;
        let height = rng.gen_range(1..=8) as f64 * 0.0001;
        let width = rng.gen_range(1..=8) as f64 * 0.0001;
        LandBounds::new(north, west + width, north - height, west)
    }

    #[test]
    fn test_window_scan_matches_full_scan() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cells: Vec<LandCell> = Vec::new();
        let mut stored: Vec<LandBounds> = Vec::new();

        for id in 0..2_000u64 {
            let candidate = random_bounds(&mut rng);
            for coord in CellCoord::covering(&candidate) {
                if !cells.iter().any(|cell| cell.coord() == coord) {
                    cells.push(LandCell::new(coord));
                }
            }

            let mut refs: Vec<&mut LandCell> = cells.iter_mut().collect();
            let touched = covering_cells(&refs, &candidate).unwrap();
            let window_scan = touched.iter().any(|&i| refs[i].find_overlap(&candidate).is_some());
            let full_scan = stored.iter().any(|b| candidate.intersects(b));
            assert_eq!(window_scan, full_scan, "window scan disagrees for {:?}", candidate);

            if !window_scan {
                for &i in &touched {
                    refs[i].insert(id, &candidate).unwrap();
                }
                stored.push(candidate);
            }
        }
        assert!(stored.len() > 10);
        assert!(cells.len() > 1);

        // No stored pair intersects, and every parcel fits the scan window
        let max_height = meters_to_lat_degrees(MAX_LAND_LENGTH_METERS);
        for (i, a) in stored.iter().enumerate() {
            assert!(a.north - a.south <= max_height);
            for b in &stored[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }
}
