//! Read-only content: the vehicle lineup, lesson library, and offer tiers.

mod lessons;
mod offers;
mod parser;
mod vehicles;

pub use lessons::{Lesson, LessonCatalog, LessonCategory, LessonId, QuizQuestion};
pub use offers::{OfferCatalog, OfferTier};
pub use vehicles::{Vehicle, VehicleCatalog, VehicleId};

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Bundle of static content shared by the matching and progression workflows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentCatalog {
    pub vehicles: VehicleCatalog,
    pub lessons: LessonCatalog,
    pub offers: OfferCatalog,
}

impl ContentCatalog {
    pub fn standard() -> Self {
        Self {
            vehicles: VehicleCatalog::standard(),
            lessons: LessonCatalog::standard(),
            offers: OfferCatalog::standard(),
        }
    }

    pub fn with_vehicles(mut self, vehicles: VehicleCatalog) -> Self {
        self.vehicles = vehicles;
        self
    }
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingId { line: u64 },
    DuplicateId { line: u64, id: VehicleId },
    Empty,
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read vehicle catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid vehicle CSV data: {}", err),
            CatalogImportError::MissingId { line } => {
                write!(f, "vehicle on line {} has no id", line)
            }
            CatalogImportError::DuplicateId { line, id } => {
                write!(f, "vehicle '{}' on line {} is listed more than once", id, line)
            }
            CatalogImportError::Empty => write!(f, "vehicle catalog contains no vehicles"),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::MissingId { .. }
            | CatalogImportError::DuplicateId { .. }
            | CatalogImportError::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a vehicle lineup from a CSV export.
///
/// Expected headers: `id,name,trim,msrp,monthly_finance,monthly_lease,mpg,highlight,tags`, with
/// tags separated by `|`. Row order is preserved because ranking ties fall back to it.
pub struct VehicleCatalogImporter;

impl VehicleCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<VehicleCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<VehicleCatalog, CatalogImportError> {
        let mut seen: HashSet<VehicleId> = HashSet::new();
        let mut vehicles = Vec::new();

        for record in parser::parse_records(reader)? {
            let line = record.line;
            let vehicle = record.vehicle;
            if vehicle.id.as_str().is_empty() {
                return Err(CatalogImportError::MissingId { line });
            }
            if !seen.insert(vehicle.id.clone()) {
                return Err(CatalogImportError::DuplicateId {
                    line,
                    id: vehicle.id,
                });
            }
            vehicles.push(vehicle);
        }

        if vehicles.is_empty() {
            return Err(CatalogImportError::Empty);
        }

        Ok(VehicleCatalog::new(vehicles))
    }
}
