use super::vehicles::{Vehicle, VehicleId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) const TAG_SEPARATOR: char = '|';

#[derive(Debug)]
pub(crate) struct VehicleRecord {
    pub(crate) line: u64,
    pub(crate) vehicle: Vehicle,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<VehicleRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|position| position.line()).unwrap_or_default();
        let row: VehicleRow = record.deserialize(Some(&headers))?;
        records.push(VehicleRecord {
            line,
            vehicle: row.into_vehicle(),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct VehicleRow {
    id: String,
    name: String,
    #[serde(default)]
    trim: String,
    msrp: u32,
    monthly_finance: u32,
    monthly_lease: u32,
    #[serde(default, alias = "mpg")]
    fuel_economy: String,
    #[serde(default)]
    highlight: String,
    #[serde(default, deserialize_with = "split_tags")]
    tags: Vec<String>,
}

impl VehicleRow {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            id: VehicleId(self.id),
            name: self.name,
            trim: self.trim,
            msrp: self.msrp,
            monthly_finance: self.monthly_finance,
            monthly_lease: self.monthly_lease,
            fuel_economy: self.fuel_economy,
            highlight: self.highlight,
            tags: self.tags,
        }
    }
}

fn split_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect())
}
