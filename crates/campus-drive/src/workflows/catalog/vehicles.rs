use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable catalog entry with the pricing inputs the match engine consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub trim: String,
    pub msrp: u32,
    pub monthly_finance: u32,
    pub monthly_lease: u32,
    pub fuel_economy: String,
    pub highlight: String,
    pub tags: Vec<String>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.trim)
    }
}

/// Read-only vehicle inventory, kept in the order it was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// The student lineup shipped with the app.
    pub fn standard() -> Self {
        Self::new(vec![
            vehicle(
                "corolla-hybrid-2024",
                "Toyota Corolla Hybrid",
                "LE AWD 2025",
                (24_850, 329, 259),
                "50 mpg combined",
                "Hybrid savings with Toyota Safety Sense 3.0 standard",
                &["Hybrid", "Most Affordable", "Toyota Safety Sense"],
            ),
            vehicle(
                "prius-prime-2024",
                "Toyota Prius Prime",
                "SE Plug-in Hybrid",
                (32_875, 419, 329),
                "52 mpg hybrid / 44 mi EV",
                "Plug-in hybrid with EV-only commute range",
                &["Plug-in", "Tech Focused", "CarPlay"],
            ),
            vehicle(
                "camry-se-2025",
                "Toyota Camry",
                "SE Nightshade AWD",
                (32_495, 409, 309),
                "28 / 39 mpg",
                "Sporty style with standard Toyota Safety Sense 3.0",
                &["Sport", "All-Wheel Drive", "Top Seller"],
            ),
            vehicle(
                "rav4-hybrid-2025",
                "Toyota RAV4 Hybrid",
                "XLE Premium",
                (34_870, 439, 339),
                "41 mpg combined",
                "Compact SUV with hybrid efficiency for weekend getaways",
                &["Hybrid", "Campus Life", "All-Wheel Drive"],
            ),
            vehicle(
                "gr86-premium-2024",
                "Toyota GR86",
                "Premium Manual",
                (31_645, 429, 369),
                "20 / 27 mpg",
                "Affordable performance coupe tuned with Gazoo Racing DNA",
                &["Performance", "Manual", "Weekend Fun"],
            ),
            vehicle(
                "grand-highlander-2025",
                "Toyota Grand Highlander",
                "XLE Hybrid",
                (45_975, 589, 469),
                "36 mpg combined",
                "Three-row hybrid SUV ready for internships in other cities",
                &["Family Trips", "Hybrid", "Road Trip"],
            ),
            vehicle(
                "bz4x-xle-2024",
                "Toyota bZ4X",
                "XLE AWD",
                (43_895, 579, 389),
                "252 mi EPA range",
                "All-electric SUV with zero tailpipe emissions",
                &["EV", "Zero Emissions", "Tech Loaded"],
            ),
        ])
    }
}

fn vehicle(
    id: &str,
    name: &str,
    trim: &str,
    (msrp, monthly_finance, monthly_lease): (u32, u32, u32),
    fuel_economy: &str,
    highlight: &str,
    tags: &[&str],
) -> Vehicle {
    Vehicle {
        id: VehicleId::new(id),
        name: name.to_string(),
        trim: trim.to_string(),
        msrp,
        monthly_finance,
        monthly_lease,
        fuel_economy: fuel_economy.to_string(),
        highlight: highlight.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
