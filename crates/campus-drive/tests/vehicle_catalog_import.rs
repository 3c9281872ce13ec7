use campus_drive::workflows::catalog::{
    CatalogImportError, ContentCatalog, VehicleCatalog, VehicleCatalogImporter, VehicleId,
};
use campus_drive::workflows::matching::rank_vehicles;
use campus_drive::workflows::session::default_profile;

#[test]
fn bundled_lineup_matches_the_standard_catalog() {
    let data = include_bytes!("../data/toyota_lineup.csv");

    let catalog = VehicleCatalogImporter::from_reader(&data[..]).expect("lineup imports");

    assert_eq!(catalog, VehicleCatalog::standard());
}

#[test]
fn imported_lineup_ranks_like_the_standard_catalog() {
    let data = include_bytes!("../data/toyota_lineup.csv");
    let content = ContentCatalog::standard().with_vehicles(
        VehicleCatalogImporter::from_reader(&data[..]).expect("lineup imports"),
    );

    let ranked = rank_vehicles(content.vehicles.vehicles(), &default_profile(), None);

    assert_eq!(ranked[0].vehicle.id, VehicleId::new("corolla-hybrid-2024"));
    assert_eq!(ranked[0].score, 50);
}

#[test]
fn importer_reports_malformed_numbers() {
    let csv = "id,name,trim,msrp,monthly_finance,monthly_lease,mpg,highlight,tags\n\
supra,Toyota GR Supra,3.0,about fifty grand,699,599,26 mpg,Halo car,Performance\n";

    let error = VehicleCatalogImporter::from_reader(csv.as_bytes()).expect_err("msrp is invalid");

    assert!(matches!(error, CatalogImportError::Csv(_)));
    assert!(error.to_string().contains("invalid vehicle CSV data"));
}

#[test]
fn importer_reports_missing_files() {
    let error = VehicleCatalogImporter::from_path("data/does-not-exist.csv")
        .expect_err("file is missing");

    assert!(matches!(error, CatalogImportError::Io(_)));
}
