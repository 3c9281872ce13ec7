use campus_drive::config::ContentConfig;
use campus_drive::error::AppError;
use campus_drive::workflows::catalog::{ContentCatalog, VehicleCatalogImporter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Standard content, with the vehicle lineup swapped for a CSV import when one is configured.
pub(crate) fn load_content(config: &ContentConfig) -> Result<ContentCatalog, AppError> {
    match config.vehicle_catalog.as_deref() {
        Some(path) => load_content_from(path),
        None => Ok(ContentCatalog::standard()),
    }
}

pub(crate) fn load_content_from(path: &Path) -> Result<ContentCatalog, AppError> {
    let vehicles = VehicleCatalogImporter::from_path(path)?;
    info!(path = %path.display(), vehicles = vehicles.len(), "vehicle catalog imported");
    Ok(ContentCatalog::standard().with_vehicles(vehicles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn lineup_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../crates/campus-drive/data/toyota_lineup.csv")
    }

    #[test]
    fn missing_catalog_config_uses_standard_content() {
        let content = load_content(&ContentConfig {
            vehicle_catalog: None,
        })
        .expect("standard content");

        assert_eq!(content, ContentCatalog::standard());
    }

    #[test]
    fn configured_catalog_is_imported() {
        let content = load_content(&ContentConfig {
            vehicle_catalog: Some(lineup_path()),
        })
        .expect("catalog imports");

        assert_eq!(content.vehicles.len(), 7);
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let result = load_content_from(Path::new("missing-lineup.csv"));

        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
