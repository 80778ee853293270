use std::path::{Path, PathBuf};

use time::macros::format_description;
use tokio::fs;

use crate::errors::ExportError;
use crate::state::TelemetryService;

/// Writes the current sensor report as pretty JSON into `directory`,
/// named `sensor_data_<YYYY-MM-DD>.json` like the reference download.
pub async fn export_sensor_data(
    service: &TelemetryService,
    directory: &Path,
) -> Result<PathBuf, ExportError> {
    let report = service.export_report().await;

    let date_format = format_description!("[year]-[month]-[day]");
    let date = report.timestamp.format(&date_format)?;
    let path = directory.join(format!("sensor_data_{date}.json"));

    let payload = serde_json::to_vec_pretty(&report)?;

    fs::create_dir_all(directory).await?;
    fs::write(&path, payload).await?;

    tracing::info!("sensor data exported to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::env;

    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    use agrisync_api::SensorReport;

    use super::*;

    #[tokio::test]
    async fn test_export_writes_current_histories() {
        let service = TelemetryService::new(10);
        let directory = env::temp_dir().join("agrisync_export_test");

        let path = export_sensor_data(&service, &directory).await.unwrap();

        let payload = fs::read(&path).await.unwrap();
        let report: SensorReport = serde_json::from_slice(&payload).unwrap();

        assert_eq!(
            report.soil_readings,
            vec![62, 65, 68, 64, 67, 65, 63, 66, 64, 68]
        );
        assert_eq!(report.npk_levels.nitrogen, 45);

        fs::remove_dir_all(&directory).await.unwrap();
    }

    #[tokio::test]
    async fn test_report_timestamp_is_rfc3339() {
        let service = TelemetryService::new(10);
        let report = service.export_report().await;

        let json = serde_json::to_value(&report).unwrap();
        let timestamp = json["timestamp"].as_str().unwrap();

        assert!(OffsetDateTime::parse(timestamp, &Rfc3339).is_ok());
    }
}
