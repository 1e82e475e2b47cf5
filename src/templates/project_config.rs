//! `config/config.json` document.
//!
//! Built from typed structs so that any project name produces valid JSON.
//! Only `project_info.name` and `project_info.created_date` vary between
//! projects.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Result;
use crate::models::RenderContext;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectConfigDocument {
    pub project_info: ProjectInfo,
    pub spatial_config: SpatialConfig,
    pub data_sources: DataSources,
    pub processing_config: ProcessingConfig,
    pub output_config: OutputConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub created_date: String,
    pub description: String,
    pub author: String,
    pub contact: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpatialConfig {
    pub coordinate_system: String,
    pub utm_zone: String,
    pub study_area: StudyArea,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudyArea {
    pub name: String,
    pub bounds: Bounds,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataSources {
    pub satellite_imagery: SatelliteImagery,
    pub vector_data: VectorData,
    pub auxiliary_data: AuxiliaryData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SatelliteImagery {
    pub landsat: bool,
    pub sentinel2: bool,
    pub sentinel1: bool,
    pub modis: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VectorData {
    pub forest_boundaries: bool,
    pub protected_areas: bool,
    pub administrative_limits: bool,
    pub infrastructure: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuxiliaryData {
    pub dem: bool,
    pub climate_data: bool,
    pub soil_data: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessingConfig {
    pub cloud_cover_threshold: u32,
    pub temporal_range: TemporalRange,
    pub spatial_resolution: u32,
    pub buffer_distance_m: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemporalRange {
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub coordinate_system: String,
    pub raster_format: String,
    pub vector_format: String,
    pub compression: String,
}

impl ProjectConfigDocument {
    pub fn for_context(ctx: &RenderContext) -> Self {
        let name = ctx.project_name.as_str();
        Self {
            project_info: ProjectInfo {
                name: name.to_string(),
                version: "1.0.0".to_string(),
                created_date: ctx.created_date(),
                description: "Proyecto de monitoreo forestal con análisis geoespacial".to_string(),
                author: "Equipo de Monitoreo Forestal".to_string(),
                contact: "monitoreo@forestales.org".to_string(),
            },
            spatial_config: SpatialConfig {
                coordinate_system: "EPSG:4326".to_string(),
                utm_zone: "14N".to_string(),
                study_area: StudyArea {
                    name: format!("Área de estudio {}", name),
                    bounds: Bounds {
                        min_lat: 0.0,
                        max_lat: 0.0,
                        min_lon: 0.0,
                        max_lon: 0.0,
                    },
                },
            },
            data_sources: DataSources {
                satellite_imagery: SatelliteImagery {
                    landsat: true,
                    sentinel2: true,
                    sentinel1: true,
                    modis: false,
                },
                vector_data: VectorData {
                    forest_boundaries: true,
                    protected_areas: true,
                    administrative_limits: true,
                    infrastructure: true,
                },
                auxiliary_data: AuxiliaryData {
                    dem: true,
                    climate_data: false,
                    soil_data: false,
                },
            },
            processing_config: ProcessingConfig {
                cloud_cover_threshold: 20,
                temporal_range: TemporalRange {
                    start_year: 2020,
                    end_year: 2024,
                },
                spatial_resolution: 30,
                buffer_distance_m: 100,
            },
            output_config: OutputConfig {
                coordinate_system: "EPSG:32614".to_string(),
                raster_format: "GeoTIFF".to_string(),
                vector_format: "Shapefile".to_string(),
                compression: "LZW".to_string(),
            },
        }
    }

    /// Pretty JSON with four space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
