//! Terminal text for generation and verification runs.
//!
//! Everything returns a `String`; the binaries decide where it goes.

use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::Result;
use crate::layout::{CONFIG_FILE, CREDENTIALS_DIR};
use crate::models::{FolderRecord, GenerationReport, ProjectName, WrittenFile};
use crate::verifier::VerificationReport;

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 50;

pub fn generation_header(name: &ProjectName) -> String {
    format!("\n🌲 Creando proyecto: {} 🌲\n{}", name, "=".repeat(NARROW_RULE))
}

pub fn folder_line(record: &FolderRecord) -> String {
    format!("✓ {}", record.path.display())
}

pub fn files_header() -> String {
    "\n📄 Creando archivos principales...".to_string()
}

pub fn file_line(file: &WrittenFile) -> String {
    format!("✅ {}", file.path.display())
}

pub fn generation_summary(report: &GenerationReport) -> String {
    let rule = "=".repeat(NARROW_RULE);
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "✅ PROYECTO '{}' CREADO EXITOSAMENTE", report.project_name);
    let _ = writeln!(out, "📁 Ubicación: {}", report.base_path.display());
    let _ = writeln!(out, "\n🚀 Próximos pasos:");
    let _ = writeln!(out, "   1. cd {}", report.project_name);
    let _ = writeln!(out, "   2. pip install -r requirements.txt");
    let _ = writeln!(out, "   3. git init");
    let _ = writeln!(out, "   4. python main.py");
    let _ = write!(out, "{}", rule);
    out
}

/// The complete generation transcript in table order.
pub fn generation_text(report: &GenerationReport) -> String {
    let mut lines = vec![generation_header(&report.project_name)];
    lines.extend(report.folders.iter().map(folder_line));
    lines.push(files_header());
    lines.extend(report.files.iter().map(file_line));
    lines.push(generation_summary(report));
    lines.join("\n")
}

pub fn usage_text(program: &str) -> String {
    format!(
        "❌ Error: Debes proporcionar el nombre del proyecto\n\
         Uso: {program} 'NombreDelProyecto'\n\
         \nEjemplos:\n  \
         {program} 'MonitoreoAmazonia2024'\n  \
         {program} 'GDA_ESA_v1'\n  \
         {program} 'BosquesUrbanos'"
    )
}

pub fn empty_name_text() -> String {
    "❌ Error: El nombre del proyecto no puede estar vacío".to_string()
}

pub fn cancelled_text() -> String {
    "Operación cancelada.".to_string()
}

/// Structure check followed by the config/credentials check. The config
/// section is skipped when the structure is incomplete.
pub fn verification_text(report: &VerificationReport, checked_at: DateTime<Local>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "🌲".repeat(20));
    let _ = writeln!(out, "   PROYECTO: {}", report.project_name.upper());
    let _ = writeln!(out, "   MONITOREO FORESTAL");
    let _ = writeln!(out, "{}", "🌲".repeat(20));

    let _ = writeln!(out, "🔍 Verificando estructura del proyecto: {}", report.project_name);
    let _ = writeln!(out, "📅 Fecha: {}", checked_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{}", "-".repeat(WIDE_RULE));

    for entry in &report.structure.entries {
        if entry.exists {
            let _ = writeln!(out, "✅ {}", entry.path.display());
        } else {
            let _ = writeln!(out, "❌ {} - NO ENCONTRADO", entry.path.display());
        }
    }

    if !report.structure.all_ok {
        let _ = writeln!(out, "\n⚠️  Faltan algunas carpetas críticas del proyecto");
        let _ = write!(out, "\n❌ No se puede continuar con estructura incompleta");
        return out;
    }

    let _ = writeln!(out, "\n🎉 Estructura del proyecto verificada correctamente");
    let _ = writeln!(out, "\n{}", "=".repeat(WIDE_RULE));

    if report.config_present {
        let _ = writeln!(out, "📋 Configuración encontrada: {}", CONFIG_FILE);
    } else {
        let _ = writeln!(out, "⚠️  Archivo de configuración no encontrado: {}", CONFIG_FILE);
    }

    match report.credential_files {
        Some(0) => {
            let _ = writeln!(out, "⚠️  No se encontraron archivos de credenciales");
        }
        Some(count) => {
            let _ = writeln!(out, "🔐 Archivos de credenciales: {} encontrados", count);
        }
        None => {}
    }

    let _ = writeln!(out, "\n{}", "=".repeat(WIDE_RULE));
    let _ = writeln!(out, "🚀 Proyecto listo para desarrollo");
    let _ = writeln!(out, "\n📝 Próximos pasos sugeridos:");
    let _ = writeln!(out, "   1. Configurar credenciales en {}/", CREDENTIALS_DIR);
    let _ = writeln!(out, "   2. Agregar datos iniciales en data/raw_{}/", report.project_name);
    let _ = writeln!(out, "   3. Revisar documentación en documentation_MIAs/");
    let _ = write!(out, "   4. Desarrollar scripts específicos en scripts/python/");
    out
}

pub fn verification_json(report: &VerificationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
