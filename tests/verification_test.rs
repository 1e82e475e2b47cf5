//! Structure verification against generated and hand-built directories.

use chrono::{Local, TimeZone};
use std::fs;
use tempfile::TempDir;
use umi_scaffold::verifier::resolve_project_name;
use umi_scaffold::{
    AssumeYes, Generator, NamePolicy, ProjectName, layout, report, verify_project, verify_structure,
};

fn name(raw: &str) -> ProjectName {
    ProjectName::parse(raw, NamePolicy::Permissive).unwrap()
}

async fn generate(work: &TempDir, raw: &str) {
    let timestamp = Local.with_ymd_and_hms(2025, 7, 30, 9, 0, 0).unwrap();
    Generator::new(work.path(), NamePolicy::Permissive)
        .generate(raw, &mut AssumeYes, timestamp)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_freshly_generated_project_verifies() {
    let work = TempDir::new().unwrap();
    generate(&work, "Analisis_GDA_ESA").await;
    let base = work.path().join("Analisis_GDA_ESA");
    let critical = layout::critical_paths(&name("Analisis_GDA_ESA"));

    let structure = verify_structure(&base, &critical);

    assert!(structure.all_ok);
    assert_eq!(structure.entries.len(), critical.len());
    assert_eq!(
        structure.entries.iter().map(|e| e.path.clone()).collect::<Vec<_>>(),
        critical
    );
}

#[test]
fn test_empty_directory_fails_every_path() {
    let work = TempDir::new().unwrap();
    let critical = layout::critical_paths(&name("Demo"));

    let structure = verify_structure(work.path(), &critical);

    assert!(!structure.all_ok);
    assert!(structure.entries.iter().all(|e| !e.exists));
}

#[tokio::test]
async fn test_removed_folder_is_reported() {
    let work = TempDir::new().unwrap();
    generate(&work, "Demo").await;
    let base = work.path().join("Demo");
    fs::remove_dir_all(base.join("documentation_MIAs")).unwrap();

    let verification = verify_project(&base, &name("Demo"));

    assert!(!verification.all_ok());
    let missing: Vec<_> = verification.structure.missing().map(|e| e.path.clone()).collect();
    assert_eq!(missing, vec![std::path::PathBuf::from("documentation_MIAs/Demo_sop")]);
    assert_eq!(verification.exit_code(false), 0);
}

#[tokio::test]
async fn test_project_name_resolved_from_config() {
    let work = TempDir::new().unwrap();
    generate(&work, "Demo").await;
    let renamed = work.path().join("renamed-dir");
    fs::rename(work.path().join("Demo"), &renamed).unwrap();

    assert_eq!(resolve_project_name(&renamed), name("Demo"));
    assert!(verify_project(&renamed, &name("Demo")).all_ok());
}

#[tokio::test]
async fn test_credentials_and_text_report() {
    let work = TempDir::new().unwrap();
    generate(&work, "Demo").await;
    let base = work.path().join("Demo");
    fs::create_dir_all(base.join("config/credentials")).unwrap();
    fs::write(base.join("config/credentials/gee_service_account.json"), "{}").unwrap();

    let verification = verify_project(&base, &name("Demo"));
    assert!(verification.config_present);
    assert_eq!(verification.credential_files, Some(1));

    let text = report::verification_text(&verification, Local::now());
    assert!(text.contains("✅ data/raw_Demo/vectorial"));
    assert!(text.contains("🎉 Estructura del proyecto verificada correctamente"));
    assert!(text.contains("🔐 Archivos de credenciales: 1 encontrados"));
}

#[tokio::test]
async fn test_entry_script_lists_the_same_paths() {
    let work = TempDir::new().unwrap();
    generate(&work, "Demo").await;
    let script = fs::read_to_string(work.path().join("Demo/main.py")).unwrap();

    for path in layout::critical_paths(&name("Demo")) {
        assert!(script.contains(&format!("\"{}\"", path.display())));
    }
}
