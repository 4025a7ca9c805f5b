use super::{ImportJob, ReportEngine};

use anyhow::{anyhow, Result};
use std::io::Write;
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::categorizer::Categorizer;
use crate::importer::Importer;
use crate::models::Category;
use crate::storage::{ImportOutcome, ReportStorage, Storage};

fn create_temporary_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{header}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

#[tokio::test]
async fn test_engine_imports_several_statements_concurrently() -> Result<()> {
    let comma = create_temporary_csv("Data,Descricao,Valor", &["01/03/2024,Ifood Lanche,-45,90", "05/03/2024,Salario,3000,00"])?;
    let semicolon = create_temporary_csv("Data;Historico;Valor", &["10/04/2024;Aluguel;-1.500,00"])?;
    let split = create_temporary_csv("Date,Description,Credit,Debit", &["2024-05-01,Payroll,2500.00,"])?;

    let storage = Arc::new(ReportStorage::new());
    let engine = ReportEngine::new(storage.clone());

    let completed = engine.run(vec![
        ImportJob::new("comma", comma.path()),
        ImportJob::new("semicolon", semicolon.path()),
        ImportJob::new("split", split.path()),
    ]).await?;

    assert_eq!(completed, 3);
    assert_eq!(storage.iter().count(), 3);

    let Some(ImportOutcome::Completed(report)) = storage.load("semicolon") else {
        return Err(anyhow!("semicolon report missing"));
    };

    assert_eq!(report.categories.get(Category::Housing), Some(Decimal::from(1500)));

    let Some(ImportOutcome::Completed(report)) = storage.load("split") else {
        return Err(anyhow!("split report missing"));
    };

    assert_eq!(report.kpis.total_income, Decimal::from(2500));

    Ok(())
}

#[tokio::test]
async fn test_engine_isolates_failed_imports() -> Result<()> {
    let good = create_temporary_csv("Date,Description,Amount", &["2024-03-01,Coffee,-3.50"])?;
    let bad_dates = create_temporary_csv("Date,Description,Amount", &["someday,Coffee,-3.50"])?;
    let no_date_column = create_temporary_csv("When,Description,Amount", &["2024-03-01,Coffee,-3.50"])?;

    let storage = Arc::new(ReportStorage::new());
    let engine = ReportEngine::new(storage.clone());

    let completed = engine.run(vec![
        ImportJob::new("good", good.path()),
        ImportJob::new("bad_dates", bad_dates.path()),
        ImportJob::new("no_date_column", no_date_column.path()),
        ImportJob::new("missing_file", "does/not/exist.csv"),
    ]).await?;

    assert_eq!(completed, 1);
    assert!(matches!(storage.load("good"), Some(ImportOutcome::Completed(_))));

    match storage.load("bad_dates") {
        Some(ImportOutcome::Failed(message)) => assert!(message.contains("No valid rows")),
        other => return Err(anyhow!("Unexpected outcome {other:?}"))
    }

    match storage.load("no_date_column") {
        Some(ImportOutcome::Failed(message)) => assert!(message.contains("\"When\"")),
        other => return Err(anyhow!("Unexpected outcome {other:?}"))
    }

    assert!(matches!(storage.load("missing_file"), Some(ImportOutcome::Failed(_))));

    Ok(())
}

#[tokio::test]
async fn test_engine_stores_outcome_for_max_magnitude_amounts() -> Result<()> {
    let max = Decimal::MAX.to_string();
    let row = format!("2024-03-01,Prize,{max}");
    let file = create_temporary_csv("Date,Description,Amount", &[row.as_str(), row.as_str()])?;

    let storage = Arc::new(ReportStorage::new());
    let engine = ReportEngine::new(storage.clone());

    let completed = engine.run(vec![ImportJob::new("huge", file.path())]).await?;

    assert_eq!(completed, 1);

    let Some(ImportOutcome::Completed(report)) = storage.load("huge") else {
        return Err(anyhow!("huge report missing"));
    };

    assert_eq!(report.kpis.total_income, Decimal::MAX);

    Ok(())
}

#[tokio::test]
async fn test_engine_uses_configured_importer() -> Result<()> {
    let file = create_temporary_csv("Date,Description,Amount", &["2024-03-01,Gym membership,-80.00"])?;

    let storage = Arc::new(ReportStorage::new());
    let importer = Importer::new().with_categorizer(Categorizer::default().with_rule(Category::Health, ["gym"]));
    let engine = ReportEngine::new(storage.clone()).with_importer(importer);

    engine.run(vec![ImportJob::new("gym", file.path())]).await?;

    let Some(ImportOutcome::Completed(report)) = storage.load("gym") else {
        return Err(anyhow!("gym report missing"));
    };

    assert_eq!(report.categories.get(Category::Health), Some(Decimal::from(80)));

    Ok(())
}

#[tokio::test]
async fn test_engine_with_no_jobs_does_nothing() -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let engine = ReportEngine::new(storage.clone());

    assert_eq!(engine.run(Vec::new()).await?, 0);
    assert_eq!(storage.iter().count(), 0);

    Ok(())
}
