use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::info;
use wordbook::config::StoreConfig;
use wordbook::domain::word::{SqliteWordRepository, WordRecord, WordRepository};
use wordbook::service::word::normalize_letter;
use wordbook::storage;

/// Parses a JSON array of word records and normalizes it the way lookups see
/// it: upper-case letters, trimmed text, one record per letter.
pub fn parse_seed(raw: &str) -> anyhow::Result<Vec<WordRecord>> {
    let records: Vec<WordRecord> =
        serde_json::from_str(raw).context("seed file is not a JSON array of word records")?;

    let mut letters = HashSet::new();
    let mut normalized = Vec::with_capacity(records.len());
    for (index, mut record) in records.into_iter().enumerate() {
        record.letter = normalize_letter(record.letter.trim());
        if record.letter.is_empty() {
            bail!("record #{index} has an empty letter");
        }
        if !letters.insert(record.letter.clone()) {
            bail!("letter `{}` appears more than once", record.letter);
        }
        for entry in &mut record.words {
            entry.word = entry.word.trim().to_string();
            entry.image_url = entry.image_url.trim().to_string();
            if entry.word.is_empty() {
                bail!("letter `{}` has an entry without a word", record.letter);
            }
            if entry.image_url.is_empty() {
                bail!("word `{}` has no image URL", entry.word);
            }
        }
        normalized.push(record);
    }
    Ok(normalized)
}

pub async fn seed_store(repo: &dyn WordRepository, records: &[WordRecord]) -> anyhow::Result<u64> {
    info!("Replacing word store contents with {} records...", records.len());
    repo.replace_all(records)
        .await
        .context("failed to write seed records")?;
    let stored = repo.count_records().await?;
    info!("Word store initialization complete: {stored} letters");
    Ok(stored)
}

pub async fn run(store: &StoreConfig, file: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read seed file `{}`", file.display()))?;
    let records = parse_seed(&raw).with_context(|| format!("invalid seed file `{}`", file.display()))?;

    let pool = Arc::new(
        storage::connect(store)
            .await
            .with_context(|| format!("failed to open word store `{}`", store.db_url))?,
    );
    let repo = SqliteWordRepository::new(pool.clone());
    seed_store(&repo, &records).await?;
    pool.close().await;
    Ok(())
}
