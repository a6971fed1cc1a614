use crate::domain::word::{WordRecord, WordRepository};
use crate::error::AppError;
use crate::utils::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordResponse {
    pub letter: String,
    pub word: String,
    pub image_url: String,
}

/// Path input is only upper-cased. Anything that is not a stored letter just
/// fails to match.
pub fn normalize_letter(input: &str) -> String {
    input.to_uppercase()
}

pub async fn find_record(repo: &dyn WordRepository, letter: &str) -> Result<WordRecord, AppError> {
    repo.find_by_letter(letter)
        .await?
        .ok_or_else(|| AppError::WordNotFound(letter.to_string()))
}

/// Picks one entry with a uniform index in `[0, len)`.
pub fn select_word<R: Rng>(record: &WordRecord, rng: &mut R) -> Result<WordResponse, AppError> {
    if record.words.is_empty() {
        return Err(AppError::NoWordsAvailable(record.letter.clone()));
    }
    let entry = &record.words[rng.random_range(0..record.words.len())];
    Ok(WordResponse {
        letter: record.letter.clone(),
        word: entry.word.clone(),
        image_url: entry.image_url.clone(),
    })
}

/// Full letter lookup with an injected generator.
pub async fn lookup_word<R: Rng + Send>(
    repo: &dyn WordRepository,
    input: &str,
    rng: &mut R,
) -> Result<WordResponse, AppError> {
    let letter = normalize_letter(input);
    let record = find_record(repo, &letter).await?;
    select_word(&record, rng)
}

pub async fn get_word_handler(
    State(state): State<Arc<AppState>>,
    Path(letter): Path<String>,
) -> Result<Json<WordResponse>, AppError> {
    info!("Received request for letter: {letter}");

    // One generator per request, seeded from the thread-local entropy source.
    let mut rng = StdRng::from_rng(&mut rand::rng());
    let response = lookup_word(state.word_storage.as_ref(), &letter, &mut rng).await?;

    debug!("Randomly selected word: {:?}", response);
    Ok(Json(response))
}
