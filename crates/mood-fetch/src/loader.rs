//! Async dataset loading into application state.

use crate::{remote_data_url, LOCAL_DATA_PATH};
use gloo_net::http::Request;
use mood_core::{parse_dataset, DataError, Response};
use mood_data::DemoGenerator;
use mood_state::AppState;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// DATA LOADER
// ============================================================================

/// Loads datasets into [`AppState`], one attempt at a time.
///
/// Every load takes a generation ticket from the state first; by the time
/// its response arrives, a newer attempt may have superseded it, in which
/// case the result is dropped on the floor.
#[derive(Clone, Copy)]
pub struct DataLoader {
    state: AppState,
}

impl DataLoader {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Initial load: use a local export file if one is served next to the
    /// page. No error surfaces when it is absent; the import form simply
    /// stays up.
    pub fn init(&self) {
        let state = self.state;
        let generation = state.begin_load();

        spawn_local(async move {
            match fetch_text(LOCAL_DATA_PATH).await {
                Ok(text) => {
                    tracing::info!("using local {LOCAL_DATA_PATH}");
                    apply(&state, generation, decode(&text));
                }
                Err(err) => {
                    tracing::debug!(%err, "no local export, awaiting import");
                    state.finish_load(generation);
                }
            }
        });
    }

    /// Fetch a user's export from the download service.
    pub fn load_remote(&self, code: String) {
        let state = self.state;
        let generation = state.begin_load();
        let url = remote_data_url(&code);

        spawn_local(async move {
            tracing::info!(%url, "fetching remote export");
            let outcome = match fetch_text(&url).await {
                Ok(text) => decode(&text),
                Err(err) => Err(err),
            };
            apply(&state, generation, outcome);
        });
    }

    /// Generate and load a demo dataset.
    pub fn load_random(&self) {
        let state = self.state;
        let generation = state.begin_load();

        spawn_local(async move {
            let data = DemoGenerator::new().generate(&mut rand::thread_rng());
            tracing::info!(count = data.len(), "generated demo dataset");
            apply(&state, generation, Ok(data));
        });
    }
}

fn apply(state: &AppState, generation: u64, outcome: Result<Vec<Response>, DataError>) {
    if !state.finish_load(generation) {
        tracing::debug!("discarding superseded load");
        return;
    }
    match outcome {
        Ok(data) => state.chart.load_dataset(data),
        Err(err) => {
            tracing::warn!(%err, "load failed");
            state.set_error(err.user_message());
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, DataError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DataError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(DataError::Fetch(format!("HTTP {}", response.status())));
    }

    response
        .text()
        .await
        .map_err(|e| DataError::Fetch(e.to_string()))
}

/// Error envelope the download service returns instead of data.
#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

/// Decode a response body: either the service's error envelope or an export.
fn decode(text: &str) -> Result<Vec<Response>, DataError> {
    if let Ok(service) = serde_json::from_str::<ServiceError>(text) {
        return Err(match service.error.as_str() {
            "bad_secret" => DataError::BadCode,
            other => DataError::Fetch(other.to_string()),
        });
    }

    parse_dataset(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_maps_bad_secret_to_bad_code() {
        assert_eq!(decode(r#"{"error": "bad_secret"}"#), Err(DataError::BadCode));
    }

    #[test]
    fn decode_passes_other_service_errors_through() {
        match decode(r#"{"error": "rate_limited"}"#) {
            Err(DataError::Fetch(msg)) => assert_eq!(msg, "rate_limited"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn decode_parses_a_real_export() {
        let body = r#"[{
            "start_time": "2013/07/21 15:12:58 +0100",
            "happy": 0.82, "relaxed": 0.5, "awake": 0.63,
            "in_out": "out", "home_work": "other",
            "with_partner": 1, "do_walk": 1
        }]"#;
        let data = decode(body).unwrap();
        assert_eq!(data.len(), 1);
        assert!(data[0].flag("with_partner"));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(DataError::Parse(_))));
    }
}
