use crate::api::{AnalyzeEndpoint, HistoryEndpoint};
use crate::errors::ClientError;
use crate::models::{AnalysisResult, SentimentStats};
use crate::samples::sample;
use crate::state::{ControllerState, Outcome, Phase, lock};
use crate::ui::RenderSurface;
use crate::view::{HistoryView, ResultView, StatsView};
use std::sync::Mutex;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRefresh {
    Rendered(usize),
    Stale,
}

pub struct ClientController<S, A, H> {
    surface: Mutex<S>,
    analyzer: A,
    history: H,
    state: ControllerState,
}

struct SubmitGuard<'a, S: RenderSurface> {
    surface: &'a Mutex<S>,
    state: &'a ControllerState,
}

impl<S: RenderSurface> Drop for SubmitGuard<'_, S> {
    fn drop(&mut self) {
        lock(self.surface).set_busy(false);
        self.state.end_submit();
    }
}

impl<S, A, H> ClientController<S, A, H>
where
    S: RenderSurface,
    A: AnalyzeEndpoint,
    H: HistoryEndpoint,
{
    pub fn new(surface: S, analyzer: A, history: H) -> Self {
        Self {
            surface: Mutex::new(surface),
            analyzer,
            history,
            state: ControllerState::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.state.last_outcome()
    }

    pub fn input(&self) -> String {
        self.state.input()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut lock(&self.surface))
    }

    pub fn into_surface(self) -> S {
        self.surface
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn set_char_count(&self, text: &str) -> usize {
        let count = text.chars().count();
        lock(&self.surface).set_char_count(count);
        count
    }

    pub fn set_input(&self, text: &str) -> usize {
        self.state.set_input(text);
        lock(&self.surface).set_input(text);
        self.set_char_count(text)
    }

    pub fn fill_sample(&self, index: usize) -> Result<&'static str, ClientError> {
        let text = sample(index).ok_or(ClientError::UnknownSample(index))?;
        self.set_input(text);
        Ok(text)
    }

    pub async fn analyze_input(&self) -> Result<AnalysisResult, ClientError> {
        let input = self.state.input();
        self.analyze(&input).await
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::Validation);
        }

        let result = {
            let _guard = self.begin_submit()?;
            let outcome = self
                .analyzer
                .analyze(text)
                .await
                .and_then(|response| response.into_result());

            match &outcome {
                Ok(result) => {
                    self.render_result(result);
                    self.state.record_outcome(Outcome::Rendered);
                }
                Err(err) => {
                    warn!("analysis failed: {err}");
                    self.state.record_outcome(Outcome::Failed);
                }
            }
            outcome?
        };

        // Failures are logged by the refresh and leave the current history in place.
        let _ = self.refresh_history().await;
        Ok(result)
    }

    pub async fn analyze_batch(&self, texts: &[String]) -> Result<Vec<AnalysisResult>, ClientError> {
        let texts: Vec<String> = texts
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect();
        if texts.is_empty() {
            return Err(ClientError::Validation);
        }

        let _guard = self.begin_submit()?;
        let results = self
            .analyzer
            .analyze_batch(&texts)
            .await
            .and_then(|response| response.into_results())?;

        let views: Vec<ResultView> = results.iter().map(ResultView::from_result).collect();
        lock(&self.surface).show_batch(&views);
        info!("batch of {} texts analyzed", results.len());
        Ok(results)
    }

    pub async fn refresh_history(&self) -> Result<HistoryRefresh, ClientError> {
        let ticket = self.state.next_history_ticket();
        let response = match self.history.list().await {
            Ok(response) => response,
            Err(err) => {
                error!("failed to load history: {err}");
                return Err(err);
            }
        };

        let view = HistoryView::from_items(&response.history);
        let mut surface = lock(&self.surface);
        if !self.state.claim_history_render(ticket) {
            debug!("dropping stale history response {ticket}");
            return Ok(HistoryRefresh::Stale);
        }
        surface.show_history(&view);
        Ok(HistoryRefresh::Rendered(view.len()))
    }

    pub async fn stats(&self) -> Result<SentimentStats, ClientError> {
        let stats = self
            .history
            .stats()
            .await
            .and_then(|response| response.into_stats())?;
        lock(&self.surface).show_stats(&StatsView::from_stats(&stats));
        Ok(stats)
    }

    pub fn render_result(&self, result: &AnalysisResult) {
        let view = ResultView::from_result(result);
        lock(&self.surface).show_result(&view);
    }

    pub fn report(&self, err: &ClientError) {
        lock(&self.surface).notify(&err.notice());
    }

    fn begin_submit(&self) -> Result<SubmitGuard<'_, S>, ClientError> {
        if !self.state.try_begin_submit() {
            return Err(ClientError::Busy);
        }
        lock(&self.surface).set_busy(true);
        Ok(SubmitGuard {
            surface: &self.surface,
            state: &self.state,
        })
    }
}
