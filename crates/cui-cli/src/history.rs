//! Replays navigation scripts against a [`HistoryManager`].

use anyhow::{Context, Result};
use cui_history::{HistoryConfig, HistoryManager, UrlParameter, ViewIdentifier, ViewToken};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One step of a navigation script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HistoryStep {
    /// Renders a new page view.
    Visit {
        view_id: String,
        #[serde(default)]
        logical_view_id: Option<String>,
        #[serde(default)]
        parameters: Vec<UrlParameter>,
    },
    /// Re-presents the token of the last visit.
    Reload,
    /// Pops the previous view and navigates to it.
    Back,
    Peek,
}

impl HistoryStep {
    fn label(&self) -> String {
        match self {
            Self::Visit { view_id, .. } => format!("visit {view_id}"),
            Self::Reload => "reload".to_string(),
            Self::Back => "back".to_string(),
            Self::Peek => "peek".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryScript {
    pub steps: Vec<HistoryStep>,
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub outcome: String,
    pub current: String,
    pub page_reload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryReport {
    pub steps: Vec<StepReport>,
    /// Oldest first.
    pub entries: Vec<ViewIdentifier>,
}

pub fn parse_config(json: &str) -> Result<HistoryConfig> {
    serde_json::from_str(json).context("parse history config")
}

pub fn parse_script(json: &str) -> Result<HistoryScript> {
    serde_json::from_str(json).context("parse history script")
}

pub fn replay(config: HistoryConfig, script: &HistoryScript) -> Result<HistoryReport> {
    let mut history = HistoryManager::new(config).context("create history manager")?;
    let mut last_token: Option<ViewToken> = None;
    let mut steps = Vec::with_capacity(script.steps.len());

    for step in &script.steps {
        let outcome = match step {
            HistoryStep::Visit {
                view_id,
                logical_view_id,
                parameters,
            } => {
                let view = ViewIdentifier::with_logical_id(
                    view_id.as_str(),
                    logical_view_id.clone().unwrap_or_default(),
                )
                .with_context(|| format!("invalid view '{view_id}'"))?
                .with_parameters(parameters.clone());
                let token = history.issue_view_token();
                last_token = Some(token);
                history.track_view(token, &view).to_string()
            }
            HistoryStep::Reload => {
                let view = history.current_view().clone();
                let token = match last_token {
                    Some(token) => token,
                    None => history.issue_view_token(),
                };
                last_token = Some(token);
                history.track_view(token, &view).to_string()
            }
            HistoryStep::Back => {
                let previous = history.pop_previous();
                let token = history.issue_view_token();
                last_token = Some(token);
                let outcome = history.track_view(token, &previous);
                format!("back to {previous} ({outcome})")
            }
            HistoryStep::Peek => format!("previous is {}", history.peek_previous()),
        };
        debug!(step = %step.label(), outcome = %outcome, "replayed step");
        steps.push(StepReport {
            step: step.label(),
            outcome,
            current: history.current_view().to_string(),
            page_reload: history.is_page_reload(),
        });
    }

    info!(steps = steps.len(), entries = history.len(), "replayed history script");
    Ok(HistoryReport {
        steps,
        entries: history.entries().cloned().collect(),
    })
}
