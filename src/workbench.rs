//! Session-scoped owner of the current analysis
//!
//! Loading new input builds a complete [`Analysis`] and a fresh
//! [`MergeSession`] first and only then replaces the old pair, so a rejected
//! input leaves everything as it was and an accepted one drops all previous
//! tables, traces and user progress together.

use tracing::info;

use crate::piles::parse_piles_with_limit;
use crate::{Analysis, AnalysisConfig, AnalysisError, MergeSession};

/// Current analysis plus the hand-merge session derived from it.
#[derive(Debug)]
pub struct Workbench {
    config: AnalysisConfig,
    current: Option<(Analysis, MergeSession)>,
}

impl Workbench {
    /// Empty workbench with `config`.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            current: None,
        })
    }

    /// Parse `text`, analyse it, and swap it in.
    pub fn load(&mut self, text: &str) -> Result<&Analysis, AnalysisError> {
        let piles = parse_piles_with_limit(text, self.config.max_piles)?;
        let analysis = Analysis::run(piles, &self.config)?;
        let session = analysis.session();

        info!(
            piles = analysis.piles().len(),
            optimal = analysis.optimal_cost(),
            "workbench loaded"
        );

        let (analysis, _) = self.current.insert((analysis, session));
        Ok(&*analysis)
    }

    /// Configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Current analysis, if any input has been loaded.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.current.as_ref().map(|(analysis, _)| analysis)
    }

    /// Current hand-merge session.
    pub fn session(&self) -> Option<&MergeSession> {
        self.current.as_ref().map(|(_, session)| session)
    }

    /// Mutable hand-merge session.
    pub fn session_mut(&mut self) -> Option<&mut MergeSession> {
        self.current.as_mut().map(|(_, session)| session)
    }

    /// Drop all derived state.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
