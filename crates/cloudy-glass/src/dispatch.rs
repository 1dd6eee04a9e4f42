//! Request dispatching.
//!
//! [`GlassSession`] is the single entry point for host events and UI
//! requests. Every call runs to completion against a selection snapshot taken
//! at entry; results for the UI are published on [`GlassSession::outbox`].

use std::time::Duration;

use cloudy_glass_core::logging::{span_names, targets};
use cloudy_glass_core::{ImageStore, Notice, Notifier, Signal};
use cloudy_glass_style::apply::{BatchOutcome, PresetApplicator};
use cloudy_glass_style::resolve::PresetResolver;
use cloudy_glass_style::selection::{Selection, SelectionGatekeeper, SelectionStatus};
use cloudy_glass_style::{ColorMode, StyleId};

use crate::config::GlassConfig;
use crate::message::{UiMessage, UiRequest};

/// How long the easter-egg notice stays up.
const EASTER_EGG_TIMEOUT: Duration = Duration::from_secs(5);

const RESET_PREVIEW_MESSAGE: &str = "Style deselected, resetting preview";

/// Errors returned by the dispatcher.
///
/// None of these leave the session unusable.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The selection is empty or its first node is not an eligible kind.
    #[error("selection rejected: {0}")]
    Validation(SelectionStatus),

    /// The requested preset could not be resolved.
    #[error(transparent)]
    Style(#[from] cloudy_glass_style::Error),

    /// A UI message could not be parsed.
    #[error("malformed UI message: {0}")]
    Protocol(#[from] serde_json::Error),
}

/// Everything the dispatcher needs from the host for one call.
pub struct HostContext<'a> {
    /// Snapshot of the current selection, in host order.
    pub selection: Selection<'a>,
    /// Image registration service.
    pub images: &'a mut dyn ImageStore,
    /// Transient notification service.
    pub notifier: &'a mut dyn Notifier,
}

/// A host document the session can act on.
pub trait GlassHost {
    /// Borrow the current selection together with the host services.
    fn context(&mut self) -> HostContext<'_>;
}

/// Dispatches host events and UI requests to the preset engine.
pub struct GlassSession {
    config: GlassConfig,
    resolver: PresetResolver,
    applicator: PresetApplicator,
    gatekeeper: SelectionGatekeeper,
    outbox: Signal<UiMessage>,
}

impl Default for GlassSession {
    fn default() -> Self {
        Self::new(GlassConfig::default())
    }
}

impl std::fmt::Debug for GlassSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlassSession")
            .field("gatekeeper", &self.gatekeeper)
            .field("outbox", &self.outbox)
            .finish_non_exhaustive()
    }
}

impl GlassSession {
    /// Create a session from configuration.
    pub fn new(config: GlassConfig) -> Self {
        let gatekeeper = SelectionGatekeeper::new(config.selection.eligible_kinds.iter().copied());
        Self {
            config,
            resolver: PresetResolver::new(),
            applicator: PresetApplicator::new(),
            gatekeeper,
            outbox: Signal::new(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    /// Messages for the UI are emitted here.
    pub fn outbox(&self) -> &Signal<UiMessage> {
        &self.outbox
    }

    /// Publish the initial selection status.
    pub fn start(&self, host: &mut dyn GlassHost) -> SelectionStatus {
        tracing::debug!(target: targets::DISPATCH, "session started");
        self.on_selection_changed(host)
    }

    /// Handle a host selection change.
    ///
    /// Raises an advisory when something is selected but the first node is
    /// ineligible, then publishes `selection-status`.
    pub fn on_selection_changed(&self, host: &mut dyn GlassHost) -> SelectionStatus {
        let span = tracing::debug_span!(target: targets::DISPATCH, span_names::SELECTION_CHANGED);
        let _enter = span.enter();

        let HostContext {
            selection,
            notifier,
            ..
        } = host.context();
        let status = self.gatekeeper.validate(&selection);

        if status.needs_advisory() {
            notifier.notify(Notice::advisory(&self.config.notices.select_layer));
        }
        self.outbox.emit(status.into());
        status
    }

    /// Answer a `check-layer-type` request.
    ///
    /// Raises at most one advisory, then publishes `layer-type-check-result`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check_eligibility(&self, host: &mut dyn GlassHost) -> bool {
        let HostContext {
            selection,
            notifier,
            ..
        } = host.context();
        let status = self.gatekeeper.validate(&selection);

        if !status.eligible {
            notifier.notify(Notice::advisory(&self.config.notices.select_at_least_one));
        }
        self.outbox.emit(UiMessage::LayerTypeCheckResult {
            is_valid_layer_type: status.eligible,
        });
        status.eligible
    }

    /// Apply a preset to the current selection.
    ///
    /// Nothing is mutated if the selection is rejected or the preset does not
    /// resolve. Otherwise every selected node is attempted, per-node failures
    /// are reported as notices, and `apply-summary` is published.
    pub fn apply(
        &self,
        id: StyleId,
        mode: ColorMode,
        host: &mut dyn GlassHost,
    ) -> Result<BatchOutcome, DispatchError> {
        let span = tracing::info_span!(
            target: targets::DISPATCH,
            span_names::APPLY_REQUEST,
            style = %id,
            %mode
        );
        let _enter = span.enter();

        let HostContext {
            mut selection,
            images,
            notifier,
        } = host.context();

        let status = self.gatekeeper.validate(&selection);
        if !status.eligible {
            tracing::debug!(target: targets::DISPATCH, %status, "apply rejected");
            notifier.notify(Notice::advisory(&self.config.notices.select_at_least_one));
            return Err(DispatchError::Validation(status));
        }

        let descriptor = self.resolver.resolve(id, mode, images).map_err(|err| {
            tracing::error!(target: targets::DISPATCH, error = %err, "cannot resolve preset");
            err
        })?;

        let batch = self.applicator.apply_all(&descriptor, &mut selection);

        if self.config.notices.report_node_failures {
            for (_, err) in batch.failures() {
                notifier.notify(Notice::failure(format!(
                    "{}{err}",
                    self.config.notices.apply_failed
                )));
            }
        }

        let summary = batch.summary();
        tracing::info!(target: targets::DISPATCH, %summary, "applied preset");
        self.outbox.emit(summary.into());
        Ok(batch)
    }

    /// Handle one UI request.
    #[tracing::instrument(level = "debug", skip(self, host))]
    pub fn handle(&self, request: UiRequest, host: &mut dyn GlassHost) -> Result<(), DispatchError> {
        let notices = &self.config.notices;

        match request {
            UiRequest::ApplyEffect {
                selected_style,
                is_dark_mode,
            } => {
                let id = selected_style.parse::<StyleId>().map_err(|err| {
                    tracing::error!(target: targets::DISPATCH, error = %err, "unknown style name");
                    err
                })?;
                self.apply(id, ColorMode::from_dark_flag(is_dark_mode), host)?;
            }
            UiRequest::CheckLayerType => {
                self.check_eligibility(host);
            }
            UiRequest::Notification { message } => {
                host.context().notifier.notify(Notice::info(message));
            }
            UiRequest::SimpleWarning => {
                host.context()
                    .notifier
                    .notify(Notice::advisory(&notices.select_layer).with_timeout(notices.timeout()));
            }
            UiRequest::ShowSelectionWarning => {
                host.context()
                    .notifier
                    .notify(Notice::advisory(&notices.no_selection));
            }
            UiRequest::StyleSelected { button_text } => match button_text {
                Some(text) if !text.is_empty() => {
                    tracing::debug!(target: targets::DISPATCH, style = %text, "style selected");
                }
                _ => self.outbox.emit(UiMessage::ResetPreview {
                    message: RESET_PREVIEW_MESSAGE.to_string(),
                }),
            },
            UiRequest::EasterEgg { .. } => {
                host.context()
                    .notifier
                    .notify(Notice::info(&notices.easter_egg).with_timeout(EASTER_EGG_TIMEOUT));
            }
        }

        Ok(())
    }

    /// Parse and handle one UI request.
    pub fn handle_json(&self, text: &str, host: &mut dyn GlassHost) -> Result<(), DispatchError> {
        let request = UiRequest::from_json(text).map_err(|err| {
            tracing::warn!(target: targets::DISPATCH, error = %err, "malformed UI message");
            err
        })?;
        self.handle(request, host)
    }
}
