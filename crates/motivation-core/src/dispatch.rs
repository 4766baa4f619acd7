//! Thin adapter between host callbacks and the session.
//!
//! [`Extension`] owns the session for one activation. Each host event kind
//! has one method; it converts the host's timestamp, runs the session
//! handler, renders the returned notices and refreshes the status element.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::{MotivationConfig, NAMESPACE};
use crate::events::{HostEvent, Notice};
use crate::host::{Diagnostic, Document, Host, TextChange};
use crate::messages::{DefaultCatalog, MessageCatalog, RandomSource, ThreadRandom};
use crate::session::Session;
use crate::status::{stats_report, StatusSurface};

pub struct Extension<H: Host> {
    host: H,
    session: Session,
    catalog: Box<dyn MessageCatalog>,
    rng: Box<dyn RandomSource>,
}

impl<H: Host> Extension<H> {
    /// Activate with the built-in catalog and thread-local randomness.
    pub fn activate(host: H, now: DateTime<Utc>) -> Self {
        Self::activate_with(host, now, Box::new(DefaultCatalog), Box::new(ThreadRandom))
    }

    /// Activate with an explicit catalog and random source.
    pub fn activate_with(
        host: H,
        now: DateTime<Utc>,
        catalog: Box<dyn MessageCatalog>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let config = MotivationConfig::from_json(&host.configuration(NAMESPACE));
        info!(
            char_threshold = config.char_threshold,
            idle_minutes = config.idle_minutes,
            focus_minutes = config.focus_minutes,
            "motivation activated"
        );
        let mut ext = Self {
            host,
            session: Session::new(config, now.timestamp_millis()),
            catalog,
            rng,
        };
        ext.refresh_status();
        ext
    }

    /// Nothing to release beyond the session itself; hands the host back.
    pub fn deactivate(self) -> H {
        debug!(saves = self.session.stats().saves, "motivation deactivated");
        self.host
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn status(&self) -> StatusSurface {
        StatusSurface::from_stats(self.session.stats())
    }

    pub fn dispatch(&mut self, event: &HostEvent) {
        match event {
            HostEvent::DocumentChanged { changes, at, .. } => {
                self.on_document_changed(*at, changes);
            }
            HostEvent::DocumentSaved {
                document,
                diagnostics: Some(diagnostics),
                at,
            } => {
                self.save_with(*at, document, diagnostics);
            }
            HostEvent::DocumentSaved { document, at, .. } => {
                self.on_document_saved(*at, document);
            }
            HostEvent::ConfigurationChanged { namespace, .. } => {
                self.on_configuration_changed(namespace);
            }
            HostEvent::ShowStats { .. } => self.show_stats(),
        }
    }

    pub fn on_document_changed(&mut self, now: DateTime<Utc>, changes: &[TextChange]) {
        let notices = self.session.handle_change(now.timestamp_millis(), changes);
        self.show(&notices);
        self.refresh_status();
    }

    /// Save handler for a live host: diagnostics are queried from the host.
    pub fn on_document_saved(&mut self, now: DateTime<Utc>, document: &Document) {
        let diagnostics = self.host.diagnostics(&document.uri);
        self.save_with(now, document, &diagnostics);
    }

    fn save_with(
        &mut self,
        now: DateTime<Utc>,
        document: &Document,
        diagnostics: &[Diagnostic],
    ) {
        let notices = self
            .session
            .handle_save(now.timestamp_millis(), document, diagnostics);
        self.show(&notices);
        self.refresh_status();
    }

    /// Reload settings if `namespace` is ours; other namespaces are ignored.
    pub fn on_configuration_changed(&mut self, namespace: &str) {
        if namespace != NAMESPACE {
            return;
        }
        let config = MotivationConfig::from_json(&self.host.configuration(NAMESPACE));
        debug!(?config, "configuration reloaded");
        self.session.set_config(config);
    }

    /// The show-stats command: a modal listing every counter.
    pub fn show_stats(&mut self) {
        let report = stats_report(self.session.stats());
        self.host.show_notification(&report, true);
    }

    pub fn refresh_status(&mut self) {
        let status = self.status();
        self.host.set_status(&status);
    }

    fn show(&mut self, notices: &[Notice]) {
        for notice in notices {
            let text = self.catalog.render(notice, self.rng.as_mut());
            if text.is_empty() {
                debug!(?notice, "no text for notice, skipped");
                continue;
            }
            debug!(?notice, "notification");
            self.host.show_notification(&text, false);
        }
    }
}
