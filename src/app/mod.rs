// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the locale engine and
//! its page collaborators.
//!
//! The `Console` struct wires together the domains (locale store,
//! persistence, toasts, chart registry) and translates page events into
//! resolution passes. This file intentionally keeps policy decisions
//! (initial-locale precedence, when the cookie is written, what happens on
//! a failed fetch) close to the orchestration so user-facing behavior is
//! easy to audit.
//!
//! Everything here is synchronous and single-threaded: a bind pass always
//! runs after the state mutation that triggered it, in the same call, so
//! no pass ever observes a stale locale or document.

use crate::config::ConsoleConfig;
use crate::forms::{self, ConfirmPrompt, FormSubmission, FormTransport, Navigation, SubmitOutcome};
use crate::i18n::binder::{apply_outcomes, bind_tags, PageSurface, TagBinding};
use crate::i18n::persistence::{initial_locale, CookieJar, LocalePersistence, NavigatorLocale};
use crate::i18n::{overlay, LocaleContext, LocaleNode};
use crate::transport::LocaleTransport;
use crate::ui::notifications::{Manager, Toast};
use serde_json::{Map, Value};

/// Root console state bridging the locale engine, persistence, and the
/// page surface.
pub struct Console<J: CookieJar> {
    config: ConsoleConfig,
    context: LocaleContext,
    persistence: LocalePersistence<J>,
    toasts: Manager,
    /// Navigation to run once the active toast completes.
    pending_navigation: Option<Navigation>,
    /// Registered chart configurations, keyed by chart element id.
    charts: Value,
    /// Page-level localization hook, invoked after every bind pass.
    page_hook: Option<Box<dyn Fn(&str)>>,
}

impl<J: CookieJar> Console<J> {
    pub fn new(config: ConsoleConfig, jar: J) -> Self {
        let persistence =
            LocalePersistence::new(jar, config.cookie_path(), config.cookie_expiry_days);
        Self {
            config,
            context: LocaleContext::default(),
            persistence,
            toasts: Manager::new(),
            pending_navigation: None,
            charts: Value::Object(Map::new()),
            page_hook: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    #[must_use]
    pub fn context(&self) -> &LocaleContext {
        &self.context
    }

    #[must_use]
    pub fn toasts(&self) -> &Manager {
        &self.toasts
    }

    #[must_use]
    pub fn persistence(&self) -> &LocalePersistence<J> {
        &self.persistence
    }

    /// Fetches and converts the locale document, then picks the initial
    /// locale: persisted cookie, else navigator hint, else unset.
    ///
    /// Failures degrade: the store stays empty and every subsequent bind
    /// pass resolves to missing until a later load succeeds.
    pub fn load(&mut self, transport: &dyn LocaleTransport, navigator: &dyn NavigatorLocale) {
        let xml = match transport.fetch_document() {
            Ok(xml) => xml,
            Err(err) => {
                log::warn!("locale document fetch failed: {}", err);
                return;
            }
        };
        let document = match LocaleNode::from_xml(&xml) {
            Ok(document) => document,
            Err(err) => {
                log::warn!("locale document conversion failed: {}", err);
                return;
            }
        };

        self.context = LocaleContext::from_document(&document);
        let persisted = self.persistence.locale();
        if let Some(code) = initial_locale(persisted.as_deref(), navigator, self.context.menu()) {
            self.context.set_current(code);
        }
    }

    /// Handles a click on a locale-switcher entry. The caller follows up
    /// with [`Console::rebind`], as the page does.
    pub fn select_locale(&mut self, code: &str) {
        self.context.set_current(code);
    }

    /// Registers (or replaces) one chart's configuration under its
    /// element id. The overlay localizes it on every bind pass.
    pub fn register_chart(&mut self, id: &str, options: Value) {
        if let Value::Object(charts) = &mut self.charts {
            charts.insert(id.to_string(), options);
        }
    }

    /// The current (possibly localized) configuration of one chart.
    #[must_use]
    pub fn chart(&self, id: &str) -> Option<&Value> {
        self.charts.get(id)
    }

    /// Installs the page-level localization hook, invoked with the
    /// resolved locale after every bind pass.
    pub fn set_page_hook(&mut self, hook: impl Fn(&str) + 'static) {
        self.page_hook = Some(Box::new(hook));
    }

    /// Runs a full bind pass against the page surface.
    ///
    /// Order matches the page: switcher label and cookie first, then the
    /// tagged elements, then widget refreshes, chart overlays, and the
    /// page hook.
    pub fn rebind(&mut self, bindings: &[TagBinding], surface: &mut dyn PageSurface) {
        let effective = self.context.effective_locale().map(str::to_string);
        if let Some(code) = &effective {
            if let Some(label) = self.context.menu().get(code) {
                surface.set_switcher_label(label);
            }
            self.persistence.set_locale(code);
            surface.refresh_table_locale(code);
        }

        let outcomes = bind_tags(bindings, &self.context);
        apply_outcomes(&outcomes, surface);
        surface.refresh_select_widgets();

        self.localize_charts(surface);

        if let (Some(hook), Some(code)) = (&self.page_hook, &effective) {
            hook(code);
        }
    }

    /// Applies the locale overlay to every registered chart and asks the
    /// surface to re-render them.
    fn localize_charts(&mut self, surface: &mut dyn PageSurface) {
        let registered = match &self.charts {
            Value::Object(charts) => !charts.is_empty(),
            _ => false,
        };
        if !registered {
            return;
        }
        if let Some(subtree) = self.context.content().get("charts") {
            let patch = overlay::compute(subtree, Some(&self.charts), self.context.locales());
            overlay::apply(&mut self.charts, &patch);
        }
        if let Value::Object(charts) = &self.charts {
            for (id, options) in charts {
                surface.render_chart(id, options);
            }
        }
    }

    /// Shows a toast, replacing the current one. The follow-up navigation
    /// runs when the toast completes; a replaced toast's follow-up never
    /// fires.
    pub fn show_toast(&mut self, toast: Toast, follow_up: Option<Navigation>) {
        self.toasts.show(toast);
        self.pending_navigation = follow_up;
    }

    /// Drives a form submission and surfaces its outcome as a toast.
    pub fn submit_form(
        &mut self,
        submission: &FormSubmission,
        transport: &dyn FormTransport,
        prompt: &dyn ConfirmPrompt,
    ) {
        match forms::submit(submission, &self.context, transport, prompt) {
            SubmitOutcome::Completed { toast, follow_up } => self.show_toast(toast, follow_up),
            SubmitOutcome::Cancelled | SubmitOutcome::NoResponse => {}
        }
    }

    /// Periodic tick: expires the active toast and hands back the
    /// navigation the caller should now perform, if any.
    pub fn tick(&mut self) -> Option<Navigation> {
        self.toasts.tick()?;
        self.pending_navigation.take()
    }
}
