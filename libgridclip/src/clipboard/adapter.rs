use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::config::{ClipboardConfig, PasteMode};

use super::codec;
use super::events::{CopyDispatcher, CopyEvent, PasteEvent, PasteTargetKind};
use super::mapper;
use super::model::{GridModel, StrategyParams};
use super::strategy::{
    self, Formatter, FormatterChoice, FormatterFn, FormatterKind, Selector, SelectorChoice,
    SelectorFn, SelectorKind, known_formatter_names, known_selector_names,
};

/// One-shot copy state.
///
/// The adapter is `Disarmed` except during the synchronous window between
/// an explicit [`Clipboard::copy`] invocation and the copy event that
/// invocation triggers. Arming and triggering are co-located in `copy` as a
/// single atomic sequence; a copy event arriving while `Disarmed` did not
/// originate here and passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmState {
    Disarmed,
    Armed,
}

/// Parameters of an explicit copy invocation. Unset strategies fall back
/// to the configured defaults.
pub struct CopyRequest<G> {
    pub selector: Option<SelectorChoice<G>>,
    pub selector_params: Option<StrategyParams>,
    pub formatter: Option<FormatterChoice<G>>,
    pub formatter_params: Option<StrategyParams>,
    /// When set and a live native text selection exists, export that
    /// selection verbatim instead of consulting the selector.
    pub internal_selection: bool,
}

impl<G> Default for CopyRequest<G> {
    fn default() -> Self {
        Self {
            selector: None,
            selector_params: None,
            formatter: None,
            formatter_params: None,
            internal_selection: false,
        }
    }
}

/// What a paste handler did with an event. Rejections are expected
/// conditions, reported for the host's benefit but never logged or raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The origin guard rejected the event; native behavior proceeds.
    RejectedOrigin,
    /// No provider had clipboard text; native behavior proceeds.
    NoClipboardText,
    /// The text held no usable tabular data; native behavior proceeds.
    NotTabular,
    /// Decoded rows were committed to the grid.
    Applied { mode: PasteMode, rows: usize },
}

/// Clipboard adapter for a data-grid widget.
///
/// Owns the armed/disarmed state machine, the active selector/formatter
/// pair, and the registries of user-supplied strategies. All operations are
/// synchronous; the adapter is single-threaded by construction and mutates
/// the grid only through [`GridModel`]'s write operations.
pub struct Clipboard<G> {
    grid: G,
    config: ClipboardConfig,
    wired: bool,
    state: ArmState,
    selector: Option<Selector<G>>,
    selector_params: StrategyParams,
    formatter: Option<Formatter<G>>,
    formatter_params: StrategyParams,
    custom_selectors: HashMap<String, SelectorFn<G>>,
    custom_formatters: HashMap<String, FormatterFn<G>>,
}

impl<G> fmt::Debug for Clipboard<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard")
            .field("config", &self.config)
            .field("wired", &self.wired)
            .field("state", &self.state)
            .field("selector", &self.selector)
            .field("formatter", &self.formatter)
            .field("custom_selectors", &self.custom_selectors.len())
            .field("custom_formatters", &self.custom_formatters.len())
            .finish()
    }
}

impl<G: GridModel> Clipboard<G> {
    #[must_use]
    pub fn new(grid: G, config: ClipboardConfig) -> Self {
        Self {
            grid,
            config,
            wired: false,
            state: ArmState::Disarmed,
            selector: None,
            selector_params: StrategyParams::default(),
            formatter: None,
            formatter_params: StrategyParams::default(),
            custom_selectors: HashMap::new(),
            custom_formatters: HashMap::new(),
        }
    }

    /// Subscribes to the grid root's native copy/paste events. Until this
    /// runs, [`Clipboard::handle_copy`] and [`Clipboard::handle_paste`]
    /// ignore everything and [`Clipboard::copy`] is inert.
    pub fn initialize(&mut self) {
        self.wired = true;
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn config(&self) -> &ClipboardConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ArmState {
        self.state
    }

    pub fn active_selector(&self) -> Option<&Selector<G>> {
        self.selector.as_ref()
    }

    pub fn active_formatter(&self) -> Option<&Formatter<G>> {
        self.formatter.as_ref()
    }

    /// Registers a named selector. Built-in names cannot be shadowed;
    /// resolution always prefers them.
    pub fn register_selector(&mut self, name: impl Into<String>, selector: SelectorFn<G>) {
        self.custom_selectors.insert(name.into(), selector);
    }

    /// Registers a named formatter. Built-in names cannot be shadowed;
    /// resolution always prefers them.
    pub fn register_formatter(&mut self, name: impl Into<String>, formatter: FormatterFn<G>) {
        self.custom_formatters.insert(name.into(), formatter);
    }

    /// Resolves and activates a selector. `None` falls back to the
    /// configured default name. An unknown name logs a diagnostic and
    /// leaves the previously active selector in place.
    pub fn set_selector(&mut self, choice: Option<SelectorChoice<G>>) {
        let resolved = match choice {
            Some(SelectorChoice::Named(name)) => self.resolve_selector_name(&name),
            Some(SelectorChoice::Callable(f)) => Some(Selector::Custom(f)),
            None => self.resolve_selector_name(&self.config.selector),
        };
        if let Some(selector) = resolved {
            self.selector = Some(selector);
        }
    }

    /// Resolves and activates a formatter; same fallback rules as
    /// [`Clipboard::set_selector`].
    pub fn set_formatter(&mut self, choice: Option<FormatterChoice<G>>) {
        let resolved = match choice {
            Some(FormatterChoice::Named(name)) => self.resolve_formatter_name(&name),
            Some(FormatterChoice::Callable(f)) => Some(Formatter::Custom(f)),
            None => self.resolve_formatter_name(&self.config.formatter),
        };
        if let Some(formatter) = resolved {
            self.formatter = Some(formatter);
        }
    }

    fn resolve_selector_name(&self, name: &str) -> Option<Selector<G>> {
        if let Some(kind) = SelectorKind::from_name(name) {
            return Some(Selector::Builtin(kind));
        }
        if let Some(f) = self.custom_selectors.get(name) {
            return Some(Selector::Custom(f.clone()));
        }
        warn!(
            "No selector named {name:?}; built-in selectors: {}",
            known_selector_names()
        );
        None
    }

    fn resolve_formatter_name(&self, name: &str) -> Option<Formatter<G>> {
        if let Some(kind) = FormatterKind::from_name(name) {
            return Some(Formatter::Builtin(kind));
        }
        if let Some(f) = self.custom_formatters.get(name) {
            return Some(Formatter::Custom(f.clone()));
        }
        warn!(
            "No formatter named {name:?}; built-in formatters: {}",
            known_formatter_names()
        );
        None
    }

    /// Explicitly initiated copy.
    ///
    /// Arms the adapter, captures the live selection override when
    /// requested, resolves the strategy pair, programmatically selects the
    /// grid's region, and triggers the platform copy action. The copy event
    /// that action fires synchronously is routed through
    /// [`Clipboard::handle_copy`] before this method returns, so arming and
    /// handling form one atomic sequence. The completed event, carrying the
    /// produced payload, is returned to the host.
    pub fn copy(
        &mut self,
        request: CopyRequest<G>,
        dispatcher: &mut dyn CopyDispatcher,
    ) -> CopyEvent {
        if !self.wired {
            return CopyEvent::new();
        }

        self.state = ArmState::Armed;

        let CopyRequest {
            mut selector,
            mut selector_params,
            mut formatter,
            formatter_params,
            internal_selection,
        } = request;

        if internal_selection
            && let Some(text) = dispatcher.selection_text().filter(|text| !text.is_empty())
        {
            selector = Some(SelectorChoice::named(SelectorKind::UserSelection.name()));
            formatter = Some(FormatterChoice::named(FormatterKind::Raw.name()));
            selector_params = Some(StrategyParams::selection(text));
        }

        self.set_selector(selector);
        self.selector_params = selector_params.unwrap_or_default();
        self.set_formatter(formatter);
        self.formatter_params = formatter_params.unwrap_or_default();

        dispatcher.select_grid_region();

        // The copy action fires its event before returning; the event must
        // observe the armed state set above.
        let mut event = dispatcher.exec_copy();
        self.handle_copy(&mut event);
        dispatcher.clear_selection();

        event
    }

    /// Native copy-event callback.
    ///
    /// Armed: claim the event, write the generated content into its
    /// payload, disarm. Disarmed: leave the event untouched so copies not
    /// originating here keep their native behavior.
    pub fn handle_copy(&mut self, event: &mut CopyEvent) {
        if !self.wired || self.state != ArmState::Armed {
            return;
        }

        event.prevent_default();
        event.payload = self.generate_content();
        self.state = ArmState::Disarmed;
    }

    /// Native paste-event callback.
    ///
    /// The origin guard rejects events targeting anything but a
    /// non-interactive container, and any event arriving while a cell edit
    /// session is in progress; editing takes precedence over grid-level
    /// paste. Surviving events have their text extracted through the
    /// provider chain and decoded; usable rows claim the event and commit
    /// via the configured paste mode, anything else defers to native
    /// behavior.
    pub fn handle_paste(&mut self, event: &mut PasteEvent) -> PasteOutcome {
        if !self.wired || event.target != PasteTargetKind::Container || self.grid.is_editing() {
            return PasteOutcome::RejectedOrigin;
        }

        let Some(text) = event.clipboard_text() else {
            return PasteOutcome::NoClipboardText;
        };
        let Some(decoded) = codec::decode(text) else {
            return PasteOutcome::NotTabular;
        };

        let columns = self.grid.columns();
        let records = mapper::records_from_grid(&decoded, &columns);

        event.prevent_default();

        let rows = records.len();
        match self.config.paste_mode {
            PasteMode::Replace => self.grid.set_all_data(records),
            PasteMode::Update => self.grid.update_or_insert(records),
            PasteMode::Insert => self.grid.append_data(records),
        }

        PasteOutcome::Applied {
            mode: self.config.paste_mode,
            rows,
        }
    }

    /// Runs the active selector/formatter pair. With either unset (a prior
    /// unknown-name lookup, never repaired), the copy yields no content.
    fn generate_content(&self) -> Option<strategy::ClipboardPayload> {
        let (Some(selector), Some(formatter)) = (&self.selector, &self.formatter) else {
            debug!("Copy with no active selector/formatter; clipboard left empty");
            return None;
        };

        let data = strategy::run_selector(selector, &self.grid, &self.selector_params);
        Some(strategy::run_formatter(
            formatter,
            &self.grid,
            data,
            &self.formatter_params,
        ))
    }
}
