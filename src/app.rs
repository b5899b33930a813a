//! Interactive session
//!
//! `TipsApp` owns the store, the session sampler and the I/O handles, and runs
//! the read-eval-prompt loop: render the menu, read a choice, resolve it to a
//! `MenuAction` and dispatch.
//!
//! Everything it prints goes through `OutputWriter` and everything it reads
//! comes from `UserInput`, so a whole session can be scripted in tests:
//!
//! ```
//! use tipster::app::TipsApp;
//! use tipster::session::FixedIndex;
//! use tipster::store::TipStore;
//! use tipster::ui::{MockInput, MockOutput};
//!
//! let store = TipStore::new("does-not-exist.json");
//! let mut app = TipsApp::new(store, MockInput::new(["5", "q"]), MockOutput::new(), FixedIndex(0));
//! app.start();
//! app.run().unwrap();
//! assert!(app.output().contains("Total tips"));
//! ```

use crate::menu::{self, MENU_OPTIONS, MenuAction};
use crate::output;
use crate::query;
use crate::session::{RandomSource, SessionSampler};
use crate::store::{NewTip, StoreError, TipField, TipStore};
use crate::ui::{InputError, LoadingHook, NoAnimation, OutputWriter, UserInput};

/// Whether the loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The interactive controller
pub struct TipsApp<I, O, R> {
    store: TipStore,
    sampler: SessionSampler<R>,
    input: I,
    output: O,
    loading: Box<dyn LoadingHook>,
    quiet: bool,
}

impl<I: UserInput, O: OutputWriter, R: RandomSource> TipsApp<I, O, R> {
    /// Create a controller with no loading animation
    pub fn new(store: TipStore, input: I, output: O, rng: R) -> Self {
        Self {
            store,
            sampler: SessionSampler::new(rng),
            input,
            output,
            loading: Box::new(NoAnimation),
            quiet: false,
        }
    }

    /// Use `hook` before every displayed tip
    #[must_use]
    pub fn with_loading(mut self, hook: Box<dyn LoadingHook>) -> Self {
        self.loading = hook;
        self
    }

    /// Suppress the banner and hints
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &TipStore {
        &self.store
    }

    #[must_use]
    pub const fn sampler(&self) -> &SessionSampler<R> {
        &self.sampler
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// Load the store and greet the user
    ///
    /// A store that fails to load leaves the session running with no tips.
    pub fn start(&mut self) {
        let load_result = self.store.load();

        self.output.clear();
        if !self.quiet {
            self.output.write(&output::banner());
        }

        if let Err(err) = load_result {
            self.output.warning(&format!("{err}. Starting with an empty collection."));
            if matches!(err, StoreError::Missing(_)) && !self.quiet {
                self.output.info("Run `tipster init` to install the starter tips.");
            }
        }

        if self.store.is_empty() {
            if !self.quiet {
                self.output.info("No tips yet. Choose \"Create a new tip\" to add the first one.");
            }
        } else {
            self.show_next_tip();
        }
    }

    /// Run the prompt loop until the user quits or input ends
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading input fails. Interrupts and closed
    /// input end the session normally.
    pub fn run(&mut self) -> Result<(), InputError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_graceful_exit() => {
                    tracing::info!("Input ended: {err}");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        self.shutdown();
        Ok(())
    }

    /// Show the menu, read one choice and act on it
    ///
    /// # Errors
    ///
    /// Returns `InputError` if reading input fails.
    pub fn step(&mut self) -> Result<Flow, InputError> {
        self.output.write(&output::menu(&MENU_OPTIONS));
        let choice = self.input.prompt_text("Your choice")?;
        if choice.is_empty() {
            return Ok(Flow::Continue);
        }

        match menu::resolve(&choice) {
            Ok(action) => {
                tracing::debug!(%action, "Menu choice");
                self.handle(action)
            }
            Err(err) => {
                self.output.warning(&err.to_string());
                Ok(Flow::Continue)
            }
        }
    }

    /// Dispatch a resolved action
    ///
    /// # Errors
    ///
    /// Returns `InputError` if an action's own prompts fail.
    pub fn handle(&mut self, action: MenuAction) -> Result<Flow, InputError> {
        match action {
            MenuAction::ShowAnother => {
                self.output.clear();
                self.show_next_tip();
            }
            MenuAction::Create => self.create_tip()?,
            MenuAction::ListCategories => self.list_categories(),
            MenuAction::Search => self.search()?,
            MenuAction::ShowStats => self.show_stats(),
            MenuAction::RandomCategory => self.random_category(),
            MenuAction::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Say goodbye
    pub fn shutdown(&self) {
        tracing::info!(shown = self.sampler.shown_count(), "Session ended");
        self.output.write(&goodbye());
    }

    fn show_next_tip(&mut self) {
        let Some(tip) = self.sampler.pick(self.store.tips()) else {
            self.output.warning("No tips available. Create one first!");
            return;
        };
        self.loading.before_tip();
        self.output.write(&output::tip_card(tip));
    }

    fn create_tip(&mut self) -> Result<(), InputError> {
        self.output.write("\n✨ Create a new tip");

        let Some(title) = self.ask(TipField::Title)? else {
            return Ok(());
        };
        let Some(content) = self.ask(TipField::Content)? else {
            return Ok(());
        };
        let Some(category) = self.ask(TipField::Category)? else {
            return Ok(());
        };

        match self.store.create(NewTip::new(title, content, category)) {
            Ok(tip) => {
                self.sampler.reset();
                self.output.success(&format!("Tip #{} added successfully!", tip.id));
                self.output.write(&output::tip_card(&tip));
            }
            Err(StoreError::Validation(field)) => {
                self.output.warning(&format!("{field} cannot be empty. Cancelled."));
            }
            Err(err @ StoreError::IdsExhausted(_)) => {
                self.output.error(&err.to_string());
            }
            Err(err) => {
                self.output.error("Failed to save the new tip.");
                self.output.info(&err.to_string());
            }
        }
        Ok(())
    }

    /// Prompt for one field; `None` (after a message) when left blank
    fn ask(&self, field: TipField) -> Result<Option<String>, InputError> {
        let value = self.input.prompt_text(field.label())?;
        if value.is_empty() {
            self.output.warning(&format!("{field} cannot be empty. Cancelled."));
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn list_categories(&self) {
        let categories = query::categories(self.store.tips());
        if categories.is_empty() {
            self.output.warning("No categories yet.");
            return;
        }
        self.output.write(&output::category_list(&categories));
    }

    fn search(&mut self) -> Result<(), InputError> {
        let keyword = self.input.prompt_text("Search keyword")?;
        let Some(results) = query::search(self.store.tips(), &keyword) else {
            self.output.info("Search cancelled.");
            return Ok(());
        };

        if results.is_empty() {
            self.output.warning(&format!("No tips found matching \"{keyword}\"."));
        } else {
            self.output.write(&output::search_results(&keyword, &results));
        }
        Ok(())
    }

    fn show_stats(&self) {
        let stats = query::statistics(self.store.tips(), self.sampler.shown_count());
        self.output.write(&output::statistics(&stats));
    }

    fn random_category(&mut self) {
        let Some((category, tip)) = query::random_category(self.store.tips(), self.sampler.rng_mut())
        else {
            self.output.warning("No categories yet.");
            return;
        };
        self.output.info(&format!(
            "{} Random pick from {category}",
            output::category_icon(category)
        ));
        self.loading.before_tip();
        self.output.write(&output::tip_card(tip));
    }
}

/// Farewell line printed on quit, end of input and termination signals
#[must_use]
pub fn goodbye() -> String {
    "\n👋 Thanks for using tipster. Happy coding!".to_string()
}
