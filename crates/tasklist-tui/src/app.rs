use crate::components::{Banner, BANNER_TTL};
use crate::events::{Event, EventHandler};
use crate::input::TextInput;
use crate::keybindings::{action_for, Action};
use crate::selection::SelectionState;
use crate::ui;
use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tasklist_core::{TaskError, TaskResult};
use tasklist_domain::commands::{AddTask, Command, DeleteTask, SetTaskCompletion};
use tasklist_domain::{project, TaskRow, ViewAction, ViewState};
use tasklist_persistence::{seed_if_empty, SeedOutcome, SeedSource, TaskStore};
use tokio::sync::oneshot;

const EMPTY_DESCRIPTION_WARNING: &str = "Please write a task description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    DueDate,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Description => Self::DueDate,
            Self::DueDate => Self::List,
            Self::List => Self::Description,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Description => Self::List,
            Self::DueDate => Self::Description,
            Self::List => Self::DueDate,
        }
    }
}

/// The view controller.
///
/// Every action mutates the store and then calls [`App::refresh`], which
/// reloads the whole collection and rebuilds `rows` from scratch.
pub struct App {
    store: Arc<dyn TaskStore>,
    pub view: ViewState,
    pub rows: Vec<TaskRow>,
    pub selection: SelectionState,
    pub description: TextInput,
    pub due_date: TextInput,
    pub focus: Focus,
    pub warning: Option<String>,
    pub banner: Option<Banner>,
    pub show_help: bool,
    pub should_quit: bool,
    seed_rx: Option<oneshot::Receiver<SeedOutcome>>,
}

impl App {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            view: ViewState::default(),
            rows: Vec::new(),
            selection: SelectionState::new(),
            description: TextInput::new(),
            due_date: TextInput::new(),
            focus: Focus::Description,
            warning: None,
            banner: None,
            show_help: false,
            should_quit: false,
            seed_rx: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.selection.get().and_then(|idx| self.rows.get(idx))
    }

    /// Load, filter, sort and rebuild the displayed rows.
    pub async fn refresh(&mut self) {
        let tasks = self.store.load_all().await;
        self.rows = project(&tasks, self.view);
        self.selection.clamp(self.rows.len());
        tracing::debug!(
            "Rendered {} of {} tasks (filter: {}, sort: {})",
            self.rows.len(),
            tasks.len(),
            self.view.filter,
            self.view.sort
        );
    }

    /// Starts the one-time seed in the background. The UI stays usable and
    /// re-renders once [`App::poll_seed`] sees the result.
    pub fn start_seed(&mut self, source: Arc<dyn SeedSource>) {
        let (tx, rx) = oneshot::channel();
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let outcome = seed_if_empty(store.as_ref(), source.as_ref()).await;
            let _ = tx.send(outcome);
        });
        self.seed_rx = Some(rx);
    }

    pub fn seed_pending(&self) -> bool {
        self.seed_rx.is_some()
    }

    pub async fn poll_seed(&mut self) {
        let Some(rx) = self.seed_rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.seed_rx = None;
                if let SeedOutcome::Seeded(count) = outcome {
                    tracing::info!("Seed finished with {} tasks", count);
                    if count > 0 {
                        self.banner =
                            Some(Banner::success(format!("Loaded {} starter tasks", count)));
                    }
                    self.refresh().await;
                }
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::warn!("Seed task ended without reporting");
                self.seed_rx = None;
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key, self.focus, self.warning.is_some()) {
            self.dispatch(action).await;
        }
    }

    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Add => self.add_task().await,
            Action::ToggleSelected => self.toggle_selected().await,
            Action::DeleteSelected => self.delete_selected().await,
            Action::SelectFilter(filter) => self.update_view(ViewAction::SelectFilter(filter)).await,
            Action::CycleFilter => {
                let next = self.view.filter.next();
                self.update_view(ViewAction::SelectFilter(next)).await;
            }
            Action::ToggleSort => self.update_view(ViewAction::ToggleSort).await,
            Action::SelectNext => self.selection.next(self.rows.len()),
            Action::SelectPrev => self.selection.prev(self.rows.len()),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::FocusList => self.focus = Focus::List,
            Action::FocusDescription => self.focus = Focus::Description,
            Action::Edit(code) => {
                let field = match self.focus {
                    Focus::Description => &mut self.description,
                    Focus::DueDate => &mut self.due_date,
                    Focus::List => return,
                };
                field.handle_key(code);
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::DismissWarning => self.warning = None,
            Action::Quit => self.quit(),
        }
    }

    async fn add_task(&mut self) {
        if self.description.is_blank() {
            self.warn(EMPTY_DESCRIPTION_WARNING);
            self.focus = Focus::Description;
            return;
        }

        let command = AddTask::new(self.description.value(), self.due_date.value());
        if self.execute(&command).await {
            self.description.clear();
            self.due_date.clear();
        }
    }

    async fn toggle_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let command = SetTaskCompletion {
            id: row.id.clone(),
            completed: !row.completed,
        };
        self.execute(&command).await;
    }

    async fn delete_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let command = DeleteTask { id: row.id.clone() };
        self.execute(&command).await;
    }

    /// View changes are ephemeral: re-render only, nothing is saved.
    async fn update_view(&mut self, action: ViewAction) {
        self.view = self.view.apply(action);
        self.refresh().await;
    }

    /// Applies a command to the store and re-renders. Returns true on success.
    async fn execute(&mut self, command: &dyn Command) -> bool {
        let result = self.store.apply(command).await;
        match result {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(TaskError::Validation(message)) => {
                self.warn(&message);
                false
            }
            Err(e) => {
                tracing::error!("{} failed: {}", command.description(), e);
                self.banner = Some(Banner::error(format!("Could not save: {}", e)));
                self.refresh().await;
                false
            }
        }
    }

    fn warn(&mut self, message: &str) {
        tracing::debug!("Warning shown: {}", message);
        self.warning = Some(message.to_string());
    }

    fn on_tick(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(BANNER_TTL))
        {
            self.banner = None;
        }
    }

    pub async fn run(&mut self) -> TaskResult<()> {
        self.refresh().await;

        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TaskResult<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key).await,
                Some(Event::Resize) => {}
                Some(Event::Tick) => {
                    self.on_tick();
                    self.poll_seed().await;
                }
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
