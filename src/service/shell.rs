use crate::{
    adapter::AccountStore,
    domain::{
        AccountCommand, AccountState, CloseAccount, OpenAccount, PayLoan, RequestLoan, ShellError,
    },
    port::{ActionSource, StateChange, StateObserver},
    service::AccountView,
};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// Activate the n-th trigger (1-based)
    Trigger(usize),
    /// Activate the trigger for this action
    Command(AccountCommand),
    Help,
    Refresh,
    Quit,
    Unrecognised(String),
}

impl ShellInput {
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        if input.is_empty() {
            return Self::Refresh;
        }

        if let Ok(number) = input.parse::<usize>() {
            return Self::Trigger(number);
        }

        match input.to_ascii_lowercase().as_str() {
            "help" | "?" => return Self::Help,
            "quit" | "exit" | "q" => return Self::Quit,
            "open" => return Self::Command(AccountCommand::OpenAccount(OpenAccount)),
            "loan" => return Self::Command(AccountCommand::RequestLoan(RequestLoan)),
            "pay" => return Self::Command(AccountCommand::PayLoan(PayLoan)),
            "close" => return Self::Command(AccountCommand::CloseAccount(CloseAccount)),
            _ => {}
        }

        // Full action names follow the same case-insensitive rule as the short ones
        AccountCommand::ALL
            .iter()
            .find(|command| command.type_name().eq_ignore_ascii_case(input))
            .map(|command| Self::Command(*command))
            .unwrap_or_else(|| Self::Unrecognised(input.to_string()))
    }
}

/// Marks the screen stale whenever the account changes
struct RenderFlag(Arc<AtomicBool>);

impl StateObserver for RenderFlag {
    fn on_change(&self, _change: &StateChange) {
        self.0.store(true, Ordering::Release);
    }
}

/// Interactive presentation of the account.
///
/// Renders the current state, turns each input into a trigger activation and renders
/// again whenever the store reports a change.
pub struct Shell<S, W> {
    store: AccountStore,
    source: S,
    out: W,
    stale: Arc<AtomicBool>,
}

impl<S: ActionSource, W: Write> Shell<S, W> {
    pub fn new(store: AccountStore, source: S, out: W) -> Self {
        let stale = Arc::new(AtomicBool::new(false));
        let store = store.with_observer(Arc::new(RenderFlag(stale.clone())));

        Self {
            store,
            source,
            out,
            stale,
        }
    }

    /// Run until the input ends or the user quits. Returns the final account state.
    pub async fn run(mut self) -> Result<AccountState, ShellError> {
        tracing::info!("Shell started");
        self.render()?;

        while let Some(line) = self.source.next_line().await? {
            match ShellInput::parse(&line) {
                ShellInput::Quit => break,
                ShellInput::Help => self.help()?,
                ShellInput::Refresh => self.render()?,
                ShellInput::Trigger(number) => {
                    let view = AccountView::from(self.store.state());
                    match view.trigger(number) {
                        Some(trigger) => self.activate(trigger.command)?,
                        None => writeln!(self.out, "No trigger numbered {}", number)?,
                    }
                }
                ShellInput::Command(command) => self.activate(command)?,
                ShellInput::Unrecognised(input) => writeln!(
                    self.out,
                    "Unrecognised input '{}', type 'help' to list the actions",
                    input
                )?,
            }
        }

        tracing::info!("Shell finished");
        Ok(*self.store.state())
    }

    pub fn state(&self) -> &AccountState {
        self.store.state()
    }

    /// Disabled triggers do nothing, like a disabled button
    fn activate(&mut self, command: AccountCommand) -> Result<(), ShellError> {
        if !AccountView::from(self.store.state()).is_enabled(&command) {
            return Ok(());
        }

        self.store.dispatch_command(&command);

        if self.stale.swap(false, Ordering::AcqRel) {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> Result<(), ShellError> {
        let view = AccountView::from(self.store.state());
        write!(self.out, "{}", view)?;
        self.out.flush()?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), ShellError> {
        writeln!(self.out, "Enter a trigger number or an action name:")?;
        for (index, command) in AccountCommand::ALL.iter().enumerate() {
            writeln!(self.out, "  {} / {}", index + 1, command)?;
        }
        writeln!(self.out, "Short names: open, loan, pay, close. 'quit' leaves.")?;
        Ok(())
    }
}
