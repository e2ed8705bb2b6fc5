use crate::adapter::AccountStore;
use crate::domain::{AccountState, Action, ShellError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Feeds a CSV script of actions through the store.
///
/// The script needs a `type` column; other columns are ignored. Rows with an unknown
/// type are no-ops, exactly as they would be for the reducer.
pub struct Replay {
    store: AccountStore,
    file_path: PathBuf,
}

impl Replay {
    pub fn new(store: AccountStore, file_path: impl AsRef<Path>) -> Self {
        Self {
            store,
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn process(mut self) -> Result<AccountState, ShellError> {
        let file_handle = File::open(&self.file_path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let action: Action = result?;
            self.store.dispatch(&action);
        }

        tracing::info!(
            "Replayed {} actions from {}",
            line_num,
            self.file_path.display()
        );

        Ok(*self.store.state())
    }

    /// Write the account as a single CSV row with a header
    pub fn output_csv<W: Write>(state: &AccountState, writer: W) -> Result<(), ShellError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.serialize(state)?;
        wtr.flush()?;
        Ok(())
    }
}
