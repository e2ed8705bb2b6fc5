use crate::domain::{
    AccountCommand, CloseAccount, Deposit, OpenAccount, PayLoan, RequestLoan, ShellError,
    Withdraw,
};
use rand::Rng;
use std::fs::File;

/// Generate a random action script. Used to exercise the replay path.
///
/// The script always starts by opening the account; the remaining actions lean
/// towards deposits and withdrawals so the balance moves around before loans and
/// closing attempts come in.
pub fn generator(output: &str, count: usize) -> Result<(), ShellError> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["type"])?;

    let mut rng = rand::rng();

    for n in 0..count {
        let command = if n == 0 {
            AccountCommand::OpenAccount(OpenAccount)
        } else {
            match rng.random_range(0..10) {
                0..=3 => AccountCommand::Deposit(Deposit),
                4..=6 => AccountCommand::Withdraw(Withdraw),
                7 => AccountCommand::RequestLoan(RequestLoan),
                8 => AccountCommand::PayLoan(PayLoan),
                _ => AccountCommand::CloseAccount(CloseAccount),
            }
        };

        wtr.write_record([command.type_name()])?;
    }

    wtr.flush()?;
    println!("✓ Generated {} actions to {}", count, output);
    Ok(())
}
