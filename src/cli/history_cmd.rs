//! History command handler

use crate::application::ports::{PreferenceError, PreferenceStore};
use crate::application::BillBook;

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Handle history subcommand
pub async fn handle_history_command<K: PreferenceStore>(
    action: HistoryAction,
    book: &BillBook<K>,
    presenter: &Presenter,
) -> Result<(), PreferenceError> {
    match action {
        HistoryAction::List => {
            let bills = book.all_bills().await?;
            if bills.is_empty() {
                presenter.info("No saved bills");
            }
            for bill in &bills {
                presenter.bill(bill);
            }
        }
        HistoryAction::Clear => {
            book.clear_bills().await?;
            presenter.success("Bill history cleared");
        }
    }
    Ok(())
}
