use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use weather_core::{SearchOutcome, WeatherSession};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SetCity,
    SetCountry,
    Search,
    ClearInputs,
    History,
    ClearHistory,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Search,
        Action::SetCity,
        Action::SetCountry,
        Action::ClearInputs,
        Action::History,
        Action::ClearHistory,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::SetCity => "Set city",
            Action::SetCountry => "Set country",
            Action::Search => "Search",
            Action::ClearInputs => "Clear inputs",
            Action::History => "History",
            Action::ClearHistory => "Clear history",
            Action::Quit => "Quit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryAction {
    Search,
    Delete,
}

impl fmt::Display for EntryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryAction::Search => "Search",
            EntryAction::Delete => "Delete",
        })
    }
}

/// A history entry as offered in the picker.
struct EntryChoice {
    index: usize,
    line: String,
}

impl fmt::Display for EntryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index + 1, self.line)
    }
}

/// Interactive loop over one `WeatherSession`. State lives until the loop ends.
pub struct Repl {
    session: WeatherSession,
}

impl Repl {
    pub fn new(session: WeatherSession) -> Self {
        Self { session }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("Today's Weather");

        loop {
            println!("{}", status_line(&self.session));

            let action = match Select::new("Action:", Action::ALL.to_vec()).prompt() {
                Ok(action) => action,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            };

            match action {
                Action::SetCity => {
                    if let Some(city) = ask("City:", self.session.city())? {
                        self.session.set_city(city);
                    }
                }
                Action::SetCountry => {
                    if let Some(country) = ask("Country:", self.session.country())? {
                        self.session.set_country(country);
                    }
                }
                Action::Search => {
                    let outcome = self.session.search().await;
                    self.show(outcome);
                }
                Action::ClearInputs => self.session.clear_inputs(),
                Action::History => self.history_menu().await?,
                Action::ClearHistory => self.session.clear_history(),
                Action::Quit => break,
            }
        }

        Ok(())
    }

    async fn history_menu(&mut self) -> Result<()> {
        print!("{}", render::history_panel(self.session.history()));
        if self.session.history().is_empty() {
            return Ok(());
        }

        let choices: Vec<EntryChoice> = self
            .session
            .history()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryChoice { index, line: render::history_line(entry) })
            .collect();

        let Some(choice) = Select::new("Entry:", choices).prompt_skippable()? else {
            return Ok(());
        };

        let actions = vec![EntryAction::Search, EntryAction::Delete];
        match Select::new("Do:", actions).prompt_skippable()? {
            Some(EntryAction::Search) => {
                let outcome = self.session.replay(choice.index).await;
                self.show(outcome);
            }
            Some(EntryAction::Delete) => {
                self.session.delete_entry(choice.index);
            }
            None => {}
        }

        Ok(())
    }

    /// Print the results panel after a successful fetch. Other outcomes are
    /// only reported through the log.
    fn show(&self, outcome: SearchOutcome) {
        if outcome != SearchOutcome::Updated {
            return;
        }
        if let Some(snapshot) = self.session.snapshot() {
            println!("{}", render::snapshot_panel(snapshot));
        }
    }
}

/// Prompt for free text, pre-filled with the current value. `None` on Esc.
fn ask(message: &str, current: &str) -> Result<Option<String>> {
    Ok(Text::new(message).with_initial_value(current).prompt_skippable()?)
}

fn status_line(session: &WeatherSession) -> String {
    let code = match session.country_code() {
        "" => "-",
        code => code,
    };
    format!(
        "City: {:?}  Country: {:?} [{}]  History: {}",
        session.city(),
        session.country(),
        code,
        session.history().len()
    )
}
