//! The interactive menu surface.
//!
//! All reads and writes go through injected `BufRead`/`Write` handles,
//! so whole sessions can be scripted in tests. The planner itself never
//! touches the console; this layer only gathers input and renders
//! results.

pub mod prompt;
mod state;

pub use state::AppState;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::domain::{
    Comfort, Money, Network, Segment, SelectionError, TransportOption, Trip, TripStatus,
    format_hours,
};
use crate::planner::{self, JourneyPrefs, SortPriority};

/// The interactive application: menu loops over an input/output pair.
pub struct App<R, W> {
    input: R,
    out: W,
    state: AppState,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an application over the given I/O handles.
    pub fn new(input: R, out: W, state: AppState) -> Self {
        Self { input, out, state }
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "1. Sign Up")?;
            writeln!(self.out, "2. Log In")?;
            writeln!(self.out, "3. Exit")?;
            let Some(choice) = prompt::prompt(&mut self.input, &mut self.out, "Choose: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.sign_up()?,
                "2" => self.log_in()?,
                "3" => {
                    writeln!(self.out, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
        Ok(())
    }

    fn sign_up(&mut self) -> io::Result<()> {
        let Some(name) = prompt::prompt(&mut self.input, &mut self.out, "Enter username: ")?
        else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.out, "Invalid choice.")?;
            return Ok(());
        }

        let balance = self.state.config.starting_balance();
        match self.state.registry.create(&name, balance) {
            Ok(_) => {
                writeln!(self.out, "Sign-up successful!")?;
                info!(user = %name, "user signed up");
            }
            Err(err) => {
                writeln!(self.out, "Username already exists.")?;
                warn!(error = %err, "sign-up rejected");
            }
        }
        Ok(())
    }

    fn log_in(&mut self) -> io::Result<()> {
        let Some(name) = prompt::prompt(&mut self.input, &mut self.out, "Enter username: ")?
        else {
            return Ok(());
        };

        if let Err(err) = self.state.registry.login(&name) {
            writeln!(self.out, "User not found.")?;
            warn!(error = %err, "login failed");
            return Ok(());
        }

        info!(user = %name, "user logged in");
        self.user_session(&name)
    }

    /// The per-user menu, shown after a successful login.
    fn user_session(&mut self, username: &str) -> io::Result<()> {
        loop {
            for message in self.state.notifications.drain() {
                writeln!(self.out, "Notification: {message}")?;
            }

            writeln!(self.out)?;
            writeln!(self.out, "1. Plan Journey")?;
            writeln!(self.out, "2. View Trip History")?;
            writeln!(self.out, "3. Make Payment")?;
            writeln!(self.out, "4. Log Out")?;
            let Some(choice) = prompt::prompt(&mut self.input, &mut self.out, "Choose: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.plan_journey(username)?,
                "2" => self.view_trips(username)?,
                "3" => self.make_payment(username)?,
                "4" => break,
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
        Ok(())
    }

    fn plan_journey(&mut self, username: &str) -> io::Result<()> {
        let network = self.state.config.network();
        let journey = network.itinerary();
        if journey.is_empty() {
            writeln!(self.out, "No route is configured.")?;
            return Ok(());
        }

        let Some(prefs) = self.prompt_prefs()? else {
            return Ok(());
        };

        let result = planner::summarize(&journey, &prefs, |segment, listed| {
            self.pick_interactively(segment, listed, &network)
        });

        match result {
            Ok(summary) => {
                writeln!(self.out)?;
                writeln!(self.out, "Journey Summary:")?;
                writeln!(self.out, "Total Time: {}", format_hours(summary.total_time))?;
                writeln!(self.out, "Total Cost: {}", summary.total_cost)?;

                let origin = journey
                    .origin()
                    .map_or(String::new(), |id| network.station_name(id).to_string());
                let destination = journey
                    .destination()
                    .map_or(String::new(), |id| network.station_name(id).to_string());

                if let Some(user) = self.state.registry.find_mut(username) {
                    let id = format!("T{}", user.trips().len() + 1);
                    user.record_trip(Trip::new(
                        id,
                        origin.as_str(),
                        destination.as_str(),
                        TripStatus::Planned,
                        summary.total_cost,
                    ));
                }
                self.state.notifications.push(format!(
                    "Journey planned! {origin} to {destination} for {}.",
                    summary.total_cost
                ));
                info!(user = %username, cost = %summary.total_cost, "journey planned");
            }
            // Input ended mid-selection; nothing to report.
            Err(SelectionError::Interrupted) => {}
            Err(err) => {
                writeln!(self.out, "Could not plan journey: {err}.")?;
                warn!(user = %username, error = %err, "journey planning failed");
            }
        }
        Ok(())
    }

    /// Asks for a comfort threshold and sort priority; empty replies
    /// take the configured defaults. Returns `None` at end of input.
    fn prompt_prefs(&mut self) -> io::Result<Option<JourneyPrefs>> {
        let defaults = self.state.config.default_prefs();

        let min_comfort = loop {
            let Some(line) = prompt::prompt(
                &mut self.input,
                &mut self.out,
                &format!("Minimum comfort (stars) [{}]: ", defaults.min_comfort.stars()),
            )?
            else {
                return Ok(None);
            };
            if line.is_empty() {
                break defaults.min_comfort;
            }
            match line.parse::<u8>() {
                Ok(stars) => break Comfort::new(stars),
                Err(_) => writeln!(self.out, "Invalid choice.")?,
            }
        };

        let priority = loop {
            let Some(line) = prompt::prompt(
                &mut self.input,
                &mut self.out,
                &format!("Sort by time or cost [{}]: ", defaults.priority),
            )?
            else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "" => break defaults.priority,
                "time" | "t" => break SortPriority::Time,
                "cost" | "c" => break SortPriority::Cost,
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        };

        Ok(Some(JourneyPrefs::new(min_comfort, priority)))
    }

    /// Shows a segment's shortlist and reads a 1-indexed pick,
    /// re-prompting until the reply is a number in range.
    fn pick_interactively(
        &mut self,
        segment: &Segment,
        listed: &[TransportOption],
        network: &Network,
    ) -> Result<usize, SelectionError> {
        let mut menu = format!(
            "\nLeg: {} -> {}\nAvailable options:\n",
            network.station_name(segment.origin()),
            network.station_name(segment.destination())
        );
        for (i, option) in listed.iter().enumerate() {
            menu.push_str(&format!("{}. {option}\n", i + 1));
        }
        self.out
            .write_all(menu.as_bytes())
            .map_err(|_| SelectionError::Interrupted)?;

        loop {
            let line = prompt::prompt(
                &mut self.input,
                &mut self.out,
                &format!("Choose an option (1-{}): ", listed.len()),
            )
            .map_err(|_| SelectionError::Interrupted)?;
            let Some(line) = line else {
                return Err(SelectionError::Interrupted);
            };

            match line.parse::<usize>() {
                Ok(n) if (1..=listed.len()).contains(&n) => return Ok(n),
                _ => {
                    writeln!(self.out, "Invalid choice.")
                        .map_err(|_| SelectionError::Interrupted)?;
                }
            }
        }
    }

    fn view_trips(&mut self, username: &str) -> io::Result<()> {
        let Some(user) = self.state.registry.find(username) else {
            return Ok(());
        };
        writeln!(self.out, "Trip History for {}:", user.username())?;
        if user.trips().is_empty() {
            writeln!(self.out, "(no trips yet)")?;
        }
        for trip in user.trips() {
            writeln!(self.out, "{trip}")?;
        }
        Ok(())
    }

    fn make_payment(&mut self, username: &str) -> io::Result<()> {
        let amount = loop {
            let Some(line) = prompt::prompt(&mut self.input, &mut self.out, "Enter amount: ")?
            else {
                return Ok(());
            };
            match line.parse::<f64>() {
                Ok(dollars) if dollars >= 0.0 => break Money::from_dollars(dollars),
                _ => writeln!(self.out, "Invalid amount.")?,
            }
        };

        let Some(user) = self.state.registry.find_mut(username) else {
            return Ok(());
        };
        if user.pay(amount) {
            let balance = user.balance();
            writeln!(
                self.out,
                "Payment of {amount} successful. Remaining balance: {balance}"
            )?;
            info!(user = %username, amount = %amount, "payment accepted");
        } else {
            let balance = user.balance();
            writeln!(self.out, "Insufficient funds! Balance: {balance}")?;
            warn!(user = %username, amount = %amount, "payment refused");
        }
        Ok(())
    }
}
