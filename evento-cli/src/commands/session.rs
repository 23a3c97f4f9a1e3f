//! Interactive menu session.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use dialoguer::{Input, Select};
use evento_core::{Category, Event, EventStore, Registry, User};
use owo_colors::OwoColorize;
use tracing::{info, warn};

use super::now;
use crate::render::{event_summary, print_events};
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    CreateEvent,
    ListEvents,
    JoinEvent,
    LeaveEvent,
    MyEvents,
    InProgress,
    PastEvents,
    Save,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::CreateEvent,
        MenuAction::ListEvents,
        MenuAction::JoinEvent,
        MenuAction::LeaveEvent,
        MenuAction::MyEvents,
        MenuAction::InProgress,
        MenuAction::PastEvents,
        MenuAction::Save,
        MenuAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::CreateEvent => "Register a new event",
            MenuAction::ListEvents => "List all events",
            MenuAction::JoinEvent => "Join an event",
            MenuAction::LeaveEvent => "Cancel participation",
            MenuAction::MyEvents => "My events",
            MenuAction::InProgress => "Events in progress",
            MenuAction::PastEvents => "Past events",
            MenuAction::Save => "Save",
            MenuAction::Exit => "Save and exit",
        }
    }
}

struct Session {
    store: EventStore,
    registry: Registry,
    user: User,
}

pub fn run(store: EventStore) -> Result<()> {
    let is_new = !store.path().exists();
    let events = store.load().with_context(|| {
        format!(
            "Failed to load events from {}\n\
            Fix or move the file before starting a session; saving would overwrite it.",
            store.path().display()
        )
    })?;

    if is_new {
        println!(
            "{}",
            format!("No event file at {}. A new one will be created.", store.path().display())
                .dimmed()
        );
    }

    let user = register_user()?;
    info!(user = %user.id, events = events.len(), "Session started");

    let mut session = Session {
        store,
        registry: Registry::new(events),
        user,
    };
    session.menu_loop()
}

fn register_user() -> Result<User> {
    println!();
    println!("{}", "=== User registration ===".bold());

    let name = prompt_valid("Name", validate::name)?;
    let email = prompt_valid("Email", validate::email)?;
    let city = prompt_valid("City", validate::city)?;

    let user = User::new(name, email, city);
    println!();
    println!("{}", format!("Welcome, {}!", user).green());
    Ok(user)
}

impl Session {
    fn menu_loop(&mut self) -> Result<()> {
        let items: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();

        loop {
            println!();
            let selection = Select::new()
                .with_prompt("Events menu")
                .items(&items)
                .default(0)
                .interact()?;

            match MenuAction::ALL[selection] {
                MenuAction::CreateEvent => self.create_event()?,
                MenuAction::ListEvents => self.list_events(),
                MenuAction::JoinEvent => self.join_event()?,
                MenuAction::LeaveEvent => self.leave_event()?,
                MenuAction::MyEvents => self.my_events(),
                MenuAction::InProgress => {
                    let now = now();
                    let entries = self.registry.in_progress(now);
                    print_events("Events in progress", &entries, now, "No events in progress.");
                }
                MenuAction::PastEvents => {
                    let now = now();
                    let entries = self.registry.finished(now);
                    print_events("Past events", &entries, now, "No past events.");
                }
                MenuAction::Save => {
                    if let Err(e) = self.save() {
                        eprintln!("{}", format!("Error saving events: {e:#}").red());
                    }
                }
                MenuAction::Exit => {
                    self.save()?;
                    println!("Leaving...");
                    return Ok(());
                }
            }
        }
    }

    fn save(&self) -> Result<()> {
        self.store
            .save(self.registry.events())
            .with_context(|| format!("Failed to save events to {}", self.store.path().display()))?;
        println!(
            "{}",
            format!("Saved {} events.", self.registry.len()).dimmed()
        );
        Ok(())
    }

    fn create_event(&mut self) -> Result<()> {
        println!();
        println!("{}", "=== New event ===".bold());

        let name = prompt_valid("Event name", validate::name)?;
        let address = prompt_valid("Address", validate::address)?;
        let category = prompt_category()?;
        let scheduled_at = prompt_datetime("Date and time (dd/MM/yyyy HH:mm)")?;
        let description = prompt_valid("Description", validate::description)?;

        let event = Event::new(name, address, category, scheduled_at, description);
        let index = self.registry.add(event);
        info!(index, "Event registered");
        println!("{}", "Event registered successfully!".green());
        Ok(())
    }

    fn list_events(&self) {
        let now = now();
        let entries = self.registry.by_schedule();
        print_events("Events", &entries, now, "No events registered.");
    }

    fn join_event(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            println!("{}", "No events available.".dimmed());
            return Ok(());
        }

        let now = now();
        let entries = self.registry.by_schedule();
        let Some(index) = select_event("Event to join", &entries, now)? else {
            return Ok(());
        };

        match self.registry.join(index, &self.user.email, now) {
            Ok(true) => println!("{}", "Participation confirmed!".green()),
            Ok(false) => println!("{}", "You are already participating in this event.".dimmed()),
            Err(e) => {
                warn!(index, error = %e, "Join rejected");
                eprintln!("{}", format!("Cannot join: {e}").red());
            }
        }
        Ok(())
    }

    fn leave_event(&mut self) -> Result<()> {
        let now = now();
        let entries = self.registry.joined_by(&self.user.email);
        if entries.is_empty() {
            println!("{}", "You are not participating in any event.".dimmed());
            return Ok(());
        }

        let Some(index) = select_event("Event to cancel", &entries, now)? else {
            return Ok(());
        };

        if self.registry.leave(index, &self.user.email)? {
            println!("{}", "Participation cancelled.".green());
        }
        Ok(())
    }

    fn my_events(&self) {
        let now = now();
        let entries = self.registry.joined_by(&self.user.email);
        print_events(
            "My events",
            &entries,
            now,
            "You are not participating in any event.",
        );
    }
}

/// Prompt until `check` accepts the trimmed input.
fn prompt_valid(prompt: &str, check: fn(&str) -> Result<(), String>) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(move |s: &String| check(s.trim()))
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn prompt_category() -> Result<Category> {
    let items: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let selection = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Category::ALL[selection])
}

/// Prompt with retry; past dates are rejected against the time of each attempt.
fn prompt_datetime(prompt: &str) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match validate::future_datetime(&input, now()) {
            Ok(dt) => return Ok(dt),
            Err(e) => eprintln!("  {}", e.red()),
        }
    }
}

/// Let the user pick one of `entries`. Esc cancels. Returns the registry index.
fn select_event(
    prompt: &str,
    entries: &[(usize, &Event)],
    now: NaiveDateTime,
) -> Result<Option<usize>> {
    let items: Vec<String> = entries
        .iter()
        .map(|(index, event)| format!("#{} {}", index, event_summary(event, now)))
        .collect();

    let selection = Select::new()
        .with_prompt(format!("{} (Esc to cancel)", prompt))
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|pos| entries[pos].0))
}
