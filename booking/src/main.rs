//! Seatbook kiosk
//!
//! Line-oriented front end for one booking session: type commands, watch the
//! session move from the access screen to the ticket.
//!
//! # Usage
//!
//! ```bash
//! ACCESS_CODES=FIGMM2025,EGRESADO001 cargo run --bin kiosk
//! ```

use anyhow::{Context, bail};
use seatbook::{
    BookingAction, BookingEnvironment, BookingReducer, Config, FormField,
    InMemoryReservationStore, LogNotifier, Screen, SeatId, SeatStatus, SessionState,
};
use seatbook_core::environment::SystemClock;
use seatbook_runtime::Store;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type KioskStore = Store<SessionState, BookingAction, BookingEnvironment, BookingReducer>;

/// One line of kiosk input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Action(BookingAction),
    Map,
    State,
    Json,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> anyhow::Result<Self> {
        // Arguments are passed through as typed, surrounding blanks included.
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

        let command = match verb {
            "code" => Self::Action(BookingAction::SubmitAccessCode(rest.to_string())),
            "seat" => {
                let seat: SeatId = rest.trim().parse()?;
                Self::Action(BookingAction::SelectSeat(seat))
            },
            "continue" => Self::Action(BookingAction::ContinueToForm),
            "back" => Self::Action(BookingAction::BackToSeats),
            "set" => {
                let (name, value) = rest
                    .split_once(' ')
                    .context("usage: set <field> <value>")?;
                let field = name.parse::<FormField>().map_err(anyhow::Error::msg)?;
                Self::Action(BookingAction::EditField {
                    field,
                    value: value.to_string(),
                })
            },
            "confirm" => Self::Action(BookingAction::ConfirmReservation),
            "new" => Self::Action(BookingAction::NewReservation),
            "map" => Self::Map,
            "state" => Self::State,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command: {other} (try `help`)"),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,seatbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    config.validate().context("invalid configuration")?;
    tracing::info!(
        event = %config.event.label,
        tables = config.venue.tables,
        seats_per_table = config.venue.seats_per_table,
        "Kiosk starting"
    );

    let env = BookingEnvironment::new(
        &config,
        Arc::new(SystemClock),
        Arc::new(InMemoryReservationStore::new()),
        Arc::new(LogNotifier),
    );
    let store = Store::new(SessionState::new(), BookingReducer::new(), env);

    println!("=== {} ===", config.event.label);
    print_help();
    print_prompt(&store).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Command::Action(action)) => {
                store.send(action).await?;
                print_prompt(&store).await;
            },
            Ok(Command::Map) => print_map(&store).await,
            Ok(Command::State) => print_prompt(&store).await,
            Ok(Command::Json) => print_json(&store).await?,
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(error) => println!("! {error}"),
        }
    }

    store.shutdown();
    let booked = store.environment().reservations.len();
    tracing::info!(booked, "Kiosk stopped");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  code <access code>      submit an access code");
    println!("  seat <M#-A#>            pick a seat");
    println!("  continue | back         move between seat map and form");
    println!("  set <field> <value>     nombres, apellidos, dni, celular, email");
    println!("  confirm                 book the seat");
    println!("  new                     start the next reservation");
    println!("  map | state | json      show the venue, the session, or both as JSON");
    println!("  quit");
}

async fn print_prompt(store: &KioskStore) {
    let snapshot = store.state(SessionState::snapshot).await;

    if let Some(error) = &snapshot.error {
        println!("! {error}");
    }
    match snapshot.screen {
        Screen::Access => println!("[access] enter your access code"),
        Screen::Seats => match snapshot.selected_seat {
            Some(seat) => println!("[seats] selected {seat}; `continue` to fill in your details"),
            None => println!("[seats] pick a seat (`map` shows the venue)"),
        },
        Screen::Form => {
            let seat = snapshot.selected_seat.map(|s| s.to_string()).unwrap_or_default();
            println!("[form] seat {seat}");
            for field in FormField::ALL {
                println!("  {:<14} {}", field.label(), snapshot.form.get(field));
            }
        },
        Screen::Confirmation => {
            if let Some(ticket) = &snapshot.ticket {
                println!("[confirmation] {}", ticket.event_label);
                println!("  name  {}", ticket.holder_name);
                println!("  DNI   {}", ticket.national_id);
                println!("  seat  {}", ticket.seat);
                println!("  We will send your confirmation to {}", ticket.email);
            }
        },
    }
}

async fn print_map(store: &KioskStore) {
    let env = store.environment();
    let selected = store.state(SessionState::selected_seat).await;
    let views = env.venue.seat_views(selected, env.reservations.as_ref());

    for table in env.venue.tables() {
        let marks: String = views
            .iter()
            .filter(|view| view.table == table.number)
            .map(|view| match view.status {
                SeatStatus::Available => " .",
                SeatStatus::Selected => " *",
                SeatStatus::Occupied => " x",
            })
            .collect();
        println!("{:<4}{marks}", table.label);
    }
    println!(
        "{} of {} seats free (. free, * selected, x taken)",
        env.venue.available_count(env.reservations.as_ref()),
        env.venue.capacity()
    );
}

async fn print_json(store: &KioskStore) -> anyhow::Result<()> {
    let env = store.environment();
    let (snapshot, selected) = store.state(|s| (s.snapshot(), s.selected_seat())).await;
    let document = serde_json::json!({
        "session": snapshot,
        "tables": env.venue.tables(),
        "seats": env.venue.seat_views(selected, env.reservations.as_ref()),
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
