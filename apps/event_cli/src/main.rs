use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    BoundedSurface, CatalogView, CountdownTicker, DragScrollController, HapticFeedback,
    HapticPulse, PointerButton, PointerEvent, ScrollSurface, SystemClock, TicketPricingEngine,
    ToggleStore, TracingHaptics, VoteOutcome,
};
use shared::domain::{CategoryFilter, EntryId, TierId};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_catalog, load_settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(about = "Headless host for the festival companion client state")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the countdown for a number of ticks, then stop the ticker.
    Countdown {
        #[arg(long, default_value_t = 3)]
        ticks: u32,
    },
    /// Search the chef lineup.
    Chefs {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// Show one entry; unknown ids fall back to the first entry.
    Detail { id: i64 },
    /// Price a ticket tier.
    Tickets {
        tier: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Like and vote for entries, then print the session flags.
    Vote {
        ids: Vec<i64>,
        #[arg(long)]
        like: Vec<i64>,
    },
    /// Replay a primary-button drag over a scrollable list.
    Drag {
        #[arg(long, default_value_t = 2_000.0)]
        content: f64,
        #[arg(long, default_value_t = 640.0)]
        viewport: f64,
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, num_args = 1.., allow_negative_numbers = true)]
        to: Vec<f64>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("APP__LOG_FILTER"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config);
    let catalog = load_catalog(&settings)?;

    let haptics: Arc<dyn HapticFeedback> = Arc::new(TracingHaptics);
    haptics.pulse(HapticPulse::NavigationTap);
    debug!(command = ?cli.command, "screen opened");

    match cli.command {
        Command::Countdown { ticks } => {
            let mut ticker = CountdownTicker::start(
                Arc::new(SystemClock),
                settings.event_target,
                settings.tick_interval(),
            )?;
            let mut updates = ticker.subscribe();
            print_units(&ticker.current().units());
            for _ in 0..ticks {
                if updates.changed().await.is_err() {
                    break;
                }
                let remaining = *updates.borrow_and_update();
                print_units(&remaining.units());
                if ticker.target_reached() {
                    println!("the event has started");
                    break;
                }
            }
            ticker.stop();
        }
        Command::Chefs { search, category } => {
            let mut view = CatalogView::new(catalog.entries.clone());
            view.set_category(CategoryFilter::parse(&category));
            view.set_search(search);
            match view.visible() {
                Some(entries) if !entries.is_empty() => {
                    for entry in entries {
                        println!(
                            "{:>2}  {:<22} {:<26} {:<14} {:.1} ({} votes)",
                            entry.id.0,
                            entry.display_name,
                            entry.secondary_label,
                            entry.category,
                            entry.rating,
                            entry.votes
                        );
                    }
                }
                _ => println!("no chefs found"),
            }
        }
        Command::Detail { id } => {
            let requested = EntryId(id);
            let Some(entry) = catalog.get_or_first(requested) else {
                bail!("catalog has no entries");
            };
            if entry.id != requested {
                warn!(requested = %requested, shown = %entry.id, "unknown entry; showing default");
            }
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        Command::Tickets { tier, quantity } => {
            let mut engine = TicketPricingEngine::new(catalog.tiers.clone());
            let selected = engine.select_tier(&TierId::new(tier))?.clone();
            let quantity = engine.set_quantity(quantity);
            match engine.total() {
                Some(total) if engine.quantity_applies() => {
                    println!(
                        "{} x{quantity} at ${}{} = ${total}",
                        selected.name,
                        selected.unit_price,
                        selected.price_unit_label()
                    );
                }
                Some(total) => println!(
                    "{} at ${}{} = ${total}",
                    selected.name,
                    selected.unit_price,
                    selected.price_unit_label()
                ),
                None => println!("no total available"),
            }
        }
        Command::Vote { ids, like } => {
            let mut toggles = ToggleStore::new(Arc::clone(&haptics));
            for id in like {
                toggles.like(EntryId(id));
            }
            for id in ids {
                let entry = EntryId(id);
                match toggles.vote(entry) {
                    VoteOutcome::Recorded => println!("vote submitted for {entry}"),
                    VoteOutcome::AlreadyVoted => println!("already voted for {entry}"),
                }
            }
            println!("{}", serde_json::to_string_pretty(&toggles.snapshot())?);
        }
        Command::Drag {
            content,
            viewport,
            from,
            to,
        } => {
            let mut surface = BoundedSurface::new(content, viewport);
            let mut controller = DragScrollController::new();
            controller.attach(&mut surface);
            controller.handle_event(
                PointerEvent::Down {
                    button: PointerButton::Primary,
                    y: from,
                },
                &mut surface,
            );
            for y in to {
                controller.handle_event(PointerEvent::Move { y }, &mut surface);
                println!("pointer y={y:>7.1} offset={:>7.1}", surface.scroll_offset());
            }
            controller.handle_event(PointerEvent::Up, &mut surface);
        }
    }

    Ok(())
}

fn print_units(units: &[(&'static str, u64)]) {
    let line: Vec<String> = units
        .iter()
        .map(|(label, value)| format!("{value} {label}"))
        .collect();
    println!("{}", line.join("  "));
}
