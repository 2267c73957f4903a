//! Journal demo - add a couple of entries, print them, persist them.

use solid_journal::{EntryStore, Persistence, PersistenceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solid_journal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut journal = EntryStore::new();
    journal.add_entry("I learnt the S.R.P. today!");
    journal.add_entry("Looking forward to tomorrow...");
    println!("{journal}");

    let persistence = Persistence::new(PersistenceConfig::default());
    persistence.save_to_file(&journal, "journal.txt")?;

    Ok(())
}
