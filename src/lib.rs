pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod models;
pub mod router;
pub mod services;
pub mod session;
pub mod ui;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, StdinCollector, TerminalRenderer};
pub use config::Config;
use db::Store;
use models::Role;
pub use router::{App, Route};
use services::{Credentials, RegistrationForm};
use session::Session;
use ui::FieldCollector;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search { query }) => run_search(&config, &query.join(" ")),
        Some(Commands::Reset) => run_reset(&config),
        Some(Commands::Browse) | None => run_browse(&config),
    }
}

fn run_search(config: &Config, query: &str) -> Result<()> {
    let store = Store::open(&config.data_dir());
    let snapshot = store.ensure_seed_merged()?;
    let results = services::search(&snapshot, query);
    println!("Search Results for \"{query}\"");
    for art in &results.artworks {
        let artist = snapshot
            .artist_by_id(&art.artist_id)
            .map_or("Unknown", |a| a.name.as_str());
        println!("  [{}] {} — by {} — ₹{}", art.id, art.title, artist, art.price);
    }
    for artist in &results.artists {
        println!("  [{}] {} — {}", artist.id, artist.name, artist.bio);
    }
    Ok(())
}

fn run_reset(config: &Config) -> Result<()> {
    let store = Store::open(&config.data_dir());
    store.init()?;
    info!("Snapshot reinitialized from seed");
    Ok(())
}

fn run_browse(config: &Config) -> Result<()> {
    let store = Store::open(&config.data_dir());
    let session = Session::in_memory();
    let mut app = App::new(
        store,
        session,
        Box::new(TerminalRenderer),
        Box::new(StdinCollector),
    );
    app.bootstrap();
    print_shell_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        dispatch_shell_command(&mut app, line);
    }
    Ok(())
}

fn dispatch_shell_command(app: &mut App, line: &str) {
    if line.starts_with('#') {
        app.navigate(line);
        return;
    }
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (command, args.as_slice()) {
        ("help", _) => print_shell_help(),
        ("login", [role, email, password]) => {
            let credentials = Credentials {
                email: (*email).to_string(),
                password: (*password).to_string(),
            };
            match *role {
                "artist" => app.login(Role::Artist, &credentials),
                "curator" => app.login(Role::Curator, &credentials),
                _ => app.login_visitor_or_admin(&credentials),
            }
        }
        ("register", [role]) => {
            if let Some(form) = collect_registration(role) {
                app.register(form);
            } else {
                println!("* Registration cancelled.");
            }
        }
        ("logout", _) => app.sign_out(),
        ("add", [art_id]) => app.add_to_cart(art_id),
        ("buy", _) => app.buy_now(),
        ("checkout", _) => app.checkout(),
        ("tick", _) => app.tick_carousel(),
        ("prev", _) => app.calendar_prev_month(),
        ("next", _) => app.calendar_next_month(),
        ("upload", [artist_id]) => app.upload_artwork(artist_id),
        ("delete-art", [art_id]) => app.delete_artwork(art_id),
        ("create-event", _) => app.create_event(),
        ("delete-event", [event_id]) => app.delete_event(event_id),
        ("approve-artist", [artist_id]) => app.approve_artist(artist_id),
        ("approve-curator", [user_id]) => app.approve_curator(user_id),
        _ => println!("* Unknown command; try `help`."),
    }
}

fn collect_registration(role: &str) -> Option<RegistrationForm> {
    let mut prompts = StdinCollector;
    let name = prompts.prompt("Full name:")?;
    let email = prompts.prompt("Email:")?;
    let password = prompts.prompt("Password:")?;
    let form = match role {
        "artist" => RegistrationForm::Artist {
            name,
            email,
            password,
            bio: prompts.prompt_or_default("Short artist bio (for approvals):"),
        },
        "curator" => RegistrationForm::Curator {
            name,
            email,
            password,
            bio: prompts.prompt_or_default("Short curator bio (for approvals):"),
            photo: prompts.prompt_or_default("Photo URL (optional):"),
        },
        _ => RegistrationForm::Visitor { name, email, password },
    };
    Some(form)
}

fn print_shell_help() {
    println!("Navigate with fragments: #home #search-<q> #artist-<id> #art-<id> #event-<id>");
    println!("                         #login #register?role=<r> #cart #admin #curator");
    println!("Actions: login <role> <email> <password> | register <role> | logout");
    println!("         add <art-id> | buy | checkout | upload <artist-id> | delete-art <art-id>");
    println!("         create-event | delete-event <id> | approve-artist <id> | approve-curator <id>");
    println!("Widgets: tick (carousel) | prev / next (calendar) | quit");
}
