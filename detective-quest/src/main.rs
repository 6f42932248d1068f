use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use detective_quest::case;
use detective_quest::clues::ClueIndex;
use detective_quest::events::Event;
use detective_quest::explore::{self, CommandSource, EventSink, LeafPolicy, Moves, ScriptedSource};
use detective_quest::suspects::DEFAULT_TABLE_CAPACITY;
use detective_quest::verdict;

#[derive(Parser, Debug)]
#[command(name = "Detective Quest")]
#[command(about = "Explore the mansion, collect clues and accuse a suspect", long_about = None)]
struct Args {
    /// End the exploration automatically on reaching a dead-end room
    #[arg(long)]
    auto_quit_at_leaf: bool,

    /// Capacity of the suspect table (a small prime distributes best)
    #[arg(long, default_value_t = DEFAULT_TABLE_CAPACITY)]
    table_capacity: usize,

    /// Comma-separated commands to run instead of reading stdin (e.g. "e,e,s")
    #[arg(long)]
    commands: Option<String>,

    /// Suspect to accuse without prompting (useful with --commands)
    #[arg(long)]
    accuse: Option<String>,

    /// Print the final case report as JSON
    #[arg(long)]
    json: bool,
}

struct StdinSource;

impl CommandSource for StdinSource {
    fn next_token(&mut self) -> Result<Option<String>> {
        print!("Option: ");
        io::stdout().flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::RoomEntered { name } => println!("\nYou are in: {}", name),
            Event::ClueFound { text } => println!("Clue found: \"{}\"", text),
            Event::ClueAbsent => println!("No clue in this room."),
            Event::InvalidChoice { input } => println!("Invalid option {:?}! Try again.", input),
            Event::ExplorationEnded => println!("Exploration ended."),
            Event::ClueListed { text, suspect } => println!(
                "- {} (suspect: {})",
                text,
                suspect.as_deref().unwrap_or("unknown")
            ),
            Event::Verdict { .. } => {}
        }
    }

    fn offer(&mut self, moves: Moves<'_>) {
        println!("Choose a path:");
        if let Some(name) = moves.left {
            println!("  (e) Left: {}", name);
        }
        if let Some(name) = moves.right {
            println!("  (d) Right: {}", name);
        }
        println!("  (s) Quit exploration");
    }
}

fn prompt_accusation() -> Result<String> {
    print!("Based on the clues, whom do you accuse? ");
    io::stdout().flush().context("Failed to flush prompt")?;
    let mut name = String::new();
    io::stdin()
        .read_line(&mut name)
        .context("Failed to read the accusation")?;
    Ok(name.trim().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let policy = if args.auto_quit_at_leaf {
        LeafPolicy::AutoQuit
    } else {
        LeafPolicy::RequireQuit
    };

    let mansion = case::mansion();
    let directory =
        case::suspect_directory(args.table_capacity).context("Invalid suspect table capacity")?;
    let mut clues = ClueIndex::new();
    let mut sink = ConsoleSink;

    println!("=== Detective Quest: Mansion Exploration ===");

    match args.commands {
        Some(ref script) => {
            let tokens = script.split(',').map(str::trim).filter(|t| !t.is_empty());
            let mut source = ScriptedSource::new(tokens);
            explore::run(&mansion, &mut clues, &mut source, &mut sink, policy)?;
        }
        None => {
            let mut source = StdinSource;
            explore::run(&mansion, &mut clues, &mut source, &mut sink, policy)?;
        }
    }

    println!("\nClues collected (alphabetical order):");
    if clues.is_empty() {
        println!("No clue was collected.");
    } else {
        for event in clues.report(&directory) {
            sink.emit(&event);
        }
    }

    println!("\n=== Judgement Phase ===");
    let accused = match args.accuse {
        Some(ref name) => name.clone(),
        None => prompt_accusation()?,
    };

    let judgement = verdict::evaluate(&clues, &directory, &accused);
    println!(
        "\nClues pointing at {}: {}",
        judgement.accused, judgement.match_count
    );
    if judgement.guilty() {
        println!(
            "✅ Accusation accepted! {} is GUILTY on the evidence.",
            judgement.accused
        );
    } else {
        println!(
            "❌ Accusation rejected. Not enough evidence against {}.",
            judgement.accused
        );
    }

    if args.json {
        let report = verdict::case_report(&clues, &directory, judgement);
        println!("\n=== Case Report ===");
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
