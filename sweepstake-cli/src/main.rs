mod output;
mod parse;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use sweepstake_core::Sweepstake;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "sweepstake",
    version,
    about = "Randomly assign ranked teams to participants, one segment at a time"
)]
struct Cli {
    /// File with one participant per line (or a JSON array of strings)
    #[arg(long)]
    participants: Option<PathBuf>,

    /// Inline participant (repeatable)
    #[arg(long = "participant")]
    inline_participants: Vec<String>,

    /// File with teams in ranking order, one per line (or a JSON array)
    #[arg(long)]
    teams: Option<PathBuf>,

    /// Inline team (repeatable, in ranking order)
    #[arg(long = "team")]
    inline_teams: Vec<String>,

    /// Seed for a reproducible draw (default: unseeded)
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of text blocks
    #[arg(long)]
    json: bool,

    /// Show draw details on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load participants from --participants file and/or --participant flags.
fn load_participants(cli: &Cli) -> Vec<String> {
    let mut participants = Vec::new();

    if let Some(ref path) = cli.participants {
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
            bail(format!("Failed to read participants file {}: {e}", path.display()))
        });
        participants = parse::parse_list(&content);
    }

    participants.extend(cli.inline_participants.iter().cloned());
    participants
}

/// Load teams from --teams file, --team flags, or stdin.
fn load_teams(cli: &Cli) -> Vec<String> {
    let mut teams = Vec::new();

    if let Some(ref path) = cli.teams {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read teams file {}: {e}", path.display())));
        teams = parse::parse_list(&content);
    }

    teams.extend(cli.inline_teams.iter().cloned());

    // From stdin (only if no file and no inline teams)
    if teams.is_empty() && cli.teams.is_none() {
        let mut stdin = io::stdin();
        if !stdin.is_terminal() {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .unwrap_or_else(|e| bail(format!("Failed to read teams from stdin: {e}")));
            teams = parse::parse_list(&content);
        }
    }

    teams
}

fn main() {
    let cli = Cli::parse();

    let participants = load_participants(&cli);
    let teams = load_teams(&cli);

    if participants.is_empty() && teams.is_empty() {
        bail("No input. Use --participants/--participant and --teams/--team, or pipe teams via stdin.");
    }

    let mut sweepstake =
        Sweepstake::new(participants, teams).unwrap_or_else(|e| bail(e));

    if cli.verbose {
        let sizes: Vec<usize> = sweepstake.segments().iter().map(|s| s.len()).collect();
        eprintln!(
            "Drawing {} team(s) for {} participant slot(s), segments: {sizes:?}",
            sweepstake.teams().len(),
            sweepstake.participants().len(),
        );
        match cli.seed {
            Some(seed) => eprintln!("Seed: {seed}"),
            None => eprintln!("Seed: none (unseeded draw)"),
        }
    }

    match cli.seed {
        Some(seed) => sweepstake.assign_all(&mut StdRng::seed_from_u64(seed)),
        None => sweepstake.assign(),
    }

    if cli.json {
        output::print_json(sweepstake.assignments());
    } else {
        print!("{}", output::render_blocks(sweepstake.assignments()));
    }
}
