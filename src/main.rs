#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    ai, cli::coord_label, init_logging, seeded_rng, AttackResult, Command, GameConfig,
    GameController, GameError, Session, SessionEvent, Side, FLEET,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::time::Duration;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Computer thinking time in milliseconds")]
        delay_ms: Option<u64>,
    },
    /// Let the computer play both sides and print a JSON report.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut config = GameConfig::from_env();

    match cli.command {
        Commands::Play { seed, delay_ms } => {
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(ms) = delay_ms {
                config.opponent_delay = Duration::from_millis(ms);
            }
            play(config).await
        }
        Commands::Sim { seed } => {
            if seed.is_some() {
                config.seed = seed;
            }
            sim(&config)
        }
    }
}

#[cfg(feature = "std")]
async fn play(config: GameConfig) -> anyhow::Result<()> {
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let (mut session, mut events) = Session::new(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    print_help();
    println!("SYSTEM READY. AWAITING ORDERS.");
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };
        match command {
            Command::Place {
                slot,
                x,
                y,
                orientation,
            } => match session.place_ship(slot, x, y, orientation).await {
                Ok(_) => {
                    println!("✓ {} placed at {}", FLEET[slot].name(), coord_label(x, y));
                    let complete = session.with_controller(|c| c.fleet_complete()).await;
                    if complete {
                        println!("FLEET DEPLOYED. READY TO ENGAGE. Type 'start'.");
                    }
                }
                Err(GameError::NotInSetup) => println!("✗ The battle has already begun."),
                Err(e) => println!("✗ INVALID COORDINATES. RE-ALIGN. ({})", e),
            },
            Command::Random => match session.randomize_fleet().await {
                Ok(()) => {
                    println!("FLEET AUTO-DEPLOYED. READY.");
                    println!("{}", session.snapshot().await.own);
                }
                Err(e) => println!("✗ {}", e),
            },
            Command::Start => match session.start().await {
                Ok(()) => println!("COMBAT STARTED. SELECT TARGET COORDINATES."),
                Err(GameError::FleetIncomplete) => {
                    let missing: Vec<&str> = session
                        .with_controller(|c| {
                            FLEET
                                .iter()
                                .enumerate()
                                .filter(|(i, _)| !c.placed(*i))
                                .map(|(_, def)| def.name())
                                .collect()
                        })
                        .await;
                    println!("✗ Still to deploy: {}", missing.join(", "));
                }
                Err(e) => println!("✗ {}", e),
            },
            Command::Fire { x, y } => {
                match session.attack(x, y).await {
                    None => println!("✗ Hold fire: no target available right now."),
                    Some(AttackResult::Duplicate) => {
                        println!("✗ {} was already targeted. Choose another.", coord_label(x, y))
                    }
                    Some(AttackResult::Miss) => println!("MISSED TARGET at {}.", coord_label(x, y)),
                    Some(AttackResult::Hit) => println!("DIRECT HIT at {}!", coord_label(x, y)),
                    Some(AttackResult::Sunk(name)) => {
                        println!("ENEMY SHIP DESTROYED! The enemy {} is gone.", name)
                    }
                }
                if session.opponent_pending() {
                    println!("ENEMY TARGETING...");
                }
                session.wait_for_opponent().await?;
                while let Ok(event) = events.try_recv() {
                    report(&event);
                }
                println!("{}", session.snapshot().await);
            }
            Command::Reset => {
                session.reset().await;
                while events.try_recv().is_ok() {}
                println!("SYSTEM RESET. AWAITING ORDERS.");
            }
            Command::Board => println!("{}", session.snapshot().await),
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn report(event: &SessionEvent) {
    match event {
        SessionEvent::OpponentFired { x, y, result } => match result {
            AttackResult::Miss => println!("ENEMY MISSED at {}.", coord_label(*x, *y)),
            AttackResult::Hit => println!("WARNING: WE HAVE BEEN HIT at {}!", coord_label(*x, *y)),
            AttackResult::Sunk(name) => println!("WARNING: FRIENDLY SHIP LOST! Our {} is gone.", name),
            AttackResult::Duplicate => {}
        },
        SessionEvent::MatchFinished { winner: Side::Human } => {
            println!("VICTORY! ENEMY FLEET ELIMINATED.")
        }
        SessionEvent::MatchFinished { winner: Side::Computer } => {
            println!("DEFEAT! FLEET DESTROYED.")
        }
    }
}

#[cfg(feature = "std")]
fn print_help() {
    println!("Commands:");
    println!("  place <ship> <coord> [h|v]   deploy a ship, e.g. 'place carrier A1 v'");
    println!("  random                       deploy the whole fleet at random");
    println!("  start                        begin the battle once the fleet is deployed");
    println!("  <coord>                      fire at a cell, e.g. 'E5'");
    println!("  board | reset | help | quit");
    println!("Ships:");
    for def in FLEET.iter() {
        println!("  {} ({})", def.name(), def.length());
    }
}

#[cfg(feature = "std")]
fn sim(config: &GameConfig) -> anyhow::Result<()> {
    let mut rng = seeded_rng(config.seed);
    let mut game = GameController::new();
    game.randomize_fleet(&mut rng)?;
    game.start(&mut rng)?;

    let mut shots = [0usize; 2];
    while game.is_active() {
        let (x, y) = ai::select_target(&mut rng, game.computer().board())
            .ok_or_else(|| anyhow::anyhow!("no open cells left on the computer board"))?;
        game.attack(x, y)
            .ok_or_else(|| anyhow::anyhow!("attack at {} was ignored", coord_label(x, y)))?;
        shots[0] += 1;
        let generation = game.generation();
        if game.computer_turn(&mut rng, generation).is_some() {
            shots[1] += 1;
        }
    }

    let winner = match game.winner() {
        Some(Side::Human) => "human",
        Some(Side::Computer) => "computer",
        None => "none",
    };
    let result = json!({
        "seed": config.seed,
        "winner": winner,
        "turns": game.turns_taken(),
        "human": {
            "shots": shots[0],
            "ships_afloat": game.human().board().ships_afloat(),
        },
        "computer": {
            "shots": shots[1],
            "ships_afloat": game.computer().board().ships_afloat(),
        },
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
