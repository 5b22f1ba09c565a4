use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    init_logging, run_duel, Combatant, FleetSpec, PlacementRule, TargetingMode, DEFAULT_COLS,
    DEFAULT_ROWS,
};
use serde_json::json;

/// Run one seeded AI-vs-AI match and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "RNG seed; the same seed replays the same match")]
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    #[arg(long, help = "Keep a one-cell gap between ships")]
    buffered: bool,
    #[arg(long, help = "Player A hunts around hits")]
    hunt_a: bool,
    #[arg(long, help = "Player B hunts around hits")]
    hunt_b: bool,
    #[arg(long, default_value_t = 10_000)]
    max_turns: usize,
    #[arg(long, default_value_t = 10_000, help = "Placement attempts per ship before giving up")]
    max_placement_attempts: usize,
}

fn targeting(hunt: bool) -> TargetingMode {
    if hunt {
        TargetingMode::Hunt
    } else {
        TargetingMode::Random
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let rule = if args.buffered {
        PlacementRule::Buffered
    } else {
        PlacementRule::NoOverlap
    };
    let fleet = FleetSpec::standard();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut a = Combatant::new(args.rows, args.cols, fleet.clone(), rule, targeting(args.hunt_a))?;
    let mut b = Combatant::new(args.rows, args.cols, fleet, rule, targeting(args.hunt_b))?;
    a.board.try_place_ships(&mut rng, args.max_placement_attempts)?;
    b.board.try_place_ships(&mut rng, args.max_placement_attempts)?;

    let summary = run_duel(&mut a, &mut b, &mut rng, args.max_turns)?;

    let winner = summary.winner.map(|w| if w == 0 { "player_a" } else { "player_b" });
    let result = json!({
        "seed": args.seed,
        "player_a": {"targeting": format!("{:?}", a.strategy.targeting()), "shots": summary.shots[0]},
        "player_b": {"targeting": format!("{:?}", b.strategy.targeting()), "shots": summary.shots[1]},
        "turns": summary.turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
