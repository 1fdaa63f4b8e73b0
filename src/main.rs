use clap::{Parser, ValueEnum};
use color_eyre::Result;
use log::LevelFilter;

use graphplan::pddl::problems;
use graphplan::{GraphPlan, GraphPlanConfig, Problem};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProblemKind {
    SpareTire,
    GoToSfo,
    HaveCake,
    Stuck,
}

#[derive(Parser)]
#[command(author, version, about = "Solve a built-in planning problem with GraphPlan")]
struct Cli {
    /// Problem to solve
    #[arg(short, long, value_enum, default_value = "spare-tire")]
    problem: ProblemKind,

    /// Skip the level-cost heuristic and only enumerate action subsets
    #[arg(long)]
    no_heuristic: bool,

    /// Print the planning graph after the search
    #[arg(long)]
    show_graph: bool,

    /// More log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load(kind: ProblemKind) -> Result<Problem> {
    let problem = match kind {
        ProblemKind::SpareTire => problems::spare_tire()?,
        ProblemKind::GoToSfo => problems::go_home_to_sfo()?,
        ProblemKind::HaveCake => problems::have_cake()?,
        ProblemKind::Stuck => problems::stuck()?,
    };
    Ok(problem)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let problem = load(cli.problem)?;
    print!("{}", problem);

    let config = GraphPlanConfig::default().with_heuristic(!cli.no_heuristic);
    let solution = GraphPlan::new(config).solve(&problem);
    if cli.show_graph {
        print!("{}", solution.graph);
    }
    match solution.plan {
        Some(plan) if plan.is_empty() => println!("Goal already holds, nothing to do."),
        Some(plan) => print!("Plan:\n{}", plan),
        None => println!("No plan exists."),
    }
    Ok(())
}
