use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use indoc::indoc;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tqdm::tqdm;

use seeker::algorithms::astar::AStarSearch;
use seeker::algorithms::bfs::BreadthFirstSearch;
use seeker::algorithms::dfs::DepthFirstSearch;
use seeker::algorithms::greedy::GreedySearch;
use seeker::algorithms::ucs::UniformCostSearch;
use seeker::grid::GridCost;
use seeker::grid::GridPoint;
use seeker::multi_goal::NearestChainHeuristic;
use seeker::problems::grid_collect::CollectState;
use seeker::problems::grid_collect::GridCollectProblem;
use seeker::problems::grid_nav::GridNavManhattanHeuristic;
use seeker::problems::grid_nav::GridNavProblem;
use seeker::problems::grid_world::GridMove;

#[cfg(all(not(feature = "mem_profile"), not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(feature = "mem_profile")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const RANDOM_TARGETS: u16 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    Greedy,
    AStar,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Point-to-point navigation ('S' to 'G').
    Nav,
    /// Collect every '*' cell.
    Collect,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = seeker::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, env = "LOGS", default_value = "/tmp/solutions.org")]
    pub output: PathBuf,

    /// Search algorithm to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    /// How to read the map files.
    #[arg(short, long, value_enum, default_value_t = Mode::Nav)]
    pub mode: Mode,

    /// Random instances to derive from each map.
    #[arg(short, long, default_value_t = 10)]
    pub instances: u64,

    /// Map files to solve.
    #[arg()]
    pub problems: Vec<PathBuf>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn write_path<W: std::io::Write, St, A, C>(
    out: &mut BufWriter<W>,
    path: Option<seeker::space::Path<St, A, C>>,
) -> std::io::Result<()>
where
    St: seeker::space::State,
    A: seeker::space::Action,
    C: seeker::cost::Cost,
{
    match path {
        Some(path) => writeln!(out, "*** Path\n#+begin_src ron\n{path}\n#+end_src"),
        None => writeln!(out, "*** Path\nNo path found."),
    }
}

fn solve_nav<W: std::io::Write>(
    out: &mut BufWriter<W>,
    algorithm: Algorithm,
    problem: GridNavProblem,
) -> std::io::Result<()> {
    let path = match algorithm {
        Algorithm::Dfs => {
            let mut search =
                DepthFirstSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Bfs => {
            let mut search =
                BreadthFirstSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Ucs => {
            let mut search =
                UniformCostSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Greedy => {
            let mut search = GreedySearch::<
                GridNavProblem,
                GridNavManhattanHeuristic,
                GridPoint,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::AStar => {
            let mut search = AStarSearch::<
                GridNavProblem,
                GridNavManhattanHeuristic,
                GridPoint,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
    };

    write_path(out, path)
}

fn solve_collect<W: std::io::Write>(
    out: &mut BufWriter<W>,
    algorithm: Algorithm,
    problem: GridCollectProblem,
) -> std::io::Result<()> {
    let path = match algorithm {
        Algorithm::Dfs => {
            let mut search = DepthFirstSearch::<
                GridCollectProblem,
                CollectState,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Bfs => {
            let mut search = BreadthFirstSearch::<
                GridCollectProblem,
                CollectState,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Ucs => {
            let mut search = UniformCostSearch::<
                GridCollectProblem,
                CollectState,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::Greedy => {
            let mut search = GreedySearch::<
                GridCollectProblem,
                NearestChainHeuristic,
                CollectState,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
        Algorithm::AStar => {
            let mut search = AStarSearch::<
                GridCollectProblem,
                NearestChainHeuristic,
                CollectState,
                GridMove,
                GridCost,
            >::new(problem);
            let path = search.find_first();
            writeln!(out, "*** Stats")?;
            search.write_memory_stats(&mut *out)?;
            path
        }
    };

    write_path(out, path)
}

fn main() -> std::io::Result<()> {
    #[cfg(feature = "coz_profile")]
    coz::thread_init();
    #[cfg(feature = "mem_profile")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();
    args.color.write_global();
    println!("Logging to {:?}", args.output.green());

    let file = File::create(&args.output)?;
    let mut out = BufWriter::new(file);

    let nav_demo = indoc! {"
        #######
        #S    #
        # ### #
        #   #G#
        #######
    "};
    let collect_demo = indoc! {"
        %%%%%%%
        %S * *%
        %  %% %
        %*    %
        %%%%%%%
    "};

    writeln!(out, "** Demo problem")?;
    match args.mode {
        Mode::Nav => {
            let problem = GridNavProblem::try_from(nav_demo).unwrap();
            writeln!(out, "#+begin_quote\n{problem}\n#+end_quote")?;
            solve_nav(&mut out, args.algorithm, problem)?;
        }
        Mode::Collect => {
            let problem = GridCollectProblem::try_from(collect_demo).unwrap();
            writeln!(out, "#+begin_quote\n{problem}\n#+end_quote")?;
            solve_collect(&mut out, args.algorithm, problem)?;
        }
    }

    for p in &args.problems {
        writeln!(out, "** Map {p:?}")?;

        match args.mode {
            Mode::Nav => {
                let problem = match GridNavProblem::try_from(p.as_path()) {
                    Ok(problem) => problem,
                    Err(e) => {
                        println!("Skipping {p:?}: {}", e.red());
                        writeln!(out, "Skipped: {e}")?;
                        continue;
                    }
                };
                writeln!(out, "#+begin_quote\n{}\n#+end_quote", problem.world())?;

                for seed in tqdm(0..args.instances) {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    writeln!(out, "*** Instance {seed}")?;
                    match problem.randomize(&mut rng) {
                        Some(instance) => {
                            writeln!(out, "#+begin_quote\n{instance}\n#+end_quote")?;
                            solve_nav(&mut out, args.algorithm, instance)?;
                        }
                        None => {
                            writeln!(out, "FIXME Failed to randomize with seed {seed}")?;
                        }
                    }
                }
            }
            Mode::Collect => {
                let problem = match GridCollectProblem::try_from(p.as_path()) {
                    Ok(problem) => problem,
                    Err(e) => {
                        println!("Skipping {p:?}: {}", e.red());
                        writeln!(out, "Skipped: {e}")?;
                        continue;
                    }
                };
                writeln!(out, "#+begin_quote\n{}\n#+end_quote", problem.world())?;

                for seed in tqdm(0..args.instances) {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    writeln!(out, "*** Instance {seed}")?;
                    match problem.randomize(&mut rng, RANDOM_TARGETS) {
                        Some(instance) => {
                            writeln!(out, "#+begin_quote\n{instance}\n#+end_quote")?;
                            solve_collect(&mut out, args.algorithm, instance)?;
                        }
                        None => {
                            writeln!(out, "FIXME Failed to randomize with seed {seed}")?;
                        }
                    }
                }
            }
        }
    }

    out.flush()?;
    println!("{}", "Done".green());
    Ok(())
}
