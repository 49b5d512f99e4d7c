use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use glob::glob;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use seeker::algorithms::astar::AStarSearch;
use seeker::algorithms::bfs::BreadthFirstSearch;
use seeker::algorithms::dfs::DepthFirstSearch;
use seeker::algorithms::greedy::GreedySearch;
use seeker::algorithms::ucs::UniformCostSearch;
use seeker::grid::GridCost;
use seeker::grid::GridPoint;
use seeker::problems::grid_nav::GridNavManhattanHeuristic;
use seeker::problems::grid_nav::GridNavProblem;
use seeker::problems::grid_world::GridMove;

fn dfs(problem: GridNavProblem) -> u64 {
    let mut search =
        DepthFirstSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
    u64::from(search.find_first().is_some())
}

fn bfs(problem: GridNavProblem) -> u64 {
    let mut search =
        BreadthFirstSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
    u64::from(search.find_first().is_some())
}

fn ucs(problem: GridNavProblem) -> u64 {
    let mut search =
        UniformCostSearch::<GridNavProblem, GridPoint, GridMove, GridCost>::new(problem);
    u64::from(search.find_first().is_some())
}

fn greedy(problem: GridNavProblem) -> u64 {
    let mut search = GreedySearch::<
        GridNavProblem,
        GridNavManhattanHeuristic,
        GridPoint,
        GridMove,
        GridCost,
    >::new(problem);
    u64::from(search.find_first().is_some())
}

fn astar(problem: GridNavProblem) -> u64 {
    let mut search = AStarSearch::<
        GridNavProblem,
        GridNavManhattanHeuristic,
        GridPoint,
        GridMove,
        GridCost,
    >::new(problem);
    u64::from(search.find_first().is_some())
}

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Search");

    for path in glob("data/problems/*.txt")
        .unwrap()
        .filter_map(std::result::Result::ok)
    {
        let name = path.file_name().unwrap().to_str().unwrap();
        let path: &std::path::Path = path.as_ref();
        let base_problem = GridNavProblem::try_from(path).unwrap();
        let (x, y) = base_problem.world().dimensions();

        for i in 0..3 {
            let instance_name = format!("{name}[{x}x{y}]:{i}");
            let mut rng = ChaCha8Rng::seed_from_u64(i);

            if let Some(problem) = base_problem.randomize(&mut rng) {
                group.bench_with_input(BenchmarkId::new("DFS", &instance_name), &problem, |b, p| {
                    b.iter(|| dfs(p.clone()))
                });
                group.bench_with_input(BenchmarkId::new("BFS", &instance_name), &problem, |b, p| {
                    b.iter(|| bfs(p.clone()))
                });
                group.bench_with_input(BenchmarkId::new("UCS", &instance_name), &problem, |b, p| {
                    b.iter(|| ucs(p.clone()))
                });
                group.bench_with_input(
                    BenchmarkId::new("Greedy", &instance_name),
                    &problem,
                    |b, p| b.iter(|| greedy(p.clone())),
                );
                group.bench_with_input(BenchmarkId::new("A*", &instance_name), &problem, |b, p| {
                    b.iter(|| astar(p.clone()))
                });
            }
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
