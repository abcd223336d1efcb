//! Unit tests for the best-first itinerary search.

use super::*;
use crate::domain::{Category, City, Coordinates, Edge, Rating};
use crate::graph::{MemoryGraph, seed};
use crate::store::SqliteStore;

fn city(name: &str, daily_cost: u32, rating: i64, category: Category) -> City {
    City::new(
        name,
        daily_cost,
        Rating::new(rating).unwrap(),
        category,
        Coordinates::new(0.0, 0.0).unwrap(),
    )
    .unwrap()
}

fn request(start: &str, budget: i64, days: i64, preference: Category) -> TravelRequest {
    TravelRequest::new("tester", start, budget, days, preference).unwrap()
}

fn world() -> MemoryGraph {
    let data = seed::world().unwrap();
    MemoryGraph::from_parts(data.cities, data.edges)
}

fn path_of(result: &SearchResult) -> Vec<&str> {
    result
        .itinerary
        .as_ref()
        .map(|it| it.cities().iter().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn single_hop_to_neighbor() {
    let graph = MemoryGraph::builder()
        .city(city("X", 5, 5, Category::Beach))
        .city(city("Y", 30, 2, Category::Luxury))
        .edge(Edge::new("X", "Y", 10))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("X", 100, 1, Category::Beach))
        .unwrap();

    assert_eq!(path_of(&result), vec!["X", "Y"]);
    // Travel 10 plus X's daily cost; Y's own daily cost is not charged.
    assert_eq!(result.itinerary.unwrap().total_cost(), 15);
}

#[test]
fn dead_end_start_finds_nothing() {
    let graph = MemoryGraph::builder()
        .city(city("Lonely", 50, 4, Category::Adventure))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("Lonely", 1000, 2, Category::Adventure))
        .unwrap();

    assert!(!result.found());
    assert_eq!(result.stats.states_expanded, 1);
}

#[test]
fn over_budget_edge_pruned() {
    let graph = MemoryGraph::builder()
        .city(city("X", 0, 3, Category::Beach))
        .city(city("Y", 0, 3, Category::Beach))
        .edge(Edge::new("X", "Y", 200))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("X", 100, 1, Category::Beach))
        .unwrap();

    assert!(!result.found());
    assert_eq!(result.stats.budget_pruned, 1);
    assert_eq!(result.stats.states_pushed, 1);
}

/// Two equally priced next stops: A is Beach rated 3, B is Cultural rated 4.
/// The second hop is dear enough that both A and B are expanded before any
/// final state is taken. B's edge is listed first.
fn preference_graph() -> MemoryGraph {
    MemoryGraph::builder()
        .city(city("S", 10, 3, Category::Luxury))
        .city(city("A", 10, 3, Category::Beach))
        .city(city("B", 10, 4, Category::Cultural))
        .city(city("TA", 10, 3, Category::Luxury))
        .city(city("TB", 10, 3, Category::Luxury))
        .edge(Edge::new("S", "B", 10))
        .edge(Edge::new("S", "A", 10))
        .edge(Edge::new("A", "TA", 100))
        .edge(Edge::new("B", "TB", 100))
        .build()
}

#[test]
fn category_bonus_overturns_rating() {
    let graph = preference_graph();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("S", 1000, 2, Category::Beach))
        .unwrap();

    // A@1 and B@1 both score 20 - 75 + 100 = 45.
    // TA: 130 - 75 - 40 + 50 = 65. TB: 130 - 100 + 50 = 80.
    assert_eq!(path_of(&result), vec!["S", "A", "TA"]);
    assert_eq!(result.itinerary.unwrap().total_cost(), 130);
    // S, B and A are expanded before TA is taken.
    assert_eq!(result.stats.states_expanded, 4);
}

#[test]
fn rating_wins_without_matching_category() {
    let graph = preference_graph();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("S", 1000, 2, Category::Historical))
        .unwrap();

    // TA: 130 - 75 + 50 = 105. TB stays at 80.
    assert_eq!(path_of(&result), vec!["S", "B", "TB"]);
    assert_eq!(result.itinerary.unwrap().total_cost(), 130);
}

#[test]
fn world_three_city_trip() {
    let graph = world();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("Paris", 1000, 2, Category::Cultural))
        .unwrap();

    let itinerary = result.itinerary.unwrap();
    assert_eq!(itinerary.cities(), ["Paris", "Rome", "Venice"]);
    assert_eq!(itinerary.total_cost(), 290);
    assert_eq!(itinerary.result_string(), "Paris → Rome → Venice | $290");
}

#[test]
fn budget_is_inclusive() {
    let graph = world();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let exact = planner
        .search(&request("Paris", 290, 2, Category::Cultural))
        .unwrap();
    assert_eq!(exact.itinerary.unwrap().total_cost(), 290);

    let short = planner
        .search(&request("Paris", 289, 2, Category::Cultural))
        .unwrap();
    assert!(!short.found());
}

#[test]
fn largest_budget_is_accepted() {
    let graph = world();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("Paris", i64::MAX, 2, Category::Cultural))
        .unwrap();

    assert_eq!(path_of(&result), vec!["Paris", "Rome", "Venice"]);
    assert_eq!(result.stats.budget_pruned, 0);
}

#[test]
fn unknown_start_city_is_an_error() {
    let graph = world();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner.search(&request("Atlantis", 1000, 2, Category::Beach));

    assert_eq!(
        result,
        Err(PlanError::UnknownStartCity("Atlantis".to_string()))
    );
}

#[test]
fn edge_to_missing_city_is_skipped() {
    let graph = MemoryGraph::builder()
        .city(city("X", 5, 3, Category::Beach))
        .city(city("Y", 5, 3, Category::Beach))
        .edge(Edge::new("X", "Ghost", 1))
        .edge(Edge::new("X", "Y", 50))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("X", 100, 1, Category::Beach))
        .unwrap();

    assert_eq!(path_of(&result), vec!["X", "Y"]);
    assert_eq!(result.stats.missing_cities, 1);
}

#[test]
fn equal_scores_resolve_in_edge_order() {
    let twins = |first: &str, second: &str| {
        MemoryGraph::builder()
            .city(city("S", 0, 3, Category::Beach))
            .city(city("P", 0, 3, Category::Beach))
            .city(city("Q", 0, 3, Category::Beach))
            .edge(Edge::new("S", first, 10))
            .edge(Edge::new("S", second, 10))
            .build()
    };
    let config = SearchConfig::default();
    let req = request("S", 100, 1, Category::Beach);

    let graph = twins("P", "Q");
    let result = Planner::new(&graph, &config).search(&req).unwrap();
    assert_eq!(path_of(&result), vec!["S", "P"]);

    let graph = twins("Q", "P");
    let result = Planner::new(&graph, &config).search(&req).unwrap();
    assert_eq!(path_of(&result), vec!["S", "Q"]);
}

#[test]
fn first_terminal_in_score_order_wins_over_cheaper_path() {
    // Through A the trip costs 100, through B it is free, but A's rating
    // and category reward put it first.
    let graph = MemoryGraph::builder()
        .city(city("S", 0, 3, Category::Luxury))
        .city(city("A", 100, 5, Category::Beach))
        .city(city("B", 0, 1, Category::Cultural))
        .city(city("T", 0, 3, Category::Luxury))
        .edge(Edge::new("S", "A", 0))
        .edge(Edge::new("S", "B", 0))
        .edge(Edge::new("A", "T", 0))
        .edge(Edge::new("B", "T", 0))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("S", 500, 2, Category::Beach))
        .unwrap();

    assert_eq!(path_of(&result), vec!["S", "A", "T"]);
    assert_eq!(result.itinerary.unwrap().total_cost(), 100);
}

#[test]
fn revisits_cities_on_later_days() {
    let graph = MemoryGraph::builder()
        .city(city("A", 10, 3, Category::Beach))
        .city(city("B", 20, 3, Category::Beach))
        .edge(Edge::new("A", "B", 1))
        .edge(Edge::new("B", "A", 1))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("A", 1000, 5, Category::Beach))
        .unwrap();

    assert_eq!(path_of(&result), vec!["A", "B", "A", "B", "A", "B"]);
    assert_eq!(result.itinerary.unwrap().total_cost(), 11 + 21 + 11 + 21 + 11);
}

#[test]
fn converging_paths_expand_once_per_day() {
    // S -> A -> C and S -> B -> C both reach C on day 2.
    let graph = MemoryGraph::builder()
        .city(city("S", 0, 3, Category::Beach))
        .city(city("A", 0, 3, Category::Beach))
        .city(city("B", 0, 3, Category::Beach))
        .city(city("C", 0, 3, Category::Beach))
        .edge(Edge::new("S", "A", 1))
        .edge(Edge::new("S", "B", 1))
        .edge(Edge::new("A", "C", 1))
        .edge(Edge::new("B", "C", 1))
        .build();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // Three days, but C is a dead end, so nothing completes.
    let result = planner
        .search(&request("S", 1000, 3, Category::Beach))
        .unwrap();

    assert!(!result.found());
    // S@0, A@1, B@1, C@2 each expanded once; the second C@2 is skipped.
    assert_eq!(result.stats.states_expanded, 4);
    assert_eq!(result.stats.duplicates_skipped, 1);
}

#[test]
fn expansion_limit_truncates_search() {
    let graph = world();
    let config = SearchConfig::default().with_max_expansions(1);
    let planner = Planner::new(&graph, &config);

    let result = planner
        .search(&request("Paris", 1000, 2, Category::Cultural))
        .unwrap();

    assert!(!result.found());
    assert!(result.stats.truncated);
    assert_eq!(result.stats.states_expanded, 1);
}

#[test]
fn custom_weights_change_ranking() {
    // The same Beach request that picks A with default weights picks B once
    // the category bonus is zeroed.
    let graph = preference_graph();
    let req = request("S", 1000, 2, Category::Beach);

    let defaults = SearchConfig::default();
    let result = Planner::new(&graph, &defaults).search(&req).unwrap();
    assert_eq!(path_of(&result), vec!["S", "A", "TA"]);

    let no_bonus = SearchConfig::new(25, 0, 50, 1000);
    let result = Planner::new(&graph, &no_bonus).search(&req).unwrap();
    assert_eq!(path_of(&result), vec!["S", "B", "TB"]);
}

#[test]
fn repeated_searches_agree() {
    let graph = world();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);
    let req = request("New York", 2000, 4, Category::Historical);

    let first = planner.search(&req).unwrap();
    let second = planner.search(&req).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.itinerary.as_ref().map(Itinerary::days), Some(4));
}

#[test]
fn sqlite_store_matches_memory_graph() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.insert_dataset(&seed::world().unwrap()).unwrap();
    let memory = world();
    let config = SearchConfig::default();

    for (start, days, preference) in [
        ("Paris", 2, Category::Cultural),
        ("New York", 3, Category::Beach),
        ("Tokyo", 2, Category::Luxury),
        ("Amsterdam", 2, Category::Historical),
    ] {
        let req = request(start, 1500, days, preference);
        let from_sqlite = Planner::new(&store, &config).search(&req).unwrap();
        let from_memory = Planner::new(&memory, &config).search(&req).unwrap();
        assert_eq!(from_sqlite.itinerary, from_memory.itinerary, "start {start}");
    }
}

#[test]
fn works_with_trait_objects() {
    let graph = world();
    let dynamic: &dyn CityGraph = &graph;
    let config = SearchConfig::default();
    let planner = Planner::new(dynamic, &config);

    let result = planner
        .search(&request("Paris", 1000, 1, Category::Cultural))
        .unwrap();

    assert_eq!(path_of(&result), vec!["Paris", "Rome"]);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// (daily cost, rating, category index) per city
    type CitySpec = (u32, i64, usize);

    #[derive(Debug, Clone)]
    struct Case {
        cities: Vec<CitySpec>,
        edges: Vec<(usize, usize, u32)>,
        days: u32,
        budget: u64,
        preference: usize,
    }

    fn cases() -> impl Strategy<Value = Case> {
        (1usize..7).prop_flat_map(|n| {
            (
                prop::collection::vec((0u32..50, 1i64..=5, 0usize..5), n),
                prop::collection::vec((0..n, 0..n, 0u32..60), 0..20),
                1u32..5,
                1u64..400,
                0usize..5,
            )
                .prop_map(|(cities, edges, days, budget, preference)| Case {
                    cities,
                    edges,
                    days,
                    budget,
                    preference,
                })
        })
    }

    fn name(i: usize) -> String {
        format!("C{i}")
    }

    fn build(case: &Case) -> MemoryGraph {
        let cities = case
            .cities
            .iter()
            .enumerate()
            .map(|(i, &(daily, rating, cat))| city(&name(i), daily, rating, Category::ALL[cat]));
        let edges = case
            .edges
            .iter()
            .map(|&(from, to, cost)| Edge::new(name(from), name(to), cost));
        MemoryGraph::from_parts(cities, edges)
    }

    fn run(case: &Case, graph: &MemoryGraph) -> SearchResult {
        let config = SearchConfig::default();
        let req = request(
            &name(0),
            case.budget as i64,
            i64::from(case.days),
            Category::ALL[case.preference],
        );
        Planner::new(graph, &config).search(&req).unwrap()
    }

    /// Cheapest cost of any walk of exactly `days` moves from C0.
    fn cheapest_exact(case: &Case) -> Option<u64> {
        let n = case.cities.len();
        let mut best: Vec<Option<u64>> = vec![None; n];
        best[0] = Some(0);
        for _ in 0..case.days {
            let mut next: Vec<Option<u64>> = vec![None; n];
            for &(from, to, cost) in &case.edges {
                if let Some(so_far) = best[from] {
                    let total = so_far + u64::from(cost) + u64::from(case.cities[from].0);
                    next[to] = Some(next[to].map_or(total, |t: u64| t.min(total)));
                }
            }
            best = next;
        }
        best.into_iter().flatten().min()
    }

    proptest! {
        /// A found itinerary spans exactly the requested days, starts at the
        /// start city, follows real edges and stays within budget
        #[test]
        fn found_itineraries_are_valid(case in cases()) {
            let graph = build(&case);
            let result = run(&case, &graph);

            if let Some(it) = &result.itinerary {
                prop_assert_eq!(it.cities().len(), case.days as usize + 1);
                prop_assert_eq!(it.start(), "C0");
                prop_assert!(it.total_cost() <= case.budget);

                let mut low = 0u64;
                let mut high = 0u64;
                for pair in it.cities().windows(2) {
                    let costs: Vec<u64> = graph
                        .outgoing_edges(&pair[0])
                        .iter()
                        .filter(|e| e.to == pair[1])
                        .map(|e| u64::from(e.travel_cost))
                        .collect();
                    prop_assert!(!costs.is_empty(), "no edge {} -> {}", pair[0], pair[1]);
                    let daily = u64::from(graph.lookup_city(&pair[0]).unwrap().daily_cost);
                    low += daily + costs.iter().min().copied().unwrap_or(0);
                    high += daily + costs.iter().max().copied().unwrap_or(0);
                }
                prop_assert!(low <= it.total_cost() && it.total_cost() <= high);
            }
        }

        /// When no walk of the right length fits the budget, nothing is found
        #[test]
        fn infeasible_requests_find_nothing(case in cases()) {
            let graph = build(&case);
            let result = run(&case, &graph);
            let feasible = cheapest_exact(&case).is_some_and(|c| c <= case.budget);
            if !feasible {
                prop_assert!(result.itinerary.is_none());
            }
        }

        /// Each (city, day) pair is expanded at most once
        #[test]
        fn expansions_bounded_by_state_space(case in cases()) {
            let graph = build(&case);
            let result = run(&case, &graph);
            let bound = case.cities.len() * (case.days as usize + 1);
            prop_assert!(result.stats.states_expanded <= bound);
            prop_assert!(!result.stats.truncated);
        }

        /// Identical inputs give identical outputs
        #[test]
        fn search_is_deterministic(case in cases()) {
            let first = run(&case, &build(&case));
            let second = run(&case, &build(&case));
            prop_assert_eq!(first, second);
        }
    }
}
