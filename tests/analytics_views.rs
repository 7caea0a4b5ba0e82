use cricket_analytics::aggregate::{aggregate_by_bowler, aggregate_by_phase, Metrics};
use cricket_analytics::ingestion::load_deliveries;
use cricket_analytics::query::{
    self, distinct_batters, distinct_bowlers, distinct_seasons, distinct_teams, DeliveryFilter,
    ViewData, ViewMode,
};
use cricket_analytics::types::{DeliveryTable, Phase};

fn fixture_table() -> DeliveryTable {
    load_deliveries("tests/fixtures/deliveries.csv").unwrap()
}

#[test]
fn selection_choices_are_sorted_and_canonical() {
    let table = fixture_table();

    assert_eq!(distinct_seasons(table.deliveries()), vec!["2016", "2024"]);
    assert_eq!(
        distinct_teams(table.deliveries()),
        vec![
            "Delhi Capitals",
            "Mumbai Indians",
            "Punjab Kings",
            "Rising Pune Supergiants",
        ]
    );

    // The row with no recorded batter contributes nothing.
    let batters = distinct_batters(table.deliveries());
    assert!(batters.contains(&"SE Marsh".to_string()));
    assert!(!batters.contains(&String::new()));
    assert!(batters.windows(2).all(|w| w[0] < w[1]));

    let bowlers = distinct_bowlers(table.deliveries());
    assert!(bowlers.contains(&"A Mishra".to_string()));
    assert!(bowlers.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn team_in_season_splits_roles_disjointly() {
    let table = fixture_table();
    let view = query::team_in_season(&table, "2016", "Rising Pune Supergiants");

    assert_eq!(view.batting.len(), 4);
    assert_eq!(view.bowling.len(), 2);

    // Disjoint roles whose union is every 2016 row involving the team.
    let involving: usize = table
        .deliveries()
        .iter()
        .filter(|d| {
            d.season == "2016"
                && (d.batting_team == "Rising Pune Supergiants"
                    || d.bowling_team == "Rising Pune Supergiants")
        })
        .count();
    assert_eq!(view.batting.len() + view.bowling.len(), involving);
    for b in &view.batting {
        assert_ne!(b.batting_team, b.bowling_team);
    }
}

#[test]
fn team_overview_metrics_match_the_fixture() {
    let table = fixture_table();
    let view = query::team_in_season(&table, "2016", "Rising Pune Supergiants");

    let batting = Metrics::of(view.batting.iter().copied());
    assert_eq!(batting.matches, 1);
    assert_eq!(batting.runs_total, 11);
    assert_eq!(batting.batters_used, 2);

    let bowling = Metrics::of(view.bowling.iter().copied());
    assert_eq!(bowling.wickets, 1);
    assert_eq!(bowling.bowlers_used, 1);
}

#[test]
fn batter_lab_strike_rate_gates_only_balls_faced() {
    let table = fixture_table();
    let view = query::team_in_season(&table, "2016", "Rising Pune Supergiants");
    let rahane: Vec<_> = view
        .batting
        .iter()
        .copied()
        .filter(|d| d.batter.as_deref() == Some("A Rahane"))
        .collect();

    let m = Metrics::of(rahane);
    // One legal ball for 4, plus a wide: the wide is no ball faced but its runs count.
    assert_eq!(m.balls, 1);
    assert_eq!(m.runs_batter, 4);
    assert_eq!(m.strike_rate(), Some(400.0));
}

#[test]
fn bowler_lab_economy_uses_overs_from_legal_balls() {
    let table = fixture_table();
    let view = query::team_in_season(&table, "2016", "Mumbai Indians");
    let rows = aggregate_by_bowler(&view.bowling);

    let bumrah = rows.iter().find(|r| r.key == "JJ Bumrah").unwrap();
    // Two legal balls, one wide: 5 runs conceded over 2/6 overs.
    assert_eq!(bumrah.metrics.balls, 2);
    assert_eq!(bumrah.metrics.runs_bowler, 5);
    assert_eq!(bumrah.metrics.economy(), Some(15.0));
    assert_eq!(bumrah.metrics.wickets, 1);
}

#[test]
fn phase_breakdown_contains_only_present_phases() {
    let table = fixture_table();
    let subset = query::filter_by(
        &table,
        &DeliveryFilter::new()
            .season("2016")
            .batting_team("Delhi Capitals"),
    );
    let rows = aggregate_by_phase(&subset);

    // Delhi Capitals batted only in the middle overs that season.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, Phase::MiddleOvers);
    assert_eq!(rows[0].metrics.runs_total, 1);
}

#[test]
fn matchup_spans_all_seasons() {
    let table = fixture_table();
    let rows = query::matchup(&table, "SE Marsh", "JJ Bumrah");
    assert_eq!(rows.len(), 2);

    let m = Metrics::of(rows);
    assert_eq!(m.runs_batter, 6);
    assert_eq!(m.wickets, 1);
    assert_eq!(m.strike_rate(), Some(300.0));
}

#[test]
fn empty_matchup_reports_unavailable_ratios_without_failing() {
    let table = fixture_table();
    let rows = query::matchup(&table, "MS Dhoni", "Arshdeep Singh");
    assert!(rows.is_empty());

    let m = Metrics::of(rows);
    assert_eq!(m.matches, 0);
    assert_eq!(m.strike_rate(), None);
    assert_eq!(m.economy(), None);
}

#[test]
fn view_mode_dispatch_drives_both_surfaces() {
    let table = fixture_table();

    let team = ViewMode::TeamAnalytics {
        season: "2024".to_string(),
        team: "Punjab Kings".to_string(),
    };
    match query::run_view(&table, &team) {
        ViewData::Team(view) => {
            assert_eq!(view.batting.len(), 2);
            assert_eq!(view.bowling.len(), 2);
        }
        ViewData::Matchup(_) => panic!("expected team view"),
    }

    let matchup = ViewMode::Matchup {
        batter: "RG Sharma".to_string(),
        bowler: "Arshdeep Singh".to_string(),
    };
    match query::run_view(&table, &matchup) {
        ViewData::Matchup(rows) => {
            let m = Metrics::of(rows);
            // A wide plus a legal ball: 5 runs off 1 ball faced.
            assert_eq!(m.balls, 1);
            assert_eq!(m.runs_batter, 5);
            assert_eq!(m.strike_rate(), Some(500.0));
        }
        ViewData::Team(_) => panic!("expected matchup view"),
    }
}

#[test]
fn metric_rows_serialize_for_the_presentation_host() {
    let table = fixture_table();
    let subset = query::filter_by(&table, &DeliveryFilter::new().season("2016"));
    let rows = aggregate_by_phase(&subset);
    let json = serde_json::to_value(&rows).unwrap();

    let arr = json.as_array().unwrap();
    assert_eq!(arr[0]["key"], "Powerplay");
    assert!(arr[0]["metrics"]["runs_total"].is_i64());
}
