//! End-to-end checks of the named business reports against a fixed dataset

mod common;

use pretty_assertions::assert_eq;
use salesrank::engine::{Report, ReportOptions, ResultSet, Value, FIRST_SALE, LAST_SALE};

fn run(report: Report) -> ResultSet {
    report.run(&common::retail_sales(), &ReportOptions::default()).unwrap()
}

#[test]
fn test_total_per_category() {
    let result = run(Report::TotalPerCategory);

    assert_eq!(
        result.to_strings(),
        vec![
            vec!["Beauty", "2550.00"],
            vec!["Clothing", "4125.00"],
            vec!["Electronics", "1110.00"],
        ]
    );
}

#[test]
fn test_gender_by_category() {
    let result = run(Report::GenderByCategory);

    assert_eq!(result.columns, vec!["category", "gender", "total_trans"]);
    assert_eq!(
        result.to_strings(),
        vec![
            vec!["Beauty", "Female", "2"],
            vec!["Beauty", "Male", "1"],
            vec!["Clothing", "Female", "1"],
            vec!["Clothing", "Male", "3"],
            vec!["Electronics", "Female", "2"],
            vec!["Electronics", "Male", "1"],
        ]
    );
}

#[test]
fn test_top_three_hours() {
    let result = run(Report::TopHours);

    // Hours 10, 11, 14, 17, 9, 21 occur once; 18 and 19 twice
    assert_eq!(result.len(), 3);
    assert_eq!(result.column_values("hour"), vec![Value::Integer(19), Value::Integer(18), Value::Integer(10)]);
}

#[test]
fn test_best_month_per_year() {
    let result = run(Report::BestMonthPerYear);

    assert_eq!(
        result.to_strings(),
        vec![vec!["2022", "11", "1200.00", "1"], vec!["2023", "6", "1500.00", "1"]]
    );
}

#[test]
fn test_top_five_customers() {
    let result = run(Report::TopCustomers);

    // 52: 1500 + 2000, 117: 900 + 50 + 25, 5: 1200 + 50, 8: 60 + 1000, 99: 1000
    assert_eq!(
        result.column_values("customer_id"),
        vec![Value::Integer(52), Value::Integer(5), Value::Integer(8), Value::Integer(99), Value::Integer(117)]
    );
}

#[test]
fn test_unique_customers_per_category() {
    let result = run(Report::UniqueCustomersPerCategory);

    assert_eq!(result.to_strings(), vec![vec!["Beauty", "3"], vec!["Clothing", "3"], vec!["Electronics", "3"]]);
}

#[test]
fn test_shift_distribution() {
    let result = run(Report::ShiftDistribution);

    assert_eq!(result.to_strings(), vec![vec!["Afternoon", "2"], vec!["Evening", "5"], vec!["Morning", "3"]]);
}

#[test]
fn test_first_and_last_sale() {
    let result = run(Report::FirstLastSale);

    assert_eq!(
        result.to_strings(),
        vec![vec!["180", "2022-11-05", "10:47:00", FIRST_SALE], vec!["2200", "2023-12-31", "21:30:00", LAST_SALE]]
    );
}

#[test]
fn test_json_records_round_out_report() {
    let json = run(Report::TotalPerCategory).to_json_records();

    assert_eq!(json[1]["category"], "Clothing");
    assert_eq!(json[1]["net_sale"], 4125.0);
}
