use csv::Reader;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::ParseError;
use crate::form::CategorySubmission;
use crate::schedule::category::{CategoryKind, SplitRatio};

/// Parses an optional minutes column; an empty cell is `None`
fn parse_minutes(value: &str, row: usize, column: &str) -> Result<Option<u32>, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ParseError::InvalidRow {
        row,
        message: format!("invalid {} '{}'", column, value),
    })
}

/// Parses the split ratio column ("half" / "two_thirds" / "2/3")
fn parse_split(value: &str) -> SplitRatio {
    match value.trim().to_lowercase().as_str() {
        "two_thirds" | "2/3" | "two-thirds" => SplitRatio::TwoThirds,
        _ => SplitRatio::Half,
    }
}

/// Splits the `;`-separated team names column
fn parse_names(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value.split(';').map(|n| n.trim().to_string()).collect()
}

/// Loads category submissions from a CSV file
pub fn load_categories<P: AsRef<Path>>(csv_path: P) -> Result<Vec<CategorySubmission>, ParseError> {
    let file = std::fs::File::open(csv_path)?;
    load_categories_from_reader(file)
}

/// Loads category submissions from any CSV source.
///
/// Required columns: `category`, `participants`, `fields`. Optional: `start_time`,
/// `names`, `half_time_interval`, `lunch_break`, `split`, `total_game_time`.
/// A later row for the same category replaces an earlier one. The result is in
/// category order (U8, U10, U12).
pub fn load_categories_from_reader<R: Read>(source: R) -> Result<Vec<CategorySubmission>, ParseError> {
    let mut reader = Reader::from_reader(source);
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));

    let category_col = column("category").ok_or(ParseError::InvalidRow {
        row: 0,
        message: "missing 'category' column".to_string(),
    })?;
    let participants_col = column("participants").ok_or(ParseError::InvalidRow {
        row: 0,
        message: "missing 'participants' column".to_string(),
    })?;
    let fields_col = column("fields").ok_or(ParseError::InvalidRow {
        row: 0,
        message: "missing 'fields' column".to_string(),
    })?;
    let start_col = column("start_time");
    let names_col = column("names");
    let interval_col = column("half_time_interval");
    let lunch_col = column("lunch_break");
    let split_col = column("split");
    let budget_col = column("total_game_time");

    let mut by_category: HashMap<CategoryKind, CategorySubmission> = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 1;
        let get = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("").trim();

        let category: CategoryKind = get(Some(category_col))
            .parse()
            .map_err(|message| ParseError::InvalidRow { row, message })?;

        let participant_count: usize = get(Some(participants_col)).parse().map_err(|_| ParseError::InvalidRow {
            row,
            message: format!("invalid participant count '{}'", get(Some(participants_col))),
        })?;
        let field_count: usize = get(Some(fields_col)).parse().map_err(|_| ParseError::InvalidRow {
            row,
            message: format!("invalid field count '{}'", get(Some(fields_col))),
        })?;

        let start_time = match get(start_col) {
            "" => "09:00".to_string(),
            time => time.to_string(),
        };
        let half_time_interval = parse_minutes(get(interval_col), row, "half_time_interval")?;
        let lunch_break = parse_minutes(get(lunch_col), row, "lunch_break")?;
        let total_game_time = parse_minutes(get(budget_col), row, "total_game_time")?;

        by_category.insert(
            category,
            CategorySubmission {
                category,
                participant_count,
                field_count,
                start_time,
                participant_names: parse_names(get(names_col)),
                half_time_interval_minutes: half_time_interval.unwrap_or(0),
                lunch_break_minutes: lunch_break.unwrap_or(0),
                split_ratio: parse_split(get(split_col)),
                total_game_time_minutes: total_game_time,
            },
        );
    }

    Ok(CategoryKind::ALL
        .iter()
        .filter_map(|kind| by_category.remove(kind))
        .collect())
}
