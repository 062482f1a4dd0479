// askql/src/commands/render.rs
//
// Terminal rendering of generated SQL and outcomes.

use askql_core::application::Answer;
use askql_core::domain::QueryOutcome;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

pub fn print_sql(sql: &str) {
    println!("\n📝 Generated SQL Query");
    for line in sql.lines() {
        println!("   {}", line);
    }
}

pub fn print_outcome(outcome: &QueryOutcome) {
    println!("\n📊 Query Results");
    match outcome {
        QueryOutcome::Rows { rows, .. } if rows.is_empty() => {
            println!("   ℹ️  No records found");
        }
        QueryOutcome::Rows { columns, rows } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(columns);
            for row in rows {
                table.add_row(row.iter().map(ToString::to_string));
            }
            println!("{table}");
            println!("   ({} rows)", rows.len());
        }
        QueryOutcome::Executed { message } => {
            println!("   ✅ {}", message);
        }
    }
}

/// Prints the answer; returns false when the statement failed.
pub fn print_answer(answer: &Answer) -> bool {
    print_sql(&answer.sql);

    if let Some(outcome) = &answer.outcome {
        print_outcome(outcome);
    }
    if let Some(error) = &answer.error {
        eprintln!("\n❌ {}", error);
        return false;
    }
    true
}
