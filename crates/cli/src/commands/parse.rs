//! Parse command handler.
//!
//! Shows the retrieval filters a question maps to.

use super::print_json;
use clap::Args;
use olympia_core::AppResult;
use olympia_prompt::{parse_query, SearchFilter};
use serde_json::json;

/// Extract retrieval filters from a question
#[derive(Args, Debug)]
pub struct ParseCommand {
    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ParseCommand {
    pub fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing parse command");

        let parsed = parse_query(&self.query.join(" "));
        let filter = SearchFilter::from_parsed(&parsed);

        if self.json {
            return print_json(&json!({
                "query": parsed,
                "filter": filter,
            }));
        }

        println!("Query:         {}", parsed.normalized_query);
        println!("Category:      {}", display_or_dash(parsed.category.map(|c| c.to_string())));
        println!("Subcategory:   {}", display_or_dash(parsed.subcategory.clone()));
        println!("Year:          {}", display_or_dash(parsed.year.map(|y| y.to_string())));
        println!("Question code: {}", display_or_dash(parsed.question_code.clone()));
        println!("Question num:  {}", display_or_dash(parsed.question_num.clone()));

        Ok(())
    }
}

fn display_or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
