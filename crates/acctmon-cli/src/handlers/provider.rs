use crate::handlers::use_color;
use crate::types::OutputFormat;
use acctmon_providers::all_providers;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn handle_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let providers: Vec<_> = all_providers()
                .iter()
                .map(|p| {
                    json!({
                        "kind": p.name,
                        "description": p.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }
        OutputFormat::Plain => {
            let color = use_color();
            for provider in all_providers() {
                if color {
                    println!("{:<10} {}", provider.name.bold(), provider.description);
                } else {
                    println!("{:<10} {}", provider.name, provider.description);
                }
            }
        }
    }
    Ok(())
}
