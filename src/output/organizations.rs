//! Organization output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, render_json, render_yaml, RenderResult};
use crate::cli::OutputFormat;
use crate::flowdock::Organization;

/// Serializable organization for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableOrganization {
    name: String,
    parameterized_name: String,
    users: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
}

impl From<&Organization> for SerializableOrganization {
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            parameterized_name: org.parameterized_name.clone(),
            users: org.member_count(),
            id: org.id,
            active: org.active,
        }
    }
}

/// Render organizations (name, slug, member count) in the requested format
pub fn render_organizations(orgs: &[Organization], format: OutputFormat) -> RenderResult {
    match format {
        OutputFormat::Table => Ok(render_table(orgs)),
        OutputFormat::Csv => Ok(render_csv(orgs)),
        OutputFormat::Json => render_json(&serializable(orgs)),
        OutputFormat::Yaml => render_yaml(&serializable(orgs)),
    }
}

/// Print organizations to stdout
pub fn output_organizations(
    orgs: &[Organization],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_organizations(orgs, format)?);
    Ok(())
}

fn serializable(orgs: &[Organization]) -> Vec<SerializableOrganization> {
    orgs.iter().map(SerializableOrganization::from).collect()
}

fn render_table(orgs: &[Organization]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Name", "Parameterized Name", "Users"]);

    for org in orgs {
        table.add_row(vec![
            org.name.clone(),
            org.parameterized_name.clone(),
            org.member_count().to_string(),
        ]);
    }

    format!("{table}\n\nTotal: {} organizations", orgs.len())
}

fn render_csv(orgs: &[Organization]) -> String {
    let mut out = String::from("name,parameterized_name,users");
    for org in orgs {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{}",
            escape_csv(&org.name),
            escape_csv(&org.parameterized_name),
            org.member_count()
        ));
    }
    out
}
