//! Inactive user output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, render_json, render_yaml, RenderResult};
use crate::cli::OutputFormat;
use crate::flowdock::InactiveInOrganization;

/// One flattened row per (organization, user)
#[derive(Serialize)]
struct InactiveUserRow<'a> {
    organization: &'a str,
    parameterized_name: &'a str,
    id: u64,
    email: &'a str,
    name: &'a str,
    accessed_at: Option<&'a str>,
}

fn rows(groups: &[InactiveInOrganization]) -> Vec<InactiveUserRow<'_>> {
    groups
        .iter()
        .flat_map(|g| {
            g.users.iter().map(move |u| InactiveUserRow {
                organization: &g.organization,
                parameterized_name: &g.parameterized_name,
                id: u.id,
                email: &u.email,
                name: u.display_name(),
                accessed_at: u.accessed_at.as_deref(),
            })
        })
        .collect()
}

/// Render inactive users grouped by organization
pub fn render_inactive_users(
    groups: &[InactiveInOrganization],
    format: OutputFormat,
) -> RenderResult {
    match format {
        OutputFormat::Table => Ok(render_table(groups)),
        OutputFormat::Csv => Ok(render_csv(groups)),
        OutputFormat::Json => render_json(&rows(groups)),
        OutputFormat::Yaml => render_yaml(&rows(groups)),
    }
}

/// Print inactive users to stdout
pub fn output_inactive_users(
    groups: &[InactiveInOrganization],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_inactive_users(groups, format)?);
    Ok(())
}

fn render_table(groups: &[InactiveInOrganization]) -> String {
    let total: usize = groups.iter().map(|g| g.users.len()).sum();
    if total == 0 {
        return "No inactive users found".to_string();
    }

    let mut sections = Vec::new();
    for group in groups.iter().filter(|g| !g.users.is_empty()) {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        table.set_header(vec!["Email", "Name", "Last Access"]);
        for user in &group.users {
            table.add_row(vec![user.email.as_str(), user.display_name(), user.last_access()]);
        }
        sections.push(format!("{}\n{table}", group.organization));
    }

    format!(
        "{}\n\nTotal: {} inactive users in {} organizations",
        sections.join("\n\n"),
        total,
        sections.len()
    )
}

fn render_csv(groups: &[InactiveInOrganization]) -> String {
    let mut out = String::from("organization,parameterized_name,id,email,name,accessed_at");
    for row in rows(groups) {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{}",
            escape_csv(row.organization),
            escape_csv(row.parameterized_name),
            row.id,
            escape_csv(row.email),
            escape_csv(row.name),
            escape_csv(row.accessed_at.unwrap_or(""))
        ));
    }
    out
}
