//! Sport catalog listing.

use tabled::{Table, Tabled};

use crate::app::App;
use crate::cli::{output, SportsArgs};
use crate::config::Config;
use crate::error::Result;

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Title")]
    title: String,
}

pub async fn run(config: &Config, args: &SportsArgs) -> Result<()> {
    let app = App::from_config(config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    let pb = output::spinner("Fetching sport catalog");

    if args.groups {
        let groups = match app.sport_groups().await {
            Ok(groups) => groups,
            Err(error) => {
                output::spinner_fail(&pb, "Sport catalog fetch failed");
                return Err(error);
            }
        };
        output::spinner_success(&pb, &format!("{} sport groups", groups.len()));

        if output::is_json() {
            output::json_output(serde_json::json!({ "groups": groups }));
            return Ok(());
        }

        output::section("Sport groups");
        for group in &groups {
            println!("  {group}");
        }
        println!();
        output::hint("scan one with `freeroll scan --group <name>`");
        return Ok(());
    }

    let sports = match app.active_sports().await {
        Ok(sports) => sports,
        Err(error) => {
            output::spinner_fail(&pb, "Sport catalog fetch failed");
            return Err(error);
        }
    };
    output::spinner_success(&pb, &format!("{} active competitions", sports.len()));

    if output::is_json() {
        output::json_output(serde_json::to_value(&sports)?);
        return Ok(());
    }

    output::section("Active competitions");
    let rows: Vec<SportRow> = sports
        .into_iter()
        .map(|sport| SportRow {
            key: sport.key,
            group: sport.group,
            title: sport.title,
        })
        .collect();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    Ok(())
}
