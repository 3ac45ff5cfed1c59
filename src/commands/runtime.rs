use crate::cli::{Cli, Commands};
use crate::domain::models::{demo_roster, Record};
use crate::services::batch::{report_for, validate_batch};
use crate::services::input::read_records;
use crate::services::output::{print_one, print_out};
use tracing::info;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check { user } => {
            let record = Record::new(user.name.clone(), user.age);
            let report = report_for(&record);
            print_one(cli.json, report, |r| r.message.clone())?;
        }
        Commands::Demo { user } => {
            let mut records = demo_roster();
            if let (Some(name), Some(age)) = (&user.name, user.age) {
                records.push(Record::new(name.clone(), age));
            }
            info!(count = records.len(), "validating demo roster");
            let reports = validate_batch(&records);
            print_out(cli.json, &reports, |r| r.message.clone())?;
        }
        Commands::Batch => {
            let records = read_records(std::io::stdin().lock())?;
            info!(count = records.len(), "validating records from stdin");
            let reports = validate_batch(&records);
            print_out(cli.json, &reports, |r| r.message.clone())?;
        }
    }

    Ok(())
}
