//! bidtools - bid folders and the bid list workbook, from a menu or subcommands

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use bid_tools::{
    copy_template, create_bid_folder, ensure_roots, sanitize, sync_bid_workbook,
    update_bid_status, Config, HeaderPolicy, NewBid, StatusUpdate, SyncReport,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bidtools")]
#[command(author, version, about = "Bid folder and bid list workbook tools")]
struct Cli {
    /// Root folder holding one folder per bid
    #[arg(long, default_value = "S:\\Bid Documents 2026")]
    bid_root: PathBuf,

    /// Template tree copied into new bid folders
    #[arg(
        long,
        default_value = "S:\\Bid Documents 2026\\26000 Proposal Templates\\15 - Folder Structure"
    )]
    template_root: PathBuf,

    /// Path of the bid list workbook
    #[arg(
        long,
        default_value = "S:\\Bid Documents 2026\\26000 Proposal Templates\\Bid List.xlsx"
    )]
    workbook_path: PathBuf,

    /// Name of the worksheet holding the bid list
    #[arg(long, default_value = "Bid List")]
    worksheet_name: String,

    /// Keep the existing header order, appending missing columns at the end,
    /// instead of re-laying the first columns in canonical order
    #[arg(long)]
    append_missing_headers: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new bid folder (prompts for the bid details)
    New,
    /// Sync the bid list workbook with the bid folders
    Sync,
    /// Update status fields for one bid (prompts for the values)
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config {
        bid_root: cli.bid_root,
        template_root: cli.template_root,
        workbook_path: cli.workbook_path,
        worksheet_name: cli.worksheet_name,
        header_policy: if cli.append_missing_headers {
            HeaderPolicy::AppendMissing
        } else {
            HeaderPolicy::ForceCanonicalOrder
        },
    };

    match cli.command {
        Some(Commands::New) => new_bid(&config),
        Some(Commands::Sync) => sync(&config),
        Some(Commands::Status) => update_status(&config),
        None => menu_loop(&config),
    }
}

fn menu_loop(config: &Config) -> Result<()> {
    loop {
        println!();
        println!("Bid Tools");
        println!("1) Create new bid folder");
        println!("2) Sync bid list workbook with folders");
        println!("3) Update bid status in workbook");
        println!("4) Exit");

        let choice = prompt("Choose an option (1-4)")?;
        let outcome = match choice.as_str() {
            "1" => new_bid(config),
            "2" => sync(config),
            "3" => update_status(config),
            "4" => return Ok(()),
            _ => {
                println!("Invalid option. Choose 1-4.");
                continue;
            }
        };

        // A failed operation reports and returns to the menu
        if let Err(err) = outcome {
            eprintln!("Error: {err:#}");
        }
    }
}

fn new_bid(config: &Config) -> Result<()> {
    ensure_roots(config)?;

    // Bring the workbook up to date before allocating the next number
    report_sync(&sync_bid_workbook(config)?);

    let bid = NewBid {
        initials: prompt_required("Estimator initials (ex: MD)")?,
        due_date: prompt_required("Bid due date (MM-DD, ex: 12-5)")?,
        customer: prompt_required("Customer/GC")?,
        bid_name: prompt_required("Bid name")?,
    };
    let created = create_bid_folder(config, &bid)?;

    println!();
    println!("Created new bid folder:");
    println!("{}", created.path.display());
    println!();

    if prompt_yes_no("Copy the template folder structure into it?")? {
        let copied = copy_template(&config.template_root, &created.path)?;
        println!("Copied {copied} files from the template.");
    }

    if prompt_yes_no("Update the bid list workbook now?")? {
        report_sync(&sync_bid_workbook(config)?);
    }

    println!("Open folder: {}", created.path.display());
    Ok(())
}

fn sync(config: &Config) -> Result<()> {
    report_sync(&sync_bid_workbook(config)?);
    Ok(())
}

fn update_status(config: &Config) -> Result<()> {
    let bid_number = prompt_required("Bid number to update")?;
    let update = StatusUpdate {
        status: prompt_optional("Bid status (leave blank to keep current)")?,
        proposal_date: prompt_optional("Proposal date (leave blank to keep current)")?,
        proposal_amount: prompt_optional("Proposal amount (leave blank to keep current)")?,
        award: prompt_optional("Award (leave blank to keep current)")?,
    };

    let report = update_bid_status(config, &bid_number, &update, |field, current| {
        prompt_yes_no(&format!("{field} is '{current}'. Overwrite it?")).unwrap_or(false)
    })?;

    if report.fields_written.is_empty() {
        println!("No fields changed.");
    } else {
        println!("Updated: {}", report.fields_written.join(", "));
    }
    report_save(&report.saved_to, report.read_only_fallback);
    Ok(())
}

fn report_sync(report: &SyncReport) {
    println!(
        "Bid list synchronized: {} updated, {} added, {} skipped.",
        report.stats.updated, report.stats.added, report.stats.skipped
    );
    report_save(&report.saved_to, report.read_only_fallback);
}

fn report_save(saved_to: &Path, read_only_fallback: bool) {
    if read_only_fallback {
        println!("Workbook is open by another user; saved updates to:");
        println!("{}", saved_to.display());
    }
}

// === Prompt helpers ===

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty (sanitized) value is entered
fn prompt_required(label: &str) -> Result<String> {
    loop {
        let value = sanitize(&prompt(label)?);
        if !value.is_empty() {
            return Ok(value);
        }
        println!("Value is required.");
    }
}

/// Prompt for an optional value; blank input means "leave unchanged"
fn prompt_optional(label: &str) -> Result<Option<String>> {
    let value = prompt(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Yes/no prompt defaulting to no
fn prompt_yes_no(label: &str) -> Result<bool> {
    loop {
        let raw = prompt(&format!("{label} (y/N)"))?;
        if raw.is_empty() {
            return Ok(false);
        }
        match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter Y or N (or press Enter for N)."),
        }
    }
}
