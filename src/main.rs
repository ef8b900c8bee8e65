use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use school_fees::application::command::{Command, Outcome};
use school_fees::application::ledger::Ledger;
use school_fees::application::office::FeeOffice;
use school_fees::interfaces::csv::command_reader::CommandReader;
use school_fees::interfaces::csv::report_writer::ReportWriter;
use school_fees::interfaces::receipt_printer::{DEFAULT_CURRENCY, ReceiptPrinter};
use school_fees::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Students who still owe part of their fee
    Due,
    /// Every registered student
    Students,
    /// Every receipt issued
    Receipts,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script CSV file (command, id, name, class, amount)
    input: PathBuf,

    /// Report printed once the script has run
    #[arg(long, value_enum, default_value_t = Report::Due)]
    report: Report,

    /// Print each receipt as it is issued
    #[arg(long)]
    show_receipts: bool,

    /// Currency symbol used on printed receipts
    #[arg(long, env = "SCHOOL_FEES_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Log ledger activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose).into_diagnostic()?;

    let office = FeeOffice::new(Ledger::new());
    let printer = ReceiptPrinter::new(cli.currency);

    // Replay the script
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for record in reader.records() {
        match record {
            Ok(record) => {
                let outcome = match Command::try_from(record) {
                    Ok(command) => office.execute(command).await,
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(Outcome::PaymentRecorded(receipt)) if cli.show_receipts => {
                        println!("{}", printer.render(&receipt));
                    }
                    Ok(_) => {}
                    Err(e) => eprintln!("Error processing command: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    let ledger = office.snapshot().await;

    // Output the selected view
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    match cli.report {
        Report::Due => writer.write_due_list(ledger.get_due_list()),
        Report::Students => writer.write_students(ledger.list_students()),
        Report::Receipts => writer.write_receipts(ledger.receipts()),
    }
    .into_diagnostic()?;

    Ok(())
}
