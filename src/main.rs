//! # Workform CLI
//!
//! Command-line interface for rendering work-order forms.
//!
//! ## Usage
//!
//! ```bash
//! # Render the drop-off form for a work order saved as JSON
//! workform drop-off order.json
//!
//! # Render the pick-up form into a specific directory
//! workform pick-up --out forms/ order.json
//!
//! # Read the work order from stdin, use a custom letterhead
//! curl -s $API/work-orders/1042 | workform pick-up --config shop.json -
//!
//! # Dump the optimized drawing ops instead of writing a PDF
//! workform drop-off --ir order.json
//! ```
//!
//! Set `RUST_LOG=debug` to trace each pipeline stage.

use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use workform::{
    FormConfig, FormError, PdfBackend, WorkOrderDetail,
    forms::{DropOffForm, Form, PickUpForm},
};

/// Workform - Repair-shop work-order forms
#[derive(Parser, Debug)]
#[command(name = "workform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the customer drop-off form
    DropOff(RenderArgs),

    /// Render the customer pick-up form
    PickUp(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Work order JSON file (`-` reads stdin)
    input: PathBuf,

    /// Directory the PDF is written to
    #[arg(long, short, default_value = ".")]
    out: PathBuf,

    /// Letterhead and warranty configuration (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the optimized drawing ops instead of writing a PDF
    #[arg(long)]
    ir: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FormError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::DropOff(args) => {
            let item = read_work_order(&args.input)?;
            render(&DropOffForm::new(&item), &args)
        }
        Commands::PickUp(args) => {
            let item = read_work_order(&args.input)?;
            render(&PickUpForm::new(&item), &args)
        }
    }
}

fn read_work_order(input: &Path) -> Result<WorkOrderDetail, FormError> {
    if input.as_os_str() == "-" {
        return WorkOrderDetail::from_reader(io::stdin().lock());
    }
    let file = File::open(input)?;
    WorkOrderDetail::from_reader(BufReader::new(file))
}

fn render(form: &dyn Form, args: &RenderArgs) -> Result<(), FormError> {
    let config = match &args.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };

    let mut doc = PdfBackend::a4();

    if args.ir {
        form.draw(&mut doc, &config);
        let program = doc.into_program().optimize();
        for op in &program {
            println!("{:?}", op);
        }
        return Ok(());
    }

    let rendered = form.render(&mut doc, &config)?;
    let path = rendered.persist(&args.out)?;
    println!("Saved to {}", path.display());
    Ok(())
}
