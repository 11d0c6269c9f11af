#![warn(clippy::all, rust_2018_idioms)]

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use sylshape::report::{
    report_lines, unpredicted_lines, write_report, Corpus, ReportLine, POSSIBLE,
};
use sylshape::{
    classify_reader, compare, generate_possible_syllables, segment, Phonology, Shape, SylResult,
};

/// Tabulate possible and attested syllable shapes
#[derive(Parser, Debug)]
#[command(name = "sylshape", version)]
struct Cli {
    /// JSON phonology to use instead of the built-in tables
    #[arg(long, global = true)]
    phonology: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print `source,shape,count` for the possible syllables and each corpus
    Report {
        /// Corpus files as LABEL=PATH, e.g. SV=sino-vietnamese-syllables.csv
        corpora: Vec<Corpus>,

        /// Also print attested syllables the phonology does not predict
        #[arg(long)]
        unpredicted: bool,
    },
    /// Print every possible syllable, one per line
    List {
        /// Only this shape (CV, CwV, CVN, ...)
        #[arg(long)]
        shape: Option<Shape>,
    },
    /// Turn whitespace-separated transcriptions into corpus records
    Segment {
        /// Input file; standard input when absent
        input: Option<PathBuf>,
    },
    /// Print the active phonology as JSON
    DumpPhonology,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> SylResult<()> {
    let phonology = match &cli.phonology {
        Some(path) => Phonology::load(path)?,
        None => Phonology::builtin()?,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Report {
            corpora,
            unpredicted,
        } => {
            let possible = generate_possible_syllables(&phonology);
            let mut lines = report_lines(POSSIBLE, &possible);
            let mut extra: Vec<ReportLine> = vec![];
            for corpus in corpora {
                log::info!("reading {} from {}", corpus.label, corpus.path.display());
                let file = File::open(&corpus.path)?;
                let attested = classify_reader(BufReader::new(file), &phonology.inventory)?;
                lines.append(&mut report_lines(&corpus.label, &attested));
                if unpredicted {
                    let comparisons = compare(&possible, &attested, &phonology.inventory);
                    extra.append(&mut unpredicted_lines(&corpus.label, &comparisons));
                }
            }
            lines.append(&mut extra);
            write_report(out, &lines)
        }
        Commands::List { shape } => {
            let possible = generate_possible_syllables(&phonology);
            for (s, syllables) in possible.iter() {
                if shape.is_some_and(|wanted| wanted != s) {
                    continue;
                }
                for syllable in syllables {
                    writeln!(out, "{}", syllable)?;
                }
            }
            out.flush()?;
            Ok(())
        }
        Commands::Segment { input } => {
            let syllables = match input {
                Some(path) => {
                    segment::segment_reader(BufReader::new(File::open(path)?), &phonology.inventory)?
                }
                None => segment::segment_reader(io::stdin().lock(), &phonology.inventory)?,
            };
            for syllable in syllables {
                writeln!(out, "{}", syllable.to_record())?;
            }
            out.flush()?;
            Ok(())
        }
        Commands::DumpPhonology => {
            writeln!(out, "{}", phonology.to_json()?)?;
            out.flush()?;
            Ok(())
        }
    }
}
