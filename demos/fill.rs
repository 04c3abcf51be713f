use clap::Parser;
use std::collections::BTreeMap;

use xwords_csp::{Assignment, BacktrackingFiller, Crossword, FillConfig, FillOutcome, Filler};

const DEFAULT_WORDS: &str =
    "CAT,COT,TOE,TEA,ACE,EAT,ATE,OAT,TAO,ERA,ARE,EAR,ORE,ROE,TAR,RAT,ART,OAR";

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Grid rows separated by `/`; `*` is a blocked cell.
    #[arg(long, value_name = "ROWS", default_value = "___/_*_/___")]
    grid: String,

    /// Comma-separated word list.
    #[arg(long, value_name = "WORDS", default_value = DEFAULT_WORDS)]
    words: String,

    /// Maintain arc consistency during search.
    #[clap(long)]
    inference: bool,

    /// Give up after this many search states.
    #[clap(long, value_name = "INT")]
    max_states: Option<usize>,
}

/// Lays the assignment out as rows of letters, using `*` for cells no word covers.
fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<String> {
    let mut letters = BTreeMap::new();
    for (variable, word) in assignment.iter() {
        for (cell, letter) in variable.cells().zip(word.chars()) {
            letters.insert(cell, letter);
        }
    }

    let (height, width) = crossword
        .variables()
        .iter()
        .flat_map(|variable| variable.cells().collect::<Vec<_>>())
        .fold((0, 0), |(h, w), (row, col)| (h.max(row + 1), w.max(col + 1)));

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| letters.get(&(row, col)).copied().unwrap_or('*'))
                .collect()
        })
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let crossword = Crossword::from_grid(&args.grid.replace('/', "\n"))?;
    println!("{} variables", crossword.len());

    let mut config = FillConfig::default().with_inference(args.inference);
    if let Some(max_states) = args.max_states {
        config = config.with_max_states(max_states);
    }

    let mut filler = BacktrackingFiller::new(config);
    let words = args.words.split(',').map(str::trim).filter(|w| !w.is_empty());

    match filler.fill(&crossword, words) {
        FillOutcome::Solved(assignment) => {
            for row in letter_grid(&crossword, &assignment) {
                println!("{}", row);
            }
        }
        FillOutcome::Unsatisfiable => println!("No solution."),
        FillOutcome::BudgetExhausted => {
            println!("Gave up after {} states.", filler.statistics().states)
        }
    }
    println!("statistics = {:?}", filler.statistics());

    Ok(())
}
