use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cuttle::{Corpus, EngineConfig, LabeledDocument, RankOrder, SearchEngine};
use tracing::info;

#[derive(Parser)]
#[command(name = "cuttle")]
#[command(about = "Minimal in-memory TF-IDF search engine", long_about = None)]
struct Args {
    /// JSON corpus file (array of {"label", "text"} objects); the built-in
    /// demo corpus is used when omitted
    #[arg(long, env = "CUTTLE_CORPUS")]
    corpus: Option<PathBuf>,

    /// Rank multi-document results most relevant first instead of the
    /// default ascending order
    #[arg(long, env = "CUTTLE_DESCENDING")]
    descending: bool,
}

fn demo_corpus() -> Vec<LabeledDocument> {
    vec![
        LabeledDocument::new("document1", "the brown fox jumped over the brown dog"),
        LabeledDocument::new("document2", "the lazy brown dog sat in the corner"),
        LabeledDocument::new("document3", "the red fox bit the lazy dog"),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let docs = match &args.corpus {
        Some(path) => LabeledDocument::load_file(path)?,
        None => demo_corpus(),
    };

    let labels: HashMap<String, String> = docs
        .iter()
        .map(|doc| (doc.text.clone(), doc.label.clone()))
        .collect();

    let corpus = Corpus::new(docs.into_iter().map(|doc| doc.text));
    let config = EngineConfig {
        rank_order: if args.descending {
            RankOrder::Descending
        } else {
            RankOrder::Ascending
        },
    };
    let engine = SearchEngine::build(corpus, config);
    info!(
        docs = engine.doc_count(),
        terms = engine.term_count(),
        "engine ready"
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Input: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim_end_matches(['\n', '\r']);

        if input == "q" {
            println!("Exit!");
            break;
        }

        let result: Vec<&str> = engine
            .search(input)
            .into_iter()
            .map(|text| labels.get(text).map(String::as_str).unwrap_or(text))
            .collect();
        println!("Result: [{}]", result.join(", "));
    }

    Ok(())
}
