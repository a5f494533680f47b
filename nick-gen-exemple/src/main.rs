use std::str::FromStr;

use log::info;
use nick_gen_core::GeneratorConfig;
use nick_gen_core::config::GenerationMode;
use nick_gen_core::io::FileStore;
use nick_gen_core::model::catalog::Catalog;
use nick_gen_core::model::generator::{Generator, Origin};
use nick_gen_core::model::request::{CategoryChoice, LengthChoice};
use nick_gen_core::model::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows every rejected attempt and fallback
    env_logger::init();

    // Optional first argument: a TOML configuration file
    // Optional second argument: a TOML catalog replacing the built-in themes
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let catalog = match args.next() {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    let categories: Vec<String> = catalog.names().map(str::to_owned).collect();

    // History is kept in ./data/<history_key>.json between runs
    let store = FileStore::open("./data")?;
    info!("history stored in {}", store.dir().display());
    let generator = Generator::new(catalog, config)?;
    let mut session = Session::new(generator, store);

    println!("Categories: {}", categories.join(", "));
    println!("Mode: {:?}", session.generator().config().mode);

    // Fully random request
    for i in 0..3 {
        println!("Random nickname {}: {}", i + 1, session.generate());
    }

    // One nickname per category with a fixed length
    session.select_length(LengthChoice::from_str("4")?);
    for name in &categories {
        let category = CategoryChoice::parse(name, session.generator().catalog())?;
        session.select_category(category);
        let nickname = session.generate();
        let origin = match nickname.origin() {
            Origin::Assembled => "assembled",
            Origin::Fallback => "fallback",
        };
        println!("{name} (4): {nickname} [{origin}]");
    }

    // Unknown category
    match CategoryChoice::parse("scary", session.generator().catalog()) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Invalid lengths
    for length in ["1", "9", "long"] {
        match LengthChoice::from_str(length) {
            Ok(_) => println!("Should not happen"),
            Err(e) => println!("{e}"),
        }
    }

    // Same request through greedy syllable composition
    let mut unit_config = session.generator().config().clone();
    unit_config.mode = GenerationMode::UnitComposition;
    let unit_generator = Generator::new(session.generator().catalog().clone(), unit_config)?;
    let request = session.request();
    for i in 0..3 {
        let nickname = unit_generator.generate(&request);
        println!("Composed nickname {}: {} ({:?})", i + 1, nickname, nickname.origin());
    }

    // Click on the oldest visible entry
    if let Some(last) = session.history().len().checked_sub(1) {
        println!("Recalled: {}", session.recall(last).unwrap_or_default());
    }

    println!("History ({}/{}):", session.history().len(), session.history().capacity());
    for (i, name) in session.history().list().iter().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }

    Ok(())
}
