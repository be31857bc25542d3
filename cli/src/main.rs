mod display;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use barkeep_core::{find_all, CategoryIndex, RecipeBook, DEFAULT_INGREDIENTS};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "barkeep")]
#[command(about = "Interactive cocktail recipe lookup", long_about = None)]
struct Cli {
    /// Path to the tab-separated recipe dataset
    #[arg(long, default_value = "recipe_data.tsv")]
    data: PathBuf,
}

fn main() -> Result<()> {
    // Log to stderr so recipe output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let book = RecipeBook::load(&cli.data)
        .with_context(|| format!("loading recipe dataset {}", cli.data.display()))?;
    let mut index = CategoryIndex::new();
    index.register(book.all_ingredients());
    tracing::info!(recipes = book.len(), "recipe book loaded");

    loop {
        println!("{}", "\n".repeat(20));
        display::splash("Welcome to the bar. Can I recommend you a drink?");
        println!();
        println!("\t1: Search for specific drink");
        println!("\t2: Input available ingredients");
        println!("\t3: Get random cocktail");
        println!("q to quit");
        // Exhausted stdin quits like "q" instead of re-prompting forever.
        let Some(choice) = prompt(">: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => search(&book)?,
            "2" => query(&book, &index)?,
            "3" => random(&book)?,
            "q" => return Ok(()),
            other => println!("Unrecognised input: {other}"),
        }
    }
}

/// Read one trimmed line, `None` once the input is exhausted (EOF).
fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(read_trimmed_line(&mut io::stdin().lock())?)
}

fn pause() -> Result<()> {
    prompt("Press enter to return to menu: ")?;
    Ok(())
}

/// Look up a recipe by name, falling back to the closest-named suggestion.
fn search(book: &RecipeBook) -> Result<()> {
    let Some(name) = prompt("Enter drink name: ")? else {
        return Ok(());
    };
    match book.get(&name) {
        Some(recipe) => display::print_recipe(recipe, None),
        None => {
            println!("\nSearching...\n");
            println!("Cocktail \"{name}\" not found in recipe book\n");
            if let Some(suggestion) = book.suggest(&name) {
                println!("Perhaps you meant:");
                display::print_recipe(suggestion, None);
            }
        }
    }
    pause()
}

/// Take the user's available ingredients and show every makeable recipe.
fn query(book: &RecipeBook, index: &CategoryIndex) -> Result<()> {
    let Some(line) = prompt("Simply write all your ingredients, separated by commas: ")? else {
        return Ok(());
    };
    let mut ingredients: Vec<String> = line
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    ingredients.extend(DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()));

    let matches = find_all(book, index, &ingredients);

    if matches.full.is_empty() {
        println!("--------------");
        println!("No cocktails found matching those ingredients");
    } else {
        for (name, plan) in &matches.full {
            if let Some(recipe) = book.get(name) {
                display::print_recipe(recipe, Some(plan.as_slice()));
            }
        }
        println!("--------------");
        println!("{} cocktails found.", matches.full.len());
    }

    if !matches.partial.is_empty() {
        let show = prompt(&format!(
            "{} almost-matches (only missing garnishes) also found. Show? [Y/n]: ",
            matches.partial.len()
        ))?;
        if show.map_or(false, |choice| choice.eq_ignore_ascii_case("y")) {
            for (name, plan) in &matches.partial {
                if let Some(recipe) = book.get(name) {
                    display::print_recipe(recipe, Some(plan.as_slice()));
                }
            }
        }
    }
    pause()
}

fn random(book: &RecipeBook) -> Result<()> {
    match book.random() {
        Some(recipe) => display::print_recipe(recipe, None),
        None => println!("The recipe book is empty"),
    }
    pause()
}
