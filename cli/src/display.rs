//! Terminal rendering: splash screen and formatted recipe blocks.

use barkeep_core::{Assignment, Recipe, Role, Substitute};

const BANNER: &str = "--------------";

const BUTLER: &[&str] = &[
    "        .--.",
    "       /    \\            ",
    "      ## a  a       _    ",
    "      (   '._)     |_|",
    "       |'-- |      | |",
    "     _.\\___/_   ___|_|___",
    "   .'\\> \\Y/|<'.  '._.-'",
    "  /  \\ \\_\\/ /  '-' /",
    "  | --'\\_/|/ |   _/",
    "  |___.-' |  |`'`",
    "    |     |  |",
    "    |    / './",
    "   /__./` | |",
    "      \\   | |",
    "       \\  | |",
    "       ;  | |",
    "      /  | |",
    "     |___\\_.\\_",
    "     `-'--'---'  ",
];

/// ASCII butler with a greeting on his speech line.
pub fn splash(text: &str) {
    for (idx, line) in BUTLER.iter().enumerate() {
        if idx == 2 {
            println!("{line}{text}");
        } else {
            println!("{line}");
        }
    }
}

/// Print a recipe block: name banner, ingredient lines, vessel, method.
///
/// With a match plan, ingredient lines are annotated positionally: a
/// substitute that differs from the required name gets a "YOU HAVE" marker,
/// an uncovered garnish gets a missing marker.
pub fn print_recipe(recipe: &Recipe, plan: Option<&[Assignment]>) {
    println!("{BANNER}\n {}\n{BANNER}", recipe.name.to_uppercase());
    println!("Ingredients:");
    for (idx, req) in recipe.ingredients.iter().enumerate() {
        let tag = match &req.role {
            Role::Build => String::new(),
            Role::Optional(label) => format!(" ({label})"),
        };
        let line = format!("{} - {}{}", req.ingredient, req.amount, tag);
        match plan.and_then(|plan| plan.get(idx)).map(|a| &a.substitute) {
            Some(Substitute::Have(have)) if !have.eq_ignore_ascii_case(&req.ingredient) => {
                println!("\t {line:<40} ----> YOU HAVE: {have}");
            }
            Some(Substitute::Missing) => {
                println!("\t {line:<40} ----> (Missing garnish)");
            }
            _ => println!("\t {line}"),
        }
    }
    println!("\t Serve in: {}", recipe.glass);
    println!("Instructions:");
    println!("\t{}", recipe.method);
}
