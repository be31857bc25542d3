//! End-to-end tests driving dataset parsing, index registration, and
//! ingredient queries over a small TSV fixture.

use barkeep_core::{find_all, CategoryIndex, MatchResult, RecipeBook, Substitute};

const FIXTURE: &str = include_str!("fixtures/recipes.tsv");

fn load() -> (RecipeBook, CategoryIndex) {
    let book = RecipeBook::parse(FIXTURE).expect("fixture parses");
    let mut index = CategoryIndex::new();
    index.register(book.all_ingredients());
    (book, index)
}

#[test]
fn test_fixture_parses_into_three_recipes() {
    let (book, _) = load();
    assert_eq!(book.len(), 3);
    assert!(book.get("gin fizz").is_some());
    assert!(book.get("Whiskey Sour").is_some());
    assert!(book.get("martini").is_some());
}

#[test]
fn test_registration_buckets_dataset_ingredients() {
    let (_, index) = load();
    let lemon = index.members("lemon").unwrap();
    assert!(lemon.contains("lemon slice"));
    assert!(lemon.contains("lemon juice"));
    assert!(index.members("vermouth").unwrap().contains("dry vermouth"));
    assert!(index.members("misc").unwrap().contains("olive"));
}

#[test]
fn test_gin_only_makes_a_partial_gin_fizz() {
    let (book, index) = load();
    // "water" and "sugar" are the defaults the interactive surface appends.
    let matches = find_all(&book, &index, ["gin", "water", "sugar"]);

    assert!(matches.full.is_empty());
    let plan = matches.partial.get("gin fizz").expect("gin fizz is partial");
    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].substitute, Substitute::Have("gin".to_string()));
    assert_eq!(plan[1].required, "lemon slice");
    assert_eq!(plan[1].substitute, Substitute::Missing);
    assert_eq!(plan[2].substitute, Substitute::Have("sugar".to_string()));

    // Both other recipes miss an essential ingredient and are discarded.
    assert!(!matches.partial.contains_key("whiskey sour"));
    assert!(!matches.partial.contains_key("martini"));
}

#[test]
fn test_vodka_only_matches_nothing() {
    let (book, index) = load();
    let matches = find_all(&book, &index, ["vodka", "water", "sugar"]);
    assert!(matches.full.is_empty());
    assert!(matches.partial.is_empty());
}

#[test]
fn test_unknown_ingredient_covers_misc_requirements() {
    let (book, index) = load();
    // "falernum" is within 0.5 of no category label, so even lossy
    // classification leaves it in misc, exactly where the martini's olive
    // garnish lives.
    let available = barkeep_core::availability(&index, ["falernum"]);
    assert_eq!(available.get("misc").map(String::as_str), Some("falernum"));

    let matches = find_all(&book, &index, ["gin", "dry vermouth", "falernum"]);
    let plan = matches.full.get("martini").expect("martini is full");
    assert_eq!(plan[2].required, "olive");
    assert_eq!(plan[2].substitute, Substitute::Have("falernum".to_string()));
}

#[test]
fn test_evaluate_short_circuits_on_essential_failure() {
    let (book, index) = load();
    let available = barkeep_core::availability(&index, ["vodka"]);
    let martini = book.get("martini").unwrap();
    assert_eq!(
        barkeep_core::evaluate(martini, &index, &available),
        MatchResult::Impossible
    );
}

#[test]
fn test_misspelled_search_suggests_closest_recipe() {
    let (book, _) = load();
    assert_eq!(book.suggest("gin fiz").unwrap().name, "gin fizz");
    assert_eq!(book.suggest("whisky sour").unwrap().name, "whiskey sour");
    assert!(book.suggest("pan galactic gargle blaster").is_none());
}

#[test]
fn test_random_pick_stays_within_the_book() {
    let (book, _) = load();
    let names: Vec<&str> = book.names().collect();
    for _ in 0..100 {
        assert!(names.contains(&book.random().unwrap().name.as_str()));
    }
}
