use pantry_core::db::open_db_in_memory;
use pantry_core::{FoodRepository, NewFood, SqliteFoodRepository};

#[test]
fn search_matches_substring_in_seeded_catalog() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("Banana", 50)).unwrap();
    repo.create_food(&NewFood::new("Donut", 500)).unwrap();

    let hits = repo.search_foods("n").unwrap();
    assert_eq!(hits.len(), 2);

    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[0].name, "Banana");
    assert_eq!(hits[0].calories, 50);
    assert_eq!(hits[1].id, 2);
    assert_eq!(hits[1].name, "Donut");
    assert_eq!(hits[1].calories, 500);
}

#[test]
fn search_without_matches_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("Banana", 50)).unwrap();
    repo.create_food(&NewFood::new("Donut", 500)).unwrap();

    assert!(repo.search_foods("z").unwrap().is_empty());
}

#[test]
fn search_orders_by_ascending_id_not_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("Oat", 389)).unwrap();
    repo.create_food(&NewFood::new("Tomato", 18)).unwrap();
    repo.create_food(&NewFood::new("Potato", 77)).unwrap();

    // Alphabetical order would be Oat, Potato, Tomato; id order must win.
    let hits = repo.search_foods("at").unwrap();
    let ids: Vec<_> = hits.iter().map(|food| food.id).collect();
    let names: Vec<_> = hits.iter().map(|food| food.name.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(names, vec!["Oat", "Tomato", "Potato"]);
}

#[test]
fn search_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("Banana", 50)).unwrap();

    assert!(repo.search_foods("ban").unwrap().is_empty());

    let hits = repo.search_foods("Ban").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Banana");
}

#[test]
fn search_treats_sql_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("100% Juice", 45)).unwrap();
    repo.create_food(&NewFood::new("Apple", 52)).unwrap();

    let percent_hits = repo.search_foods("%").unwrap();
    assert_eq!(percent_hits.len(), 1);
    assert_eq!(percent_hits[0].name, "100% Juice");

    assert!(repo.search_foods("_").unwrap().is_empty());
}

#[test]
fn search_reflects_updated_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    let created = repo.create_food(&NewFood::new("Fudge", 1000)).unwrap();

    repo.update_food(created.id, &NewFood::new("Grapes", 67))
        .unwrap();

    assert!(repo.search_foods("Fud").unwrap().is_empty());

    let hits = repo.search_foods("rape").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, created.id);
}

#[test]
fn search_excludes_destroyed_foods() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::try_new(&conn).unwrap();
    repo.create_food(&NewFood::new("Banana", 50)).unwrap();
    repo.create_food(&NewFood::new("Donut", 500)).unwrap();

    repo.destroy_food(1).unwrap();

    let hits = repo.search_foods("n").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Donut");
}
