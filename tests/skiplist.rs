extern crate zskiplist;
use zskiplist::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn new() {
    let list = SkipList::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.height(), 1);
}

#[test]
fn leaderboard_walkthrough() {
    init_logging();
    let mut list = SkipList::with_seed(2024);

    list.insert(10.0, "a").unwrap();
    list.insert(20.0, "b").unwrap();
    list.insert(10.0, "c").unwrap();

    let order: Vec<String> = list.iter().map(|node| node.to_string()).collect();
    assert_eq!(order, vec!["a10.00", "c10.00", "b20.00"]);
    assert_eq!(list.rank(10.0, "c"), 2);
    assert_eq!(list.get_by_rank(3).unwrap().element(), "b");
    assert_eq!(list.elements_in_range(10.0, 15.0), vec!["a", "c"]);

    let removed = list.delete(20.0, "b").unwrap();
    assert_eq!(removed.score(), 20.0);
    assert_eq!(removed.into_element(), "b");
    assert_eq!(list.len(), 2);
    assert!(list.get_by_rank(3).is_none());
}

#[test]
fn insert_empty_element_fails() {
    let mut list = SkipList::with_seed(1);
    match list.insert(1.0, String::new()) {
        Err(Error::InvalidArgument(reason)) => assert!(reason.contains("element")),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(list.len(), 0);
    assert!(list.first().is_none());
}

#[test]
fn error_messages() {
    assert_eq!(Error::NotFound.to_string(), "no node with the given score and element");
    assert_eq!(
        Error::InvalidArgument("element must not be empty").to_string(),
        "invalid argument: element must not be empty"
    );
}

#[test]
fn insert_two_delete() {
    let mut list = SkipList::with_seed(5);

    list.insert(435.0, "x").unwrap();
    list.insert(555.0, "y").unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.contains(435.0, "x"));
    assert!(list.contains(555.0, "y"));
    assert!(!list.contains(555.0, "x"));

    assert!(list.delete(435.0, "x").is_ok());
    assert_eq!(list.len(), 1);
    assert!(!list.contains(435.0, "x"));
    assert_eq!(list.first().unwrap().element(), "y");
    assert_eq!(list.last().unwrap().element(), "y");

    list.insert(435.0, "x").unwrap();
    assert_eq!(list.first().unwrap().element(), "x");

    assert!(list.delete(555.0, "y").is_ok());
    assert!(list.delete(435.0, "x").is_ok());
    assert!(list.is_empty());
    assert!(list.first().is_none());
    assert!(list.last().is_none());
}

#[test]
fn delete_empty() {
    let mut list = SkipList::with_seed(9);
    assert_eq!(list.delete(3.0, "a").unwrap_err(), Error::NotFound);
    assert_eq!(list.delete(0.0, "").unwrap_err(), Error::NotFound);
    assert!(list.is_empty());
}

#[test]
fn delete_then_reinsert_changes_score() {
    let mut list = SkipList::with_seed(11);
    for (score, element) in [(1.0, "alice"), (2.0, "bob"), (3.0, "carol")] {
        list.insert(score, element).unwrap();
    }

    list.delete(1.0, "alice").unwrap();
    list.insert(5.0, "alice").unwrap();

    assert_eq!(list.rank(5.0, "alice"), 3);
    assert_eq!(list.rank(1.0, "alice"), 0);
    assert_eq!(list.last().unwrap().element(), "alice");
}

#[test]
fn equal_scores_rank_by_element() {
    let mut list = SkipList::with_seed(3);
    let elements = ["delta", "alpha", "echo", "charlie", "bravo"];
    for element in elements.iter() {
        list.insert(1.0, *element).unwrap();
    }

    let mut sorted = elements.to_vec();
    sorted.sort();
    for (i, element) in sorted.iter().enumerate() {
        assert_eq!(list.rank(1.0, element), i as u64 + 1);
        assert_eq!(list.get_by_rank(i as u64 + 1).unwrap().element(), *element);
    }
    assert_eq!(list.rank(1.0, "alph"), 0);
    assert_eq!(list.rank(1.0, "alphaa"), 0);
}

#[test]
fn negative_and_infinite_scores() {
    let mut list = SkipList::with_seed(8);
    list.insert(f64::INFINITY, "top").unwrap();
    list.insert(-3.5, "low").unwrap();
    list.insert(f64::NEG_INFINITY, "bottom").unwrap();
    list.insert(0.0, "zero").unwrap();

    let order: Vec<&str> = list.iter().map(|node| node.element()).collect();
    assert_eq!(order, vec!["bottom", "low", "zero", "top"]);
    assert_eq!(list.elements_in_range(f64::NEG_INFINITY, 0.0), vec!["bottom", "low", "zero"]);
    assert_eq!(list.rank(f64::INFINITY, "top"), 4);
}

#[test]
fn hash_coin_layout_is_reproducible() {
    let build = || {
        let mut list = SkipList::with_height_control(Box::new(HashCoinGenerator::new(MAX_HEIGHT)));
        for i in 0..300 {
            list.insert((i % 17) as f64, format!("member:{}", i)).unwrap();
        }
        list
    };

    let first = build();
    let second = build();
    assert_eq!(first.height(), second.height());
    assert_eq!(first.to_string(), second.to_string());
    for rank in 1..=first.len() as u64 {
        let node = first.get_by_rank(rank).unwrap();
        assert_eq!(node.height(), second.get_by_rank(rank).unwrap().height());
        assert_eq!(first.rank(node.score(), node.element()), rank);
    }
}

#[test]
fn large_sequential_load() {
    init_logging();
    let mut list = SkipList::with_seed(77);
    for i in 0..10_000u32 {
        list.insert(f64::from(i), format!("{:05}", i)).unwrap();
    }
    assert_eq!(list.len(), 10_000);
    assert!(list.height() > 1);
    assert!(list.height() <= MAX_HEIGHT);

    assert_eq!(list.rank(4321.0, "04321"), 4322);
    assert_eq!(list.get_by_rank(10_000).unwrap().element(), "09999");
    assert_eq!(list.range_by_score(100.0, 104.0).count(), 5);

    for i in (0..10_000u32).step_by(2) {
        list.delete(f64::from(i), &format!("{:05}", i)).unwrap();
    }
    assert_eq!(list.len(), 5_000);
    assert_eq!(list.get_by_rank(1).unwrap().element(), "00001");
    assert_eq!(list.rank(9999.0, "09999"), 5_000);
}
