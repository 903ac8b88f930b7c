use comatch::{
    CommunityCollection, MatchClass, MatchConfig, OverlapType, match_communities,
};

fn collection(lists: Vec<Vec<&str>>) -> CommunityCollection {
    CommunityCollection::from_member_lists(lists)
}

#[test]
fn nested_and_identical_partitions_end_to_end() {
    let list1 = collection(vec![vec!["A", "B", "C"], vec!["D", "E"]]);
    let list2 = collection(vec![vec!["A", "B", "C", "F"], vec!["D", "E"]]);
    let cfg = MatchConfig::new()
        .with_size_tolerance(0.5)
        .with_min_jaccard(0.3);

    let out = match_communities(&list1, &list2, &cfg).expect("valid config");

    // Exact phase: (1,1) Subset and (2,2) Perfect; the similarity phase finds
    // the same pairs but contributes nothing after deduplication.
    assert_eq!(out.matches.len(), 2);

    let subset = &out.matches[0];
    assert_eq!(subset.pair_key(), (1, 1));
    assert_eq!(subset.overlap_type, OverlapType::Subset);
    assert!((subset.jaccard_index - 0.75).abs() < 1e-12);
    assert_eq!(subset.overlap_count, 3);

    let perfect = &out.matches[1];
    assert_eq!(perfect.pair_key(), (2, 2));
    assert_eq!(perfect.overlap_type, OverlapType::Perfect);
    assert_eq!(perfect.jaccard_index, 1.0);
    assert_eq!(perfect.overlap_count, 2);

    // Projection: jaccard descending, exact relations collapsed to Identical.
    assert_eq!(out.report.len(), 2);
    assert_eq!(out.report[0].jaccard_index, 1.0);
    assert_eq!(out.report[0].match_type, MatchClass::Identical);
    assert_eq!(out.report[1].match_type, MatchClass::Identical);

    // Both similarity candidates for community 1 plus (2,2) passed the
    // size pre-filter.
    assert_eq!(out.pairs_evaluated, 3);
}

#[test]
fn similar_only_pair_reported_once_as_similar() {
    let list1 = collection(vec![vec!["A", "B", "C", "D"]]);
    let list2 = collection(vec![vec!["A", "B", "C", "E"]]);
    let cfg = MatchConfig::default();

    let out = match_communities(&list1, &list2, &cfg).expect("valid config");
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].overlap_type, OverlapType::Similar);
    assert!((out.matches[0].jaccard_index - 0.6).abs() < 1e-12);
    assert_eq!(out.report[0].match_type, MatchClass::Similar);
}

#[test]
fn mixed_partition_has_no_duplicate_pairs() {
    let list1 = collection(vec![
        vec!["A", "B", "C"],
        vec!["A", "B"],
        vec!["D", "E", "F"],
        vec![],
    ]);
    let list2 = collection(vec![
        vec!["A", "B", "C"],
        vec!["A", "B", "C", "D"],
        vec!["D", "E"],
        vec![],
    ]);
    let cfg = MatchConfig::new()
        .with_size_tolerance(1.0)
        .with_min_jaccard(0.1);

    let out = match_communities(&list1, &list2, &cfg).expect("valid config");

    let mut seen = std::collections::HashSet::new();
    for rec in &out.matches {
        assert!(
            seen.insert(rec.pair_key()),
            "pair {:?} reported twice",
            rec.pair_key()
        );
    }
    assert_eq!(out.matches.len(), out.report.len());
}

#[test]
fn report_is_sorted_by_jaccard_descending() {
    let list1 = collection(vec![
        vec!["A", "B", "C"],
        vec!["D", "E"],
        vec!["F", "G", "H", "I"],
    ]);
    let list2 = collection(vec![
        vec!["A", "B", "X"],
        vec!["D", "E"],
        vec!["F", "G", "H"],
    ]);
    let cfg = MatchConfig::new()
        .with_size_tolerance(1.0)
        .with_min_jaccard(0.1);

    let out = match_communities(&list1, &list2, &cfg).expect("valid config");
    for pair in out.report.windows(2) {
        assert!(pair[0].jaccard_index >= pair[1].jaccard_index);
    }
}

#[test]
fn thresholds_are_rejected_not_clamped() {
    let list = collection(vec![vec!["A"]]);
    assert!(match_communities(&list, &list, &MatchConfig::new().with_min_jaccard(2.0)).is_err());
    assert!(
        match_communities(&list, &list, &MatchConfig::new().with_size_tolerance(-0.5)).is_err()
    );
}
