use std::collections::HashSet;

use assertables::*;
use lb_core::errors::StoreError;
use lb_core::memstore::InMemoryStore;
use lb_core::prelude::*;
use lb_core::testutils::*;
use mockall::predicate::eq;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::config::SeedConfig;
use crate::seeder::{
    seed_store,
    SEED_PROPERTY,
};

fn distinct<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names.into_iter().collect::<HashSet<_>>().len()
}

#[rstest]
fn test_insert_types(typed_store: InMemoryStore) {
    for (family, expected) in Family::ALL.into_iter().zip([NUM_ARTIFACT_TYPES, NUM_EXECUTION_TYPES, NUM_CONTEXT_TYPES]) {
        let types = typed_store.list_types(family).unwrap();
        assert_eq!(types.len(), expected);
        assert_eq!(distinct(types.iter().map(|t| t.name.as_str())), expected);
        assert!(types.iter().all(|t| t.properties.get(SEED_PROPERTY) == Some(&PropertyType::String)));
    }
}

#[rstest]
fn test_insert_types_twice_is_collision_free(mut typed_store: InMemoryStore) {
    insert_types_in_db(NUM_ARTIFACT_TYPES, 0, 1, &mut typed_store).unwrap();

    let artifact_types = typed_store.list_types(Family::Artifact).unwrap();
    assert_eq!(artifact_types.len(), 2 * NUM_ARTIFACT_TYPES);
    assert_eq!(distinct(artifact_types.iter().map(|t| t.name.as_str())), 2 * NUM_ARTIFACT_TYPES);
    assert_eq!(typed_store.type_count(Family::Execution), NUM_EXECUTION_TYPES);
    assert_eq!(typed_store.type_count(Family::Context), NUM_CONTEXT_TYPES + 1);
}

#[rstest]
fn test_zero_counts_make_no_store_calls(mut untouched_store: MockStore) {
    insert_types_in_db(0, 0, 0, &mut untouched_store).unwrap();
    insert_nodes_in_db(0, 0, 0, &mut untouched_store).unwrap();
}

#[rstest]
fn test_insert_types_one_batch_per_family() {
    let mut store = MockStore::new();
    store.expect_list_types().times(2).returning(|_| Ok(vec![]));
    store
        .expect_insert_types()
        .withf(|family, types| *family == Family::Artifact && types.len() == 3)
        .times(1)
        .returning(|_, types| Ok((1..).take(types.len()).collect()));
    store
        .expect_insert_types()
        .withf(|family, types| *family == Family::Context && types.len() == 2)
        .times(1)
        .returning(|_, types| Ok((10..).take(types.len()).collect()));

    insert_types_in_db(3, 0, 2, &mut store).unwrap();
}

#[rstest]
fn test_insert_types_store_failure_propagates_and_stops() {
    let mut store = MockStore::new();
    store.expect_list_types().times(1).returning(|_| Ok(vec![]));
    store
        .expect_insert_types()
        .times(1)
        .returning(|_, _| Err(StoreError::duplicate_type_name("pre_insert_artifact_type-0")));

    let err = insert_types_in_db(1, 1, 1, &mut store).unwrap_err();
    assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::DuplicateTypeName(_))));
}

#[rstest]
fn test_insert_types_unacknowledged_batch() {
    let mut store = MockStore::new();
    store.expect_list_types().returning(|_| Ok(vec![]));
    store.expect_insert_types().returning(|_, _| Ok(vec![1]));

    let err = insert_types_in_db(2, 0, 0, &mut store).unwrap_err();
    assert_contains!(err.to_string(), "acknowledged 1 of 2");
}

#[rstest]
fn test_insert_nodes(seeded_store: InMemoryStore) {
    for (family, expected) in Family::ALL.into_iter().zip([NUM_ARTIFACTS, NUM_EXECUTIONS, NUM_CONTEXTS]) {
        let type_ids: HashSet<_> = seeded_store.list_types(family).unwrap().iter().filter_map(|t| t.id).collect();
        let nodes = seeded_store.list_nodes(family).unwrap();
        assert_eq!(nodes.len(), expected);
        assert_eq!(distinct(nodes.iter().map(|n| n.name.as_str())), expected);
        for node in &nodes {
            assert!(type_ids.contains(&node.type_id.unwrap()));
            assert_some!(node.properties.get(SEED_PROPERTY));
        }
    }
}

#[rstest]
fn test_insert_nodes_round_robin_over_types() {
    let mut store = MockStore::new();
    store
        .expect_list_types()
        .with(eq(Family::Execution))
        .returning(|_| Ok(type_records("trainer", 7, 2)));
    store.expect_list_nodes().returning(|_| Ok(vec![]));
    store
        .expect_insert_nodes()
        .withf(|family, nodes| {
            *family == Family::Execution
                && nodes.iter().map(|n| n.type_id).collect::<Vec<_>>() == [Some(7), Some(8), Some(7), Some(8), Some(7)]
        })
        .times(1)
        .returning(|_, nodes| Ok((1..).take(nodes.len()).collect()));

    insert_nodes_in_db(0, 5, 0, &mut store).unwrap();
}

#[rstest]
fn test_insert_nodes_without_types_is_a_store_failure(mut empty_store: InMemoryStore) {
    insert_types_in_db(1, 0, 0, &mut empty_store).unwrap();

    let err = insert_nodes_in_db(3, 2, 0, &mut empty_store).unwrap_err();
    assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::MissingTypeReference(_))));
    assert_eq!(empty_store.node_count(Family::Artifact), 3);
    assert_eq!(empty_store.node_count(Family::Execution), 0);
}

#[rstest]
fn test_insert_nodes_twice_is_collision_free(mut seeded_store: InMemoryStore) {
    insert_nodes_in_db(0, 0, NUM_CONTEXTS, &mut seeded_store).unwrap();

    let contexts = seeded_store.list_nodes(Family::Context).unwrap();
    assert_eq!(contexts.len(), 2 * NUM_CONTEXTS);
    assert_eq!(distinct(contexts.iter().map(|n| n.name.as_str())), 2 * NUM_CONTEXTS);
}

#[test]
#[traced_test]
fn test_seed_store() {
    let config = SeedConfig {
        num_artifact_types: 2,
        num_execution_types: 1,
        num_context_types: 1,
        num_artifacts: 4,
        num_executions: 0,
        num_contexts: 3,
    };
    let mut store = InMemoryStore::new();
    seed_store(&config, &mut store).unwrap();

    assert_eq!(store.type_count(Family::Artifact), 2);
    assert_eq!(store.node_count(Family::Artifact), 4);
    assert_eq!(store.node_count(Family::Execution), 0);
    assert_eq!(store.node_count(Family::Context), 3);
    assert!(logs_contain("inserting nodes"));
}
