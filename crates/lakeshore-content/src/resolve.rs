//! Parent resolution for kittens.
//!
//! Resolution fetches each referenced cat by id and returns new entities
//! with [`ParentLink::cat`] filled in. Inputs are never modified.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::client::ContentClient;
use crate::types::{Cat, Kitten, ParentLink, PastKitten};

/// Entity with mother and father links.
pub trait HasParents: Clone {
    fn mother(&self) -> &ParentLink;
    fn father(&self) -> &ParentLink;

    /// Copy of `self` with both links replaced.
    #[must_use]
    fn with_parents(&self, mother: ParentLink, father: ParentLink) -> Self;
}

impl HasParents for Kitten {
    fn mother(&self) -> &ParentLink {
        &self.mother
    }

    fn father(&self) -> &ParentLink {
        &self.father
    }

    fn with_parents(&self, mother: ParentLink, father: ParentLink) -> Self {
        Self {
            mother,
            father,
            ..self.clone()
        }
    }
}

impl HasParents for PastKitten {
    fn mother(&self) -> &ParentLink {
        &self.mother
    }

    fn father(&self) -> &ParentLink {
        &self.father
    }

    fn with_parents(&self, mother: ParentLink, father: ParentLink) -> Self {
        Self {
            mother,
            father,
            ..self.clone()
        }
    }
}

type ParentMap = HashMap<String, Arc<Cat>>;

impl ContentClient {
    /// Resolve mother and father of one kitten, fetching both concurrently.
    ///
    /// A parent id shared by both links is fetched once.
    pub fn resolve_kitten_parents(&self, kitten: &Kitten) -> Kitten {
        let fetch = |link: &ParentLink| link.id().and_then(|id| self.cat_by_id(id)).map(Arc::new);
        let (mother, father) = match (kitten.mother.id(), kitten.father.id()) {
            (Some(mother_id), Some(father_id)) if mother_id == father_id => {
                let cat = fetch(&kitten.mother);
                (cat.as_ref().map(Arc::clone), cat)
            }
            _ => rayon::join(|| fetch(&kitten.mother), || fetch(&kitten.father)),
        };

        kitten.with_parents(kitten.mother.resolved(mother), kitten.father.resolved(father))
    }

    /// Resolve parents for a batch of kittens.
    ///
    /// Each distinct parent id is fetched once, in parallel.
    pub fn resolve_kittens_parents(&self, kittens: &[Kitten]) -> Vec<Kitten> {
        self.resolve_parents(kittens)
    }

    /// Resolve parents for a batch of past kittens.
    ///
    /// Each distinct parent id is fetched once, in parallel.
    pub fn resolve_past_kittens_parents(&self, kittens: &[PastKitten]) -> Vec<PastKitten> {
        self.resolve_parents(kittens)
    }

    /// Shared batch resolution for any [`HasParents`] entity.
    pub fn resolve_parents<T: HasParents>(&self, items: &[T]) -> Vec<T> {
        let parents = self.fetch_parents(items);

        items
            .iter()
            .map(|item| {
                let lookup = |link: &ParentLink| {
                    link.resolved(link.id().and_then(|id| parents.get(id)).map(Arc::clone))
                };
                item.with_parents(lookup(item.mother()), lookup(item.father()))
            })
            .collect()
    }

    fn fetch_parents<T: HasParents>(&self, items: &[T]) -> ParentMap {
        let ids: BTreeSet<&str> = items
            .iter()
            .flat_map(|item| [item.mother().id(), item.father().id()])
            .flatten()
            .collect();

        debug!("Resolving {} distinct parents for {} items", ids.len(), items.len());

        ids.into_par_iter()
            .filter_map(|id| self.cat_by_id(id).map(|cat| (id.to_owned(), Arc::new(cat))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lakeshore_store::{ContentStore, MockStore, PropertyValue, Record};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::Collections;
    use crate::transform::{transform_kitten, transform_past_kitten};
    use crate::types::KittenStatus;

    fn cat_record(id: &str, name: &str) -> Record {
        Record::new(id).with_property("Name", PropertyValue::title(name))
    }

    fn kitten_record(id: &str, mother: Option<&str>, father: Option<&str>) -> Record {
        let mut record = Record::new(id).with_property("Name", PropertyValue::title(id));
        if let Some(mother) = mother {
            record = record.with_property("Mother", PropertyValue::relation(&[mother]));
        }
        if let Some(father) = father {
            record = record.with_property("Father", PropertyValue::relation(&[father]));
        }
        record
    }

    fn client(store: MockStore) -> (Arc<MockStore>, ContentClient) {
        let store = Arc::new(store);
        let client = ContentClient::new(
            Arc::clone(&store) as Arc<dyn ContentStore>,
            Collections::default(),
        );
        (store, client)
    }

    fn parents_store() -> MockStore {
        MockStore::new()
            .with_retrievable(cat_record("mom", "Luna"))
            .with_retrievable(cat_record("dad", "Apollo"))
    }

    #[test]
    fn test_resolve_single_kitten() {
        let (store, client) = client(parents_store());
        let kitten = transform_kitten(&kitten_record("k1", Some("mom"), Some("dad")));

        let resolved = client.resolve_kitten_parents(&kitten);

        assert_eq!(resolved.mother.id.as_deref(), Some("mom"));
        assert_eq!(resolved.mother.cat.as_ref().unwrap().name, "Luna");
        assert_eq!(resolved.father.cat.as_ref().unwrap().name, "Apollo");
        assert_eq!(resolved.status, KittenStatus::Available);
        assert_eq!(store.total_retrieves(), 2);

        // input untouched
        assert!(kitten.mother.cat.is_none());
        assert!(kitten.father.cat.is_none());
    }

    #[test]
    fn test_resolve_single_kitten_shared_parent_fetched_once() {
        let (store, client) = client(parents_store());
        let kitten = transform_kitten(&kitten_record("k1", Some("mom"), Some("mom")));

        let resolved = client.resolve_kitten_parents(&kitten);

        assert_eq!(store.retrieve_count("mom"), 1);
        assert_eq!(store.total_retrieves(), 1);
        assert!(Arc::ptr_eq(
            resolved.mother.cat.as_ref().unwrap(),
            resolved.father.cat.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_resolve_single_kitten_without_parents() {
        let (store, client) = client(parents_store());
        let kitten = transform_kitten(&kitten_record("k1", None, None));

        let resolved = client.resolve_kitten_parents(&kitten);

        assert_eq!(resolved, kitten);
        assert_eq!(store.total_retrieves(), 0);
    }

    #[test]
    fn test_batch_fetches_each_parent_once() {
        let (store, client) = client(parents_store());
        let kittens: Vec<Kitten> = (0..10)
            .map(|i| transform_kitten(&kitten_record(&format!("k{i}"), Some("mom"), Some("dad"))))
            .collect();

        let resolved = client.resolve_kittens_parents(&kittens);

        assert_eq!(resolved.len(), 10);
        assert_eq!(store.retrieve_count("mom"), 1);
        assert_eq!(store.retrieve_count("dad"), 1);
        for kitten in &resolved {
            assert_eq!(kitten.mother.cat.as_ref().unwrap().id, "mom");
            assert_eq!(kitten.father.cat.as_ref().unwrap().id, "dad");
        }
        assert!(Arc::ptr_eq(
            resolved[0].mother.cat.as_ref().unwrap(),
            resolved[9].mother.cat.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_batch_missing_parent_stays_unresolved() {
        let (store, client) = client(parents_store());
        let kittens = vec![
            transform_kitten(&kitten_record("k1", Some("mom"), Some("ghost"))),
            transform_kitten(&kitten_record("k2", Some("ghost"), None)),
        ];

        let resolved = client.resolve_kittens_parents(&kittens);

        assert_eq!(resolved[0].mother.cat.as_ref().unwrap().name, "Luna");
        assert_eq!(resolved[0].father.id.as_deref(), Some("ghost"));
        assert!(resolved[0].father.cat.is_none());
        assert!(resolved[1].mother.cat.is_none());
        assert_eq!(resolved[1].father, ParentLink::default());
        assert_eq!(store.retrieve_count("ghost"), 1);
        assert_eq!(store.total_retrieves(), 2);
    }

    #[test]
    fn test_batch_failed_fetch_leaves_none() {
        let (_store, client) = client(parents_store().with_failing_record("dad"));
        let kittens = vec![transform_kitten(&kitten_record("k1", Some("mom"), Some("dad")))];

        let resolved = client.resolve_kittens_parents(&kittens);

        assert!(resolved[0].mother.cat.is_some());
        assert!(resolved[0].father.cat.is_none());
    }

    #[test]
    fn test_resolve_past_kittens() {
        let (store, client) = client(parents_store());
        let past = vec![
            transform_past_kitten(&kitten_record("p1", Some("mom"), None)),
            transform_past_kitten(&kitten_record("p2", Some("mom"), Some("dad"))),
        ];

        let resolved = client.resolve_past_kittens_parents(&past);

        assert_eq!(resolved[0].mother.cat.as_ref().unwrap().name, "Luna");
        assert!(resolved[0].father.cat.is_none());
        assert_eq!(resolved[1].father.cat.as_ref().unwrap().name, "Apollo");
        assert_eq!(store.total_retrieves(), 2);
        assert!(past.iter().all(|p| p.mother.cat.is_none()));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (_store, client) = client(parents_store());
        let kittens = vec![transform_kitten(&kitten_record("k1", Some("mom"), Some("dad")))];

        let once = client.resolve_kittens_parents(&kittens);
        let twice = client.resolve_kittens_parents(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_batch() {
        let (store, client) = client(parents_store());
        assert!(client.resolve_kittens_parents(&[]).is_empty());
        assert_eq!(store.total_retrieves(), 0);
    }
}
