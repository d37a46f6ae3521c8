use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::models::{Person, PropertyForRent, PropertyForSale};

/// Identity used to keep a [`UniqueList`] free of duplicates
pub trait Unique {
    /// Singular noun for the entity, used in messages
    const KIND: &'static str;

    fn is_same(&self, other: &Self) -> bool;
}

impl Unique for Person {
    const KIND: &'static str = "person";

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }
}

impl Unique for PropertyForSale {
    const KIND: &'static str = "property for sale";

    fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}

impl Unique for PropertyForRent {
    const KIND: &'static str = "property for rent";

    fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Operation would result in a duplicate {kind}")]
    Duplicate { kind: &'static str },

    #[error("The {kind} does not exist in the list")]
    NotFound { kind: &'static str },
}

/// Insertion-ordered list in which no two elements are the same under [`Unique`].
///
/// Every successful mutation bumps [`UniqueList::version`], which lets views
/// derived from the list tell whether they are out of date.
pub struct UniqueList<T> {
    items: Vec<T>,
    version: u64,
}

impl<T: Unique> UniqueList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same(candidate))
    }

    pub fn add(&mut self, item: T) -> Result<(), CollectionError> {
        if self.contains(&item) {
            return Err(Self::duplicate());
        }
        self.items.push(item);
        self.bump();
        Ok(())
    }

    /// Replace `target` in place with `replacement`.
    ///
    /// `replacement` may be the same entity as `target`, but must not clash
    /// with any other element.
    pub fn set_element(&mut self, target: &T, replacement: T) -> Result<(), CollectionError> {
        let index = self.position(target).ok_or_else(Self::not_found)?;
        if !target.is_same(&replacement) && self.contains(&replacement) {
            return Err(Self::duplicate());
        }
        self.items[index] = replacement;
        self.bump();
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<T, CollectionError> {
        let index = self.position(target).ok_or_else(Self::not_found)?;
        let removed = self.items.remove(index);
        self.bump();
        Ok(removed)
    }

    /// Swap in a whole new set of elements, or leave the list untouched if
    /// `items` holds a duplicate pair
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), CollectionError> {
        let has_duplicate = items
            .iter()
            .enumerate()
            .any(|(i, item)| items[i + 1..].iter().any(|other| item.is_same(other)));
        if has_duplicate {
            return Err(Self::duplicate());
        }
        self.items = items;
        self.bump();
        Ok(())
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self.bump();
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|item| item.is_same(target))
    }

    fn duplicate() -> CollectionError {
        CollectionError::Duplicate { kind: T::KIND }
    }

    fn not_found() -> CollectionError {
        CollectionError::NotFound { kind: T::KIND }
    }
}

impl<T> UniqueList<T> {
    /// Read-only view of the elements in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl<T: Unique> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UniqueList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            version: self.version,
        }
    }
}

// Compares elements only; the version is not part of a list's value.
impl<T: PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Remark;
    use crate::testing::{alice, bob, rent_amy, sale_amy, sale_bob};
    use rstest::{fixture, rstest};

    #[fixture]
    fn sales() -> UniqueList<PropertyForSale> {
        UniqueList::new()
    }

    #[rstest]
    fn contains_reports_stored_elements(mut sales: UniqueList<PropertyForSale>) {
        assert!(!sales.contains(&sale_amy()));
        sales.add(sale_amy()).unwrap();
        assert!(sales.contains(&sale_amy()));
        assert!(!sales.contains(&sale_bob()));
    }

    #[rstest]
    fn add_keeps_insertion_order(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_bob()).unwrap();
        sales.add(sale_amy()).unwrap();
        assert_eq!(sales.as_slice(), &[sale_bob(), sale_amy()]);
    }

    #[rstest]
    fn adding_a_duplicate_fails_and_leaves_list_unchanged(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        let version = sales.version();

        let err = sales.add(sale_amy()).unwrap_err();

        assert_eq!(err, CollectionError::Duplicate { kind: "property for sale" });
        assert_eq!(sales.len(), 1);
        assert_eq!(sales.version(), version);
    }

    #[test]
    fn person_duplicates_use_name_identity() {
        let mut persons = UniqueList::new();
        persons.add(alice()).unwrap();
        let renamed_remark = alice().with_remark(Remark::new("different details"));
        assert!(persons.contains(&renamed_remark));
        assert!(persons.add(renamed_remark).is_err());
    }

    #[test]
    fn rent_duplicates_ignore_remark() {
        let mut rents = UniqueList::new();
        rents.add(rent_amy()).unwrap();
        let remarked = PropertyForRent::for_rent(
            rent_amy().details().clone(),
            rent_amy().available_from(),
            Some("Near park".into()),
        );
        assert!(rents.add(remarked).is_err());
    }

    #[rstest]
    fn remove_of_absent_element_is_not_found(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        let version = sales.version();

        let err = sales.remove(&sale_bob()).unwrap_err();

        assert_eq!(err, CollectionError::NotFound { kind: "property for sale" });
        assert_eq!(sales.as_slice(), &[sale_amy()]);
        assert_eq!(sales.version(), version);
    }

    #[rstest]
    fn remove_takes_the_matching_element(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        sales.add(sale_bob()).unwrap();
        assert_eq!(sales.remove(&sale_amy()).unwrap(), sale_amy());
        assert_eq!(sales.as_slice(), &[sale_bob()]);
    }

    #[rstest]
    fn set_element_with_itself_is_a_no_op(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        sales.add(sale_bob()).unwrap();

        sales.set_element(&sale_amy(), sale_amy()).unwrap();

        assert_eq!(sales.as_slice(), &[sale_amy(), sale_bob()]);
    }

    #[rstest]
    fn set_element_replaces_in_place(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        sales.set_element(&sale_amy(), sale_bob()).unwrap();
        assert_eq!(sales.as_slice(), &[sale_bob()]);
    }

    #[rstest]
    fn set_element_rejects_missing_target(mut sales: UniqueList<PropertyForSale>) {
        assert_eq!(
            sales.set_element(&sale_amy(), sale_bob()),
            Err(CollectionError::NotFound { kind: "property for sale" })
        );
        assert!(sales.is_empty());
    }

    #[rstest]
    fn set_element_rejects_clash_with_another_element(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        sales.add(sale_bob()).unwrap();
        assert_eq!(
            sales.set_element(&sale_amy(), sale_bob()),
            Err(CollectionError::Duplicate { kind: "property for sale" })
        );
        assert_eq!(sales.as_slice(), &[sale_amy(), sale_bob()]);
    }

    #[test]
    fn set_element_accepts_edit_of_same_person() {
        let mut persons = UniqueList::new();
        persons.add(alice()).unwrap();
        let edited = alice().with_remark(Remark::new("likes gardens"));
        persons.set_element(&alice(), edited.clone()).unwrap();
        assert_eq!(persons.as_slice(), &[edited]);
    }

    #[rstest]
    fn replace_all_swaps_contents(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        sales.replace_all(vec![sale_bob()]).unwrap();
        assert_eq!(sales.as_slice(), &[sale_bob()]);
    }

    #[rstest]
    fn replace_all_with_duplicates_is_rejected_atomically(mut sales: UniqueList<PropertyForSale>) {
        sales.add(sale_amy()).unwrap();
        let err = sales
            .replace_all(vec![sale_bob(), sale_amy(), sale_bob()])
            .unwrap_err();
        assert_eq!(err, CollectionError::Duplicate { kind: "property for sale" });
        assert_eq!(sales.as_slice(), &[sale_amy()]);
    }

    #[test]
    fn sort_by_reorders_and_bumps_version() {
        let mut persons = UniqueList::new();
        persons.add(bob()).unwrap();
        persons.add(alice()).unwrap();
        let version = persons.version();

        persons.sort_by(|a, b| a.name().cmp(b.name()));

        assert_eq!(persons.as_slice(), &[alice(), bob()]);
        assert!(persons.version() > version);
    }
}
