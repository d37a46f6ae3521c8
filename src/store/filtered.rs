use std::fmt;

use super::unique_list::UniqueList;

/// Visibility rule for one entity kind
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

pub fn show_all<T: 'static>() -> Predicate<T> {
    Box::new(|_: &T| true)
}

/// The subset of a [`UniqueList`] accepted by the current predicate.
///
/// The view holds positions into its source list, so it must be refreshed
/// after every mutation of that list. [`FilteredList::is_stale`] compares the
/// version seen at the last refresh with the list's current one.
pub struct FilteredList<T> {
    predicate: Predicate<T>,
    visible: Vec<usize>,
    synced_version: Option<u64>,
}

impl<T: 'static> FilteredList<T> {
    pub fn new() -> Self {
        Self {
            predicate: show_all(),
            visible: Vec::new(),
            synced_version: None,
        }
    }
}

impl<T: 'static> Default for FilteredList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FilteredList<T> {
    pub fn set_predicate(&mut self, predicate: Predicate<T>, source: &UniqueList<T>) {
        self.predicate = predicate;
        self.refresh(source);
    }

    /// Recompute the visible positions against the current contents of `source`
    pub fn refresh(&mut self, source: &UniqueList<T>) {
        let predicate = &self.predicate;
        self.visible = source
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(*item))
            .map(|(index, _)| index)
            .collect();
        self.synced_version = Some(source.version());
    }

    pub fn is_stale(&self, source: &UniqueList<T>) -> bool {
        self.synced_version != Some(source.version())
    }

    pub fn items<'a>(&self, source: &'a UniqueList<T>) -> Vec<&'a T> {
        debug_assert!(!self.is_stale(source), "filtered view read before refresh");
        let all = source.as_slice();
        self.visible.iter().filter_map(|&index| all.get(index)).collect()
    }

    /// Element at a zero-based position of the view
    pub fn get<'a>(&self, index: usize, source: &'a UniqueList<T>) -> Option<&'a T> {
        self.visible
            .get(index)
            .and_then(|&position| source.as_slice().get(position))
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl<T> fmt::Debug for FilteredList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredList")
            .field("visible", &self.visible)
            .field("synced_version", &self.synced_version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyForSale;
    use crate::testing::{sale_amy, sale_bob};

    fn listings() -> UniqueList<PropertyForSale> {
        let mut list = UniqueList::new();
        list.add(sale_amy()).unwrap();
        list.add(sale_bob()).unwrap();
        list
    }

    #[test]
    fn default_view_shows_everything() {
        let list = listings();
        let mut view = FilteredList::new();
        view.refresh(&list);
        assert_eq!(view.items(&list), vec![&sale_amy(), &sale_bob()]);
    }

    #[test]
    fn predicate_hides_without_removing() {
        let list = listings();
        let mut view = FilteredList::new();
        view.set_predicate(
            Box::new(|p: &PropertyForSale| p.details().town() == "Uptown"),
            &list,
        );
        assert_eq!(view.items(&list), vec![&sale_bob()]);
        assert_eq!(view.get(0, &list), Some(&sale_bob()));
        assert_eq!(view.get(1, &list), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn mutation_marks_view_stale_until_refreshed() {
        let mut list = listings();
        let mut view = FilteredList::new();
        view.refresh(&list);
        assert!(!view.is_stale(&list));

        list.remove(&sale_amy()).unwrap();
        assert!(view.is_stale(&list));

        view.refresh(&list);
        assert!(!view.is_stale(&list));
        assert_eq!(view.len(), 1);
    }
}
