//! Reducer combination
//!
//! [`combine_reducers`] turns a [`ReducerMap`] of named slice reducers into a
//! single reducer over a [`CombinedState`]. Slices may have different types;
//! they are stored type-erased and recovered with [`CombinedState::get`].
//!
//! The combined reducer hands back the very same `Arc<CombinedState>` when no
//! slice reducer produced a new value, so `Arc::ptr_eq` tells consumers that
//! nothing changed.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can live in a [`CombinedState`] slice
pub trait SliceValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + fmt::Debug + Send + Sync> SliceValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Type-erased slice value
pub type SliceRef = Arc<dyn SliceValue>;

type SliceReducer<A> = Rc<dyn Fn(Option<SliceRef>, &A) -> SliceRef>;

fn downcast_slice<T: Any + Send + Sync>(slice: SliceRef) -> Option<Arc<T>> {
    SliceValue::into_any(slice).downcast::<T>().ok()
}

/// Ordered mapping from slice name to slice reducer
pub struct ReducerMap<A> {
    entries: Vec<(String, SliceReducer<A>)>,
}

impl<A: 'static> ReducerMap<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a slice reducer under `key`
    ///
    /// Re-using a key replaces the earlier reducer but keeps its position.
    pub fn slice<T, R>(self, key: impl Into<String>, reducer: R) -> Self
    where
        T: Any + fmt::Debug + Send + Sync,
        R: Fn(Option<Arc<T>>, &A) -> Arc<T> + 'static,
    {
        self.maybe_slice(key, Some(reducer))
    }

    /// Add a slice reducer if there is one
    ///
    /// A `None` reducer drops the key, including any reducer added for it
    /// before.
    pub fn maybe_slice<T, R>(mut self, key: impl Into<String>, reducer: Option<R>) -> Self
    where
        T: Any + fmt::Debug + Send + Sync,
        R: Fn(Option<Arc<T>>, &A) -> Arc<T> + 'static,
    {
        let key = key.into();
        let Some(reducer) = reducer else {
            log::debug!("No reducer given for slice `{}`, dropping it", key);
            self.entries.retain(|(existing, _)| *existing != key);
            return self;
        };

        let erased: SliceReducer<A> = Rc::new(move |previous: Option<SliceRef>, action: &A| {
            // a slice of another type is treated as missing
            let previous = previous.and_then(downcast_slice::<T>);
            let next: SliceRef = reducer(previous, action);
            next
        });

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = erased,
            None => self.entries.push((key, erased)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: 'static> Default for ReducerMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// State tree produced by a combined reducer: named slices in insertion order
#[derive(Clone, Default)]
pub struct CombinedState {
    slices: Vec<(String, SliceRef)>,
}

impl CombinedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for preloaded state
    pub fn with<T: Any + fmt::Debug + Send + Sync>(
        mut self,
        key: impl Into<String>,
        value: T,
    ) -> Self {
        let key = key.into();
        let value: SliceRef = Arc::new(value);
        match self.slices.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.slices.push((key, value)),
        }
        self
    }

    /// Borrow a slice as `T`; `None` if missing or of another type
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        let value: &dyn SliceValue = &**self.raw(key)?;
        value.as_any().downcast_ref::<T>()
    }

    /// Shared handle to a slice, identity preserved
    pub fn slice<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        downcast_slice(Arc::clone(self.raw(key)?))
    }

    pub fn raw(&self, key: &str) -> Option<&SliceRef> {
        self.slices
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl fmt::Debug for CombinedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slices.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

/// Build one reducer out of named slice reducers
///
/// For every action each slice reducer receives its own previous slice. If
/// every slice reducer returns its input (same `Arc`), the previous combined
/// state is returned as is; otherwise a new state holding every slice.
pub fn combine_reducers<A: 'static>(
    reducers: ReducerMap<A>,
) -> impl Fn(Option<Arc<CombinedState>>, &A) -> Arc<CombinedState> {
    let entries = reducers.entries;

    move |state: Option<Arc<CombinedState>>, action: &A| {
        let state = state.unwrap_or_default();
        let mut has_changed = false;
        let mut next_state = CombinedState {
            slices: Vec::with_capacity(entries.len()),
        };

        for (key, reducer) in &entries {
            let previous = state.raw(key).cloned();
            let next = reducer(previous.clone(), action);
            has_changed = has_changed || previous.map_or(true, |p| !Arc::ptr_eq(&p, &next));
            next_state.slices.push((key.clone(), next));
        }

        if has_changed {
            Arc::new(next_state)
        } else {
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, PlainAction};
    use pretty_assertions::assert_eq;

    fn counter(state: Option<Arc<i64>>, action: &PlainAction) -> Arc<i64> {
        let state = state.unwrap_or_default();
        match action.kind.as_str() {
            "INCREMENT" => Arc::new(*state + 1),
            _ => state,
        }
    }

    fn label(state: Option<Arc<String>>, action: &PlainAction) -> Arc<String> {
        let state = state.unwrap_or_default();
        match action.get("label").and_then(|v| v.as_str()) {
            Some(label) if action.kind == "LABEL" => Arc::new(label.to_string()),
            _ => state,
        }
    }

    #[test]
    fn test_initial_state_from_slice_defaults() {
        let reducer = combine_reducers(
            ReducerMap::new()
                .slice("counter", counter)
                .slice("label", label),
        );
        let state = reducer(None, &PlainAction::init());

        assert_eq!(state.get::<i64>("counter"), Some(&0));
        assert_eq!(state.get::<String>("label"), Some(&String::new()));
        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["counter", "label"]);
    }

    #[test]
    fn test_unchanged_slices_return_same_state() {
        let reducer = combine_reducers(
            ReducerMap::new()
                .slice("counter", counter)
                .slice("label", label),
        );
        let state = reducer(None, &PlainAction::init());

        let next = reducer(Some(Arc::clone(&state)), &PlainAction::new("UNKNOWN"));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_changed_slice_builds_new_state_keeping_other_slices() {
        let reducer = combine_reducers(
            ReducerMap::new()
                .slice("counter", counter)
                .slice("label", label),
        );
        let state = reducer(None, &PlainAction::init());
        let label_before = state.slice::<String>("label").unwrap();

        let next = reducer(Some(Arc::clone(&state)), &PlainAction::new("INCREMENT"));
        assert!(!Arc::ptr_eq(&state, &next));
        assert_eq!(next.get::<i64>("counter"), Some(&1));
        assert!(Arc::ptr_eq(&label_before, &next.slice::<String>("label").unwrap()));
    }

    #[test]
    fn test_missing_reducer_is_dropped() {
        let no_label: Option<fn(Option<Arc<String>>, &PlainAction) -> Arc<String>> = None;
        let map = ReducerMap::new()
            .slice("counter", counter)
            .maybe_slice("label", no_label);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["counter"]);

        let state = combine_reducers(map)(None, &PlainAction::init());
        assert_eq!(state.len(), 1);
        assert_eq!(state.get::<String>("label"), None);
    }

    #[test]
    fn test_reinserted_key_keeps_position() {
        let map = ReducerMap::new()
            .slice("counter", counter)
            .slice("label", label)
            .slice("counter", |state: Option<Arc<i64>>, _: &PlainAction| {
                state.unwrap_or_else(|| Arc::new(10))
            });
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["counter", "label"]);

        let state = combine_reducers(map)(None, &PlainAction::init());
        assert_eq!(state.get::<i64>("counter"), Some(&10));
    }

    #[test]
    fn test_empty_map_returns_input_after_first_call() {
        let reducer = combine_reducers(ReducerMap::<PlainAction>::new());
        let state = reducer(None, &PlainAction::init());
        assert!(state.is_empty());

        let next = reducer(Some(Arc::clone(&state)), &PlainAction::new("ANYTHING"));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_preloaded_slice_of_wrong_type_is_reinitialized() {
        let reducer = combine_reducers(ReducerMap::new().slice("counter", counter));
        let preloaded = Arc::new(CombinedState::new().with("counter", "not a number".to_string()));

        let state = reducer(Some(preloaded), &PlainAction::init());
        assert_eq!(state.get::<i64>("counter"), Some(&0));
    }

    #[test]
    fn test_debug_lists_slices() {
        let state = CombinedState::new().with("counter", 3_i64).with("timer", "12:0:5".to_string());
        assert_eq!(format!("{:?}", state), r#"{"counter": 3, "timer": "12:0:5"}"#);
    }
}
