// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Narrows down a list of events before it is displayed.

use crate::event::Event;
use std::num::NonZeroUsize;

/// Filters events by type and limits the number of events returned.
///
/// Events always keep the order in which they were given to the filter.
///
/// # Examples
///
/// ```
/// use github_activity::filter::EventFilter;
/// # use github_activity::event::Event;
/// # let events: Vec<Event> = vec![];
/// let push_events = EventFilter::new(&events)
///     .event_type(Some("PushEvent"))
///     .collect();
/// assert!(push_events.is_empty());
/// ```
#[derive(Debug)]
#[must_use]
pub struct EventFilter<'a> {
    events: Vec<&'a Event>,
}

impl<'a> EventFilter<'a> {
    /// Creates a new filter over `events`.
    pub fn new(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let events = events.into_iter().collect();
        Self { events }
    }

    /// Keeps only events whose type tag is exactly `event_type`.
    ///
    /// Does nothing if `event_type` is `None`.
    pub fn event_type(self, event_type: Option<&str>) -> Self {
        match event_type {
            Some(event_type) => {
                let events = self
                    .events
                    .into_iter()
                    .filter(|event| event.has_tag(event_type))
                    .collect();
                Self { events }
            }
            None => self,
        }
    }

    /// Keeps only the first `limit` events.
    ///
    /// Does nothing if `limit` is `None`.
    pub fn limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        if let Some(limit) = limit {
            self.events.truncate(limit.get());
        }
        self
    }

    /// Returns the events that survived filtering.
    pub fn collect(self) -> Vec<&'a Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use pretty_assertions::assert_eq;

    fn events() -> Vec<Event> {
        vec![
            Event::test("PushEvent", EventKind::Push { commits: 1 }),
            Event::test("WatchEvent", EventKind::Watch),
            Event::test("PushEvent", EventKind::Push { commits: 2 }),
            Event::test("ForkEvent", EventKind::Fork),
            Event::test("PushEvent", EventKind::Push { commits: 3 }),
            Event::test("PushEvent", EventKind::Push { commits: 4 }),
            Event::test("PushEvent", EventKind::Push { commits: 5 }),
        ]
    }

    fn commits(events: &[&Event]) -> Vec<usize> {
        events
            .iter()
            .map(|event| match event.kind() {
                EventKind::Push { commits } => *commits,
                _ => 0,
            })
            .collect()
    }

    #[test]
    fn it_keeps_everything_without_options() {
        let events = events();
        let filtered = EventFilter::new(&events).event_type(None).limit(None).collect();
        assert_eq!(filtered.len(), events.len());
        assert!(filtered.iter().zip(events.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn it_filters_by_type() {
        let events = events();
        let filtered = EventFilter::new(&events)
            .event_type(Some("PushEvent"))
            .collect();
        assert_eq!(commits(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn it_filters_by_type_case_sensitively() {
        let events = events();
        let filtered = EventFilter::new(&events)
            .event_type(Some("pushevent"))
            .collect();
        assert!(filtered.is_empty());
    }

    #[test]
    fn it_does_not_match_partial_types() {
        let events = events();
        let filtered = EventFilter::new(&events).event_type(Some("Push")).collect();
        assert!(filtered.is_empty());
    }

    #[test]
    fn it_limits_after_filtering() {
        let events = events();
        let filtered = EventFilter::new(&events)
            .event_type(Some("PushEvent"))
            .limit(NonZeroUsize::new(2))
            .collect();
        assert_eq!(commits(&filtered), vec![1, 2]);
    }

    #[test]
    fn it_tolerates_limits_larger_than_the_list() {
        let events = events();
        let filtered = EventFilter::new(&events)
            .limit(NonZeroUsize::new(100))
            .collect();
        assert_eq!(filtered.len(), 7);
    }
}
