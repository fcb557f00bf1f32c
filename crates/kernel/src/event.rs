//! Domain events and their one-way publication drain.

use core::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::entity::Entity;

/// A record of a state change, buffered on an entity until published.
pub trait DomainEvent: core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "core.project.created").
    fn event_type(&self) -> &'static str;

    /// When the change happened (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Downstream consumer of an entity's domain events.
pub trait DomainEventPublisher<E: ?Sized> {
    type Error: core::fmt::Debug;

    fn publish(&self, event: &E) -> Result<(), Self::Error>;
}

/// Publisher that only records events in the log.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingEventPublisher;

impl<E: DomainEvent> DomainEventPublisher<E> for TracingEventPublisher {
    type Error = Infallible;

    fn publish(&self, event: &E) -> Result<(), Self::Error> {
        tracing::info!(
            event_type = event.event_type(),
            occurred_at = %event.occurred_at(),
            "domain event published"
        );
        Ok(())
    }
}

/// Publish every pending event of `entity` in order, then clear the buffer.
///
/// On the first publisher failure the error is returned and the buffer is left
/// as it was. Returns the number of events published.
pub fn publish_domain_events<T, P>(entity: &mut T, publisher: &P) -> Result<usize, P::Error>
where
    T: Entity,
    P: DomainEventPublisher<T::Event> + ?Sized,
{
    let pending = entity.domain_events_mut();
    for event in pending.as_slice() {
        publisher.publish(event)?;
    }

    let published = pending.len();
    pending.clear();
    Ok(published)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::entity::{EntityBase, PendingDomainEvents};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Renamed(&'static str);

    struct Shelf {
        base: EntityBase<u32, Renamed>,
    }

    impl Shelf {
        fn rename(&mut self, name: &'static str) {
            self.base.register_domain_event(Renamed(name));
        }
    }

    impl Entity for Shelf {
        type Id = u32;
        type Event = Renamed;

        fn base(&self) -> &EntityBase<u32, Renamed> {
            &self.base
        }

        fn domain_events_mut(&mut self) -> PendingDomainEvents<'_, Renamed> {
            self.base.pending_domain_events()
        }
    }

    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<Renamed>>,
        fail_on: Option<&'static str>,
    }

    impl DomainEventPublisher<Renamed> for Recording {
        type Error = String;

        fn publish(&self, event: &Renamed) -> Result<(), String> {
            if self.fail_on == Some(event.0) {
                return Err(format!("rejected {}", event.0));
            }
            self.seen.borrow_mut().push(event.clone());
            Ok(())
        }
    }

    fn shelf() -> Shelf {
        Shelf {
            base: EntityBase::with_id(1),
        }
    }

    #[test]
    fn publishes_in_order_and_clears() {
        let mut shelf = shelf();
        shelf.rename("a");
        shelf.rename("b");

        let publisher = Recording::default();
        let published = publish_domain_events(&mut shelf, &publisher).unwrap();

        assert_eq!(published, 2);
        assert_eq!(*publisher.seen.borrow(), vec![Renamed("a"), Renamed("b")]);
        assert!(shelf.domain_events().is_empty());
    }

    #[test]
    fn failed_publication_keeps_the_buffer() {
        let mut shelf = shelf();
        shelf.rename("a");
        shelf.rename("b");

        let publisher = Recording {
            fail_on: Some("b"),
            ..Recording::default()
        };
        let err = publish_domain_events(&mut shelf, &publisher).unwrap_err();

        assert_eq!(err, "rejected b");
        assert_eq!(shelf.domain_events(), &[Renamed("a"), Renamed("b")]);
    }

    #[test]
    fn empty_buffer_publishes_nothing() {
        let mut shelf = shelf();
        assert_eq!(publish_domain_events(&mut shelf, &Recording::default()).unwrap(), 0);
    }
}
