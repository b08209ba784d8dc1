//! Bridges form commits to store mutations and user feedback.
//!
//! Success messages follow one template per entity: element name plus the
//! entity's action verb. A mutation against a missing id surfaces an error
//! toast and never the success template.

use std::rc::Rc;

use contracts::domain::common::{Entity, EntityId};

use super::collection::{Collection, CollectionError};
use super::surfaces::{Notifier, NotifyKind};

/// Mutation glue shared by all pages
#[derive(Clone)]
pub struct Dispatcher {
    notifier: Rc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &Rc<dyn Notifier> {
        &self.notifier
    }

    /// Create from a validated draft and confirm
    pub fn submit_create<E: Entity>(
        &self,
        store: &mut Collection<E>,
        build: impl FnOnce(E::Id) -> E,
    ) -> E::Id {
        let record = store.create(build);
        let id = record.id();
        tracing::debug!(entity = E::element_name(), id = %id.as_string(), "create");
        self.notifier.notify(
            NotifyKind::Success,
            &format!("{} {} successfully!", E::element_name(), E::create_verb()),
        );
        id
    }

    /// Update in place from a validated draft and confirm; NotFound is loud
    pub fn submit_update<E: Entity>(
        &self,
        store: &mut Collection<E>,
        id: E::Id,
        apply: impl FnOnce(&mut E),
    ) -> Result<(), CollectionError> {
        match store.update(id, apply) {
            Ok(_) => {
                tracing::debug!(entity = E::element_name(), id = %id.as_string(), "update");
                self.notifier.notify(
                    NotifyKind::Success,
                    &format!("{} {} successfully!", E::element_name(), E::update_verb()),
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = E::element_name(), id = %id.as_string(), "update failed: {err}");
                self.notifier.notify(NotifyKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    /// Delete by id and confirm; deleting a missing id raises, it does not
    /// pretend success
    pub fn remove<E: Entity>(
        &self,
        store: &mut Collection<E>,
        id: E::Id,
    ) -> Result<(), CollectionError> {
        match store.remove(id) {
            Ok(_) => {
                tracing::debug!(entity = E::element_name(), id = %id.as_string(), "delete");
                self.notifier.notify(
                    NotifyKind::Success,
                    &format!("{} {} successfully!", E::element_name(), E::delete_verb()),
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = E::element_name(), id = %id.as_string(), "delete failed: {err}");
                self.notifier.notify(NotifyKind::Error, &err.to_string());
                Err(err)
            }
        }
    }
}
