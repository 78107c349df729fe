//! Ordered, id-keyed record collections owned by the session.
//!
//! Appointments, wellness entries and prescriptions all share the same
//! contract: insertion order is display order unless a screen sorts, every
//! record gets a fresh UUID v4 on creation, and removing an unknown id is a
//! no-op. Edits happen in place so a record keeps its id and position.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    Appointment, NewAppointment, NewPrescription, NewWellnessEntry, Prescription, WellnessEntry,
};

/// A record that can live in a [`Collection`].
pub trait Record {
    /// Field set supplied by callers; everything but the id.
    type New;

    fn id(&self) -> Uuid;
    fn create(id: Uuid, new: Self::New) -> Self;
}

/// Records that support in-place editing.
pub trait Editable: Record {
    fn apply(&mut self, new: Self::New);
}

impl Record for Appointment {
    type New = NewAppointment;

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(id: Uuid, new: NewAppointment) -> Self {
        Appointment::from_new(id, new)
    }
}

impl Record for WellnessEntry {
    type New = NewWellnessEntry;

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(id: Uuid, new: NewWellnessEntry) -> Self {
        WellnessEntry::from_new(id, new)
    }
}

impl Record for Prescription {
    type New = NewPrescription;

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(id: Uuid, new: NewPrescription) -> Self {
        Prescription::from_new(id, new)
    }
}

impl Editable for Prescription {
    fn apply(&mut self, new: NewPrescription) {
        Prescription::apply(self, new);
    }
}

/// Insertion-ordered list of records with unique ids.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record and return it.
    pub fn add(&mut self, new: T::New) -> &T {
        let id = self.fresh_id();
        self.items.push(T::create(id, new));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Remove by id. Returns `false` (and changes nothing) if absent.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Most recently added record.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    // v4 collisions are not expected; the loop keeps uniqueness unconditional.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.contains(id) {
                return id;
            }
        }
    }
}

impl<T: Editable> Collection<T> {
    /// Edit a record in place, keeping its id and position.
    pub fn update(&mut self, id: Uuid, new: T::New) -> Option<&T> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.apply(new);
        Some(&*item)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
