// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The lifecycle driver.
//!
//! A [`Runtime`] owns every mounted instance: its props, its state, its
//! committed render tree, and the event bindings of that tree. All work
//! happens inside `&mut self` methods on one logical thread, so for any one
//! instance the sequence click → state replacement → re-render → update hook
//! is strictly ordered and never interleaves with another update.
//!
//! The runtime is an explicit value created by the caller and injected
//! wherever it is needed. There is no ambient global driver.

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::component::{Component, Lifecycle, Ui};
use crate::tree::Tree;

/// Describes whether or not a component should be re-rendered after its
/// reducer ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Then {
    /// This is a silent update: commit the state, skip the re-render and
    /// the update hook.
    Stop,
    /// Re-render the instance after this update.
    Render,
}

/// Identifies one mounted component instance within a [`Runtime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InstanceId(u32);

/// Identifies one event binding from one render.
///
/// Ids are globally unique and never reused. A re-render binds fresh ids, so
/// holding on to a button from a replaced tree yields
/// [`Error::UnboundEvent`] rather than a click routed into new state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct EventId(u32);

impl EventId {
    pub(crate) fn next() -> Self {
        static ID: AtomicU32 = AtomicU32::new(0);

        EventId(ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no instance mounted under {0:?}")]
    Unmounted(InstanceId),
    #[error("{0:?} is not bound to any mounted instance")]
    UnboundEvent(EventId),
    #[error("instance {0:?} is mounted as a different component type")]
    ComponentMismatch(InstanceId),
}

/// Type-erased mounted instance, as stored by the driver.
trait Instance {
    /// Run the reducer for the event bound under `eid` and commit the
    /// replacement state. `None` if this render never bound `eid`.
    fn trigger(&mut self, eid: EventId) -> Option<Then>;

    /// Re-render with current props and state, replacing tree and bindings.
    fn commit(&mut self);

    fn updated(&self);

    fn event_ids(&self) -> Vec<EventId>;

    fn tree(&self) -> &Tree;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct Mounted<C: Component> {
    props: C::Props,
    state: C::State,
    bindings: Vec<(EventId, C::Event)>,
    tree: Tree,
}

impl<C: Component> Mounted<C> {
    fn render_now(&mut self) {
        let mut ui = Ui::new();

        self.tree = C::render(&self.props, &self.state, &mut ui);
        self.bindings = ui.into_bindings();
    }
}

impl<C: Component> Instance for Mounted<C> {
    fn trigger(&mut self, eid: EventId) -> Option<Then> {
        let idx = self.bindings.iter().position(|(id, _)| *id == eid)?;

        let (state, then) = C::reduce(&self.props, &self.state, &self.bindings[idx].1);
        self.state = state;

        Some(then)
    }

    fn commit(&mut self) {
        self.render_now();
    }

    fn updated(&self) {
        C::updated(Lifecycle::new(&self.props, &self.state));
    }

    fn event_ids(&self) -> Vec<EventId> {
        self.bindings.iter().map(|(eid, _)| *eid).collect()
    }

    fn tree(&self) -> &Tree {
        &self.tree
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The lifecycle driver. See the [module documentation](self).
#[derive(Default)]
pub struct Runtime {
    instances: Vec<Option<Box<dyn Instance>>>,
    events: HashMap<EventId, InstanceId>,
}

impl Runtime {
    pub fn new() -> Self {
        Runtime {
            instances: Vec::new(),
            events: HashMap::new(),
        }
    }

    /// Mount a component: initialize its state from `props`, render it, and
    /// fire its mount hook. Cannot fail.
    ///
    /// The returned [`InstanceId`] stays valid until [`unmount`](Self::unmount).
    pub fn mount<C: Component>(&mut self, props: C::Props) -> InstanceId {
        let id = InstanceId(self.instances.len() as u32);
        let state = C::init(&props);

        let mut inst = Mounted::<C> {
            props,
            state,
            bindings: Vec::new(),
            tree: Tree::new(),
        };
        inst.render_now();

        for eid in inst.event_ids() {
            self.events.insert(eid, id);
        }

        // The first render is committed, the hook observes it.
        C::mounted(Lifecycle::new(&inst.props, &inst.state));

        debug!("mounted instance {id:?}");

        self.instances.push(Some(Box::new(inst)));
        id
    }

    /// Deliver a click to the event binding behind `eid`.
    ///
    /// Runs the owning instance's reducer and commits the replacement state.
    /// On [`Then::Render`] the instance is re-rendered, its stale bindings
    /// are purged, and its update hook fires against the committed values.
    pub fn click(&mut self, eid: EventId) -> Result<(), Error> {
        let id = *self.events.get(&eid).ok_or(Error::UnboundEvent(eid))?;
        let inst = self.instance_mut(id)?;

        let then = inst.trigger(eid).ok_or(Error::UnboundEvent(eid))?;

        if let Then::Stop = then {
            return Ok(());
        }

        let stale = inst.event_ids();
        inst.commit();
        let fresh = inst.event_ids();

        inst.updated();

        for eid in stale {
            self.events.remove(&eid);
        }
        for eid in fresh {
            self.events.insert(eid, id);
        }

        Ok(())
    }

    /// Replace the props of a mounted instance, re-render it, and fire its
    /// update hook.
    pub fn update<C: Component>(&mut self, id: InstanceId, props: C::Props) -> Result<(), Error> {
        let inst = self.mounted_mut::<C>(id)?;

        inst.props = props;

        let stale = inst.event_ids();
        inst.render_now();
        let fresh = inst.event_ids();

        C::updated(Lifecycle::new(&inst.props, &inst.state));

        for eid in stale {
            self.events.remove(&eid);
        }
        for eid in fresh {
            self.events.insert(eid, id);
        }

        Ok(())
    }

    /// Drop an instance and purge its event bindings.
    ///
    /// There is no teardown hook; state is destroyed with the instance.
    pub fn unmount(&mut self, id: InstanceId) -> Result<(), Error> {
        let slot = self
            .instances
            .get_mut(id.0 as usize)
            .ok_or(Error::Unmounted(id))?;
        let inst = slot.take().ok_or(Error::Unmounted(id))?;

        for eid in inst.event_ids() {
            self.events.remove(&eid);
        }

        debug!("unmounted instance {id:?}");

        Ok(())
    }

    /// The committed render tree of an instance.
    pub fn tree(&self, id: InstanceId) -> Option<&Tree> {
        self.instances
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map(|inst| inst.tree())
    }

    /// Read the current state of a mounted instance.
    pub fn state<C: Component>(&self, id: InstanceId) -> Result<&C::State, Error> {
        self.mounted_ref::<C>(id).map(|inst| &inst.state)
    }

    /// Read the current props of a mounted instance.
    pub fn props<C: Component>(&self, id: InstanceId) -> Result<&C::Props, Error> {
        self.mounted_ref::<C>(id).map(|inst| &inst.props)
    }

    pub fn is_mounted(&self, id: InstanceId) -> bool {
        self.instances
            .get(id.0 as usize)
            .is_some_and(Option::is_some)
    }

    /// Number of currently mounted instances.
    pub fn len(&self) -> usize {
        self.instances.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.iter().all(Option::is_none)
    }

    fn instance_mut(&mut self, id: InstanceId) -> Result<&mut Box<dyn Instance>, Error> {
        self.instances
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(Error::Unmounted(id))
    }

    fn mounted_ref<C: Component>(&self, id: InstanceId) -> Result<&Mounted<C>, Error> {
        self.instances
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(Error::Unmounted(id))?
            .as_any()
            .downcast_ref()
            .ok_or(Error::ComponentMismatch(id))
    }

    fn mounted_mut<C: Component>(&mut self, id: InstanceId) -> Result<&mut Mounted<C>, Error> {
        self.instance_mut(id)?
            .as_any_mut()
            .downcast_mut()
            .ok_or(Error::ComponentMismatch(id))
    }
}
