// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The [`Component`] trait and its render-time companions.
//!
//! A component is personified by a type, usually a unit struct, carrying
//! three associated records:
//!
//! * `Props`: read-only input supplied by the caller at mount and on every
//!   prop update.
//! * `State`: local state owned exclusively by one mounted instance. It is
//!   only ever replaced wholesale by the reducer, never written in place
//!   from the outside.
//! * `Event`: the alphabet of events the component's own UI can emit.
//!
//! The mount/update lifecycle belongs to the
//! [`Runtime`](crate::runtime::Runtime); components only describe what to
//! render and how state reacts to events.

use crate::runtime::{EventId, Then};
use crate::tree::{Button, Node, Tree};
use crate::value::IntoText;

pub trait Component: Sized + 'static {
    /// Read-only input record, owned by the caller.
    type Props: 'static;

    /// Local state record, owned exclusively by one mounted instance.
    type State: 'static;

    /// Events this component's UI can emit.
    type Event: 'static;

    /// Build the initial state. Runs once, at mount. Cannot fail.
    fn init(props: &Self::Props) -> Self::State;

    /// Pure function of current props and state to a render tree.
    ///
    /// The [`Ui`] scope is how buttons get wired up: binding an event yields
    /// the [`EventId`] a [`Button`] node carries.
    fn render(props: &Self::Props, state: &Self::State, ui: &mut Ui<Self>) -> Tree;

    /// The reducer: take the current state and an event, return the full
    /// replacement state and whether it warrants a re-render.
    ///
    /// Returning a complete record is what rules out partial or inconsistent
    /// state: the driver commits the result wholesale or not at all.
    fn reduce(props: &Self::Props, state: &Self::State, event: &Self::Event)
        -> (Self::State, Then);

    /// Fires exactly once per instance, after its first render.
    fn mounted(cx: Lifecycle<'_, Self>) {
        let _ = cx;
    }

    /// Fires after each completed re-render that followed a state or prop
    /// change. Always observes the committed values, never the ones being
    /// replaced.
    fn updated(cx: Lifecycle<'_, Self>) {
        let _ = cx;
    }
}

/// Render-time binding scope.
///
/// Bindings live only until the next render of the same instance: every
/// render rebinds its events under fresh ids and the driver purges the old
/// ones when it commits the new tree.
pub struct Ui<C: Component> {
    bindings: Vec<(EventId, C::Event)>,
}

impl<C: Component> Ui<C> {
    pub(crate) const fn new() -> Self {
        Ui {
            bindings: Vec::new(),
        }
    }

    /// Bind `event` and return the fresh [`EventId`] for it.
    pub fn on_click(&mut self, event: C::Event) -> EventId {
        let eid = EventId::next();

        self.bindings.push((eid, event));
        eid
    }

    /// Convenience for the common case: a [`Button`] node bound to `event`.
    pub fn button(&mut self, caption: impl IntoText, event: C::Event) -> Node {
        Node::Button(Button {
            caption: caption.into_text(),
            on_click: self.on_click(event),
        })
    }

    pub(crate) fn into_bindings(self) -> Vec<(EventId, C::Event)> {
        self.bindings
    }
}

/// Read-only view of an instance handed to lifecycle hooks.
///
/// Hooks observe committed values and cannot mutate state or re-enter the
/// driver.
pub struct Lifecycle<'a, C: Component> {
    props: &'a C::Props,
    state: &'a C::State,
}

impl<'a, C: Component> Lifecycle<'a, C> {
    pub(crate) const fn new(props: &'a C::Props, state: &'a C::State) -> Self {
        Lifecycle { props, state }
    }

    pub const fn props(&self) -> &'a C::Props {
        self.props
    }

    pub const fn state(&self) -> &'a C::State {
        self.state
    }
}

impl<C: Component> Clone for Lifecycle<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Component> Copy for Lifecycle<'_, C> {}
