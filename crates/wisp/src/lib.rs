// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Wisp
//!
//! _Headless declarative UI components with an explicit lifecycle driver._
//!
//! Key features:
//!
//! * Components are plain data types implementing the [`Component`] trait,
//!   no base class and no inheritance.
//! * Local state changes go through a pure reducer returning a full
//!   replacement record, never a partial write.
//! * An explicit [`Runtime`] owns the mount/update lifecycle. It is a value
//!   you create and pass around, not ambient global machinery.
//! * Render output is an in-memory [`Tree`], so the entire lifecycle is
//!   observable and testable on any host.
//!
//! ### Example
//!
//! A component ties together three records: read-only props supplied by the
//! caller, exclusively-owned local state, and the events its UI can emit.
//!
//! ```
//! use wisp::prelude::*;
//!
//! struct Counter;
//!
//! enum Click {
//!     Increment,
//! }
//!
//! impl Component for Counter {
//!     type Props = String;
//!     type State = u32;
//!     type Event = Click;
//!
//!     fn init(_: &String) -> u32 {
//!         0
//!     }
//!
//!     fn render(props: &String, state: &u32, ui: &mut Ui<Self>) -> Tree {
//!         Tree::new()
//!             .root(el("p").text(props.as_str()).text(*state))
//!             .root(ui.button("+", Click::Increment))
//!     }
//!
//!     fn reduce(_: &String, state: &u32, _: &Click) -> (u32, Then) {
//!         (state + 1, Then::Render)
//!     }
//! }
//!
//! let mut rt = Runtime::new();
//! let id = rt.mount::<Counter>("Counter is at ".into());
//!
//! let plus = rt.tree(id).unwrap().buttons()[0].on_click;
//! rt.click(plus).unwrap();
//!
//! assert_eq!(rt.state::<Counter>(id).unwrap(), &1);
//! ```
//!
//! ### Lifecycle hooks
//!
//! [`Component::mounted`] fires exactly once, after the first render of an
//! instance. [`Component::updated`] fires after each completed re-render that
//! followed a state or prop change, and always observes the committed values,
//! never the ones being replaced. Both default to no-ops.
//!
//! ### Silent updates
//!
//! A reducer decides whether its replacement state is worth a re-render by
//! returning [`Then::Render`] or [`Then::Stop`]:
//!
//! ```
//! # use wisp::prelude::*;
//! fn capped(state: &u32) -> (u32, Then) {
//!     if *state < 10 {
//!         (state + 1, Then::Render)
//!     } else {
//!         (*state, Then::Stop)
//!     }
//! }
//! # assert!(matches!(capped(&10), (10, Then::Stop)));
//! ```

pub mod component;
pub mod components;
pub mod runtime;
pub mod tree;

mod value;

/// The prelude module with most commonly used types.
///
/// Intended use is:
/// ```
/// use wisp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component::{Component, Lifecycle, Ui};
    pub use crate::runtime::{Error, EventId, InstanceId, Runtime, Then};
    pub use crate::tree::{el, text, Node, Tree};
    pub use crate::value::IntoText;
}

pub use component::{Component, Lifecycle, Ui};
pub use runtime::{Error, Runtime, Then};
pub use tree::{Node, Tree};
pub use value::IntoText;
