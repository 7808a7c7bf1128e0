// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two reference components, one stateful and one static.
//!
//! They are deliberately small: [`CounterButton`] demonstrates the full
//! capability set (props, local state, a reducer, both lifecycle hooks) and
//! [`StaticGreeting`] demonstrates the minimum (a render function and
//! nothing else). A page-assembly layer mounts them into a shared
//! [`Runtime`](crate::runtime::Runtime) and positions them in a larger tree.

use log::info;

use crate::component::{Component, Lifecycle, Ui};
use crate::runtime::Then;
use crate::tree::{el, text, Tree};

/// A labelled button that counts its own clicks.
pub struct CounterButton;

/// Input record for [`CounterButton`], supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterProps {
    pub name: String,
}

/// Local state of one mounted [`CounterButton`].
///
/// `label` is carried along untouched by the reducer. It exists to make the
/// full-copy replacement visible: every new state record is the old one with
/// exactly the `count` field changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub count: u32,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
}

impl Component for CounterButton {
    type Props = CounterProps;
    type State = CounterState;
    type Event = CounterEvent;

    fn init(_: &CounterProps) -> CounterState {
        CounterState {
            count: 0,
            label: String::new(),
        }
    }

    fn render(props: &CounterProps, _: &CounterState, ui: &mut Ui<Self>) -> Tree {
        Tree::new()
            .root(el("div").class("mybtn").text(&props.name))
            .root(ui.button("increase count", CounterEvent::Increment))
    }

    fn reduce(
        _: &CounterProps,
        state: &CounterState,
        event: &CounterEvent,
    ) -> (CounterState, Then) {
        match event {
            CounterEvent::Increment => (
                CounterState {
                    count: state.count + 1,
                    label: state.label.clone(),
                },
                Then::Render,
            ),
        }
    }

    fn mounted(cx: Lifecycle<'_, Self>) {
        info!("{} mounted", cx.props().name);
    }

    fn updated(cx: Lifecycle<'_, Self>) {
        info!("{} had a rerender", cx.props().name);
        info!("{}", cx.state().count);
    }
}

/// A stateless component rendering one fixed text node.
pub struct StaticGreeting;

impl Component for StaticGreeting {
    type Props = ();
    type State = ();
    type Event = std::convert::Infallible;

    fn init(_: &()) {}

    fn render(_: &(), _: &(), _: &mut Ui<Self>) -> Tree {
        Tree::new().root(text("I am StaticGreeting"))
    }

    fn reduce(_: &(), _: &(), event: &Self::Event) -> ((), Then) {
        match *event {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{EventId, Runtime};

    fn counter(name: &str) -> (Runtime, crate::runtime::InstanceId) {
        let mut rt = Runtime::new();
        let id = rt.mount::<CounterButton>(CounterProps { name: name.into() });

        (rt, id)
    }

    fn increase(rt: &Runtime, id: crate::runtime::InstanceId) -> EventId {
        rt.tree(id).unwrap().buttons()[0].on_click
    }

    #[test]
    fn initial_state_and_render() {
        let (rt, id) = counter("Mycom");

        assert_eq!(
            rt.state::<CounterButton>(id).unwrap(),
            &CounterState {
                count: 0,
                label: String::new(),
            }
        );

        let tree = rt.tree(id).unwrap();
        assert!(tree.contains_text("Mycom"));
        assert_eq!(tree.buttons()[0].caption, "increase count");
        assert_eq!(
            tree.to_string(),
            "<div class=\"mybtn\">Mycom</div><button>increase count</button>"
        );
    }

    #[test]
    fn count_tracks_clicks_exactly() {
        let (mut rt, id) = counter("OK");

        for expected in 1..=5_u32 {
            rt.click(increase(&rt, id)).unwrap();

            let state = rt.state::<CounterButton>(id).unwrap();
            assert_eq!(state.count, expected);
            assert_eq!(state.label, "");
        }
    }

    #[test]
    fn rerender_keeps_name_text() {
        let (mut rt, id) = counter("OK");

        rt.click(increase(&rt, id)).unwrap();
        rt.click(increase(&rt, id)).unwrap();

        let tree = rt.tree(id).unwrap();
        assert!(tree.contains_text("OK"));
        assert_eq!(tree.buttons().len(), 1);
    }

    #[test]
    fn renaming_preserves_count() {
        let (mut rt, id) = counter("before");

        rt.click(increase(&rt, id)).unwrap();
        rt.update::<CounterButton>(id, CounterProps { name: "after".into() })
            .unwrap();

        let tree = rt.tree(id).unwrap();
        assert!(tree.contains_text("after"));
        assert!(!tree.contains_text("before"));
        assert_eq!(rt.state::<CounterButton>(id).unwrap().count, 1);
    }

    #[test]
    fn greeting_is_invariant() {
        let mut rt = Runtime::new();
        let id = rt.mount::<StaticGreeting>(());

        assert_eq!(rt.tree(id).unwrap().to_string(), "I am StaticGreeting");

        // A prop "change" re-renders to the exact same output.
        rt.update::<StaticGreeting>(id, ()).unwrap();
        assert_eq!(rt.tree(id).unwrap().to_string(), "I am StaticGreeting");
        assert!(rt.tree(id).unwrap().buttons().is_empty());
    }

    #[test]
    fn update_hook_emits_rerender_diagnostics() {
        use std::sync::Mutex;
        use std::thread::{self, ThreadId};

        struct Recorder;

        static RECORDER: Recorder = Recorder;
        static RECORDS: Mutex<Vec<(ThreadId, String)>> = Mutex::new(Vec::new());

        impl log::Log for Recorder {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                RECORDS
                    .lock()
                    .unwrap()
                    .push((thread::current().id(), record.args().to_string()));
            }

            fn flush(&self) {}
        }

        log::set_logger(&RECORDER).unwrap();
        log::set_max_level(log::LevelFilter::Info);

        let (mut rt, id) = counter("LogCheck");
        rt.click(increase(&rt, id)).unwrap();
        rt.click(increase(&rt, id)).unwrap();

        // Other tests may log concurrently; this thread's records are ours.
        let me = thread::current().id();
        let lines: Vec<String> = RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(tid, _)| *tid == me)
            .map(|(_, line)| line.clone())
            .collect();

        assert_eq!(
            lines,
            [
                "LogCheck mounted",
                "LogCheck had a rerender",
                "1",
                "LogCheck had a rerender",
                "2",
            ]
        );
    }

    #[test]
    fn components_share_one_runtime() {
        let mut rt = Runtime::new();

        let greeting = rt.mount::<StaticGreeting>(());
        let counter = rt.mount::<CounterButton>(CounterProps {
            name: "Mycom".into(),
        });

        let eid = rt.tree(counter).unwrap().buttons()[0].on_click;
        rt.click(eid).unwrap();

        assert_eq!(rt.state::<CounterButton>(counter).unwrap().count, 1);
        assert_eq!(rt.tree(greeting).unwrap().to_string(), "I am StaticGreeting");
        assert_eq!(rt.len(), 2);
    }
}
