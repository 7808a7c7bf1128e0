// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page assembly: mounts both reference components into one runtime and
//! simulates a few clicks.
//!
//! Run with `RUST_LOG=info` to see the lifecycle diagnostics.

use wisp::components::{CounterButton, CounterProps, StaticGreeting};
use wisp::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut page = Runtime::new();

    let greeting = page.mount::<StaticGreeting>(());
    let counter = page.mount::<CounterButton>(CounterProps {
        name: "Mycom".into(),
    });

    for _ in 0..3 {
        let increase = page
            .tree(counter)
            .and_then(|tree| tree.buttons().first().map(|button| button.on_click));

        if let Some(increase) = increase {
            page.click(increase)?;
        }
    }

    if let Some(tree) = page.tree(greeting) {
        println!("{tree}");
    }
    if let Some(tree) = page.tree(counter) {
        println!("{tree}");
    }

    let count = page.state::<CounterButton>(counter)?.count;
    println!("count is {count}");

    Ok(())
}
