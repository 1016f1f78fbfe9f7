//! Saving and reloading a task list reproduces it exactly

use flash::domain::{parse_deadline, parse_event, parse_todo, Task, TaskList};
use flash::storage::TaskFile;
use proptest::prelude::*;
use tempfile::TempDir;

fn description() -> impl Strategy<Value = String> {
    "[a-z][a-z |\\\\\n\r]{0,15}"
}

fn date() -> impl Strategy<Value = String> {
    prop_oneof![
        (2000i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{}-{:02}-{:02}", y, m, d)),
        (2000i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{}/{}/{}", d, m, y)),
        "[a-z]{1,8}( [a-z]{1,8})?",
    ]
}

fn time() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m)),
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}{:02}", h, m)),
        (1u32..=12, 0u32..60, prop::bool::ANY)
            .prop_map(|(h, m, pm)| format!("{}:{:02} {}", h, m, if pm { "PM" } else { "AM" })),
        "[a-z]{1,6}",
    ]
}

/// The argument line of an add command, with its verb
fn addition() -> impl Strategy<Value = (&'static str, String)> {
    prop_oneof![
        description().prop_map(|d| ("todo", d)),
        (description(), date(), prop::option::of(time()))
            .prop_map(|(d, when, at)| match at {
                Some(at) => ("deadline", format!("{} /by {} {}", d, when, at)),
                None => ("deadline", format!("{} /by {}", d, when)),
            }),
        (description(), time(), time(), date()).prop_map(|(d, start, end, on)| {
            ("event", format!("{} /from {} /to {} /on {}", d, start, end, on))
        }),
    ]
}

fn parse(verb: &str, args: &str) -> Option<Task> {
    match verb {
        "todo" => parse_todo(args).ok(),
        "deadline" => parse_deadline(args).ok(),
        _ => parse_event(args).ok(),
    }
}

proptest! {
    #[test]
    fn save_then_load_renders_identically(
        additions in prop::collection::vec((addition(), prop::bool::ANY), 0..12)
    ) {
        let mut tasks = TaskList::new();
        for ((verb, args), done) in &additions {
            if let Some(mut task) = parse(verb, args) {
                if *done {
                    task.mark_done();
                }
                tasks.push(task);
            }
        }

        let dir = TempDir::new().unwrap();
        let store = TaskFile::new(dir.path().join("tasks.txt"));
        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        prop_assert_eq!(loaded.render(), tasks.render());
        prop_assert_eq!(loaded, tasks);
    }
}
