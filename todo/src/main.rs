//! Scripted walk through one page session.
//!
//! Replays a typical sequence of clicks against a [`TodoStore`] and prints
//! the render model after each one.

use todo::{TodoEnvironment, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_list(todos: &TodoStore) {
    for todo in todos.items() {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{status}] {} (#{})", todo.text, todo.id);
    }
    println!(
        "  {}/{} done, mode: {:?}",
        todos.state().completed_count(),
        todos.state().count(),
        todos.mode()
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,todoai_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    todoai_runtime::metrics::register_metrics();

    println!("=== TodoAI ===\n");

    let mut todos = TodoStore::new(TodoEnvironment::production());
    todos.subscribe(|state| tracing::info!(items = state.items.len(), "Re-render"));

    println!(">>> Adding A and B");
    for text in ["A", "B"] {
        todos.set_draft(text);
        todos.submit();
    }
    print_list(&todos);

    let (a, b) = (todos.items()[0].id, todos.items()[1].id);

    println!("\n>>> Completing A");
    todos.toggle_complete(a);
    print_list(&todos);

    println!("\n>>> Editing B");
    todos.start_edit(b);
    todos.set_draft("B, but better");
    println!("  submit button: {}", todos.view().submit_label);
    todos.submit();
    print_list(&todos);

    println!("\n>>> Deleting B");
    todos.delete(b);
    print_list(&todos);

    println!("\n>>> Switching theme");
    todos.toggle_theme();
    println!("{}", serde_json::to_string_pretty(&todos.view())?);

    println!("\n>>> Clearing all");
    todos.clear_all();
    print_list(&todos);

    Ok(())
}
