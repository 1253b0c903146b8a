use std::error::Error;
use std::path::Path;

use crate::cli::commands::{AddArgs, Cli, Commands, EditArgs, IdArgs, ListArgs};
use crate::cli::output::{IdJson, ListJson, todo_row};
use crate::model::{Filter, visible};
use crate::store::TodoStore;

/// Dispatch a parsed CLI invocation against the store in `data_dir`
pub fn dispatch(cli: Cli, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let Some(command) = cli.command else {
        return Ok(());
    };
    let mut store = TodoStore::open(data_dir);

    match command {
        Commands::Add(args) => cmd_add(&mut store, args, cli.json),
        Commands::List(args) => cmd_list(&store, args, cli.json),
        Commands::Toggle(args) => cmd_toggle(&mut store, args, cli.json),
        Commands::Edit(args) => cmd_edit(&mut store, args, cli.json),
        Commands::Rm(args) => cmd_rm(&mut store, args, cli.json),
    }
}

fn cmd_add(store: &mut TodoStore, args: AddArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let Some(id) = store.add(&args.text) else {
        return Err("cannot add an empty todo".into());
    };
    if json {
        println!("{}", serde_json::to_string(&IdJson { id })?);
    } else {
        println!("added {}", id);
    }
    Ok(())
}

fn cmd_list(store: &TodoStore, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let filter: Filter = args.filter.into();
    let todos = visible(store.all(), filter);
    if json {
        let out = ListJson::new(store.counts(), todos);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for todo in &todos {
            println!("{}", todo_row(todo));
        }
        let counts = store.counts();
        println!(
            "{} total, {} pending, {} completed",
            counts.total, counts.pending, counts.completed
        );
    }
    Ok(())
}

fn cmd_toggle(store: &mut TodoStore, args: IdArgs, json: bool) -> Result<(), Box<dyn Error>> {
    if !store.toggle(args.id) {
        return Err(format!("no todo with id {}", args.id).into());
    }
    if json {
        println!("{}", serde_json::to_string(&IdJson { id: args.id })?);
    } else {
        let state = if store.get(args.id).is_some_and(|t| t.completed) {
            "completed"
        } else {
            "pending"
        };
        println!("{} is now {}", args.id, state);
    }
    Ok(())
}

fn cmd_edit(store: &mut TodoStore, args: EditArgs, json: bool) -> Result<(), Box<dyn Error>> {
    // The store discards empty edits silently; the CLI surfaces them
    if args.text.trim().is_empty() {
        return Err("cannot set empty todo text".into());
    }
    if !store.edit(args.id, &args.text) {
        return Err(format!("no todo with id {}", args.id).into());
    }
    if json {
        println!("{}", serde_json::to_string(&IdJson { id: args.id })?);
    } else {
        println!("edited {}", args.id);
    }
    Ok(())
}

fn cmd_rm(store: &mut TodoStore, args: IdArgs, json: bool) -> Result<(), Box<dyn Error>> {
    if !store.delete(args.id) {
        return Err(format!("no todo with id {}", args.id).into());
    }
    if json {
        println!("{}", serde_json::to_string(&IdJson { id: args.id })?);
    } else {
        println!("deleted {}", args.id);
    }
    Ok(())
}
