use cdnctl_core::ProfileStore;

use super::render::{format_profile, format_profile_set};
use crate::cli_args::{AddProfileArgs, ConfigArgs, ConfigCommand};
use crate::{prompt_line, prompt_password, prompt_yes_no};

pub(crate) fn handle_config_command(args: ConfigArgs, store: &ProfileStore) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Add(args) => add_profile(args, store)?,
        ConfigCommand::Remove(args) => {
            let name = match args.name {
                Some(name) => name,
                None => prompt_line("Enter Profile Name to Remove: ")?,
            };
            let removal = store.remove(&name)?;
            if let Some(new_default) = removal.new_default {
                println!("Default profile changed to '{new_default}'.");
            }
            println!("Profile '{name}' removed successfully.");
        }
        ConfigCommand::Show(args) => {
            let set = store.list()?;
            match args.name.as_deref() {
                Some(name) => {
                    let profile = set.resolve(name)?;
                    print!("{}", format_profile(profile, args.show_secrets));
                }
                None => print!("{}", format_profile_set(&set, args.show_secrets)),
            }
        }
        ConfigCommand::Use(args) => {
            store.set_default(&args.name)?;
            println!("Default profile set to '{}'.", args.name);
        }
    }
    Ok(())
}

fn add_profile(args: AddProfileArgs, store: &ProfileStore) -> anyhow::Result<()> {
    let interactive =
        args.name.is_none() || args.access_key.is_none() || args.access_key_secret.is_none();
    let name = match args.name {
        Some(name) => name,
        None => prompt_line("Enter Profile Name: ")?,
    };
    let access_key = match args.access_key {
        Some(access_key) => access_key,
        None => prompt_line("Enter Access Key: ")?,
    };
    let access_key_secret = match args.access_key_secret {
        Some(secret) => secret,
        None => prompt_password("Enter Access Key Secret: ")?,
    };
    let make_default = if args.make_default {
        true
    } else if interactive {
        prompt_yes_no("Set as Default Profile? (yes/no): ")?
    } else {
        false
    };

    let became_default = store.insert(&name, &access_key, &access_key_secret, make_default)?;
    println!("Profile '{name}' added successfully.");
    if became_default {
        println!("Set as default profile.");
    }
    Ok(())
}
