use clap::Parser;
use landmarks::application::{
    init::init, ConfigService, HomescreenInputBoundary, HomescreenInputData, HomescreenInteractor,
    NoteRepository,
};
use landmarks::cli::{
    format_account_list, format_landmark_list, format_note_list, Cli, Commands, ConsolePresenter,
    HomeOutcome, NoteCommand, UserCommand,
};
use landmarks::domain::NoteId;
use landmarks::error::{LandmarksError, Result};
use landmarks::infrastructure::{Config, TomlAccountStore, Workspace};
use landmarks::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let _logger = match init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_repository() -> Result<(Config, NoteRepository<TomlAccountStore>)> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let repo = NoteRepository::open(workspace.account_store(&config))?;
    Ok((config, repo))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            Ok(())
        }
        Commands::User { command } => {
            let (_, mut repo) = open_repository()?;
            match command {
                UserCommand::Add { name } => {
                    repo.add_account(&name)?;
                    println!("Added user {}", name);
                }
                UserCommand::List => {
                    print!("{}", format_account_list(repo.accounts()));
                }
            }
            Ok(())
        }
        Commands::Note { command } => {
            let (_, mut repo) = open_repository()?;
            match command {
                NoteCommand::Add {
                    user,
                    landmark,
                    text,
                } => {
                    let note = repo.add_note(&user, &landmark, &text)?;
                    println!("{}", note.id);
                }
                NoteCommand::Rm { id } => {
                    let note_id: NoteId = id.parse().map_err(LandmarksError::InvalidNoteId)?;
                    if repo.delete_note(&note_id)? {
                        println!("Deleted note {}", note_id);
                    } else {
                        println!("No note with id {}", note_id);
                    }
                }
            }
            Ok(())
        }
        Commands::Notes { user, landmark } => {
            let (config, repo) = open_repository()?;
            let notes = match (user, landmark) {
                (_, Some(landmark)) => repo.notes_for_landmark(&landmark),
                (Some(user), None) => repo.notes_for_user(&user),
                (None, None) => {
                    let user = config.get_default_user().ok_or_else(|| {
                        LandmarksError::Config(
                            "No user given. Pass --user or --landmark, or set default_user: \
                            landmarks config default_user <NAME>"
                                .to_string(),
                        )
                    })?;
                    repo.notes_for_user(&user)
                }
            };
            print!("{}", format_note_list(&notes));
            Ok(())
        }
        Commands::Landmarks => {
            let (_, repo) = open_repository()?;
            print!("{}", format_landmark_list(&repo.landmarks()));
            Ok(())
        }
        Commands::Home { action } => {
            let mut interactor = HomescreenInteractor::new(ConsolePresenter::new());
            interactor.execute(HomescreenInputData::new(action));
            match interactor.into_presenter().into_outcome() {
                Some(HomeOutcome::Navigate(view)) => {
                    println!("{}", view);
                    Ok(())
                }
                Some(HomeOutcome::Failed(msg)) => Err(LandmarksError::UnknownAction(msg)),
                None => Err(LandmarksError::Internal(
                    "homescreen produced no outcome".to_string(),
                )),
            }
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!(
                    "default_user = {}",
                    config.default_user.as_deref().unwrap_or("")
                );
                println!("data_file = {}", config.data_file);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: landmarks config [--list | <key> [<value>]]");
                println!("Valid keys: default_user, data_file, created");
                Ok(())
            }
        }
    }
}
