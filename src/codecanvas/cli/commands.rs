use super::render::{
    print_messages, render_config, render_full_items, render_item_list, render_starters,
    render_stats, render_theme,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use codecanvas::api::{
    CanvasApi, CmdResult, ConfigAction, ItemEdit, LibraryQuery, NewItem, SortOrder,
    TemplateFilter,
};
use codecanvas::codec::ImportPolicy;
use codecanvas::config::CanvasConfig;
use codecanvas::dispatch::Intent;
use codecanvas::error::{CanvasError, Result};
use codecanvas::gallery::StarterKind;
use codecanvas::logging;
use codecanvas::model::{Color, Template, Theme};
use codecanvas::render::{render_card, render_item, render_starter};
use codecanvas::store::FsBackend;
use directories::ProjectDirs;
use log::{debug, warn};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

const HOME_ENV: &str = "CODECANVAS_HOME";

struct AppContext {
    api: CanvasApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            template,
            color,
        }) => handle_create(&mut ctx, title, content, template, color),
        Some(Commands::List {
            template,
            sort,
            search,
        }) => handle_list(&mut ctx, &template, &sort, search),
        Some(Commands::Recent) => handle_recent(&mut ctx),
        Some(Commands::View { ids, markup, card }) => handle_view(&mut ctx, ids, markup, card),
        Some(Commands::Edit {
            id,
            title,
            content,
            template,
            color,
        }) => handle_edit(
            &mut ctx,
            ItemEdit {
                id,
                title,
                content,
                template,
                color,
            },
        ),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Export { output }) => handle_export(&mut ctx, output),
        Some(Commands::Import { path, policy }) => handle_import(&mut ctx, path, policy),
        Some(Commands::Theme { value }) => handle_theme(&mut ctx, value),
        Some(Commands::Gallery { kind, markup }) => {
            handle_gallery(&mut ctx, kind.map(Into::into), markup)
        }
        Some(Commands::Use {
            number,
            kind,
            color,
        }) => handle_use(&mut ctx, number, kind.map(Into::into), color),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_dashboard(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!("data directory: {}", data_dir.display());

    let config = CanvasConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        CanvasConfig::default()
    });
    let backend = FsBackend::new(&data_dir);

    Ok(AppContext {
        api: CanvasApi::new(backend, config, data_dir)?,
    })
}

/// `--data-dir`, then `$CODECANVAS_HOME`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "codecanvas", "codecanvas")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CanvasError::Api("Could not determine data directory".into()))
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    template: Template,
    color: Color,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None if !std::io::stdin().is_terminal() => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CanvasError::Io)?;
            buffer
        }
        None => String::new(),
    };

    let result = ctx
        .api
        .dispatch(Intent::Create(NewItem::new(title, content, template, color)))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    template: &str,
    sort: &str,
    search: Option<String>,
) -> Result<()> {
    let query = LibraryQuery {
        filter: template.parse::<TemplateFilter>()?,
        sort: sort.parse::<SortOrder>()?,
        search,
    };
    let result = ctx.api.dispatch(Intent::List(query))?;
    print!("{}", render_item_list(&result.listed_items, "No items found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_recent(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Recent)?;
    print!("{}", render_item_list(&result.listed_items, "No items yet."));
    Ok(())
}

fn handle_dashboard(ctx: &mut AppContext) -> Result<()> {
    let stats = ctx.api.dispatch(Intent::Stats)?;
    if let Some(stats) = &stats.stats {
        print!("{}", render_stats(stats));
        println!();
    }
    handle_recent(ctx)
}

fn handle_view(ctx: &mut AppContext, ids: Vec<i64>, markup: bool, card: bool) -> Result<()> {
    let result = ctx.api.dispatch(Intent::View(ids))?;
    if markup {
        for item in &result.listed_items {
            println!("{}", render_item(item));
        }
    } else if card {
        for item in &result.listed_items {
            println!("{}", render_card(item));
        }
    } else {
        print!("{}", render_full_items(&result.listed_items));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, edit: ItemEdit) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Update(edit))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<i64>) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Delete(ids))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(CanvasError::Api(
            "Refusing to delete every item without --yes".into(),
        ));
    }
    let result = ctx.api.dispatch(Intent::Clear)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Stats)?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Export { dir: output })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf, policy: Option<String>) -> Result<()> {
    let policy = policy.map(|p| p.parse::<ImportPolicy>()).transpose()?;
    let result = ctx.api.dispatch(Intent::Import { path, policy })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<String>) -> Result<()> {
    let intent = match value {
        Some(value) => Intent::SetTheme(Theme::from(value.as_str())),
        None => Intent::GetTheme,
    };
    let result = ctx.api.dispatch(intent)?;
    if result.messages.is_empty() {
        if let Some(theme) = &result.theme {
            print!("{}", render_theme(theme));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_gallery(
    ctx: &mut AppContext,
    kind: Option<StarterKind>,
    markup: bool,
) -> Result<()> {
    let result = ctx.api.dispatch(Intent::Gallery(kind))?;
    if markup {
        for starter in &result.starters {
            println!("{}", render_starter(starter));
        }
    } else {
        print!("{}", render_starters(&result.starters));
    }
    Ok(())
}

fn handle_use(
    ctx: &mut AppContext,
    number: usize,
    kind: Option<StarterKind>,
    color: Color,
) -> Result<()> {
    let result = ctx.api.dispatch(Intent::UseStarter {
        kind,
        number,
        color,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
        (Some(key), None) => {
            let result = ctx.api.dispatch(Intent::Config(ConfigAction::ShowAll))?;
            return print_config_key(&result, &key);
        }
    };

    let result = ctx.api.dispatch(Intent::Config(action))?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config_key(result: &CmdResult, key: &str) -> Result<()> {
    let entries = result
        .config
        .as_ref()
        .map(|c| c.entries())
        .unwrap_or_default();
    match entries.into_iter().find(|(k, _)| *k == key) {
        Some((k, v)) => {
            println!("{} = {}", k, v);
            Ok(())
        }
        None => Err(CanvasError::Validation(format!(
            "Unknown config key: {}",
            key
        ))),
    }
}
