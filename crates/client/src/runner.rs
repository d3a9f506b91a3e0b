//! Command runner. Parses text commands and executes them against
//! [`GuideState`], rendering results as plain text.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use nightreign_domain::{Category, DomainError, Selection};
use nightreign_shared::SearchResult;

use crate::application::{Api, ServiceError};
use crate::state::{GuideState, Operation};

pub const HELP: &str = "\
Commands:
  summary                          collection sizes and loading status
  list <category>                  list a category
  filter <category> key=value ...  filter bosses, characters or creatures
  clear-filters                    reset all filters and reload
  search <text>                    search every category
  show <category> <id>             open an entry in the detail view
  close                            close the detail view
  draft <field>=<value> ...        edit the custom build draft
  submit                           submit the custom build draft
  refresh                          reload the catalog
  errors                           show per-operation errors
  help | quit";

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Category(#[from] DomainError),
    #[error("Expected key=value, got '{0}'")]
    InvalidPair(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Summary,
    List(Category),
    Filter {
        category: Category,
        values: Vec<(String, String)>,
    },
    ClearFilters,
    Search(String),
    Show(Selection),
    Close,
    Draft(Vec<(String, String)>),
    Submit,
    Refresh,
    Errors,
    Help,
    Quit,
}

fn parse_pairs<'a>(args: impl Iterator<Item = &'a str>) -> Result<Vec<(String, String)>, CommandError> {
    args.map(|arg| {
        arg.split_once('=')
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .ok_or_else(|| CommandError::InvalidPair(arg.to_string()))
    })
    .collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let category = |arg: Option<&str>| -> Result<Category, CommandError> {
            Ok(arg.ok_or(CommandError::MissingArgument("category"))?.parse()?)
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "summary" => Ok(Self::Summary),
            "list" => Ok(Self::List(category(args.next())?)),
            "filter" => {
                let category = category(args.next())?;
                Ok(Self::Filter {
                    category,
                    values: parse_pairs(args)?,
                })
            }
            "clear-filters" => Ok(Self::ClearFilters),
            // Search text keeps its inner spacing.
            "search" => Ok(Self::Search(rest.to_string())),
            "show" => {
                let category = category(args.next())?;
                let id = args.next().ok_or(CommandError::MissingArgument("id"))?;
                Ok(Self::Show(Selection::of(category, id)))
            }
            "close" => Ok(Self::Close),
            "draft" => Ok(Self::Draft(parse_pairs(rest.split(',').filter(|s| !s.trim().is_empty()))?)),
            "submit" => Ok(Self::Submit),
            "refresh" => Ok(Self::Refresh),
            "errors" => Ok(Self::Errors),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub struct RunnerDeps {
    pub api: Api,
}

pub struct Runner {
    state: Arc<GuideState>,
}

impl Runner {
    pub fn new(deps: RunnerDeps) -> Self {
        Self {
            state: Arc::new(GuideState::new(deps.api)),
        }
    }

    pub fn state(&self) -> &Arc<GuideState> {
        &self.state
    }

    /// Execute one command and render its output.
    pub async fn execute(&self, command: Command) -> Result<String, ServiceError> {
        let state = &self.state;
        match command {
            Command::Summary => Ok(self.summary().await),
            Command::List(category) => Ok(self.list(category).await),
            Command::Filter { category, values } => {
                for (key, value) in values {
                    state.set_filter(category, key, value).await;
                }
                state.apply_filters(category).await?;
                Ok(self.list(category).await)
            }
            Command::ClearFilters => {
                state.clear_filters().await?;
                Ok("Filters cleared".to_string())
            }
            Command::Search(query) => Ok(match state.search(&query).await? {
                Some(result) => render_search(&result),
                None => "Search cleared".to_string(),
            }),
            Command::Show(selection) => {
                if let Err(e) = state.select(selection).await {
                    // The entry itself can still be shown without recommendations.
                    tracing::warn!(error = %e, "Showing detail without recommendations");
                }
                Ok(match state.detail_view().await? {
                    Some(view) => {
                        let mut lines = vec![view.title().to_string()];
                        lines.extend(
                            view.summary_lines()
                                .into_iter()
                                .filter(|(_, value)| !value.is_empty())
                                .map(|(label, value)| format!("  {}: {}", label, value)),
                        );
                        lines.join("\n")
                    }
                    None => "Not found".to_string(),
                })
            }
            Command::Close => {
                state.close_detail().await;
                Ok("Detail closed".to_string())
            }
            Command::Draft(fields) => {
                let mut unknown = Vec::new();
                for (field, value) in fields {
                    if !state.update_draft(&field, value).await {
                        unknown.push(field);
                    }
                }
                let draft = state.draft().await;
                let mut out = match draft.validate() {
                    Ok(()) => "Draft complete".to_string(),
                    Err(e) => format!("Draft: {}", e),
                };
                if !unknown.is_empty() {
                    out.push_str(&format!("\nUnknown fields: {}", unknown.join(", ")));
                }
                Ok(out)
            }
            Command::Submit => {
                let build = state.submit_custom_build().await?;
                Ok(format!("Created build '{}' ({})", build.name, build.id))
            }
            Command::Refresh => {
                state.refresh().await?;
                Ok(self.summary().await)
            }
            Command::Errors => {
                let errors = state.errors().await;
                if errors.is_empty() {
                    return Ok("No errors".to_string());
                }
                Ok(errors
                    .iter()
                    .map(|(op, e)| format!("{}: {}", op, e))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    async fn summary(&self) -> String {
        let catalog = self.state.catalog().await;
        let mut lines: Vec<String> = Category::ALL
            .into_iter()
            .map(|c| format!("{:<16} {}", c.display_name(), catalog.len(c)))
            .collect();
        if self.state.loading().is_loading() {
            lines.push("Loading...".to_string());
        }
        if let Some(e) = self.state.error(Operation::Load).await {
            lines.push(format!("Last load failed: {}", e));
        }
        lines.join("\n")
    }

    async fn list(&self, category: Category) -> String {
        let catalog = self.state.catalog().await;
        let entries = catalog.entries(category);
        if entries.is_empty() {
            return format!("No {}", category.display_name().to_lowercase());
        }
        entries
            .iter()
            .map(|e| format!("{:<28} {}", e.entry_id(), e.entry_name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Read commands line by line from stdin until EOF or `quit`.
    pub async fn run_interactive(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        while let Some(line) = lines.next_line().await? {
            let output = match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await.unwrap_or_else(|e| format!("Error: {}", e)),
                Err(CommandError::Empty) => String::new(),
                Err(e) => format!("Error: {}", e),
            };
            if !output.is_empty() {
                stdout.write_all(output.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }
        Ok(())
    }
}

fn render_search(result: &SearchResult) -> String {
    let mut lines = vec![format!(
        "{} result(s) for '{}'",
        result.total_results, result.query
    )];
    let sections: [(&str, Vec<&str>); 8] = [
        ("Bosses", result.bosses.iter().map(|b| b.name.as_str()).collect()),
        ("Characters", result.characters.iter().map(|c| c.name.as_str()).collect()),
        ("Builds", result.builds.iter().map(|b| b.name.as_str()).collect()),
        ("Achievements", result.achievements.iter().map(|a| a.name.as_str()).collect()),
        ("Creatures", result.creatures.iter().map(|c| c.name.as_str()).collect()),
        ("Secrets", result.secrets.iter().map(|s| s.name.as_str()).collect()),
        ("Weapon Skills", result.weapon_skills.iter().map(|s| s.name.as_str()).collect()),
        ("Weapon Passives", result.weapon_passives.iter().map(|p| p.name.as_str()).collect()),
    ];
    for (label, names) in sections {
        if !names.is_empty() {
            lines.push(format!("  {}: {}", label, names.join(", ")));
        }
    }
    lines.join("\n")
}
