//! CLI runner - executes commands

use crate::backend::{DuckDbBackend, MemoryBackend};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::Result;
use crate::pagination::{Formatted, ListResult, Page, Paginator};
use crate::params::{PageFields, PageRequest};
use crate::types::JsonValue;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return what it would print
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::List {
                sql,
                page_size,
                current_page,
                last_id,
                count_sql,
            } => {
                let request = page_request(*page_size, *current_page, *last_id);
                let result = self.list(sql, count_sql.as_deref(), request.as_ref())?;
                self.render(&result)
            }
            Commands::Empty {
                page_size,
                current_page,
            } => {
                let request = page_request(*page_size, *current_page, None);
                let result = self.empty(request.as_ref())?;
                self.render(&result)
            }
            Commands::Config => self.load_config()?.to_yaml(),
        }
    }

    /// Load the config file, applying command-line overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PagerConfig::default(),
        };

        if let Some(path) = &self.cli.database {
            config.database.get_or_insert_with(Default::default).path = Some(path.clone());
        }

        Ok(config)
    }

    /// Build the configured paginator over DuckDB
    fn paginator(&self, config: &PagerConfig) -> Result<Paginator<DuckDbBackend>> {
        let backend = DuckDbBackend::from_config(&config.database.clone().unwrap_or_default())?;
        tracing::debug!("Using database {}", backend.location());
        Ok(config.paginator(backend))
    }

    /// Fetch one page of `sql`
    fn list(
        &self,
        sql: &str,
        count_sql: Option<&str>,
        request: Option<&PageFields>,
    ) -> Result<ListResult<JsonValue>> {
        let config = self.load_config()?;
        let paginator = self.paginator(&config)?;

        let backend = paginator.backend();
        let counter = count_sql
            .map(|count_sql| move |_: &str, _: &Page<JsonValue>| backend.count_query(count_sql));

        paginator.fetch_list(
            sql,
            |row| Formatted::from_value(row.clone()),
            counter
                .as_ref()
                .map(|count| count as &dyn Fn(&str, &Page<JsonValue>) -> Result<u64>),
            request.map(|fields| fields as &dyn PageRequest),
        )
    }

    /// Envelope of an empty result; the database is never opened
    fn empty(&self, request: Option<&PageFields>) -> Result<ListResult<JsonValue>> {
        let config = self.load_config()?;
        let paginator = config.paginator(MemoryBackend::<JsonValue>::new());
        Ok(paginator.empty_list(request.map(|fields| fields as &dyn PageRequest)))
    }

    /// Serialize output in the selected format
    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(output)
    }
}

/// Request built from command-line flags; `None` when no flag was given
fn page_request(
    page_size: Option<u32>,
    current_page: Option<u32>,
    last_id: Option<i64>,
) -> Option<PageFields> {
    if page_size.is_none() && current_page.is_none() && last_id.is_none() {
        return None;
    }

    Some(PageFields {
        page_size,
        current_page,
        last_id,
    })
}
