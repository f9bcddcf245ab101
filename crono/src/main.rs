use clap::{Parser, ValueEnum};
use cronolib::{
    config::{LabelSource, Locale, PendingLabels, ReconcilerConfig},
    dashboard::{build_view, build_views, find_contract},
    error::{CronoError, Result},
    formats::{csv::Csv, json::Json, xml::SimpleXml, yaml::Yaml},
    model::ContractView,
    provider::{ContractProvider, FileProvider, InMemory, InputFormat},
    traits::WriteFormat,
};
use std::fs::File;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InFmt {
    Json,
    Yaml,
}

impl From<InFmt> for InputFormat {
    fn from(f: InFmt) -> Self {
        match f {
            InFmt::Json => InputFormat::Json,
            InFmt::Yaml => InputFormat::Yaml,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutFmt {
    Json,
    Yaml,
    Csv,
    Xml,
}

#[derive(Parser, Debug)]
#[command(name = "crono", version, about = "Сверка исполнения контрактов с прогнозными графиками")]
struct Cli {
    /// Входной файл с контрактами (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат входа
    #[arg(long = "in-format", value_enum, default_value = "json")]
    in_format: InFmt,

    /// Формат выхода
    #[arg(long = "out-format", value_enum, default_value = "json")]
    out_format: OutFmt,

    /// YAML с настройками сверки
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Только один контракт, по идентификатору
    #[arg(long = "contract")]
    contract: Option<String>,

    /// Локаль подписей: pt-BR | en-US
    #[arg(long = "locale")]
    locale: Option<Locale>,

    /// Какая дата измерения даёт подпись периода: start | end
    #[arg(long = "label-source")]
    label_source: Option<LabelSource>,

    /// Подписи нереализованных измерений: advance | freeze
    #[arg(long = "pending-labels")]
    pending_labels: Option<PendingLabels>,

    /// Длина оси для контрактов без измерений
    #[arg(long = "generic-periods")]
    generic_periods: Option<usize>,
}

impl Cli {
    fn reconciler_config(&self) -> Result<ReconcilerConfig> {
        let mut config = match &self.config {
            Some(path) => ReconcilerConfig::load(path)?,
            None => ReconcilerConfig::default(),
        };
        // флаги важнее файла
        if let Some(l) = self.locale {
            config.locale = l;
        }
        if let Some(s) = self.label_source {
            config.label_source = s;
        }
        if let Some(p) = self.pending_labels {
            config.pending_labels = p;
        }
        if let Some(n) = self.generic_periods {
            config.generic_periods = n;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.reconciler_config()?;

    // источник: файл или stdin
    let format = InputFormat::from(cli.in_format);
    let provider: Box<dyn ContractProvider> = match &cli.input {
        Some(path) => Box::new(FileProvider::new(path, format)),
        None => Box::new(InMemory(format.read(io::stdin().lock())?)),
    };

    let views: Vec<ContractView> = match &cli.contract {
        Some(id) => {
            let contracts = provider.contracts()?;
            vec![build_view(find_contract(&contracts, id)?, &config)]
        }
        None => build_views(provider.as_ref(), &config)?,
    };
    info!(count = views.len(), "views built");

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        OutFmt::Json => Json::write(&mut writer, &views),
        OutFmt::Yaml => Yaml::write(&mut writer, &views),
        OutFmt::Csv => Csv::write(&mut writer, &views),
        OutFmt::Xml => SimpleXml::write(&mut writer, &views),
    }?;

    writer.flush().map_err(CronoError::from)
}
